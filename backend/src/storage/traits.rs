//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use crate::domain::models::Expense;
use anyhow::Result;

/// Trait defining the interface for the expense persistence slot.
///
/// The whole collection lives under one fixed key: it is loaded once at
/// startup and rewritten in full after every mutation. There is no
/// record-level access and no schema versioning. All operations are
/// synchronous; this core runs single-threaded with no background I/O.
pub trait ExpenseStorage: Send + Sync {
    /// Load the persisted collection. `None` means the slot has never been
    /// written and the caller should fall back to the seed dataset.
    fn load_expenses(&self) -> Result<Option<Vec<Expense>>>;

    /// Overwrite the slot with the full collection. The write must be atomic
    /// at the slot's granularity; partial-write recovery is not attempted.
    fn save_expenses(&self, expenses: &[Expense]) -> Result<()>;
}

/// Trait defining the interface for storage connections.
///
/// Abstracts the concrete connection type and provides factory methods for
/// creating repositories, so the domain layer works with any storage backend
/// without knowing the implementation.
pub trait Connection: Send + Sync + Clone {
    /// The type of ExpenseStorage this connection creates
    type ExpenseRepository: ExpenseStorage;

    /// Create a new expense repository for this connection
    fn create_expense_repository(&self) -> Self::ExpenseRepository;
}
