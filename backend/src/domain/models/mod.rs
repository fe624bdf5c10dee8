//! Domain models for the petty-cash tracker backend.

pub mod expense;
pub mod provider;

pub use expense::{
    AlertSeverity, Expense, ExpenseAlert, ExpenseCategory, ExpenseStatus, HistoryEntry,
};
pub use provider::BlacklistedProvider;
