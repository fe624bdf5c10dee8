//! # Domain Module
//!
//! Business logic for the petty-cash tracker.
//!
//! This module encapsulates the expense lifecycle and the derived views over
//! it, independent of any UI framework or storage backend.
//!
//! ## Module Organization
//!
//! - **expense_service**: the expense store and the approve/reject state
//!   machine, with write-through persistence
//! - **report_service**: pure aggregations (daily summary, category/area
//!   breakdowns, repeat-purchase patterns)
//! - **provider_service**: read-only provider blacklist lookups
//! - **seed**: the fixed demo dataset and tuning constants
//! - **models**: the domain entities
//!
//! ## Business Rules
//!
//! - An expense is created Pending with a non-empty description and a
//!   strictly positive amount
//! - Status changes only through approve/reject, and only from Pending;
//!   Approved and Rejected are terminal
//! - Every transition appends a history snapshot; history is never edited
//! - Transitions never touch amount, description, or category
//! - Derived summaries are recomputed from the collection on every call,
//!   never stored

pub mod errors;
pub mod expense_service;
pub mod models;
pub mod provider_service;
pub mod report_service;
pub mod seed;

pub use errors::ExpenseError;
pub use expense_service::ExpenseService;
pub use provider_service::ProviderService;
pub use report_service::ReportService;
