//! JSON file storage backend.
//!
//! Persists the whole expense collection as one JSON document in a fixed
//! slot file, matching the original app's single key-value entry.

pub mod connection;
pub mod expense_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::JsonConnection;
pub use expense_repository::ExpenseRepository;
