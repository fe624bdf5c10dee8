//! # Storage Module
//!
//! Handles data persistence for the petty-cash tracker.
//!
//! This module abstracts away the specific storage implementation and
//! provides a consistent interface for persisting and retrieving the expense
//! collection. The implementation can be swapped (JSON file, SQLite, cloud
//! key-value store) without affecting the domain logic.
//!
//! ## Key Responsibilities
//!
//! - **Data Persistence**: writing the full collection after every mutation
//! - **Data Retrieval**: rehydrating the collection at startup
//! - **Storage Abstraction**: one API regardless of backend
//!
//! ## Current Implementation
//!
//! A single JSON document in a fixed slot file, written via temp file and
//! atomic rename. Durability relies on the rename being atomic at the file
//! system's granularity; no partial-write recovery is attempted above it.

pub mod json;
pub mod traits;

pub use json::{ExpenseRepository, JsonConnection};
pub use traits::{Connection, ExpenseStorage};
