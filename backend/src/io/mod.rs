//! # IO Module
//!
//! Interface layer between the backend services and a view layer. The core
//! has no network surface; what lives here is the mapping between domain
//! models and the shared DTOs the view consumes.

pub mod mappers;

pub use mappers::ExpenseMapper;
