//! Error taxonomy for the expense lifecycle.
//!
//! Every failure is terminal for the operation that triggered it; no retries
//! happen anywhere in this core. Callers (the view layer) are expected to
//! match on the variant for user-facing messaging.

use crate::domain::models::ExpenseStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Bad create input: empty description or non-positive amount.
    #[error("validation failed: {0}")]
    Validation(String),
    /// Unknown expense id.
    #[error("expense \"{0}\" not found")]
    NotFound(String),
    /// Approve/reject attempted on an expense that is not pending.
    #[error("expense \"{id}\" cannot transition from {from}")]
    IllegalTransition { id: String, from: ExpenseStatus },
    /// Write-through to the storage slot failed. The in-memory mutation is
    /// kept; a crash before the next successful write loses it.
    #[error("persistence failed: {0}")]
    Persistence(#[source] anyhow::Error),
}

// Persistence wraps anyhow::Error, which has no PartialEq; compare rendered
// messages there so tests can assert on variants.
impl PartialEq for ExpenseError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::NotFound(a), Self::NotFound(b)) => a == b,
            (
                Self::IllegalTransition { id: a, from: fa },
                Self::IllegalTransition { id: b, from: fb },
            ) => a == b && fa == fb,
            (Self::Persistence(a), Self::Persistence(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ExpenseError::NotFound("42".to_string());
        assert_eq!(err.to_string(), "expense \"42\" not found");

        let err = ExpenseError::IllegalTransition {
            id: "4".to_string(),
            from: ExpenseStatus::Rejected,
        };
        assert_eq!(
            err.to_string(),
            "expense \"4\" cannot transition from Rechazado"
        );
    }

    #[test]
    fn test_variant_equality() {
        assert_eq!(
            ExpenseError::Validation("x".to_string()),
            ExpenseError::Validation("x".to_string())
        );
        assert_ne!(
            ExpenseError::Validation("x".to_string()),
            ExpenseError::NotFound("x".to_string())
        );
    }
}
