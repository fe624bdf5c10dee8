//! # Petty-Cash Backend
//!
//! Core library for the petty-cash expense tracker.
//!
//! This crate is the orchestration layer that brings together:
//! - **Domain**: the expense lifecycle, transitions, and derived reports
//! - **Storage**: the JSON persistence slot
//! - **IO**: the mapping boundary a view layer consumes
//!
//! The backend is UI-agnostic: the view layer reads `list()`, `get()` and the
//! report outputs, and sends create/approve/reject intents back. All work is
//! synchronous and single-threaded; one user intent runs to completion
//! (mutation, then write-through persistence) before the next.

pub mod domain;
pub mod io;
pub mod storage;

use crate::domain::{ExpenseError, ExpenseService, ProviderService, ReportService};
use crate::storage::{Connection, JsonConnection};
use anyhow::Result;
use log::info;

/// Main application state that holds all services.
pub struct AppState<C: Connection> {
    pub expense_service: ExpenseService<C>,
    pub report_service: ReportService,
    pub provider_service: ProviderService,
}

/// Initialize the backend against the default data directory.
pub fn initialize_backend() -> Result<AppState<JsonConnection>> {
    info!("Setting up storage");
    let connection = JsonConnection::new_default()?;

    Ok(initialize_backend_with(&connection)?)
}

/// Initialize the backend against an existing connection. Rehydrates the
/// expense store, seeding the demo dataset when the slot is empty.
pub fn initialize_backend_with<C: Connection>(
    connection: &C,
) -> Result<AppState<C>, ExpenseError> {
    info!("Setting up domain services");
    let expense_service = ExpenseService::new(connection)?;
    let report_service = ReportService::new();
    let provider_service = ProviderService::new();

    Ok(AppState {
        expense_service,
        report_service,
        provider_service,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed::DEFAULT_DAILY_LIMIT;
    use crate::storage::json::test_utils::TestEnvironment;
    use shared::{CreateExpenseRequest, ExpenseCategory, ExpenseStatus};

    #[test]
    fn test_full_lifecycle_through_app_state() {
        let env = TestEnvironment::new().unwrap();
        let mut state = initialize_backend_with(&env.connection).unwrap();

        // Seeded dashboard numbers.
        let summary = state
            .report_service
            .daily_summary(state.expense_service.expenses(), DEFAULT_DAILY_LIMIT);
        assert!((summary.total_spent - 2286.50).abs() < 1e-9);
        assert_eq!(summary.pending_count, 4);
        assert_eq!(summary.rejected_count, 1);

        // A reviewer approves the first pending expense.
        state.expense_service.approve("1", "Admin User").unwrap();
        let summary = state
            .report_service
            .daily_summary(state.expense_service.expenses(), DEFAULT_DAILY_LIMIT);
        assert_eq!(summary.pending_count, 3);
        assert_eq!(summary.approved_count, 1);

        // A user submits a new expense from a blacklisted provider; the
        // blacklist lookup is available to flag it.
        let created = state
            .expense_service
            .create(CreateExpenseRequest {
                description: "Compra de insumos".to_string(),
                amount: 80.0,
                currency: "S/.".to_string(),
                date: Some("2026-02-15".to_string()),
                category: ExpenseCategory::Operations,
                user: "Ana Patricia Torres".to_string(),
                code: None,
                provider: Some("Insumos Pro".to_string()),
                area: Some("Operaciones".to_string()),
                responsible_area: None,
                observations: None,
                receipt_image: None,
            })
            .unwrap();
        assert_eq!(created.status, ExpenseStatus::Pending);
        assert!(state
            .provider_service
            .is_blacklisted(created.provider.as_deref().unwrap())
            .is_some());

        // Category totals still partition the new grand total.
        let by_category = state
            .report_service
            .by_category(state.expense_service.expenses());
        let category_sum: f64 = by_category.iter().map(|c| c.total).sum();
        let summary = state
            .report_service
            .daily_summary(state.expense_service.expenses(), DEFAULT_DAILY_LIMIT);
        assert!((category_sum - summary.total_spent).abs() < 1e-9);
    }
}
