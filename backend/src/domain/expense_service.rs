//! Expense store and status transitions.
//!
//! `ExpenseService` is the single source of truth for the expense collection:
//! it rehydrates from the persistence slot at construction (seeding the demo
//! dataset when the slot is empty), validates and creates new records, and
//! applies the approve/reject state machine. Every successful mutation writes
//! the full collection back through the repository.
//!
//! Persistence failures surface as [`ExpenseError::Persistence`] but do not
//! roll back the in-memory mutation: a crash before the next successful write
//! loses the update. Accepted limitation of the single-slot design.

use crate::domain::errors::ExpenseError;
use crate::domain::models::{Expense, ExpenseStatus, HistoryEntry};
use crate::domain::seed;
use crate::io::mappers::ExpenseMapper;
use crate::storage::{Connection, ExpenseStorage};
use chrono::{Local, NaiveDate};
use log::{error, info};
use shared::{CreateExpenseRequest, Expense as SharedExpense};
use uuid::Uuid;

/// Short day label used in history entries, e.g. "13 Feb".
fn day_label(date: NaiveDate) -> String {
    date.format("%-d %b").to_string()
}

pub struct ExpenseService<C: Connection> {
    expense_repository: C::ExpenseRepository,
    /// Ordered collection, most-recent-first. Single source of truth.
    expenses: Vec<Expense>,
}

impl<C: Connection> ExpenseService<C> {
    /// Build the service, rehydrating from the persistence slot. An absent
    /// slot seeds the fixed demo dataset and persists it right away so a
    /// restart sees the same state.
    pub fn new(connection: &C) -> Result<Self, ExpenseError> {
        let expense_repository = connection.create_expense_repository();

        let expenses = match expense_repository
            .load_expenses()
            .map_err(ExpenseError::Persistence)?
        {
            Some(expenses) => {
                info!("Rehydrated {} expenses from storage", expenses.len());
                expenses
            }
            None => {
                let seeded = seed::seed_expenses();
                info!("Empty storage slot, seeding {} demo expenses", seeded.len());
                expense_repository
                    .save_expenses(&seeded)
                    .map_err(ExpenseError::Persistence)?;
                seeded
            }
        };

        Ok(Self {
            expense_repository,
            expenses,
        })
    }

    /// Validate and create a new expense. The record starts Pending with a
    /// single history entry and is inserted at the front of the collection.
    pub fn create(&mut self, request: CreateExpenseRequest) -> Result<SharedExpense, ExpenseError> {
        let description = request.description.trim().to_string();
        if description.is_empty() {
            return Err(ExpenseError::Validation(
                "description must not be empty".to_string(),
            ));
        }
        if !(request.amount > 0.0) {
            return Err(ExpenseError::Validation(format!(
                "amount must be greater than zero, got {}",
                request.amount
            )));
        }

        let date = match request.date {
            Some(ref raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                ExpenseError::Validation(format!("invalid date \"{}\", expected YYYY-MM-DD", raw))
            })?,
            None => Local::now().date_naive(),
        };

        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            description,
            amount: request.amount,
            currency: request.currency,
            date,
            status: ExpenseStatus::Pending,
            category: ExpenseMapper::to_domain_category(request.category),
            user: request.user.clone(),
            receipt_image: request
                .receipt_image
                .or_else(|| Some(seed::RECEIPT_PLACEHOLDER.to_string())),
            code: request.code,
            provider: request.provider,
            area: request.area,
            responsible_area: request.responsible_area,
            observations: request.observations,
            alerts: vec![],
            history: vec![HistoryEntry {
                date: day_label(date),
                user: request.user,
                amount: request.amount,
                status: ExpenseStatus::Pending,
                detail: None,
            }],
        };

        info!(
            "Creating expense {} ({} {})",
            expense.id, expense.currency, expense.amount
        );
        self.expenses.insert(0, expense.clone());
        self.persist()?;

        Ok(ExpenseMapper::to_dto(expense))
    }

    /// Current snapshot, most-recent-first. Side-effect free.
    pub fn list(&self) -> Vec<SharedExpense> {
        self.expenses
            .iter()
            .cloned()
            .map(ExpenseMapper::to_dto)
            .collect()
    }

    /// Look up one expense by id.
    pub fn get(&self, id: &str) -> Result<SharedExpense, ExpenseError> {
        self.expenses
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .map(ExpenseMapper::to_dto)
            .ok_or_else(|| ExpenseError::NotFound(id.to_string()))
    }

    /// Approve a pending expense. Legal only from Pending; appends a history
    /// entry with today's date and the acting reviewer.
    pub fn approve(&mut self, id: &str, actor: &str) -> Result<SharedExpense, ExpenseError> {
        self.transition(id, ExpenseStatus::Approved, actor, None)
    }

    /// Reject a pending expense, optionally recording the reason in the
    /// history entry.
    pub fn reject(
        &mut self,
        id: &str,
        actor: &str,
        detail: Option<String>,
    ) -> Result<SharedExpense, ExpenseError> {
        self.transition(id, ExpenseStatus::Rejected, actor, detail)
    }

    /// Domain snapshot for the report functions, most-recent-first.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    fn transition(
        &mut self,
        id: &str,
        target: ExpenseStatus,
        actor: &str,
        detail: Option<String>,
    ) -> Result<SharedExpense, ExpenseError> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ExpenseError::NotFound(id.to_string()))?;

        let current = self.expenses[index].status;
        if current != ExpenseStatus::Pending {
            return Err(ExpenseError::IllegalTransition {
                id: id.to_string(),
                from: current,
            });
        }

        // Transitions change status and append history, nothing else.
        let expense = &mut self.expenses[index];
        expense.status = target;
        expense.history.push(HistoryEntry {
            date: day_label(Local::now().date_naive()),
            user: actor.to_string(),
            amount: expense.amount,
            status: target,
            detail,
        });

        info!("Expense {} transitioned {} -> {}", id, current, target);
        let snapshot = expense.clone();
        self.persist()?;

        Ok(ExpenseMapper::to_dto(snapshot))
    }

    fn persist(&self) -> Result<(), ExpenseError> {
        self.expense_repository
            .save_expenses(&self.expenses)
            .map_err(|e| {
                error!("Write-through failed, in-memory state is ahead of storage: {e:#}");
                ExpenseError::Persistence(e)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json::test_utils::TestEnvironment;
    use crate::storage::json::JsonConnection;
    use shared::{
        ExpenseCategory as SharedCategory, ExpenseStatus as SharedStatus,
    };

    fn setup() -> (TestEnvironment, ExpenseService<JsonConnection>) {
        let env = TestEnvironment::new().expect("Failed to create test environment");
        let service = ExpenseService::new(&env.connection).expect("Failed to create service");
        (env, service)
    }

    fn valid_request() -> CreateExpenseRequest {
        CreateExpenseRequest {
            description: "Compra de tornillos".to_string(),
            amount: 45.0,
            currency: "S/.".to_string(),
            date: Some("2026-02-15".to_string()),
            category: SharedCategory::Maintenance,
            user: "Maria Lopez".to_string(),
            code: None,
            provider: Some("Ferretería Central".to_string()),
            area: Some("Mantenimiento".to_string()),
            responsible_area: None,
            observations: None,
            receipt_image: None,
        }
    }

    #[test]
    fn test_seeds_demo_data_when_slot_absent() {
        let (_env, service) = setup();

        let expenses = service.list();
        assert_eq!(expenses.len(), 5);
        let ids: Vec<&str> = expenses.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_rehydrates_persisted_state() {
        let env = TestEnvironment::new().unwrap();
        {
            let mut service = ExpenseService::new(&env.connection).unwrap();
            service.approve("1", "Admin User").unwrap();
        }

        // A fresh service over the same slot sees the approval.
        let service = ExpenseService::new(&env.connection).unwrap();
        assert_eq!(service.get("1").unwrap().status, SharedStatus::Approved);
        assert_eq!(service.get("1").unwrap().history.len(), 2);
    }

    #[test]
    fn test_create_yields_pending_record_with_one_history_entry() {
        let (_env, mut service) = setup();

        let created = service.create(valid_request()).unwrap();
        assert_eq!(created.status, SharedStatus::Pending);
        assert_eq!(created.history.len(), 1);
        assert_eq!(created.history[0].status, SharedStatus::Pending);
        assert_eq!(created.history[0].user, "Maria Lopez");

        // Fresh id, unique across the store.
        let existing: Vec<String> = service.list().iter().map(|e| e.id.clone()).collect();
        assert_eq!(existing.iter().filter(|id| **id == created.id).count(), 1);

        // Inserted at the front, most-recent-first.
        assert_eq!(service.list()[0].id, created.id);
        assert_eq!(service.list().len(), 6);
    }

    #[test]
    fn test_create_defaults_receipt_placeholder() {
        let (_env, mut service) = setup();
        let created = service.create(valid_request()).unwrap();
        assert_eq!(created.receipt_image.as_deref(), Some("/assets/receipt.svg"));
    }

    #[test]
    fn test_create_rejects_empty_description() {
        let (_env, mut service) = setup();

        let mut request = valid_request();
        request.description = "   ".to_string();
        let err = service.create(request).unwrap_err();
        assert!(matches!(err, ExpenseError::Validation(_)));

        // Store unchanged on failure.
        assert_eq!(service.list().len(), 5);
    }

    #[test]
    fn test_create_rejects_non_positive_amount() {
        let (_env, mut service) = setup();

        for amount in [0.0, -10.0] {
            let mut request = valid_request();
            request.amount = amount;
            let err = service.create(request).unwrap_err();
            assert!(matches!(err, ExpenseError::Validation(_)));
        }
        assert_eq!(service.list().len(), 5);
    }

    #[test]
    fn test_create_rejects_malformed_date() {
        let (_env, mut service) = setup();

        let mut request = valid_request();
        request.date = Some("15/02/2026".to_string());
        let err = service.create(request).unwrap_err();
        assert!(matches!(err, ExpenseError::Validation(_)));
        assert_eq!(service.list().len(), 5);
    }

    #[test]
    fn test_get_unknown_id_fails() {
        let (_env, service) = setup();
        let err = service.get("nope").unwrap_err();
        assert_eq!(err, ExpenseError::NotFound("nope".to_string()));
    }

    #[test]
    fn test_approve_moves_pending_to_approved() {
        let (_env, mut service) = setup();

        let before = service.get("1").unwrap();
        assert_eq!(before.history.len(), 1);

        service.approve("1", "Admin User").unwrap();

        let after = service.get("1").unwrap();
        assert_eq!(after.status, SharedStatus::Approved);
        assert_eq!(after.history.len(), 2);
        assert_eq!(after.history[1].status, SharedStatus::Approved);
        assert_eq!(after.history[1].user, "Admin User");
        // Spanish wire label, as the view renders it.
        assert_eq!(
            serde_json::to_string(&after.status).unwrap(),
            "\"Aprobado\""
        );

        // Transitions never touch amount or description.
        assert_eq!(after.amount, before.amount);
        assert_eq!(after.description, before.description);
    }

    #[test]
    fn test_reject_records_detail_in_history() {
        let (_env, mut service) = setup();

        let rejected = service
            .reject("2", "Admin User", Some("Proveedor no válido".to_string()))
            .unwrap();
        assert_eq!(rejected.status, SharedStatus::Rejected);
        assert_eq!(
            rejected.history.last().unwrap().detail.as_deref(),
            Some("Proveedor no válido")
        );
    }

    #[test]
    fn test_transition_from_terminal_state_fails() {
        let (_env, mut service) = setup();

        // Seed expense "4" is already rejected.
        let err = service.approve("4", "Admin User").unwrap_err();
        assert_eq!(
            err,
            ExpenseError::IllegalTransition {
                id: "4".to_string(),
                from: ExpenseStatus::Rejected,
            }
        );

        // Store unchanged on failure.
        let unchanged = service.get("4").unwrap();
        assert_eq!(unchanged.status, SharedStatus::Rejected);
        assert_eq!(unchanged.history.len(), 2);
    }

    #[test]
    fn test_double_approve_fails() {
        let (_env, mut service) = setup();

        service.approve("1", "Admin User").unwrap();
        let err = service.approve("1", "Admin User").unwrap_err();
        assert_eq!(
            err,
            ExpenseError::IllegalTransition {
                id: "1".to_string(),
                from: ExpenseStatus::Approved,
            }
        );
        assert_eq!(service.get("1").unwrap().history.len(), 2);
    }

    #[test]
    fn test_transition_on_unknown_id_fails() {
        let (_env, mut service) = setup();
        let err = service.reject("99", "Admin User", None).unwrap_err();
        assert_eq!(err, ExpenseError::NotFound("99".to_string()));
    }

    #[test]
    fn test_list_is_idempotent() {
        let (_env, service) = setup();
        assert_eq!(service.list(), service.list());
    }

    /// Storage that rehydrates the seed but fails every write, for exercising
    /// the write-through failure policy.
    #[derive(Clone)]
    struct UnwritableConnection;

    struct UnwritableRepository;

    impl ExpenseStorage for UnwritableRepository {
        fn load_expenses(&self) -> anyhow::Result<Option<Vec<Expense>>> {
            Ok(Some(seed::seed_expenses()))
        }

        fn save_expenses(&self, _expenses: &[Expense]) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("slot file is not writable"))
        }
    }

    impl Connection for UnwritableConnection {
        type ExpenseRepository = UnwritableRepository;

        fn create_expense_repository(&self) -> Self::ExpenseRepository {
            UnwritableRepository
        }
    }

    #[test]
    fn test_failed_write_surfaces_error_but_keeps_created_expense() {
        let mut service = ExpenseService::new(&UnwritableConnection).unwrap();

        let err = service.create(valid_request()).unwrap_err();
        assert!(matches!(err, ExpenseError::Persistence(_)));

        // In-memory state stays ahead of storage: the record is in the store
        // even though the write-through failed.
        let expenses = service.list();
        assert_eq!(expenses.len(), 6);
        assert_eq!(expenses[0].description, "Compra de tornillos");
    }

    #[test]
    fn test_failed_write_surfaces_error_but_keeps_transition() {
        let mut service = ExpenseService::new(&UnwritableConnection).unwrap();

        let err = service.approve("1", "Admin User").unwrap_err();
        assert!(matches!(err, ExpenseError::Persistence(_)));

        let expense = service.get("1").unwrap();
        assert_eq!(expense.status, SharedStatus::Approved);
        assert_eq!(expense.history.len(), 2);
    }
}
