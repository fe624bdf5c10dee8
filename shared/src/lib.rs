//! Shared types for the petty-cash tracker.
//!
//! Everything that crosses the boundary between the backend services and a
//! view layer lives here: the expense DTO, its status/category enums, the
//! derived report rows, and the create request. Dates are plain strings on
//! this side of the boundary; the backend works with typed dates internally.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of an expense.
///
/// The wire values are the Spanish labels the original mobile app displays,
/// so persisted data and UI strings stay in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseStatus {
    #[serde(rename = "Pendiente")]
    Pending,
    #[serde(rename = "Aprobado")]
    Approved,
    #[serde(rename = "Rechazado")]
    Rejected,
    #[serde(rename = "Observado")]
    Observed,
}

impl ExpenseStatus {
    /// Terminal states admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ExpenseStatus::Approved | ExpenseStatus::Rejected)
    }
}

impl fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpenseStatus::Pending => "Pendiente",
            ExpenseStatus::Approved => "Aprobado",
            ExpenseStatus::Rejected => "Rechazado",
            ExpenseStatus::Observed => "Observado",
        };
        write!(f, "{}", label)
    }
}

/// Fixed category set for petty-cash expenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    #[serde(rename = "Papeleria")]
    OfficeSupplies,
    #[serde(rename = "Transporte")]
    Transport,
    #[serde(rename = "Mantenimiento")]
    Maintenance,
    #[serde(rename = "Alimentación")]
    Food,
    #[serde(rename = "Operaciones")]
    Operations,
    #[serde(rename = "Proyectos")]
    Projects,
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpenseCategory::OfficeSupplies => "Papeleria",
            ExpenseCategory::Transport => "Transporte",
            ExpenseCategory::Maintenance => "Mantenimiento",
            ExpenseCategory::Food => "Alimentación",
            ExpenseCategory::Operations => "Operaciones",
            ExpenseCategory::Projects => "Proyectos",
        };
        write!(f, "{}", label)
    }
}

/// Severity of a risk flag attached to an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertSeverity {
    High,
    Medium,
    Low,
}

/// Risk flag attached to an expense by external analysis.
///
/// The backend carries these through; it never computes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseAlert {
    #[serde(rename = "type")]
    pub severity: AlertSeverity,
    pub message: String,
}

/// One append-only history snapshot recording a status transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Short human-readable day label, e.g. "13 Feb"
    pub date: String,
    /// Who performed the action
    pub user: String,
    /// Amount at the time of the snapshot (transitions never change it)
    pub amount: f64,
    /// Status after the transition
    pub status: ExpenseStatus,
    /// Optional reviewer note, e.g. a rejection reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// A petty-cash expense as the view layer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Opaque unique identifier, assigned at creation
    pub id: String,
    pub description: String,
    pub amount: f64,
    /// Currency unit label, e.g. "S/."
    pub currency: String,
    /// Calendar date of the expense (ISO, YYYY-MM-DD)
    pub date: String,
    pub status: ExpenseStatus,
    pub category: ExpenseCategory,
    /// Submitter display name
    pub user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible_area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alerts: Vec<ExpenseAlert>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// Request payload for creating a new expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    /// Description of the expense (required, non-empty)
    pub description: String,
    /// Expense amount, must be strictly positive
    pub amount: f64,
    /// Currency unit label, e.g. "S/."
    pub currency: String,
    /// Calendar date (ISO, YYYY-MM-DD) - uses the current date if not provided
    pub date: Option<String>,
    pub category: ExpenseCategory,
    /// Submitter display name
    pub user: String,
    pub code: Option<String>,
    pub provider: Option<String>,
    pub area: Option<String>,
    pub responsible_area: Option<String>,
    pub observations: Option<String>,
    pub receipt_image: Option<String>,
}

/// Snapshot of daily spend against the configured limit.
///
/// Derived on every call from the expense collection; never persisted, so it
/// cannot drift from the records it summarizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub total_spent: f64,
    pub limit: f64,
    pub pending_count: usize,
    pub approved_count: usize,
    pub rejected_count: usize,
    pub observed_count: usize,
}

impl DailySummary {
    /// Remaining budget under the daily limit. Negative when overspent.
    pub fn balance(&self) -> f64 {
        self.limit - self.total_spent
    }

    /// Limit usage as a percentage. Unclamped, may exceed 100.
    pub fn progress_percent(&self) -> f64 {
        self.total_spent / self.limit * 100.0
    }

    /// Total number of expenses backing this summary.
    pub fn expense_count(&self) -> usize {
        self.pending_count + self.approved_count + self.rejected_count + self.observed_count
    }
}

/// Sum of amounts for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: f64,
}

/// Sum and count of expenses for one status, used by the daily-close view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub status: ExpenseStatus,
    pub total: f64,
    pub count: usize,
}

/// Sum and count of expenses for one area, used by ranking views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaSummary {
    pub area: String,
    pub total: f64,
    pub count: usize,
}

/// A frequently repeated purchase, e.g. "Martillo - 9 veces - Mantenimiento".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeatedItem {
    pub item: String,
    pub count: usize,
    pub area: String,
}

/// A repeat-purchase pattern that crossed the alert threshold inside the
/// rolling window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternAlert {
    pub item: String,
    pub count: usize,
    pub area: String,
}

/// A provider flagged as not eligible for petty-cash purchases.
///
/// Static reference data; risk-alert producers consult it, this core only
/// serves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlacklistedProvider {
    pub id: String,
    pub name: String,
    pub reason: String,
}
