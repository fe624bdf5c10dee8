//! Domain model for a petty-cash expense.
//!
//! This is the backend-internal representation: typed calendar dates and
//! enums, serialized with the same wire values the shared DTOs use so the
//! persisted collection stays readable by any layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of an expense. Starts at `Pending`; only the expense
/// service mutates it.
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
    /// All statuses in declaration order. Report rollups iterate this so
    /// their output order is deterministic.
    pub const ALL: [ExpenseStatus; 4] = [
        ExpenseStatus::Pending,
        ExpenseStatus::Approved,
        ExpenseStatus::Rejected,
        ExpenseStatus::Observed,
    ];
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

impl ExpenseCategory {
    /// All categories in declaration order. Report breakdowns iterate this so
    /// their output order is deterministic.
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::OfficeSupplies,
        ExpenseCategory::Transport,
        ExpenseCategory::Maintenance,
        ExpenseCategory::Food,
        ExpenseCategory::Operations,
        ExpenseCategory::Projects,
    ];
}

/// Severity of an externally attached risk flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertSeverity {
    High,
    Medium,
    Low,
}

/// Risk flag produced by external analysis and carried on the expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseAlert {
    #[serde(rename = "type")]
    pub severity: AlertSeverity,
    pub message: String,
}

/// One append-only history snapshot. The last entry's status always equals
/// the expense's current status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Short day label, e.g. "13 Feb"
    pub date: String,
    pub user: String,
    pub amount: f64,
    pub status: ExpenseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// A petty-cash expense record.
///
/// After creation only `status` and `history` change, and only through the
/// expense service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub currency: String,
    pub date: NaiveDate,
    pub status: ExpenseStatus,
    pub category: ExpenseCategory,
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
