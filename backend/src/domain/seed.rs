//! Demo dataset and tuning constants.
//!
//! The seed expenses and the provider blacklist are the fixed records the
//! store starts from when no persisted collection exists. The constants are
//! configuration values, not computed: the daily ceiling and the
//! repeat-purchase alert window/threshold.

use crate::domain::models::{
    BlacklistedProvider, Expense, ExpenseCategory, ExpenseStatus, HistoryEntry,
};
use chrono::NaiveDate;

/// Daily spend ceiling in currency units.
pub const DEFAULT_DAILY_LIMIT: f64 = 2000.0;

/// Rolling window for repeat-purchase pattern alerts, in days.
pub const PATTERN_WINDOW_DAYS: i64 = 30;

/// Repeat count at which an item inside the window becomes an alert.
pub const PATTERN_THRESHOLD: usize = 3;

/// Placeholder receipt image for records created without an attachment.
pub const RECEIPT_PLACEHOLDER: &str = "/assets/receipt.svg";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("static seed date is valid")
}

/// The fixed demo expenses, most-recent-first as the store keeps them.
pub fn seed_expenses() -> Vec<Expense> {
    vec![
        Expense {
            id: "1".to_string(),
            description: "Compra de papelería".to_string(),
            amount: 125.50,
            currency: "S/.".to_string(),
            date: date(2026, 2, 13),
            status: ExpenseStatus::Pending,
            category: ExpenseCategory::OfficeSupplies,
            user: "Carlos Bazan".to_string(),
            receipt_image: Some(RECEIPT_PLACEHOLDER.to_string()),
            code: Some("B001-00123456".to_string()),
            provider: Some("Papelería El Sol".to_string()),
            area: Some("Administración".to_string()),
            responsible_area: None,
            observations: Some("Pendiente de validación física".to_string()),
            alerts: vec![],
            history: vec![HistoryEntry {
                date: "13 Feb".to_string(),
                user: "Carlos Bazan".to_string(),
                amount: 125.50,
                status: ExpenseStatus::Pending,
                detail: None,
            }],
        },
        Expense {
            id: "2".to_string(),
            description: "Arreglo de máquinas".to_string(),
            amount: 850.0,
            currency: "S/.".to_string(),
            date: date(2026, 2, 13),
            status: ExpenseStatus::Pending,
            category: ExpenseCategory::Maintenance,
            user: "Carlos Ruiz".to_string(),
            receipt_image: Some(RECEIPT_PLACEHOLDER.to_string()),
            code: None,
            provider: Some("Taxi Express SAC".to_string()),
            area: Some("Ventas".to_string()),
            responsible_area: None,
            observations: Some("Mantenimiento preventivo de impresora industrial".to_string()),
            alerts: vec![],
            history: vec![HistoryEntry {
                date: "13 Feb".to_string(),
                user: "Carlos Ruiz".to_string(),
                amount: 850.0,
                status: ExpenseStatus::Pending,
                detail: None,
            }],
        },
        Expense {
            id: "3".to_string(),
            description: "Suministro de herramientas".to_string(),
            amount: 540.20,
            currency: "S/.".to_string(),
            date: date(2026, 2, 13),
            status: ExpenseStatus::Pending,
            category: ExpenseCategory::Operations,
            user: "Maria Lopez".to_string(),
            receipt_image: Some(RECEIPT_PLACEHOLDER.to_string()),
            code: None,
            provider: Some("Ferretería Central".to_string()),
            area: Some("Proyectos".to_string()),
            responsible_area: None,
            observations: Some("Kit de destornilladores y taladro".to_string()),
            alerts: vec![],
            history: vec![HistoryEntry {
                date: "13 Feb".to_string(),
                user: "Maria Lopez".to_string(),
                amount: 540.20,
                status: ExpenseStatus::Pending,
                detail: None,
            }],
        },
        Expense {
            id: "4".to_string(),
            description: "Mantenimiento de equipos".to_string(),
            amount: 450.0,
            currency: "S/.".to_string(),
            date: date(2026, 2, 10),
            status: ExpenseStatus::Rejected,
            category: ExpenseCategory::Maintenance,
            user: "Jorge Sanchez".to_string(),
            receipt_image: Some(RECEIPT_PLACEHOLDER.to_string()),
            code: None,
            provider: Some("Clima Tech".to_string()),
            area: Some("Operaciones".to_string()),
            responsible_area: None,
            observations: Some("Monto excede el presupuesto mensual del área".to_string()),
            alerts: vec![],
            history: vec![
                HistoryEntry {
                    date: "10 Feb".to_string(),
                    user: "Jorge Sanchez".to_string(),
                    amount: 450.0,
                    status: ExpenseStatus::Pending,
                    detail: None,
                },
                HistoryEntry {
                    date: "11 Feb".to_string(),
                    user: "Admin User".to_string(),
                    amount: 450.0,
                    status: ExpenseStatus::Rejected,
                    detail: Some("Monto excede presupuesto".to_string()),
                },
            ],
        },
        Expense {
            id: "5".to_string(),
            description: "Compra de insumos".to_string(),
            amount: 320.80,
            currency: "S/.".to_string(),
            date: date(2026, 2, 14),
            status: ExpenseStatus::Pending,
            category: ExpenseCategory::Operations,
            user: "Ana Patricia Torres".to_string(),
            receipt_image: Some(RECEIPT_PLACEHOLDER.to_string()),
            code: None,
            provider: Some("Insumos Pro".to_string()),
            area: Some("Operaciones".to_string()),
            responsible_area: None,
            observations: Some("Insumos de limpieza para planta".to_string()),
            alerts: vec![],
            history: vec![HistoryEntry {
                date: "14 Feb".to_string(),
                user: "Ana Patricia Torres".to_string(),
                amount: 320.80,
                status: ExpenseStatus::Pending,
                detail: None,
            }],
        },
    ]
}

/// The fixed provider blacklist.
pub fn blacklisted_providers() -> Vec<BlacklistedProvider> {
    vec![
        BlacklistedProvider {
            id: "1".to_string(),
            name: "Servicios Fantasmas SAC".to_string(),
            reason: "Facturación de servicios no realizados detectada en auditoría.".to_string(),
        },
        BlacklistedProvider {
            id: "2".to_string(),
            name: "Insumos Pro".to_string(),
            reason: "Calidad de productos por debajo de los estándares requeridos.".to_string(),
        },
        BlacklistedProvider {
            id: "3".to_string(),
            name: "Transportes Veloz".to_string(),
            reason: "Múltiples reportes de retrasos críticos y falta de comprobantes válidos."
                .to_string(),
        },
    ]
}
