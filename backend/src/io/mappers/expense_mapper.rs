//! Conversions between domain models and the shared DTOs.

use crate::domain::models::{
    AlertSeverity as DomainAlertSeverity, BlacklistedProvider as DomainBlacklistedProvider,
    Expense as DomainExpense, ExpenseAlert as DomainExpenseAlert,
    ExpenseCategory as DomainExpenseCategory, ExpenseStatus as DomainExpenseStatus,
    HistoryEntry as DomainHistoryEntry,
};
use shared::{
    AlertSeverity as SharedAlertSeverity, BlacklistedProvider as SharedBlacklistedProvider,
    Expense as SharedExpense, ExpenseAlert as SharedExpenseAlert,
    ExpenseCategory as SharedExpenseCategory, ExpenseStatus as SharedExpenseStatus,
    HistoryEntry as SharedHistoryEntry,
};

pub struct ExpenseMapper;

impl ExpenseMapper {
    pub fn to_dto(domain: DomainExpense) -> SharedExpense {
        SharedExpense {
            id: domain.id,
            description: domain.description,
            amount: domain.amount,
            currency: domain.currency,
            date: domain.date.format("%Y-%m-%d").to_string(),
            status: Self::to_dto_status(domain.status),
            category: Self::to_dto_category(domain.category),
            user: domain.user,
            receipt_image: domain.receipt_image,
            code: domain.code,
            provider: domain.provider,
            area: domain.area,
            responsible_area: domain.responsible_area,
            observations: domain.observations,
            alerts: domain.alerts.into_iter().map(Self::to_dto_alert).collect(),
            history: domain
                .history
                .into_iter()
                .map(Self::to_dto_history_entry)
                .collect(),
        }
    }

    pub fn to_dto_status(status: DomainExpenseStatus) -> SharedExpenseStatus {
        match status {
            DomainExpenseStatus::Pending => SharedExpenseStatus::Pending,
            DomainExpenseStatus::Approved => SharedExpenseStatus::Approved,
            DomainExpenseStatus::Rejected => SharedExpenseStatus::Rejected,
            DomainExpenseStatus::Observed => SharedExpenseStatus::Observed,
        }
    }

    pub fn to_dto_category(category: DomainExpenseCategory) -> SharedExpenseCategory {
        match category {
            DomainExpenseCategory::OfficeSupplies => SharedExpenseCategory::OfficeSupplies,
            DomainExpenseCategory::Transport => SharedExpenseCategory::Transport,
            DomainExpenseCategory::Maintenance => SharedExpenseCategory::Maintenance,
            DomainExpenseCategory::Food => SharedExpenseCategory::Food,
            DomainExpenseCategory::Operations => SharedExpenseCategory::Operations,
            DomainExpenseCategory::Projects => SharedExpenseCategory::Projects,
        }
    }

    pub fn to_domain_category(category: SharedExpenseCategory) -> DomainExpenseCategory {
        match category {
            SharedExpenseCategory::OfficeSupplies => DomainExpenseCategory::OfficeSupplies,
            SharedExpenseCategory::Transport => DomainExpenseCategory::Transport,
            SharedExpenseCategory::Maintenance => DomainExpenseCategory::Maintenance,
            SharedExpenseCategory::Food => DomainExpenseCategory::Food,
            SharedExpenseCategory::Operations => DomainExpenseCategory::Operations,
            SharedExpenseCategory::Projects => DomainExpenseCategory::Projects,
        }
    }

    pub fn to_dto_provider(domain: DomainBlacklistedProvider) -> SharedBlacklistedProvider {
        SharedBlacklistedProvider {
            id: domain.id,
            name: domain.name,
            reason: domain.reason,
        }
    }

    fn to_dto_alert(domain: DomainExpenseAlert) -> SharedExpenseAlert {
        SharedExpenseAlert {
            severity: match domain.severity {
                DomainAlertSeverity::High => SharedAlertSeverity::High,
                DomainAlertSeverity::Medium => SharedAlertSeverity::Medium,
                DomainAlertSeverity::Low => SharedAlertSeverity::Low,
            },
            message: domain.message,
        }
    }

    fn to_dto_history_entry(domain: DomainHistoryEntry) -> SharedHistoryEntry {
        SharedHistoryEntry {
            date: domain.date,
            user: domain.user,
            amount: domain.amount,
            status: Self::to_dto_status(domain.status),
            detail: domain.detail,
        }
    }
}
