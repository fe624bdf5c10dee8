//! Derived reports over the expense collection.
//!
//! Every function here is a pure view of the slice it is given: no hidden
//! state, no cache, recomputed fresh on every call. Collections are small
//! and each pass is O(n), so recomputation is the simple and correct choice.

use crate::domain::models::{Expense, ExpenseCategory, ExpenseStatus};
use crate::io::mappers::ExpenseMapper;
use chrono::{Duration, NaiveDate};
use shared::{AreaSummary, CategoryTotal, DailySummary, PatternAlert, RepeatedItem, StatusSummary};
use std::cmp::Ordering;

/// Label for expenses that carry no area, so area breakdowns still partition
/// the whole collection.
const NO_AREA_LABEL: &str = "Sin área";

#[derive(Clone, Default)]
pub struct ReportService;

impl ReportService {
    pub fn new() -> Self {
        Self
    }

    /// Spend and status counts against a daily ceiling.
    pub fn daily_summary(&self, expenses: &[Expense], limit: f64) -> DailySummary {
        let mut summary = DailySummary {
            total_spent: 0.0,
            limit,
            pending_count: 0,
            approved_count: 0,
            rejected_count: 0,
            observed_count: 0,
        };

        for expense in expenses {
            summary.total_spent += expense.amount;
            match expense.status {
                ExpenseStatus::Pending => summary.pending_count += 1,
                ExpenseStatus::Approved => summary.approved_count += 1,
                ExpenseStatus::Rejected => summary.rejected_count += 1,
                ExpenseStatus::Observed => summary.observed_count += 1,
            }
        }

        summary
    }

    /// Sum per category, one entry per category in declaration order so the
    /// output is deterministic and the entries always total the overall spend.
    pub fn by_category(&self, expenses: &[Expense]) -> Vec<CategoryTotal> {
        ExpenseCategory::ALL
            .iter()
            .map(|&category| CategoryTotal {
                category: ExpenseMapper::to_dto_category(category),
                total: expenses
                    .iter()
                    .filter(|e| e.category == category)
                    .map(|e| e.amount)
                    .sum(),
            })
            .collect()
    }

    /// Sum and count per status, one entry per status in declaration order.
    /// Backs the daily-close view, which shows how much money sits in each
    /// state alongside the counts.
    pub fn by_status(&self, expenses: &[Expense]) -> Vec<StatusSummary> {
        ExpenseStatus::ALL
            .iter()
            .map(|&status| {
                let matching = expenses.iter().filter(|e| e.status == status);
                let (total, count) = matching.fold((0.0, 0), |(total, count), e| {
                    (total + e.amount, count + 1)
                });
                StatusSummary {
                    status: ExpenseMapper::to_dto_status(status),
                    total,
                    count,
                }
            })
            .collect()
    }

    /// Sum and count per area, grouped in first-seen input order. Expenses
    /// without an area fall under "Sin área".
    pub fn by_area(&self, expenses: &[Expense]) -> Vec<AreaSummary> {
        let mut areas: Vec<AreaSummary> = Vec::new();

        for expense in expenses {
            let label = expense.area.as_deref().unwrap_or(NO_AREA_LABEL);
            match areas.iter_mut().find(|a| a.area == label) {
                Some(summary) => {
                    summary.total += expense.amount;
                    summary.count += 1;
                }
                None => areas.push(AreaSummary {
                    area: label.to_string(),
                    total: expense.amount,
                    count: 1,
                }),
            }
        }

        areas
    }

    /// Areas ranked by total spend, descending. Equal totals keep their
    /// first-seen order (the sort is stable).
    pub fn ranked_by_total(&self, expenses: &[Expense]) -> Vec<AreaSummary> {
        let mut areas = self.by_area(expenses);
        areas.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));
        areas
    }

    /// The most frequently purchased items, ranked by repeat count with
    /// stable first-seen tie-break. Descriptions are matched after trimming
    /// and lowercasing; the label keeps the casing of the first occurrence.
    pub fn most_repeated(&self, expenses: &[Expense], top_n: usize) -> Vec<RepeatedItem> {
        let mut items = repeat_counts(expenses.iter());
        items.sort_by(|a, b| b.count.cmp(&a.count));
        items.truncate(top_n);
        items
    }

    /// Repeat-purchase pattern flags: items bought at least `threshold` times
    /// within the `window_days` ending at `today`.
    pub fn pattern_alerts(
        &self,
        expenses: &[Expense],
        today: NaiveDate,
        window_days: i64,
        threshold: usize,
    ) -> Vec<PatternAlert> {
        let window_start = today - Duration::days(window_days);
        let in_window = expenses
            .iter()
            .filter(|e| e.date >= window_start && e.date <= today);

        repeat_counts(in_window)
            .into_iter()
            .filter(|item| item.count >= threshold)
            .map(|item| PatternAlert {
                item: item.item,
                count: item.count,
                area: item.area,
            })
            .collect()
    }

    /// Mean expense amount; 0 for an empty collection.
    pub fn average_amount(&self, expenses: &[Expense]) -> f64 {
        if expenses.is_empty() {
            return 0.0;
        }
        expenses.iter().map(|e| e.amount).sum::<f64>() / expenses.len() as f64
    }
}

/// Count expenses by normalized description, preserving first-seen order.
/// The reported area is the area of the first occurrence.
fn repeat_counts<'a>(expenses: impl Iterator<Item = &'a Expense>) -> Vec<RepeatedItem> {
    let mut items: Vec<(String, RepeatedItem)> = Vec::new();

    for expense in expenses {
        let normalized = expense.description.trim().to_lowercase();
        match items.iter_mut().find(|(key, _)| *key == normalized) {
            Some((_, item)) => item.count += 1,
            None => items.push((
                normalized,
                RepeatedItem {
                    item: expense.description.trim().to_string(),
                    count: 1,
                    area: expense
                        .area
                        .clone()
                        .unwrap_or_else(|| NO_AREA_LABEL.to_string()),
                },
            )),
        }
    }

    items.into_iter().map(|(_, item)| item).collect()
}
