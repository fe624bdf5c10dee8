//! Domain model for a blacklisted provider.

use serde::{Deserialize, Serialize};

/// A provider barred from petty-cash purchases.
///
/// Read-only reference data; risk-alert producers consult this list when
/// flagging expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlacklistedProvider {
    pub id: String,
    pub name: String,
    pub reason: String,
}

impl BlacklistedProvider {
    /// Case-insensitive name match, used for lookups against free-text
    /// provider fields.
    pub fn matches(&self, provider_name: &str) -> bool {
        self.name.eq_ignore_ascii_case(provider_name.trim())
    }
}
