//! Provider blacklist lookups.
//!
//! The blacklist is static reference data in this scope: risk-alert producers
//! outside the core consult it, the service only serves lookups.

use crate::domain::models::BlacklistedProvider;
use crate::domain::seed;
use crate::io::mappers::ExpenseMapper;
use shared::BlacklistedProvider as SharedBlacklistedProvider;

#[derive(Clone)]
pub struct ProviderService {
    providers: Vec<BlacklistedProvider>,
}

impl ProviderService {
    pub fn new() -> Self {
        Self {
            providers: seed::blacklisted_providers(),
        }
    }

    /// The full blacklist.
    pub fn blacklisted_providers(&self) -> Vec<SharedBlacklistedProvider> {
        self.providers
            .iter()
            .cloned()
            .map(ExpenseMapper::to_dto_provider)
            .collect()
    }

    /// Case-insensitive lookup of a provider name against the blacklist.
    pub fn is_blacklisted(&self, provider_name: &str) -> Option<SharedBlacklistedProvider> {
        self.providers
            .iter()
            .find(|p| p.matches(provider_name))
            .cloned()
            .map(ExpenseMapper::to_dto_provider)
    }
}

impl Default for ProviderService {
    fn default() -> Self {
        Self::new()
    }
}
