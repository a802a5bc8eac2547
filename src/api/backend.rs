//! Number service trait - abstraction over the relay number API.
//!
//! This trait keeps the wizard independent of the HTTP layer so tests can
//! drive it with a mock service.

use anyhow::Result;
use async_trait::async_trait;

use super::types::{RelayNumber, RelayNumberSuggestion, SuggestionBatch};

/// Operations the onboarding flow needs from the relay number service.
#[async_trait]
pub trait NumberService: Send + Sync {
    /// Fetch the initial, categorized suggestion batch.
    async fn suggestions(&self) -> Result<SuggestionBatch>;

    /// Search for suggestions matching a location or area-code query.
    ///
    /// `Ok(None)` means "no results" - callers keep whatever batch they
    /// already have.
    async fn search(&self, query: &str) -> Result<Option<Vec<RelayNumberSuggestion>>>;

    /// List the relay numbers currently assigned to the account.
    async fn relay_numbers(&self) -> Result<Vec<RelayNumber>>;

    /// Claim a relay number for the account.
    async fn register(&self, number: &str) -> Result<RelayNumber>;
}

/// Mock service for testing the wizard without a network.
#[cfg(test)]
#[derive(Default)]
pub struct MockService {
    pub suggestions: SuggestionBatch,
    pub search_results: Vec<RelayNumberSuggestion>,
    pub assigned: std::sync::Mutex<Vec<RelayNumber>>,
    pub fail_register: bool,
}

#[cfg(test)]
#[async_trait]
impl NumberService for MockService {
    async fn suggestions(&self) -> Result<SuggestionBatch> {
        Ok(self.suggestions.clone())
    }

    async fn search(&self, _query: &str) -> Result<Option<Vec<RelayNumberSuggestion>>> {
        if self.search_results.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.search_results.clone()))
        }
    }

    async fn relay_numbers(&self) -> Result<Vec<RelayNumber>> {
        Ok(self.assigned.lock().unwrap().clone())
    }

    async fn register(&self, number: &str) -> Result<RelayNumber> {
        if self.fail_register {
            anyhow::bail!("number {number} is no longer available");
        }
        let registered = RelayNumber {
            number: number.to_string(),
            location: None,
            enabled: true,
        };
        self.assigned.lock().unwrap().push(registered.clone());
        Ok(registered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_register_updates_assignments() {
        let service = MockService::default();
        assert!(service.relay_numbers().await.unwrap().is_empty());

        service.register("+15035550100").await.unwrap();

        let assigned = service.relay_numbers().await.unwrap();
        assert_eq!(assigned.len(), 1);
        assert_eq!(assigned[0].number, "+15035550100");
    }

    #[tokio::test]
    async fn mock_search_with_no_results_returns_none() {
        let service = MockService::default();
        assert!(service.search("503").await.unwrap().is_none());
    }
}
