//! HTTP implementation of [`NumberService`].
//!
//! A thin reqwest client over the relay number REST endpoints, with
//! token auth read from the environment and a per-request timeout.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, warn};

use super::backend::NumberService;
use super::types::{RegisterRequest, RelayNumber, RelayNumberSuggestion, SuggestionBatch};
use crate::config::RelayConfig;

/// Client for the relay number API.
pub struct RelayApiClient {
    client: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl RelayApiClient {
    /// Create a new client from configuration.
    ///
    /// Reads the API token from the environment variable named in the
    /// config.
    pub fn new(config: &RelayConfig) -> Result<Self> {
        let api_token = std::env::var(&config.api_token_env).with_context(|| {
            format!(
                "relaynum requires the {} environment variable to be set",
                config.api_token_env
            )
        })?;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response> {
        let url = self.url(path);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Token {}", self.api_token))
            .send()
            .await
            .with_context(|| format!("Failed to send request to {url}"))?;

        check_status(response, &url).await
    }
}

async fn check_status(response: reqwest::Response, url: &str) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    warn!("Relay API error: {status} from {url} - {body}");
    Err(crate::RelayError::Api(format!("{status} - {body}")).into())
}

#[async_trait]
impl NumberService for RelayApiClient {
    async fn suggestions(&self) -> Result<SuggestionBatch> {
        let batch = self
            .get("/relaynumber/suggestions/")
            .await?
            .json()
            .await
            .context("Failed to parse suggestions response")?;
        Ok(batch)
    }

    async fn search(&self, query: &str) -> Result<Option<Vec<RelayNumberSuggestion>>> {
        let url = self.url("/relaynumber/search/");
        debug!("GET {url} location={query:?}");

        let response = self
            .client
            .get(&url)
            .query(&[("location", query)])
            .header("Authorization", format!("Token {}", self.api_token))
            .send()
            .await
            .with_context(|| format!("Failed to send request to {url}"))?;

        let results: Vec<RelayNumberSuggestion> = check_status(response, &url)
            .await?
            .json()
            .await
            .context("Failed to parse search response")?;

        debug!("search for {query:?} returned {} suggestions", results.len());
        if results.is_empty() {
            Ok(None)
        } else {
            Ok(Some(results))
        }
    }

    async fn relay_numbers(&self) -> Result<Vec<RelayNumber>> {
        let numbers = self
            .get("/relaynumber/")
            .await?
            .json()
            .await
            .context("Failed to parse relay number list")?;
        Ok(numbers)
    }

    async fn register(&self, number: &str) -> Result<RelayNumber> {
        let url = self.url("/relaynumber/");
        debug!("POST {url} number={number}");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Token {}", self.api_token))
            .json(&RegisterRequest {
                number: number.to_string(),
            })
            .send()
            .await
            .with_context(|| format!("Failed to send request to {url}"))?;

        let registered = check_status(response, &url)
            .await?
            .json()
            .await
            .context("Failed to parse register response")?;
        Ok(registered)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    #[test]
    fn search_query_is_percent_encoded() {
        let request = reqwest::Client::new()
            .get("https://relay.example/api/v1/relaynumber/search/")
            .query(&[("location", "new york")])
            .build()
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://relay.example/api/v1/relaynumber/search/?location=new+york"
        );
    }
}
