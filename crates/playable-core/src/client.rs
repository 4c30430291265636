//! HTTP client wrapper for provider requests
//!
//! Thin wrapper over reqwest with a bounded per-request timeout. Failures
//! propagate as-is: the pipeline never retries, so one extraction call maps
//! to a deterministic sequence of requests.

use std::time::Duration;

use crate::error::{ExtractError, Result};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// HTTP client used by all provider flows
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct MediaClient {
    client: reqwest::Client,
}

impl MediaClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .cookie_store(true)
            .build()
            .map_err(ExtractError::Transport)?;

        Ok(Self { client })
    }

    /// Fetch a URL and return the response body as text
    ///
    /// Non-success statuses are transport failures; the pipeline has no use
    /// for provider error pages.
    pub async fn get(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ExtractError::Transport)?
            .error_for_status()
            .map_err(ExtractError::Transport)?;

        response.text().await.map_err(ExtractError::Transport)
    }

    /// Fetch a URL with query parameters and return the body as text
    pub async fn get_with_query(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(ExtractError::Transport)?
            .error_for_status()
            .map_err(ExtractError::Transport)?;

        response.text().await.map_err(ExtractError::Transport)
    }

    /// Issue a fire-and-forget GET whose response is discarded
    ///
    /// Used for session priming: the call only warms server-side state, so
    /// HTTP-level failure is ignored. A transport-level send failure still
    /// propagates.
    pub async fn fire(&self, url: &str, query: &[(&str, &str)]) -> Result<()> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(ExtractError::Transport)?;

        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), url, "priming request not acknowledged");
        }
        Ok(())
    }

    /// POST a pre-encoded form body and return the response body as text
    pub async fn post_form(&self, url: &str, body: String) -> Result<String> {
        let response = self
            .client
            .post(url)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(body)
            .send()
            .await
            .map_err(ExtractError::Transport)?
            .error_for_status()
            .map_err(ExtractError::Transport)?;

        response.text().await.map_err(ExtractError::Transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.contains("Mozilla"));
    }

    #[test]
    fn test_client_creation() {
        let client = MediaClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_custom_config() {
        let config = ClientConfig {
            timeout_secs: 5,
            user_agent: "test-agent".to_string(),
        };
        let client = MediaClient::with_config(config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_clone_shares_pool() {
        let client = MediaClient::new().unwrap();
        let _clone = client.clone();
    }
}
