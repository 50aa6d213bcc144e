//! Async client for the Torob API.
//!
//! This module provides the [`TorobClient`] type exposing one method per
//! remote endpoint, all delegating to a single shared GET executor.

use serde_json::Value;

use crate::config::TorobConfig;
use crate::error::TorobError;
use crate::search::augment_search_results;

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Async client for the Torob e-commerce search API.
///
/// Each operation issues exactly one HTTP GET with the named query
/// parameters and returns the decoded JSON body. The client keeps no state
/// between calls: configuration is fixed at construction and every call is
/// independent.
///
/// # Thread Safety
///
/// `TorobClient` is `Send + Sync`; share it freely across async tasks. The
/// client issues no concurrent requests of its own — callers wanting
/// parallelism invoke operations from multiple tasks themselves.
///
/// # Example
///
/// ```rust,ignore
/// use torob_client::TorobClient;
///
/// let client = TorobClient::new();
///
/// let suggestions = client.suggestion("laptop").await?;
/// let results = client.search("laptop").await?;
///
/// if let Some(first) = results["results"].get(0) {
///     let prk = first["prk"].as_str().unwrap();
///     let search_id: i64 = first["search_id"].as_str().unwrap().parse()?;
///     let details = client.details(prk, search_id).await?;
/// }
/// ```
#[derive(Debug)]
pub struct TorobClient {
    /// The internal reqwest HTTP client.
    http: reqwest::Client,
    /// Immutable configuration, including the derived endpoint URLs.
    config: TorobConfig,
}

// Verify TorobClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TorobClient>();
};

impl TorobClient {
    /// Creates a client for the production Torob API with default settings.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TorobConfig::default())
    }

    /// Creates a client from an explicit configuration.
    ///
    /// Use this to point the client at a different base URL (e.g., a local
    /// mock server in tests) or to change the request timeout.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use torob_client::{TorobClient, TorobConfig};
    ///
    /// let config = TorobConfig::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    /// let client = TorobClient::with_config(config);
    /// ```
    #[must_use]
    pub fn with_config(config: TorobConfig) -> Self {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Torob API Library v{CLIENT_VERSION} | Rust {rust_version}");

        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .user_agent(user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self { http, config }
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &TorobConfig {
        &self.config
    }

    /// Fetches product suggestions for a query string.
    ///
    /// # Errors
    ///
    /// Returns [`TorobError`] if the request fails or the response is not
    /// valid JSON.
    pub async fn suggestion(&self, q: &str) -> Result<Value, TorobError> {
        let params = [("q", q.to_string())];
        self.send_get(self.config.endpoints().suggestion(), &params)
            .await
    }

    /// Fetches the first page of product search results.
    ///
    /// Equivalent to [`Self::search_page`] with page 0. Each element of the
    /// response's `results` array gains `prk` and `search_id` string fields
    /// extracted from its `more_info_url`, ready to feed into
    /// [`Self::details`] and [`Self::price_chart`].
    ///
    /// # Errors
    ///
    /// Returns [`TorobError`] if the request fails or the response is not
    /// valid JSON.
    pub async fn search(&self, q: &str) -> Result<Value, TorobError> {
        self.search_page(q, 0).await
    }

    /// Fetches a specific page of product search results.
    ///
    /// See [`Self::search`] for the result augmentation performed. The page
    /// number is passed through unchecked; out-of-range values are the
    /// remote service's to reject.
    ///
    /// # Errors
    ///
    /// Returns [`TorobError`] if the request fails or the response is not
    /// valid JSON.
    pub async fn search_page(&self, q: &str, page: i64) -> Result<Value, TorobError> {
        let params = [("q", q.to_string()), ("page", page.to_string())];
        let mut body = self
            .send_get(self.config.endpoints().search(), &params)
            .await?;
        augment_search_results(&mut body);
        Ok(body)
    }

    /// Fetches detailed information for a specific product.
    ///
    /// `prk` and `search_id` come from search results (see [`Self::search`]).
    ///
    /// # Errors
    ///
    /// Returns [`TorobError`] if the request fails or the response is not
    /// valid JSON.
    pub async fn details(&self, prk: &str, search_id: i64) -> Result<Value, TorobError> {
        let params = [("prk", prk.to_string()), ("search_id", search_id.to_string())];
        self.send_get(self.config.endpoints().details(), &params)
            .await
    }

    /// Fetches the first page of special offers.
    ///
    /// Equivalent to [`Self::special_offers_page`] with page 0.
    ///
    /// # Errors
    ///
    /// Returns [`TorobError`] if the request fails or the response is not
    /// valid JSON.
    pub async fn special_offers(&self) -> Result<Value, TorobError> {
        self.special_offers_page(0).await
    }

    /// Fetches a specific page of special offers.
    ///
    /// # Errors
    ///
    /// Returns [`TorobError`] if the request fails or the response is not
    /// valid JSON.
    pub async fn special_offers_page(&self, page: i64) -> Result<Value, TorobError> {
        let params = [("page", page.to_string())];
        self.send_get(self.config.endpoints().special_offers(), &params)
            .await
    }

    /// Fetches price history data for a specific product.
    ///
    /// # Errors
    ///
    /// Returns [`TorobError`] if the request fails or the response is not
    /// valid JSON.
    pub async fn price_chart(&self, prk: &str, search_id: i64) -> Result<Value, TorobError> {
        let params = [("prk", prk.to_string()), ("search_id", search_id.to_string())];
        self.send_get(self.config.endpoints().price_chart(), &params)
            .await
    }

    /// Fetches products similar to the given product.
    ///
    /// # Errors
    ///
    /// Returns [`TorobError`] if the request fails or the response is not
    /// valid JSON.
    pub async fn similar_product(&self, prk: &str, limit: i64) -> Result<Value, TorobError> {
        let params = [("prk", prk.to_string()), ("limit", limit.to_string())];
        self.send_get(self.config.endpoints().similar_product(), &params)
            .await
    }

    /// Performs a single GET request and decodes the body as JSON.
    ///
    /// Failure mapping:
    /// - non-success status: [`TorobError::Status`] with the body text
    ///   captured for context (the body is never JSON-decoded on this path)
    /// - timeout: [`TorobError::Timeout`]
    /// - connection failure: [`TorobError::ConnectionFailure`]
    /// - undecodable body: [`TorobError::MalformedResponse`]
    ///
    /// No retries: every failure surfaces immediately to the caller.
    async fn send_get(&self, url: &str, params: &[(&str, String)]) -> Result<Value, TorobError> {
        tracing::debug!(url, "sending GET request to Torob API");

        let response = self
            .http
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(TorobError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TorobError::Status {
                code: status.as_u16(),
                body,
            });
        }

        response.json().await.map_err(TorobError::from_transport)
    }
}

impl Default for TorobClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_URL;

    #[test]
    fn test_client_construction_with_defaults() {
        let client = TorobClient::new();
        assert_eq!(client.config().base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_construction_with_custom_base_url() {
        let config = TorobConfig::builder()
            .base_url("http://127.0.0.1:8080")
            .build()
            .unwrap();
        let client = TorobClient::with_config(config);

        assert_eq!(
            client.config().endpoints().details(),
            "http://127.0.0.1:8080/base-product/details/"
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TorobClient>();
    }
}
