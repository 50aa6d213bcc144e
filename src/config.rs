//! Configuration types for the Torob API client.
//!
//! This module provides the types used to configure a [`crate::TorobClient`]:
//!
//! - [`TorobConfig`]: the immutable client configuration
//! - [`TorobConfigBuilder`]: a fail-fast validating builder
//! - [`Endpoints`]: the six endpoint URLs, derived once from the base URL
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use torob_client::TorobConfig;
//!
//! let config = TorobConfig::builder()
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.timeout(), Duration::from_secs(10));
//! ```

use std::time::Duration;

use crate::error::ConfigError;

/// The production Torob API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.torob.com/v4/";

/// Default per-request timeout, matching the upstream client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// The six Torob API endpoint URLs.
///
/// All URLs are derived from the base URL exactly once, at configuration
/// build time, and are never recomputed per call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    suggestion: String,
    search: String,
    details: String,
    special_offers: String,
    price_chart: String,
    similar_product: String,
}

impl Endpoints {
    /// Derives the endpoint URLs from a base URL.
    ///
    /// The base URL must already be normalized to end with `/`.
    fn from_base(base_url: &str) -> Self {
        Self {
            suggestion: format!("{base_url}suggestion2/"),
            search: format!("{base_url}base-product/search/"),
            details: format!("{base_url}base-product/details/"),
            special_offers: format!("{base_url}special-offers/"),
            price_chart: format!("{base_url}base-product/price-chart/"),
            similar_product: format!("{base_url}base-product/similar-base-product/"),
        }
    }

    /// Returns the product suggestion endpoint URL.
    #[must_use]
    pub fn suggestion(&self) -> &str {
        &self.suggestion
    }

    /// Returns the product search endpoint URL.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns the product details endpoint URL.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Returns the special offers endpoint URL.
    #[must_use]
    pub fn special_offers(&self) -> &str {
        &self.special_offers
    }

    /// Returns the price chart endpoint URL.
    #[must_use]
    pub fn price_chart(&self) -> &str {
        &self.price_chart
    }

    /// Returns the similar products endpoint URL.
    #[must_use]
    pub fn similar_product(&self) -> &str {
        &self.similar_product
    }
}

/// Configuration for the Torob API client.
///
/// Holds the base URL, the endpoint URLs derived from it, the per-request
/// timeout, and an optional User-Agent prefix. Immutable after build.
///
/// # Thread Safety
///
/// `TorobConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use torob_client::{TorobConfig, DEFAULT_BASE_URL};
///
/// let config = TorobConfig::default();
/// assert_eq!(config.base_url(), DEFAULT_BASE_URL);
/// assert!(config.endpoints().search().ends_with("base-product/search/"));
/// ```
#[derive(Clone, Debug)]
pub struct TorobConfig {
    base_url: String,
    endpoints: Endpoints,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

// Verify TorobConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TorobConfig>();
};

impl TorobConfig {
    /// Creates a new builder for constructing a `TorobConfig`.
    #[must_use]
    pub fn builder() -> TorobConfigBuilder {
        TorobConfigBuilder::default()
    }

    /// Returns the normalized base URL (always ends with `/`).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the derived endpoint URLs.
    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the User-Agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for TorobConfig {
    /// Returns the production configuration: official base URL, 5-second
    /// timeout, no User-Agent prefix.
    fn default() -> Self {
        TorobConfigBuilder::default()
            .build()
            .unwrap_or_else(|_| unreachable!("default configuration is valid"))
    }
}

/// Builder for constructing [`TorobConfig`] instances.
///
/// All fields have defaults; the builder exists so tests can point the
/// client at a mock server and callers can tune the timeout.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `timeout`: [`DEFAULT_TIMEOUT`] (5 seconds)
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use torob_client::TorobConfig;
///
/// let config = TorobConfig::builder()
///     .base_url("http://127.0.0.1:8080")
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// // The base URL is normalized with a trailing slash.
/// assert_eq!(config.base_url(), "http://127.0.0.1:8080/");
/// ```
#[derive(Debug, Default)]
pub struct TorobConfigBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl TorobConfigBuilder {
    /// Sets the base URL for all endpoints.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a prefix prepended to the default User-Agent header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Validates the settings and builds the configuration.
    ///
    /// The base URL is normalized to end with a single `/` so endpoint
    /// derivation is uniform.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the base URL does not start
    /// with `http://` or `https://`, and [`ConfigError::ZeroTimeout`] if the
    /// timeout is zero.
    pub fn build(self) -> Result<TorobConfig, ConfigError> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl { url: base_url });
        }

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        let base_url = format!("{}/", base_url.trim_end_matches('/'));
        let endpoints = Endpoints::from_base(&base_url);

        Ok(TorobConfig {
            base_url,
            endpoints,
            timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_production_base_url() {
        let config = TorobConfig::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_endpoints_derived_from_base_url() {
        let config = TorobConfig::default();
        let endpoints = config.endpoints();

        assert_eq!(
            endpoints.suggestion(),
            "https://api.torob.com/v4/suggestion2/"
        );
        assert_eq!(
            endpoints.search(),
            "https://api.torob.com/v4/base-product/search/"
        );
        assert_eq!(
            endpoints.details(),
            "https://api.torob.com/v4/base-product/details/"
        );
        assert_eq!(
            endpoints.special_offers(),
            "https://api.torob.com/v4/special-offers/"
        );
        assert_eq!(
            endpoints.price_chart(),
            "https://api.torob.com/v4/base-product/price-chart/"
        );
        assert_eq!(
            endpoints.similar_product(),
            "https://api.torob.com/v4/base-product/similar-base-product/"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let with_slash = TorobConfig::builder()
            .base_url("http://localhost:9090/")
            .build()
            .unwrap();
        let without_slash = TorobConfig::builder()
            .base_url("http://localhost:9090")
            .build()
            .unwrap();

        assert_eq!(with_slash.base_url(), without_slash.base_url());
        assert_eq!(
            without_slash.endpoints().suggestion(),
            "http://localhost:9090/suggestion2/"
        );
    }

    #[test]
    fn test_base_url_without_scheme_is_rejected() {
        let result = TorobConfig::builder().base_url("api.torob.com/v4/").build();
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let result = TorobConfig::builder()
            .timeout(Duration::ZERO)
            .build();
        assert!(matches!(result, Err(ConfigError::ZeroTimeout)));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TorobConfig>();
    }
}
