//! # Torob API Client
//!
//! A minimal async Rust client for the Torob e-commerce search API:
//! product suggestions, search, details, special offers, price history,
//! and similar products.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`TorobClient`]: one async method per remote endpoint
//! - [`TorobConfig`] and [`TorobConfigBuilder`]: fail-fast validated
//!   configuration with endpoint URLs derived once at construction
//! - [`TorobError`]: tagged error variants for connection failures,
//!   timeouts, HTTP status errors, and malformed responses
//!
//! Responses are passed through as [`serde_json::Value`] exactly as the
//! service returns them, with one exception: search results gain `prk` and
//! `search_id` string fields extracted from each item's `more_info_url`,
//! ready to feed into the details and price-chart endpoints.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use torob_client::TorobClient;
//!
//! let client = TorobClient::new();
//!
//! // Search, then drill into the first result.
//! let results = client.search("laptop").await?;
//! if let Some(item) = results["results"].get(0) {
//!     let prk = item["prk"].as_str().unwrap();
//!     let search_id: i64 = item["search_id"].as_str().unwrap().parse()?;
//!
//!     let details = client.details(prk, search_id).await?;
//!     let history = client.price_chart(prk, search_id).await?;
//!     let similar = client.similar_product(prk, 10).await?;
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every failure surfaces synchronously to the caller as a [`TorobError`];
//! the client performs no retries, no backoff, and no internal recovery.
//! Connection failures are normalized to a fixed message identifying the
//! service, decoupled from transport internals.
//!
//! ## Design Principles
//!
//! - **No state between calls**: configuration is immutable after
//!   construction and responses are never retained
//! - **Fail-fast validation**: configuration errors are caught at build time
//! - **Thread-safe**: [`TorobClient`] is `Send + Sync` and can be shared
//!   across async tasks
//! - **Async-first**: designed for use with the Tokio runtime

pub mod client;
pub mod config;
pub mod error;
mod search;

// Re-export public types at crate root for convenience
pub use client::{TorobClient, CLIENT_VERSION};
pub use config::{
    Endpoints, TorobConfig, TorobConfigBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT,
};
pub use error::{ConfigError, TorobError};
