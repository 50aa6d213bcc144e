//! Error types for the Torob API client.
//!
//! This module contains the two error enums used by the crate:
//!
//! - [`TorobError`]: failures raised while performing an API request
//! - [`ConfigError`]: failures raised while building a [`crate::TorobConfig`]
//!
//! # Error Handling
//!
//! Every client operation surfaces its failure synchronously to the caller;
//! nothing is retried, swallowed, or logged internally. Use pattern matching
//! to distinguish failure classes:
//!
//! ```rust,ignore
//! use torob_client::{TorobClient, TorobError};
//!
//! match client.suggestion("laptop").await {
//!     Ok(body) => println!("{body}"),
//!     Err(TorobError::Status { code, body }) => {
//!         println!("API rejected the request with {code}: {body}");
//!     }
//!     Err(TorobError::ConnectionFailure) => {
//!         println!("Torob is unreachable");
//!     }
//!     Err(other) => println!("{other}"),
//! }
//! ```

use thiserror::Error;

/// Errors that can occur while performing a Torob API request.
///
/// Each variant corresponds to one failure class; transport-level detail is
/// deliberately normalized away for connection failures so callers can catch
/// "could not reach the service" without inspecting lower-level errors.
#[derive(Debug, Error)]
pub enum TorobError {
    /// The transport could not reach the service (DNS failure, refused
    /// connection, network unreachable).
    ///
    /// The message is fixed and identifies the target service; it carries no
    /// lower-level transport detail.
    #[error("Failed to connect to Torob API.")]
    ConnectionFailure,

    /// The request exceeded the configured deadline (5 seconds by default).
    #[error("Request to Torob API timed out.")]
    Timeout,

    /// The service responded with a non-success HTTP status.
    #[error("Torob API responded with status {code}: {body}")]
    Status {
        /// The HTTP status code of the response.
        code: u16,
        /// The response body text, captured for context.
        body: String,
    },

    /// The response body could not be decoded as JSON.
    #[error("Torob API returned a malformed response: {0}")]
    MalformedResponse(#[source] reqwest::Error),

    /// Any other transport-level failure.
    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),
}

impl TorobError {
    /// Classifies a `reqwest` transport error into the matching variant.
    ///
    /// Timeouts are checked first: a connect timeout is both a timeout and a
    /// connection error, and the deadline is the more useful signal.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::ConnectionFailure
        } else if err.is_decode() {
            Self::MalformedResponse(err)
        } else {
            Self::Transport(err)
        }
    }
}

/// Errors that can occur while building a [`crate::TorobConfig`].
///
/// Configuration is validated fail-fast at build time so a misconfigured
/// client cannot be constructed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL does not carry an `http://` or `https://` scheme.
    #[error("Invalid base URL '{url}'. Expected an absolute http(s) URL (e.g., 'https://api.torob.com/v4/').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The request timeout was set to zero.
    #[error("Request timeout must be greater than zero.")]
    ZeroTimeout,
}
