//! Error types for Meridian API operations.
//!
//! Error kinds are part of the public contract: callers pattern-match
//! on them, and `NotFound` in particular lets callers treat a missing
//! resource as idempotent absence.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Meridian SDK.
///
/// Every operation returns either a typed success value or exactly one
/// of these kinds; errors are never swallowed and no retries are
/// attempted at this layer.
#[derive(Debug, Error)]
pub enum MeridianError {
    /// Invalid or missing construction input (missing credential,
    /// malformed endpoint).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The login exchange failed with a non-200 status.
    #[error("authentication failed (HTTP {status}): {body}")]
    Authentication { status: StatusCode, body: String },

    /// The target resource does not exist, whether reported by an HTTP
    /// 404 or by a filtered-list lookup that came back empty.
    #[error("not found: {0}")]
    NotFound(String),

    /// The server answered with a non-success status outside of the
    /// cases above.
    #[error("API request failed (HTTP {status}): {body}")]
    ApiRequest { status: StatusCode, body: String },

    /// A response body could not be decoded into the expected shape.
    #[error("failed to decode response: {0}")]
    Decoding(String),

    /// The underlying HTTP transport failed (DNS, connect, TLS, I/O).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl MeridianError {
    pub(crate) fn not_found(id: &str) -> Self {
        Self::NotFound(format!("resource '{id}' does not exist"))
    }

    /// HTTP status carried by this error, when one applies.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Authentication { status, .. } | Self::ApiRequest { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error reports a missing resource.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type alias for Meridian operations.
pub type Result<T> = std::result::Result<T, MeridianError>;
