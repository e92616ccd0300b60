//! Client configuration and construction.

use std::time::Duration;

use url::Url;

use crate::auth::TokenManager;
use crate::client::{MeridianClient, USER_AGENT};
use crate::errors::{MeridianError, Result};
use crate::http::ApiCore;

/// Documented production endpoint, used when none is supplied.
pub const DEFAULT_ENDPOINT: &str = "https://api.meridian.io";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for [`MeridianClient`].
///
/// `access_key` and `secret_key` are required and must be non-empty;
/// `endpoint` and `transport` are optional. Construction performs no
/// network traffic.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    access_key: Option<String>,
    secret_key: Option<String>,
    endpoint: Option<String>,
    transport: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Credential identifier used by the login exchange.
    #[must_use]
    pub fn access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    /// Credential secret used by the login exchange.
    #[must_use]
    pub fn secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Base HTTPS URL of the control plane; defaults to
    /// [`DEFAULT_ENDPOINT`].
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Inject an HTTP transport, e.g. to supply a custom timeout. The
    /// default transport enforces a 30-second ceiling on the whole
    /// round-trip.
    #[must_use]
    pub fn transport(mut self, transport: reqwest::Client) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Validate the configuration and build the client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when either credential is missing
    /// or empty, the endpoint fails URL parsing, or the default
    /// transport cannot be built.
    pub fn build(self) -> Result<MeridianClient> {
        let access_key = match self.access_key {
            Some(key) if !key.is_empty() => key,
            _ => {
                return Err(MeridianError::Configuration(
                    "access key is required and must not be empty".into(),
                ))
            }
        };
        let secret_key = match self.secret_key {
            Some(key) if !key.is_empty() => key,
            _ => {
                return Err(MeridianError::Configuration(
                    "secret key is required and must not be empty".into(),
                ))
            }
        };

        let endpoint = self.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let base_url = Url::parse(&endpoint)
            .map_err(|e| MeridianError::Configuration(format!("invalid endpoint '{endpoint}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(MeridianError::Configuration(format!(
                "endpoint '{endpoint}' cannot serve as a base URL"
            )));
        }

        let transport = match self.transport {
            Some(transport) => transport,
            None => reqwest::Client::builder()
                .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
                .build()
                .map_err(|e| {
                    MeridianError::Configuration(format!("failed to build default transport: {e}"))
                })?,
        };

        Ok(MeridianClient::from_parts(ApiCore {
            base_url,
            transport,
            user_agent: USER_AGENT.to_string(),
            tokens: TokenManager::new(access_key, secret_key),
        }))
    }
}
