//! Credential manager: lazy login exchange and bearer-token caching.

use chrono::{DateTime, Duration, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};
use url::Url;

use crate::errors::{MeridianError, Result};

const LOGIN_PATH: &str = "/v2/login";

/// Tokens are treated as expired this many seconds before their nominal
/// expiry to avoid racing a server-side revocation.
const EXPIRY_SKEW_SECS: i64 = 30;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    access_key: &'a str,
    secret_key: &'a str,
}

/// Login exchange response. The server also sends `tokenType`, which is
/// ignored (assumed to be `Bearer`).
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    access_token: String,
    /// Unix-epoch seconds.
    expires_at: i64,
}

struct CachedToken {
    token: String,
    expires_at: DateTime<Utc>,
}

/// Holds the immutable credential pair and the current bearer token.
///
/// A freshly constructed manager holds no token; the first call to
/// [`TokenManager::bearer_token`] performs the login exchange.
pub(crate) struct TokenManager {
    access_key: String,
    secret_key: String,
    state: Mutex<Option<CachedToken>>,
}

impl TokenManager {
    pub(crate) fn new(access_key: String, secret_key: String) -> Self {
        Self { access_key, secret_key, state: Mutex::new(None) }
    }

    /// Return a bearer token valid at the instant of the call,
    /// performing the login exchange when the cache is empty or
    /// expired.
    ///
    /// The cache lock is held across the exchange, so concurrent
    /// callers racing an expired token produce a single login and all
    /// reuse its result. The `(token, expiry)` pair is only ever
    /// written as a unit under the lock.
    pub(crate) async fn bearer_token(
        &self,
        transport: &reqwest::Client,
        base_url: &Url,
        user_agent: &str,
    ) -> Result<String> {
        let mut state = self.state.lock().await;

        if let Some(cached) = state.as_ref() {
            if Utc::now() < cached.expires_at {
                return Ok(cached.token.clone());
            }
            debug!("cached token expired, re-authenticating");
        }

        let url = base_url
            .join(LOGIN_PATH)
            .map_err(|e| MeridianError::Configuration(format!("cannot resolve login URL: {e}")))?;

        debug!(url = %url, "performing login exchange");

        // The login request itself carries no Authorization header.
        let response = transport
            .post(url)
            .header(reqwest::header::USER_AGENT, user_agent)
            .json(&LoginRequest {
                access_key: &self.access_key,
                secret_key: &self.secret_key,
            })
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(MeridianError::Authentication { status, body });
        }

        let bytes = response.bytes().await?;
        let login: LoginResponse = serde_json::from_slice(&bytes)
            .map_err(|e| MeridianError::Decoding(format!("login response: {e}")))?;

        let expires_at = DateTime::<Utc>::from_timestamp(login.expires_at, 0).ok_or_else(|| {
            MeridianError::Decoding(format!(
                "login response: expiresAt {} is out of range",
                login.expires_at
            ))
        })? - Duration::seconds(EXPIRY_SKEW_SECS);

        info!(expires_at = %expires_at, "authenticated against the control plane");

        let token = login.access_token.clone();
        *state = Some(CachedToken { token: login.access_token, expires_at });
        Ok(token)
    }
}
