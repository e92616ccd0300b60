//! HTTP core: request pipeline and response classification.
//!
//! # Architecture
//!
//! - One transport handle shared by the login exchange and payload
//!   calls, so a caller-supplied timeout or cancellation covers both
//! - Lazy bearer authentication before every dispatch
//! - Response bodies fully consumed or discarded on every exit path,
//!   classified-error and decode-failure paths included

use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::auth::TokenManager;
use crate::errors::{MeridianError, Result};

/// Shared state behind every service facade: base endpoint, transport,
/// identifying tag and the credential manager.
pub(crate) struct ApiCore {
    pub(crate) base_url: Url,
    pub(crate) transport: reqwest::Client,
    pub(crate) user_agent: String,
    pub(crate) tokens: TokenManager,
}

impl ApiCore {
    /// Construct and execute a request against a relative path.
    ///
    /// Acquires a bearer token first and propagates its error without
    /// contacting the transport. A supplied body is serialized as JSON
    /// and sets `Content-Type: application/json`; an absent body sends
    /// neither. Path components containing arbitrary characters must be
    /// percent-encoded by the caller before composition.
    pub(crate) async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let token = self
            .tokens
            .bearer_token(&self.transport, &self.base_url, &self.user_agent)
            .await?;

        let url = self
            .base_url
            .join(path)
            .map_err(|e| MeridianError::Configuration(format!("cannot resolve '{path}': {e}")))?;

        debug!(%method, %url, "dispatching request");

        let mut request = self
            .transport
            .request(method, url)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"))
            .header(reqwest::header::USER_AGENT, &self.user_agent);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        debug!(status = %response.status(), "received response");
        Ok(response)
    }

    /// Dispatch and decode a JSON success body.
    pub(crate) async fn request_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        success: &[StatusCode],
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.dispatch(method, path, body).await?;
        Self::decode_json(response, success).await
    }

    /// Dispatch a call whose success carries no meaningful body.
    pub(crate) async fn request_empty<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        success: &[StatusCode],
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let response = self.dispatch(method, path, body).await?;
        Self::expect_empty(response, success).await
    }

    /// GET a single resource, mapping HTTP 404 to a not-found error
    /// that names the looked-up identifier.
    pub(crate) async fn fetch_single<T>(&self, path: &str, id: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.dispatch::<()>(Method::GET, path, None).await?;
        if response.status() == StatusCode::NOT_FOUND {
            let _ = response.bytes().await;
            return Err(MeridianError::not_found(id));
        }
        Self::decode_json(response, &[StatusCode::OK]).await
    }

    /// Decode a response declared to carry a JSON body on success.
    ///
    /// The body is read in full before decoding, so a decode failure
    /// still releases the connection.
    pub(crate) async fn decode_json<T>(response: Response, success: &[StatusCode]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !success.contains(&status) {
            return Err(Self::classify_failure(response).await);
        }
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| MeridianError::Decoding(format!("response body: {e}")))
    }

    /// Drain and discard a response declared to carry no body.
    pub(crate) async fn expect_empty(response: Response, success: &[StatusCode]) -> Result<()> {
        let status = response.status();
        if !success.contains(&status) {
            return Err(Self::classify_failure(response).await);
        }
        let _ = response.bytes().await;
        Ok(())
    }

    /// Read the failure body (best effort, decode failures collapse to
    /// empty text) and wrap status plus raw text.
    async fn classify_failure(response: Response) -> MeridianError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        MeridianError::ApiRequest { status, body }
    }
}
