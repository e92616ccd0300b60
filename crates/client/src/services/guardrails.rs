//! Guardrail operations.

use meridian_domain::{
    CreateGuardrailRequest, Guardrail, GuardrailCreated, Page, UpdateGuardrailRequest,
};
use reqwest::{Method, StatusCode};

use crate::errors::Result;
use crate::http::ApiCore;

const BASE_PATH: &str = "/v2/guardrails";

/// Typed operations for the guardrails family.
pub struct GuardrailsService<'a> {
    core: &'a ApiCore,
}

impl<'a> GuardrailsService<'a> {
    pub(crate) fn new(core: &'a ApiCore) -> Self {
        Self { core }
    }

    /// Create a guardrail.
    ///
    /// The creation endpoint sometimes answers with a bare JSON string
    /// instead of the full object; both forms decode to the same
    /// [`GuardrailCreated`] value.
    pub async fn create(&self, request: &CreateGuardrailRequest) -> Result<GuardrailCreated> {
        self.core
            .request_json(
                Method::POST,
                BASE_PATH,
                Some(request),
                &[StatusCode::OK, StatusCode::CREATED],
            )
            .await
    }

    pub async fn list(&self, page_size: u32, offset: u32) -> Result<Page<Guardrail>> {
        let path = format!("{BASE_PATH}?pageSize={page_size}&offset={offset}");
        self.core.request_json::<(), _>(Method::GET, &path, None, &[StatusCode::OK]).await
    }

    pub async fn get(&self, rule_id: &str) -> Result<Guardrail> {
        let path = format!("{BASE_PATH}/{}", urlencoding::encode(rule_id));
        self.core.fetch_single(&path, rule_id).await
    }

    pub async fn update(&self, rule_id: &str, request: &UpdateGuardrailRequest) -> Result<Guardrail> {
        let path = format!("{BASE_PATH}/{}", urlencoding::encode(rule_id));
        self.core.request_json(Method::PATCH, &path, Some(request), &[StatusCode::OK]).await
    }

    pub async fn delete(&self, rule_id: &str) -> Result<()> {
        let path = format!("{BASE_PATH}/{}", urlencoding::encode(rule_id));
        self.core
            .request_empty::<()>(
                Method::DELETE,
                &path,
                None,
                &[StatusCode::OK, StatusCode::NO_CONTENT],
            )
            .await
    }
}
