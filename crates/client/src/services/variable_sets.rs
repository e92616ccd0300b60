//! Variable-set operations.

use meridian_domain::{CreateVariableSetRequest, Page, VariableSet};
use reqwest::{Method, StatusCode};

use crate::errors::{MeridianError, Result};
use crate::http::ApiCore;

const BASE_PATH: &str = "/v2/variable-sets";

/// Typed operations for the variable-sets family.
pub struct VariableSetsService<'a> {
    core: &'a ApiCore,
}

impl<'a> VariableSetsService<'a> {
    pub(crate) fn new(core: &'a ApiCore) -> Self {
        Self { core }
    }

    pub async fn list(&self, page_size: u32, offset: u32) -> Result<Page<VariableSet>> {
        let path = format!("{BASE_PATH}?pageSize={page_size}&offset={offset}");
        self.core.request_json::<(), _>(Method::GET, &path, None, &[StatusCode::OK]).await
    }

    /// Fetch a single variable set.
    ///
    /// The backend has no direct-get route for this family; the list
    /// endpoint is queried with an id filter of size one and the single
    /// element selected client-side. An absent id surfaces as the same
    /// not-found error an HTTP 404 would produce.
    pub async fn get(&self, id: &str) -> Result<VariableSet> {
        let path = format!("{BASE_PATH}?id={}&pageSize=1", urlencoding::encode(id));
        let page: Page<VariableSet> =
            self.core.request_json::<(), _>(Method::GET, &path, None, &[StatusCode::OK]).await?;
        page.data
            .into_iter()
            .find(|set| set.id == id)
            .ok_or_else(|| MeridianError::not_found(id))
    }

    pub async fn create(&self, request: &CreateVariableSetRequest) -> Result<VariableSet> {
        self.core
            .request_json(
                Method::POST,
                BASE_PATH,
                Some(request),
                &[StatusCode::OK, StatusCode::CREATED],
            )
            .await
    }

    /// Replace a variable set with the supplied value; the server
    /// echoes the stored representation back.
    pub async fn update(&self, set: &VariableSet) -> Result<VariableSet> {
        let path = format!("{BASE_PATH}/{}", urlencoding::encode(&set.id));
        self.core.request_json(Method::PUT, &path, Some(set), &[StatusCode::OK]).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let path = format!("{BASE_PATH}/{}", urlencoding::encode(id));
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
