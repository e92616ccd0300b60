//! Project operations under the runners namespace.

use meridian_domain::{CreateProjectRequest, Page, Project, UpdateProjectRequest};
use reqwest::{Method, StatusCode};

use crate::errors::Result;
use crate::http::ApiCore;

const BASE_PATH: &str = "/v2/runners/projects";

/// Typed operations for the projects family.
pub struct ProjectsService<'a> {
    core: &'a ApiCore,
}

impl<'a> ProjectsService<'a> {
    pub(crate) fn new(core: &'a ApiCore) -> Self {
        Self { core }
    }

    /// List one page of projects. `search` filters by name and is
    /// omitted from the query when empty.
    pub async fn list(&self, page_size: u32, offset: u32, search: &str) -> Result<Page<Project>> {
        let mut path = format!("{BASE_PATH}/list?pageSize={page_size}&offset={offset}");
        if !search.is_empty() {
            path.push_str("&search=");
            path.push_str(&urlencoding::encode(search));
        }
        self.core.request_json::<(), _>(Method::GET, &path, None, &[StatusCode::OK]).await
    }

    /// Fetch a single project; a missing id surfaces as a not-found
    /// error.
    pub async fn get(&self, id: &str) -> Result<Project> {
        let path = format!("{BASE_PATH}/{}", urlencoding::encode(id));
        self.core.fetch_single(&path, id).await
    }

    pub async fn create(&self, request: &CreateProjectRequest) -> Result<Project> {
        self.core
            .request_json(
                Method::POST,
                BASE_PATH,
                Some(request),
                &[StatusCode::OK, StatusCode::CREATED],
            )
            .await
    }

    pub async fn update(&self, id: &str, request: &UpdateProjectRequest) -> Result<Project> {
        let path = format!("{BASE_PATH}/{}", urlencoding::encode(id));
        self.core.request_json(Method::PUT, &path, Some(request), &[StatusCode::OK]).await
    }

    /// Delete a project. An HTTP 204 with an empty body is success.
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
