//! Workspace operations.

use meridian_domain::{
    CreateWorkspaceRequest, DestroyTask, Page, UpdateWorkspaceRequest, Workspace,
};
use reqwest::{Method, StatusCode};
use tracing::debug;

use crate::errors::Result;
use crate::http::ApiCore;

const BASE_PATH: &str = "/v2/workspaces";

/// Typed operations for the workspaces family.
pub struct WorkspacesService<'a> {
    core: &'a ApiCore,
}

impl<'a> WorkspacesService<'a> {
    pub(crate) fn new(core: &'a ApiCore) -> Self {
        Self { core }
    }

    pub async fn list(&self, page_size: u32, offset: u32) -> Result<Page<Workspace>> {
        let path = format!("{BASE_PATH}?pageSize={page_size}&offset={offset}");
        self.core.request_json::<(), _>(Method::GET, &path, None, &[StatusCode::OK]).await
    }

    pub async fn get(&self, id: &str) -> Result<Workspace> {
        let path = format!("{BASE_PATH}/{}", urlencoding::encode(id));
        self.core.fetch_single(&path, id).await
    }

    pub async fn create(&self, request: &CreateWorkspaceRequest) -> Result<Workspace> {
        self.core
            .request_json(
                Method::POST,
                BASE_PATH,
                Some(request),
                &[StatusCode::OK, StatusCode::CREATED],
            )
            .await
    }

    /// Update a workspace.
    ///
    /// The update endpoint echoes a partial, sometimes stale
    /// representation, so the response is discarded and the
    /// authoritative state is re-fetched through [`Self::get`].
    pub async fn update(&self, id: &str, request: &UpdateWorkspaceRequest) -> Result<Workspace> {
        let path = format!("{BASE_PATH}/{}", urlencoding::encode(id));
        self.core.request_empty(Method::PUT, &path, Some(request), &[StatusCode::OK]).await?;
        debug!(workspace = %id, "update accepted, refetching authoritative state");
        self.get(id).await
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

    /// Queue a server-side destroy task for the workspace's managed
    /// resources.
    pub async fn run_destroy_task(&self, id: &str) -> Result<DestroyTask> {
        let path = format!("{BASE_PATH}/{}/destroy", urlencoding::encode(id));
        self.core
            .request_json::<(), _>(
                Method::POST,
                &path,
                None,
                &[StatusCode::OK, StatusCode::ACCEPTED],
            )
            .await
    }
}
