//! Backup-and-DR policy operations.

use meridian_domain::{
    BackupPolicy, CreateBackupPolicyRequest, Page, PolicyStatus, UpdateBackupPolicyRequest,
};
use reqwest::{Method, StatusCode};
use serde::Serialize;

use crate::errors::Result;
use crate::http::ApiCore;

const BASE_PATH: &str = "/v2/backup-and-dr/policies";

#[derive(Serialize)]
struct SetStatusRequest {
    status: PolicyStatus,
}

/// Typed operations for the backup-and-DR policies family.
pub struct BackupPoliciesService<'a> {
    core: &'a ApiCore,
}

impl<'a> BackupPoliciesService<'a> {
    pub(crate) fn new(core: &'a ApiCore) -> Self {
        Self { core }
    }

    pub async fn list(&self, page_size: u32, offset: u32) -> Result<Page<BackupPolicy>> {
        let path = format!("{BASE_PATH}?pageSize={page_size}&offset={offset}");
        self.core.request_json::<(), _>(Method::GET, &path, None, &[StatusCode::OK]).await
    }

    pub async fn get(&self, id: &str) -> Result<BackupPolicy> {
        let path = format!("{BASE_PATH}/{}", urlencoding::encode(id));
        self.core.fetch_single(&path, id).await
    }

    pub async fn create(&self, request: &CreateBackupPolicyRequest) -> Result<BackupPolicy> {
        self.core
            .request_json(
                Method::POST,
                BASE_PATH,
                Some(request),
                &[StatusCode::OK, StatusCode::CREATED],
            )
            .await
    }

    pub async fn update(&self, id: &str, request: &UpdateBackupPolicyRequest) -> Result<BackupPolicy> {
        let path = format!("{BASE_PATH}/{}", urlencoding::encode(id));
        self.core.request_json(Method::PUT, &path, Some(request), &[StatusCode::OK]).await
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

    /// Transition a policy between `Active` and `Inactive`.
    ///
    /// The facade is stateless: it simply requests the target state,
    /// and illegal transitions surface as API request errors decided by
    /// the server.
    pub async fn set_status(&self, id: &str, status: PolicyStatus) -> Result<BackupPolicy> {
        let path = format!("{BASE_PATH}/{}/status", urlencoding::encode(id));
        self.core
            .request_json(
                Method::PATCH,
                &path,
                Some(&SetStatusRequest { status }),
                &[StatusCode::OK],
            )
            .await
    }
}
