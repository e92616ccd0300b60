//! The Meridian client and its facade accessors.

use crate::config::ClientBuilder;
use crate::http::ApiCore;
use crate::services::{
    BackupPoliciesService, GovernancePoliciesService, GuardrailsService, ProjectsService,
    VariableSetsService, WorkspacesService,
};

/// Identifying tag attached to every outbound request.
pub(crate) const USER_AGENT: &str = concat!("meridian-sdk-rust/", env!("CARGO_PKG_VERSION"));

/// Entry point to the Meridian API.
///
/// A client is created once per configuration and owns the base
/// endpoint, the transport handle and the credential manager. Service
/// facades borrow the client and are cheap to create on every call.
pub struct MeridianClient {
    core: ApiCore,
}

impl MeridianClient {
    /// Start building a new client.
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub(crate) fn from_parts(core: ApiCore) -> Self {
        Self { core }
    }

    /// Project operations under the runners namespace.
    #[must_use]
    pub fn projects(&self) -> ProjectsService<'_> {
        ProjectsService::new(&self.core)
    }

    /// Workspace operations.
    #[must_use]
    pub fn workspaces(&self) -> WorkspacesService<'_> {
        WorkspacesService::new(&self.core)
    }

    /// Variable-set operations.
    #[must_use]
    pub fn variable_sets(&self) -> VariableSetsService<'_> {
        VariableSetsService::new(&self.core)
    }

    /// Guardrail operations.
    #[must_use]
    pub fn guardrails(&self) -> GuardrailsService<'_> {
        GuardrailsService::new(&self.core)
    }

    /// Governance policy operations, served by the insights endpoint.
    #[must_use]
    pub fn governance_policies(&self) -> GovernancePoliciesService<'_> {
        GovernancePoliciesService::new(&self.core)
    }

    /// Backup-and-DR policy operations.
    #[must_use]
    pub fn backup_policies(&self) -> BackupPoliciesService<'_> {
        BackupPoliciesService::new(&self.core)
    }
}
