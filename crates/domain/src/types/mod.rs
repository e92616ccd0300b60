//! Resource models, one module per API family.

pub mod backup;
pub mod common;
pub mod flex;
pub mod governance;
pub mod guardrail;
pub mod project;
pub mod variable_set;
pub mod workspace;

pub use backup::{BackupPolicy, CreateBackupPolicyRequest, PolicyStatus, UpdateBackupPolicyRequest};
pub use common::Page;
pub use governance::{GovernancePolicy, InsightQuery};
pub use guardrail::{CreateGuardrailRequest, Guardrail, GuardrailCreated, UpdateGuardrailRequest};
pub use project::{CreateProjectRequest, Project, UpdateProjectRequest};
pub use variable_set::{CreateVariableSetRequest, Variable, VariableSet};
pub use workspace::{CreateWorkspaceRequest, DestroyTask, UpdateWorkspaceRequest, Workspace};
