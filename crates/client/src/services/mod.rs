//! Service facades, one per resource family.
//!
//! Facades own only their path templates, wire shapes and
//! endpoint-quirk workarounds; every HTTP concern is delegated to the
//! core. Identifiers injected into URL paths are percent-encoded here.

mod backup;
mod governance;
mod guardrails;
mod projects;
mod variable_sets;
mod workspaces;

pub use backup::BackupPoliciesService;
pub use governance::GovernancePoliciesService;
pub use guardrails::GuardrailsService;
pub use projects::ProjectsService;
pub use variable_sets::VariableSetsService;
pub use workspaces::WorkspacesService;
