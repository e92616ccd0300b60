//! # Meridian Client
//!
//! Typed async client for the Meridian cloud-governance control plane.
//!
//! The client owns the base endpoint, acquires and reuses short-lived
//! bearer credentials, and classifies responses into typed results or
//! typed errors. Service facades (`client.projects()`, …) expose the
//! per-family CRUD operations and delegate every HTTP concern to the
//! core.
//!
//! ## Architecture
//! - Lazy authentication: construction performs no network traffic;
//!   the first call that needs a token performs the login exchange
//! - Single-flight re-login under one lock; callers holding a valid
//!   token never wait on the exchange of another caller
//! - No retries, queueing or background work; concurrency is whatever
//!   the caller provides
//!
//! ```no_run
//! # async fn example() -> meridian_client::Result<()> {
//! use meridian_client::MeridianClient;
//!
//! let client = MeridianClient::builder()
//!     .access_key("AK")
//!     .secret_key("SK")
//!     .build()?;
//!
//! let page = client.projects().list(10, 0, "").await?;
//! for project in page.data {
//!     println!("{} {}", project.id, project.name);
//! }
//! # Ok(())
//! # }
//! ```

mod auth;
mod client;
mod config;
mod errors;
mod http;
mod services;

pub use client::MeridianClient;
pub use config::{ClientBuilder, DEFAULT_ENDPOINT};
pub use errors::{MeridianError, Result};
pub use services::{
    BackupPoliciesService, GovernancePoliciesService, GuardrailsService, ProjectsService,
    VariableSetsService, WorkspacesService,
};

// Re-export the domain models so callers need a single dependency.
pub use meridian_domain as domain;
