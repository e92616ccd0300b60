//! Governance policy operations, served by the insights endpoint.

use meridian_domain::{GovernancePolicy, InsightQuery, Page};
use reqwest::{Method, StatusCode};

use crate::errors::{MeridianError, Result};
use crate::http::ApiCore;

const BASE_PATH: &str = "/v2/governance/insights";

/// Upper bound on the page fetched by the simulated single-item Get.
const SIMULATED_GET_PAGE_SIZE: u32 = 100;

/// Typed operations for the governance-policies family.
pub struct GovernancePoliciesService<'a> {
    core: &'a ApiCore,
}

impl<'a> GovernancePoliciesService<'a> {
    pub(crate) fn new(core: &'a ApiCore) -> Self {
        Self { core }
    }

    /// List governance policies matching the query.
    pub async fn list(&self, query: &InsightQuery) -> Result<Page<GovernancePolicy>> {
        self.core.request_json(Method::POST, BASE_PATH, Some(query), &[StatusCode::OK]).await
    }

    /// Fetch a single policy by id.
    ///
    /// The backend exposes no direct-get route and no id filter for
    /// this family, so a single bounded page is fetched and scanned
    /// client-side. A miss surfaces as a not-found error naming the id,
    /// never as a silent empty result.
    pub async fn get(&self, id: &str) -> Result<GovernancePolicy> {
        let query = InsightQuery {
            page_size: SIMULATED_GET_PAGE_SIZE,
            offset: 0,
            category: None,
        };
        let page = self.list(&query).await?;
        page.data
            .into_iter()
            .find(|policy| policy.id == id)
            .ok_or_else(|| MeridianError::not_found(id))
    }
}
