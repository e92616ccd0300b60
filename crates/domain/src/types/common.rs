//! Shared wire shapes used by every list endpoint.

use serde::{Deserialize, Serialize};

/// One page of a listed collection.
///
/// Every list endpoint returns `{"data": [...], "totalCount": N}` where
/// `totalCount` is the size of the full collection, not of this page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total_count: u64,
}
