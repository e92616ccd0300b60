//! Variable-set resources.

use serde::{Deserialize, Serialize};

/// A named collection of variables attachable to a scope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VariableSet {
    pub id: String,
    pub name: String,
    /// Attachment scope, e.g. `"organization"`, `"project"` or
    /// `"workspace"`.
    pub scope: String,
    #[serde(default)]
    pub variables: Vec<Variable>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub sensitive: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateVariableSetRequest {
    pub name: String,
    pub scope: String,
    #[serde(default)]
    pub variables: Vec<Variable>,
}
