//! Flexible serde decoders for unstable response schemas.
//!
//! Two server quirks are absorbed here so the rest of the SDK only ever
//! sees the normalized shape:
//!
//! - a field documented as a list of strings is sometimes returned as a
//!   single bare string ([`string_or_list`]);
//! - the guardrail creation endpoint sometimes returns a bare JSON
//!   string instead of the `{ruleId, notificationId}` object (handled
//!   by the custom [`Deserialize`] on
//!   [`GuardrailCreated`](crate::types::guardrail::GuardrailCreated)).

/// Serde `with`-module for a list field that may arrive as a bare string.
///
/// Decoding:
/// - a JSON array of strings is accepted as-is;
/// - a JSON string produces a one-element list, or an empty list when
///   the string is empty;
/// - any other token is a decode error.
///
/// Encoding always emits a JSON array. Fields using this module should
/// also carry `#[serde(default, skip_serializing_if = "Vec::is_empty")]`
/// so a missing field decodes to empty and an empty list is omitted on
/// encode.
pub mod string_or_list {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrList {
        List(Vec<String>),
        Single(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match StringOrList::deserialize(deserializer)? {
            StringOrList::List(values) => Ok(values),
            StringOrList::Single(value) if value.is_empty() => Ok(Vec::new()),
            StringOrList::Single(value) => Ok(vec![value]),
        }
    }

    pub fn serialize<S>(values: &[String], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        values.serialize(serializer)
    }
}
