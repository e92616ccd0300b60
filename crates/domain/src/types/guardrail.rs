//! Guardrail resources.

use serde::{Deserialize, Serialize};

/// A guardrail rule as returned by list and update endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Guardrail {
    pub rule_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuardrailRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGuardrailRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Result of creating a guardrail.
///
/// The creation endpoint sometimes returns the full
/// `{"ruleId": ..., "notificationId": ...}` object and sometimes a bare
/// JSON string holding the new rule id. Decoding tries the object first
/// and falls back to the string, normalizing to this struct with an
/// empty `notification_id`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GuardrailCreated {
    pub rule_id: String,
    pub notification_id: String,
}

impl<'de> Deserialize<'de> for GuardrailCreated {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Object {
            rule_id: String,
            #[serde(default)]
            notification_id: String,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Object(Object),
            Id(String),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Object(object) => Self {
                rule_id: object.rule_id,
                notification_id: object.notification_id,
            },
            Wire::Id(rule_id) => Self { rule_id, notification_id: String::new() },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::GuardrailCreated;

    #[test]
    fn decodes_object_form() {
        let created: GuardrailCreated =
            serde_json::from_str(r#"{"ruleId":"rule-123","notificationId":"n-1"}"#).unwrap();
        assert_eq!(created.rule_id, "rule-123");
        assert_eq!(created.notification_id, "n-1");
    }

    #[test]
    fn decodes_bare_string_form() {
        let created: GuardrailCreated = serde_json::from_str(r#""rule-123""#).unwrap();
        assert_eq!(created.rule_id, "rule-123");
        assert_eq!(created.notification_id, "");
    }

    #[test]
    fn both_forms_normalize_to_the_same_value() {
        let from_string: GuardrailCreated = serde_json::from_str(r#""rule-123""#).unwrap();
        let from_object: GuardrailCreated =
            serde_json::from_str(r#"{"ruleId":"rule-123","notificationId":""}"#).unwrap();
        assert_eq!(from_string, from_object);
    }

    #[test]
    fn object_without_notification_id_defaults_to_empty() {
        let created: GuardrailCreated = serde_json::from_str(r#"{"ruleId":"rule-9"}"#).unwrap();
        assert_eq!(created.notification_id, "");
    }

    #[test]
    fn rejects_other_tokens() {
        assert!(serde_json::from_str::<GuardrailCreated>("42").is_err());
        assert!(serde_json::from_str::<GuardrailCreated>("[1]").is_err());
    }
}
