use super::filter::LifecycleRuleFilter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status value that turns a rule on
pub const STATUS_ENABLED: &str = "Enabled";
/// Status value that keeps a rule declared but inactive
pub const STATUS_DISABLED: &str = "Disabled";

/// A lifecycle rule as declared in a bucket configuration document.
///
/// Field names follow the configuration schema, not the storage API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLifecycleRule {
    pub name: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_days: Option<i64>,
}

/// A lifecycle rule shaped for a put-bucket-lifecycle-configuration request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LifecycleRule {
    pub id: String,
    /// Passed through untouched; the storage service decides what it accepts
    pub status: String,
    pub filter: LifecycleRuleFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<LifecycleExpiration>,
}

/// When objects matched by a rule expire.
///
/// Only `days` is filled in by expansion. A rule without any expiration must
/// carry `None` rather than a zeroed value: zero days asks the service to
/// expire objects immediately.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LifecycleExpiration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired_object_delete_marker: Option<bool>,
}

impl LifecycleExpiration {
    pub fn after_days(days: i64) -> Self {
        Self {
            days: Some(days),
            ..Default::default()
        }
    }

    /// True when no field would end up in the request body
    pub fn is_unset(&self) -> bool {
        self.days.is_none() && self.date.is_none() && self.expired_object_delete_marker.is_none()
    }
}

impl LifecycleRule {
    pub fn is_enabled(&self) -> bool {
        self.status == STATUS_ENABLED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_rule_without_expiration_deserializes_to_none() {
        let raw: RawLifecycleRule =
            serde_json::from_str(r#"{"name":"rule1","status":"Enabled"}"#).unwrap();
        assert_eq!(raw.expiration_days, None);
    }

    #[test]
    fn rule_serialization_omits_missing_expiration() {
        let rule = LifecycleRule {
            id: "rule1".to_string(),
            status: STATUS_DISABLED.to_string(),
            ..Default::default()
        };

        let json = serde_json::to_value(&rule).unwrap();
        assert!(json.get("expiration").is_none());
        assert_eq!(json["filter"], "empty");
        assert!(!rule.is_enabled());
    }

    #[test]
    fn after_days_only_sets_days() {
        let expiration = LifecycleExpiration::after_days(10);
        assert_eq!(expiration.days, Some(10));
        assert_eq!(expiration.date, None);
        assert_eq!(expiration.expired_object_delete_marker, None);
        assert!(!expiration.is_unset());
        assert!(LifecycleExpiration::default().is_unset());
    }
}
