use serde::Serialize;
use std::str::FromStr;
use tracing::{debug, info};

use crate::{
    adapters::{
        inbound::config::{BucketConfig, ConfigError},
        outbound::request::{
            PutBucketLifecycleConfigurationInput, PutBucketTaggingInput, RequestError,
        },
    },
    services::{expand_bucket_lifecycle_rules, expand_bucket_tags},
};

/// How request payloads are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Xml,
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xml" => Ok(OutputFormat::Xml),
            "json" => Ok(OutputFormat::Json),
            _ => Err(AppError::Configuration {
                message: format!("Unknown output format: {}", s),
            }),
        }
    }
}

/// Configuration for the application
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub output_format: OutputFormat,
}

/// What to send for the bucket tagging sub-resource.
///
/// An empty tag set is expressed as a delete: the tagging API has no way to
/// store "no tags" with a put.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TaggingRequest {
    Put(PutBucketTaggingInput),
    Delete { bucket: String },
}

/// What to send for the bucket lifecycle sub-resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LifecycleRequest {
    Put(PutBucketLifecycleConfigurationInput),
    Delete { bucket: String },
}

/// Every request needed to bring a bucket in line with its configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketRequests {
    pub tagging: TaggingRequest,
    pub lifecycle: LifecycleRequest,
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validate the bucket name and expand tags and lifecycle rules into requests
pub fn build_bucket_requests(config: &BucketConfig) -> Result<BucketRequests, AppError> {
    let bucket = config.bucket_name()?;

    let tags = expand_bucket_tags(&config.tags);
    let tagging = if tags.is_empty() {
        TaggingRequest::Delete {
            bucket: bucket.to_string(),
        }
    } else {
        TaggingRequest::Put(PutBucketTaggingInput::new(&bucket, tags))
    };

    let rules = expand_bucket_lifecycle_rules(&config.lifecycle_rule, bucket.as_str());
    let lifecycle = if rules.is_empty() {
        LifecycleRequest::Delete {
            bucket: bucket.to_string(),
        }
    } else {
        LifecycleRequest::Put(PutBucketLifecycleConfigurationInput::new(&bucket, rules))
    };

    info!(bucket = %bucket, "built bucket requests");
    Ok(BucketRequests { tagging, lifecycle })
}

impl TaggingRequest {
    pub fn render(&self, format: OutputFormat) -> Result<String, AppError> {
        match (self, format) {
            (_, OutputFormat::Json) => Ok(serde_json::to_string_pretty(self)?),
            (TaggingRequest::Put(input), OutputFormat::Xml) => {
                Ok(format!("PUT /{}?tagging\n{}", input.bucket, input.to_xml()?))
            }
            (TaggingRequest::Delete { bucket }, OutputFormat::Xml) => {
                Ok(format!("DELETE /{}?tagging", bucket))
            }
        }
    }
}

impl LifecycleRequest {
    pub fn render(&self, format: OutputFormat) -> Result<String, AppError> {
        match (self, format) {
            (_, OutputFormat::Json) => Ok(serde_json::to_string_pretty(self)?),
            (LifecycleRequest::Put(input), OutputFormat::Xml) => {
                Ok(format!("PUT /{}?lifecycle\n{}", input.bucket, input.to_xml()?))
            }
            (LifecycleRequest::Delete { bucket }, OutputFormat::Xml) => {
                Ok(format!("DELETE /{}?lifecycle", bucket))
            }
        }
    }
}

impl BucketRequests {
    pub fn render(&self, format: OutputFormat) -> Result<String, AppError> {
        debug!(?format, "rendering bucket requests");
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Xml => Ok(format!(
                "{}\n\n{}",
                self.tagging.render(format)?,
                self.lifecycle.render(format)?
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::inbound::config::parse_bucket_config;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("xml".parse::<OutputFormat>().unwrap(), OutputFormat::Xml);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_empty_config_deletes_sub_resources() {
        let config = parse_bucket_config(r#"{"name": "toto"}"#).unwrap();
        let requests = build_bucket_requests(&config).unwrap();

        assert_eq!(
            requests.tagging,
            TaggingRequest::Delete {
                bucket: "toto".to_string()
            }
        );
        assert_eq!(
            requests.lifecycle,
            LifecycleRequest::Delete {
                bucket: "toto".to_string()
            }
        );
        assert_eq!(
            requests.render(OutputFormat::Xml).unwrap(),
            "DELETE /toto?tagging\n\nDELETE /toto?lifecycle"
        );
    }

    #[test]
    fn test_configured_bucket_puts_sub_resources() {
        let config = parse_bucket_config(
            r#"{
                "name": "toto",
                "tags": {"key1": "val1"},
                "lifecycle_rule": [{"name": "rule1", "status": "Enabled", "expiration_days": 10}]
            }"#,
        )
        .unwrap();
        let requests = build_bucket_requests(&config).unwrap();

        match &requests.lifecycle {
            LifecycleRequest::Put(input) => {
                assert_eq!(input.lifecycle_configuration.rules.len(), 1);
                assert_eq!(input.lifecycle_configuration.rules[0].id, "rule1");
            }
            other => panic!("expected a put, got {:?}", other),
        }

        let json: serde_json::Value =
            serde_json::from_str(&requests.render(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["tagging"]["action"], "put");
        assert_eq!(json["tagging"]["tagging"]["tag_set"][0]["key"], "key1");
        assert_eq!(
            json["lifecycle"]["lifecycle_configuration"]["rules"][0]["expiration"]["days"],
            10
        );
    }

    #[test]
    fn test_invalid_bucket_name_is_reported() {
        let config = parse_bucket_config(r#"{"name": "x"}"#).unwrap();
        let err = build_bucket_requests(&config).unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::InvalidBucketName { .. })));
    }
}
