use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, ConfigResult};
use crate::domain::{
    models::{RawLifecycleRule, TagMap},
    value_objects::BucketName,
};

/// Bucket attributes as written in a configuration document.
///
/// `tags` and `lifecycle_rule` may be left out entirely and then read as
/// empty. Field types are enforced by serde, so the expanders never see a
/// mistyped value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketConfig {
    pub name: String,
    #[serde(default)]
    pub tags: TagMap,
    #[serde(default)]
    pub lifecycle_rule: Vec<RawLifecycleRule>,
}

impl BucketConfig {
    /// Validate the configured name
    pub fn bucket_name(&self) -> ConfigResult<BucketName> {
        BucketName::new(self.name.as_str()).map_err(|source| ConfigError::InvalidBucketName {
            name: self.name.clone(),
            source,
        })
    }
}

/// Parse a JSON bucket configuration document
pub fn parse_bucket_config(document: &str) -> ConfigResult<BucketConfig> {
    Ok(serde_json::from_str(document)?)
}

/// Read and parse a JSON bucket configuration file
pub fn load_bucket_config(path: &Path) -> ConfigResult<BucketConfig> {
    let document = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_bucket_config(&document)
}
