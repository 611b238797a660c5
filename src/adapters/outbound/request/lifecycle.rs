use serde::Serialize;

use super::error::RequestResult;
use super::xml;
use crate::domain::{models::LifecycleRule, value_objects::BucketName};

/// Body of a put-bucket-lifecycle-configuration request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BucketLifecycleConfiguration {
    pub rules: Vec<LifecycleRule>,
}

/// A put-bucket-lifecycle-configuration request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PutBucketLifecycleConfigurationInput {
    pub bucket: String,
    pub lifecycle_configuration: BucketLifecycleConfiguration,
}

impl PutBucketLifecycleConfigurationInput {
    pub fn new(bucket: &BucketName, rules: Vec<LifecycleRule>) -> Self {
        Self {
            bucket: bucket.to_string(),
            lifecycle_configuration: BucketLifecycleConfiguration { rules },
        }
    }

    /// Render the XML request body. Rules keep their order.
    pub fn to_xml(&self) -> RequestResult<String> {
        let mut writer = xml::start_document("LifecycleConfiguration")?;
        for rule in &self.lifecycle_configuration.rules {
            xml::write_rule(&mut writer, rule)?;
        }
        xml::finish_document(writer, "LifecycleConfiguration")
    }
}
