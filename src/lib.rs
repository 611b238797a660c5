pub mod adapters;
pub mod app;
pub mod domain;
pub mod services;

// Re-export key types for convenience

// Domain types - request-level entities and value objects
pub use domain::{
    BucketName,
    LifecycleExpiration,
    LifecycleRule,
    LifecycleRuleAndOperator,
    LifecycleRuleFilter,
    RawLifecycleRule,
    Tag,
    TagMap,
    ValidationError,
};

// Expansion and flattening
pub use services::{
    expand_bucket_lifecycle_rules, expand_bucket_tags, flatten_bucket_lifecycle_rules,
    flatten_bucket_tags,
};

// Configuration documents
pub use adapters::inbound::config::{
    BucketConfig, ConfigError, load_bucket_config, parse_bucket_config,
};

// Request payloads
pub use adapters::outbound::request::{
    BucketLifecycleConfiguration, PutBucketLifecycleConfigurationInput, PutBucketTaggingInput,
    RequestError, Tagging,
};

pub use app::{
    AppConfig, AppError, BucketRequests, LifecycleRequest, OutputFormat, TaggingRequest,
    build_bucket_requests,
};

pub mod prelude {
    pub use crate::{
        BucketConfig, BucketName, LifecycleRule, RawLifecycleRule, Tag, TagMap,
        build_bucket_requests, expand_bucket_lifecycle_rules, expand_bucket_tags,
        load_bucket_config,
    };
}
