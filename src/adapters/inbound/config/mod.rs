pub mod dto;
pub mod error;

pub use dto::{BucketConfig, load_bucket_config, parse_bucket_config};
pub use error::{ConfigError, ConfigResult};
