use std::io;
use std::path::PathBuf;
use thiserror::Error as ThisError;

use crate::domain::errors::ValidationError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid bucket configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid bucket name '{name}': {source}")]
    InvalidBucketName {
        name: String,
        #[source]
        source: ValidationError,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
