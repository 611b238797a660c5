pub mod error;
pub mod lifecycle;
pub mod tagging;
mod xml;

pub use error::{RequestError, RequestResult};
pub use lifecycle::{BucketLifecycleConfiguration, PutBucketLifecycleConfigurationInput};
pub use tagging::{PutBucketTaggingInput, Tagging};
