mod lifecycle_expander;
mod tag_expander;

pub use lifecycle_expander::{expand_bucket_lifecycle_rules, flatten_bucket_lifecycle_rules};
pub use tag_expander::{expand_bucket_tags, flatten_bucket_tags};
