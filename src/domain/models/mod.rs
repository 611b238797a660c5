pub mod filter;
pub mod lifecycle;
pub mod tag;

pub use filter::{LifecycleRuleAndOperator, LifecycleRuleFilter};
pub use lifecycle::{
    LifecycleExpiration, LifecycleRule, RawLifecycleRule, STATUS_DISABLED, STATUS_ENABLED,
};
pub use tag::{Tag, TagMap};
