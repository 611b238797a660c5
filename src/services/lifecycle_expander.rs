use tracing::debug;

use crate::domain::models::{
    LifecycleExpiration, LifecycleRule, LifecycleRuleFilter, RawLifecycleRule,
};

/// Turn configured lifecycle rules into the rules of a
/// put-bucket-lifecycle-configuration request.
///
/// The output is index-aligned with `rules`: the service evaluates rules in
/// declaration order, so nothing here may reorder, merge or drop them.
/// `bucket` only labels log lines.
pub fn expand_bucket_lifecycle_rules(
    rules: &[RawLifecycleRule],
    bucket: &str,
) -> Vec<LifecycleRule> {
    let expanded: Vec<LifecycleRule> = rules.iter().map(expand_rule).collect();

    debug!(bucket, count = expanded.len(), "expanded lifecycle rules");
    expanded
}

fn expand_rule(raw: &RawLifecycleRule) -> LifecycleRule {
    LifecycleRule {
        id: raw.name.clone(),
        status: raw.status.clone(),
        // Prefix and tag scoping are not exposed in the configuration yet
        filter: LifecycleRuleFilter::Empty,
        expiration: expand_expiration(raw.expiration_days),
    }
}

// Zero is treated like an unset field. Sending Days=0 would expire everything.
fn expand_expiration(days: Option<i64>) -> Option<LifecycleExpiration> {
    days.filter(|&d| d != 0).map(LifecycleExpiration::after_days)
}

/// Rebuild configuration rules from the rules reported by the service
pub fn flatten_bucket_lifecycle_rules(rules: &[LifecycleRule]) -> Vec<RawLifecycleRule> {
    rules
        .iter()
        .map(|rule| RawLifecycleRule {
            name: rule.id.clone(),
            status: rule.status.clone(),
            expiration_days: rule.expiration.as_ref().and_then(|e| e.days),
        })
        .collect()
}
