use serde::{Deserialize, Serialize};

use super::tag::Tag;

/// Scope restriction of a lifecycle rule.
///
/// Mirrors the shapes an S3-compatible `Filter` element can take. Expansion
/// only ever produces [`LifecycleRuleFilter::Empty`]; the other variants exist
/// so prefix and tag scoping can be wired through without changing the model.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleRuleFilter {
    /// Matches every object in the bucket
    #[default]
    Empty,
    /// Objects whose key starts with the prefix
    Prefix(String),
    /// Objects carrying this exact tag
    Tag(Tag),
    /// Conjunction of a prefix and any number of tags
    And(LifecycleRuleAndOperator),
}

/// Combinator used when a filter needs more than one predicate
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LifecycleRuleAndOperator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl LifecycleRuleFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if filter is empty (matches everything)
    pub fn is_empty(&self) -> bool {
        matches!(self, LifecycleRuleFilter::Empty)
    }

    /// Get the prefix if this filter restricts by one
    pub fn prefix(&self) -> Option<&str> {
        match self {
            LifecycleRuleFilter::Prefix(prefix) => Some(prefix),
            LifecycleRuleFilter::And(and) => and.prefix.as_deref(),
            _ => None,
        }
    }

    /// Tags an object must carry to be in scope
    pub fn tags(&self) -> Vec<&Tag> {
        match self {
            LifecycleRuleFilter::Tag(tag) => vec![tag],
            LifecycleRuleFilter::And(and) => and.tags.iter().collect(),
            _ => Vec::new(),
        }
    }
}
