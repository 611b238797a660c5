use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tags as they come out of a configuration document.
///
/// Iteration order is unspecified, so anything built from a `TagMap` must be
/// compared as a set rather than by position.
pub type TagMap = HashMap<String, String>;

/// A single key/value label attached to a bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
