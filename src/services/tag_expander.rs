use tracing::debug;

use crate::domain::models::{Tag, TagMap};

/// Turn configured bucket tags into the tag set of a put-bucket-tagging request.
///
/// Keys and values are copied verbatim. The order of the returned tags is not
/// meaningful because the source map has none.
pub fn expand_bucket_tags(tags: &TagMap) -> Vec<Tag> {
    let expanded: Vec<Tag> = tags
        .iter()
        .map(|(key, value)| Tag::new(key.as_str(), value.as_str()))
        .collect();

    debug!(count = expanded.len(), "expanded bucket tags");
    expanded
}

/// Rebuild the configuration map from a tag set reported by the service
pub fn flatten_bucket_tags(tags: &[Tag]) -> TagMap {
    tags.iter()
        .map(|tag| (tag.key.clone(), tag.value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn tag_map(entries: &[(&str, &str)]) -> TagMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn as_set(tags: Vec<Tag>) -> HashSet<Tag> {
        tags.into_iter().collect()
    }

    #[test]
    fn test_expand_bucket_tags() {
        let cases = vec![
            ("no tags", tag_map(&[]), vec![]),
            (
                "single tag",
                tag_map(&[("key1", "val1")]),
                vec![Tag::new("key1", "val1")],
            ),
            (
                "many tags",
                tag_map(&[("key1", "val1"), ("key2", "val2"), ("key3", "val3")]),
                vec![
                    Tag::new("key1", "val1"),
                    Tag::new("key2", "val2"),
                    Tag::new("key3", "val3"),
                ],
            ),
        ];

        for (name, tags, want) in cases {
            let got = expand_bucket_tags(&tags);
            assert_eq!(got.len(), want.len(), "case: {}", name);
            assert_eq!(as_set(got), as_set(want), "case: {}", name);
        }
    }

    #[test]
    fn test_expand_keeps_values_verbatim() {
        let tags = tag_map(&[(" Env ", "Prod "), ("empty", "")]);
        let got = as_set(expand_bucket_tags(&tags));

        assert!(got.contains(&Tag::new(" Env ", "Prod ")));
        assert!(got.contains(&Tag::new("empty", "")));
    }

    #[test]
    fn test_flatten_inverts_expand() {
        let tags = tag_map(&[("key1", "val1"), ("key2", "val2")]);
        assert_eq!(flatten_bucket_tags(&expand_bucket_tags(&tags)), tags);
        assert!(flatten_bucket_tags(&[]).is_empty());
    }
}
