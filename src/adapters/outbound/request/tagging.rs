use quick_xml::events::{BytesEnd, BytesStart, Event};
use serde::Serialize;

use super::error::RequestResult;
use super::xml;
use crate::domain::{models::Tag, value_objects::BucketName};

/// Body of a put-bucket-tagging request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Tagging {
    pub tag_set: Vec<Tag>,
}

/// A put-bucket-tagging request, ready to hand to a storage client
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PutBucketTaggingInput {
    pub bucket: String,
    pub tagging: Tagging,
}

impl PutBucketTaggingInput {
    pub fn new(bucket: &BucketName, tag_set: Vec<Tag>) -> Self {
        Self {
            bucket: bucket.to_string(),
            tagging: Tagging { tag_set },
        }
    }

    /// Render the XML request body
    pub fn to_xml(&self) -> RequestResult<String> {
        let mut writer = xml::start_document("Tagging")?;
        writer.write_event(Event::Start(BytesStart::new("TagSet")))?;
        for tag in &self.tagging.tag_set {
            xml::write_tag(&mut writer, tag)?;
        }
        writer.write_event(Event::End(BytesEnd::new("TagSet")))?;
        xml::finish_document(writer, "Tagging")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagging_body() {
        let bucket = BucketName::new("toto").unwrap();
        let input = PutBucketTaggingInput::new(&bucket, vec![Tag::new("key1", "val1")]);

        let xml = input.to_xml().unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(
            "<TagSet><Tag><Key>key1</Key><Value>val1</Value></Tag></TagSet></Tagging>"
        ));
        assert_eq!(input.bucket, "toto");
    }

    #[test]
    fn test_empty_tag_set_still_renders_container() {
        let bucket = BucketName::new("toto").unwrap();
        let xml = PutBucketTaggingInput::new(&bucket, Vec::new())
            .to_xml()
            .unwrap();

        assert!(xml.contains("<TagSet></TagSet>"));
    }
}
