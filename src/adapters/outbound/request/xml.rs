use chrono::{DateTime, Utc};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;

use super::error::RequestResult;
use crate::domain::models::{LifecycleExpiration, LifecycleRule, LifecycleRuleFilter, Tag};

const S3_NAMESPACE: &str = "http://s3.amazonaws.com/doc/2006-03-01/";

pub(crate) type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Start a document whose root element carries the S3 namespace
pub(crate) fn start_document(root: &str) -> RequestResult<XmlWriter> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(
        BytesStart::new(root).with_attributes([("xmlns", S3_NAMESPACE)]),
    ))?;
    Ok(writer)
}

pub(crate) fn finish_document(mut writer: XmlWriter, root: &str) -> RequestResult<String> {
    writer.write_event(Event::End(BytesEnd::new(root)))?;
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

fn write_text_element(writer: &mut XmlWriter, name: &str, text: &str) -> RequestResult<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

pub(crate) fn write_tag(writer: &mut XmlWriter, tag: &Tag) -> RequestResult<()> {
    writer.write_event(Event::Start(BytesStart::new("Tag")))?;
    write_text_element(writer, "Key", &tag.key)?;
    write_text_element(writer, "Value", &tag.value)?;
    writer.write_event(Event::End(BytesEnd::new("Tag")))?;
    Ok(())
}

pub(crate) fn write_rule(writer: &mut XmlWriter, rule: &LifecycleRule) -> RequestResult<()> {
    writer.write_event(Event::Start(BytesStart::new("Rule")))?;

    if !rule.id.is_empty() {
        write_text_element(writer, "ID", &rule.id)?;
    }
    write_text_element(writer, "Status", &rule.status)?;
    write_filter(writer, &rule.filter)?;

    if let Some(expiration) = rule.expiration.as_ref().filter(|e| !e.is_unset()) {
        write_expiration(writer, expiration)?;
    }

    writer.write_event(Event::End(BytesEnd::new("Rule")))?;
    Ok(())
}

// An empty Filter element still has to be sent: it scopes the rule to the
// whole bucket.
fn write_filter(writer: &mut XmlWriter, filter: &LifecycleRuleFilter) -> RequestResult<()> {
    writer.write_event(Event::Start(BytesStart::new("Filter")))?;

    match filter {
        LifecycleRuleFilter::Empty => {}
        LifecycleRuleFilter::Prefix(prefix) => write_text_element(writer, "Prefix", prefix)?,
        LifecycleRuleFilter::Tag(tag) => write_tag(writer, tag)?,
        LifecycleRuleFilter::And(and) => {
            writer.write_event(Event::Start(BytesStart::new("And")))?;
            if let Some(prefix) = &and.prefix {
                write_text_element(writer, "Prefix", prefix)?;
            }
            for tag in &and.tags {
                write_tag(writer, tag)?;
            }
            writer.write_event(Event::End(BytesEnd::new("And")))?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new("Filter")))?;
    Ok(())
}

fn write_expiration(writer: &mut XmlWriter, expiration: &LifecycleExpiration) -> RequestResult<()> {
    writer.write_event(Event::Start(BytesStart::new("Expiration")))?;

    if let Some(days) = expiration.days {
        write_text_element(writer, "Days", &days.to_string())?;
    }
    if let Some(date) = expiration.date {
        write_text_element(writer, "Date", &format_iso8601_date(date))?;
    }
    if let Some(marker) = expiration.expired_object_delete_marker {
        write_text_element(writer, "ExpiredObjectDeleteMarker", &marker.to_string())?;
    }

    writer.write_event(Event::End(BytesEnd::new("Expiration")))?;
    Ok(())
}

fn format_iso8601_date(date: DateTime<Utc>) -> String {
    date.to_rfc3339()
}
