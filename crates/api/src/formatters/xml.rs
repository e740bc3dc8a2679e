//! XML rendering of serialized DTOs.
//!
//! Objects become elements whose children are named after the fields (first
//! letter upper-cased). A top-level list is wrapped in the resource's plural
//! element with one singular element per entry.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde_json::Value;

use super::{FormatError, Resource};

pub(super) fn render(resource: Resource, value: &Value) -> Result<Vec<u8>, FormatError> {
    let mut writer = Writer::new(Vec::new());
    write(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    match value {
        Value::Array(items) => {
            write(&mut writer, Event::Start(BytesStart::new(resource.plural)))?;
            for item in items {
                write_element(&mut writer, resource.singular, item)?;
            }
            write(&mut writer, Event::End(BytesEnd::new(resource.plural)))?;
        }
        other => write_element(&mut writer, resource.singular, other)?,
    }

    Ok(writer.into_inner())
}

fn write_element(writer: &mut Writer<Vec<u8>>, name: &str, value: &Value) -> Result<(), FormatError> {
    match value {
        Value::Null => write(writer, Event::Empty(BytesStart::new(name))),
        Value::Object(map) => {
            write(writer, Event::Start(BytesStart::new(name)))?;
            for (key, child) in map {
                write_element(writer, &element_name(key), child)?;
            }
            write(writer, Event::End(BytesEnd::new(name)))
        }
        Value::Array(items) => {
            write(writer, Event::Start(BytesStart::new(name)))?;
            for item in items {
                write_element(writer, "Item", item)?;
            }
            write(writer, Event::End(BytesEnd::new(name)))
        }
        Value::String(s) => write_text(writer, name, s),
        scalar => write_text(writer, name, &scalar.to_string()),
    }
}

fn write_text(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<(), FormatError> {
    write(writer, Event::Start(BytesStart::new(name)))?;
    write(writer, Event::Text(BytesText::new(text)))?;
    write(writer, Event::End(BytesEnd::new(name)))
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), FormatError> {
    writer
        .write_event(event)
        .map_err(|e| FormatError::Xml(e.to_string()))
}

/// `companyId` -> `CompanyId`.
fn element_name(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Field".to_string(),
    }
}
