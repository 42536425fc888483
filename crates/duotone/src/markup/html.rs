//! HTML serialization for the element tree.
//!
//! Writes through `quick_xml`'s event writer so text and attribute
//! escaping follow the library, with two HTML-specific adjustments: a
//! `<!DOCTYPE html>` preamble for `html` roots, and self-closing output
//! for void elements.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use thiserror::Error;

use super::{Document, Element, Node};

/// Errors that can occur while serializing a document.
#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("HTML serialization failed: {message}")]
    Serialize { message: String },
}

/// Elements the HTML spec defines as void: no content, no end tag.
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Serializes a document to an HTML string.
pub(super) fn write_document(doc: &Document) -> Result<String, MarkupError> {
    let mut writer = Writer::new(Vec::new());

    if doc.root().tag() == "html" {
        writer
            .write_event(Event::DocType(BytesText::new("html")))
            .map_err(serialize_err)?;
    }
    write_element(&mut writer, doc.root())?;

    String::from_utf8(writer.into_inner()).map_err(serialize_err)
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<(), MarkupError> {
    let mut start = BytesStart::new(element.tag());
    for (name, value) in element.attrs() {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if is_void_element(element.tag()) && element.children().is_empty() {
        writer
            .write_event(Event::Empty(start))
            .map_err(serialize_err)?;
        return Ok(());
    }

    writer
        .write_event(Event::Start(start))
        .map_err(serialize_err)?;
    for child in element.children() {
        match child {
            Node::Element(el) => write_element(writer, el)?,
            Node::Text(text) => writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(serialize_err)?,
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.tag())))
        .map_err(serialize_err)?;
    Ok(())
}

fn serialize_err(e: impl std::fmt::Display) -> MarkupError {
    MarkupError::Serialize {
        message: e.to_string(),
    }
}
