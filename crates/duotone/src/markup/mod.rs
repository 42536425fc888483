//! Element tree construction and HTML output.
//!
//! Pages are built as plain trees of [`Element`] and text nodes, with
//! class attributes attached by resolving a [`ClassSet`] against the
//! active [`ColorMode`]:
//!
//! ```rust
//! use duotone::{ClassSet, ColorMode, Document, Element};
//!
//! let classes = ClassSet::new().add_adaptive("bg-white", "bg-black");
//! let root = Element::new("div")
//!     .class(&classes, ColorMode::Light)
//!     .text("hello");
//!
//! let html = Document::new(root).to_html().unwrap();
//! assert_eq!(html, r#"<div class="bg-white">hello</div>"#);
//! ```
//!
//! The tree itself knows nothing about markup syntax; serialization lives
//! in the `html` submodule and is reached through [`Document::to_html`].

mod html;

pub use html::MarkupError;

use crate::class::ClassSet;
use crate::theme::ColorMode;

/// A node in the element tree: either a child element or a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Returns the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Returns the text content if this node is a text run.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }
}

/// An element with a tag name, ordered attributes, and child nodes.
///
/// Built with consuming methods so trees read top-down:
///
/// ```rust
/// use duotone::Element;
///
/// let head = Element::new("head")
///     .child(Element::new("meta").attr("charset", "UTF-8"))
///     .child(Element::new("title").text("Document"));
/// assert_eq!(head.children().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an element with the given tag name and no attributes or
    /// children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends an attribute. Attributes serialize in insertion order.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Resolves `classes` for `mode` and attaches the result as the
    /// `class` attribute.
    ///
    /// The resolved string is attached verbatim; this is the single point
    /// where theme-conditional styling meets the tree.
    pub fn class(self, classes: &ClassSet, mode: ColorMode) -> Self {
        self.attr("class", classes.resolve(mode))
    }

    /// Appends a child element.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Appends a text node.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Returns the tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the attributes in insertion order.
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Returns the value of the named attribute, if present.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the child nodes in order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// A complete document: a root element serialized behind a doctype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Creates a document with the given root element.
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Returns the root element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Serializes the document to an HTML string.
    ///
    /// Only `html` roots get a `<!DOCTYPE html>` preamble; fragments
    /// rooted elsewhere serialize bare.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError`] if the underlying writer fails.
    pub fn to_html(&self) -> Result<String, MarkupError> {
        html::write_document(self)
    }
}
