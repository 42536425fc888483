//! The built-in greeting page.
//!
//! A small but complete page exercising the whole pipeline: class sets
//! declared per element, resolved once for the requested mode, and
//! attached to a tree ready for HTML output.
//!
//! ```rust
//! use duotone::{greeting_page, ColorMode};
//!
//! let html = greeting_page(ColorMode::Light).to_html().unwrap();
//! assert!(html.contains(r#"<div class="bg-white">"#));
//! assert!(!html.contains("dark:"));
//! ```

use crate::class::ClassSet;
use crate::markup::{Document, Element};
use crate::theme::ColorMode;

/// Builds the greeting page for the given color mode.
///
/// Every element declares its own [`ClassSet`] and resolves it here, so
/// the returned tree carries only flat class strings. Rendering the other
/// mode means calling again with the other mode; nothing is shared or
/// cached between renders.
pub fn greeting_page(mode: ColorMode) -> Document {
    let wrapper_classes = ClassSet::new().add_adaptive("bg-white", "bg-black");
    let heading_classes = ClassSet::new().add_adaptive("text-black", "text-white");
    let panel_classes = ClassSet::new().add_adaptive("bg-black", "bg-black");

    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "UTF-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1.0"),
        )
        .child(Element::new("title").text("Document"));

    let body = Element::new("body").child(
        Element::new("div")
            .class(&wrapper_classes, mode)
            .child(
                Element::new("h1")
                    .class(&heading_classes, mode)
                    .text("Hello World"),
            )
            .child(Element::new("div").class(&panel_classes, mode)),
    );

    Document::new(
        Element::new("html")
            .attr("lang", "en")
            .child(head)
            .child(body),
    )
}
