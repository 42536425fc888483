//! End-to-end output of the greeting page.
//!
//! These snapshots pin the full serialized document for each mode, so any
//! drift in resolution order, escaping, or void-element handling shows up
//! as a diff against a known-good page.

use duotone::{greeting_page, ColorMode};

const LIGHT_PAGE: &str = concat!(
    "<!DOCTYPE html>",
    r#"<html lang="en">"#,
    "<head>",
    r#"<meta charset="UTF-8"/>"#,
    r#"<meta name="viewport" content="width=device-width, initial-scale=1.0"/>"#,
    "<title>Document</title>",
    "</head>",
    "<body>",
    r#"<div class="bg-white">"#,
    r#"<h1 class="text-black">Hello World</h1>"#,
    r#"<div class="bg-black"></div>"#,
    "</div>",
    "</body>",
    "</html>",
);

const DARK_PAGE: &str = concat!(
    "<!DOCTYPE html>",
    r#"<html lang="en">"#,
    "<head>",
    r#"<meta charset="UTF-8"/>"#,
    r#"<meta name="viewport" content="width=device-width, initial-scale=1.0"/>"#,
    "<title>Document</title>",
    "</head>",
    "<body>",
    r#"<div class="bg-white bg-black">"#,
    r#"<h1 class="text-black text-white">Hello World</h1>"#,
    r#"<div class="bg-black bg-black"></div>"#,
    "</div>",
    "</body>",
    "</html>",
);

#[test]
fn test_light_page_html() {
    let html = greeting_page(ColorMode::Light).to_html().unwrap();
    assert_eq!(html, LIGHT_PAGE);
}

#[test]
fn test_dark_page_html() {
    let html = greeting_page(ColorMode::Dark).to_html().unwrap();
    assert_eq!(html, DARK_PAGE);
}

#[test]
fn test_rendered_pages_never_carry_the_written_prefix() {
    // The dark: prefix belongs to the written form only; resolution always
    // emits bare class names.
    for mode in [ColorMode::Light, ColorMode::Dark] {
        let html = greeting_page(mode).to_html().unwrap();
        assert!(!html.contains("dark:"), "prefix leaked into {:?} output", mode);
    }
}

#[test]
fn test_skeleton_identical_across_modes() {
    let light = without_class_values(LIGHT_PAGE);
    let dark = without_class_values(DARK_PAGE);
    assert_eq!(light, dark);
}

/// Blanks every class attribute value so only the document structure
/// remains for comparison.
fn without_class_values(html: &str) -> String {
    let mut out = String::new();
    let mut rest = html;
    while let Some(idx) = rest.find("class=\"") {
        let after = idx + "class=\"".len();
        out.push_str(&rest[..after]);
        match rest[after..].find('"') {
            Some(end) => rest = &rest[after + end..],
            None => break,
        }
    }
    out.push_str(rest);
    out
}
