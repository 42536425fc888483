//! # Duotone - Theme-Conditional Class Composition
//!
//! `duotone` resolves adaptive class descriptors into the flat class
//! strings an HTML element carries in light or dark mode. Styling is
//! declared once, as ordered pairs of a base class and an optional
//! dark-mode counterpart; rendering picks a [`ColorMode`] and resolution
//! does the rest.
//!
//! ## Core Concepts
//!
//! - [`ClassSet`]: Ordered class pairs, resolved per mode into one string
//! - [`ColorMode`]: Light or dark, detected from the OS or set explicitly
//! - [`ClassSheet`]: Named class sets loaded from YAML
//! - [`Element`] / [`Document`]: An element tree serialized to HTML
//! - [`greeting_page`]: A complete page built through the pipeline
//!
//! ## Quick Start
//!
//! ```rust
//! use duotone::{ClassSet, ColorMode};
//!
//! let classes = ClassSet::new()
//!     .add_adaptive("bg-white", "bg-black")
//!     .add_adaptive("text-black", "text-white");
//!
//! // Light mode keeps only base classes.
//! assert_eq!(classes.resolve(ColorMode::Light), "bg-white text-black");
//!
//! // Dark mode emits each dark class right after its base, unprefixed.
//! assert_eq!(
//!     classes.resolve(ColorMode::Dark),
//!     "bg-white bg-black text-black text-white",
//! );
//! ```
//!
//! ## The Written Convention
//!
//! Sets round-trip through the conventional `dark:`-prefixed string form
//! used in markup and stylesheets:
//!
//! ```rust
//! use duotone::{ClassSet, ColorMode};
//!
//! let classes = ClassSet::parse("bg-white dark:bg-black rounded");
//! assert_eq!(classes.resolve(ColorMode::Dark), "bg-white bg-black rounded");
//! assert_eq!(classes.to_string(), "bg-white dark:bg-black rounded");
//! ```
//!
//! ## Building Pages
//!
//! Class sets meet markup through [`Element::class`], which resolves for
//! the mode being rendered:
//!
//! ```rust
//! use duotone::{greeting_page, ColorMode};
//!
//! let light = greeting_page(ColorMode::Light).to_html().unwrap();
//! let dark = greeting_page(ColorMode::Dark).to_html().unwrap();
//! assert!(light.contains(r#"<h1 class="text-black">"#));
//! assert!(dark.contains(r#"<h1 class="text-black text-white">"#));
//! ```
//!
//! ## Mode Detection
//!
//! [`detect_color_mode`] queries the OS preference, falling back to light
//! when the platform reports nothing. Applications can override detection
//! for testing or for an explicit user setting:
//!
//! ```rust
//! use duotone::{detect_color_mode, set_mode_detector, ColorMode};
//!
//! set_mode_detector(|| ColorMode::Dark);
//! assert_eq!(detect_color_mode(), ColorMode::Dark);
//! # duotone::set_mode_detector(duotone::os_mode_detector);
//! ```

// Internal modules
pub mod class;
pub mod markup;
mod page;
pub mod theme;

// Class module exports
pub use class::{
    is_dark_token, split_dark_token, ClassPair, ClassSet, ClassSetError, ClassSheet, SheetError,
    DARK_PREFIX,
};

// Theme module exports
pub use theme::{detect_color_mode, os_mode_detector, set_mode_detector, ColorMode};

// Markup module exports
pub use markup::{Document, Element, MarkupError, Node};

// Page exports
pub use page::greeting_page;
