//! # Duotone Strip - Dark Class Removal
//!
//! `duotone-strip` removes written `dark:` class variants from files, for
//! codebases dropping dark-mode support or moving it out of markup. The
//! crate is a library behind a small CLI:
//!
//! - [`strip_dark_classes`]: Remove dark tokens from one piece of content
//! - [`process_tree`]: Walk a directory and rewrite matching files
//! - [`render_report`]: Turn a run's results into text, JSON, or YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use duotone_strip::strip_dark_classes;
//!
//! let outcome = strip_dark_classes(r#"<div class="bg-white dark:bg-black">"#);
//! assert_eq!(outcome.stripped, r#"<div class="bg-white">"#);
//! assert_eq!(outcome.matches, vec!["dark:bg-black"]);
//! ```
//!
//! Processing a tree collects a report instead of printing as it goes, so
//! the same run can feed the styled terminal report or a structured
//! format:
//!
//! ```rust,no_run
//! use std::path::Path;
//! use duotone_strip::{process_tree, render_report, ReportFormat};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = process_tree(Path::new("src"), true)?;
//! println!("{}", render_report(&report, ReportFormat::Plain)?);
//! # Ok(())
//! # }
//! ```

pub mod report;
pub mod scan;
pub mod walk;

pub use report::{render_report, FileReport, ReportError, ReportFormat, RunReport};
pub use scan::{strip_dark_classes, StripOutcome};
pub use walk::{process_tree, StripError};
