//! Color mode detection for light/dark presentation.
//!
//! Pages built with duotone render differently depending on whether the
//! viewer's environment is in light or dark mode. This module models that
//! ambient signal as an explicit [`ColorMode`] value: detection happens once
//! at the edge (via [`detect_color_mode`]), and the mode is then threaded
//! through every render call as a plain parameter. Nothing in the class
//! resolver reads global state, which keeps resolution pure and testable.
//!
//! ## Detection
//!
//! [`detect_color_mode`] queries the OS preference. Override it in tests or
//! to force a mode:
//!
//! ```rust
//! use duotone::{set_mode_detector, ColorMode};
//!
//! set_mode_detector(|| ColorMode::Dark);
//! assert_eq!(duotone::detect_color_mode(), ColorMode::Dark);
//! # set_mode_detector(duotone::theme::os_mode_detector);
//! ```

mod detect;

pub use detect::{detect_color_mode, os_mode_detector, set_mode_detector, ColorMode};
