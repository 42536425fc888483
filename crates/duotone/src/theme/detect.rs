//! OS color-mode detection with a swappable detector.

use once_cell::sync::Lazy;
use std::sync::Mutex;

/// The active light/dark presentation setting.
///
/// Supplied by the environment (OS preference, user flag, test override) and
/// passed explicitly into every render call. Immutable for the duration of a
/// single render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used to determine the ambient color mode.
///
/// Useful for testing or for forcing a specific mode regardless of the OS
/// setting. Pass [`os_mode_detector`] to restore the default behavior.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Returns the ambient color mode from the currently installed detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = MODE_DETECTOR.lock().unwrap();
    (*detector)()
}

/// The default detector: queries the OS preference via `dark-light`.
///
/// An unspecified preference or a detection failure falls back to
/// [`ColorMode::Light`].
pub fn os_mode_detector() -> ColorMode {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => ColorMode::Dark,
        Ok(dark_light::Mode::Light) | Ok(dark_light::Mode::Unspecified) | Err(_) => {
            ColorMode::Light
        }
    }
}
