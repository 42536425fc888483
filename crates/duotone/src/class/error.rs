//! Class-related error types.
//!
//! Resolution itself is total and never fails; these errors come from the
//! opt-in validation policy and from sheet loading.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when class-set validation fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassSetError {
    /// A pair declares the same class as both base and dark override,
    /// making the element non-responsive to mode changes.
    #[error("class '{class}' is declared as its own dark override")]
    RedundantDarkOverride { class: String },
}

/// Error type for class-sheet loading and validation.
#[derive(Debug, Error)]
pub enum SheetError {
    /// The sheet file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The YAML content could not be parsed.
    #[error("failed to parse class sheet{}: {message}",
        path.as_ref().map(|p| format!(" {}", p.display())).unwrap_or_default())]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    /// A sheet entry failed the class-set validation policy.
    #[error("sheet entry '{entry}': {source}")]
    Entry {
        entry: String,
        #[source]
        source: ClassSetError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redundant_display() {
        let err = ClassSetError::RedundantDarkOverride {
            class: "bg-black".to_string(),
        };
        assert!(err.to_string().contains("bg-black"));
        assert!(err.to_string().contains("dark override"));
    }

    #[test]
    fn test_parse_display_with_and_without_path() {
        let bare = SheetError::Parse {
            path: None,
            message: "bad yaml".into(),
        };
        assert_eq!(bare.to_string(), "failed to parse class sheet: bad yaml");

        let located = SheetError::Parse {
            path: Some(PathBuf::from("styles/page.yaml")),
            message: "bad yaml".into(),
        };
        assert!(located.to_string().contains("styles/page.yaml"));
    }

    #[test]
    fn test_entry_display_carries_source() {
        let err = SheetError::Entry {
            entry: "panel".into(),
            source: ClassSetError::RedundantDarkOverride {
                class: "bg-black".into(),
            },
        };
        assert!(err.to_string().contains("panel"));
        assert!(err.to_string().contains("bg-black"));
    }
}
