//! Named class sets loaded from YAML.
//!
//! A sheet maps element names to [`ClassSet`]s, letting per-element styling
//! live in a file instead of code. Two entry forms are accepted:
//!
//! ```yaml
//! # Shorthand: a conventional class string, dark classes prefixed
//! wrapper: bg-white dark:bg-black
//!
//! # Structured: an ordered list of pairs
//! heading:
//!   - base: text-black
//!     dark: text-white
//!   - rounded            # plain string = base-only
//! ```
//!
//! Sheets are data only; resolution still happens per element, per render,
//! through [`ClassSet::resolve`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::error::SheetError;
use super::set::ClassSet;

/// A raw sheet entry as it appears in YAML.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EntryDef {
    /// A conventional class string (`"bg-white dark:bg-black"`).
    Shorthand(String),
    /// An explicit ordered pair list.
    Pairs(Vec<PairDef>),
}

/// A raw pair as it appears in a structured entry.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PairDef {
    /// A bare string: base class with no dark counterpart.
    Base(String),
    /// A `{ base, dark }` map; `dark` may be omitted.
    Full {
        base: String,
        #[serde(default)]
        dark: Option<String>,
    },
}

/// Named [`ClassSet`]s, typically one per styled element.
///
/// # Example
///
/// ```rust
/// use duotone::{ClassSheet, ColorMode};
///
/// let sheet = ClassSheet::from_yaml(r#"
/// wrapper: bg-white dark:bg-black
/// heading:
///   - base: text-black
///     dark: text-white
/// "#).unwrap();
///
/// let wrapper = sheet.get("wrapper").unwrap();
/// assert_eq!(wrapper.resolve(ColorMode::Dark), "bg-white bg-black");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClassSheet {
    /// Sheet name (typically derived from the filename).
    name: Option<String>,
    /// Source file path, when loaded from disk.
    source_path: Option<PathBuf>,
    entries: HashMap<String, ClassSet>,
}

impl ClassSheet {
    /// Creates a sheet from YAML content.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Parse`] if the YAML does not match either
    /// entry form.
    pub fn from_yaml(yaml: &str) -> Result<Self, SheetError> {
        let raw: HashMap<String, EntryDef> =
            serde_yaml::from_str(yaml).map_err(|e| SheetError::Parse {
                path: None,
                message: e.to_string(),
            })?;

        let entries = raw
            .into_iter()
            .map(|(name, def)| (name, build_set(def)))
            .collect();

        Ok(Self {
            name: None,
            source_path: None,
            entries,
        })
    }

    /// Loads a sheet from a YAML file.
    ///
    /// The sheet name is derived from the filename without extension, and
    /// the path is recorded so parse errors can point at the file.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Read`] if the file cannot be read, or
    /// [`SheetError::Parse`] if its content is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SheetError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SheetError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut sheet = Self::from_yaml(&content).map_err(|e| match e {
            SheetError::Parse { message, .. } => SheetError::Parse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })?;

        sheet.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string());
        sheet.source_path = Some(path.to_path_buf());
        Ok(sheet)
    }

    /// Returns the sheet name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the source file path, if this sheet was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Looks up the class set for an element name.
    pub fn get(&self, name: &str) -> Option<&ClassSet> {
        self.entries.get(name)
    }

    /// Returns an iterator over the entry names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the sheet has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies the strict styling policy to every entry.
    ///
    /// Entries are checked in name order so the reported entry is stable.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Entry`] naming the first offending entry.
    pub fn validate(&self) -> Result<(), SheetError> {
        let mut names: Vec<&str> = self.entries.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        for name in names {
            if let Err(source) = self.entries[name].validate() {
                return Err(SheetError::Entry {
                    entry: name.to_string(),
                    source,
                });
            }
        }
        Ok(())
    }
}

fn build_set(def: EntryDef) -> ClassSet {
    match def {
        EntryDef::Shorthand(written) => ClassSet::parse(&written),
        EntryDef::Pairs(pairs) => pairs
            .into_iter()
            .map(|pair| match pair {
                PairDef::Base(base) => super::pair::ClassPair::base_only(base),
                PairDef::Full { base, dark: None } => super::pair::ClassPair::base_only(base),
                PairDef::Full {
                    base,
                    dark: Some(dark),
                } => super::pair::ClassPair::adaptive(base, dark),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ColorMode;

    #[test]
    fn test_sheet_shorthand_entry() {
        let sheet = ClassSheet::from_yaml("wrapper: bg-white dark:bg-black").unwrap();
        let set = sheet.get("wrapper").unwrap();
        assert_eq!(set.resolve(ColorMode::Light), "bg-white");
        assert_eq!(set.resolve(ColorMode::Dark), "bg-white bg-black");
    }

    #[test]
    fn test_sheet_structured_entry() {
        let sheet = ClassSheet::from_yaml(
            r#"
            heading:
              - base: text-black
                dark: text-white
              - rounded
            "#,
        )
        .unwrap();

        let set = sheet.get("heading").unwrap();
        assert_eq!(set.resolve(ColorMode::Dark), "text-black text-white rounded");
        assert_eq!(set.resolve(ColorMode::Light), "text-black rounded");
    }

    #[test]
    fn test_sheet_structured_entry_without_dark() {
        let sheet = ClassSheet::from_yaml(
            r#"
            badge:
              - base: px-2
            "#,
        )
        .unwrap();

        let set = sheet.get("badge").unwrap();
        assert_eq!(set.resolve(ColorMode::Dark), "px-2");
    }

    #[test]
    fn test_sheet_missing_entry() {
        let sheet = ClassSheet::from_yaml("wrapper: bg-white").unwrap();
        assert!(sheet.get("missing").is_none());
    }

    #[test]
    fn test_sheet_invalid_yaml() {
        let result = ClassSheet::from_yaml("not valid yaml: [");
        assert!(matches!(result, Err(SheetError::Parse { .. })));
    }

    #[test]
    fn test_sheet_names_and_len() {
        let sheet = ClassSheet::from_yaml(
            r#"
            wrapper: bg-white dark:bg-black
            heading: text-black dark:text-white
            "#,
        )
        .unwrap();

        assert_eq!(sheet.len(), 2);
        let names: Vec<&str> = sheet.names().collect();
        assert!(names.contains(&"wrapper"));
        assert!(names.contains(&"heading"));
    }

    #[test]
    fn test_sheet_validate_flags_entry_by_name() {
        let sheet = ClassSheet::from_yaml(
            r#"
            fine: bg-white dark:bg-black
            panel: bg-black dark:bg-black
            "#,
        )
        .unwrap();

        let err = sheet.validate().unwrap_err();
        match err {
            SheetError::Entry { entry, .. } => assert_eq!(entry, "panel"),
            other => panic!("expected entry error, got {:?}", other),
        }
    }

    #[test]
    fn test_sheet_from_file() {
        use std::fs;
        use tempfile::TempDir;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.yaml");
        fs::write(&path, "wrapper: bg-white dark:bg-black\n").unwrap();

        let sheet = ClassSheet::from_file(&path).unwrap();
        assert_eq!(sheet.name(), Some("page"));
        assert_eq!(sheet.source_path(), Some(path.as_path()));
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn test_sheet_from_file_not_found() {
        let result = ClassSheet::from_file("/nonexistent/sheet.yaml");
        assert!(matches!(result, Err(SheetError::Read { .. })));
    }

    #[test]
    fn test_sheet_from_file_parse_error_names_path() {
        use std::fs;
        use tempfile::TempDir;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.yaml");
        fs::write(&path, "wrapper: [unclosed\n").unwrap();

        let err = ClassSheet::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("broken.yaml"));
    }
}
