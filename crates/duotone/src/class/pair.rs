//! A single base/dark class pair.

/// One styling decision for an element: a class that always applies, plus an
/// optional class that joins it under dark mode.
///
/// Pairs are constructed fresh and never mutated after construction; the
/// containing [`ClassSet`](super::ClassSet) owns ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassPair {
    base: String,
    dark: Option<String>,
}

impl ClassPair {
    /// A pair with no dark-mode counterpart.
    pub fn base_only(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            dark: None,
        }
    }

    /// A pair whose `dark` class joins the base under dark mode.
    pub fn adaptive(base: impl Into<String>, dark: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            dark: Some(dark.into()),
        }
    }

    /// The always-applied class.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The dark-mode class, if one was declared.
    pub fn dark(&self) -> Option<&str> {
        self.dark.as_deref()
    }

    /// True if this pair declares a dark-mode counterpart.
    pub fn is_adaptive(&self) -> bool {
        self.dark.is_some()
    }

    /// True if the dark class merely repeats the base class, making the
    /// pair non-responsive to mode changes.
    pub fn is_redundant(&self) -> bool {
        self.dark.as_deref() == Some(self.base.as_str())
    }

    pub(crate) fn set_dark(&mut self, dark: impl Into<String>) {
        self.dark = Some(dark.into());
    }
}
