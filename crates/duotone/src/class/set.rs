//! Ordered class pairs and mode-conditional resolution.
//!
//! A [`ClassSet`] describes one element's styling as an ordered sequence of
//! base/dark pairs. Resolution against a [`ColorMode`] produces the final
//! `class` attribute value: every base class, plus every declared dark class
//! when the mode is dark, in declaration order.
//!
//! Resolution is a pure function over its two inputs. It keeps no state,
//! performs no I/O, and is total: there is no descriptor it rejects.

use std::fmt;

use crate::theme::ColorMode;

use super::convention::{split_dark_token, DARK_PREFIX};
use super::error::ClassSetError;
use super::pair::ClassPair;

/// An ordered sequence of base/dark class pairs describing one element.
///
/// Built with the fluent API and resolved once per render with an explicit
/// mode:
///
/// ```rust
/// use duotone::{ClassSet, ColorMode};
///
/// let classes = ClassSet::new()
///     .add("rounded")
///     .add_adaptive("bg-white", "bg-black");
///
/// assert_eq!(classes.resolve(ColorMode::Light), "rounded bg-white");
/// assert_eq!(classes.resolve(ColorMode::Dark), "rounded bg-white bg-black");
/// ```
///
/// Sets can also be parsed from the conventional written form, where dark
/// classes carry the `dark:` prefix:
///
/// ```rust
/// use duotone::{ClassSet, ColorMode};
///
/// let classes = ClassSet::parse("bg-white dark:bg-black");
/// assert_eq!(classes.resolve(ColorMode::Dark), "bg-white bg-black");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet {
    pairs: Vec<ClassPair>,
}

impl ClassSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Adds a class with no dark-mode counterpart, returning the set for
    /// chaining.
    pub fn add(mut self, base: impl Into<String>) -> Self {
        self.pairs.push(ClassPair::base_only(base));
        self
    }

    /// Adds a class whose `dark` counterpart joins it under dark mode,
    /// returning the set for chaining.
    ///
    /// The base class remains present in both modes; `dark` is additional,
    /// not a replacement.
    pub fn add_adaptive(mut self, base: impl Into<String>, dark: impl Into<String>) -> Self {
        self.pairs.push(ClassPair::adaptive(base, dark));
        self
    }

    /// Adds a pre-built pair, returning the set for chaining.
    pub fn add_pair(mut self, pair: ClassPair) -> Self {
        self.pairs.push(pair);
        self
    }

    /// The pairs in declaration order.
    pub fn pairs(&self) -> &[ClassPair] {
        &self.pairs
    }

    /// Returns the number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if no pairs are declared.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Resolves the final class string for `mode`.
    ///
    /// For each pair in order, the base class is always emitted; the dark
    /// class is emitted (bare, without the `dark:` prefix) only when `mode`
    /// is [`ColorMode::Dark`] and the pair declares one. Tokens are joined
    /// by single spaces. Duplicates are re-emitted, not collapsed, and
    /// tokens pass through exactly as declared; an empty set resolves to
    /// the empty string.
    pub fn resolve(&self, mode: ColorMode) -> String {
        let mut tokens: Vec<&str> = Vec::with_capacity(self.pairs.len() * 2);
        for pair in &self.pairs {
            tokens.push(pair.base());
            if mode == ColorMode::Dark {
                if let Some(dark) = pair.dark() {
                    tokens.push(dark);
                }
            }
        }
        tokens.join(" ")
    }

    /// Parses the conventional written form into a set.
    ///
    /// Tokens are split on whitespace. An unprefixed token starts a new
    /// pair; a `dark:`-prefixed token attaches to the nearest pair without
    /// a dark member (the immediately preceding pair if it is still open,
    /// otherwise the next base token that follows):
    ///
    /// ```rust
    /// use duotone::{ClassPair, ClassSet};
    ///
    /// let set = ClassSet::parse("dark:text-white text-black");
    /// assert_eq!(set.pairs(), &[ClassPair::adaptive("text-black", "text-white")]);
    /// ```
    ///
    /// A dark token with no base partner on either side keeps its slot as a
    /// pair with an empty base, so nothing the input declared is dropped.
    /// Parsing is total; it never fails.
    pub fn parse(input: &str) -> Self {
        let mut pairs: Vec<ClassPair> = Vec::new();
        // Index of the most recent base-only pair, still accepting a dark
        // member from the token that follows it.
        let mut open: Option<usize> = None;
        // A dark token seen before any base it could attach to.
        let mut pending_dark: Option<String> = None;

        for token in input.split_whitespace() {
            match split_dark_token(token) {
                Some(dark) => {
                    if let Some(idx) = open.take() {
                        pairs[idx].set_dark(dark);
                    } else if let Some(previous) = pending_dark.replace(dark.to_string()) {
                        // Two leading dark tokens in a row: the first can
                        // never find a partner, so it keeps its slot alone.
                        pairs.push(ClassPair::adaptive("", previous));
                    }
                }
                None => {
                    if let Some(dark) = pending_dark.take() {
                        pairs.push(ClassPair::adaptive(token, dark));
                    } else {
                        pairs.push(ClassPair::base_only(token));
                        open = Some(pairs.len() - 1);
                    }
                }
            }
        }

        if let Some(dark) = pending_dark {
            pairs.push(ClassPair::adaptive("", dark));
        }

        Self { pairs }
    }

    /// Checks the set against the strict styling policy.
    ///
    /// `resolve` accepts every pair, including one whose dark class repeats
    /// its base; the output simply contains the token twice under dark
    /// mode. Callers that consider such pairs mistakes (the element can no
    /// longer respond to mode changes) can enforce this policy explicitly.
    pub fn validate(&self) -> Result<(), ClassSetError> {
        for pair in &self.pairs {
            if pair.is_redundant() {
                return Err(ClassSetError::RedundantDarkOverride {
                    class: pair.base().to_string(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for ClassSet {
    /// Writes the conventional form: base tokens bare, dark tokens behind
    /// the `dark:` prefix, in pair order. Empty bases (which only `parse`
    /// can produce) are omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens: Vec<String> = Vec::with_capacity(self.pairs.len() * 2);
        for pair in &self.pairs {
            if !pair.base().is_empty() {
                tokens.push(pair.base().to_string());
            }
            if let Some(dark) = pair.dark() {
                tokens.push(format!("{}{}", DARK_PREFIX, dark));
            }
        }
        f.write_str(&tokens.join(" "))
    }
}

impl FromIterator<ClassPair> for ClassSet {
    fn from_iter<I: IntoIterator<Item = ClassPair>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_resolves_to_empty_string() {
        let set = ClassSet::new();
        assert_eq!(set.resolve(ColorMode::Light), "");
        assert_eq!(set.resolve(ColorMode::Dark), "");
        assert!(set.is_empty());
    }

    #[test]
    fn test_base_only_identical_in_both_modes() {
        let set = ClassSet::new().add("shadow");
        assert_eq!(set.resolve(ColorMode::Light), "shadow");
        assert_eq!(set.resolve(ColorMode::Dark), "shadow");
    }

    #[test]
    fn test_dark_class_only_under_dark_mode() {
        let set = ClassSet::new().add_adaptive("bg-white", "bg-black");
        let light = set.resolve(ColorMode::Light);
        assert!(light.contains("bg-white"));
        assert!(!light.contains("bg-black"));
        assert_eq!(set.resolve(ColorMode::Dark), "bg-white bg-black");
    }

    #[test]
    fn test_order_preserved() {
        let set = ClassSet::new()
            .add_adaptive("b1", "d1")
            .add_adaptive("b2", "d2");
        assert_eq!(set.resolve(ColorMode::Dark), "b1 d1 b2 d2");
        assert_eq!(set.resolve(ColorMode::Light), "b1 b2");
    }

    #[test]
    fn test_source_snippet_descriptor() {
        let set = ClassSet::new()
            .add_adaptive("bg-white", "bg-black")
            .add_adaptive("text-black", "text-white");
        assert_eq!(
            set.resolve(ColorMode::Dark),
            "bg-white bg-black text-black text-white"
        );
        assert_eq!(set.resolve(ColorMode::Light), "bg-white text-black");
    }

    #[test]
    fn test_duplicates_are_not_collapsed() {
        let set = ClassSet::new().add("p-2").add("p-2");
        assert_eq!(set.resolve(ColorMode::Light), "p-2 p-2");

        let coinciding = ClassSet::new().add_adaptive("bg-black", "bg-black");
        assert_eq!(coinciding.resolve(ColorMode::Dark), "bg-black bg-black");
        assert_eq!(coinciding.resolve(ColorMode::Light), "bg-black");
    }

    #[test]
    fn test_empty_tokens_pass_through() {
        let set = ClassSet::new().add("");
        assert_eq!(set.resolve(ColorMode::Light), "");
        let set = ClassSet::new().add("").add("a");
        assert_eq!(set.resolve(ColorMode::Light), " a");
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let set = ClassSet::new()
            .add_adaptive("bg-white", "bg-black")
            .add("rounded");
        assert_eq!(set.resolve(ColorMode::Dark), set.resolve(ColorMode::Dark));
        assert_eq!(set.resolve(ColorMode::Light), set.resolve(ColorMode::Light));
    }

    // =========================================================================
    // Parsing the conventional form
    // =========================================================================

    #[test]
    fn test_parse_dark_after_base() {
        let set = ClassSet::parse("bg-white dark:bg-black");
        assert_eq!(set.pairs(), &[ClassPair::adaptive("bg-white", "bg-black")]);
    }

    #[test]
    fn test_parse_dark_before_base() {
        let set = ClassSet::parse("dark:text-white text-black");
        assert_eq!(
            set.pairs(),
            &[ClassPair::adaptive("text-black", "text-white")]
        );
    }

    #[test]
    fn test_parse_mixed_tokens() {
        let set = ClassSet::parse("rounded bg-white dark:bg-black shadow");
        assert_eq!(
            set.pairs(),
            &[
                ClassPair::base_only("rounded"),
                ClassPair::adaptive("bg-white", "bg-black"),
                ClassPair::base_only("shadow"),
            ]
        );
    }

    #[test]
    fn test_parse_unpartnered_dark_keeps_slot() {
        let set = ClassSet::parse("dark:bg-black");
        assert_eq!(set.pairs(), &[ClassPair::adaptive("", "bg-black")]);
        assert_eq!(set.resolve(ColorMode::Light), "");
        assert_eq!(set.resolve(ColorMode::Dark), " bg-black");
    }

    #[test]
    fn test_parse_collapses_arbitrary_whitespace() {
        let set = ClassSet::parse("  bg-white \n\t dark:bg-black  ");
        assert_eq!(set.pairs(), &[ClassPair::adaptive("bg-white", "bg-black")]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(ClassSet::parse("").is_empty());
        assert!(ClassSet::parse("   ").is_empty());
    }

    #[test]
    fn test_display_conventional_form() {
        let set = ClassSet::new()
            .add("rounded")
            .add_adaptive("bg-white", "bg-black");
        assert_eq!(set.to_string(), "rounded bg-white dark:bg-black");
    }

    #[test]
    fn test_display_parse_round_trip() {
        let written = "rounded bg-white dark:bg-black text-black dark:text-white";
        assert_eq!(ClassSet::parse(written).to_string(), written);
    }

    // =========================================================================
    // Validation policy
    // =========================================================================

    #[test]
    fn test_validate_accepts_distinct_pairs() {
        let set = ClassSet::new()
            .add("rounded")
            .add_adaptive("bg-white", "bg-black");
        assert!(set.validate().is_ok());
    }

    #[test]
    fn test_validate_flags_redundant_pair() {
        let set = ClassSet::new().add_adaptive("bg-black", "bg-black");
        let err = set.validate().unwrap_err();
        assert_eq!(
            err,
            ClassSetError::RedundantDarkOverride {
                class: "bg-black".to_string()
            }
        );
    }

    #[test]
    fn test_redundant_pair_still_resolves() {
        // The policy is opt-in: resolution never rejects the pair.
        let set = ClassSet::new().add_adaptive("bg-black", "bg-black");
        assert_eq!(set.resolve(ColorMode::Dark), "bg-black bg-black");
    }
}
