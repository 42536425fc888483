//! Dark-class token detection and removal.
//!
//! A dark token is the written `dark:` prefix followed by everything up to
//! whitespace or a quote. Stripping removes each token and repairs the
//! spacing it leaves behind, so `class="bg-white dark:bg-black"` comes out
//! as `class="bg-white"`, not `class="bg-white "`.

use duotone::DARK_PREFIX;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches one written dark token. The character class mirrors what can
/// actually appear inside a class attribute: anything but whitespace and
/// the three quote styles that can delimit one. The run may be empty so a
/// stray bare prefix is caught too.
static DARK_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!("{}{}", regex::escape(DARK_PREFIX), r#"[^ "'`\n]*"#);
    Regex::new(&pattern).expect("dark token pattern")
});

/// The result of stripping one piece of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOutcome {
    /// Content with every dark token removed.
    pub stripped: String,
    /// Every removed token, verbatim, in document order.
    pub matches: Vec<String>,
}

impl StripOutcome {
    /// Returns true if any token was removed.
    pub fn changed(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Removes every dark token from `content`.
///
/// Spacing is repaired based on where the token sat:
///
/// - flush against an opening quote (or the start of the content), the
///   token takes the whitespace after it along, so the next class slides
///   into place;
/// - directly before a closing quote, it takes the whitespace before it;
/// - in the middle of a class list, only the token goes, and the doubled
///   space left at the seam collapses one step (so a deliberate
///   double-spaced list keeps one level of its extra spacing).
///
/// Content without any token is returned byte-identical.
pub fn strip_dark_classes(content: &str) -> StripOutcome {
    let mut matches = Vec::new();
    let mut out = String::with_capacity(content.len());
    let mut cursor = 0;

    for m in DARK_TOKEN_RE.find_iter(content) {
        matches.push(m.as_str().to_string());

        let preceding = content[..m.start()].chars().last();
        let following = content[m.end()..].chars().next();

        let at_opening = m.start() == 0 || matches!(preceding, Some('"' | '\'' | '`'));
        let at_closing = matches!(following, Some('"' | '\'' | '`'));

        if at_opening {
            out.push_str(&content[cursor..m.start()]);
            let rest = &content[m.end()..];
            cursor = m.end() + (rest.len() - rest.trim_start().len());
        } else if at_closing {
            let kept = &content[cursor..m.start()];
            out.push_str(kept.trim_end());
            cursor = m.end();
        } else {
            let kept = &content[cursor..m.start()];
            let trimmed = kept.trim_end();
            let rest = &content[m.end()..];
            let after_len = rest.len() - rest.trim_start().len();
            let seam = format!("{}{}", &kept[trimmed.len()..], &rest[..after_len]);
            out.push_str(trimmed);
            out.push_str(&seam.replace("  ", " "));
            cursor = m.end() + after_len;
        }
    }

    out.push_str(&content[cursor..]);

    StripOutcome {
        stripped: out,
        matches,
    }
}
