//! The dark-mode modifier naming convention.
//!
//! A class token prefixed with `dark:` is understood to apply only while the
//! environment is in dark mode; unprefixed tokens apply unconditionally.
//! The prefix lives in the *written* form of a class list (markup sources,
//! sheet shorthands). Resolved class strings never carry it: the resolver
//! decides inclusion up front and emits the bare token.

/// The reserved prefix marking a class as dark-mode-only.
pub const DARK_PREFIX: &str = "dark:";

/// Returns true if `token` carries the dark-mode prefix.
pub fn is_dark_token(token: &str) -> bool {
    token.starts_with(DARK_PREFIX)
}

/// Splits the dark-mode prefix off `token`, returning the bare class name.
///
/// Returns `None` for unprefixed tokens. A bare `dark:` yields an empty
/// class name rather than `None`; callers decide what to do with it.
pub fn split_dark_token(token: &str) -> Option<&str> {
    token.strip_prefix(DARK_PREFIX)
}
