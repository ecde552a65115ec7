//! Short name format rules and normalization.
//!
//! Both the management API and the resolver go through this module, so a name
//! accepted on write is exactly a name that resolves on read.

use regex::Regex;
use std::sync::LazyLock;

/// One alphanumeric run, optionally followed by a single `_`-separated run.
pub const SHORT_NAME_PATTERN: &str = r"^[a-zA-Z0-9]+(?:_[a-zA-Z0-9]+)?$";

static SHORT_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SHORT_NAME_PATTERN).expect("short name pattern is valid"));

/// Errors produced while checking a short name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("name is empty")]
    Empty,

    #[error("name must match {SHORT_NAME_PATTERN}")]
    InvalidFormat,
}

/// Returns the canonical (lowercase) form of a name without checking its format.
pub fn normalize_name(input: &str) -> String {
    input.to_lowercase()
}

/// Returns true if `input` matches the short name pattern.
pub fn is_valid_name(input: &str) -> bool {
    SHORT_NAME_REGEX.is_match(input)
}

/// Validates a short name and returns its canonical form.
///
/// # Errors
///
/// - [`NameError::Empty`] for an empty string
/// - [`NameError::InvalidFormat`] if the pattern does not match
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_and_validate_name("My_Link").unwrap(), "my_link");
/// assert!(normalize_and_validate_name("bad name!").is_err());
/// ```
pub fn normalize_and_validate_name(input: &str) -> Result<String, NameError> {
    if input.is_empty() {
        return Err(NameError::Empty);
    }

    if !is_valid_name(input) {
        return Err(NameError::InvalidFormat);
    }

    Ok(normalize_name(input))
}

/// Builds the public address that resolves to `name`.
///
/// Always uses HTTPS.
pub fn redirect_url(host: &str, name: &str) -> String {
    format!("https://{}/{}", host.trim_end_matches('/'), name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_alphanumeric() {
        assert_eq!(normalize_and_validate_name("abc123").unwrap(), "abc123");
    }

    #[test]
    fn test_lowercases_valid_name() {
        assert_eq!(normalize_and_validate_name("My_Link").unwrap(), "my_link");
        assert_eq!(normalize_and_validate_name("FOO").unwrap(), "foo");
    }

    #[test]
    fn test_single_underscore_segment() {
        assert!(is_valid_name("release_2024"));
        assert!(is_valid_name("a_b"));
    }

    #[test]
    fn test_rejects_two_underscore_segments() {
        assert_eq!(
            normalize_and_validate_name("a_b_c"),
            Err(NameError::InvalidFormat)
        );
    }

    #[test]
    fn test_rejects_leading_or_trailing_underscore() {
        assert!(!is_valid_name("_abc"));
        assert!(!is_valid_name("abc_"));
        assert!(!is_valid_name("a__b"));
    }

    #[test]
    fn test_rejects_punctuation_and_spaces() {
        for name in ["bad name!", "with-dash", "dot.name", "slash/name", " x"] {
            assert_eq!(
                normalize_and_validate_name(name),
                Err(NameError::InvalidFormat),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_non_ascii_letters() {
        assert!(!is_valid_name("café"));
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(normalize_and_validate_name(""), Err(NameError::Empty));
    }

    #[test]
    fn test_normalize_name_skips_format_check() {
        assert_eq!(normalize_name("Legacy-Name"), "legacy-name");
    }

    #[test]
    fn test_redirect_url() {
        assert_eq!(
            redirect_url("go.example.com", "my_link"),
            "https://go.example.com/my_link"
        );
        assert_eq!(
            redirect_url("go.example.com/", "docs"),
            "https://go.example.com/docs"
        );
    }
}
