use super::{InvalidNameError, NameRegistry};
use regex::Regex;
use std::sync::LazyLock;

/// Canonical form of an absent package name.
pub const NO_PACKAGE: &str = "none";

// Whitespace may precede the leading letter and appear anywhere after it.
static VALID_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*[A-Za-z][A-Za-z0-9_.\-\s]*$").expect("invalid regex"));

/// Validates a package name and returns the index's registered spelling for it.
///
/// - `None` yields [`NO_PACKAGE`].
/// - The empty string yields the empty string.
/// - A valid name containing whitespace is returned verbatim, padding included.
/// - Any other valid name is looked up in `registry`; a name the registry doesn't know is
///   returned as given.
///
/// # Errors
///
/// Returns [`InvalidNameError`] if the name doesn't start with a letter or contains
/// characters other than letters, digits, whitespace, `_`, `.`, and `-`.
pub fn normalize<R: NameRegistry + ?Sized>(raw: Option<&str>, registry: &R) -> Result<String, InvalidNameError> {
    let Some(raw) = raw else {
        return Ok(NO_PACKAGE.to_string());
    };

    if raw.is_empty() {
        return Ok(String::new());
    }

    if !VALID_NAME.is_match(raw) {
        return Err(InvalidNameError::new(raw));
    }

    if raw.contains(char::is_whitespace) {
        return Ok(raw.to_string());
    }

    Ok(registry
        .canonical_name(&raw.to_ascii_lowercase())
        .unwrap_or_else(|| raw.to_string()))
}
