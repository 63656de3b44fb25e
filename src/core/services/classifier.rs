//! Specifier classifier
//!
//! Recognizes glob specifiers before any resolution happens.

use std::sync::LazyLock;

use regex::Regex;

static GLOB_SPECIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^glob(\[[^\]]+\])?:").expect("glob specifier regex is valid"));

/// Check if a module specifier is a glob specifier
///
/// Matches `glob:` optionally followed by a bracketed tag, e.g. `glob[files]:`.
/// Unknown tags (`glob[json]:`) are still glob specifiers; they just don't
/// resolve to a virtual file.
///
/// # Examples
///
/// ```
/// use globfile::core::services::is_glob_specifier;
///
/// assert!(is_glob_specifier("glob:*.ts"));
/// assert!(is_glob_specifier("glob[filepaths]:**/*.js"));
/// assert!(!is_glob_specifier("./relative/path.ts"));
/// ```
#[must_use]
pub fn is_glob_specifier(specifier: &str) -> bool {
    GLOB_SPECIFIER.is_match(specifier)
}
