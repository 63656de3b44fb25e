//! Match service port
//!
//! Defines the interface for the external glob matcher.

use std::path::PathBuf;

use crate::error::Result;

/// Options passed along with a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchOptions {
    /// Return absolute paths
    pub absolute: bool,
}

/// Glob pattern matcher abstraction
///
/// Implementations resolve a glob pattern (which may contain `!` negations)
/// to file system paths. The returned order is treated as canonical: callers
/// never re-sort it.
pub trait MatchService {
    /// Find every path matching `pattern`
    fn find(&self, pattern: &str, options: MatchOptions) -> Result<Vec<PathBuf>>;
}

impl<T: MatchService + ?Sized> MatchService for &T {
    fn find(&self, pattern: &str, options: MatchOptions) -> Result<Vec<PathBuf>> {
        (**self).find(pattern, options)
    }
}

impl<T: MatchService + ?Sized> MatchService for Box<T> {
    fn find(&self, pattern: &str, options: MatchOptions) -> Result<Vec<PathBuf>> {
        (**self).find(pattern, options)
    }
}
