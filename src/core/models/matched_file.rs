//! A file system entry matched by a glob

use std::borrow::Cow;
use std::path::PathBuf;

use serde::Serialize;

use super::FilepathType;

/// One match returned by the match service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedFile {
    /// Absolute path of the entry
    pub absolute_filepath: PathBuf,
    /// Path relative to the virtual file's resolve dir, always starting with `.`
    pub relative_filepath: String,
}

impl MatchedFile {
    /// Create a matched file
    #[must_use]
    pub fn new(absolute_filepath: impl Into<PathBuf>, relative_filepath: impl Into<String>) -> Self {
        Self {
            absolute_filepath: absolute_filepath.into(),
            relative_filepath: relative_filepath.into(),
        }
    }

    /// The module specifier to emit for this file
    #[must_use]
    pub fn specifier(&self, filepath_type: FilepathType) -> Cow<'_, str> {
        match filepath_type {
            FilepathType::Relative => Cow::Borrowed(&self.relative_filepath),
            FilepathType::Absolute => self.absolute_filepath.to_string_lossy(),
        }
    }
}
