//! Virtual file paths
//!
//! A virtual file path encodes everything needed to regenerate a virtual
//! module:
//!
//! ```text
//! /repo/pkg/x/%21(index).ts/__virtual__:matches.ts
//! └──────── pattern dir ──┘ └──── kind basename ──┘
//! ```
//!
//! The parent directory is the absolute glob pattern with `!` encoded as
//! `%21`; the basename carries the kind.

use std::path::{Path, PathBuf};

use super::VIRTUAL_MARKER;
use super::specifier::decode_negations;

/// Absolute path of a synthetic module that does not exist on disk
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VirtualFilePath(PathBuf);

impl VirtualFilePath {
    /// Wrap a path. No validation is performed.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Whether a path's basename carries the virtual marker
    #[must_use]
    pub fn is_virtual(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(VIRTUAL_MARKER))
    }

    /// The underlying path
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Consume into the underlying path
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }

    /// Directory holding the virtual file: the encoded glob pattern
    #[must_use]
    pub fn pattern_dir(&self) -> &Path {
        self.0.parent().unwrap_or_else(|| Path::new(""))
    }

    /// The glob pattern to hand to the match service (`%21` decoded back to `!`)
    #[must_use]
    pub fn search_pattern(&self) -> String {
        decode_negations(&self.pattern_dir().to_string_lossy())
    }

    /// Anchor for relative import paths: the parent of the pattern directory
    #[must_use]
    pub fn resolve_dir(&self) -> PathBuf {
        let pattern = self.search_pattern();
        Path::new(&pattern).parent().map_or_else(|| PathBuf::from("/"), Path::to_path_buf)
    }
}

impl AsRef<Path> for VirtualFilePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<PathBuf> for VirtualFilePath {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl std::fmt::Display for VirtualFilePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
