//! Virtual file kinds
//!
//! The kind decides the shape of the generated module. It is never stored on
//! its own: it lives in the virtual file's basename (`__virtual__:<kind>.ts`).

use serde::{Deserialize, Serialize};

use crate::error::GlobfileError;

/// Marker that prefixes every virtual file basename
pub const VIRTUAL_MARKER: &str = "__virtual__:";

/// Extension given to every virtual file
pub const VIRTUAL_EXTENSION: &str = "ts";

/// Content shape of a virtual module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VirtualFileKind {
    /// Re-export everything from every matched file
    Matches,
    /// Default export mapping project-relative paths to module namespaces
    Files,
    /// Default export mapping project-relative paths to `true`
    Filepaths,
}

impl VirtualFileKind {
    /// All kinds, in declaration order
    pub const ALL: [Self; 3] = [Self::Matches, Self::Files, Self::Filepaths];

    /// The kind name as it appears in virtual file basenames
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Matches => "matches",
            Self::Files => "files",
            Self::Filepaths => "filepaths",
        }
    }

    /// Basename of a virtual file of this kind, e.g. `__virtual__:matches.ts`
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{VIRTUAL_MARKER}{}.{VIRTUAL_EXTENSION}", self.as_str())
    }
}

impl std::fmt::Display for VirtualFileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VirtualFileKind {
    type Err = GlobfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "matches" => Ok(Self::Matches),
            "files" => Ok(Self::Files),
            "filepaths" => Ok(Self::Filepaths),
            other => Err(GlobfileError::UnrecognizedVirtualFileKind(other.to_string())),
        }
    }
}
