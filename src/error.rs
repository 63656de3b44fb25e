//! Error types for virtual file resolution and generation

use thiserror::Error;

/// Errors that can occur while matching or generating a virtual file
#[derive(Debug, Error)]
pub enum GlobfileError {
    /// The virtual file's basename does not name a known kind
    #[error("unknown virtual file type: {0}")]
    UnrecognizedVirtualFileKind(String),

    /// The glob pattern handed to the match service is malformed
    #[error("invalid glob pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Underlying parse error
        #[source]
        source: glob::PatternError,
    },

    /// An entry could not be read while walking matches
    #[error("glob error: {0}")]
    Glob(#[from] glob::GlobError),

    /// IO error (e.g. resolving the current directory)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for this crate
pub type Result<T> = std::result::Result<T, GlobfileError>;
