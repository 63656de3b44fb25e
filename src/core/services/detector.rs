//! Virtual file type detector
//!
//! The kind of a virtual file is read back from its basename:
//! `__virtual__:files.ts` -> `files`.

use std::path::Path;

use crate::core::models::{VIRTUAL_MARKER, VirtualFileKind};
use crate::error::Result;

/// Derive the raw kind name from a virtual file path
///
/// Removes the `__virtual__:` marker and the trailing extension from the
/// basename. The result is not validated; see [`parse_kind`].
#[must_use]
pub fn detect_kind(virtual_path: &Path) -> String {
    let name = virtual_path
        .file_name()
        .map(|name| name.to_string_lossy().replacen(VIRTUAL_MARKER, "", 1))
        .unwrap_or_default();

    match name.rfind('.') {
        Some(dot) if dot + 1 < name.len() => name[..dot].to_string(),
        _ => name,
    }
}

/// Derive and validate the kind of a virtual file path
///
/// Fails with [`UnrecognizedVirtualFileKind`](crate::GlobfileError::UnrecognizedVirtualFileKind)
/// when the basename names no known kind.
pub fn parse_kind(virtual_path: &Path) -> Result<VirtualFileKind> {
    detect_kind(virtual_path).parse()
}
