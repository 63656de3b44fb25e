//! Path resolver - glob specifiers to virtual file paths
//!
//! Given a specifier and the file importing it, computes the canonical
//! virtual file path (used as the module id by the host) and the absolute
//! glob pattern to search.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::is_glob_specifier;
use crate::core::models::{GlobSpecifier, VirtualFilePath};
use crate::core::paths;

/// Resolve a specifier to its absolute glob pattern (no `%21` encoding)
///
/// All three prefixes are stripped. A specifier without a recognized prefix
/// is resolved as an ordinary relative path.
#[must_use]
pub fn resolve_absolute_glob_pattern(specifier: &str, importer: &Path) -> PathBuf {
    let dir = paths::importer_dir(importer);
    GlobSpecifier::parse(specifier).map_or_else(
        || paths::resolve(dir, specifier),
        |spec| paths::resolve(dir, spec.pattern()),
    )
}

/// Resolve a specifier to the virtual file path representing its matches
///
/// `glob:./x/*.ts` imported from `/repo/pkg/a.ts` resolves to
/// `/repo/pkg/x/*.ts/__virtual__:matches.ts`. Every `!` in the pattern is
/// encoded as `%21`. Specifiers without a recognized prefix fall back to a
/// plain join onto the importer's directory.
#[must_use]
pub fn resolve_virtual_file_path(specifier: &str, importer: &Path) -> VirtualFilePath {
    let dir = paths::importer_dir(importer);

    let Some(spec) = GlobSpecifier::parse(specifier) else {
        if is_glob_specifier(specifier) {
            warn!("unsupported glob specifier tag in {specifier:?}, resolving as a plain path");
        }
        return VirtualFilePath::new(paths::resolve(dir, specifier));
    };

    let path = paths::resolve(dir, spec.encoded_pattern()).join(spec.kind().file_name());
    debug!("resolved {specifier:?} from {} to {}", importer.display(), path.display());
    VirtualFilePath::new(path)
}
