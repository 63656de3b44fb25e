//! Resolve a specifier to its virtual file path

use std::path::Path;

use globfile::core::models::VirtualFilePath;
use globfile::core::paths;
use globfile::core::services::{
    detect_kind, is_glob_specifier, resolve_absolute_glob_pattern, resolve_virtual_file_path,
};
use globfile::output::{OutputMode, ResolveResult};

/// Print the virtual path, absolute pattern and kind for a specifier
pub fn resolve(specifier: &str, importer: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let importer = paths::resolve(&std::env::current_dir()?, importer);
    let virtual_path = resolve_virtual_file_path(specifier, &importer);
    let kind = VirtualFilePath::is_virtual(virtual_path.as_path())
        .then(|| detect_kind(virtual_path.as_path()));

    ResolveResult {
        specifier: specifier.to_string(),
        importer: importer.display().to_string(),
        is_glob: is_glob_specifier(specifier),
        virtual_path: virtual_path.to_string(),
        absolute_pattern: resolve_absolute_glob_pattern(specifier, &importer).display().to_string(),
        kind,
    }
    .render(mode)
}
