//! Match service adapter - virtual file path to matched files
//!
//! Recovers the glob pattern from a virtual file path, runs it through a
//! [`MatchService`] and pairs every result with an import path relative to
//! the virtual file's resolve dir.

use std::path::Path;

use log::{debug, trace};

use crate::core::models::{MatchedFile, VirtualFilePath};
use crate::core::paths;
use crate::core::ports::{MatchOptions, MatchService};
use crate::error::Result;

/// Find the files matched by a virtual file's pattern
///
/// The order returned by the match service is kept as-is. No matches is an
/// empty list, not an error.
pub fn find_matches<M>(service: &M, virtual_path: &VirtualFilePath) -> Result<Vec<MatchedFile>>
where
    M: MatchService + ?Sized,
{
    let pattern = virtual_path.search_pattern();
    let anchor = virtual_path.resolve_dir();

    let absolute_paths = service.find(&pattern, MatchOptions { absolute: true })?;
    debug!("{} match(es) for {pattern}", absolute_paths.len());

    Ok(absolute_paths
        .into_iter()
        .map(|absolute| {
            let relative = dot_relative(&anchor, &absolute);
            trace!("matched {} as {relative}", absolute.display());
            MatchedFile::new(absolute, relative)
        })
        .collect())
}

/// Relative path from `anchor` to `path` that always starts with `.`
///
/// Paths already starting with `./` or `../` are kept; anything else gets a
/// `./` prefix. This is stricter than "prefix unless it starts with `.`":
/// a dot-file such as `.env` becomes `./.env`, not a bare `.env`.
#[must_use]
pub fn dot_relative(anchor: &Path, path: &Path) -> String {
    let relative = paths::relative(anchor, path);
    if relative.is_empty() {
        ".".to_string()
    } else if relative == ".." || relative.starts_with("./") || relative.starts_with("../") {
        relative
    } else {
        format!("./{relative}")
    }
}
