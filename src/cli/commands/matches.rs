//! List the files matched by a virtual file

use std::path::Path;

use globfile::adapters::GlobMatchService;
use globfile::core::models::VirtualFilePath;
use globfile::core::paths;
use globfile::core::services::find_matches;
use globfile::output::{MatchesResult, OutputMode};

/// Print every file matched by `virtual_path`, in match order
pub fn matches(virtual_path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let virtual_path = VirtualFilePath::new(paths::resolve(&std::env::current_dir()?, virtual_path));
    let files = find_matches(&GlobMatchService, &virtual_path)?;

    MatchesResult {
        virtual_path: virtual_path.to_string(),
        resolve_dir: virtual_path.resolve_dir().display().to_string(),
        files,
    }
    .render(mode)
}
