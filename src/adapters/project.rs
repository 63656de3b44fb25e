//! Project root discovery
//!
//! `files` and `filepaths` modules key their entries by path relative to a
//! project root. The generator takes that root as an explicit input; these
//! helpers find a sensible one for hosts that don't configure it.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

/// Package manifest that marks a project root
pub const PACKAGE_JSON: &str = "package.json";

/// pnpm workspace file that marks a monorepo root
pub const PNPM_WORKSPACE: &str = "pnpm-workspace.yaml";

/// Nearest ancestor of `start` (inclusive) containing a `package.json`
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start.ancestors().find(|dir| dir.join(PACKAGE_JSON).is_file()).map(Path::to_path_buf)
}

/// Root of the monorepo enclosing `start`
///
/// Tries, in order:
/// 1. the outermost ancestor declaring a workspace (`pnpm-workspace.yaml`,
///    or a `package.json` with a `workspaces` field)
/// 2. the working directory of the enclosing git repository
/// 3. [`find_project_root`]
#[must_use]
pub fn find_monorepo_root(start: &Path) -> Option<PathBuf> {
    let root = start
        .ancestors()
        .filter(|dir| declares_workspace(dir))
        .last()
        .map(Path::to_path_buf)
        .or_else(|| git_workdir(start))
        .or_else(|| find_project_root(start));
    debug!("monorepo root for {}: {root:?}", start.display());
    root
}

fn declares_workspace(dir: &Path) -> bool {
    if dir.join(PNPM_WORKSPACE).is_file() {
        return true;
    }
    fs::read_to_string(dir.join(PACKAGE_JSON))
        .ok()
        .and_then(|content| serde_json::from_str::<serde_json::Value>(&content).ok())
        .is_some_and(|manifest| manifest.get("workspaces").is_some())
}

fn git_workdir(start: &Path) -> Option<PathBuf> {
    let repo = git2::Repository::discover(start).ok()?;
    repo.workdir().map(Path::to_path_buf)
}
