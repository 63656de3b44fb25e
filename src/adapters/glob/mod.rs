//! Glob adapter
//!
//! Implements `MatchService` on top of the `glob` crate.
//!
//! - [`pattern`] - Brace expansion and negated group handling

pub mod pattern;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::core::paths;
use crate::core::ports::{MatchOptions, MatchService};
use crate::error::{GlobfileError, Result};

pub use pattern::{NegatedPattern, expand_braces, split_negations};

/// File system match service backed by the `glob` crate
///
/// Results for each brace alternative come back in the crate's walk order
/// (entries sorted per directory); alternatives are concatenated in order and
/// duplicates dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobMatchService;

impl GlobMatchService {
    /// Create a glob match service
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl MatchService for GlobMatchService {
    fn find(&self, pattern: &str, options: MatchOptions) -> Result<Vec<PathBuf>> {
        let mut cwd = None;
        let mut seen = HashSet::new();
        let mut results = Vec::new();

        for expanded in expand_braces(pattern) {
            let split = split_negations(&expanded);
            let exclusions = split
                .exclusions
                .iter()
                .map(|exclusion| compile(exclusion))
                .collect::<Result<Vec<_>>>()?;

            debug!("globbing {} ({} exclusion(s))", split.positive, exclusions.len());
            let entries = glob::glob_with(&split.positive, match_options()).map_err(|source| {
                GlobfileError::InvalidPattern {
                    pattern: expanded.clone(),
                    source,
                }
            })?;

            for entry in entries {
                let path = entry?;
                if exclusions.iter().any(|p| p.matches_path_with(&path, match_options())) {
                    trace!("excluded {}", path.display());
                    continue;
                }

                let path = match (options.absolute, path.is_absolute()) {
                    (true, true) | (false, false) => path,
                    (true, false) => paths::resolve(current_dir(&mut cwd)?, path),
                    (false, true) => relativize(current_dir(&mut cwd)?, path),
                };
                if seen.insert(path.clone()) {
                    results.push(path);
                }
            }
        }

        Ok(results)
    }
}

fn compile(pattern: &str) -> Result<glob::Pattern> {
    glob::Pattern::new(pattern).map_err(|source| GlobfileError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

const fn match_options() -> glob::MatchOptions {
    glob::MatchOptions {
        case_sensitive: true,
        // `*` and `?` stay within one path segment
        require_literal_separator: true,
        // hidden entries only match when spelled out
        require_literal_leading_dot: true,
    }
}

/// The current directory, looked up on first use
fn current_dir(cache: &mut Option<PathBuf>) -> Result<&Path> {
    let cwd = match cache.take() {
        Some(cwd) => cwd,
        None => std::env::current_dir()?,
    };
    Ok(cache.insert(cwd).as_path())
}

fn relativize(cwd: &Path, path: PathBuf) -> PathBuf {
    match path.strip_prefix(cwd) {
        Ok(relative) => relative.to_path_buf(),
        Err(_) => path,
    }
}
