//! Configuration management
//!
//! Optional `globfile.toml`, read from the directory the CLI runs in:
//!
//! ```toml
//! project_root = "."          # relative to the config file's directory
//! monorepo = true             # discover the monorepo root when unset
//!
//! [generation]
//! module_type = "module"      # or "commonjs"
//! filepath_type = "absolute"  # or "relative"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::adapters::{find_monorepo_root, find_project_root};
use crate::core::models::GenerationOptions;
use crate::core::paths;

/// Config filename
pub const CONFIG_FILE: &str = "globfile.toml";

/// globfile configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Explicit project root for `files` / `filepaths` keys
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_root: Option<PathBuf>,
    /// Discover the monorepo root (rather than the nearest package) when
    /// `project_root` is unset
    #[serde(default = "default_monorepo")]
    pub monorepo: bool,
    /// Default generation options
    #[serde(default)]
    pub generation: GenerationOptions,
}

const fn default_monorepo() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_root: None,
            monorepo: default_monorepo(),
            generation: GenerationOptions::default(),
        }
    }
}

impl Config {
    /// Get the config file path inside `dir`
    #[must_use]
    pub fn config_path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load `globfile.toml` from `dir`, or defaults if there is none
    ///
    /// A relative `project_root` is resolved against `dir`.
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let path = Self::config_path(dir);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        let mut config =
            Self::parse(&content).with_context(|| format!("parsing {}", path.display()))?;
        config.project_root = config.project_root.map(|root| paths::resolve(dir, root));
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// The project root to use for generation
    ///
    /// The configured root wins; otherwise it is discovered from `start`,
    /// falling back to `start` itself.
    #[must_use]
    pub fn resolve_project_root(&self, start: &Path) -> PathBuf {
        if let Some(root) = &self.project_root {
            return root.clone();
        }
        let discovered = if self.monorepo {
            find_monorepo_root(start)
        } else {
            find_project_root(start)
        };
        discovered.unwrap_or_else(|| start.to_path_buf())
    }
}
