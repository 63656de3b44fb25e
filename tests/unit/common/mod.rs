//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing globfile components.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use globfile::core::ports::{MatchOptions, MatchService};
use tempfile::TempDir;

/// A match service that returns a fixed list and records every query
pub struct ScriptedMatchService {
    results: Vec<PathBuf>,
    queries: RefCell<Vec<(String, MatchOptions)>>,
}

impl ScriptedMatchService {
    pub fn new(results: &[&str]) -> Self {
        Self {
            results: results.iter().map(PathBuf::from).collect(),
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::new(&[])
    }

    /// Patterns this service was asked to match, in call order
    pub fn patterns(&self) -> Vec<String> {
        self.queries.borrow().iter().map(|(p, _)| p.clone()).collect()
    }

    pub fn options(&self) -> Vec<MatchOptions> {
        self.queries.borrow().iter().map(|(_, o)| *o).collect()
    }
}

impl MatchService for ScriptedMatchService {
    fn find(&self, pattern: &str, options: MatchOptions) -> globfile::error::Result<Vec<PathBuf>> {
        self.queries.borrow_mut().push((pattern.to_string(), options));
        Ok(self.results.clone())
    }
}

/// A temporary project with a standard directory structure
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new test project:
    /// ```text
    /// /
    /// ├── package.json
    /// └── src/
    ///     ├── index.ts
    ///     ├── components/
    ///     │   ├── button.ts
    ///     │   ├── card.ts
    ///     │   └── index.ts
    ///     └── pages/
    ///         ├── about-us.ts
    ///         └── home.ts
    /// ```
    pub fn new() -> Self {
        let tree = Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        };
        tree.add_file("package.json", "{}\n");
        tree.add_file("src/index.ts", "export {};\n");
        tree.add_file("src/components/button.ts", "export const Button = 1;\n");
        tree.add_file("src/components/card.ts", "export const Card = 2;\n");
        tree.add_file("src/components/index.ts", "export * from './button';\n");
        tree.add_file("src/pages/about-us.ts", "export default 'about';\n");
        tree.add_file("src/pages/home.ts", "export default 'home';\n");
        tree
    }

    /// Root path of the project
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a file in the project
    pub fn file(&self, path: &str) -> PathBuf {
        self.dir.path().join(path)
    }

    /// Add a file, creating parent directories
    pub fn add_file(&self, path: &str, content: &str) {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
