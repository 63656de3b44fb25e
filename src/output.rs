//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::MatchedFile;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of classifying a specifier
#[derive(Debug, Serialize)]
pub struct CheckResult {
    /// The specifier that was checked
    pub specifier: String,
    /// Whether it is a glob specifier
    pub is_glob: bool,
}

/// Result of resolving a specifier
#[derive(Debug, Serialize)]
pub struct ResolveResult {
    /// The specifier that was resolved
    pub specifier: String,
    /// The importing file
    pub importer: String,
    /// Whether the specifier is a glob specifier
    pub is_glob: bool,
    /// Canonical virtual file path
    pub virtual_path: String,
    /// Absolute glob pattern to search
    pub absolute_pattern: String,
    /// Kind of virtual file, if the specifier resolves to one
    pub kind: Option<String>,
}

/// Files matched by a virtual file
#[derive(Debug, Serialize)]
pub struct MatchesResult {
    /// The virtual file path
    pub virtual_path: String,
    /// Anchor of the relative paths
    pub resolve_dir: String,
    /// Matched files in match order
    pub files: Vec<MatchedFile>,
}

/// Generated virtual module
#[derive(Debug, Serialize)]
pub struct GenerateResult {
    /// The virtual file path
    pub virtual_path: String,
    /// Kind of virtual file
    pub kind: String,
    /// Generated source text
    pub contents: String,
}

fn render_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

impl CheckResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) -> anyhow::Result<()> {
        match mode {
            OutputMode::Human => {
                println!("{}", self.is_glob);
                Ok(())
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl ResolveResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) -> anyhow::Result<()> {
        match mode {
            OutputMode::Human => {
                self.render_human();
                Ok(())
            },
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if !self.is_glob {
            println!("{} {}", "Not a glob specifier:".yellow(), self.specifier);
        }
        println!("{} {}", "Virtual path:".bold(), self.virtual_path);
        println!("{} {}", "Pattern:".bold(), self.absolute_pattern);
        if let Some(kind) = &self.kind {
            println!("{} {kind}", "Kind:".bold());
        }
    }
}

impl MatchesResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) -> anyhow::Result<()> {
        match mode {
            OutputMode::Human => {
                self.render_human();
                Ok(())
            },
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.files.is_empty() {
            println!("No matches.");
            return;
        }

        println!("{} ({}):\n", "Matches".bold(), self.files.len());
        for file in &self.files {
            println!("  {}", file.relative_filepath);
            println!("    {}", file.absolute_filepath.display().to_string().dimmed());
        }
    }
}

impl GenerateResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) -> anyhow::Result<()> {
        match mode {
            OutputMode::Human => {
                println!("{}", self.contents);
                Ok(())
            },
            OutputMode::Json => render_json(self),
        }
    }
}
