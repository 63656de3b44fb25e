//! Content generator - the source text of a virtual module
//!
//! Nothing is cached: every call re-derives the kind from the virtual file
//! path and re-runs the match.
//!
//! # Output shapes
//!
//! For matches `a.ts` and `b.ts`, with module dialect:
//!
//! ```text
//! matches:    export * from "/repo/x/a.ts";
//!             export * from "/repo/x/b.ts";
//!
//! files:      import * as __x_a_ts from "/repo/x/a.ts";
//!             import * as __x_b_ts from "/repo/x/b.ts";
//!             export default {
//!             "x/a.ts": __x_a_ts,
//!             "x/b.ts": __x_b_ts,
//!             }
//!
//! filepaths:  export default {
//!             "x/a.ts": true,
//!             "x/b.ts": true,
//!             }
//! ```
//!
//! The commonjs dialect uses `module.exports = {...}` (with `...require()`
//! spreads for `matches`) and `const` + `require` bindings for `files`.

use std::path::{Path, PathBuf};

use log::debug;

use super::codegen;
use super::detector::parse_kind;
use super::matcher::find_matches;
use crate::core::models::{GenerationOptions, MatchedFile, ModuleType, VirtualFileKind, VirtualFilePath};
use crate::core::paths;
use crate::core::ports::MatchService;
use crate::error::Result;

/// Generates virtual module source text
///
/// `project_root` anchors the keys (and identifiers) of `files` and
/// `filepaths` modules.
#[derive(Debug, Clone)]
pub struct Generator<M> {
    project_root: PathBuf,
    matcher: M,
}

impl<M: MatchService> Generator<M> {
    /// Create a generator anchored at `project_root`
    #[must_use]
    pub fn new(project_root: impl Into<PathBuf>, matcher: M) -> Self {
        Self {
            project_root: project_root.into(),
            matcher,
        }
    }

    /// The root used for project-relative keys
    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// The match service in use
    #[must_use]
    pub const fn matcher(&self) -> &M {
        &self.matcher
    }

    /// Find the files matched by a virtual file
    pub fn matches(&self, virtual_path: &VirtualFilePath) -> Result<Vec<MatchedFile>> {
        find_matches(&self.matcher, virtual_path)
    }

    /// Generate the source text of a virtual module
    ///
    /// Fails with `UnrecognizedVirtualFileKind` if the basename names no kind,
    /// or with the match service's error if matching fails.
    pub fn generate(
        &self,
        virtual_path: &VirtualFilePath,
        options: GenerationOptions,
    ) -> Result<String> {
        let kind = parse_kind(virtual_path.as_path())?;
        let files = self.matches(virtual_path)?;
        debug!(
            "generating {kind} module ({}, {} paths) with {} file(s) for {virtual_path}",
            options.module_type,
            options.filepath_type,
            files.len()
        );

        let lines = match kind {
            VirtualFileKind::Matches => Self::matches_module(&files, options),
            VirtualFileKind::Files => self.files_module(&files, options),
            VirtualFileKind::Filepaths => self.filepaths_module(&files, options.module_type),
        };
        Ok(lines.join("\n"))
    }

    /// Re-export every export of every match
    fn matches_module(files: &[MatchedFile], options: GenerationOptions) -> Vec<String> {
        let targets = files.iter().map(|file| file.specifier(options.filepath_type));
        match options.module_type {
            ModuleType::Module => targets.map(|target| codegen::wildcard_reexport(&target)).collect(),
            ModuleType::Commonjs => {
                let mut lines = Vec::with_capacity(files.len() + 2);
                lines.push(codegen::export_object_open(ModuleType::Commonjs).to_string());
                lines.extend(targets.map(|target| codegen::spread_require(&target)));
                lines.push(codegen::SPREAD_OBJECT_CLOSE.to_string());
                lines
            },
        }
    }

    /// Namespace bindings followed by an object keyed by project-relative path
    fn files_module(&self, files: &[MatchedFile], options: GenerationOptions) -> Vec<String> {
        let keyed: Vec<(String, String)> = files
            .iter()
            .map(|file| {
                let key = self.project_relative(file);
                let ident = codegen::identifier(&key);
                (key, ident)
            })
            .collect();

        let mut lines = Vec::with_capacity(files.len() * 2 + 2);
        lines.extend(files.iter().zip(&keyed).map(|(file, (_, ident))| {
            codegen::namespace_binding(
                options.module_type,
                ident,
                &file.specifier(options.filepath_type),
            )
        }));
        lines.push(codegen::export_object_open(options.module_type).to_string());
        lines.extend(keyed.iter().map(|(key, ident)| codegen::object_entry(key, ident)));
        lines.push(codegen::EXPORT_OBJECT_CLOSE.to_string());
        lines
    }

    /// An object mapping each project-relative path to `true`
    fn filepaths_module(&self, files: &[MatchedFile], module_type: ModuleType) -> Vec<String> {
        let mut lines = Vec::with_capacity(files.len() + 2);
        lines.push(codegen::export_object_open(module_type).to_string());
        lines.extend(
            files
                .iter()
                .map(|file| codegen::object_entry(&self.project_relative(file), "true")),
        );
        lines.push(codegen::EXPORT_OBJECT_CLOSE.to_string());
        lines
    }

    fn project_relative(&self, file: &MatchedFile) -> String {
        paths::relative(&self.project_root, &file.absolute_filepath)
    }
}
