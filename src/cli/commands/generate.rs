//! Generate the source text of a virtual module

use std::path::PathBuf;

use anyhow::Context;

use globfile::adapters::GlobMatchService;
use globfile::config::Config;
use globfile::core::models::{FilepathType, ModuleType, VirtualFilePath};
use globfile::core::paths;
use globfile::core::services::{Generator, detect_kind};
use globfile::output::{GenerateResult, OutputMode};

/// Arguments of the `generate` command
#[derive(Debug)]
pub struct GenerateArgs {
    /// Virtual file path to generate
    pub virtual_path: PathBuf,
    /// Module dialect override
    pub module_type: Option<String>,
    /// Path emission override
    pub filepath_type: Option<String>,
    /// Project root override
    pub root: Option<PathBuf>,
}

/// Print the generated module for a virtual file path
pub fn generate(args: GenerateArgs, mode: OutputMode) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::load(&cwd)?;

    let mut options = config.generation;
    if let Some(module_type) = args.module_type {
        let module_type: ModuleType = module_type.parse().map_err(anyhow::Error::msg)?;
        options = options.with_module_type(module_type);
    }
    if let Some(filepath_type) = args.filepath_type {
        let filepath_type: FilepathType = filepath_type.parse().map_err(anyhow::Error::msg)?;
        options = options.with_filepath_type(filepath_type);
    }

    let project_root = args
        .root
        .map_or_else(|| config.resolve_project_root(&cwd), |root| paths::resolve(&cwd, root));
    log::debug!("project root: {}", project_root.display());

    let virtual_path = VirtualFilePath::new(paths::resolve(&cwd, args.virtual_path));
    let generator = Generator::new(project_root, GlobMatchService);
    let contents = generator
        .generate(&virtual_path, options)
        .with_context(|| format!("generating {virtual_path}"))?;

    GenerateResult {
        kind: detect_kind(virtual_path.as_path()),
        virtual_path: virtual_path.to_string(),
        contents,
    }
    .render(mode)
}
