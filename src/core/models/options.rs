//! Generation options: module dialect and path emission mode

use serde::{Deserialize, Serialize};

/// Module dialect of the generated source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleType {
    /// ECMAScript modules (`import` / `export`)
    #[default]
    Module,
    /// CommonJS (`require` / `module.exports`)
    Commonjs,
}

impl std::fmt::Display for ModuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Module => write!(f, "module"),
            Self::Commonjs => write!(f, "commonjs"),
        }
    }
}

impl std::str::FromStr for ModuleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "module" | "esm" => Ok(Self::Module),
            "commonjs" | "cjs" => Ok(Self::Commonjs),
            _ => Err(format!("Invalid module type: {s}. Use: module, commonjs")),
        }
    }
}

/// Which path of a matched file to emit as the import target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilepathType {
    /// Absolute file system path
    #[default]
    Absolute,
    /// Path relative to the virtual file's resolve dir
    Relative,
}

impl std::fmt::Display for FilepathType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absolute => write!(f, "absolute"),
            Self::Relative => write!(f, "relative"),
        }
    }
}

impl std::str::FromStr for FilepathType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "absolute" => Ok(Self::Absolute),
            "relative" => Ok(Self::Relative),
            _ => Err(format!("Invalid filepath type: {s}. Use: absolute, relative")),
        }
    }
}

/// Options for [`Generator::generate`](crate::core::services::Generator::generate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Dialect of the generated module
    pub module_type: ModuleType,
    /// Path emitted for each matched file
    pub filepath_type: FilepathType,
}

impl GenerationOptions {
    /// Create options from both settings
    #[must_use]
    pub const fn new(module_type: ModuleType, filepath_type: FilepathType) -> Self {
        Self {
            module_type,
            filepath_type,
        }
    }

    /// Set the module dialect
    #[must_use]
    pub const fn with_module_type(mut self, module_type: ModuleType) -> Self {
        self.module_type = module_type;
        self
    }

    /// Set the path emission mode
    #[must_use]
    pub const fn with_filepath_type(mut self, filepath_type: FilepathType) -> Self {
        self.filepath_type = filepath_type;
        self
    }
}
