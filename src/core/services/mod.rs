//! Resolution and generation services
//!
//! Pure logic that operates on domain models. The only outside contact is
//! through the [`MatchService`](crate::core::ports::MatchService) port.
//!
//! - [`classifier`] - Recognize glob specifiers
//! - [`resolver`] - Specifier + importer to virtual file path / glob pattern
//! - [`detector`] - Virtual file path to kind
//! - [`matcher`] - Virtual file path to matched files
//! - [`codegen`] - Statement builders
//! - [`generator`] - Virtual module source text

pub mod classifier;
pub mod codegen;
pub mod detector;
pub mod generator;
pub mod matcher;
pub mod resolver;

pub use classifier::is_glob_specifier;
pub use detector::{detect_kind, parse_kind};
pub use generator::Generator;
pub use matcher::{dot_relative, find_matches};
pub use resolver::{resolve_absolute_glob_pattern, resolve_virtual_file_path};
