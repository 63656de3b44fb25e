//! Domain models for globfile
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`GlobSpecifier`] - `glob:` / `glob[files]:` / `glob[filepaths]:` specifiers
//! - [`VirtualFileKind`] - Which shape of module to generate
//! - [`VirtualFilePath`] - Path of a synthetic module
//! - [`MatchedFile`] - A file matched by the glob
//! - [`GenerationOptions`] - Module dialect and path emission mode

mod kind;
mod matched_file;
mod options;
mod specifier;
mod virtual_path;

pub use kind::{VIRTUAL_EXTENSION, VIRTUAL_MARKER, VirtualFileKind};
pub use matched_file::MatchedFile;
pub use options::{FilepathType, GenerationOptions, ModuleType};
pub use specifier::{
    ENCODED_NEGATION, GlobSpecifier, SpecifierPrefix, decode_negations, encode_negations,
};
pub use virtual_path::VirtualFilePath;
