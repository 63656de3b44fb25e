//! globfile - glob module specifiers as virtual modules
//!
//! Turns specifiers like `glob:./components/*.ts` into synthetic "virtual"
//! module paths and generates the source text of those modules, so a bundler
//! can treat "import everything matching this pattern" as an ordinary
//! resolve + load pair.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//!
//! use globfile::adapters::GlobMatchService;
//! use globfile::core::models::GenerationOptions;
//! use globfile::core::services::{Generator, resolve_virtual_file_path};
//!
//! let virtual_path =
//!     resolve_virtual_file_path("glob:./components/*.ts", Path::new("/repo/src/index.ts"));
//! let generator = Generator::new("/repo", GlobMatchService);
//! let contents = generator.generate(&virtual_path, GenerationOptions::default()).unwrap();
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;

pub use error::GlobfileError;
