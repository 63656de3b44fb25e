//! Core domain logic for globfile
//!
//! This module contains pure resolution and code generation logic with no
//! I/O dependencies. File system matching is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`GlobSpecifier`, `VirtualFilePath`, `MatchedFile`)
//! - `services/` - Classification, resolution, matching and generation
//! - `ports/` - Trait definitions for external dependencies
//! - `paths` - Lexical path arithmetic

pub mod models;
pub mod paths;
pub mod ports;
pub mod services;
