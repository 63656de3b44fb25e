//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the core resolution and
//! generation logic and external systems (the file system glob matcher).
//!
//! Implementations live in the `adapters` module.

mod match_service;

pub use match_service::{MatchOptions, MatchService};
