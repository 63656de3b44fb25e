//! Adapters implementing core ports and host-side helpers
//!
//! - [`glob`] - `MatchService` backed by the `glob` crate
//! - [`project`] - Project and monorepo root discovery

pub mod glob;
pub mod project;

pub use self::glob::GlobMatchService;
pub use project::{find_monorepo_root, find_project_root};
