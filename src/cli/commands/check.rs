//! Classify a module specifier

use globfile::core::services::is_glob_specifier;
use globfile::output::{CheckResult, OutputMode};

/// Print whether `specifier` is a glob specifier
pub fn check(specifier: &str, mode: OutputMode) -> anyhow::Result<()> {
    CheckResult {
        specifier: specifier.to_string(),
        is_glob: is_glob_specifier(specifier),
    }
    .render(mode)
}
