//! Tests for specifier resolution
//!
//! Resolution turns a specifier plus importer into the virtual file path the
//! host uses as a module id, and into the absolute glob pattern.

use std::path::{Path, PathBuf};

use globfile::core::models::VirtualFileKind;
use globfile::core::services::{
    parse_kind, resolve_absolute_glob_pattern, resolve_virtual_file_path,
};

const IMPORTER: &str = "/repo/pkg/a.ts";

// =============================================================================
// Virtual File Path Tests
// =============================================================================

#[test]
fn virtual_path_dir_is_resolved_pattern() {
    let path = resolve_virtual_file_path("glob:./x/*.ts", Path::new(IMPORTER));
    assert_eq!(path.pattern_dir(), Path::new("/repo/pkg/x/*.ts"));
    assert_eq!(path.as_path().file_name().unwrap(), "__virtual__:matches.ts");
}

#[test]
fn virtual_path_is_deterministic() {
    let first = resolve_virtual_file_path("glob[files]:../shared/**/*.ts", Path::new(IMPORTER));
    let second = resolve_virtual_file_path("glob[files]:../shared/**/*.ts", Path::new(IMPORTER));
    assert_eq!(first, second);
    assert_eq!(first.as_path(), Path::new("/repo/shared/**/*.ts/__virtual__:files.ts"));
}

#[test]
fn virtual_path_kind_follows_prefix() {
    let importer = Path::new(IMPORTER);
    let cases = [
        ("glob:./x/*.ts", VirtualFileKind::Matches),
        ("glob[files]:./x/*.ts", VirtualFileKind::Files),
        ("glob[filepaths]:./x/*.ts", VirtualFileKind::Filepaths),
    ];
    for (specifier, kind) in cases {
        let path = resolve_virtual_file_path(specifier, importer);
        assert_eq!(parse_kind(path.as_path()).unwrap(), kind, "specifier={specifier}");
    }
}

#[test]
fn virtual_path_encodes_every_negation() {
    let path = resolve_virtual_file_path("glob:./!(a)/!(b|c).ts", Path::new(IMPORTER));
    assert_eq!(path.as_path(), Path::new("/repo/pkg/%21(a)/%21(b|c).ts/__virtual__:matches.ts"));
    assert_eq!(path.search_pattern(), "/repo/pkg/!(a)/!(b|c).ts");
}

#[test]
fn absolute_importer_pattern_is_kept() {
    let path = resolve_virtual_file_path("glob:/abs/*.ts", Path::new(IMPORTER));
    assert_eq!(path.as_path(), Path::new("/abs/*.ts/__virtual__:matches.ts"));
}

#[test]
fn resolve_dir_is_parent_of_pattern() {
    let path = resolve_virtual_file_path("glob:./x/**/*.ts", Path::new(IMPORTER));
    assert_eq!(path.resolve_dir(), PathBuf::from("/repo/pkg/x/**"));
}

// =============================================================================
// Absolute Pattern Tests
// =============================================================================

#[test]
fn absolute_pattern_matches_search_pattern() {
    let importer = Path::new(IMPORTER);
    for specifier in ["glob:./x/!(index).ts", "glob[files]:../y/*.ts", "glob[filepaths]:*.ts"] {
        let pattern = resolve_absolute_glob_pattern(specifier, importer);
        let virtual_path = resolve_virtual_file_path(specifier, importer);
        assert_eq!(pattern.to_string_lossy(), virtual_path.search_pattern(), "specifier={specifier}");
    }
}

#[test]
fn absolute_pattern_for_plain_specifier() {
    assert_eq!(
        resolve_absolute_glob_pattern("./lib/*.ts", Path::new(IMPORTER)),
        PathBuf::from("/repo/pkg/lib/*.ts")
    );
}

// =============================================================================
// Fallback Tests
// =============================================================================

#[test]
fn non_glob_specifier_is_joined() {
    let path = resolve_virtual_file_path("../other/file.ts", Path::new(IMPORTER));
    assert_eq!(path.as_path(), Path::new("/repo/other/file.ts"));
    assert!(parse_kind(path.as_path()).is_err());
}
