//! Tests for project and monorepo root discovery

use std::fs;
use std::path::Path;

use globfile::adapters::{find_monorepo_root, find_project_root};
use tempfile::TempDir;

fn write(root: &Path, file: &str, content: &str) {
    let path = root.join(file);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_project_root_from_file_and_dir() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "package.json", "{}");
    write(temp.path(), "src/deep/a.ts", "");

    assert_eq!(find_project_root(&temp.path().join("src/deep/a.ts")).unwrap(), temp.path());
    assert_eq!(find_project_root(temp.path()).unwrap(), temp.path());
}

#[test]
fn test_package_json_directory_is_not_a_manifest() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "package.json", "{}");
    fs::create_dir_all(temp.path().join("app/package.json")).unwrap();

    assert_eq!(find_project_root(&temp.path().join("app")).unwrap(), temp.path());
}

#[test]
fn test_monorepo_root_is_outermost_workspace() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "package.json", r#"{ "workspaces": ["apps/*"] }"#);
    write(temp.path(), "apps/site/package.json", r#"{ "workspaces": ["parts/*"] }"#);
    write(temp.path(), "apps/site/parts/ui/package.json", "{}");

    let found = find_monorepo_root(&temp.path().join("apps/site/parts/ui")).unwrap();
    assert_eq!(found, temp.path());
}

#[test]
fn test_monorepo_root_ignores_invalid_manifest() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "pnpm-workspace.yaml", "packages:\n  - pkg/*\n");
    write(temp.path(), "pkg/a/package.json", "not json");

    let found = find_monorepo_root(&temp.path().join("pkg/a")).unwrap();
    assert_eq!(found, temp.path());
}

#[test]
fn test_monorepo_root_from_git_repository() {
    let temp = TempDir::new().unwrap();
    git2::Repository::init(temp.path()).unwrap();
    write(temp.path(), "pkg/a/package.json", "{}");

    let found = find_monorepo_root(&temp.path().join("pkg/a")).unwrap();
    assert_eq!(found.components().collect::<Vec<_>>(), temp.path().components().collect::<Vec<_>>());
}
