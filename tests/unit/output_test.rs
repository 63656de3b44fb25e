//! Tests for structured CLI output

use std::path::PathBuf;

use globfile::core::models::MatchedFile;
use globfile::output::{CheckResult, GenerateResult, MatchesResult, OutputMode, ResolveResult};
use serde_json::{Value, json};

#[test]
fn test_output_mode_default_is_human() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn test_check_result_json() {
    let result = CheckResult {
        specifier: "glob:./x/*.ts".to_string(),
        is_glob: true,
    };
    let value: Value = serde_json::to_value(&result).unwrap();
    assert_eq!(value, json!({ "specifier": "glob:./x/*.ts", "is_glob": true }));
}

#[test]
fn test_resolve_result_json() {
    let result = ResolveResult {
        specifier: "glob[files]:./x/*.ts".to_string(),
        importer: "/repo/a.ts".to_string(),
        is_glob: true,
        virtual_path: "/repo/x/*.ts/__virtual__:files.ts".to_string(),
        absolute_pattern: "/repo/x/*.ts".to_string(),
        kind: Some("files".to_string()),
    };
    let value: Value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["virtual_path"], "/repo/x/*.ts/__virtual__:files.ts");
    assert_eq!(value["absolute_pattern"], "/repo/x/*.ts");
    assert_eq!(value["kind"], "files");
}

#[test]
fn test_resolve_result_without_kind_is_null() {
    let result = ResolveResult {
        specifier: "./a".to_string(),
        importer: "/repo/a.ts".to_string(),
        is_glob: false,
        virtual_path: "/repo/a".to_string(),
        absolute_pattern: "/repo/a".to_string(),
        kind: None,
    };
    let value: Value = serde_json::to_value(&result).unwrap();
    assert!(value["kind"].is_null());
    assert_eq!(value["is_glob"], false);
}

#[test]
fn test_matches_result_json() {
    let result = MatchesResult {
        virtual_path: "/repo/x/*.ts/__virtual__:matches.ts".to_string(),
        resolve_dir: "/repo/x".to_string(),
        files: vec![MatchedFile::new(PathBuf::from("/repo/x/a.ts"), "./a.ts")],
    };
    let value: Value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value["files"],
        json!([{ "absolute_filepath": "/repo/x/a.ts", "relative_filepath": "./a.ts" }])
    );
}

#[test]
fn test_generate_result_json() {
    let result = GenerateResult {
        virtual_path: "/repo/x/*.ts/__virtual__:filepaths.ts".to_string(),
        kind: "filepaths".to_string(),
        contents: "export default {\n}".to_string(),
    };
    let text = serde_json::to_string_pretty(&result).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["contents"], "export default {\n}");
    assert_eq!(value["kind"], "filepaths");
}

#[test]
fn test_render_reports_success_in_both_modes() {
    let result = CheckResult {
        specifier: "glob:*.ts".to_string(),
        is_glob: true,
    };
    assert!(result.render(OutputMode::Human).is_ok());
    assert!(result.render(OutputMode::Json).is_ok());

    let generated = GenerateResult {
        virtual_path: "/r/*.ts/__virtual__:matches.ts".to_string(),
        kind: "matches".to_string(),
        contents: String::new(),
    };
    assert!(generated.render(OutputMode::Json).is_ok());
}
