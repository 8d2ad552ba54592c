//! CLI integration tests
//!
//! Drive the built `sincecheck` binary against snapshot trees written to a
//! temporary directory and check output and exit status.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const V9: &str = r#"{
  "schema_version": 1,
  "module": "test",
  "version": "9",
  "elements": [
    { "kind": "module", "path": "test", "since": "9" },
    { "kind": "class", "path": "api.Api", "since": "9", "enclosing": { "kind": "module", "path": "test" } }
  ]
}"#;

fn v10(method_since: Option<&str>) -> String {
    let since = method_since
        .map(|s| format!(", \"since\": \"{}\"", s))
        .unwrap_or_default();
    format!(
        r#"{{
  "schema_version": 1,
  "module": "test",
  "version": "10",
  "elements": [
    {{ "kind": "module", "path": "test", "since": "9" }},
    {{ "kind": "class", "path": "api.Api", "since": "9", "enclosing": {{ "kind": "module", "path": "test" }} }},
    {{ "kind": "method", "path": "api.Api:test:()", "enclosing": {{ "kind": "class", "path": "api.Api" }}{} }}
  ]
}}"#,
        since
    )
}

fn setup_tree(root: &Path, method_since: Option<&str>) {
    fs::create_dir_all(root.join("classes/9")).unwrap();
    fs::create_dir_all(root.join("classes/10")).unwrap();
    fs::write(root.join("classes/9/test.snapshot.json"), V9).unwrap();
    fs::write(
        root.join("classes/10/test.snapshot.json"),
        v10(method_since),
    )
    .unwrap();
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sincecheck"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn check_args<'a>(versions: &'a str) -> Vec<&'a str> {
    vec![
        "check",
        "--module",
        "test",
        "--versions",
        versions,
        "--snapshot-root",
        "classes",
    ]
}

#[test]
fn test_check_reports_stale_tag_with_exit_1() {
    let temp_dir = TempDir::new().unwrap();
    setup_tree(temp_dir.path(), Some("9"));

    let output = run(temp_dir.path(), &check_args("9,10"));

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "For Element: method:api.Api:test:() Wrong @since version is 9 instead of 10"
    );
}

#[test]
fn test_check_passes_with_exit_0() {
    let temp_dir = TempDir::new().unwrap();
    setup_tree(temp_dir.path(), Some("10"));

    let output = run(temp_dir.path(), &check_args("9,10"));

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn test_descending_versions_exit_2() {
    let temp_dir = TempDir::new().unwrap();
    setup_tree(temp_dir.path(), Some("9"));

    let output = run(temp_dir.path(), &check_args("10,9"));

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_INVALID_CONFIGURATION"));
}

#[test]
fn test_missing_tags_policy_flag() {
    let temp_dir = TempDir::new().unwrap();
    setup_tree(temp_dir.path(), None);

    let output = run(temp_dir.path(), &check_args("9,10"));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "For Element: method:api.Api:test:() Wrong @since version is <missing> instead of 10"
    );

    let mut args = check_args("9,10");
    args.extend(["--missing-tags", "inherit-enclosing"]);
    let output = run(temp_dir.path(), &args);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "For Element: method:api.Api:test:() Wrong @since version is 9 instead of 10"
    );
}

#[test]
fn test_settings_file() {
    let temp_dir = TempDir::new().unwrap();
    setup_tree(temp_dir.path(), Some("9"));
    fs::write(
        temp_dir.path().join("sincecheck.toml"),
        "module = \"test\"\nversions = [\"9\", \"10\"]\nsnapshot_root = \"classes\"\n",
    )
    .unwrap();

    let output = run(
        temp_dir.path(),
        &["check", "--config", "sincecheck.toml", "--format", "json"],
    );

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["module"], "test");
    assert_eq!(report["diagnostics"].as_array().unwrap().len(), 1);
    assert_eq!(report["verify"]["version"], "10");
}

#[test]
fn test_markdown_summary() {
    let temp_dir = TempDir::new().unwrap();
    setup_tree(temp_dir.path(), Some("10"));

    let mut args = check_args("9,10");
    args.extend(["--format", "markdown"]);
    let output = run(temp_dir.path(), &args);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("expected @since version"));
}

#[test]
fn test_missing_snapshot_exit_2() {
    let temp_dir = TempDir::new().unwrap();
    setup_tree(temp_dir.path(), Some("9"));

    let output = run(temp_dir.path(), &check_args("9,10,11"));

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_NOT_FOUND"));
}

#[test]
fn test_history_lists_first_appearance() {
    let temp_dir = TempDir::new().unwrap();
    setup_tree(temp_dir.path(), Some("9"));

    let output = run(
        temp_dir.path(),
        &[
            "history",
            "--module",
            "test",
            "--versions",
            "9,10",
            "--snapshot-root",
            "classes",
        ],
    );

    assert_eq!(output.status.code(), Some(0));
    let lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(
        lines,
        vec![
            "9\tclass:api.Api",
            "10\tmethod:api.Api:test:()",
            "9\tmodule:test",
        ]
    );
}
