//! Integration tests for `wherefrom resolve` / `wherefrom check`.
//!
//! These build a small package tree in a tempdir and drive the binary
//! end to end, checking the JSON output contract and exit codes.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn cargo_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO"));
    cmd.args(["run", "-q", "-p", "wherefrom-cli", "--bin", "wherefrom", "--"]);
    cmd
}

fn write(path: &Path, content: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// A package with a project tree under root/ and one installed dependency.
fn fixture() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(
        &dir.path().join("package.json"),
        r#"{"name": "cli-fixture", "alias": {"naughty-package": "nice-package"}}"#,
    );
    write(&dir.path().join("root/foo/index.js"), "");
    write(&dir.path().join("root/foo/dep.js"), "");
    write(&dir.path().join("root/shared.js"), "");
    write(
        &dir.path().join("node_modules/nice-package/index.js"),
        "",
    );
    dir
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|_| {
        panic!(
            "stdout was not JSON: {}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

#[test]
fn resolve_relative_json() {
    let dir = fixture();
    let source = dir.path().join("root/foo/index.js");

    let output = cargo_bin()
        .args(["resolve", "./dep"])
        .arg(&source)
        .arg("--json")
        .output()
        .expect("failed to run wherefrom");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["found"], true);
    assert_eq!(json["interfaceVersion"], 2);
    assert!(json["path"].as_str().unwrap().ends_with("dep.js"));
}

#[test]
fn resolve_miss_exits_one_with_null_path() {
    let dir = fixture();
    let source = dir.path().join("root/foo/index.js");

    let output = cargo_bin()
        .args(["resolve", "./ghost"])
        .arg(&source)
        .arg("--json")
        .output()
        .expect("failed to run wherefrom");

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert_eq!(json["found"], false);
    assert!(json["path"].is_null());
}

#[test]
fn resolve_tilde_with_root_dir() {
    let dir = fixture();
    let source = dir.path().join("root/foo/index.js");

    let output = cargo_bin()
        .args(["resolve", "~/shared"])
        .arg(&source)
        .args(["--root-dir", "root", "--json"])
        .output()
        .expect("failed to run wherefrom");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert!(json["path"].as_str().unwrap().ends_with("shared.js"));
}

#[test]
fn check_reports_misses_and_exits_one() {
    let dir = fixture();
    let source = dir.path().join("root/foo/main.js");
    write(
        &source,
        "import \"./dep\";\nimport missing from \"./ghost\";\nconst np = require(\"naughty-package\");\n",
    );

    let output = cargo_bin()
        .arg("check")
        .arg(&source)
        .arg("--json")
        .output()
        .expect("failed to run wherefrom");

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert_eq!(json["misses"], 1);

    let imports = json["imports"].as_array().unwrap();
    assert_eq!(imports.len(), 3);
    assert_eq!(imports[0]["raw"], "./dep");
    assert_eq!(imports[0]["found"], true);
    assert_eq!(imports[1]["raw"], "./ghost");
    assert_eq!(imports[1]["found"], false);
    // Alias: the bare specifier resolves through to the aliased package.
    assert_eq!(imports[2]["found"], true);
    assert!(imports[2]["path"]
        .as_str()
        .unwrap()
        .contains("nice-package"));
}

#[test]
fn version_json_carries_interface_version() {
    let output = cargo_bin()
        .args(["version", "--json"])
        .output()
        .expect("failed to run wherefrom");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["interfaceVersion"], 2);
    assert!(json["version"].as_str().is_some());
}
