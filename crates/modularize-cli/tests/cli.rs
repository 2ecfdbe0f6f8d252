//! Integration tests for the modularize binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CONFIG: &str = r#"
[libraries."react-bootstrap"]
transform = "react-bootstrap/lib/${member}"

[libraries."react-bootstrap".members]
Row = { replace = "react-bootstrap/lib/Layout" }

[libraries.lodash]
transform = "lodash/${member}"
prevent_full_import = true
"#;

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("modularize.toml"), CONFIG).unwrap();
    dir
}

fn modularize(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("modularize").unwrap();
    cmd.current_dir(dir.path()).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn transform_prints_single_file_to_stdout() {
    let dir = project();
    fs::write(
        dir.path().join("app.js"),
        "import { Row, Grid } from 'react-bootstrap';\nrender(Row, Grid);\n",
    )
    .unwrap();

    modularize(&dir)
        .args(["transform", "app.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "import { Row } from \"react-bootstrap/lib/Layout\"",
        ))
        .stdout(predicate::str::contains(
            "import Grid from \"react-bootstrap/lib/Grid\"",
        ))
        .stdout(predicate::str::contains("render(Row, Grid);"));

    // the file itself is untouched without --write
    let original = fs::read_to_string(dir.path().join("app.js")).unwrap();
    assert!(original.starts_with("import { Row, Grid } from 'react-bootstrap';"));
}

#[test]
fn transform_write_rewrites_only_modified_files() {
    let dir = project();
    fs::write(dir.path().join("a.js"), "import { merge } from 'lodash';\n").unwrap();
    fs::write(dir.path().join("b.js"), "import React from 'react';\n").unwrap();

    modularize(&dir)
        .args(["transform", "--write", "--quote", "single", "a.js", "b.js"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Transform Summary"));

    let a = fs::read_to_string(dir.path().join("a.js")).unwrap();
    assert!(a.contains("import merge from 'lodash/merge'"));
    let b = fs::read_to_string(dir.path().join("b.js")).unwrap();
    assert_eq!(b, "import React from 'react';\n");
}

#[test]
fn transform_write_warns_when_nothing_matched() {
    let dir = project();
    let source = "import Bootstrap from 'react-bootstrap';\nimport React from 'react';\n";
    fs::write(dir.path().join("app.js"), source).unwrap();

    modularize(&dir)
        .args(["transform", "--write", "app.js"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no file was written"));

    assert_eq!(fs::read_to_string(dir.path().join("app.js")).unwrap(), source);
}

#[test]
fn transform_reports_full_import_violation() {
    let dir = project();
    fs::write(dir.path().join("util.js"), "import _ from 'lodash';\n").unwrap();

    modularize(&dir)
        .args(["transform", "util.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("util.js"))
        .stderr(predicate::str::contains("lodash"));
}

#[test]
fn transform_multiple_files_requires_write() {
    let dir = project();
    modularize(&dir)
        .args(["transform", "a.js", "b.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--write"));
}

#[test]
fn transform_missing_file_fails() {
    let dir = project();
    modularize(&dir)
        .args(["transform", "missing.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.js"));
}

#[test]
fn check_lists_rules_in_order() {
    let dir = project();
    modularize(&dir)
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration is valid (2 rule(s))"))
        .stderr(predicate::str::contains("react-bootstrap"))
        .stderr(predicate::str::contains("preventFullImport"));
}

#[test]
fn check_with_explicit_json_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("rules.json"),
        r#"{ "libraries": { "ui-(\\w+)": { "transform": "ui-${1}/${member}", "memberCase": "kebab" } } }"#,
    )
    .unwrap();

    modularize(&dir)
        .args(["check", "--config", "rules.json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("kebab"));
}

#[test]
fn check_fails_without_config() {
    let dir = TempDir::new().unwrap();
    modularize(&dir)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config not found"));
}

#[test]
fn check_rejects_capture_overflow() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("modularize.json"),
        r#"{ "libraries": { "lodash": { "transform": "lodash/${1}" } } }"#,
    )
    .unwrap();

    modularize(&dir)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("capture"));
}
