//! End-to-end tests driving the `modreplace` binary against real files.

mod common;

use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_replaces_existing_directive_with_local_path() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    fs::create_dir(&project).unwrap();
    create_local_module(temp.path(), "local/bar");

    fs::write(
        project.join("go.mod"),
        "module app\n\nrequire foo/bar v1.0.0\n\nreplace foo/bar => ./old\n",
    )
    .unwrap();
    fs::write(
        project.join("replace.yaml"),
        "- find: foo/bar\n  replace: ../local/bar\n",
    )
    .unwrap();

    run_replace(&project, &[]).success().stdout("");

    assert_eq!(
        read_manifest(&project),
        "module app\n\nrequire foo/bar v1.0.0\n\nreplace foo/bar => ../local/bar\n"
    );
}

#[test]
fn test_missing_local_path_fails_after_stripping() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    fs::create_dir(&project).unwrap();

    fs::write(
        project.join("go.mod"),
        "module app\n\nrequire foo/bar v1.0.0\n\nreplace foo/bar => ./old\n",
    )
    .unwrap();
    fs::write(
        project.join("replace.yaml"),
        "- find: foo/bar\n  replace: ../local/bar\n",
    )
    .unwrap();

    run_replace(&project, &[])
        .failure()
        .code(1)
        .stderr(predicate::str::contains("replace module error(s) or missing"))
        .stderr(predicate::str::contains("../local/bar"));

    assert_eq!(
        read_manifest(&project),
        "module app\n\nrequire foo/bar v1.0.0\n\n"
    );
}

#[test]
fn test_clean_removes_directives_without_reading_config() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("go.mod"),
        "module app\n\nreplace a => ../a\nrequire b v1\nreplace b => ../b\n",
    )
    .unwrap();
    // No replace.yaml at all: reading it would fail.

    run_replace(temp.path(), &["-clean"]).success().stdout("");

    assert_eq!(read_manifest(temp.path()), "module app\n\nrequire b v1\n");
}

#[test]
fn test_clean_with_malformed_config_succeeds() {
    let temp = create_project(MANIFEST, "this: [is not valid");

    run_replace(temp.path(), &["--clean"]).success();

    assert!(!read_manifest(temp.path()).contains("replace"));
}

#[test]
fn test_every_missing_path_reported() {
    let temp = create_project(
        MANIFEST,
        "- find: foo/bar\n  replace: ./missing-bar\n- find: baz/qux\n  replace: ./missing-qux\n",
    );

    run_replace(temp.path(), &[])
        .failure()
        .stderr(predicate::str::contains("./missing-bar"))
        .stderr(predicate::str::contains("./missing-qux"));
}

#[test]
fn test_multiple_rules_appended_in_line_order() {
    let temp = create_project(
        MANIFEST,
        "- find: baz/qux\n  replace: ./qux\n- find: foo/bar\n  replace: ./bar\n- find: not/used\n  replace: ./nowhere\n",
    );
    create_local_module(temp.path(), "bar");
    create_local_module(temp.path(), "qux");

    run_replace(temp.path(), &[]).success();

    let manifest = read_manifest(temp.path());
    assert!(
        manifest.ends_with(")\n\nreplace foo/bar => ./bar\nreplace baz/qux => ./qux\n"),
        "Unexpected manifest:\n{}",
        manifest
    );
    assert!(!manifest.contains("./old"));
    assert!(!manifest.contains("./nowhere"));
}

#[test]
fn test_rerun_is_stable() {
    let temp = create_project(MANIFEST, "- find: foo/bar\n  replace: ./bar\n");
    create_local_module(temp.path(), "bar");

    run_replace(temp.path(), &[]).success();
    let first = read_manifest(temp.path());

    run_replace(temp.path(), &[]).success();
    assert_eq!(read_manifest(temp.path()), first);
}

#[test]
fn test_replace_then_clean_restores_requirements() {
    let temp = create_project(MANIFEST, "- find: foo/bar\n  replace: ./bar\n");
    create_local_module(temp.path(), "bar");

    run_replace(temp.path(), &[]).success();
    run_replace(temp.path(), &["-clean"]).success();

    let manifest = read_manifest(temp.path());
    assert!(manifest.contains("\tfoo/bar v1.0.0\n"));
    assert!(!manifest.lines().any(|l| l.starts_with("replace")));
}

#[test]
fn test_no_matches_only_strips() {
    let temp = create_project(MANIFEST, "- find: other/mod\n  replace: ./missing\n");

    run_replace(temp.path(), &[]).success();

    let manifest = read_manifest(temp.path());
    assert!(!manifest.contains("replace"));
    assert!(manifest.contains("\tbaz/qux v0.3.1\n"));
}

#[test]
fn test_dry_run_prints_plan_without_writing() {
    let temp = create_project(MANIFEST, "- find: foo/bar\n  replace: ./bar\n");
    create_local_module(temp.path(), "bar");

    run_replace(temp.path(), &["--dry-run"])
        .success()
        .stdout(predicate::str::contains("DRY RUN"))
        .stdout(predicate::str::contains("replace foo/bar => ./old"))
        .stdout(predicate::str::contains("replace foo/bar => ./bar"));

    assert_eq!(read_manifest(temp.path()), MANIFEST);
}

#[test]
fn test_dry_run_clean() {
    let temp = create_project(MANIFEST, "");

    run_replace(temp.path(), &["-clean", "-n"])
        .success()
        .stdout(predicate::str::contains("replace foo/bar => ./old"));

    assert_eq!(read_manifest(temp.path()), MANIFEST);
}

#[test]
fn test_double_dash_flags_accepted() {
    let temp = create_project(MANIFEST, "- find: foo/bar\n  replace: ./bar\n");
    create_local_module(temp.path(), "bar");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("modreplace");
    cmd.arg("--gomod=go.mod")
        .arg("--config")
        .arg("replace.yaml")
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(read_manifest(temp.path()).ends_with("replace foo/bar => ./bar\n"));
}
