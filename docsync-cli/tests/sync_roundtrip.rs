use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn docsync() -> Command {
    Command::cargo_bin("docsync").expect("docsync binary")
}

/// Lay out both configured pairs under a temporary base directory.
fn seed_workspace() -> TempDir {
    let base = TempDir::new().expect("base");
    seed_crate(
        base.path(),
        "docsync-core",
        "Core docs\n\nTypes and helpers.\n",
        "//! stale\n//! header\nfn core() {}\n",
    );
    seed_crate(base.path(), "docsync-sync", "Sync docs\n", "fn sync() {}\n");
    base
}

fn seed_crate(base: &Path, name: &str, readme: &str, source: &str) {
    let dir = base.join(name);
    fs::create_dir_all(dir.join("src")).expect("mkdir");
    fs::write(dir.join("README.md"), readme).expect("write readme");
    fs::write(dir.join("src").join("lib.rs"), source).expect("write source");
}

fn lib_rs(base: &Path, name: &str) -> String {
    fs::read_to_string(base.join(name).join("src").join("lib.rs")).expect("read lib.rs")
}

#[test]
fn sync_rewrites_header_and_preserves_body() {
    let base = seed_workspace();

    docsync()
        .arg("sync")
        .arg("--base")
        .arg(base.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 written, 0 unchanged"));

    assert_eq!(
        lib_rs(base.path(), "docsync-core"),
        "//! Core docs\n//!\n//! Types and helpers.\nfn core() {}\n"
    );
    assert_eq!(lib_rs(base.path(), "docsync-sync"), "//! Sync docs\nfn sync() {}\n");
}

#[test]
fn second_sync_reports_unchanged() {
    let base = seed_workspace();

    docsync()
        .arg("sync")
        .arg("--base")
        .arg(base.path())
        .assert()
        .success();
    docsync()
        .arg("sync")
        .arg("--base")
        .arg(base.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0 written, 2 unchanged"));
}

#[test]
fn bare_invocation_syncs_every_pair() {
    let base = seed_workspace();

    docsync()
        .current_dir(base.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 written"));

    assert!(lib_rs(base.path(), "docsync-sync").starts_with("//! Sync docs\n"));
}

#[test]
fn dry_run_reports_but_writes_nothing() {
    let base = seed_workspace();

    docsync()
        .arg("sync")
        .arg("--dry-run")
        .arg("--base")
        .arg(base.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[dry-run]"));

    assert_eq!(
        lib_rs(base.path(), "docsync-core"),
        "//! stale\n//! header\nfn core() {}\n",
        "dry-run must not modify files"
    );
}

#[test]
fn single_pair_sync_leaves_other_pairs_alone() {
    let base = seed_workspace();

    docsync()
        .arg("sync")
        .arg("docsync-core")
        .arg("--base")
        .arg(base.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 written, 0 unchanged"));

    assert_eq!(
        lib_rs(base.path(), "docsync-sync"),
        "fn sync() {}\n",
        "unsynced pair must be untouched"
    );
}

#[test]
fn unknown_pair_name_fails() {
    let base = seed_workspace();

    docsync()
        .arg("sync")
        .arg("nope")
        .arg("--base")
        .arg(base.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no configured pair named 'nope'"));
}

#[test]
fn missing_readme_aborts_with_error_and_source_is_untouched() {
    let base = seed_workspace();
    fs::remove_file(base.path().join("docsync-core").join("README.md")).expect("remove readme");

    docsync()
        .arg("sync")
        .arg("--base")
        .arg(base.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("README.md"));

    assert_eq!(
        lib_rs(base.path(), "docsync-core"),
        "//! stale\n//! header\nfn core() {}\n",
        "failed pair must be untouched"
    );
}
