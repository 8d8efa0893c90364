use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn cgen(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cgen"))
        .current_dir(cwd)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn entries(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

#[test]
fn test_success_exits_zero() {
    let dir = tempdir().unwrap();
    let out = cgen(dir.path(), &["-n", "dataTable", "-l", "js"]);

    assert_eq!(out.status.code(), Some(0));
    assert!(dir.path().join("data-table/dataTable.component.js").exists());
}

#[test]
fn test_missing_name_exits_one() {
    let dir = tempdir().unwrap();
    let out = cgen(dir.path(), &[]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("--name"));
    assert_eq!(entries(dir.path()), 0);
}

#[test]
fn test_unknown_language_exits_one_without_writing() {
    let dir = tempdir().unwrap();
    let out = cgen(dir.path(), &["-n", "dataTable", "-l", "xx"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("xx"));
    assert_eq!(entries(dir.path()), 0);
}

#[test]
fn test_existing_folder_exits_one() {
    let dir = tempdir().unwrap();
    std::fs::create_dir(dir.path().join("my-component")).unwrap();

    let out = cgen(dir.path(), &["-n", "myComponent"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("my-component"));
    assert_eq!(entries(&dir.path().join("my-component")), 0);
}

#[test]
fn test_empty_name_exits_one() {
    let dir = tempdir().unwrap();
    let out = cgen(dir.path(), &["-n", ""]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Component name is required"));
}

#[test]
fn test_help_exits_zero() {
    let dir = tempdir().unwrap();
    let out = cgen(dir.path(), &["--help"]);

    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("--language"));
}
