#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;

use rstest::rstest;
use tempfile::TempDir;

use crate::errors::LoadError;
use crate::project::file_loader::{get_extension, read_definition, validate_extension};

#[rstest]
#[case("input.txt", Some("txt"))]
#[case("dir/input.TXT", Some("TXT"))]
#[case("input", None)]
#[case("archive.tar.gz", Some("gz"))]
fn test_get_extension(#[case] path: &str, #[case] expected: Option<&str>) {
    assert_eq!(get_extension(Path::new(path)), expected);
}

#[test]
fn test_validate_extension_accepts_txt() {
    assert!(validate_extension(Path::new("definition.txt")).is_ok());
}

#[rstest]
#[case("definition.md")]
#[case("definition")]
#[case("definition.TXT")]
fn test_validate_extension_rejects_others(#[case] path: &str) {
    let err = validate_extension(Path::new(path)).unwrap_err();
    assert!(matches!(
        err,
        LoadError::UnsupportedExtension { path: p } if p == Path::new(path)
    ));
}

#[test]
fn test_read_definition_returns_lines() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("input.txt");
    fs::write(&path, "variables: x\nconstants: a\n  more\n").unwrap();

    let lines = read_definition(&path).unwrap();
    assert_eq!(lines, vec!["variables: x", "constants: a", "  more"]);
}

#[test]
fn test_read_definition_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.txt");

    let err = read_definition(&path).unwrap_err();
    assert!(matches!(err, LoadError::Read { .. }));
}

#[test]
fn test_read_definition_checks_extension_before_reading() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("input.fol");
    fs::write(&path, "variables: x\n").unwrap();

    let err = read_definition(&path).unwrap_err();
    assert!(matches!(err, LoadError::UnsupportedExtension { .. }));
}
