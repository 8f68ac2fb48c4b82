//! Command-line driver
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod helpers;

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use helpers::fixtures::{with_formula, write_temp};
use predicates::prelude::*;

fn outputs(dir: &std::path::Path, suffix: &str) -> Vec<std::path::PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.to_string_lossy().ends_with(suffix))
        .collect()
}

#[test]
fn cli_writes_grammar_and_parse_tree() {
    let (dir, input) = write_temp("input.txt", &with_formula("forall x P(x)"));
    let log = dir.path().join("run.log");

    let mut cmd = cargo_bin_cmd!("folgram");
    cmd.arg(&input)
        .arg("--out-dir")
        .arg(dir.path())
        .arg("--log")
        .arg(&log);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("FO formula parsed successfully"));

    assert_eq!(outputs(dir.path(), "input-outputgrammar.txt").len(), 1);
    assert_eq!(outputs(dir.path(), "input-outputparsetree.dot").len(), 1);
    let log = fs::read_to_string(&log).unwrap();
    assert!(log.contains("\tinput.txt\tOK\t"));
}

#[test]
fn cli_print_echoes_grammar_and_tree() {
    let (dir, input) = write_temp("input.txt", &with_formula("not P(y)"));

    let mut cmd = cargo_bin_cmd!("folgram");
    cmd.arg(&input)
        .arg("--out-dir")
        .arg(dir.path())
        .arg("--no-log")
        .arg("--print");

    let expected = predicate::str::contains("V_n = {F*, P*, Z*, T*, V*, C*, K*, Q*, J*}")
        .and(predicate::str::contains("      Z\n"));
    cmd.assert().success().stdout(expected);
}

#[test]
fn cli_reports_failure_and_logs_it() {
    let (dir, input) = write_temp("broken.txt", &with_formula("( P(x)"));
    let log = dir.path().join("run.log");

    let mut cmd = cargo_bin_cmd!("folgram");
    cmd.arg(&input)
        .arg("--out-dir")
        .arg(dir.path())
        .arg("--log")
        .arg(&log);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("parentheses"));

    assert!(outputs(dir.path(), ".dot").is_empty());
    let log = fs::read_to_string(&log).unwrap();
    assert!(log.contains("\tbroken.txt\tERR\t"));
}

#[test]
fn cli_rejects_non_txt_input() {
    let (dir, input) = write_temp("input.md", &with_formula("P(x)"));

    let mut cmd = cargo_bin_cmd!("folgram");
    cmd.arg(&input)
        .arg("--out-dir")
        .arg(dir.path())
        .arg("--no-log");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("expected a .txt file"));
}

#[test]
fn cli_max_depth_flag() {
    let formula = format!("{}P(x)", "not ".repeat(5));
    let (dir, input) = write_temp("deep.txt", &with_formula(&formula));

    let mut cmd = cargo_bin_cmd!("folgram");
    cmd.arg(&input)
        .arg("--out-dir")
        .arg(dir.path())
        .arg("--no-log")
        .arg("--max-depth")
        .arg("3");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("nesting exceeds the limit of 3"));
}

#[test]
fn cli_logs_error_when_outputs_cannot_be_written() {
    let (dir, input) = write_temp("input.txt", &with_formula("P(x)"));
    let log = dir.path().join("run.log");
    let blocked = dir.path().join("blocked");
    fs::write(&blocked, "").unwrap();

    let mut cmd = cargo_bin_cmd!("folgram");
    cmd.arg(&input)
        .arg("--out-dir")
        .arg(blocked.join("out"))
        .arg("--log")
        .arg(&log);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to write"));

    let log = fs::read_to_string(&log).unwrap();
    let last = log.lines().last().unwrap();
    assert!(last.contains("\tinput.txt\tERR\tfailed to write"), "{log}");
}
