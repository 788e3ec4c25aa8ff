use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn reckon() -> Command {
    Command::cargo_bin("reckon").expect("binary exists")
}

#[test]
fn evaluates_single_expression() {
    reckon().arg("2+3*4")
            .assert()
            .success()
            .stdout("14\n");
}

#[test]
fn prints_error_on_failure() {
    reckon().arg("5/0")
            .assert()
            .success()
            .stdout("Error\n");
}

#[test]
fn verbose_logs_error_details() {
    reckon().arg("-v")
            .arg("(1+2")
            .assert()
            .success()
            .stdout("Error\n")
            .stderr(predicate::str::contains("unbalanced parentheses"));
}

#[test]
fn accepts_expression_starting_with_minus() {
    reckon().arg("-3+4")
            .assert()
            .success()
            .stdout("1\n");

    reckon().args(["-v", "-(2+3)"])
            .assert()
            .success()
            .stdout("-5\n");
}

#[test]
fn prints_postfix_form() {
    reckon().args(["--rpn", "--", "-(2+3)*4"])
            .assert()
            .success()
            .stdout("2 3 + neg 4 *\n");
}

#[test]
fn evaluates_each_line_of_a_file() {
    let dir = tempdir().expect("tempdir");
    let input_path = dir.path().join("input.txt");
    fs::write(&input_path, "1+1\n\n2*-3\n1.2.3\n").expect("write input");

    reckon().arg("--file")
            .arg(&input_path)
            .assert()
            .success()
            .stdout("2\n-6\nError\n");
}

#[test]
fn reads_expressions_from_stdin() {
    reckon().write_stdin("0.1+0.2\n   \n7-\n-3+4\n")
            .assert()
            .success()
            .stdout("0.30000000000000004\n7\n1\n");
}

#[test]
fn reports_missing_file() {
    let dir = tempdir().expect("tempdir");

    reckon().arg("--file")
            .arg(dir.path().join("missing.txt"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read input file"));
}
