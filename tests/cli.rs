//! Integration tests for the command-line interface.
//!
//! Validates stdin processing, multi-file output ordering, in-place
//! rewriting, layout flags, and argument validation.

use std::fs;

use predicates::prelude::*;
use tempfile::tempdir;

use prelude::*;

fn cli() -> Command {
    Command::cargo_bin("apexdocfix").expect("binary should build")
}

#[test]
fn in_place_requires_a_file_argument() {
    cli().arg("--in-place").assert().failure();
}

#[test]
fn version_flag_prints_and_exits() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("apexdocfix"));
}

#[test]
fn stdin_stream_is_normalised() {
    cli()
        .write_stdin("/**\n * {@code string s; }\n */\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("{@code String s; }"));
}

#[test]
fn empty_stdin_produces_a_single_newline() {
    cli().assert().success().stdout("\n");
}

#[test]
fn files_print_in_argument_order() {
    let dir = tempdir().expect("failed to create temporary directory");
    let first = dir.path().join("A.cls");
    let second = dir.path().join("B.cls");
    fs::write(&first, "/**\n * @Return alpha\n */\n").expect("write first file");
    fs::write(&second, "/**\n * @Return beta\n */\n").expect("write second file");
    cli()
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout("/**\n * @return alpha\n */\n/**\n * @return beta\n */\n");
}

#[test]
fn in_place_rewrites_the_file() {
    let dir = tempdir().expect("failed to create temporary directory");
    let file = dir.path().join("Widget.cls");
    fs::write(&file, "/**\n * {@code string s; }\n */\nclass Widget {}\n").expect("write file");
    cli().arg("--in-place").arg(&file).assert().success();
    let out = fs::read_to_string(&file).expect("read file");
    assert_eq!(out, "/**\n * {@code String s; }\n */\nclass Widget {}\n");
}

#[test]
fn missing_file_reports_an_error() {
    let dir = tempdir().expect("failed to create temporary directory");
    cli().arg(dir.path().join("absent.cls")).assert().failure();
}

#[test]
fn print_width_flag_controls_wrapping() {
    let paragraph =
        "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu nu xi omicron pi rho \
         sigma tau";
    let output = cli()
        .args(["--print-width", "40"])
        .write_stdin(format!("/**\n * {paragraph}\n */\n"))
        .output()
        .expect("failed to run command");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout should be utf-8");
    assert!(stdout.lines().count() > 4);
    assert!(stdout.lines().all(|l| l.len() <= 40));
}
