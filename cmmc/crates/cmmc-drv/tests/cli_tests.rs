//! CLI Interface Tests
//!
//! These tests run the `cmmc` binary and check its standard output,
//! standard error and exit status.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the path to the cmmc binary
fn cmmc_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_cmmc"))
}

fn cmmc() -> Command {
    let mut cmd = Command::new(cmmc_bin());
    cmd.env_remove("CMMC_CONFIG").env_remove("CMMC_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    cmmc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("--layout")));
}

#[test]
fn test_cli_version() {
    cmmc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cmmc"));
}

#[test]
fn test_empty_input() {
    cmmc()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_single_illegal_character() {
    cmmc()
        .write_stdin("@")
        .assert()
        .code(1)
        .stdout("Lexical error: '@' in line number 1\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_keyword_versus_identifier() {
    cmmc()
        .write_stdin("int intx")
        .assert()
        .success()
        .stdout("<int>\n<id,intx>\n");
}

#[test]
fn test_error_on_line_three() {
    cmmc()
        .write_stdin("int a;\nint b;\n$\nint c;\n")
        .assert()
        .failure()
        .stdout(predicate::str::ends_with("Lexical error: '$' in line number 3\n"))
        .stdout(predicate::str::contains("<id,c>").not());
}

#[test]
fn test_non_utf8_bytes_round_trip() {
    cmmc()
        .write_stdin(&b"write(\"\xe9t\xe9\");\n\xff"[..])
        .assert()
        .code(1)
        .stdout(&b"<write>\n<(>\n<str,\xe9t\xe9>\n<)>\n<;>\nLexical error: '\xff' in line number 2\n"[..]);
}

#[test]
fn test_input_file_argument() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = temp_dir.path().join("prog.cmm");
    fs::write(&input, "return 0;\n").unwrap();

    cmmc()
        .arg(&input)
        .assert()
        .success()
        .stdout("<return>\n<integernum,0>\n<;>\n");
}

#[test]
fn test_missing_input_file() {
    cmmc()
        .arg("/nonexistent/prog.cmm")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("error: cannot read /nonexistent/prog.cmm"));
}

#[test]
fn test_inline_layout() {
    cmmc()
        .args(["--layout", "inline"])
        .write_stdin("int x; # decl\nx = 2;\n")
        .assert()
        .success()
        .stdout("<int> <id,x><;> \n<id,x> <assign,=> <integernum,2><;>\n");
}

#[test]
fn test_inline_layout_error_follows_output() {
    cmmc()
        .args(["--layout", "inline"])
        .write_stdin("x = a | b;")
        .assert()
        .code(1)
        .stdout("<id,x> <assign,=> <id,a> Lexical error: '|' in line number 1\n");
}

#[test]
fn test_unknown_layout_is_usage_error() {
    cmmc()
        .args(["--layout", "columns"])
        .write_stdin("x")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_config_file_sets_layout() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = temp_dir.path().join("cmmc.toml");
    fs::write(&config, "layout = \"inline\"\n").unwrap();

    cmmc()
        .arg("--config")
        .arg(&config)
        .write_stdin("x;\n")
        .assert()
        .success()
        .stdout("<id,x><;>\n");
}

#[test]
fn test_config_from_environment() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = temp_dir.path().join("cmmc.toml");
    fs::write(&config, "layout = \"inline\"\n").unwrap();

    cmmc()
        .env("CMMC_CONFIG", &config)
        .args(["--layout", "lines"])
        .write_stdin("x;\n")
        .assert()
        .success()
        .stdout("<id,x>\n<;>\n");
}

#[test]
fn test_malformed_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = temp_dir.path().join("cmmc.toml");
    fs::write(&config, "layout = [").unwrap();

    cmmc()
        .arg("--config")
        .arg(&config)
        .write_stdin("x")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_config_in_working_directory_is_ignored() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join("cmmc.toml"), "layout = \"inline\"\n").unwrap();

    cmmc()
        .current_dir(temp_dir.path())
        .write_stdin("x;")
        .assert()
        .success()
        .stdout("<id,x>\n<;>\n");
}

#[test]
fn test_verbose_prints_snippet_on_stderr() {
    cmmc()
        .args(["--verbose", "--no-color"])
        .write_stdin("int x;\nx = 1 ~ 2;\n")
        .assert()
        .code(1)
        .stdout(predicate::str::ends_with("Lexical error: '~' in line number 2\n"))
        .stderr(
            predicate::str::contains("error[E0101]: illegal character '~'")
                .and(predicate::str::contains(" --> <stdin>:2:7"))
                .and(predicate::str::contains("  2 | x = 1 ~ 2;")),
        );
}

#[test]
fn test_logs_never_reach_stdout() {
    cmmc()
        .env("CMMC_LOG", "trace")
        .arg("--no-color")
        .write_stdin("int x;")
        .assert()
        .success()
        .stdout("<int>\n<id,x>\n<;>\n")
        .stderr(predicate::str::contains("lexing finished"));
}

#[test]
fn test_invalid_log_filter() {
    cmmc()
        .env("CMMC_LOG", "cmmc=loud")
        .write_stdin("x")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to initialize logging"));
}
