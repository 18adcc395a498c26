//! Integration tests for the rpnsheet binary

use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

struct Run {
    stdout: String,
    stderr: String,
    code: i32,
}

/// Empty config so tests never pick up a user's ~/.config/rpnsheet/config.toml.
fn empty_config(dir: &Path) -> PathBuf {
    let path = dir.join("config.toml");
    std::fs::write(&path, "").expect("write config");
    path
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Run {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = empty_config(dir.path());
    run_with_config(&config, args, stdin)
}

fn run_with_config(config: &Path, args: &[&str], stdin: &str) -> Run {
    let mut child = Command::new(env!("CARGO_BIN_EXE_rpnsheet"))
        .arg("--config")
        .arg(config)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute rpnsheet");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait for rpnsheet");

    Run {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        code: output.status.code().unwrap_or(-1),
    }
}

#[test]
fn test_evaluates_stdin() {
    let run = run_with_stdin(&[], "3 2\nA2\n4 5 *\nA1\nA1 B2 / 2 +\n3\n39 B1 B2 * /\n");
    assert_eq!(
        run.stdout,
        "3 2\n20.00000\n20.00000\n20.00000\n8.66667\n3.00000\n1.50000\n"
    );
    assert_eq!(run.code, 0);
}

#[test]
fn test_missing_trailing_cells_are_zero() {
    let run = run_with_stdin(&["-"], "2 2\n1\n");
    assert_eq!(run.stdout, "2 2\n1.00000\n0.00000\n0.00000\n0.00000\n");
    assert_eq!(run.code, 0);
}

#[test]
fn test_no_echo_dimensions() {
    let run = run_with_stdin(&["--no-echo-dimensions"], "1 1\n2 3 +\n");
    assert_eq!(run.stdout, "5.00000\n");
}

#[test]
fn test_cycle_exit_code() {
    let run = run_with_stdin(&[], "2 1\nA2\nA1\n");
    assert_eq!(run.code, 5);
    assert!(run.stderr.contains("Cycle detected at cell A1"));
    assert_eq!(run.stdout, "");
}

#[test]
fn test_expression_error_exit_code() {
    let run = run_with_stdin(&[], "1 1\n5 0 /\n");
    assert_eq!(run.code, 4);
    assert!(
        run.stderr
            .contains("The RPN equation 5 0 / at cell A1 attempted to divide by zero")
    );
}

#[test]
fn test_dimension_exit_codes() {
    assert_eq!(run_with_stdin(&[], "").code, 2);
    assert_eq!(run_with_stdin(&[], "\n").code, 1);
    assert_eq!(run_with_stdin(&[], "3\n").code, 2);
    assert_eq!(run_with_stdin(&[], "three 2\n").code, 3);
    assert_eq!(run_with_stdin(&[], "3000000000 1\n").code, 3);
    assert_eq!(run_with_stdin(&[], "3 27\n").code, 1);
    assert_eq!(run_with_stdin(&[], "0 3\n").code, 1);

    let run = run_with_stdin(&[], "3 27\n");
    assert!(run.stderr.contains("Please enter a valid row count : 1 - 26"));
}

#[test]
fn test_file_input_and_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("sheet.txt");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, "1 2\nB1 ++\n41\n").expect("write input");

    let run = run_with_stdin(
        &[
            input.to_str().expect("utf-8 path"),
            "-o",
            output.to_str().expect("utf-8 path"),
        ],
        "",
    );
    assert_eq!(run.code, 0);
    assert_eq!(run.stdout, "");
    assert_eq!(
        std::fs::read_to_string(&output).expect("read output"),
        "1 2\n42.00000\n41.00000\n"
    );
}

#[test]
fn test_long_single_row_chain() {
    let cols = 100;
    let mut input = format!("{cols} 1\n");
    for c in 1..cols {
        input.push_str(&format!("A{}\n", c + 1));
    }
    input.push_str("33\n");

    let run = run_with_stdin(&["--no-echo-dimensions"], &input);
    assert_eq!(run.code, 0);
    assert_eq!(run.stdout, "33.00000\n".repeat(cols));
}

#[test]
fn test_config_disables_echo() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "echo_dimensions = false\n").expect("write config");

    let run = run_with_config(&config, &[], "1 1\n7\n");
    assert_eq!(run.stdout, "7.00000\n");
}
