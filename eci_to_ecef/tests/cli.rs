use std::process::{Command, Output};

use approx::assert_abs_diff_eq;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_eci_to_ecef"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run eci_to_ecef")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(String::from)
        .collect()
}

fn parse_ecef(output: &Output) -> [f64; 3] {
    let lines = stdout_lines(output);
    assert_eq!(lines.len(), 3, "expected 3 lines, got {:?}", lines);
    let mut ecef = [0.0; 3];
    for (value, line) in ecef.iter_mut().zip(&lines) {
        *value = line.parse().expect("output line is not a float");
    }
    ecef
}

#[test]
fn test_new_year_2024() {
    let output = run(&["2024", "1", "1", "0", "0", "0", "7000", "0", "0"]);
    assert!(output.status.success());
    let ecef = parse_ecef(&output);
    assert_abs_diff_eq!(ecef[0], 6986.834935653262, epsilon = 1e-9);
    assert_abs_diff_eq!(ecef[1], -429.11255159350907, epsilon = 1e-9);
    assert_eq!(ecef[2], 0.0);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_negative_coordinates() {
    let output = run(&[
        "1990", "6", "15", "6", "30", "15.25", "-4000.5", "5000.25", "1200",
    ]);
    assert!(output.status.success());
    let ecef = parse_ecef(&output);
    assert_abs_diff_eq!(ecef[0], -6376.7211489863985, epsilon = 1e-6);
    assert_abs_diff_eq!(ecef[1], 586.4534939529162, epsilon = 1e-6);
    assert_eq!(ecef[2], 1200.0);
}

#[test]
fn test_repeated_runs_match() {
    let args = ["2028", "2", "29", "16", "59", "59.999", "-6500.1", "123.4", "-987.6"];
    let first = run(&args);
    let second = run(&args);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(parse_ecef(&first)[2], -987.6);
}

#[test]
fn test_too_few_arguments() {
    let output = run(&["2024", "1", "1", "0", "0", "0", "7000", "0"]);
    assert_eq!(output.status.code(), Some(1));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Usage:"));
}

#[test]
fn test_too_many_arguments() {
    let output = run(&["2024", "1", "1", "0", "0", "0", "7000", "0", "0", "0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_lines(&output)[0].starts_with("Usage:"));
}

#[test]
fn test_no_arguments() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_lines(&output)[0].contains("eci_x_km"));
}

#[test]
fn test_non_numeric_argument() {
    let output = run(&["2024", "1", "1", "0", "0", "zero", "7000", "0", "0"]);
    // clap's error status, distinct from the usage status
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_hyphen_led_reals() {
    let output = run(&["2024", "1", "1", "0", "0", "0", "-.5", "0", "-inf"]);
    assert!(output.status.success());
    let ecef = parse_ecef(&output);
    assert!(ecef[0] < 0.0);
    assert_eq!(ecef[2], f64::NEG_INFINITY);
}
