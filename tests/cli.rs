//! End-to-end tests driving the compiled binary
//!
//! Successful runs are checked through the `RESULT:` contract line and the
//! surrounding report; failures are checked for exit status 1, the right
//! message on stdout, and the absence of any result line.

use assert_cmd::Command;
use predicates::prelude::*;

fn calculator() -> Command {
    Command::cargo_bin("calculator").expect("binary should build")
}

#[test]
fn test_add_reports_sum() {
    calculator()
        .args(["add", "15", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RESULT: 40"));
}

#[test]
fn test_add_accepts_negative_operands() {
    calculator()
        .args(["add", "-5", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RESULT: -2"));
}

#[test]
fn test_multiply_reports_product() {
    calculator()
        .args(["multiply", "7", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RESULT: 56"));
}

#[test]
fn test_multiply_exact_at_32_bit_extremes() {
    calculator()
        .args(["multiply", "2147483647", "2147483647"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RESULT: 4611686014132420609"));

    calculator()
        .args(["multiply", "-2147483648", "-2147483648"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RESULT: 4611686018427387904"));
}

#[test]
fn test_fibonacci_reports_term() {
    calculator()
        .args(["fibonacci", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RESULT: 55"));
}

#[test]
fn test_fibonacci_base_positions() {
    calculator()
        .args(["fibonacci", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RESULT: 0"));

    calculator()
        .args(["fibonacci", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RESULT: 1"));
}

#[test]
fn test_squares_reports_sum_of_squares() {
    calculator()
        .args(["squares", "3", "4", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RESULT: 50"));
}

#[test]
fn test_squares_accepts_a_single_number() {
    calculator()
        .args(["squares", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RESULT: 144"));
}

#[test]
fn test_report_lines_appear_in_order() {
    let report = r"(?s)\[calc\] Starting calculation\.\.\..*\[calc\] Operation: add.*\[calc\] Calculating: 2 \+ 3.*RESULT: 5.*\[calc\] Execution time: \d+\.\d{3}ms.*\[calc\] Calculation completed successfully!";
    calculator()
        .args(["add", "2", "3"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(report).unwrap());
}

#[test]
fn test_squares_trace_lists_the_numbers() {
    calculator()
        .args(["squares", "3", "4", "5"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[calc] Numbers: 3 4 5")
                .and(predicate::str::contains("[calc] Calculating sum of squares...")),
        );
}

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    calculator()
        .assert()
        .failure()
        .code(1)
        .stdout(
            predicate::str::contains("Usage: calculator")
                .and(predicate::str::contains("RESULT:").not()),
        );
}

#[test]
fn test_operation_without_operands_prints_usage() {
    calculator()
        .args(["squares"])
        .assert()
        .failure()
        .code(1)
        .stdout(
            predicate::str::contains("Usage: calculator")
                .and(predicate::str::contains("RESULT:").not()),
        );
}

#[test]
fn test_unknown_operation_prints_message_and_usage() {
    calculator()
        .args(["modulo", "5", "3"])
        .assert()
        .failure()
        .code(1)
        .stdout(
            predicate::str::contains("Error: Unknown operation 'modulo'")
                .and(predicate::str::contains("Usage: calculator")),
        );
}

#[test]
fn test_add_rejects_wrong_argument_count() {
    calculator()
        .args(["add", "2", "3", "4"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "Error: Add operation requires exactly 2 numbers",
        ));
}

#[test]
fn test_fibonacci_rejects_a_second_operand() {
    calculator()
        .args(["fibonacci", "1", "2"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "Error: Fibonacci operation requires exactly 1 number",
        ));
}

#[test]
fn test_fibonacci_rejects_negative_position() {
    calculator()
        .args(["fibonacci", "-1"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "Error: Fibonacci position must be non-negative (got -1)",
        ));
}

#[test]
fn test_non_numeric_operand_is_rejected() {
    calculator()
        .args(["add", "2", "three"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Error: Invalid number format: 'three'"));
}

#[test]
fn test_operand_outside_32_bit_range_is_rejected() {
    calculator()
        .args(["add", "99999999999", "1"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "Error: Number out of range: '99999999999'",
        ));
}

#[test]
fn test_failures_never_print_a_result_line() {
    let cases: &[&[&str]] = &[
        &["add", "2"],
        &["fibonacci", "-1"],
        &["add", "2", "three"],
        &["bogus", "1"],
    ];

    for case in cases {
        calculator()
            .args(*case)
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("RESULT:").not());
    }
}

#[test]
fn test_help_flag_exits_zero() {
    calculator().arg("--help").assert().success();
}

#[test]
fn test_version_flag_exits_zero() {
    calculator()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("calculator"));
}
