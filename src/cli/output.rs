//! Stdout reporting for the calculator
//!
//! All contract output goes through here: the diagnostic trace, the
//! machine-readable result line, the timing line, the closing marker, the
//! usage text, and error reports. Diagnostic lines wear the `[calc]` prefix;
//! calling processes extract the answer by matching `RESULT:` at line start.

use crate::core::request::CalcRequest;
use crate::error::CalcError;
use std::time::Duration;

/// Fixed token prefixing the machine-readable answer line
pub const RESULT_PREFIX: &str = "RESULT:";

/// Prefix carried by every human-oriented diagnostic line
pub const DIAG_PREFIX: &str = "[calc]";

/// Print the usage text
pub fn print_usage() {
    println!("Usage: calculator <operation> <number1> [number2] [number3...]");
    println!("Operations:");
    println!("  add <a> <b>          - Addition: a + b");
    println!("  multiply <a> <b>     - Multiplication: a * b");
    println!("  fibonacci <n>        - Fibonacci number at position n");
    println!("  squares <n1> <n2>... - Sum of squares of all numbers");
}

/// Print the diagnostic trace for a validated request
pub fn trace_request(request: &CalcRequest) {
    println!("{DIAG_PREFIX} Starting calculation...");
    println!("{DIAG_PREFIX} Operation: {}", request.operation().name());

    match request {
        CalcRequest::Add { a, b } => println!("{DIAG_PREFIX} Calculating: {a} + {b}"),
        CalcRequest::Multiply { a, b } => println!("{DIAG_PREFIX} Calculating: {a} * {b}"),
        CalcRequest::Fibonacci { n } => println!("{DIAG_PREFIX} Calculating: fibonacci({n})"),
        CalcRequest::Squares { values } => {
            println!("{DIAG_PREFIX} Numbers: {}", join_values(values));
            println!("{DIAG_PREFIX} Calculating sum of squares...");
        }
    }
}

/// Print the answer on its own line behind the fixed prefix
pub fn report_result(result: i64) {
    println!("{RESULT_PREFIX} {result}");
}

/// Print the elapsed wall-clock time in milliseconds with three decimals
pub fn report_timing(elapsed: Duration) {
    println!("{DIAG_PREFIX} Execution time: {}ms", format_millis(elapsed));
}

/// Print the marker closing a successful report
pub fn report_success() {
    println!("{DIAG_PREFIX} Calculation completed successfully!");
}

/// Print a failure report to stdout.
///
/// Usage failures print the usage text alone; unknown operations print
/// their message followed by the usage text; every other kind prints a
/// single `Error:` line.
pub fn report_error(error: &CalcError) {
    match error {
        CalcError::Usage => print_usage(),
        CalcError::UnknownOperation { .. } => {
            println!("Error: {error}");
            print_usage();
        }
        _ => println!("Error: {error}"),
    }
}

fn join_values(values: &[i32]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_millis(elapsed: Duration) -> String {
    format!("{:.3}", elapsed.as_secs_f64() * 1000.0)
}
