//! Command execution for the CLI

use crate::{
    cli::args::Command,
    cli::output,
    core::{arithmetic, request::CalcRequest},
    error::Result,
};
use std::time::Instant;
use tracing::{debug, instrument};

/// Execute a parsed command and print the full calculation report.
///
/// `started` is the instant captured on entry to the process, so the timing
/// line covers argument handling as well as the arithmetic itself.
#[instrument(skip(started))]
pub fn execute_command(command: &Command, started: Instant) -> Result<()> {
    let (name, raw_operands) = command_parts(command);
    let request = CalcRequest::resolve(name, raw_operands)?;
    debug!(?request, "request validated");

    output::trace_request(&request);
    let result = evaluate(&request);
    debug!(result, "calculation finished");

    output::report_result(result);
    output::report_timing(started.elapsed());
    output::report_success();
    Ok(())
}

/// Dispatch a validated request to the arithmetic engine.
///
/// `add` works in native 32-bit width and is widened afterwards, so every
/// operation reports through the same 64-bit result line.
fn evaluate(request: &CalcRequest) -> i64 {
    match request {
        CalcRequest::Add { a, b } => i64::from(arithmetic::add(*a, *b)),
        CalcRequest::Multiply { a, b } => arithmetic::multiply(*a, *b),
        CalcRequest::Fibonacci { n } => arithmetic::fibonacci(*n),
        CalcRequest::Squares { values } => arithmetic::sum_of_squares(values),
    }
}

/// Split a parsed command into the operation word and its raw operands
fn command_parts(command: &Command) -> (&str, &[String]) {
    match command {
        Command::Add { numbers } => ("add", numbers.as_slice()),
        Command::Multiply { numbers } => ("multiply", numbers.as_slice()),
        Command::Fibonacci { numbers } => ("fibonacci", numbers.as_slice()),
        Command::Squares { numbers } => ("squares", numbers.as_slice()),
        // clap hands externals over with the operation name in front
        Command::Other(words) => match words.split_first() {
            Some((name, rest)) => (name.as_str(), rest),
            None => ("", &[]),
        },
    }
}
