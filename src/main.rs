#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use calculator_cli::{cli, error::CalcError, setup_logging};
use std::process;
use std::time::Instant;

fn main() -> Result<()> {
    // Reported execution time covers the whole invocation
    let started = Instant::now();

    // Parse command line arguments
    let args = match cli::try_parse_args() {
        Ok(args) => args,
        Err(err) => fail(&err),
    };

    // Setup logging based on debug flag
    setup_logging(args.debug)?;

    // Execute the requested operation
    match cli::execute_command(&args.command, started) {
        Ok(()) => Ok(()),
        Err(err) => fail(&err),
    }
}

/// Print the failure report on stdout and exit with status 1
fn fail(error: &CalcError) -> ! {
    cli::output::report_error(error);
    process::exit(1);
}
