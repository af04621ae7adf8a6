//! # Calculator CLI
//!
//! A command-line calculator for scripted integer arithmetic. The binary
//! takes an operation name and integer operands, prints a short diagnostic
//! trace, and reports the answer on a fixed-prefix `RESULT:` line so calling
//! processes can extract it without parsing anything else.
//!
//! ## Features
//!
//! - Four operations: addition, multiplication, Fibonacci, sum of squares
//! - Strict operand validation with a distinct message per failure kind
//! - Wall-clock timing of every invocation
//! - Machine-extractable result line
//!
//! ## Example
//!
//! ```
//! use calculator_cli::core::arithmetic;
//!
//! assert_eq!(arithmetic::add(15, 25), 40);
//! assert_eq!(arithmetic::fibonacci(10), 55);
//! assert_eq!(arithmetic::sum_of_squares(&[3, 4, 5]), 50);
//! ```

pub mod cli;
pub mod core;
pub mod error;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity.
///
/// Log lines go to stderr; stdout is reserved for the calculation report
/// that calling processes parse.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
