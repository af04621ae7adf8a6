//! Command-line argument parsing
//!
//! Operands stay raw `String`s at this layer; arity, integer parsing, and
//! domain checks all happen in [`crate::core::request`] so every failure
//! speaks the calculator's own error language. Unrecognized operation names
//! are captured through an external subcommand instead of being rejected
//! by clap.

use crate::error::{CalcError, Result};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

/// Calculator - integer arithmetic for scripts and services
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "calculator")]
#[command(disable_help_subcommand = true)]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Available operations
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Addition: a + b
    Add {
        /// Two integers
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        numbers: Vec<String>,
    },

    /// Multiplication: a * b
    Multiply {
        /// Two integers
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        numbers: Vec<String>,
    },

    /// Fibonacci number at position n
    Fibonacci {
        /// One non-negative integer
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        numbers: Vec<String>,
    },

    /// Sum of squares of all numbers
    Squares {
        /// One or more integers
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        numbers: Vec<String>,
    },

    /// Any other operation name, reported as unknown after parsing
    #[command(external_subcommand)]
    Other(Vec<String>),
}

/// Parse command line arguments.
///
/// `--help` and `--version` print their text and exit 0 right here; every
/// other clap-level failure folds into [`CalcError::Usage`] so the caller
/// prints the calculator's usage text and exits 1.
pub fn try_parse_args() -> Result<Args> {
    match Args::try_parse() {
        Ok(args) => Ok(args),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => Err(CalcError::Usage),
        },
    }
}
