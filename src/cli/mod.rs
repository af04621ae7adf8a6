//! Command-line interface module
//!
//! Provides argument parsing, command execution, and stdout reporting.

pub mod args;
pub mod commands;
pub mod output;

pub use args::{try_parse_args, Args, Command};
pub use commands::execute_command;
