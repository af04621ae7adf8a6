//! Error types for the calculator
//!
//! Every way an invocation can fail before or during validation has its own
//! variant, so the reporting layer can match on the kind instead of the text.

use crate::core::request::{Arity, Operation};
use std::num::ParseIntError;
use thiserror::Error;

/// Main error type for the calculator
#[derive(Error, Debug)]
pub enum CalcError {
    /// Too few command-line words to name an operation and an operand
    #[error("not enough arguments")]
    Usage,

    /// Operation name not among the supported set
    #[error("Unknown operation '{name}'")]
    UnknownOperation { name: String },

    /// Operand count does not satisfy the operation's arity
    #[error("{operation} operation requires {expected}")]
    ArgumentCount {
        operation: &'static str,
        expected: Arity,
    },

    /// Operand text is not an integer at all
    #[error("Invalid number format: '{text}'")]
    InvalidNumber {
        text: String,
        #[source]
        source: ParseIntError,
    },

    /// Operand is an integer but does not fit 32 bits
    #[error("Number out of range: '{text}'")]
    OutOfRange {
        text: String,
        #[source]
        source: ParseIntError,
    },

    /// Fibonacci position below zero
    #[error("Fibonacci position must be non-negative (got {position})")]
    NegativePosition { position: i32 },
}

impl CalcError {
    /// Create a new unknown-operation error
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation { name: name.into() }
    }

    /// Create a new argument-count error for the given operation
    pub fn argument_count(operation: Operation) -> Self {
        Self::ArgumentCount {
            operation: operation.title(),
            expected: operation.arity(),
        }
    }

    /// Create a new invalid-number error
    pub fn invalid_number(text: impl Into<String>, source: ParseIntError) -> Self {
        Self::InvalidNumber {
            text: text.into(),
            source,
        }
    }

    /// Create a new out-of-range error
    pub fn out_of_range(text: impl Into<String>, source: ParseIntError) -> Self {
        Self::OutOfRange {
            text: text.into(),
            source,
        }
    }

    /// Create a new negative-position error
    pub fn negative_position(position: i32) -> Self {
        Self::NegativePosition { position }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CalcError>;
