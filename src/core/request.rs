//! Typed calculation requests resolved from raw command-line words
//!
//! Resolution runs every check before any output is produced, so a failed
//! invocation leaves nothing on stdout but the error report.

use crate::error::{CalcError, Result};
use std::fmt;
use std::num::IntErrorKind;
use tracing::debug;

/// The computation selected by the first command-line word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `add <a> <b>`
    Add,
    /// `multiply <a> <b>`
    Multiply,
    /// `fibonacci <n>`
    Fibonacci,
    /// `squares <n1> <n2> ...`
    Squares,
}

impl Operation {
    /// Resolve an operation from its command-line name
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "add" => Ok(Self::Add),
            "multiply" => Ok(Self::Multiply),
            "fibonacci" => Ok(Self::Fibonacci),
            "squares" => Ok(Self::Squares),
            _ => Err(CalcError::unknown_operation(name)),
        }
    }

    /// Name as written on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Multiply => "multiply",
            Self::Fibonacci => "fibonacci",
            Self::Squares => "squares",
        }
    }

    /// Capitalized name used in argument-count error messages
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Multiply => "Multiply",
            Self::Fibonacci => "Fibonacci",
            Self::Squares => "Squares",
        }
    }

    /// Operand count accepted by this operation
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Add | Self::Multiply => Arity::Exact(2),
            Self::Fibonacci => Arity::Exact(1),
            Self::Squares => Arity::AtLeast(1),
        }
    }
}

/// Operand-count contract of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many operands
    Exact(usize),
    /// This many operands or more
    AtLeast(usize),
}

impl Arity {
    /// Whether `count` operands satisfy the contract
    #[must_use]
    pub const fn admits(self, count: usize) -> bool {
        match self {
            Self::Exact(required) => count == required,
            Self::AtLeast(required) => count >= required,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(required) => write!(f, "exactly {required} {}", noun(*required)),
            Self::AtLeast(required) => write!(f, "at least {required} {}", noun(*required)),
        }
    }
}

const fn noun(count: usize) -> &'static str {
    if count == 1 { "number" } else { "numbers" }
}

/// A fully validated calculation, ready for the arithmetic engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcRequest {
    Add { a: i32, b: i32 },
    Multiply { a: i32, b: i32 },
    Fibonacci { n: u32 },
    Squares { values: Vec<i32> },
}

impl CalcRequest {
    /// Validate an operation name and its raw operand words into a typed
    /// request.
    ///
    /// Checks run in a fixed order: an empty operand list fails as a usage
    /// error before the name is even inspected, then unknown names, then the
    /// operation's arity, then integer parsing, then the Fibonacci domain
    /// restriction. The first failure wins.
    pub fn resolve(name: &str, raw_operands: &[String]) -> Result<Self> {
        if raw_operands.is_empty() {
            return Err(CalcError::Usage);
        }

        let operation = Operation::from_name(name)?;
        if !operation.arity().admits(raw_operands.len()) {
            return Err(CalcError::argument_count(operation));
        }

        let operands = parse_operands(raw_operands)?;
        debug!(operation = operation.name(), ?operands, "operands validated");

        match operation {
            Operation::Add => Ok(Self::Add {
                a: operands[0],
                b: operands[1],
            }),
            Operation::Multiply => Ok(Self::Multiply {
                a: operands[0],
                b: operands[1],
            }),
            Operation::Fibonacci => {
                let position = operands[0];
                if position < 0 {
                    return Err(CalcError::negative_position(position));
                }
                Ok(Self::Fibonacci { n: position as u32 })
            }
            Operation::Squares => Ok(Self::Squares { values: operands }),
        }
    }

    /// Operation this request resolves
    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::Add { .. } => Operation::Add,
            Self::Multiply { .. } => Operation::Multiply,
            Self::Fibonacci { .. } => Operation::Fibonacci,
            Self::Squares { .. } => Operation::Squares,
        }
    }
}

/// Parse every raw word as a 32-bit signed integer
fn parse_operands(raw_operands: &[String]) -> Result<Vec<i32>> {
    raw_operands.iter().map(|word| parse_operand(word)).collect()
}

/// Parse one operand, separating non-numeric text from 32-bit overflow
fn parse_operand(text: &str) -> Result<i32> {
    text.parse::<i32>().map_err(|source| match source.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            CalcError::out_of_range(text, source)
        }
        _ => CalcError::invalid_number(text, source),
    })
}
