//! Core functionality for the calculator
//!
//! Contains the arithmetic engine and the request model that validates raw
//! command-line input before anything is computed.

pub mod arithmetic;
pub mod request;

pub use request::{Arity, CalcRequest, Operation};
