//! Error types for timebase
//!
//! Provides unified error handling using thiserror.

use std::fmt;

use thiserror::Error;

// == Base Bound ==
/// Which base parameter of a conversion was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseBound {
    /// The base the input is written in
    Source,
    /// The base the result is written in
    Output,
}

impl fmt::Display for BaseBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseBound::Source => f.write_str("source base"),
            BaseBound::Output => f.write_str("output base"),
        }
    }
}

// == Error Enum ==
/// Unified error type for timebase.
///
/// Only base conversion can fail; the timed map reports absence through
/// `Option` instead of an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A base parameter lies outside `[2, alphabet length]`
    #[error("{bound} must be between 2 and {max}, got {base}")]
    OutOfRangeBase {
        bound: BaseBound,
        base: u32,
        max: usize,
    },

    /// Input character missing from the alphabet or too large for the base
    #[error("Invalid digit {digit:?} for base {base}")]
    InvalidDigit { digit: char, base: u32 },

    /// A custom alphabet could not be used
    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),
}

// == Result Type Alias ==
/// Convenience Result type for timebase.
pub type Result<T> = std::result::Result<T, Error>;
