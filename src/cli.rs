//! Command-line interface definitions.
//!
//! This module defines the argument structure of the converter using clap.

use clap::Parser;

/// Convert a number between bases.
///
/// Digits come from the default alphabet (0-9, A-Z, a-z, then -/=[];',.)
/// unless `BASE_ALPHABET` is set.
#[derive(Parser, Debug)]
#[command(name = "timebase")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The digits to convert, most significant first.
    ///
    /// May start with `-`, which is a digit in the default alphabet.
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// The base `value` is written in.
    pub source_base: u32,

    /// The base to write the result in.
    pub out_base: u32,
}
