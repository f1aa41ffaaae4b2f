//! Numbers Module
//!
//! Exact base conversion over configurable digit alphabets.

mod alphabet;
mod convert;


// Re-export public types
pub use alphabet::{Alphabet, DEFAULT_ALPHABET, MAX_BASE};
pub use convert::{big_int_power, convert_base, convert_base_with};
