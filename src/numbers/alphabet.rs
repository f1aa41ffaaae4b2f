//! Alphabet Module
//!
//! Ordered digit symbols for positional notation. A symbol's position is
//! its digit value.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{Error, Result};

/// Symbols used when no alphabet is supplied.
pub const DEFAULT_ALPHABET: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-/=[];',.";

/// Largest base supported by the default alphabet.
pub const MAX_BASE: u32 = 71;

// == Alphabet ==
/// A validated sequence of unique symbols with a reverse index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, u32>,
}

impl Alphabet {
    // == Constructor ==
    /// Builds an alphabet from the characters of `symbols`.
    ///
    /// Requires at least two symbols and no repeats.
    pub fn new(symbols: &str) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.len() < 2 {
            return Err(Error::InvalidAlphabet(format!(
                "need at least 2 symbols, got {}",
                symbols.len()
            )));
        }
        if u32::try_from(symbols.len()).is_err() {
            return Err(Error::InvalidAlphabet("too many symbols".to_string()));
        }

        let mut index = HashMap::with_capacity(symbols.len());
        for (position, &symbol) in symbols.iter().enumerate() {
            if index.insert(symbol, position as u32).is_some() {
                return Err(Error::InvalidAlphabet(format!(
                    "symbol {:?} appears more than once",
                    symbol
                )));
            }
        }

        Ok(Self { symbols, index })
    }

    /// Returns the shared default alphabet.
    pub fn standard() -> &'static Alphabet {
        static STANDARD: OnceLock<Alphabet> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let symbols: Vec<char> = DEFAULT_ALPHABET.chars().collect();
            let index = symbols
                .iter()
                .enumerate()
                .map(|(position, &symbol)| (symbol, position as u32))
                .collect();
            Alphabet { symbols, index }
        })
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: construction rejects alphabets shorter than two symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Largest base this alphabet can express.
    pub fn max_base(&self) -> u32 {
        self.symbols.len() as u32
    }

    /// Digit value of `symbol`, or None if it is not part of the alphabet.
    pub fn digit_value(&self, symbol: char) -> Option<u32> {
        self.index.get(&symbol).copied()
    }

    /// Symbol for digit value `digit`.
    pub fn symbol(&self, digit: u32) -> Option<char> {
        self.symbols.get(digit as usize).copied()
    }

    /// Symbol for a digit already known to be below `len()`.
    ///
    /// Conversion checks the output base against the alphabet length before
    /// producing digits, so this indexing never goes out of bounds.
    pub(crate) fn digit_symbol(&self, digit: u32) -> char {
        self.symbols[digit as usize]
    }

    /// Symbol representing zero.
    pub fn zero(&self) -> char {
        self.symbols[0]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard().clone()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|symbol| write!(f, "{}", symbol))
    }
}
