//! Configuration Module
//!
//! Handles loading timebase configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::error::Result;
use crate::numbers::Alphabet;

/// Library and binary configuration.
///
/// All values can be configured via environment variables; unset values
/// fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Default TTL in milliseconds for timed maps, None = no expiry
    pub default_ttl_ms: Option<u64>,
    /// Custom alphabet for base conversion, None = default alphabet
    pub alphabet: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL_MS` - Default TTL in milliseconds (default: none, `0` also means none)
    /// - `BASE_ALPHABET` - Symbols used for base conversion (default: built-in alphabet)
    pub fn from_env() -> Self {
        Self {
            default_ttl_ms: env::var("DEFAULT_TTL_MS")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .filter(|ttl: &u64| *ttl > 0),
            alphabet: env::var("BASE_ALPHABET").ok().filter(|v| !v.is_empty()),
        }
    }

    /// Returns the default TTL as a Duration.
    pub fn default_ttl(&self) -> Option<Duration> {
        self.default_ttl_ms.map(Duration::from_millis)
    }

    /// Builds the configured alphabet.
    ///
    /// Fails with `InvalidAlphabet` if `BASE_ALPHABET` is too short or
    /// repeats a symbol.
    pub fn alphabet(&self) -> Result<Alphabet> {
        match &self.alphabet {
            Some(symbols) => Alphabet::new(symbols),
            None => Ok(Alphabet::standard().clone()),
        }
    }
}
