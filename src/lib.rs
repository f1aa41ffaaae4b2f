//! timebase - per-key expiring maps and exact base conversion
//!
//! Provides a key-value map whose entries expire through scheduled timers,
//! and conversion of digit strings between arbitrary bases.

pub mod cache;
pub mod config;
pub mod error;
pub mod numbers;

pub use cache::{CacheStats, TimedMap};
pub use config::Config;
pub use error::{BaseBound, Error, Result};
pub use numbers::{big_int_power, convert_base, convert_base_with, Alphabet};
