//! Cache Module
//!
//! Provides an in-memory map whose entries expire through per-key timers.

mod stats;
mod store;
mod timer;


// Re-export public types
pub use stats::CacheStats;
pub use store::TimedMap;

pub(crate) use timer::ExpiryTimer;
