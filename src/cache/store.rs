//! Timed Map Module
//!
//! Key-value map where each entry may carry its own time-to-live. Expiry is
//! enforced by a scheduled task per key, not by sweeping on read.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::time::Instant;
use tracing::{debug, trace};

use crate::cache::{CacheStats, ExpiryTimer};
use crate::config::Config;

// == Shared State ==
/// Values and their pending timers, always mutated together under one lock.
struct State<K, V> {
    values: HashMap<K, V>,
    timers: HashMap<K, ExpiryTimer>,
    next_timer_id: u64,
    stats: CacheStats,
}

impl<K, V> State<K, V> {
    fn new() -> Self {
        Self {
            values: HashMap::new(),
            timers: HashMap::new(),
            next_timer_id: 0,
            stats: CacheStats::new(),
        }
    }

    fn next_timer_id(&mut self) -> u64 {
        let id = self.next_timer_id;
        self.next_timer_id += 1;
        id
    }

    /// Aborts every pending timer and returns how many there were.
    fn cancel_all_timers(&mut self) -> usize {
        let count = self.timers.len();
        for (_, timer) in self.timers.drain() {
            timer.cancel();
        }
        self.stats.record_cancellations(count);
        count
    }
}

impl<K: Eq + Hash, V> State<K, V> {
    /// Aborts the pending timer for `key`, if any.
    fn cancel_timer<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.timers.remove(key) {
            Some(timer) => {
                trace!(timer_id = timer.id(), "Cancelled pending expiry");
                timer.cancel();
                self.stats.record_cancellations(1);
                true
            }
            None => false,
        }
    }

    /// Removes `key` if timer `id` is still the one registered for it.
    ///
    /// A timer that was aborted after it woke may still reach this point; the
    /// id check keeps it from removing a value set after the cancellation.
    fn expire(&mut self, key: &K, id: u64) {
        if self.timers.get(key).map(ExpiryTimer::id) != Some(id) {
            trace!(timer_id = id, "Ignored superseded expiry");
            return;
        }

        self.timers.remove(key);
        self.values.remove(key);
        self.stats.record_expiration();
        debug!(timer_id = id, remaining = self.values.len(), "Entry expired");
    }
}

// == Timed Map ==
/// Map with per-key time-to-live.
///
/// Expiry timers run on a Tokio runtime. A TTL is a lower bound on how long
/// an entry is retained, not an exact deadline: clock drift or scheduler
/// load may delay removal.
///
/// All operations are synchronous and safe to call from several threads.
pub struct TimedMap<K, V> {
    /// Shared with the expiry tasks through weak references
    state: Arc<Mutex<State<K, V>>>,
    /// TTL applied when `set` is given none
    default_ttl: Option<Duration>,
    /// Runtime that drives expiry timers
    runtime: Handle,
}

impl<K, V> TimedMap<K, V> {
    // == Constructors ==
    /// Creates a map whose timers run on the current Tokio runtime.
    ///
    /// # Panics
    /// Panics if called outside the context of a Tokio runtime.
    pub fn new(default_ttl: Option<Duration>) -> Self {
        Self::with_runtime(Handle::current(), default_ttl)
    }

    /// Creates a map whose timers run on `runtime`.
    ///
    /// The runtime must outlive the map. Once it has shut down, timers can no
    /// longer be spawned: entries set afterwards never expire, and
    /// `stats().pending_timers` still counts their dead timers.
    pub fn with_runtime(runtime: Handle, default_ttl: Option<Duration>) -> Self {
        Self {
            state: Arc::new(Mutex::new(State::new())),
            default_ttl,
            runtime,
        }
    }

    /// Creates a map using the configured default TTL.
    ///
    /// # Panics
    /// Panics if called outside the context of a Tokio runtime.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.default_ttl())
    }

    /// Returns the TTL applied when `set` is given none.
    pub fn default_ttl(&self) -> Option<Duration> {
        self.default_ttl
    }

    // == Length ==
    /// Returns the number of entries that have neither expired nor been deleted.
    pub fn len(&self) -> usize {
        self.state.lock().values.len()
    }

    // == Is Empty ==
    /// Returns true if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.state.lock().values.is_empty()
    }

    // == Clear ==
    /// Cancels every pending expiry and removes all entries.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        let cancelled = state.cancel_all_timers();
        state.values.clear();
        debug!(cancelled, "Cleared timed map");
    }

    // == Stats ==
    /// Returns a snapshot of the timer counters.
    pub fn stats(&self) -> CacheStats {
        let state = self.state.lock();
        let mut stats = state.stats;
        stats.set_gauges(state.values.len(), state.timers.len());
        stats
    }
}

impl<K, V> TimedMap<K, V>
where
    K: Eq + Hash + Clone + Send + 'static,
    V: Send + 'static,
{
    // == Set ==
    /// Inserts or overwrites `key`.
    ///
    /// The effective TTL is `ttl`, else the default TTL, else none. Any
    /// pending expiry for `key` is cancelled first, so an overwrite starts a
    /// fresh TTL window. Without an effective TTL the entry never expires.
    pub fn set(&self, key: K, value: V, ttl: Option<Duration>) {
        let ttl = ttl.or(self.default_ttl);
        let mut state = self.state.lock();

        state.cancel_timer(&key);

        // A deadline past the clock's range is treated as no expiry
        if let Some(deadline) = ttl.and_then(|ttl| Instant::now().checked_add(ttl)) {
            let id = state.next_timer_id();
            let on_expire = expiry_action(Arc::downgrade(&self.state), key.clone(), id);
            let timer = ExpiryTimer::schedule(&self.runtime, id, deadline, on_expire);
            state.timers.insert(key.clone(), timer);
        }

        state.values.insert(key, value);
    }

    // == Get ==
    /// Returns a clone of the value for `key`, or None if absent or expired.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.state.lock().values.get(key).cloned()
    }

    // == Has ==
    /// Returns true if `key` is present and not expired.
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.state.lock().values.contains_key(key)
    }

    // == Delete ==
    /// Cancels any pending expiry for `key` and removes it.
    ///
    /// Returns whether the key was present.
    pub fn delete<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut state = self.state.lock();
        state.cancel_timer(key);
        state.values.remove(key).is_some()
    }

    // == Expires In ==
    /// Returns the time left before `key` expires.
    ///
    /// None if the key is absent or has no TTL.
    pub fn expires_in<Q>(&self, key: &Q) -> Option<Duration>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.state.lock().timers.get(key).map(ExpiryTimer::remaining)
    }
}

/// Builds the action run by the expiry timer `id` of `key`.
///
/// Holds only a weak reference, so pending timers never keep a dropped map alive.
fn expiry_action<K, V>(
    state: Weak<Mutex<State<K, V>>>,
    key: K,
    id: u64,
) -> impl FnOnce() + Send + 'static
where
    K: Eq + Hash + Send + 'static,
    V: Send + 'static,
{
    move || {
        if let Some(state) = state.upgrade() {
            state.lock().expire(&key, id);
        }
    }
}

impl<K, V> Drop for TimedMap<K, V> {
    fn drop(&mut self) {
        self.state.lock().cancel_all_timers();
    }
}

impl<K, V> fmt::Debug for TimedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("TimedMap")
            .field("len", &state.values.len())
            .field("pending_timers", &state.timers.len())
            .field("default_ttl", &self.default_ttl)
            .finish()
    }
}
