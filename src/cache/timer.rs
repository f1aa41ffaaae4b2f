//! Expiry Timer Module
//!
//! A one-shot task that runs an action once its deadline passes. Each timer
//! belongs to exactly one key and is never rescheduled.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tokio::time::{sleep_until, Instant};

// == Expiry Timer ==
/// Handle to a scheduled expiry.
///
/// Dropping the handle does not cancel the task; call [`ExpiryTimer::cancel`].
#[derive(Debug)]
pub struct ExpiryTimer {
    /// Unique id, compared on firing to detect a superseded timer
    id: u64,
    /// Instant at which the action becomes due
    deadline: Instant,
    /// Abort handle of the spawned task
    handle: AbortHandle,
}

impl ExpiryTimer {
    // == Schedule ==
    /// Spawns a task on `runtime` that runs `on_expire` at `deadline`.
    ///
    /// The deadline is a lower bound: scheduler load may delay the action.
    /// If `runtime` has shut down the task never runs.
    pub fn schedule<F>(runtime: &Handle, id: u64, deadline: Instant, on_expire: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = runtime
            .spawn(async move {
                sleep_until(deadline).await;
                on_expire();
            })
            .abort_handle();

        Self {
            id,
            deadline,
            handle,
        }
    }

    /// Returns the timer id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns time left before the deadline, zero once it has passed.
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    // == Cancel ==
    /// Aborts the task. The action will not run unless it has already started.
    pub fn cancel(self) {
        self.handle.abort();
    }
}
