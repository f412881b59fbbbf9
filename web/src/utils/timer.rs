use std::time::Duration;

use leptos::prelude::{set_timeout_with_handle, window, TimeoutHandle};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("failed to schedule timer: {0}")]
    Schedule(String),
}

/// A pending one-shot timer. Cancelling a timer that already fired is a no-op.
pub trait TimerHandle: Send + 'static {
    fn cancel(self);
}

/// Source of monotonic time and one-shot timers for the widget controllers.
pub trait Scheduler: Clone + 'static {
    type Handle: TimerHandle;

    /// Monotonic time since an arbitrary origin.
    fn now(&self) -> Duration;

    fn schedule(
        &self,
        delay: Duration,
        callback: impl FnOnce() + 'static,
    ) -> Result<Self::Handle, TimerError>;
}

/// Timers backed by `window.setTimeout` and `performance.now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = TimeoutHandle;

    fn now(&self) -> Duration {
        let millis = window()
            .performance()
            .map(|performance| performance.now())
            .unwrap_or_default();
        Duration::from_secs_f64(millis.max(0.0) / 1000.0)
    }

    fn schedule(
        &self,
        delay: Duration,
        callback: impl FnOnce() + 'static,
    ) -> Result<TimeoutHandle, TimerError> {
        set_timeout_with_handle(callback, delay)
            .map_err(|err| TimerError::Schedule(format!("{err:?}")))
    }
}

impl TimerHandle for TimeoutHandle {
    fn cancel(self) {
        self.clear();
    }
}
