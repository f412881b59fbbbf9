use std::sync::Arc;
use std::time::Duration;

use leptos::logging::error;
use leptos::prelude::*;
use parking_lot::Mutex;

use crate::utils::timer::{Scheduler, TimerHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseState {
    Idle,
    Pulsing { until: Duration },
}

impl PulseState {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pulsing { .. })
    }

    /// Starts or extends the pulse, returning the new deadline.
    pub fn trigger(&mut self, now: Duration, timeout: Duration) -> Duration {
        let until = now + timeout;
        *self = Self::Pulsing { until };
        until
    }

    /// Ends the pulse if its deadline has passed. Returns whether it ended.
    pub fn expire(&mut self, now: Duration) -> bool {
        match *self {
            Self::Pulsing { until } if now >= until => {
                *self = Self::Idle;
                true
            }
            _ => false,
        }
    }
}

struct Slot<H> {
    state: PulseState,
    pending: Option<H>,
    disposed: bool,
}

impl<H: TimerHandle> Slot<H> {
    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}

/// The short "just clicked" highlight. Every trigger re-arms a fresh timer,
/// so the flag stays up until `timeout` after the latest trigger.
pub struct Pulse<S: Scheduler> {
    scheduler: S,
    timeout: Duration,
    active: RwSignal<bool>,
    slot: Arc<Mutex<Slot<S::Handle>>>,
}

impl<S: Scheduler> Clone for Pulse<S> {
    fn clone(&self) -> Self {
        Self {
            scheduler: self.scheduler.clone(),
            timeout: self.timeout,
            active: self.active,
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<S: Scheduler> Pulse<S> {
    pub fn new(scheduler: S, timeout: Duration) -> Self {
        let slot = Arc::new(Mutex::new(Slot {
            state: PulseState::Idle,
            pending: None,
            disposed: false,
        }));

        on_cleanup({
            let slot = Arc::clone(&slot);
            move || {
                let mut slot = slot.lock();
                slot.disposed = true;
                slot.cancel_pending();
            }
        });

        Self {
            scheduler,
            timeout,
            active: RwSignal::new(false),
            slot,
        }
    }

    pub fn is_active(&self) -> Signal<bool> {
        self.active.read_only().into()
    }

    pub fn state(&self) -> PulseState {
        self.slot.lock().state
    }

    pub fn trigger(&self) {
        let now = self.scheduler.now();
        let active = {
            let mut slot = self.slot.lock();
            if slot.disposed {
                return;
            }
            // A superseded timer is left to fire; `expire` ignores its stale deadline.
            let deadline = slot.state.trigger(now, self.timeout);

            let this = self.clone();
            match self
                .scheduler
                .schedule(self.timeout, move || this.expire(deadline))
            {
                Ok(handle) => slot.pending = Some(handle),
                Err(err) => {
                    error!("button pulse: {err}, skipping highlight");
                    slot.state = PulseState::Idle;
                }
            }
            slot.state.is_active()
        };
        self.publish(active);
    }

    fn expire(&self, deadline: Duration) {
        // The timer firing means its deadline has passed.
        let now = self.scheduler.now().max(deadline);
        {
            let mut slot = self.slot.lock();
            if slot.disposed || !slot.state.expire(now) {
                return;
            }
            slot.pending = None;
        }
        self.publish(false);
    }

    fn publish(&self, active: bool) {
        if self.active.try_get_untracked() != Some(active) {
            self.active.try_set(active);
        }
    }
}
