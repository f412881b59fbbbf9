//! Mount/unmount lifecycle for content that animates in and out.
//!
//! [`TransitionState`] is the pure state machine, advanced with explicit
//! timestamps. [`ShowTransition`] drives it from a [`Scheduler`] and publishes
//! `should_render` / `has_open_class` as signals.

use std::sync::Arc;
use std::time::Duration;

use leptos::logging::error;
use leptos::prelude::*;
use parking_lot::Mutex;

use super::timer::{Scheduler, TimerHandle};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransitionTimings {
    pub open_delay: Option<Duration>,
    pub open_duration: Option<Duration>,
    pub close_delay: Option<Duration>,
    pub close_duration: Option<Duration>,
}

impl TransitionTimings {
    pub fn with_open_delay(mut self, delay: Duration) -> Self {
        self.open_delay = Some(delay);
        self
    }

    pub fn with_open_duration(mut self, duration: Duration) -> Self {
        self.open_duration = Some(duration);
        self
    }

    pub fn with_close_delay(mut self, delay: Duration) -> Self {
        self.close_delay = Some(delay);
        self
    }

    pub fn with_close_duration(mut self, duration: Duration) -> Self {
        self.close_duration = Some(duration);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionSnapshot {
    pub should_render: bool,
    pub has_open_class: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    Hidden,
    /// Mounted; the open class is applied once `class_at` passes.
    Appearing {
        class_at: Duration,
        until: Duration,
        has_class: bool,
    },
    Visible,
    /// Mounted without the open class until `until`.
    Disappearing { until: Duration },
}

impl TransitionState {
    pub fn initial(active: bool) -> Self {
        if active {
            Self::Visible
        } else {
            Self::Hidden
        }
    }

    /// Returns `false` when already opening or open.
    pub fn open(&mut self, now: Duration, timings: &TransitionTimings) -> bool {
        match self {
            Self::Appearing { .. } | Self::Visible => false,
            Self::Hidden | Self::Disappearing { .. } => {
                let class_at = now + timings.open_delay.unwrap_or_default();
                *self = Self::Appearing {
                    class_at,
                    until: class_at + timings.open_duration.unwrap_or_default(),
                    has_class: false,
                };
                self.advance(now);
                true
            }
        }
    }

    /// Returns `false` when already closing or hidden.
    pub fn close(&mut self, now: Duration, timings: &TransitionTimings) -> bool {
        match self {
            Self::Hidden | Self::Disappearing { .. } => false,
            Self::Appearing { .. } | Self::Visible => {
                let linger = timings.close_delay.unwrap_or_default()
                    + timings.close_duration.unwrap_or_default();
                *self = Self::Disappearing { until: now + linger };
                self.advance(now);
                true
            }
        }
    }

    pub fn advance(&mut self, now: Duration) {
        match *self {
            Self::Appearing {
                class_at,
                until,
                has_class,
            } => {
                let has_class = has_class || now >= class_at;
                *self = if has_class && now >= until {
                    Self::Visible
                } else {
                    Self::Appearing {
                        class_at,
                        until,
                        has_class,
                    }
                };
            }
            Self::Disappearing { until } if now >= until => *self = Self::Hidden,
            _ => {}
        }
    }

    /// Skips any remaining phase and lands in the resting state.
    pub fn finish(&mut self) {
        match self {
            Self::Appearing { .. } => *self = Self::Visible,
            Self::Disappearing { .. } => *self = Self::Hidden,
            Self::Hidden | Self::Visible => {}
        }
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        match *self {
            Self::Appearing {
                has_class: false,
                class_at,
                ..
            } => Some(class_at),
            Self::Appearing { until, .. } | Self::Disappearing { until } => Some(until),
            Self::Hidden | Self::Visible => None,
        }
    }

    pub fn snapshot(&self) -> TransitionSnapshot {
        TransitionSnapshot {
            should_render: !matches!(self, Self::Hidden),
            has_open_class: matches!(
                self,
                Self::Visible | Self::Appearing { has_class: true, .. }
            ),
        }
    }
}

struct Slot<H> {
    state: TransitionState,
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

/// Tracks an "active" flag through [`TransitionState`], owned by the current
/// reactive owner. Pending timers are cancelled when the owner is cleaned up.
pub struct ShowTransition<S: Scheduler> {
    scheduler: S,
    timings: TransitionTimings,
    should_render: RwSignal<bool>,
    has_open_class: RwSignal<bool>,
    slot: Arc<Mutex<Slot<S::Handle>>>,
}

impl<S: Scheduler> Clone for ShowTransition<S> {
    fn clone(&self) -> Self {
        Self {
            scheduler: self.scheduler.clone(),
            timings: self.timings,
            should_render: self.should_render,
            has_open_class: self.has_open_class,
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<S: Scheduler> ShowTransition<S> {
    pub fn new(scheduler: S, active: bool, timings: TransitionTimings) -> Self {
        let state = TransitionState::initial(active);
        let snapshot = state.snapshot();
        let slot = Arc::new(Mutex::new(Slot {
            state,
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
            timings,
            should_render: RwSignal::new(snapshot.should_render),
            has_open_class: RwSignal::new(snapshot.has_open_class),
            slot,
        }
    }

    pub fn should_render(&self) -> Signal<bool> {
        self.should_render.read_only().into()
    }

    pub fn has_open_class(&self) -> Signal<bool> {
        self.has_open_class.read_only().into()
    }

    pub fn state(&self) -> TransitionState {
        self.slot.lock().state
    }

    pub fn set_active(&self, active: bool) {
        let now = self.scheduler.now();
        let snapshot = {
            let mut slot = self.slot.lock();
            if slot.disposed {
                return;
            }
            let changed = if active {
                slot.state.open(now, &self.timings)
            } else {
                slot.state.close(now, &self.timings)
            };
            if !changed {
                return;
            }
            self.rearm(&mut slot, now);
            slot.state.snapshot()
        };
        self.publish(snapshot);
    }

    fn on_deadline(&self, deadline: Duration) {
        // The timer firing means its deadline has passed.
        let now = self.scheduler.now().max(deadline);
        let snapshot = {
            let mut slot = self.slot.lock();
            if slot.disposed {
                return;
            }
            slot.pending = None;
            slot.state.advance(now);
            self.rearm(&mut slot, now);
            slot.state.snapshot()
        };
        self.publish(snapshot);
    }

    fn rearm(&self, slot: &mut Slot<S::Handle>, now: Duration) {
        slot.cancel_pending();
        let Some(deadline) = slot.state.next_deadline() else {
            return;
        };
        let this = self.clone();
        let scheduled = self
            .scheduler
            .schedule(deadline.saturating_sub(now), move || this.on_deadline(deadline));
        match scheduled {
            Ok(handle) => slot.pending = Some(handle),
            Err(err) => {
                error!("show transition: {err}, finishing immediately");
                slot.state.finish();
            }
        }
    }

    fn publish(&self, snapshot: TransitionSnapshot) {
        if self.should_render.try_get_untracked() != Some(snapshot.should_render) {
            self.should_render.try_set(snapshot.should_render);
        }
        if self.has_open_class.try_get_untracked() != Some(snapshot.has_open_class) {
            self.has_open_class.try_set(snapshot.has_open_class);
        }
    }
}

#[cfg(test)]
mod tests {
    use leptos::reactive::owner::Owner;

    use super::*;
    use crate::utils::timer::manual::ManualScheduler;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn observed<S: Scheduler>(transition: &ShowTransition<S>) -> (bool, bool) {
        (
            transition.should_render().get_untracked(),
            transition.has_open_class().get_untracked(),
        )
    }

    #[test]
    fn zero_timings_collapse_to_resting_states() {
        let timings = TransitionTimings::default();
        let mut state = TransitionState::initial(false);

        assert!(state.open(ms(0), &timings));
        assert_eq!(state, TransitionState::Visible);
        assert!(!state.open(ms(5), &timings));

        assert!(state.close(ms(10), &timings));
        assert_eq!(state, TransitionState::Hidden);
        assert!(!state.close(ms(20), &timings));
    }

    #[test]
    fn open_delay_holds_class_until_it_elapses() {
        let timings = TransitionTimings::default()
            .with_open_delay(ms(50))
            .with_open_duration(ms(100));
        let mut state = TransitionState::Hidden;
        state.open(ms(0), &timings);

        let snapshot = state.snapshot();
        assert!(snapshot.should_render);
        assert!(!snapshot.has_open_class);
        assert_eq!(state.next_deadline(), Some(ms(50)));

        state.advance(ms(50));
        assert!(state.snapshot().has_open_class);
        assert_eq!(state.next_deadline(), Some(ms(150)));

        state.advance(ms(150));
        assert_eq!(state, TransitionState::Visible);
        assert_eq!(state.next_deadline(), None);
    }

    #[test]
    fn close_lingers_for_delay_plus_duration() {
        let timings = TransitionTimings::default()
            .with_close_delay(ms(30))
            .with_close_duration(ms(200));
        let mut state = TransitionState::Visible;
        state.close(ms(100), &timings);
        assert_eq!(state, TransitionState::Disappearing { until: ms(330) });

        state.advance(ms(329));
        assert!(state.snapshot().should_render);
        state.advance(ms(330));
        assert_eq!(state, TransitionState::Hidden);
    }

    #[test]
    fn reopening_while_disappearing_stays_mounted() {
        let timings = TransitionTimings::default().with_close_duration(ms(200));
        let mut state = TransitionState::Visible;
        state.close(ms(0), &timings);
        assert!(state.open(ms(100), &timings));
        assert_eq!(state, TransitionState::Visible);
    }

    #[test]
    fn controller_fades_out_over_close_duration() {
        let owner = Owner::new();
        owner.with(|| {
            let scheduler = ManualScheduler::new();
            let timings = TransitionTimings::default().with_close_duration(ms(200));
            let transition = ShowTransition::new(scheduler.clone(), false, timings);
            assert_eq!(observed(&transition), (false, false));

            transition.set_active(true);
            assert_eq!(observed(&transition), (true, true));
            assert_eq!(scheduler.pending(), 0);

            scheduler.advance_ms(1_000);
            transition.set_active(false);
            assert_eq!(observed(&transition), (true, false));

            scheduler.advance_ms(199);
            assert_eq!(observed(&transition), (true, false));
            scheduler.advance_ms(1);
            assert_eq!(observed(&transition), (false, false));
            assert_eq!(transition.state(), TransitionState::Hidden);
        });
    }

    #[test]
    fn reactivating_cancels_pending_unmount() {
        let owner = Owner::new();
        owner.with(|| {
            let scheduler = ManualScheduler::new();
            let timings = TransitionTimings::default().with_close_duration(ms(200));
            let transition = ShowTransition::new(scheduler.clone(), true, timings);

            transition.set_active(false);
            scheduler.advance_ms(100);
            transition.set_active(true);
            assert_eq!(scheduler.pending(), 0);

            scheduler.advance_ms(500);
            assert_eq!(observed(&transition), (true, true));
        });
    }

    #[test]
    fn cleanup_mid_transition_cancels_timer() {
        let owner = Owner::new();
        let scheduler = ManualScheduler::new();
        let transition = owner.with(|| {
            let timings = TransitionTimings::default().with_close_duration(ms(200));
            ShowTransition::new(scheduler.clone(), true, timings)
        });

        transition.set_active(false);
        assert_eq!(scheduler.pending(), 1);

        owner.cleanup();
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance_ms(500);
        transition.set_active(true);
        assert_eq!(
            transition.state(),
            TransitionState::Disappearing { until: ms(200) }
        );
    }

    #[test]
    fn schedule_failure_finishes_transition() {
        let owner = Owner::new();
        owner.with(|| {
            let scheduler = ManualScheduler::new();
            let timings = TransitionTimings::default().with_close_duration(ms(200));
            let transition = ShowTransition::new(scheduler.clone(), true, timings);

            scheduler.set_failing(true);
            transition.set_active(false);
            assert_eq!(observed(&transition), (false, false));
        });
    }
}
