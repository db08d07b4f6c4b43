use crate::panel::{PanelStage, TransitionToken};
use derive_more::{Display, From, Into};
use std::collections::BTreeMap;
use std::time::Duration;

/// Timed callbacks a gallery asks its host to deliver back through `Gallery::on_timer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Periodic auto-rotate step.
    Tick,
    /// Restart auto-rotation after a manual interaction.
    Resume,
    /// Re-enable eased movement after the initial snap.
    Settle,
    /// One stage of an info panel sequence.
    Panel {
        token: TransitionToken,
        stage: PanelStage,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into)]
pub struct TimerHandle(u64);

/// Source of delayed and periodic callbacks, implemented by each host's main loop.
pub trait Scheduler {
    fn once(&mut self, delay: Duration, timer: Timer) -> TimerHandle;
    fn every(&mut self, period: Duration, timer: Timer) -> TimerHandle;
    /// Cancelling a handle that already fired is a no-op.
    fn cancel(&mut self, handle: TimerHandle);
    fn cancel_all(&mut self);
}

#[derive(Debug, Clone)]
struct Pending {
    handle: TimerHandle,
    timer: Timer,
    period: Option<Duration>,
}

/// Deterministic scheduler on a virtual clock. Nothing fires until the owner pops due timers.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_handle: u64,
    next_seq: u64,
    queue: BTreeMap<(Duration, u64), Pending>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn pending_of(&self, timer: Timer) -> usize {
        self.queue.values().filter(|p| p.timer == timer).count()
    }

    /// Removes and returns the earliest timer due at or before `deadline`, moving the clock to
    /// its due time. Periodic timers are re-queued one period later.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<Timer> {
        let (&(due, _), _) = self.queue.first_key_value()?;
        if due > deadline {
            return None;
        }
        let (_, pending) = self.queue.pop_first()?;
        self.now = self.now.max(due);
        if let Some(period) = pending.period {
            self.enqueue(due + period.max(Duration::from_millis(1)), pending.clone());
        }
        Some(pending.timer)
    }

    /// Moves the clock forward without firing anything.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    fn enqueue(&mut self, due: Duration, pending: Pending) {
        self.next_seq += 1;
        self.queue.insert((due, self.next_seq), pending);
    }

    fn schedule(&mut self, delay: Duration, timer: Timer, period: Option<Duration>) -> TimerHandle {
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        let due = self.now + delay;
        self.enqueue(
            due,
            Pending {
                handle,
                timer,
                period,
            },
        );
        handle
    }
}

impl Scheduler for ManualScheduler {
    fn once(&mut self, delay: Duration, timer: Timer) -> TimerHandle {
        self.schedule(delay, timer, None)
    }

    fn every(&mut self, period: Duration, timer: Timer) -> TimerHandle {
        self.schedule(period, timer, Some(period))
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.queue.retain(|_, p| p.handle != handle);
    }

    fn cancel_all(&mut self) {
        self.queue.clear();
    }
}
