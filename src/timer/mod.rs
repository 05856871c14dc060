//! Delayed transitions behind a schedule/cancel interface.
//!
//! The controller never sleeps. It asks a [`Scheduler`] to remember a
//! deadline and later drains whatever has come due. Swapping
//! [`SystemClock`] for [`ManualClock`] turns real waits into
//! instant, deterministic test steps.

mod clock;
mod queue;

pub use clock::{Clock, ManualClock, SystemClock};
pub use queue::TimerQueue;

pub(crate) use clock::remaining;

use crate::core::RoundPhase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Handle for one scheduled timer.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// What a timer means when it fires: the given round's `phase` is over.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TimerEvent {
    pub round: u64,
    pub phase: RoundPhase,
}

/// A timer waiting in a scheduler.
#[derive(Clone, PartialEq, Debug)]
pub struct ScheduledTimer {
    pub id: TimerId,
    pub deadline: Instant,
    pub event: TimerEvent,
}

/// Schedule/cancel interface for delayed events.
pub trait Scheduler {
    /// Current monotonic time according to the scheduler's clock.
    fn now(&self) -> Instant;

    /// Current wall-clock time, for timestamps only.
    fn timestamp(&self) -> DateTime<Utc>;

    /// Remember `event` to fire `delay` from now.
    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerId;

    /// Drop a pending timer. Returns `false` if it already fired or was
    /// cancelled.
    fn cancel(&mut self, id: TimerId) -> bool;

    /// Drop every pending timer, returning how many there were.
    fn cancel_all(&mut self) -> usize;

    /// Remove and return the earliest timer whose deadline has passed.
    fn pop_due(&mut self) -> Option<ScheduledTimer>;

    /// Deadline of a pending timer.
    fn deadline(&self, id: TimerId) -> Option<Instant>;

    /// Earliest deadline of any pending timer.
    fn next_deadline(&self) -> Option<Instant>;

    /// Number of pending timers.
    fn pending(&self) -> usize;
}
