//! Time sources for the scheduler.
//!
//! Deadlines are measured on a monotonic [`Instant`] so a wall-clock step
//! (NTP correction, manual change) never stalls or rushes a phase. Wall-clock
//! time is only used to timestamp the phase history.

use chrono::{DateTime, Utc};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Something that can tell the current time.
pub trait Clock {
    /// Monotonic time used for deadlines.
    fn now(&self) -> Instant;

    /// Wall-clock time used for history timestamps.
    fn timestamp(&self) -> DateTime<Utc>;
}

/// The process's monotonic clock plus the system wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn timestamp(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle while the
/// scheduler owns another.
///
/// ```rust
/// use recall::timer::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::default();
/// let handle = clock.clone();
/// let before = clock.now();
///
/// handle.advance(Duration::from_millis(2_500));
/// assert_eq!(clock.now() - before, Duration::from_millis(2_500));
/// ```
#[derive(Clone, Debug)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Rc<Cell<Duration>>,
    wall: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    /// Create a clock whose wall time starts at `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
            wall: Rc::new(Cell::new(start)),
        }
    }

    /// Move time forward, both monotonic and wall.
    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get().saturating_add(by));
        self.wall.set(offset_timestamp(self.wall.get(), by));
    }

    /// Step only the wall clock, the way an NTP correction would.
    ///
    /// Deadlines are unaffected.
    pub fn set_wall(&self, at: DateTime<Utc>) {
        self.wall.set(at);
    }

    /// Monotonic time passed since the clock was created.
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }
}

impl Default for ManualClock {
    /// Wall time starts at the Unix epoch.
    fn default() -> Self {
        Self::new(DateTime::<Utc>::default())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        offset(self.origin, self.elapsed.get())
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.wall.get()
    }
}

/// `at + delay`, clamped to a century ahead when that overflows.
pub(crate) fn offset(at: Instant, delay: Duration) -> Instant {
    at.checked_add(delay)
        .or_else(|| at.checked_add(FAR_FUTURE))
        .unwrap_or(at)
}

fn offset_timestamp(at: DateTime<Utc>, delay: Duration) -> DateTime<Utc> {
    chrono::Duration::from_std(delay)
        .ok()
        .and_then(|delta| at.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Time left until `deadline`, zero once it has passed.
pub(crate) fn remaining(now: Instant, deadline: Instant) -> Duration {
    deadline.saturating_duration_since(now)
}
