//! Single-threaded timer queue.

use super::clock::{offset, Clock};
use super::{ScheduledTimer, Scheduler, TimerEvent, TimerId};
use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};

/// Pending timers ordered by deadline, driven by a [`Clock`].
///
/// Nothing fires on its own: the owner calls [`Scheduler::pop_due`] and
/// dispatches what comes back. Ids are handed out in increasing order and
/// never reused, even after a timer is cancelled.
#[derive(Debug)]
pub struct TimerQueue<C: Clock> {
    clock: C,
    next_id: u64,
    timers: Vec<ScheduledTimer>,
}

impl<C: Clock> TimerQueue<C> {
    /// Create an empty queue driven by `clock`.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            next_id: 1,
            timers: Vec::new(),
        }
    }

    /// The clock deadlines are measured against.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: Clock> Scheduler for TimerQueue<C> {
    fn now(&self) -> Instant {
        self.clock.now()
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.clock.timestamp()
    }

    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(ScheduledTimer {
            id,
            deadline: offset(self.clock.now(), delay),
            event,
        });
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    fn cancel_all(&mut self) -> usize {
        let count = self.timers.len();
        self.timers.clear();
        count
    }

    fn pop_due(&mut self) -> Option<ScheduledTimer> {
        let now = self.clock.now();
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= now)
            .min_by_key(|(_, t)| (t.deadline, t.id))
            .map(|(i, _)| i)?;
        Some(self.timers.remove(index))
    }

    fn deadline(&self, id: TimerId) -> Option<Instant> {
        self.timers.iter().find(|t| t.id == id).map(|t| t.deadline)
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.timers.iter().map(|t| t.deadline).min()
    }

    fn pending(&self) -> usize {
        self.timers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RoundPhase;
    use crate::timer::ManualClock;

    fn event(round: u64) -> TimerEvent {
        TimerEvent {
            round,
            phase: RoundPhase::Showing,
        }
    }

    fn queue() -> (TimerQueue<ManualClock>, ManualClock) {
        let clock = ManualClock::default();
        (TimerQueue::new(clock.clone()), clock)
    }

    #[test]
    fn nothing_is_due_before_deadline() {
        let (mut queue, clock) = queue();
        queue.schedule(Duration::from_millis(500), event(1));

        clock.advance(Duration::from_millis(499));
        assert!(queue.pop_due().is_none());

        clock.advance(Duration::from_millis(1));
        let timer = queue.pop_due().unwrap();
        assert_eq!(timer.event, event(1));
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn due_timers_come_out_in_deadline_order() {
        let (mut queue, clock) = queue();
        let late = queue.schedule(Duration::from_millis(300), event(1));
        let early = queue.schedule(Duration::from_millis(100), event(2));

        clock.advance(Duration::from_secs(1));
        assert_eq!(queue.pop_due().unwrap().id, early);
        assert_eq!(queue.pop_due().unwrap().id, late);
        assert!(queue.pop_due().is_none());
    }

    #[test]
    fn ids_are_never_reused() {
        let (mut queue, _clock) = queue();
        let first = queue.schedule(Duration::from_millis(10), event(1));
        assert!(queue.cancel(first));
        let second = queue.schedule(Duration::from_millis(10), event(1));
        assert_ne!(first, second);
        assert!(second > first);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let (mut queue, clock) = queue();
        let id = queue.schedule(Duration::from_millis(10), event(1));
        assert!(queue.cancel(id));
        assert!(!queue.cancel(id));

        clock.advance(Duration::from_secs(1));
        assert!(queue.pop_due().is_none());
    }

    #[test]
    fn cancel_all_empties_queue() {
        let (mut queue, _clock) = queue();
        queue.schedule(Duration::from_millis(10), event(1));
        queue.schedule(Duration::from_millis(20), event(2));

        assert_eq!(queue.cancel_all(), 2);
        assert_eq!(queue.pending(), 0);
        assert!(queue.next_deadline().is_none());
    }

    #[test]
    fn deadline_lookup() {
        let (mut queue, clock) = queue();
        let id = queue.schedule(Duration::from_millis(2_500), event(1));
        let expected = clock.now() + Duration::from_millis(2_500);

        assert_eq!(queue.deadline(id), Some(expected));
        assert_eq!(queue.next_deadline(), Some(expected));
    }

    #[test]
    fn wall_clock_step_back_does_not_delay_timers() {
        let (mut queue, clock) = queue();
        queue.schedule(Duration::from_millis(2_500), event(1));

        let an_hour_ago = clock.timestamp() - chrono::Duration::hours(1);
        clock.set_wall(an_hour_ago);
        clock.advance(Duration::from_millis(2_500));

        assert_eq!(queue.pop_due().map(|t| t.event), Some(event(1)));
    }
}
