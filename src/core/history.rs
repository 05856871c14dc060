//! Phase transition history tracking.
//!
//! Provides immutable tracking of every phase change the controller makes,
//! timestamped by the controller's clock.

use super::phase::RoundPhase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase change.
///
/// `from` is `None` for the first phase of a round that was started by a
/// reset or by the game starting, rather than by the previous round ending.
///
/// # Example
///
/// ```rust
/// use recall::core::{PhaseTransition, RoundPhase};
/// use chrono::Utc;
///
/// let transition = PhaseTransition {
///     round: 1,
///     from: Some(RoundPhase::Showing),
///     to: RoundPhase::Paused,
///     at: Utc::now(),
/// };
/// assert_eq!(transition.to, RoundPhase::Paused);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// Sequence number of the round the `to` phase belongs to
    pub round: u64,
    /// The phase being left, if any
    pub from: Option<RoundPhase>,
    /// The phase being entered
    pub to: RoundPhase,
    /// When the transition occurred
    pub at: DateTime<Utc>,
}

/// Ordered history of phase transitions.
///
/// History is immutable - `record` returns a new history with the
/// transition appended.
///
/// # Example
///
/// ```rust
/// use recall::core::{PhaseHistory, PhaseTransition, RoundPhase};
/// use chrono::Utc;
///
/// let history = PhaseHistory::new();
/// let history = history.record(PhaseTransition {
///     round: 1,
///     from: None,
///     to: RoundPhase::Showing,
///     at: Utc::now(),
/// });
/// let history = history.record(PhaseTransition {
///     round: 1,
///     from: Some(RoundPhase::Showing),
///     to: RoundPhase::Paused,
///     at: Utc::now(),
/// });
///
/// assert_eq!(history.path(), vec![RoundPhase::Showing, RoundPhase::Paused]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PhaseHistory {
    transitions: Vec<PhaseTransition>,
}

impl PhaseHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: PhaseTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub fn push(&mut self, transition: PhaseTransition) {
        self.transitions.push(transition);
    }

    /// Forget every transition from rounds numbered below `round`.
    pub fn prune_before(&mut self, round: u64) {
        self.transitions.retain(|t| t.round >= round);
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }

    /// The sequence of phases entered, in order.
    pub fn path(&self) -> Vec<RoundPhase> {
        self.transitions.iter().map(|t| t.to).collect()
    }

    /// Transitions that belong to one round.
    pub fn for_round(&self, round: u64) -> Vec<&PhaseTransition> {
        self.transitions
            .iter()
            .filter(|t| t.round == round)
            .collect()
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` if nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            last.at.signed_duration_since(first.at).to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[PhaseTransition] {
        &self.transitions
    }
}
