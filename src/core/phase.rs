//! The four phases a round moves through.
//!
//! Phases are plain values with pure inspection methods; the controller is
//! the only thing that moves a round from one phase to the next.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a round currently is in its lifecycle.
///
/// The cycle is always `Showing → Paused → AwaitingAnswer → ShowingResult`,
/// after which a brand-new round starts again in `Showing`.
///
/// # Example
///
/// ```rust
/// use recall::core::RoundPhase;
///
/// let phase = RoundPhase::Showing;
/// assert_eq!(phase.name(), "Showing");
/// assert!(phase.is_timed());
/// assert!(!phase.accepts_answer());
/// assert_eq!(phase.next(), RoundPhase::Paused);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum RoundPhase {
    /// The digits are on screen.
    Showing,
    /// The digits have been blanked; a short gap before input opens.
    Paused,
    /// Waiting for the player to type the number back.
    AwaitingAnswer,
    /// The verdict for the scored answer is on screen.
    ShowingResult,
}

impl RoundPhase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Showing => "Showing",
            Self::Paused => "Paused",
            Self::AwaitingAnswer => "AwaitingAnswer",
            Self::ShowingResult => "ShowingResult",
        }
    }

    /// Phases that end on their own when a timer fires.
    ///
    /// `AwaitingAnswer` is the only phase that waits on the player instead.
    pub fn is_timed(&self) -> bool {
        !matches!(self, Self::AwaitingAnswer)
    }

    /// Only `AwaitingAnswer` takes a submission.
    pub fn accepts_answer(&self) -> bool {
        matches!(self, Self::AwaitingAnswer)
    }

    /// Whether the round's digits may be rendered in this phase.
    pub fn reveals_digits(&self) -> bool {
        matches!(self, Self::Showing)
    }

    /// The phase that follows this one in the cycle.
    ///
    /// `ShowingResult` wraps around to `Showing`, which always belongs to a
    /// freshly generated round.
    pub fn next(&self) -> RoundPhase {
        match self {
            Self::Showing => Self::Paused,
            Self::Paused => Self::AwaitingAnswer,
            Self::AwaitingAnswer => Self::ShowingResult,
            Self::ShowingResult => Self::Showing,
        }
    }
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [RoundPhase; 4] = [
        RoundPhase::Showing,
        RoundPhase::Paused,
        RoundPhase::AwaitingAnswer,
        RoundPhase::ShowingResult,
    ];

    #[test]
    fn phase_name_returns_correct_value() {
        assert_eq!(RoundPhase::Showing.name(), "Showing");
        assert_eq!(RoundPhase::Paused.name(), "Paused");
        assert_eq!(RoundPhase::AwaitingAnswer.name(), "AwaitingAnswer");
        assert_eq!(RoundPhase::ShowingResult.name(), "ShowingResult");
    }

    #[test]
    fn only_awaiting_answer_is_untimed() {
        for phase in ALL {
            assert_eq!(phase.is_timed(), phase != RoundPhase::AwaitingAnswer);
            assert_eq!(phase.accepts_answer(), !phase.is_timed());
        }
    }

    #[test]
    fn digits_are_revealed_only_while_showing() {
        let revealing: Vec<_> = ALL.into_iter().filter(|p| p.reveals_digits()).collect();
        assert_eq!(revealing, vec![RoundPhase::Showing]);
    }

    #[test]
    fn cycle_returns_to_showing_after_four_steps() {
        let mut phase = RoundPhase::Showing;
        let mut seen = vec![phase];
        for _ in 0..3 {
            phase = phase.next();
            seen.push(phase);
        }
        assert_eq!(seen, ALL.to_vec());
        assert_eq!(phase.next(), RoundPhase::Showing);
    }

    #[test]
    fn phase_serializes_correctly() {
        let json = serde_json::to_string(&RoundPhase::AwaitingAnswer).unwrap();
        assert_eq!(json, "\"AwaitingAnswer\"");
        let back: RoundPhase = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RoundPhase::AwaitingAnswer);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(RoundPhase::Paused.to_string(), "Paused");
    }
}
