//! A single question/answer cycle.

use super::phase::RoundPhase;
use crate::difficulty::{group, LevelChange};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-empty string made only of ASCII digits.
///
/// Leading zeros are significant: `"007123"` is a six-digit value, which is
/// why digits are kept as text and never as an integer.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Digits(String);

impl Digits {
    /// Draw `len` independent uniformly random digits.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Self {
        let value = (0..len)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();
        Self(value)
    }

    /// Accept `value` only if it is non-empty and entirely ASCII digits.
    ///
    /// ```rust
    /// use recall::core::Digits;
    ///
    /// assert!(Digits::parse("007123").is_some());
    /// assert!(Digits::parse("12a4").is_none());
    /// assert!(Digits::parse("").is_none());
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(value.to_string()))
        } else {
            None
        }
    }

    /// Get the digits as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether there are no digits
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The digits with readability separators inserted.
    pub fn grouped(&self) -> String {
        group(&self.0)
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Digits {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Digits::parse(&value).ok_or_else(|| format!("'{value}' is not a digit string"))
    }
}

impl From<Digits> for String {
    fn from(digits: Digits) -> Self {
        digits.0
    }
}

/// The verdict on a scored submission.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Whether the submission matched the round's digits exactly
    pub correct: bool,
    /// What the player typed
    pub submitted: Digits,
    /// The digits the player was shown
    pub expected: Digits,
    /// Score after the answer was applied
    pub score: u32,
    /// Set when this answer moved the digit length
    pub level_change: Option<LevelChange>,
}

/// One round: the digits shown and the phase the round is in.
///
/// Rounds are created by the controller at round start, moved through their
/// phases by the controller alone, and dropped when the next round begins.
#[derive(Clone, Debug)]
pub struct Round {
    id: u64,
    digits: Digits,
    phase: RoundPhase,
    outcome: Option<RoundOutcome>,
}

impl Round {
    pub(crate) fn new(id: u64, digits: Digits) -> Self {
        Self {
            id,
            digits,
            phase: RoundPhase::Showing,
            outcome: None,
        }
    }

    /// Sequence number, starting at 1 for the first round of a process.
    /// Sequence number, never reused within a process
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the digits shown this round
    pub fn digits(&self) -> &Digits {
        &self.digits
    }

    /// Get current phase
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Set once the round has been scored.
    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    pub(crate) fn set_phase(&mut self, phase: RoundPhase) {
        self.phase = phase;
    }

    pub(crate) fn set_outcome(&mut self, outcome: RoundOutcome) {
        self.outcome = Some(outcome);
    }
}
