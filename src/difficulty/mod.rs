//! Adaptive difficulty: score to digit length, and digit grouping.
//!
//! Everything here is pure. The staircase is configurable so the open-ended
//! default and a capped variant share one implementation:
//!
//! ```rust
//! use recall::difficulty::{length_for_score, DifficultyConfig};
//!
//! assert_eq!(length_for_score(4), 6);
//! assert_eq!(length_for_score(5), 7);
//! assert_eq!(length_for_score(12), 8);
//!
//! let capped = DifficultyConfig::capped(10);
//! assert_eq!(capped.length_for_score(1_000), 10);
//! ```

mod grouping;

pub use grouping::{group, group_sizes, ungroup, SEPARATOR};

use serde::{Deserialize, Serialize};

/// Digit length every session starts at and never drops below.
pub const MIN_LENGTH: usize = 6;

/// Shape of the score-to-length staircase.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyConfig {
    /// Score at which the first extra digit is added
    pub first_step_score: u32,
    /// Points needed for each further digit
    pub step_width: u32,
    /// Upper bound on the digit length; `None` keeps climbing
    pub max_length: Option<usize>,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            first_step_score: 5,
            step_width: 7,
            max_length: None,
        }
    }
}

impl DifficultyConfig {
    /// The default staircase, stopping at `max_length` digits.
    pub fn capped(max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
            ..Self::default()
        }
    }

    /// Digit length for a cumulative score.
    ///
    /// Below `first_step_score` this is [`MIN_LENGTH`]; from there one digit
    /// is added every `step_width` points.
    pub fn length_for_score(&self, score: u32) -> usize {
        if score < self.first_step_score {
            return MIN_LENGTH;
        }
        // step_width of zero is rejected by config validation
        let steps = (score - self.first_step_score) / self.step_width.max(1);
        let length = MIN_LENGTH + steps as usize + 1;
        match self.max_length {
            Some(max) => length.min(max.max(MIN_LENGTH)),
            None => length,
        }
    }

    /// Lowest score at which `length` is reached, or `None` if the cap
    /// puts it out of reach.
    pub fn threshold_for_length(&self, length: usize) -> Option<u32> {
        if length <= MIN_LENGTH {
            return Some(0);
        }
        if self.max_length.is_some_and(|max| length > max) {
            return None;
        }
        let extra = u32::try_from(length - MIN_LENGTH - 1).ok()?;
        extra
            .checked_mul(self.step_width.max(1))?
            .checked_add(self.first_step_score)
    }

    /// Compare the length the player is on against the one `score` calls
    /// for. `None` is the common case: nothing to announce.
    pub fn level_change(&self, current_length: usize, score: u32) -> Option<LevelChange> {
        let target = self.length_for_score(score);
        LevelChange::between(current_length, target)
    }
}

/// Staircase with the default configuration.
pub fn length_for_score(score: u32) -> usize {
    DifficultyConfig::default().length_for_score(score)
}

/// Which way a level change went.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum LevelDirection {
    #[serde(rename = "level-up")]
    Up,
    #[serde(rename = "level-down")]
    Down,
}

impl LevelDirection {
    /// Notice tag, `level-up` or `level-down`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "level-up",
            Self::Down => "level-down",
        }
    }
}

/// A one-shot change of digit length.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct LevelChange {
    pub from: usize,
    pub to: usize,
    pub direction: LevelDirection,
}

impl LevelChange {
    /// `None` when the lengths are equal.
    pub fn between(from: usize, to: usize) -> Option<Self> {
        let direction = match to.cmp(&from) {
            std::cmp::Ordering::Greater => LevelDirection::Up,
            std::cmp::Ordering::Less => LevelDirection::Down,
            std::cmp::Ordering::Equal => return None,
        };
        Some(Self {
            from,
            to,
            direction,
        })
    }
}
