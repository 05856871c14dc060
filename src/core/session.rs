//! Score, digit length, and running statistics for one play session.

use crate::difficulty::{DifficultyConfig, LevelChange, MIN_LENGTH};
use serde::{Deserialize, Serialize};

/// The only state that outlives a round.
///
/// `current_length` always equals the difficulty staircase evaluated at
/// `score`; it only moves through [`GameSession::apply_answer`] or a reset.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GameSession {
    score: u32,
    current_length: usize,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Start at score 0 with the minimum length
    pub fn new() -> Self {
        Self {
            score: 0,
            current_length: MIN_LENGTH,
        }
    }

    /// Get current score
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Get the current digit length
    pub fn current_length(&self) -> usize {
        self.current_length
    }

    /// Score one answer and move the digit length if a threshold was crossed.
    ///
    /// Correct answers add one point; wrong answers take one away, never
    /// below zero. Returns the level change, if any, so the caller can
    /// announce it exactly once.
    ///
    /// ```rust
    /// use recall::core::GameSession;
    /// use recall::difficulty::{DifficultyConfig, LevelDirection};
    ///
    /// let config = DifficultyConfig::default();
    /// let mut session = GameSession::new();
    /// for _ in 0..4 {
    ///     assert!(session.apply_answer(true, &config).is_none());
    /// }
    /// let change = session.apply_answer(true, &config).unwrap();
    /// assert_eq!(change.direction, LevelDirection::Up);
    /// assert_eq!(session.current_length(), 7);
    /// ```
    pub fn apply_answer(&mut self, correct: bool, config: &DifficultyConfig) -> Option<LevelChange> {
        self.score = if correct {
            self.score.saturating_add(1)
        } else {
            self.score.saturating_sub(1)
        };

        let change = config.level_change(self.current_length, self.score);
        if let Some(change) = &change {
            self.current_length = change.to;
        }
        change
    }
}

/// Running tallies for the session, reset alongside the score.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub rounds_scored: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Longest digit length the player has been shown
    pub longest_length: usize,
}

impl SessionStats {
    pub(crate) fn record(&mut self, correct: bool, length: usize) {
        self.rounds_scored += 1;
        if correct {
            self.correct += 1;
            self.current_streak += 1;
            self.longest_streak = self.longest_streak.max(self.current_streak);
        } else {
            self.incorrect += 1;
            self.current_streak = 0;
        }
        self.longest_length = self.longest_length.max(length);
    }

    /// Fraction of scored rounds answered correctly, `None` before any.
    pub fn accuracy(&self) -> Option<f64> {
        (self.rounds_scored > 0).then(|| f64::from(self.correct) / f64::from(self.rounds_scored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::LevelDirection;

    fn session_at(score: u32, config: &DifficultyConfig) -> GameSession {
        let mut session = GameSession::new();
        for _ in 0..score {
            session.apply_answer(true, config);
        }
        session
    }

    #[test]
    fn new_session_starts_at_minimum() {
        let session = GameSession::new();
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_length(), 6);
    }

    #[test]
    fn correct_answer_without_level_change() {
        let config = DifficultyConfig::default();
        let mut session = GameSession::new();

        let change = session.apply_answer(true, &config);

        assert!(change.is_none());
        assert_eq!(session.score(), 1);
        assert_eq!(session.current_length(), 6);
    }

    #[test]
    fn score_never_goes_negative() {
        let config = DifficultyConfig::default();
        let mut session = GameSession::new();

        for _ in 0..3 {
            assert!(session.apply_answer(false, &config).is_none());
            assert_eq!(session.score(), 0);
        }
    }

    #[test]
    fn fifth_point_levels_up() {
        let config = DifficultyConfig::default();
        let mut session = session_at(4, &config);

        let change = session.apply_answer(true, &config).unwrap();

        assert_eq!(session.score(), 5);
        assert_eq!(change.direction, LevelDirection::Up);
        assert_eq!((change.from, change.to), (6, 7));
    }

    #[test]
    fn losing_the_fifth_point_levels_down() {
        let config = DifficultyConfig::default();
        let mut session = session_at(5, &config);
        assert_eq!(session.current_length(), 7);

        let change = session.apply_answer(false, &config).unwrap();

        assert_eq!(session.score(), 4);
        assert_eq!(change.direction, LevelDirection::Down);
        assert_eq!(session.current_length(), 6);
    }

    #[test]
    fn stats_track_streaks_and_length() {
        let mut stats = SessionStats::default();
        stats.record(true, 6);
        stats.record(true, 6);
        stats.record(false, 7);
        stats.record(true, 6);

        assert_eq!(stats.rounds_scored, 4);
        assert_eq!(stats.correct, 3);
        assert_eq!(stats.incorrect, 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.longest_streak, 2);
        assert_eq!(stats.longest_length, 7);
        assert_eq!(stats.accuracy(), Some(0.75));
    }

    #[test]
    fn accuracy_is_none_before_any_round() {
        assert!(SessionStats::default().accuracy().is_none());
    }
}
