//! Controller operation errors.

use crate::answer::AnswerError;
use crate::core::RoundPhase;
use thiserror::Error;

/// Errors returned by [`RoundController`](super::RoundController) operations.
///
/// All of them leave the game exactly as it was: no score change, no phase
/// change, no timer touched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Answer rejected: {}", join(.violations))]
    Rejected { violations: Vec<AnswerError> },

    #[error("Cannot {operation} while {phase}")]
    WrongPhase {
        operation: &'static str,
        phase: RoundPhase,
    },

    #[error("No round in progress")]
    NotRunning,
}

impl GameError {
    /// Validation problems behind a rejected answer; empty otherwise.
    pub fn violations(&self) -> &[AnswerError] {
        match self {
            Self::Rejected { violations } => violations,
            _ => &[],
        }
    }
}

fn join(violations: &[AnswerError]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
