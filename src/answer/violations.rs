//! Reasons a submitted answer is turned away without being scored.

use thiserror::Error;

/// A problem with a submission that the player can fix and resubmit.
///
/// Neither variant changes the score; the round stays in `AwaitingAnswer`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnswerError {
    #[error("Please enter exactly {expected} digits (got {actual})")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Please enter only numbers (found {offending:?})")]
    InvalidFormat { offending: String },
}

impl AnswerError {
    /// Short tag for logs and front-ends.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidLength { .. } => "InvalidLength",
            Self::InvalidFormat { .. } => "InvalidFormat",
        }
    }
}
