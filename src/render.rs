//! What the controller tells the presentation layer.
//!
//! The controller calls [`Renderer::render`] with a fresh [`View`] after
//! every phase change, and [`Renderer::notify`] for transient messages that
//! sit on top of whatever is shown.

use crate::answer::AnswerError;
use crate::core::{RoundOutcome, RoundPhase};
use crate::difficulty::{LevelChange, LevelDirection};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Everything needed to draw the current screen.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct View {
    pub round: u64,
    pub phase: RoundPhase,
    /// Grouped digits, present only while `Showing`
    pub digits: Option<String>,
    /// Time left before the current phase ends on its own
    pub remaining: Option<Duration>,
    pub score: u32,
    pub length: usize,
    /// Present only while `ShowingResult`
    pub result: Option<ResultView>,
}

/// The verdict screen.
///
/// The two answers are filled in only when the player got it wrong.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ResultView {
    pub correct: bool,
    pub expected: Option<String>,
    pub submitted: Option<String>,
}

impl From<&RoundOutcome> for ResultView {
    fn from(outcome: &RoundOutcome) -> Self {
        if outcome.correct {
            Self {
                correct: true,
                expected: None,
                submitted: None,
            }
        } else {
            Self {
                correct: false,
                expected: Some(outcome.expected.grouped()),
                submitted: Some(outcome.submitted.grouped()),
            }
        }
    }
}

/// A message to flash for `display_for`, then dismiss.
#[derive(Clone, PartialEq, Debug)]
pub enum Notice {
    LevelChanged {
        change: LevelChange,
        display_for: Duration,
    },
    AnswerRejected {
        violations: Vec<AnswerError>,
        display_for: Duration,
    },
}

impl Notice {
    /// How long the message stays up before it is dismissed.
    pub fn display_for(&self) -> Duration {
        match self {
            Self::LevelChanged { display_for, .. } | Self::AnswerRejected { display_for, .. } => {
                *display_for
            }
        }
    }

    /// Player-facing text.
    pub fn message(&self) -> String {
        match self {
            Self::LevelChanged { change, .. } => match change.direction {
                LevelDirection::Up => format!("level up: {} digits", change.to),
                LevelDirection::Down => format!("level down: {} digits", change.to),
            },
            Self::AnswerRejected { violations, .. } => violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// Presentation collaborator.
pub trait Renderer {
    /// Draw the screen for a phase that was just entered.
    fn render(&mut self, view: &View);

    /// Flash a transient message.
    fn notify(&mut self, notice: &Notice);

    /// The game was torn down; drop anything still on screen.
    fn clear(&mut self) {}
}

/// Renderer that draws nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _view: &View) {}

    fn notify(&mut self, _notice: &Notice) {}
}

/// Headless renderer that keeps everything it was given.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    pub views: Vec<View>,
    pub notices: Vec<Notice>,
    pub clears: usize,
}

impl RecordingRenderer {
    /// Get the most recent view
    pub fn last_view(&self) -> Option<&View> {
        self.views.last()
    }

    /// Level changes announced so far, in order.
    pub fn level_changes(&self) -> Vec<LevelChange> {
        self.notices
            .iter()
            .filter_map(|n| match n {
                Notice::LevelChanged { change, .. } => Some(*change),
                Notice::AnswerRejected { .. } => None,
            })
            .collect()
    }

    /// Rejected submissions announced so far, in order.
    pub fn rejections(&self) -> Vec<&[AnswerError]> {
        self.notices
            .iter()
            .filter_map(|n| match n {
                Notice::AnswerRejected { violations, .. } => Some(violations.as_slice()),
                Notice::LevelChanged { .. } => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, view: &View) {
        self.views.push(view.clone());
    }

    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }

    fn clear(&mut self) {
        self.clears += 1;
    }
}
