//! Core game types.
//!
//! This module holds the plain data the controller moves around:
//! - Round phases and their pure inspection methods
//! - Rounds and their digit strings
//! - The game session (score and digit length) and its statistics
//! - Immutable phase history
//!
//! Nothing in here schedules timers or renders anything.

mod history;
mod phase;
mod round;
mod session;

pub use history::{PhaseHistory, PhaseTransition};
pub use phase::RoundPhase;
pub use round::{Digits, Round, RoundOutcome};
pub use session::{GameSession, SessionStats};
