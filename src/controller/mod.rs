//! The round state machine.
//!
//! [`RoundController`] owns the game session, the current round, and the
//! single pending timer. Phase changes happen in exactly two places: when a
//! timer comes due in [`RoundController::poll`], and when the player acts
//! through `submit`, `next_round`, `reset`, or `teardown`.

mod error;
mod machine;

pub use error::GameError;
pub use machine::RoundController;
