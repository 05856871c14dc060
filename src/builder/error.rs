//! Build errors for the game builder.

use crate::config::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when building a game.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Scheduler not specified. Call .scheduler(queue) before .build()")]
    MissingScheduler,

    #[error("Renderer not specified. Call .renderer(renderer) before .build()")]
    MissingRenderer,

    #[error("Invalid configuration: {violations:?}")]
    InvalidConfig { violations: Vec<ConfigViolation> },
}
