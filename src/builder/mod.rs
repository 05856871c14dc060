//! Builder API for assembling a game.
//!
//! A game needs three collaborators besides its configuration: a timer
//! scheduler, a renderer, and a random source. The builder wires them
//! together and validates the configuration on the way.

pub mod error;
pub mod game;

pub use error::BuildError;
pub use game::GameBuilder;

use crate::config::GameConfig;
use crate::controller::RoundController;
use crate::render::RecordingRenderer;
use crate::timer::{ManualClock, TimerQueue};

/// A started game on a manual clock with a recording renderer.
///
/// The returned clock handle drives the game: advance it, then call
/// [`RoundController::poll`].
///
/// # Example
///
/// ```
/// use recall::builder::simulated;
/// use recall::config::GameConfig;
/// use recall::core::RoundPhase;
/// use std::time::Duration;
///
/// let (mut game, clock) = simulated(GameConfig::default(), 7).unwrap();
/// assert_eq!(game.phase(), Some(RoundPhase::Showing));
///
/// clock.advance(Duration::from_millis(2_500));
/// game.poll();
/// assert_eq!(game.phase(), Some(RoundPhase::Paused));
/// ```
pub fn simulated(
    config: GameConfig,
    seed: u64,
) -> Result<
    (
        RoundController<TimerQueue<ManualClock>, RecordingRenderer>,
        ManualClock,
    ),
    BuildError,
> {
    let clock = ManualClock::default();
    let controller = GameBuilder::new()
        .config(config)
        .scheduler(TimerQueue::new(clock.clone()))
        .renderer(RecordingRenderer::default())
        .seed(seed)
        .start()?;
    Ok((controller, clock))
}
