//! Recall: an adaptive digit-memorization game
//!
//! A number flashes on screen, disappears, and the player types it back from
//! memory. Right answers raise the score, wrong ones lower it, and the score
//! decides how many digits the next number has.
//!
//! # Core Concepts
//!
//! - **Rounds**: one number, moved through `Showing → Paused →
//!   AwaitingAnswer → ShowingResult` by the [`RoundController`]
//! - **Difficulty**: a pure score-to-length staircase plus readability
//!   grouping
//! - **Timers**: delays go through a [`timer::Scheduler`], so a manual clock
//!   can stand in for wall-clock time
//! - **Rendering**: the controller hands a [`render::View`] to a
//!   [`render::Renderer`] on every phase change and knows nothing else about
//!   the screen
//!
//! # Example
//!
//! ```rust
//! use recall::builder::simulated;
//! use recall::config::GameConfig;
//! use recall::core::RoundPhase;
//! use std::time::Duration;
//!
//! let (mut game, clock) = simulated(GameConfig::default(), 42).unwrap();
//! let shown = game.round().unwrap().digits().to_string();
//!
//! clock.advance(Duration::from_millis(2_500));
//! game.poll();
//! clock.advance(Duration::from_millis(500));
//! game.poll();
//! assert_eq!(game.phase(), Some(RoundPhase::AwaitingAnswer));
//!
//! let outcome = game.submit(&shown).unwrap();
//! assert!(outcome.correct);
//! assert_eq!(game.score(), 1);
//! ```

pub mod answer;
pub mod builder;
pub mod config;
pub mod controller;
pub mod core;
pub mod difficulty;
pub mod render;
pub mod timer;

// Re-export commonly used types
pub use builder::{BuildError, GameBuilder};
pub use config::GameConfig;
pub use controller::{GameError, RoundController};
pub use crate::core::{Digits, GameSession, RoundPhase};
pub use difficulty::{group, length_for_score};
