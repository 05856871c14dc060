//! Builder for constructing a round controller.

use crate::builder::error::BuildError;
use crate::config::GameConfig;
use crate::controller::RoundController;
use crate::render::Renderer;
use crate::timer::Scheduler;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Builder for a [`RoundController`] with a fluent API.
pub struct GameBuilder<S: Scheduler, R: Renderer> {
    config: GameConfig,
    scheduler: Option<S>,
    renderer: Option<R>,
    seed: Option<u64>,
}

impl<S: Scheduler, R: Renderer> GameBuilder<S, R> {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            scheduler: None,
            renderer: None,
            seed: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the timer scheduler (required).
    pub fn scheduler(mut self, scheduler: S) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Set the renderer (required).
    pub fn renderer(mut self, renderer: R) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Fix the random seed so the digit sequence is reproducible.
    /// Without one the generator is seeded from the OS.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build an idle controller.
    /// Returns an error if a collaborator is missing or the config is invalid.
    pub fn build(self) -> Result<RoundController<S, R>, BuildError> {
        self.config
            .check()
            .map_err(|violations| BuildError::InvalidConfig { violations })?;
        let scheduler = self.scheduler.ok_or(BuildError::MissingScheduler)?;
        let renderer = self.renderer.ok_or(BuildError::MissingRenderer)?;
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(RoundController::new(self.config, scheduler, renderer, rng))
    }

    /// Build the controller and start the first round.
    pub fn start(self) -> Result<RoundController<S, R>, BuildError> {
        let mut controller = self.build()?;
        controller.start();
        Ok(controller)
    }
}

impl<S: Scheduler, R: Renderer> Default for GameBuilder<S, R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigViolation;
    use crate::core::RoundPhase;
    use crate::difficulty::DifficultyConfig;
    use crate::render::NullRenderer;
    use crate::timer::{ManualClock, TimerQueue};

    #[test]
    fn builder_requires_scheduler() {
        let result = GameBuilder::<TimerQueue<ManualClock>, NullRenderer>::new()
            .renderer(NullRenderer)
            .build();

        assert!(matches!(result, Err(BuildError::MissingScheduler)));
    }

    #[test]
    fn builder_requires_renderer() {
        let result = GameBuilder::<_, NullRenderer>::new()
            .scheduler(TimerQueue::new(ManualClock::default()))
            .build();

        assert!(matches!(result, Err(BuildError::MissingRenderer)));
    }

    #[test]
    fn builder_rejects_invalid_config() {
        let config = GameConfig {
            difficulty: DifficultyConfig {
                step_width: 0,
                ..DifficultyConfig::default()
            },
            ..GameConfig::default()
        };

        let result = GameBuilder::new()
            .config(config)
            .scheduler(TimerQueue::new(ManualClock::default()))
            .renderer(NullRenderer)
            .build();

        match result {
            Err(BuildError::InvalidConfig { violations }) => {
                assert_eq!(violations, vec![ConfigViolation::ZeroStepWidth]);
            }
            _ => panic!("Expected InvalidConfig"),
        }
    }

    #[test]
    fn build_leaves_controller_idle() {
        let controller = GameBuilder::new()
            .scheduler(TimerQueue::new(ManualClock::default()))
            .renderer(NullRenderer)
            .build()
            .unwrap();

        assert!(controller.phase().is_none());
    }

    #[test]
    fn start_opens_first_round() {
        let controller = GameBuilder::new()
            .scheduler(TimerQueue::new(ManualClock::default()))
            .renderer(NullRenderer)
            .seed(1)
            .start()
            .unwrap();

        assert_eq!(controller.phase(), Some(RoundPhase::Showing));
        assert_eq!(controller.round().unwrap().digits().len(), 6);
    }

    #[test]
    fn same_seed_same_digits() {
        let digits = |seed| {
            GameBuilder::new()
                .scheduler(TimerQueue::new(ManualClock::default()))
                .renderer(NullRenderer)
                .seed(seed)
                .start()
                .unwrap()
                .round()
                .unwrap()
                .digits()
                .clone()
        };

        assert_eq!(digits(9), digits(9));
    }
}
