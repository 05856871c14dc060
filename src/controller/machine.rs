//! Round controller: phases, timers, scoring.

use crate::answer::parse_answer;
use crate::config::GameConfig;
use crate::controller::error::GameError;
use crate::core::{
    Digits, GameSession, PhaseHistory, PhaseTransition, Round, RoundOutcome, RoundPhase,
    SessionStats,
};
use crate::render::{Notice, Renderer, ResultView, View};
use crate::timer::{remaining, Scheduler, TimerEvent, TimerId};
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Rounds whose transitions stay in the history: the current one and the one
/// before it.
const HISTORY_ROUNDS: u64 = 2;

/// Drives rounds through `Showing → Paused → AwaitingAnswer → ShowingResult`.
///
/// At most one timer is pending at any moment. Every phase change cancels
/// the previous phase's timer before scheduling the next, so a timer from a
/// phase that has already been left can never move the game.
pub struct RoundController<S: Scheduler, R: Renderer> {
    config: GameConfig,
    scheduler: S,
    renderer: R,
    rng: StdRng,
    session: GameSession,
    stats: SessionStats,
    round: Option<Round>,
    rounds_started: u64,
    pending: Option<TimerId>,
    history: PhaseHistory,
}

impl<S: Scheduler, R: Renderer> RoundController<S, R> {
    /// Create an idle controller. Call [`RoundController::start`] to begin.
    pub fn new(config: GameConfig, scheduler: S, renderer: R, rng: StdRng) -> Self {
        Self {
            config,
            scheduler,
            renderer,
            rng,
            session: GameSession::new(),
            stats: SessionStats::default(),
            round: None,
            rounds_started: 0,
            pending: None,
            history: PhaseHistory::new(),
        }
    }

    /// Get the configuration the game runs with
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the score and current length
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Get current score
    pub fn score(&self) -> u32 {
        self.session.score()
    }

    /// Get the current digit length
    pub fn current_length(&self) -> usize {
        self.session.current_length()
    }

    /// Get running session tallies
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Get transitions of the current and previous round
    pub fn history(&self) -> &PhaseHistory {
        &self.history
    }

    /// The round in progress, `None` before `start` and after `teardown`.
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Get the phase of the round in progress
    pub fn phase(&self) -> Option<RoundPhase> {
        self.round.as_ref().map(Round::phase)
    }

    /// Check whether a round is in progress
    pub fn is_running(&self) -> bool {
        self.round.is_some()
    }

    /// Handle of the one timer the controller is waiting on.
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending
    }

    /// Get the scheduler
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Get the renderer
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Get the renderer mutably
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Begin the first round. Does nothing if a round is already running.
    pub fn start(&mut self) {
        if self.round.is_some() {
            debug!("start ignored: already running");
            return;
        }
        info!(length = self.session.current_length(), "game started");
        self.begin_round(None);
    }

    /// Fire every timer that has come due, in deadline order.
    ///
    /// Returns how many phase changes happened.
    pub fn poll(&mut self) -> usize {
        let mut fired = 0;
        while let Some(timer) = self.scheduler.pop_due() {
            if self.pending != Some(timer.id) {
                warn!(timer = %timer.id, "ignoring timer that is no longer pending");
                continue;
            }
            self.pending = None;
            if self.on_timer(timer.event) {
                fired += 1;
            }
        }
        fired
    }

    /// Score an answer typed during `AwaitingAnswer`.
    ///
    /// Malformed answers (wrong digit count, non-digits) are rejected with
    /// every problem listed; the score is untouched and the round keeps
    /// waiting. A well-formed answer is scored, may move the digit length,
    /// and moves the round to `ShowingResult`.
    pub fn submit(&mut self, input: &str) -> Result<RoundOutcome, GameError> {
        let round = self.round.as_ref().ok_or(GameError::NotRunning)?;
        let phase = round.phase();
        if !phase.accepts_answer() {
            return Err(GameError::WrongPhase {
                operation: "submit",
                phase,
            });
        }

        let submitted = match parse_answer(input, self.session.current_length()) {
            Ok(digits) => digits,
            Err(violations) => {
                debug!(round = round.id(), ?violations, "answer rejected");
                self.renderer.notify(&Notice::AnswerRejected {
                    violations: violations.clone(),
                    display_for: self.config.timing.invalid_notice(),
                });
                return Err(GameError::Rejected { violations });
            }
        };

        let expected = round.digits().clone();
        let correct = submitted == expected;
        let level_change = self
            .session
            .apply_answer(correct, &self.config.difficulty);
        self.stats.record(correct, expected.len());

        info!(
            round = round.id(),
            correct,
            score = self.session.score(),
            "answer scored"
        );

        if let Some(change) = level_change {
            info!(
                from = change.from,
                to = change.to,
                direction = change.direction.as_str(),
                "digit length changed"
            );
            self.renderer.notify(&Notice::LevelChanged {
                change,
                display_for: self.config.timing.level_notice(),
            });
        }

        let outcome = RoundOutcome {
            correct,
            submitted,
            expected,
            score: self.session.score(),
            level_change,
        };
        if let Some(round) = self.round.as_mut() {
            round.set_outcome(outcome.clone());
        }
        self.enter(RoundPhase::ShowingResult);
        Ok(outcome)
    }

    /// Skip the rest of the result dwell and start the next round now.
    pub fn next_round(&mut self) -> Result<(), GameError> {
        let phase = self.phase().ok_or(GameError::NotRunning)?;
        if phase != RoundPhase::ShowingResult {
            return Err(GameError::WrongPhase {
                operation: "start the next round",
                phase,
            });
        }
        self.begin_round(Some(phase));
        Ok(())
    }

    /// Cancel all timers, zero the session, and start a fresh round at the
    /// minimum length.
    pub fn reset(&mut self) {
        let cancelled = self.cancel_all();
        let from = self.phase();
        self.session = GameSession::new();
        self.stats = SessionStats::default();
        info!(cancelled, "game reset");
        self.begin_round(from);
    }

    /// Cancel every outstanding timer, then release the round, session and
    /// history.
    pub fn teardown(&mut self) {
        let cancelled = self.cancel_all();
        self.round = None;
        self.session = GameSession::new();
        self.stats = SessionStats::default();
        self.history.clear();
        self.renderer.clear();
        info!(cancelled, "game torn down");
    }

    /// Snapshot of what should be on screen right now.
    pub fn view(&self) -> Option<View> {
        let round = self.round.as_ref()?;
        let phase = round.phase();
        let now = self.scheduler.now();

        Some(View {
            round: round.id(),
            phase,
            digits: phase.reveals_digits().then(|| round.digits().grouped()),
            remaining: self
                .pending
                .and_then(|id| self.scheduler.deadline(id))
                .map(|deadline| remaining(now, deadline)),
            score: self.session.score(),
            length: self.session.current_length(),
            result: if phase == RoundPhase::ShowingResult {
                round.outcome().map(ResultView::from)
            } else {
                None
            },
        })
    }

    /// Returns `false` when the event no longer matches the round.
    fn on_timer(&mut self, event: TimerEvent) -> bool {
        let Some(round) = self.round.as_ref() else {
            return false;
        };
        if round.id() != event.round || round.phase() != event.phase {
            warn!(
                round = round.id(),
                phase = %round.phase(),
                ?event,
                "ignoring timer for a phase that has ended"
            );
            return false;
        }

        if !event.phase.is_timed() {
            return false;
        }

        // the result dwell ends the round; a new one takes its place
        match event.phase.next() {
            RoundPhase::Showing => self.begin_round(Some(event.phase)),
            next => self.enter(next),
        }
        true
    }

    fn begin_round(&mut self, from: Option<RoundPhase>) {
        self.cancel_pending();
        self.rounds_started += 1;
        let digits = Digits::generate(&mut self.rng, self.session.current_length());
        let round = Round::new(self.rounds_started, digits);
        debug!(round = round.id(), length = round.digits().len(), "round started");
        self.round = Some(round);
        self.record(from, RoundPhase::Showing);
        self.schedule_for(RoundPhase::Showing);
        self.render();
    }

    fn enter(&mut self, phase: RoundPhase) {
        self.cancel_pending();
        let Some(round) = self.round.as_mut() else {
            return;
        };
        let from = round.phase();
        round.set_phase(phase);
        self.record(Some(from), phase);
        self.schedule_for(phase);
        self.render();
    }

    fn record(&mut self, from: Option<RoundPhase>, to: RoundPhase) {
        let round = self.round.as_ref().map_or(0, Round::id);
        debug!(round, from = ?from, to = %to, "phase transition");
        if to == RoundPhase::Showing {
            self.history
                .prune_before(round.saturating_sub(HISTORY_ROUNDS - 1));
        }
        self.history.push(PhaseTransition {
            round,
            from,
            to,
            at: self.scheduler.timestamp(),
        });
    }

    fn schedule_for(&mut self, phase: RoundPhase) {
        let Some(delay) = self.phase_duration(phase) else {
            return;
        };
        let Some(round) = self.round.as_ref().map(Round::id) else {
            return;
        };
        let id = self
            .scheduler
            .schedule(delay, TimerEvent { round, phase });
        debug!(timer = %id, round, phase = %phase, ?delay, "timer scheduled");
        self.pending = Some(id);
    }

    fn phase_duration(&self, phase: RoundPhase) -> Option<Duration> {
        let timing = &self.config.timing;
        match phase {
            RoundPhase::Showing => Some(timing.show_duration(self.session.current_length())),
            RoundPhase::Paused => Some(timing.pause()),
            RoundPhase::ShowingResult => Some(timing.result_dwell()),
            RoundPhase::AwaitingAnswer => None,
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.pending.take() {
            if self.scheduler.cancel(id) {
                debug!(timer = %id, "timer cancelled");
            }
        }
    }

    fn cancel_all(&mut self) -> usize {
        self.pending = None;
        self.scheduler.cancel_all()
    }

    fn render(&mut self) {
        if let Some(view) = self.view() {
            self.renderer.render(&view);
        }
    }
}
