//! Game engine - the command/query surface over the live game
//!
//! The engine is a synchronous state machine. Commands run to completion,
//! publish their notifications to the observer, and return a typed result.
//! The only outside activity is the countdown, which reaches the engine as
//! `tick(generation)` calls from whatever drives the [`Scheduler`].
//!
//! Lifecycle: `new → initialize(observer) → commands → dispose`. Dropping the
//! engine disposes it.

use log::{debug, info, warn};

use crate::analysis::{analyze, Feedback};
use crate::code::Code;
use crate::error::{GameError, GameResult};
use crate::observer::{GameEnd, GameObserver, NullObserver};
use crate::rng::SimpleRng;
use crate::schedule::{Generation, Scheduler, TimerHandle};
use crate::scoring::{calculate_score, time_bonus};
use crate::snapshot::GameSnapshot;
use crate::state::GameState;
use crate::types::{Difficulty, OutcomeKind, DEFAULT_TIMER_SECONDS};

/// Settings the engine starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub difficulty: Difficulty,
    pub timer_mode: bool,
    pub timer_duration: u32,
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            timer_mode: false,
            timer_duration: DEFAULT_TIMER_SECONDS,
            seed: None,
        }
    }
}

/// What a valid guess did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Game goes on
    Continue,
    /// Code cracked
    Won { score: u32 },
    /// Last attempt used without cracking the code
    Lost { secret: Code },
}

/// Successful `make_guess` result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    /// 1-based attempt number of this guess
    pub attempt: u32,
    pub feedback: Feedback,
    pub outcome: GuessOutcome,
    /// Score as of this guess
    pub score: u32,
    pub message: String,
}

/// Successful `use_hint` result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    /// 1-based position
    pub position: usize,
    pub digit: u8,
    pub remaining: u32,
    pub message: String,
}

struct Countdown {
    generation: Generation,
    handle: Box<dyn TimerHandle>,
}

/// The game engine
pub struct GameEngine {
    state: GameState,
    rng: SimpleRng,
    observer: Box<dyn GameObserver>,
    scheduler: Box<dyn Scheduler>,
    countdown: Option<Countdown>,
    last_generation: Generation,
}

impl GameEngine {
    /// Build an engine holding a fresh, unannounced game.
    ///
    /// No countdown runs and nothing is published until [`initialize`](Self::initialize).
    pub fn new(config: EngineConfig, scheduler: Box<dyn Scheduler>) -> Self {
        let mut rng = config
            .seed
            .map(SimpleRng::new)
            .unwrap_or_else(SimpleRng::from_clock);
        let state = GameState::new(
            rng.next_code(),
            config.difficulty,
            config.timer_mode,
            config.timer_duration,
        );

        Self {
            state,
            rng,
            observer: Box::new(NullObserver),
            scheduler,
            countdown: None,
            last_generation: 0,
        }
    }

    /// Install the observer and start the first game
    pub fn initialize(&mut self, observer: Box<dyn GameObserver>) -> GameSnapshot {
        self.observer = observer;
        self.reset();
        self.state()
    }

    /// Start a new game with the current difficulty and timer settings
    pub fn reset(&mut self) {
        self.state = GameState::new(
            self.rng.next_code(),
            self.state.difficulty,
            self.state.timer_mode,
            self.state.timer_duration,
        );
        let timer_mode = self.state.timer_mode;
        self.replace_countdown(timer_mode);

        info!(
            "new game: difficulty={} attempts={} hints={} timer={}",
            self.state.difficulty.as_str(),
            self.state.max_attempts,
            self.state.max_hints,
            if timer_mode {
                format!("{}s", self.state.timer_duration)
            } else {
                "off".to_string()
            }
        );
        self.emit_state();
    }

    /// Switch difficulty by name. Unknown names are ignored.
    ///
    /// Returns whether the level was applied.
    pub fn set_difficulty(&mut self, level: &str) -> bool {
        match Difficulty::from_str(level) {
            Some(difficulty) => {
                self.apply_difficulty(difficulty);
                true
            }
            None => {
                warn!("ignoring unknown difficulty {:?}", level);
                false
            }
        }
    }

    /// Switch difficulty and start a new game
    pub fn apply_difficulty(&mut self, difficulty: Difficulty) {
        self.state.difficulty = difficulty;
        self.state.max_attempts = difficulty.max_attempts();
        self.state.max_hints = difficulty.max_hints();
        self.reset();
    }

    /// Turn timer mode on or off and start a new game.
    ///
    /// `duration` defaults to [`DEFAULT_TIMER_SECONDS`].
    pub fn set_timer_mode(&mut self, enabled: bool, duration: Option<u32>) {
        self.state.timer_mode = enabled;
        self.state.timer_duration = duration.unwrap_or(DEFAULT_TIMER_SECONDS);
        self.replace_countdown(false);
        self.reset();
    }

    /// Submit a guess
    pub fn make_guess(&mut self, input: &str) -> GameResult<GuessReport> {
        if self.state.game_over {
            if self.state.outcome == Some(OutcomeKind::Lose) && self.state.attempts_exhausted() {
                return Err(GameError::AttemptsExhausted);
            }
            return Err(GameError::GameOver);
        }

        if self.state.attempts_exhausted() {
            self.end_game(GameEnd::AttemptsExhausted);
            self.emit_state();
            return Err(GameError::AttemptsExhausted);
        }

        let guess = Code::parse(input).ok_or(GameError::InvalidFormat)?;
        let feedback = analyze(&self.state.secret, &guess);
        let record = self.state.record_guess(guess, feedback);
        let score = self.calculate_score(record.attempt_number, feedback.exact);

        debug!(
            "guess #{} {}: exact={} partial={}",
            record.attempt_number, guess, feedback.exact, feedback.partial
        );

        let (outcome, message) = if feedback.is_solved() {
            self.end_game(GameEnd::Win {
                attempts: record.attempt_number,
                score,
            });
            (
                GuessOutcome::Won { score },
                format!(
                    "Cracked it in {} attempts! Score: {}",
                    record.attempt_number, score
                ),
            )
        } else if self.state.attempts_exhausted() {
            let secret = self.state.secret;
            self.end_game(GameEnd::Lose { secret });
            (
                GuessOutcome::Lost { secret },
                format!(
                    "{} exact, {} partial. Out of attempts! The code was {}.",
                    feedback.exact, feedback.partial, secret
                ),
            )
        } else {
            (
                GuessOutcome::Continue,
                format!(
                    "{} exact, {} partial. {} attempts left.",
                    feedback.exact,
                    feedback.partial,
                    self.state.max_attempts - self.state.attempts
                ),
            )
        };

        self.emit_state();
        Ok(GuessReport {
            attempt: record.attempt_number,
            feedback,
            outcome,
            score,
            message,
        })
    }

    /// Reveal the digit at a random position.
    ///
    /// Positions are drawn independently, so the same one can come up twice.
    pub fn use_hint(&mut self) -> GameResult<Hint> {
        if self.state.game_over {
            return Err(GameError::GameOver);
        }
        if self.state.hints_exhausted() {
            return Err(GameError::NoHintsRemaining);
        }

        self.state.hints_used += 1;
        let index = self.rng.next_position();
        let digit = self.state.secret.digits()[index];
        let remaining = self.state.max_hints - self.state.hints_used;
        debug!("hint: position {} ({} left)", index + 1, remaining);

        self.emit_state();
        Ok(Hint {
            position: index + 1,
            digit,
            remaining,
            message: format!(
                "Digit at position {} is {} ({} hints left)",
                index + 1,
                digit,
                remaining
            ),
        })
    }

    /// Score for a game won at `attempts_used` with the current hints and clock.
    ///
    /// `_exact_matches` is accepted for call-site compatibility; it does not
    /// affect the score.
    pub fn calculate_score(&self, attempts_used: u32, _exact_matches: u8) -> u32 {
        calculate_score(
            attempts_used,
            self.state.hints_used,
            time_bonus(self.state.timer_mode, self.state.time_left),
        )
    }

    /// Deliver one countdown tick.
    ///
    /// Ticks for a schedule other than the running one are ignored. Returns
    /// whether the tick was applied.
    pub fn tick(&mut self, generation: Generation) -> bool {
        let current = self.countdown.as_ref().map(|c| c.generation);
        if current != Some(generation) || self.state.game_over {
            return false;
        }

        self.state.time_left = self.state.time_left.saturating_sub(1);
        let left = self.state.time_left;
        debug!("tick: {}s left", left);
        self.observer.on_timer_tick(left);

        if left == 0 {
            self.end_game(GameEnd::Timeout);
        }
        self.emit_state();
        true
    }

    /// Snapshot with the secret masked while the game runs
    pub fn state(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Stop the countdown. The engine can still answer queries.
    pub fn dispose(&mut self) {
        self.replace_countdown(false);
    }

    /// The only place a countdown is created or cancelled.
    ///
    /// Any running schedule is cancelled before a new one is requested, so at
    /// most one is ever live.
    fn replace_countdown(&mut self, start: bool) {
        if let Some(mut old) = self.countdown.take() {
            old.handle.cancel();
        }
        if start {
            self.last_generation += 1;
            let generation = self.last_generation;
            let handle = self.scheduler.start_countdown(generation);
            self.countdown = Some(Countdown { generation, handle });
        }
    }

    fn end_game(&mut self, end: GameEnd) {
        self.state.finish(end.kind());
        self.replace_countdown(false);
        info!(
            "game over: {} after {} attempts",
            end.kind().as_str(),
            self.state.attempts
        );
        self.observer.on_game_end(&end);
    }

    fn emit_state(&mut self) {
        let snapshot = self.state.snapshot();
        self.observer.on_state_change(&snapshot);
    }
}

impl Drop for GameEngine {
    fn drop(&mut self) {
        self.dispose();
    }
}
