//! Game state module - the data of the one live game
//!
//! `GameState` is plain data owned by the engine. The engine decides when a
//! field changes; this module only keeps the bookkeeping consistent (record
//! numbering, newest-first history, redacted snapshots).

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::analysis::Feedback;
use crate::code::Code;
use crate::snapshot::GameSnapshot;
use crate::types::{Difficulty, OutcomeKind, MASKED_SECRET};

/// Wall-clock time in milliseconds since the Unix epoch
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// One validated guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GuessRecord {
    /// 1-based position in this game
    pub attempt_number: u32,
    pub sequence: Code,
    pub exact: u8,
    pub partial: u8,
    /// Display only
    pub timestamp_ms: u64,
}

/// Complete state of the live game. Never leaves the crate; callers see
/// [`GameSnapshot`]s.
#[derive(Debug, Clone)]
pub(crate) struct GameState {
    pub(crate) secret: Code,
    pub(crate) attempts: u32,
    pub(crate) max_attempts: u32,
    pub(crate) hints_used: u32,
    pub(crate) max_hints: u32,
    pub(crate) difficulty: Difficulty,
    pub(crate) game_over: bool,
    pub(crate) outcome: Option<OutcomeKind>,
    /// Newest first
    pub(crate) guesses: VecDeque<GuessRecord>,
    pub(crate) timer_mode: bool,
    pub(crate) timer_duration: u32,
    pub(crate) time_left: u32,
    pub(crate) started_at_ms: u64,
}

impl GameState {
    /// Fresh game with budgets taken from `difficulty`
    pub(crate) fn new(
        secret: Code,
        difficulty: Difficulty,
        timer_mode: bool,
        timer_duration: u32,
    ) -> Self {
        Self {
            secret,
            attempts: 0,
            max_attempts: difficulty.max_attempts(),
            hints_used: 0,
            max_hints: difficulty.max_hints(),
            difficulty,
            game_over: false,
            outcome: None,
            guesses: VecDeque::new(),
            timer_mode,
            timer_duration,
            time_left: timer_duration,
            started_at_ms: now_ms(),
        }
    }

    pub(crate) fn attempts_exhausted(&self) -> bool {
        self.attempts >= self.max_attempts
    }

    pub(crate) fn hints_exhausted(&self) -> bool {
        self.hints_used >= self.max_hints
    }

    /// Count a guess and put its record at the front of the history
    pub(crate) fn record_guess(&mut self, sequence: Code, feedback: Feedback) -> GuessRecord {
        self.attempts += 1;
        let record = GuessRecord {
            attempt_number: self.attempts,
            sequence,
            exact: feedback.exact,
            partial: feedback.partial,
            timestamp_ms: now_ms(),
        };
        self.guesses.push_front(record);
        record
    }

    pub(crate) fn finish(&mut self, outcome: OutcomeKind) {
        self.game_over = true;
        self.outcome = Some(outcome);
    }

    /// Copy out the state, masking the secret until the game is over
    pub(crate) fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            secret: if self.game_over {
                self.secret.to_string()
            } else {
                MASKED_SECRET.to_string()
            },
            attempts: self.attempts,
            max_attempts: self.max_attempts,
            hints_used: self.hints_used,
            max_hints: self.max_hints,
            difficulty: self.difficulty,
            game_over: self.game_over,
            outcome: self.outcome,
            guesses: self.guesses.iter().copied().collect(),
            timer_mode: self.timer_mode,
            timer_duration: self.timer_duration,
            time_left: self.time_left,
            started_at_ms: self.started_at_ms,
        }
    }
}
