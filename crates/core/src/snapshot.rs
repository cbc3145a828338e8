use serde::Serialize;

use crate::state::GuessRecord;
use crate::types::{Difficulty, OutcomeKind};

/// Read-only copy of the game state handed to the presentation layer.
///
/// `secret` holds the masked placeholder while the game is running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub secret: String,
    pub attempts: u32,
    pub max_attempts: u32,
    pub hints_used: u32,
    pub max_hints: u32,
    pub difficulty: Difficulty,
    pub game_over: bool,
    pub outcome: Option<OutcomeKind>,
    /// Newest first
    pub guesses: Vec<GuessRecord>,
    pub timer_mode: bool,
    pub timer_duration: u32,
    pub time_left: u32,
    pub started_at_ms: u64,
}

impl GameSnapshot {
    pub fn attempts_left(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts)
    }

    pub fn hints_left(&self) -> u32 {
        self.max_hints.saturating_sub(self.hints_used)
    }

    /// Whole seconds since the game started
    pub fn elapsed_secs(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.started_at_ms) / 1000
    }
}
