//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond parsing and lookup, which
//! makes them usable in any context (core logic, rendering, persistence).
//!
//! # Code Shape
//!
//! - **Length**: 4 decimal digits, `0000`-`9999`, leading zeros preserved
//! - **Masked form**: `****` while a game is still running
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_SCORE` | 1000 | Starting score for a won game |
//! | `ATTEMPT_PENALTY` | 50 | Deducted per attempt used |
//! | `HINT_PENALTY` | 100 | Deducted per hint used |
//! | `TIME_BONUS_PER_SECOND` | 10 | Added per second left in timer mode |
//! | `MIN_SCORE` | 100 | Floor applied to every score |
//!
//! # Difficulty Budgets
//!
//! | Difficulty | Attempts | Hints |
//! |------------|----------|-------|
//! | easy | 6 | 5 |
//! | medium | 15 | 3 |
//! | hard | 15 | 0 |
//!
//! # Examples
//!
//! ```
//! use codebreaker_types::{Difficulty, PlayerCommand, CODE_LENGTH};
//!
//! let level = Difficulty::from_str("Hard").unwrap();
//! assert_eq!(level.max_attempts(), 15);
//! assert_eq!(level.max_hints(), 0);
//!
//! assert_eq!(PlayerCommand::parse("guess 1234"), Some(PlayerCommand::Guess("1234".into())));
//! assert_eq!(CODE_LENGTH, 4);
//! ```

use serde::{Deserialize, Serialize};

/// Number of digits in a code
pub const CODE_LENGTH: usize = 4;

/// Placeholder shown instead of the secret while a game is running
pub const MASKED_SECRET: &str = "****";

/// Countdown length used when timer mode is enabled without a duration
pub const DEFAULT_TIMER_SECONDS: u32 = 60;

/// Countdown tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Score before any penalty or bonus
pub const BASE_SCORE: u32 = 1000;

/// Points deducted for every attempt used
pub const ATTEMPT_PENALTY: u32 = 50;

/// Points deducted for every hint used
pub const HINT_PENALTY: u32 = 100;

/// Points added per second left on the countdown
pub const TIME_BONUS_PER_SECOND: u32 = 10;

/// Lowest score a finished game can report
pub const MIN_SCORE: u32 = 100;

/// Named preset controlling the attempt and hint budgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parse difficulty from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use codebreaker_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("MEDIUM"), Some(Difficulty::Medium));
    /// assert_eq!(Difficulty::from_str("nightmare"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Number of guesses allowed per game
    pub fn max_attempts(&self) -> u32 {
        match self {
            Difficulty::Easy => 6,
            Difficulty::Medium => 15,
            Difficulty::Hard => 15,
        }
    }

    /// Number of hints allowed per game
    pub fn max_hints(&self) -> u32 {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 3,
            Difficulty::Hard => 0,
        }
    }
}

/// How a game ended
///
/// `Attempts` is reported only by the guard that catches a guess arriving
/// after the attempt budget was already spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Win,
    Lose,
    Timeout,
    Attempts,
}

impl OutcomeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::Win => "win",
            OutcomeKind::Lose => "lose",
            OutcomeKind::Timeout => "timeout",
            OutcomeKind::Attempts => "attempts",
        }
    }
}

/// Commands a player can type at the prompt
///
/// Engine commands carry their raw arguments: validating a guess or a level
/// name is the engine's job, not the parser's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Start a new game with the current settings
    NewGame,
    /// Submit a guess
    Guess(String),
    /// Reveal one digit of the secret
    Hint,
    /// Switch difficulty (starts a new game)
    Difficulty(String),
    /// Enable or disable timer mode (starts a new game)
    Timer { enabled: bool, seconds: Option<u32> },
    /// Print aggregate statistics
    Stats,
    /// Print the top `n` leaderboard entries, optionally for one difficulty
    Top {
        difficulty: Option<Difficulty>,
        n: Option<usize>,
    },
    /// Print the current game state
    State,
    Help,
    Quit,
}

impl PlayerCommand {
    /// Parse one input line
    ///
    /// A bare token that is not a known keyword is treated as a guess, so
    /// players can just type `1234`.
    ///
    /// # Examples
    ///
    /// ```
    /// use codebreaker_types::PlayerCommand;
    ///
    /// assert_eq!(PlayerCommand::parse("0042"), Some(PlayerCommand::Guess("0042".into())));
    /// assert_eq!(PlayerCommand::parse("timer on 30"),
    ///     Some(PlayerCommand::Timer { enabled: true, seconds: Some(30) }));
    /// assert_eq!(PlayerCommand::parse(""), None);
    /// ```
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let head = parts.next()?;
        let arg = parts.next();

        match head.to_lowercase().as_str() {
            "new" | "reset" | "restart" => Some(PlayerCommand::NewGame),
            "guess" | "g" => Some(PlayerCommand::Guess(arg.unwrap_or("").to_string())),
            "hint" | "h" => Some(PlayerCommand::Hint),
            "difficulty" | "level" => arg.map(|a| PlayerCommand::Difficulty(a.to_string())),
            "timer" => match arg.map(|a| a.to_lowercase()).as_deref() {
                Some("on") => Some(PlayerCommand::Timer {
                    enabled: true,
                    seconds: parts.next().and_then(|s| s.parse().ok()),
                }),
                Some("off") => Some(PlayerCommand::Timer {
                    enabled: false,
                    seconds: None,
                }),
                _ => None,
            },
            "stats" => Some(PlayerCommand::Stats),
            "top" | "leaderboard" => {
                let difficulty = arg.and_then(Difficulty::from_str);
                let count = if difficulty.is_some() { parts.next() } else { arg };
                Some(PlayerCommand::Top {
                    difficulty,
                    n: count.and_then(|a| a.parse().ok()),
                })
            }
            "state" | "status" => Some(PlayerCommand::State),
            "help" | "?" => Some(PlayerCommand::Help),
            "quit" | "exit" | "q" => Some(PlayerCommand::Quit),
            _ if arg.is_none() => Some(PlayerCommand::Guess(head.to_string())),
            _ => None,
        }
    }
}
