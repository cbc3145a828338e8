//! Game configuration from environment variables.

use std::path::PathBuf;

use log::warn;

use codebreaker_core::EngineConfig;
use codebreaker_types::{Difficulty, DEFAULT_TIMER_SECONDS};

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub timer_mode: bool,
    pub timer_seconds: u32,
    pub seed: Option<u32>,
    /// Directory holding statistics and leaderboard files
    pub data_dir: PathBuf,
    /// Name recorded on leaderboard entries
    pub player: String,
    /// Default number of leaderboard rows to show
    pub top_n: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            timer_mode: false,
            timer_seconds: DEFAULT_TIMER_SECONDS,
            seed: None,
            data_dir: PathBuf::from(".codebreaker"),
            player: "player".to_string(),
            top_n: 10,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// - `CODEBREAKER_DIFFICULTY`: `easy`, `medium`, or `hard`
    /// - `CODEBREAKER_TIMER`: `1` or `true` enables timer mode
    /// - `CODEBREAKER_TIMER_SECONDS`: countdown length
    /// - `CODEBREAKER_SEED`: fixed RNG seed
    /// - `CODEBREAKER_DATA_DIR`: where records are stored
    /// - `CODEBREAKER_PLAYER`: leaderboard name
    /// - `CODEBREAKER_TOP_N`: leaderboard rows shown by default
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let difficulty = match var("CODEBREAKER_DIFFICULTY") {
            Some(name) => Difficulty::from_str(&name).unwrap_or_else(|| {
                warn!("CODEBREAKER_DIFFICULTY={:?} is not a difficulty", name);
                defaults.difficulty
            }),
            None => defaults.difficulty,
        };

        let timer_mode = var("CODEBREAKER_TIMER")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(defaults.timer_mode);

        Self {
            difficulty,
            timer_mode,
            timer_seconds: parse_or(
                var("CODEBREAKER_TIMER_SECONDS"),
                "CODEBREAKER_TIMER_SECONDS",
                defaults.timer_seconds,
            ),
            seed: var("CODEBREAKER_SEED").and_then(|s| {
                let seed = s.parse().ok();
                if seed.is_none() {
                    warn!("CODEBREAKER_SEED={:?} is not a number", s);
                }
                seed
            }),
            data_dir: var("CODEBREAKER_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            player: var("CODEBREAKER_PLAYER").unwrap_or(defaults.player),
            top_n: parse_or(var("CODEBREAKER_TOP_N"), "CODEBREAKER_TOP_N", defaults.top_n),
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            difficulty: self.difficulty,
            timer_mode: self.timer_mode,
            timer_duration: self.timer_seconds,
            seed: self.seed,
        }
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, key: &str, default: T) -> T {
    match value {
        Some(s) => s.parse().unwrap_or_else(|_| {
            warn!("{}={:?} is not a number, using default", key, s);
            default
        }),
        None => default,
    }
}
