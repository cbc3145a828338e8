//! Aggregate statistics across sessions.
//!
//! Counters are stored as base-10 strings under fixed keys. Storage trouble
//! never reaches the caller: a failed or garbled read counts as `0` and a
//! failed write is dropped, both with a warning.

use log::warn;
use serde::Serialize;

use crate::kv::KeyValueStore;

pub const TOTAL_GAMES_KEY: &str = "totalGames";
pub const TOTAL_WINS_KEY: &str = "totalWins";
pub const BEST_SCORE_KEY: &str = "bestScore";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatsSummary {
    pub total_games: u64,
    pub total_wins: u64,
    pub best_score: u64,
}

impl StatsSummary {
    /// Wins as a percentage of games, 0 when nothing was played
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.total_wins as f64 * 100.0 / self.total_games as f64
        }
    }
}

pub struct Statistics<S> {
    store: S,
}

impl<S: KeyValueStore> Statistics<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn read(&self, key: &str) -> u64 {
        match self.store.get(key) {
            Ok(None) => 0,
            Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("statistic {} holds {:?}, reading as 0", key, raw);
                0
            }),
            Err(e) => {
                warn!("failed to read statistic {}: {}", key, e);
                0
            }
        }
    }

    fn write(&mut self, key: &str, value: u64) {
        if let Err(e) = self.store.set(key, &value.to_string()) {
            warn!("failed to write statistic {}: {}", key, e);
        }
    }

    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            total_games: self.read(TOTAL_GAMES_KEY),
            total_wins: self.read(TOTAL_WINS_KEY),
            best_score: self.read(BEST_SCORE_KEY),
        }
    }

    /// Count a finished game; `score` only matters for wins
    pub fn record(&mut self, won: bool, score: u32) -> StatsSummary {
        let mut summary = self.summary();

        summary.total_games += 1;
        self.write(TOTAL_GAMES_KEY, summary.total_games);

        if won {
            summary.total_wins += 1;
            self.write(TOTAL_WINS_KEY, summary.total_wins);

            if u64::from(score) > summary.best_score {
                summary.best_score = u64::from(score);
                self.write(BEST_SCORE_KEY, summary.best_score);
            }
        }

        summary
    }
}
