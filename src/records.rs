//! Records: statistics and leaderboard updates driven by engine events.
//!
//! The engine never touches storage. The application feeds every event it
//! receives through [`Records::observe`]; state changes are remembered so the
//! game-end event can be turned into a full score entry.

use std::path::Path;

use log::info;

use crate::core::{GameEnd, GameEvent, GameSnapshot};
use crate::store::{FileStore, KeyValueStore, Leaderboard, ScoreEntry, Statistics, StatsSummary};
use crate::types::Difficulty;

pub const STATS_FILE: &str = "stats.json";
pub const LEADERBOARD_FILE: &str = "leaderboard.json";

/// What recording a finished game produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedGame {
    pub summary: StatsSummary,
    /// Leaderboard rank of a won game, `None` for losses or when it missed the table
    pub rank: Option<usize>,
}

pub struct Records<S> {
    stats: Statistics<S>,
    leaderboard: Leaderboard<S>,
    player: String,
    last_state: Option<GameSnapshot>,
}

impl Records<FileStore> {
    /// Records kept as JSON files under `dir`
    pub fn open(dir: &Path, player: &str) -> Self {
        Self::new(
            FileStore::new(dir.join(STATS_FILE)),
            FileStore::new(dir.join(LEADERBOARD_FILE)),
            player,
        )
    }
}

impl<S: KeyValueStore> Records<S> {
    pub fn new(stats_store: S, leaderboard_store: S, player: &str) -> Self {
        Self {
            stats: Statistics::new(stats_store),
            leaderboard: Leaderboard::new(leaderboard_store),
            player: player.to_string(),
            last_state: None,
        }
    }

    pub fn summary(&self) -> StatsSummary {
        self.stats.summary()
    }

    /// Best `n` entries, across all levels or for one difficulty
    pub fn top(&self, difficulty: Option<Difficulty>, n: usize) -> Vec<ScoreEntry> {
        match difficulty {
            Some(difficulty) => self.leaderboard.top_for(difficulty, n),
            None => self.leaderboard.top(n),
        }
    }

    /// Feed one engine event; returns `Some` when a game was recorded
    pub fn observe(&mut self, event: &GameEvent, now_ms: u64) -> Option<RecordedGame> {
        match event {
            GameEvent::StateChanged { state } => {
                self.last_state = Some(state.clone());
                None
            }
            GameEvent::TimerTick { .. } => None,
            GameEvent::GameEnded { end } => Some(self.record(end, now_ms)),
        }
    }

    fn record(&mut self, end: &GameEnd, now_ms: u64) -> RecordedGame {
        let GameEnd::Win { attempts, score } = *end else {
            return RecordedGame {
                summary: self.stats.record(false, 0),
                rank: None,
            };
        };

        let summary = self.stats.record(true, score);
        let rank = self.last_state.as_ref().and_then(|state| {
            self.leaderboard.submit(ScoreEntry {
                player: self.player.clone(),
                score,
                attempts,
                time_secs: state.elapsed_secs(now_ms),
                difficulty: state.difficulty,
                hints_used: state.hints_used,
                won: true,
                recorded_at_ms: now_ms,
            })
        });

        info!("recorded win for {}: {} points, rank {:?}", self.player, score, rank);
        RecordedGame { summary, rank }
    }
}
