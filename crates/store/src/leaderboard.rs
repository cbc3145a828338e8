//! Ranked table of won games.

use std::cmp::Ordering;

use log::warn;
use serde::{Deserialize, Serialize};

use codebreaker_types::Difficulty;

use crate::kv::{KeyValueStore, StoreError};

pub const LEADERBOARD_KEY: &str = "leaderboard";

/// Entries kept when no capacity is given
pub const DEFAULT_CAPACITY: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player: String,
    pub score: u32,
    pub attempts: u32,
    pub time_secs: u64,
    pub difficulty: Difficulty,
    pub hints_used: u32,
    pub won: bool,
    pub recorded_at_ms: u64,
}

/// Higher score first, then fewer attempts, then less time, then older entry
fn rank_order(a: &ScoreEntry, b: &ScoreEntry) -> Ordering {
    b.score
        .cmp(&a.score)
        .then(a.attempts.cmp(&b.attempts))
        .then(a.time_secs.cmp(&b.time_secs))
        .then(a.recorded_at_ms.cmp(&b.recorded_at_ms))
}

pub struct Leaderboard<S> {
    store: S,
    capacity: usize,
}

impl<S: KeyValueStore> Leaderboard<S> {
    pub fn new(store: S) -> Self {
        Self::with_capacity(store, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(store: S, capacity: usize) -> Self {
        Self {
            store,
            capacity: capacity.max(1),
        }
    }

    /// All stored entries in rank order
    pub fn entries(&self) -> Vec<ScoreEntry> {
        let raw = match self.store.get(LEADERBOARD_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("failed to read leaderboard: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<ScoreEntry>>(&raw) {
            Ok(mut entries) => {
                entries.sort_by(rank_order);
                entries
            }
            Err(e) => {
                warn!("leaderboard data is unreadable, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    fn save(&mut self, entries: &[ScoreEntry]) {
        let result = serde_json::to_string(entries)
            .map_err(StoreError::from)
            .and_then(|json| self.store.set(LEADERBOARD_KEY, &json));
        if let Err(e) = result {
            warn!("failed to write leaderboard: {}", e);
        }
    }

    /// Add an entry and return its 1-based rank.
    ///
    /// Returns `None` when the entry did not make the table.
    pub fn submit(&mut self, entry: ScoreEntry) -> Option<usize> {
        let mut entries = self.entries();
        let rank = entries
            .iter()
            .position(|e| rank_order(&entry, e) == Ordering::Less)
            .unwrap_or(entries.len());

        if rank >= self.capacity {
            return None;
        }

        entries.insert(rank, entry);
        entries.truncate(self.capacity);
        self.save(&entries);
        Some(rank + 1)
    }

    /// Best `n` entries
    pub fn top(&self, n: usize) -> Vec<ScoreEntry> {
        let mut entries = self.entries();
        entries.truncate(n);
        entries
    }

    /// Best entries for one difficulty
    pub fn top_for(&self, difficulty: Difficulty, n: usize) -> Vec<ScoreEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.difficulty == difficulty)
            .take(n)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    fn entry(player: &str, score: u32, attempts: u32, time_secs: u64) -> ScoreEntry {
        ScoreEntry {
            player: player.to_string(),
            score,
            attempts,
            time_secs,
            difficulty: Difficulty::Medium,
            hints_used: 0,
            won: true,
            recorded_at_ms: 0,
        }
    }

    #[test]
    fn ranks_by_score_then_attempts_then_time() {
        let mut board = Leaderboard::new(MemoryStore::new());
        board.submit(entry("a", 800, 4, 50));
        board.submit(entry("b", 900, 2, 70));
        board.submit(entry("c", 800, 3, 90));
        board.submit(entry("d", 800, 3, 40));

        let names: Vec<_> = board.top(10).into_iter().map(|e| e.player).collect();
        assert_eq!(names, vec!["b", "d", "c", "a"]);
    }

    #[test]
    fn submit_reports_rank() {
        let mut board = Leaderboard::new(MemoryStore::new());
        assert_eq!(board.submit(entry("a", 500, 5, 10)), Some(1));
        assert_eq!(board.submit(entry("b", 900, 2, 10)), Some(1));
        assert_eq!(board.submit(entry("c", 700, 3, 10)), Some(2));
        // ties go after existing entries
        assert_eq!(board.submit(entry("d", 700, 3, 10)), Some(3));
    }

    #[test]
    fn capacity_drops_the_tail() {
        let mut board = Leaderboard::with_capacity(MemoryStore::new(), 2);
        board.submit(entry("a", 500, 5, 10));
        board.submit(entry("b", 900, 2, 10));
        assert_eq!(board.submit(entry("c", 100, 9, 10)), None);
        assert_eq!(board.submit(entry("d", 950, 1, 10)), Some(1));

        let names: Vec<_> = board.entries().into_iter().map(|e| e.player).collect();
        assert_eq!(names, vec!["d", "b"]);
    }

    #[test]
    fn top_for_filters_difficulty() {
        let mut board = Leaderboard::new(MemoryStore::new());
        board.submit(ScoreEntry {
            difficulty: Difficulty::Hard,
            ..entry("h", 600, 8, 10)
        });
        board.submit(entry("m", 900, 2, 10));

        let hard = board.top_for(Difficulty::Hard, 5);
        assert_eq!(hard.len(), 1);
        assert_eq!(hard[0].player, "h");
    }

    #[test]
    fn unreadable_data_starts_empty() {
        let mut store = MemoryStore::new();
        store.set(LEADERBOARD_KEY, "[{\"oops\":").unwrap();
        let mut board = Leaderboard::new(store);
        assert!(board.entries().is_empty());

        assert_eq!(board.submit(entry("a", 500, 5, 10)), Some(1));
        assert_eq!(board.top(5).len(), 1);
    }
}
