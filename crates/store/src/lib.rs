//! Persisted records - statistics and leaderboard
//!
//! Both collaborators sit on a [`KeyValueStore`] and keep their own failures
//! to themselves: a broken or missing store degrades to empty records with a
//! logged warning and never reaches the game.
//!
//! - [`kv`]: the store trait, an in-memory store, and a JSON file store
//! - [`stats`]: `totalGames` / `totalWins` / `bestScore` counters
//! - [`leaderboard`]: ranked score entries of won games

pub mod kv;
pub mod leaderboard;
pub mod stats;

pub use codebreaker_types as types;

pub use kv::{FileStore, KeyValueStore, MemoryStore, StoreError, StoreResult};
pub use leaderboard::{Leaderboard, ScoreEntry, DEFAULT_CAPACITY};
pub use stats::{Statistics, StatsSummary};
