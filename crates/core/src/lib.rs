//! Codebreaker rules and engine - no I/O, reproducible under a seed
//!
//! This crate contains the code-breaking rules, the game state, and the
//! engine that drives a game from reset to win, loss, or timeout. It has
//! **no dependencies** on rendering, terminals, async runtimes, or storage:
//!
//! - **Deterministic**: a fixed seed produces identical secrets and hints
//! - **Testable**: the countdown is injected, so tests step the clock by hand
//! - **Portable**: the same engine runs under tokio, a test harness, or a UI loop
//!
//! # Module Structure
//!
//! - [`code`]: the 4-digit `Code` type shared by secrets and guesses
//! - [`analysis`]: exact/partial matching with duplicate-digit handling
//! - [`scoring`]: score from attempts, hints, and time left
//! - [`rng`]: seedable LCG used for secrets and hint positions
//! - [`state`]: the live game's data and `GuessRecord`
//! - [`snapshot`]: redacted read-only copies for the presentation layer
//! - [`observer`]: notification trait and event types
//! - [`schedule`]: countdown scheduler seam
//! - [`engine`]: `GameEngine`, the command/query API
//! - [`error`]: `GameError`
//!
//! # Example
//!
//! ```
//! use codebreaker_core::{EngineConfig, EventLog, GameEngine, ManualScheduler};
//! use codebreaker_core::types::Difficulty;
//!
//! let config = EngineConfig { difficulty: Difficulty::Easy, seed: Some(42), ..EngineConfig::default() };
//! let mut engine = GameEngine::new(config, Box::new(ManualScheduler::new()));
//! let log = EventLog::new();
//! let state = engine.initialize(Box::new(log.clone()));
//! assert_eq!(state.secret, "****");
//!
//! let report = engine.make_guess("1234").unwrap();
//! assert_eq!(report.attempt, 1);
//! assert!(engine.make_guess("12x4").is_err());
//! ```

pub mod analysis;
pub mod code;
pub mod engine;
pub mod error;
pub mod observer;
pub mod rng;
pub mod schedule;
pub mod scoring;
pub mod snapshot;
pub mod state;

pub use codebreaker_types as types;

// Re-export commonly used types for convenience
pub use analysis::{analyze, Feedback};
pub use code::Code;
pub use engine::{EngineConfig, GameEngine, GuessOutcome, GuessReport, Hint};
pub use error::{GameError, GameResult};
pub use observer::{EventLog, GameEnd, GameEvent, GameObserver, NullObserver};
pub use rng::SimpleRng;
pub use schedule::{Generation, ManualScheduler, Scheduler, TimerHandle};
pub use scoring::{calculate_score, time_bonus};
pub use snapshot::GameSnapshot;
pub use state::{now_ms, GuessRecord};
