//! Runtime module - drives the engine on tokio
//!
//! The core engine is synchronous and knows nothing about time. This crate
//! gives it a real clock and a command queue:
//!
//! 1. **Engine task**: one spawned task owns the `GameEngine`
//! 2. **Commands**: [`EngineHandle`] sends requests over an mpsc channel and
//!    awaits the typed result on a oneshot
//! 3. **Countdown**: [`TokioScheduler`] spawns a one-second interval per
//!    countdown whose ticks re-enter the same channel
//! 4. **Events**: notifications are forwarded to an unbounded receiver
//!
//! # Environment Variables
//!
//! See [`GameConfig::from_env`].

pub mod config;
pub mod runtime;
pub mod scheduler;

pub use codebreaker_core as core;
pub use codebreaker_types as types;

pub use config::GameConfig;
pub use runtime::{ChannelObserver, EngineHandle, EngineRuntime};
pub use scheduler::TokioScheduler;
