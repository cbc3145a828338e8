//! Codebreaker (workspace facade crate).
//!
//! Re-exports the workspace crates as `codebreaker::{core,runtime,store,term,types}`
//! and hosts [`Records`], the glue that turns finished games into persisted
//! statistics and leaderboard entries.

pub mod records;

pub use codebreaker_core as core;
pub use codebreaker_runtime as runtime;
pub use codebreaker_store as store;
pub use codebreaker_term as term;
pub use codebreaker_types as types;

pub use records::{RecordedGame, Records};
