//! Terminal presentation layer.
//!
//! A small line-oriented front end for the engine: views map snapshots and
//! events to styled [`Line`]s, and [`TerminalRenderer`] writes them out
//! with crossterm.
//!
//! Goals:
//! - Keep `core` free of any display concern
//! - Keep views pure so their output can be asserted as plain text
//! - Degrade to plain text when color is off

pub mod game_view;
pub mod renderer;
pub mod text;

pub use codebreaker_core as core;
pub use codebreaker_store as store;
pub use codebreaker_types as types;

pub use game_view::{format_time, GameView};
pub use renderer::{encode_line_into, TerminalRenderer};
pub use text::{Line, Span};
