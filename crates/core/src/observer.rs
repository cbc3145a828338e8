//! Notifications published by the engine.
//!
//! The engine owns exactly one observer and calls it synchronously, so
//! notifications arrive in the order the state changed and the notifications
//! of one command never interleave with another's.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::code::Code;
use crate::snapshot::GameSnapshot;
use crate::types::OutcomeKind;

/// Payload of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum GameEnd {
    Win { attempts: u32, score: u32 },
    Lose { secret: Code },
    Timeout,
    #[serde(rename = "attempts")]
    AttemptsExhausted,
}

impl GameEnd {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            GameEnd::Win { .. } => OutcomeKind::Win,
            GameEnd::Lose { .. } => OutcomeKind::Lose,
            GameEnd::Timeout => OutcomeKind::Timeout,
            GameEnd::AttemptsExhausted => OutcomeKind::Attempts,
        }
    }
}

/// One notification, in the shape of the three observer callbacks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    StateChanged { state: GameSnapshot },
    TimerTick { seconds_left: u32 },
    GameEnded { end: GameEnd },
}

/// Receiver of engine notifications
pub trait GameObserver: Send {
    fn on_state_change(&mut self, state: &GameSnapshot);

    fn on_timer_tick(&mut self, _seconds_left: u32) {}

    fn on_game_end(&mut self, _end: &GameEnd) {}
}

/// Observer installed before `initialize`
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn on_state_change(&mut self, _state: &GameSnapshot) {}
}

/// Records every notification; clones share the same log.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn with<R>(&self, f: impl FnOnce(&mut Vec<GameEvent>) -> R) -> R {
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut events)
    }

    fn push(&self, event: GameEvent) {
        self.with(|events| events.push(event));
    }

    /// Copy of everything recorded so far
    pub fn events(&self) -> Vec<GameEvent> {
        self.with(|events| events.clone())
    }

    /// Drain the log
    pub fn take(&self) -> Vec<GameEvent> {
        self.with(std::mem::take)
    }

    pub fn len(&self) -> usize {
        self.with(|events| events.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn game_ends(&self) -> Vec<GameEnd> {
        self.with(|events| {
            events
                .iter()
                .filter_map(|e| match e {
                    GameEvent::GameEnded { end } => Some(*end),
                    _ => None,
                })
                .collect()
        })
    }

    pub fn ticks(&self) -> Vec<u32> {
        self.with(|events| {
            events
                .iter()
                .filter_map(|e| match e {
                    GameEvent::TimerTick { seconds_left } => Some(*seconds_left),
                    _ => None,
                })
                .collect()
        })
    }

    pub fn last_state(&self) -> Option<GameSnapshot> {
        self.with(|events| {
            events.iter().rev().find_map(|e| match e {
                GameEvent::StateChanged { state } => Some(state.clone()),
                _ => None,
            })
        })
    }
}

impl GameObserver for EventLog {
    fn on_state_change(&mut self, state: &GameSnapshot) {
        self.push(GameEvent::StateChanged {
            state: state.clone(),
        });
    }

    fn on_timer_tick(&mut self, seconds_left: u32) {
        self.push(GameEvent::TimerTick { seconds_left });
    }

    fn on_game_end(&mut self, end: &GameEnd) {
        self.push(GameEvent::GameEnded { end: *end });
    }
}
