//! Engine runtime integration.
//!
//! Runs a `GameEngine` inside one tokio task. Commands from any number of
//! [`EngineHandle`] clones and countdown ticks share a single channel, so the
//! engine sees one ordered stream and never runs two commands at once.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use log::debug;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use codebreaker_core::{
    EngineConfig, GameEnd, GameEngine, GameEvent, GameObserver, GameResult, GameSnapshot,
    Generation, GuessReport, Hint,
};
use codebreaker_types::TICK_INTERVAL_MS;

use crate::scheduler::TokioScheduler;

/// Message delivered to the engine task.
pub(crate) enum Request {
    Tick(Generation),
    Reset(oneshot::Sender<GameSnapshot>),
    SetDifficulty(String, oneshot::Sender<bool>),
    SetTimerMode {
        enabled: bool,
        seconds: Option<u32>,
        reply: oneshot::Sender<GameSnapshot>,
    },
    Guess(String, oneshot::Sender<GameResult<GuessReport>>),
    Hint(oneshot::Sender<GameResult<Hint>>),
    State(oneshot::Sender<GameSnapshot>),
    Shutdown,
}

/// Forwards notifications onto an unbounded channel.
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<GameEvent>,
}

impl ChannelObserver {
    pub fn new(tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        Self { tx }
    }

    fn send(&self, event: GameEvent) {
        if self.tx.send(event).is_err() {
            debug!("event receiver dropped");
        }
    }
}

impl GameObserver for ChannelObserver {
    fn on_state_change(&mut self, state: &GameSnapshot) {
        self.send(GameEvent::StateChanged {
            state: state.clone(),
        });
    }

    fn on_timer_tick(&mut self, seconds_left: u32) {
        self.send(GameEvent::TimerTick { seconds_left });
    }

    fn on_game_end(&mut self, end: &GameEnd) {
        self.send(GameEvent::GameEnded { end: *end });
    }
}

/// Cloneable command surface of a running engine.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    tx: mpsc::UnboundedSender<Request>,
}

impl EngineHandle {
    async fn call<T>(&self, request: impl FnOnce(oneshot::Sender<T>) -> Request) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(request(reply_tx))
            .map_err(|_| anyhow!("engine task is not running"))?;
        reply_rx.await.context("engine task dropped the request")
    }

    pub async fn reset(&self) -> Result<GameSnapshot> {
        self.call(Request::Reset).await
    }

    /// Returns `false` when the level name is unknown (nothing changes)
    pub async fn set_difficulty(&self, level: &str) -> Result<bool> {
        let level = level.to_string();
        self.call(|reply| Request::SetDifficulty(level, reply)).await
    }

    pub async fn set_timer_mode(&self, enabled: bool, seconds: Option<u32>) -> Result<GameSnapshot> {
        self.call(|reply| Request::SetTimerMode {
            enabled,
            seconds,
            reply,
        })
        .await
    }

    pub async fn make_guess(&self, input: &str) -> Result<GameResult<GuessReport>> {
        let input = input.to_string();
        self.call(|reply| Request::Guess(input, reply)).await
    }

    pub async fn use_hint(&self) -> Result<GameResult<Hint>> {
        self.call(Request::Hint).await
    }

    pub async fn state(&self) -> Result<GameSnapshot> {
        self.call(Request::State).await
    }

    /// Ask the engine task to stop after the requests already queued
    pub fn shutdown(&self) {
        let _ = self.tx.send(Request::Shutdown);
    }
}

/// Running engine task.
pub struct EngineRuntime {
    handle: EngineHandle,
    events: Option<mpsc::UnboundedReceiver<GameEvent>>,
    task: JoinHandle<()>,
}

impl EngineRuntime {
    /// Spawn the engine on the current tokio runtime.
    ///
    /// The first event on the stream is the initial `StateChanged`.
    pub fn spawn(config: EngineConfig) -> Self {
        Self::spawn_with_period(config, Duration::from_millis(TICK_INTERVAL_MS))
    }

    /// Spawn with a custom countdown period
    pub fn spawn_with_period(config: EngineConfig, period: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<Request>();
        let (events_tx, events_rx) = mpsc::unbounded_channel::<GameEvent>();
        let scheduler = TokioScheduler::new(tx.downgrade(), period);

        let task = tokio::spawn(run_engine(config, scheduler, rx, events_tx));

        Self {
            handle: EngineHandle { tx },
            events: Some(events_rx),
            task,
        }
    }

    pub fn handle(&self) -> EngineHandle {
        self.handle.clone()
    }

    /// Take the notification stream. Only the first call returns it.
    pub fn take_events(&mut self) -> Option<mpsc::UnboundedReceiver<GameEvent>> {
        self.events.take()
    }

    /// Stop the engine and wait for its task to finish
    pub async fn shutdown(self) -> Result<()> {
        self.handle.shutdown();
        self.task.await.context("engine task panicked")
    }
}

async fn run_engine(
    config: EngineConfig,
    scheduler: TokioScheduler,
    mut rx: mpsc::UnboundedReceiver<Request>,
    events_tx: mpsc::UnboundedSender<GameEvent>,
) {
    let mut engine = GameEngine::new(config, Box::new(scheduler));
    engine.initialize(Box::new(ChannelObserver::new(events_tx)));

    while let Some(request) = rx.recv().await {
        match request {
            Request::Tick(generation) => {
                engine.tick(generation);
            }
            Request::Reset(reply) => {
                engine.reset();
                let _ = reply.send(engine.state());
            }
            Request::SetDifficulty(level, reply) => {
                let _ = reply.send(engine.set_difficulty(&level));
            }
            Request::SetTimerMode {
                enabled,
                seconds,
                reply,
            } => {
                engine.set_timer_mode(enabled, seconds);
                let _ = reply.send(engine.state());
            }
            Request::Guess(input, reply) => {
                let _ = reply.send(engine.make_guess(&input));
            }
            Request::Hint(reply) => {
                let _ = reply.send(engine.use_hint());
            }
            Request::State(reply) => {
                let _ = reply.send(engine.state());
            }
            Request::Shutdown => break,
        }
    }

    engine.dispose();
    debug!("engine task stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use codebreaker_core::GameError;
    use codebreaker_types::MASKED_SECRET;
    use tokio::time::sleep;

    fn config(timer_mode: bool, seconds: u32) -> EngineConfig {
        EngineConfig {
            timer_mode,
            timer_duration: seconds,
            seed: Some(4242),
            ..EngineConfig::default()
        }
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
        let mut out = Vec::new();
        while let Ok(event) = rx.try_recv() {
            out.push(event);
        }
        out
    }

    fn ticks(events: &[GameEvent]) -> Vec<u32> {
        events
            .iter()
            .filter_map(|e| match e {
                GameEvent::TimerTick { seconds_left } => Some(*seconds_left),
                _ => None,
            })
            .collect()
    }

    fn ends(events: &[GameEvent]) -> Vec<GameEnd> {
        events
            .iter()
            .filter_map(|e| match e {
                GameEvent::GameEnded { end } => Some(*end),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn commands_round_trip() {
        let mut runtime = EngineRuntime::spawn(config(false, 60));
        let mut events = runtime.take_events().unwrap();
        let handle = runtime.handle();

        let state = handle.state().await.unwrap();
        assert_eq!(state.secret, MASKED_SECRET);

        let invalid = handle.make_guess("12").await.unwrap();
        assert_eq!(invalid, Err(GameError::InvalidFormat));

        let report = handle.make_guess("0000").await.unwrap().unwrap();
        assert_eq!(report.attempt, 1);

        assert!(!handle.set_difficulty("legendary").await.unwrap());
        assert!(handle.set_difficulty("easy").await.unwrap());
        assert_eq!(handle.state().await.unwrap().max_attempts, 6);

        // initial state, the guess, and the difficulty reset
        let changes = drain(&mut events)
            .into_iter()
            .filter(|e| matches!(e, GameEvent::StateChanged { .. }))
            .count();
        assert_eq!(changes, 3);

        runtime.shutdown().await.unwrap();
        assert!(handle.state().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_times_out_once() {
        let mut runtime = EngineRuntime::spawn(config(false, 60));
        let mut events = runtime.take_events().unwrap();
        let handle = runtime.handle();

        handle.set_timer_mode(true, Some(5)).await.unwrap();
        drain(&mut events);

        sleep(Duration::from_millis(5_500)).await;
        let seen = drain(&mut events);
        assert_eq!(ticks(&seen), vec![4, 3, 2, 1, 0]);
        assert_eq!(ends(&seen), vec![GameEnd::Timeout]);

        let state = handle.state().await.unwrap();
        assert!(state.game_over);
        assert_ne!(state.secret, MASKED_SECRET);

        sleep(Duration::from_secs(10)).await;
        assert!(drain(&mut events).is_empty());

        assert_eq!(handle.use_hint().await.unwrap(), Err(GameError::GameOver));
        runtime.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn reset_replaces_running_countdown() {
        let mut runtime = EngineRuntime::spawn(config(true, 5));
        let mut events = runtime.take_events().unwrap();
        let handle = runtime.handle();

        sleep(Duration::from_millis(2_500)).await;
        handle.reset().await.unwrap();
        sleep(Duration::from_millis(3_200)).await;

        let seen = drain(&mut events);
        assert_eq!(ticks(&seen), vec![4, 3, 4, 3, 2]);
        assert!(ends(&seen).is_empty());
        assert_eq!(handle.state().await.unwrap().time_left, 2);

        runtime.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn disabling_timer_stops_ticks() {
        let mut runtime = EngineRuntime::spawn(config(true, 30));
        let mut events = runtime.take_events().unwrap();
        let handle = runtime.handle();

        sleep(Duration::from_millis(1_500)).await;
        handle.set_timer_mode(false, None).await.unwrap();
        drain(&mut events);

        sleep(Duration::from_secs(5)).await;
        assert!(ticks(&drain(&mut events)).is_empty());
        assert!(!handle.state().await.unwrap().timer_mode);

        runtime.shutdown().await.unwrap();
    }
}
