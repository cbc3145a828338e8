//! Codebreaker terminal runner (default binary).
//!
//! Reads commands line by line from stdin and prints engine replies and
//! notifications as they arrive. Finished games are recorded under the
//! configured data directory.

use std::io::IsTerminal;

use anyhow::{Context, Result};
use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};

use codebreaker::core::{now_ms, GameEvent, GameError};
use codebreaker::runtime::{EngineHandle, EngineRuntime, GameConfig};
use codebreaker::store::FileStore;
use codebreaker::term::{GameView, Line, Span, TerminalRenderer};
use codebreaker::types::PlayerCommand;
use codebreaker::Records;

struct App {
    handle: EngineHandle,
    view: GameView,
    term: TerminalRenderer,
    records: Records<FileStore>,
    top_n: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = GameConfig::from_env();
    info!("starting with {:?}", config);

    let color = std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal();
    let mut runtime = EngineRuntime::spawn(config.engine_config());
    let mut events = runtime
        .take_events()
        .context("engine event stream already taken")?;

    let mut app = App {
        handle: runtime.handle(),
        view: GameView::new(),
        term: TerminalRenderer::new(color),
        records: Records::open(&config.data_dir, &config.player),
        top_n: config.top_n,
    };

    let result = app.run(&mut events).await;

    runtime.shutdown().await?;
    result
}

impl App {
    async fn run(
        &mut self,
        events: &mut tokio::sync::mpsc::UnboundedReceiver<GameEvent>,
    ) -> Result<()> {
        self.term.draw(&self.view.help())?;
        self.show_board().await?;
        self.term.prompt()?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            tokio::select! {
                Some(event) = events.recv() => self.on_event(&event)?,
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    if !self.on_line(&line).await? {
                        break;
                    }
                    self.term.prompt()?;
                }
            }
        }
        Ok(())
    }

    fn on_event(&mut self, event: &GameEvent) -> Result<()> {
        if let Some(line) = self.view.event(event) {
            self.term.draw_line(&line)?;
        }

        if let Some(recorded) = self.records.observe(event, now_ms()) {
            if let Some(rank) = recorded.rank {
                self.term
                    .draw_line(&Span::plain(format!("Leaderboard rank #{}", rank)).bold().into())?;
            }
            self.term.prompt()?;
        }
        Ok(())
    }

    /// Returns `false` when the player asked to quit
    async fn on_line(&mut self, line: &str) -> Result<bool> {
        let Some(command) = PlayerCommand::parse(line) else {
            if !line.trim().is_empty() {
                self.term
                    .draw_line(&Line::from("Unknown command, type `help`"))?;
            }
            return Ok(true);
        };

        match command {
            PlayerCommand::NewGame => {
                let snap = self.handle.reset().await?;
                self.term.draw_line(&self.view.status(&snap))?;
            }
            PlayerCommand::Guess(input) => match self.handle.make_guess(&input).await? {
                Ok(report) => {
                    self.term.draw_line(&self.view.report(&report))?;
                    self.show_status().await?;
                }
                Err(e) => self.show_error(&e)?,
            },
            PlayerCommand::Hint => match self.handle.use_hint().await? {
                Ok(hint) => self.term.draw_line(&self.view.hint(&hint))?,
                Err(e) => self.show_error(&e)?,
            },
            PlayerCommand::Difficulty(level) => {
                if self.handle.set_difficulty(&level).await? {
                    self.show_status().await?;
                } else {
                    self.term.draw_line(&Line::from(format!(
                        "Unknown difficulty {:?}, try easy, medium or hard",
                        level
                    )))?;
                }
            }
            PlayerCommand::Timer { enabled, seconds } => {
                let snap = self.handle.set_timer_mode(enabled, seconds).await?;
                self.term.draw_line(&self.view.status(&snap))?;
            }
            PlayerCommand::Stats => {
                let summary = self.records.summary();
                self.term.draw(&self.view.stats(&summary))?;
            }
            PlayerCommand::Top { difficulty, n } => {
                let entries = self.records.top(difficulty, n.unwrap_or(self.top_n));
                self.term.draw(&self.view.leaderboard(&entries))?;
            }
            PlayerCommand::State => self.show_board().await?,
            PlayerCommand::Help => self.term.draw(&self.view.help())?,
            PlayerCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    async fn show_status(&mut self) -> Result<()> {
        let snap = self.handle.state().await?;
        self.term.draw_line(&self.view.status(&snap))
    }

    async fn show_board(&mut self) -> Result<()> {
        let snap = self.handle.state().await?;
        self.term.draw_line(&self.view.status(&snap))?;
        self.term.draw(&self.view.history(&snap))
    }

    fn show_error(&mut self, error: &GameError) -> Result<()> {
        self.term.draw_line(&self.view.error(error))
    }
}
