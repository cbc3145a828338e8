//! GameView: maps snapshots, reports, and events into styled lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::style::Color;

use crate::core::{GameEnd, GameError, GameEvent, GameSnapshot, GuessOutcome, GuessReport, Hint};
use crate::store::{ScoreEntry, StatsSummary};
use crate::text::{Line, Span};

/// `m:ss`
pub fn format_time(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Countdown ticks worth announcing: every ten seconds, then the last five
fn announce_tick(seconds_left: u32) -> bool {
    seconds_left <= 5 || seconds_left % 10 == 0
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// One-line summary of the running game
    pub fn status(&self, snap: &GameSnapshot) -> Line {
        let mut line = Line::new()
            .push(Span::colored(format!("[{}]", snap.difficulty.as_str()), Color::Cyan).bold())
            .text(format!(
                " attempts {}/{} ({} left)  hints {} left",
                snap.attempts,
                snap.max_attempts,
                snap.attempts_left(),
                snap.hints_left()
            ));

        if snap.timer_mode {
            let color = if snap.time_left <= 10 {
                Color::Red
            } else {
                Color::Yellow
            };
            line = line
                .text("  time ")
                .push(Span::colored(format!("{}s", snap.time_left), color));
        }

        line.text("  code ")
            .push(Span::colored(snap.secret.clone(), Color::Magenta).bold())
    }

    /// Guess history, newest first
    pub fn history(&self, snap: &GameSnapshot) -> Vec<Line> {
        if snap.guesses.is_empty() {
            return vec![Line::from("  no guesses yet")];
        }

        snap.guesses
            .iter()
            .map(|g| {
                Line::new()
                    .text(format!("  #{:<2} ", g.attempt_number))
                    .push(Span::plain(g.sequence.to_string()).bold())
                    .text("  ")
                    .push(Span::colored(format!("{} exact", g.exact), Color::Green))
                    .text(", ")
                    .push(Span::colored(format!("{} partial", g.partial), Color::Yellow))
            })
            .collect()
    }

    pub fn report(&self, report: &GuessReport) -> Line {
        let color = match report.outcome {
            GuessOutcome::Continue => Color::White,
            GuessOutcome::Won { .. } => Color::Green,
            GuessOutcome::Lost { .. } => Color::Red,
        };
        Span::colored(report.message.clone(), color).into()
    }

    pub fn hint(&self, hint: &Hint) -> Line {
        Span::colored(hint.message.clone(), Color::Blue).into()
    }

    pub fn error(&self, error: &GameError) -> Line {
        Span::colored(error.to_string(), Color::Red).into()
    }

    /// Lines for an engine notification, if it is worth printing
    pub fn event(&self, event: &GameEvent) -> Option<Line> {
        match event {
            GameEvent::StateChanged { .. } => None,
            GameEvent::TimerTick { seconds_left } if announce_tick(*seconds_left) => Some(
                Span::colored(format!("{}s left", seconds_left), Color::Yellow).into(),
            ),
            GameEvent::TimerTick { .. } => None,
            GameEvent::GameEnded { end } => Some(self.game_end(end)),
        }
    }

    pub fn game_end(&self, end: &GameEnd) -> Line {
        match end {
            GameEnd::Win { attempts, score } => Span::colored(
                format!("*** You win! {} attempts, {} points ***", attempts, score),
                Color::Green,
            )
            .bold()
            .into(),
            GameEnd::Lose { secret } => Span::colored(
                format!("*** Game over. The code was {} ***", secret),
                Color::Red,
            )
            .bold()
            .into(),
            GameEnd::Timeout => Span::colored("*** Time's up! ***", Color::Red).bold().into(),
            GameEnd::AttemptsExhausted => {
                Span::colored("*** No attempts left ***", Color::Red).bold().into()
            }
        }
    }

    pub fn stats(&self, stats: &StatsSummary) -> Vec<Line> {
        vec![
            Line::new().push(Span::plain("Statistics").bold()),
            format!("  games played  {}", stats.total_games).into(),
            format!("  games won     {}", stats.total_wins).into(),
            format!("  win rate      {:.0}%", stats.win_rate()).into(),
            format!("  best score    {}", stats.best_score).into(),
        ]
    }

    pub fn leaderboard(&self, entries: &[ScoreEntry]) -> Vec<Line> {
        let mut lines = vec![Line::new().push(Span::plain("Leaderboard").bold())];
        if entries.is_empty() {
            lines.push("  no scores yet".into());
            return lines;
        }

        lines.push(
            format!(
                "  {:>3}  {:<12} {:>6} {:>8} {:>6} {:>5}  {}",
                "#", "player", "score", "attempts", "time", "hints", "level"
            )
            .into(),
        );
        for (i, e) in entries.iter().enumerate() {
            let rank_color = match i {
                0 => Color::Yellow,
                1 => Color::Grey,
                2 => Color::DarkYellow,
                _ => Color::White,
            };
            lines.push(
                Line::new()
                    .text("  ")
                    .push(Span::colored(format!("{:>3}", i + 1), rank_color).bold())
                    .text(format!(
                        "  {:<12} {:>6} {:>8} {:>6} {:>5}  {}",
                        e.player,
                        e.score,
                        e.attempts,
                        format_time(e.time_secs),
                        e.hints_used,
                        e.difficulty.as_str()
                    )),
            );
        }
        lines
    }

    pub fn help(&self) -> Vec<Line> {
        [
            "Crack the 4-digit code. Exact = right digit, right place; partial = right digit, wrong place.",
            "  <digits> | guess <digits>   submit a guess",
            "  hint                        reveal one digit",
            "  new                         start a new game",
            "  difficulty easy|medium|hard switch difficulty",
            "  timer on [secs] | timer off play against the clock",
            "  state                       show the board",
            "  stats | top [level] [n]     records",
            "  quit",
        ]
        .into_iter()
        .map(Line::from)
        .collect()
    }
}
