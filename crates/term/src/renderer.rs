//! TerminalRenderer: writes styled lines to a real terminal.
//!
//! Views produce [`Line`]s; this module is the only place that turns them
//! into crossterm commands.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::text::{Line, Span};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    color: bool,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    /// `color = false` prints plain text (pipes, `NO_COLOR`)
    pub fn new(color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            color,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn draw(&mut self, lines: &[Line]) -> Result<()> {
        self.buf.clear();
        for line in lines {
            encode_line_into(line, self.color, &mut self.buf)?;
        }
        self.flush_buf()
    }

    pub fn draw_line(&mut self, line: &Line) -> Result<()> {
        self.draw(std::slice::from_ref(line))
    }

    pub fn prompt(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print("> "))?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

fn apply_span_into(out: &mut Vec<u8>, span: &Span) -> Result<()> {
    if let Some(color) = span.color {
        out.queue(SetForegroundColor(color))?;
    }
    if span.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    out.queue(Print(&span.text))?;
    if span.color.is_some() || span.bold {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

/// Encode one line (with trailing newline) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_line_into(line: &Line, color: bool, out: &mut Vec<u8>) -> Result<()> {
    for span in &line.spans {
        if color {
            apply_span_into(out, span)?;
        } else {
            out.extend_from_slice(span.text.as_bytes());
        }
    }
    out.push(b'\n');
    Ok(())
}
