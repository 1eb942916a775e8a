//! Terminal event loop and rendering.

use crate::protocol::{parse_line, Command, ShellMessage};
use std::io::{BufRead, Write};
use std::str::FromStr;
use thiserror::Error;
use tictactoe_core::{GameEvent, MoveError, Session};
use tracing::{debug, info, warn};

/// How the shell writes state to its output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable board and status
    #[default]
    Text,
    /// One JSON message per line
    Json,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown output format '{0}', expected 'text' or 'json'")]
pub struct ConfigError(pub String);

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError(s.to_string())),
        }
    }
}

/// Holds the session and writes it out after every event.
pub struct Shell<W: Write> {
    session: Session,
    out: W,
    format: OutputFormat,
}

impl<W: Write> Shell<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            session: Session::new(),
            out,
            format,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Handle one line of input. Returns `false` when the user quits.
    pub fn handle_line(&mut self, line: &str) -> anyhow::Result<bool> {
        let command = match parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(true),
            Err(e) => {
                warn!("Invalid input: {}", e);
                self.write_error(&e.to_string())?;
                return Ok(true);
            }
        };

        let event = match command {
            Command::Quit => {
                info!("Quit requested");
                return Ok(false);
            }
            Command::Event(event) => event,
        };

        debug!(?event, "dispatching");
        let events = self.session.dispatch(event);
        for event in &events {
            match event {
                GameEvent::MoveRejected { index, reason } => {
                    self.write_rejection(*index, reason)?;
                }
                GameEvent::GameWon { mark, line } => info!(%mark, ?line, "game won"),
                GameEvent::GameDrawn => info!("game drawn"),
                _ => {}
            }
        }
        self.render()?;
        Ok(true)
    }

    /// Write the current board and status
    pub fn render(&mut self) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => {
                let msg = ShellMessage::state(
                    self.session.board(),
                    self.session.status_text(),
                    self.session.outcome(),
                );
                self.write_json(&msg)?;
            }
            OutputFormat::Text => {
                writeln!(self.out, "{}", self.session.board())?;
                match self.session.result_message() {
                    Some(message) => {
                        writeln!(self.out, "{}", message)?;
                        writeln!(self.out, "Type 'r' to reset")?;
                    }
                    None => writeln!(self.out, "{}", self.session.status_text())?,
                }
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn write_rejection(&mut self, index: usize, reason: &MoveError) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => self.write_json(&ShellMessage::Rejected {
                index,
                reason: *reason,
            }),
            // A rejected click looks like nothing happened
            OutputFormat::Text => Ok(()),
        }
    }

    fn write_error(&mut self, message: &str) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => self.write_json(&ShellMessage::Error {
                message: message.to_string(),
            }),
            OutputFormat::Text => {
                writeln!(self.out, "{}", message)?;
                Ok(())
            }
        }
    }

    fn write_json(&mut self, msg: &ShellMessage) -> anyhow::Result<()> {
        let text = serde_json::to_string(msg)?;
        writeln!(self.out, "{}", text)?;
        Ok(())
    }
}

/// Run the shell until EOF or quit.
pub fn run<R: BufRead, W: Write>(input: R, out: W, format: OutputFormat) -> anyhow::Result<()> {
    let mut shell = Shell::new(out, format);
    shell.render()?;

    for line in input.lines() {
        let line = line?;
        if !shell.handle_line(&line)? {
            break;
        }
    }

    info!(status = %shell.session().status_text(), "Shell finished");
    Ok(())
}
