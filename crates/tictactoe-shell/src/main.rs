//! Terminal tic-tac-toe.
//!
//! Reads one event per line from stdin (a cell number 1-9, `r` to reset,
//! `q` to quit, or a JSON view event) and redraws the board on stdout.

use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod protocol;
mod shell;

use shell::OutputFormat;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let format: OutputFormat = match std::env::var("TICTACTOE_OUTPUT") {
        Ok(value) => value.parse()?,
        Err(_) => OutputFormat::default(),
    };

    info!(?format, "Starting tic-tac-toe shell");

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(stdin.lock(), stdout.lock(), format)
}
