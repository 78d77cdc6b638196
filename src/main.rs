//! Headless runner (default binary).
//!
//! Plays `TETRIS_SIM_GAMES` sessions with a random input policy and prints one JSON
//! report per session on stdout. Logging goes through `RUST_LOG`.

use std::io::{self, Write};

use anyhow::Result;
use log::info;

use brick_tetris::sim::{self, SimConfig};

fn main() -> Result<()> {
    env_logger::init();

    let config = SimConfig::from_env();
    info!(
        "playing {} session(s), seed {:?}, tick cap {}",
        config.games, config.seed, config.max_ticks
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for report in sim::run(&config) {
        serde_json::to_writer(&mut out, &report)?;
        writeln!(out)?;
    }
    out.flush()?;

    Ok(())
}
