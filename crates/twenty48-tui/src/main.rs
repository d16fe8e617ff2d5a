mod app;
mod screen;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use twenty48_core::engine::Game;

use crate::screen::Screen;

/// Side length of the playing board.
const BOARD_SIZE: usize = 4;

#[derive(Debug, Parser)]
#[command(author, version, about = "2048 in the terminal")]
struct Args {
    /// RNG seed; the same seed and inputs replay the same game
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("starting {BOARD_SIZE}x{BOARD_SIZE} game with seed {seed}");

    let game = Game::new(BOARD_SIZE, seed);
    let screen = Screen::new().context("failed to initialize terminal")?;
    let status = app::run(game, screen)?;

    info!("exited with status {status:?}");
    Ok(())
}
