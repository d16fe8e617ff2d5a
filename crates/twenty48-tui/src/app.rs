//! Event loop: one blocking event in, one turn plus redraw out.
//!
//! Terminal `Won`/`Lost` states keep the final board and banner on screen
//! and ignore directional input; quit always works.

use anyhow::Result;
use log::debug;

use twenty48_core::engine::{Game, Status};

use crate::screen::{InputEvent, Screen};

const HINT: &str = "move: arrows/hjkl/wasd   quit: q/esc";

/// Run one game until the player quits. Returns the final status.
pub fn run(mut game: Game, mut screen: Screen) -> Result<Status> {
    screen.render(game.board(), &status_lines(game.status()))?;
    loop {
        match screen.poll_event()? {
            InputEvent::Quit => break,
            InputEvent::Resize => {
                screen.render(game.board(), &status_lines(game.status()))?;
            }
            InputEvent::Dir(dir) => {
                let status = game.step(dir);
                debug!("move {dir:?} -> {status:?}");
                screen.render(game.board(), &status_lines(status))?;
            }
        }
    }
    Ok(game.status())
}

fn status_lines(status: Status) -> Vec<&'static str> {
    match status {
        Status::Playing => vec![HINT],
        Status::Won => vec![HINT, "", "You won!"],
        Status::Lost => vec![HINT, "", "Game over!"],
    }
}
