//! 2048 engine: grid board, slide/merge/rotate ops, and the turn state
//! machine. Everything here is pure logic and can be driven headlessly
//! from tests; the terminal front-end lives in the `twenty48-tui` crate.

pub mod engine;

pub use engine::{Board, Game, Move, Status};
