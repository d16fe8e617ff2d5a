use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::state::{Board, Move, Status, SPAWN_TILE, WINNING_TILE};

/// Tiles on the board when a game starts.
const INITIAL_SPAWNS: usize = 2;

/// One 2048 game: a board plus its win/loss lifecycle.
///
/// The board is owned exclusively here; callers read it through
/// [`Game::board`] for rendering but never mutate it. All randomness flows
/// from the seed, so a game replays deterministically from the same seed
/// and move sequence.
pub struct Game {
    board: Board,
    status: Status,
    rng: StdRng,
}

impl Game {
    /// Start a game on an empty n x n board and spawn the two initial tiles.
    pub fn new(n: usize, seed: u64) -> Self {
        let mut game = Game {
            board: Board::new(n),
            status: Status::Playing,
            rng: StdRng::seed_from_u64(seed),
        };
        for _ in 0..INITIAL_SPAWNS {
            game.spawn();
        }
        game
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Play one turn: slide/merge in `dir`, check for a win, then spawn.
    ///
    /// Terminal states ignore directional input and return unchanged. A
    /// move that changes no cell still spawns a tile. The win transition
    /// fires on the turn a 2048 tile first appears and skips that turn's
    /// spawn; a spawn that finds no empty cell ends the game as lost
    /// without touching the board.
    pub fn step(&mut self, dir: Move) -> Status {
        if self.status.is_terminal() {
            return self.status;
        }
        self.board = self.board.shifted(dir);
        if self.board.contains(WINNING_TILE) {
            self.status = Status::Won;
            return self.status;
        }
        if !self.spawn() {
            self.status = Status::Lost;
        }
        self.status
    }

    /// Place a 2 in a uniformly random empty cell. Returns false, leaving
    /// the board untouched, when no empty cell exists.
    fn spawn(&mut self) -> bool {
        let empty = self.board.empty_cells();
        if empty.is_empty() {
            return false;
        }
        let idx = empty[self.rng.gen_range(0..empty.len())];
        self.board.place_value(idx, SPAWN_TILE);
        true
    }
}
