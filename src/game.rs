//! Core game logic: one engine per puzzle session.

use crate::bitgrid::BitGridError;
use crate::board::Board;
use crate::common::{CellState, GameStatus};
use crate::config::level_def;

/// The puzzle state machine. All mutation goes through [`attempt_move`];
/// everything else is read-only. The engine holds no synchronization of its
/// own, so callers serialize access.
///
/// [`attempt_move`]: GameEngine::attempt_move
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: Board,
    move_count: u32,
    status: GameStatus,
}

impl GameEngine {
    /// Create a new engine for the given difficulty level. Out-of-range
    /// levels clamp to the preset table, so construction cannot fail.
    pub fn new(level: i32) -> Self {
        Self {
            board: Board::new(level_def(level)),
            move_count: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Start over at the given level, replacing all prior state.
    pub fn reset(&mut self, level: i32) {
        *self = Self::new(level);
    }

    /// Attempt a move to (x, y). Returns `false` without mutating anything
    /// when the puzzle is already terminal or the target is rejected by the
    /// placement/movement rule.
    ///
    /// The first accepted move places the knight anywhere in bounds; later
    /// moves must be a knight's move onto an unvisited cell. After an
    /// accepted move the terminal state is evaluated and the candidate
    /// annotations are recomputed.
    pub fn attempt_move(&mut self, x: i32, y: i32) -> bool {
        if self.is_end() {
            return false;
        }

        if !self.board.move_knight(x, y) {
            return false;
        }

        self.move_count += 1;

        if self.board.is_complete() {
            self.status = GameStatus::Solved;
        } else if !self.board.has_move() {
            self.status = GameStatus::GameOver;
        }

        self.board.refresh_candidates();

        true
    }

    /// Immutable view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board width in cells.
    pub fn width(&self) -> usize {
        self.board.width()
    }

    /// Board height in cells.
    pub fn height(&self) -> usize {
        self.board.height()
    }

    /// Knight position, or `None` before the first move.
    pub fn knight(&self) -> Option<(usize, usize)> {
        self.board.knight()
    }

    /// State of the cell at (x, y); out-of-range lookups are an error.
    pub fn cell(&self, x: usize, y: usize) -> Result<CellState, BitGridError> {
        self.board.cell(x, y)
    }

    /// Number of accepted moves since the last reset.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Current puzzle status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once every cell has been visited.
    pub fn is_solved(&self) -> bool {
        self.status == GameStatus::Solved
    }

    /// True once no legal move remains on an unfilled board.
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// True in either terminal state; no further moves are accepted.
    pub fn is_end(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn set_restored(&mut self, move_count: u32, status: GameStatus) {
        self.move_count = move_count;
        self.status = status;
    }
}
