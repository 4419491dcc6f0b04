//! Puzzle board state: visited cells, candidate annotations, knight position.

use crate::bitgrid::{BitGrid, BitGridError};
use crate::common::CellState;
use crate::config::{LevelDef, LEVELS, NUM_LEVELS};

/// Backing store for the cell masks. A `u64` holds the largest preset (8×8).
type Mask = BitGrid<u64>;

const _: () = {
    let mut i = 0;
    while i < NUM_LEVELS {
        assert!(LEVELS[i].cells() <= u64::BITS as usize);
        i += 1;
    }
};

/// The eight knight displacement vectors.
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (1, -2),
    (2, -1),
    (-1, 2),
    (-2, 1),
    (-1, -2),
    (-2, -1),
];

/// Board state for one puzzle: two cell masks plus the knight position.
///
/// A cell's [`CellState`] is derived from the masks: visited wins over
/// candidate, and everything else is empty. The knight's own cell enters the
/// visited mask only when the knight leaves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    visited: Mask,
    candidates: Mask,
    knight: Option<(usize, usize)>,
}

impl Board {
    /// Create an empty board sized for `def`, knight unplaced.
    pub(crate) fn new(def: &LevelDef) -> Self {
        Board {
            width: def.width(),
            height: def.height(),
            visited: Mask::new(def.width(), def.height()),
            candidates: Mask::new(def.width(), def.height()),
            knight: None,
        }
    }

    /// Board width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Board height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Knight position, or `None` before the first move.
    pub fn knight(&self) -> Option<(usize, usize)> {
        self.knight
    }

    /// Mask of visited (permanently blocked) cells.
    pub fn visited_mask(&self) -> BitGrid<u64> {
        self.visited
    }

    /// Mask of candidate cells for the next move.
    pub fn candidate_mask(&self) -> BitGrid<u64> {
        self.candidates
    }

    /// State of the cell at (x, y). Out-of-range lookups are an error, never
    /// clamped.
    pub fn cell(&self, x: usize, y: usize) -> Result<CellState, BitGridError> {
        if self.visited.get(x, y)? {
            Ok(CellState::Visited)
        } else if self.candidates.get(x, y)? {
            Ok(CellState::Candidate)
        } else {
            Ok(CellState::Empty)
        }
    }

    /// True if (x, y) is on the board and not visited.
    fn is_open(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        x < self.width && y < self.height && !self.visited.get(x, y).unwrap_or(true)
    }

    /// Placement/movement rule. Rejects out-of-bounds and visited targets;
    /// the first move places the knight anywhere, later moves require knight
    /// geometry. On acceptance the departed cell is marked visited.
    pub(crate) fn move_knight(&mut self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (tx, ty) = (x as usize, y as usize);
        if tx >= self.width || ty >= self.height {
            return false;
        }
        if self.visited.get(tx, ty).unwrap_or(false) {
            return false;
        }

        let Some((kx, ky)) = self.knight else {
            self.knight = Some((tx, ty));
            return true;
        };

        let dx = kx.abs_diff(tx);
        let dy = ky.abs_diff(ty);
        if (dx, dy) != (1, 2) && (dx, dy) != (2, 1) {
            return false;
        }

        let _ = self.visited.set(kx, ky);
        self.knight = Some((tx, ty));
        true
    }

    /// True when every cell except the one under the knight is visited.
    pub(crate) fn is_complete(&self) -> bool {
        let Some((kx, ky)) = self.knight else {
            return false;
        };
        for y in 0..self.height {
            for x in 0..self.width {
                if (x, y) == (kx, ky) {
                    continue;
                }
                if !self.visited.get(x, y).unwrap_or(false) {
                    return false;
                }
            }
        }
        true
    }

    /// True when at least one legal move exists from the knight position.
    pub(crate) fn has_move(&self) -> bool {
        let Some((kx, ky)) = self.knight else {
            return false;
        };
        KNIGHT_OFFSETS
            .iter()
            .any(|&(dx, dy)| self.is_open(kx as i32 + dx, ky as i32 + dy))
    }

    /// Recompute the candidate annotations from the knight position and the
    /// visited set. Idempotent; never touches visited cells.
    pub(crate) fn refresh_candidates(&mut self) {
        self.candidates.clear_all();
        let Some((kx, ky)) = self.knight else {
            return;
        };
        for &(dx, dy) in &KNIGHT_OFFSETS {
            let (cx, cy) = (kx as i32 + dx, ky as i32 + dy);
            if self.is_open(cx, cy) {
                let _ = self.candidates.set(cx as usize, cy as usize);
            }
        }
    }

    /// Reset to the freshly-created state, keeping dimensions.
    pub(crate) fn clear(&mut self) {
        self.visited.clear_all();
        self.candidates.clear_all();
        self.knight = None;
    }

    /// Replace board contents from decoded raw masks and knight coordinates.
    /// Mask bits beyond the board are truncated, and the knight is forced
    /// back to unplaced when either coordinate falls outside current bounds.
    pub(crate) fn apply_restored(&mut self, visited: u64, candidates: u64, kx: i32, ky: i32) {
        self.visited = Mask::from_raw(self.width, self.height, visited);
        self.candidates = Mask::from_raw(self.width, self.height, candidates);
        self.knight = if kx < 0
            || ky < 0
            || kx as usize >= self.width
            || ky as usize >= self.height
        {
            None
        } else {
            Some((kx as usize, ky as usize))
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::level_def;

    fn board_4x3() -> Board {
        Board::new(level_def(0))
    }

    #[test]
    fn complete_requires_placed_knight() {
        let mut board = board_4x3();
        assert!(!board.is_complete());
        board.visited.fill();
        // still unplaced, so never complete
        assert!(!board.is_complete());
    }

    #[test]
    fn complete_ignores_knight_cell() {
        let mut board = board_4x3();
        assert!(board.move_knight(0, 0));
        board.visited.fill();
        let _ = board.visited.clear(0, 0);
        assert!(board.is_complete());
    }

    #[test]
    fn has_move_sees_only_open_cells() {
        let mut board = board_4x3();
        assert!(board.move_knight(0, 0));
        assert!(board.has_move());
        board.visited.set(2, 1).unwrap();
        board.visited.set(1, 2).unwrap();
        assert!(!board.has_move());
    }

    #[test]
    fn refresh_clears_stale_candidates() {
        let mut board = board_4x3();
        assert!(board.move_knight(0, 0));
        board.refresh_candidates();
        assert_eq!(
            board.candidate_mask().iter_set().collect::<Vec<_>>(),
            vec![(2, 1), (1, 2)]
        );
        // moving invalidates the old annotations
        assert!(board.move_knight(2, 1));
        board.refresh_candidates();
        assert_eq!(
            board.candidate_mask().iter_set().collect::<Vec<_>>(),
            vec![(0, 2)]
        );
    }

    #[test]
    fn restored_knight_is_revalidated() {
        let mut board = board_4x3();
        board.apply_restored(0, 0, 7, 7);
        assert_eq!(board.knight(), None);
        board.apply_restored(0, 0, 3, -1);
        assert_eq!(board.knight(), None);
        board.apply_restored(0, 0, 3, 2);
        assert_eq!(board.knight(), Some((3, 2)));
    }
}
