//! Common types for the Knight's Tour puzzle: cell states and game status.

/// State of a single board cell.
///
/// The cell under the knight is reported as `Empty` (or `Candidate`); it is
/// only marked `Visited` when the knight departs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Never visited.
    Empty,
    /// The knight stood here and has since moved away. Permanently blocked.
    Visited,
    /// Currently empty and one legal knight's move from the knight.
    Candidate,
}

/// Current status of a puzzle. Terminal states are only left by a full reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// Moves are still being accepted.
    InProgress,
    /// Every cell has been visited.
    Solved,
    /// No legal move remains and the board is not full.
    GameOver,
}
