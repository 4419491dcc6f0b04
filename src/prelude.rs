//! Commonly used types and utilities for ease of import.

pub use crate::{CellState, GameEngine, GameStatus, LevelDef, LEVELS, NUM_LEVELS};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_board, TokenError, TOKEN_VERSION};
