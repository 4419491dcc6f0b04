#![cfg(feature = "std")]
//! Save-token codec for persisting a game across process lifecycle events.
//!
//! A token is the standard-alphabet base64 encoding of:
//!
//! ```text
//! byte  0        format version (currently 1)
//! bytes 1..9     visited mask, u64 LE, row-major bit index y*width + x
//! bytes 9..17    candidate mask, u64 LE
//! bytes 17..21   knight x, i32 LE, -1 when unplaced
//! bytes 21..25   knight y, i32 LE, -1 when unplaced
//! bytes 25..29   status tag, u32 LE (0 in progress, 1 solved, 2 game over)
//! bytes 29..33   move count, u32 LE
//! ```
//!
//! Board dimensions are not part of the token. Decoding applies to an engine
//! that is already sized: mask bits beyond the board are truncated and the
//! knight position is re-validated against current bounds, so a token saved
//! under a different difficulty level degrades safely instead of crashing.
//!
//! Decoding never fails loudly: a malformed token resets the board to empty
//! and the counters to their defaults.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::common::GameStatus;
use crate::game::GameEngine;

/// Current token format version.
pub const TOKEN_VERSION: u8 = 1;

/// Wire form of the engine state. Field order is the documented layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct Snapshot {
    visited: u64,
    candidates: u64,
    knight_x: i32,
    knight_y: i32,
    status: GameStatus,
    move_count: u32,
}

/// Reasons a token failed to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Not valid base64.
    Encoding,
    /// Unknown format version byte.
    Version { found: u8 },
    /// Payload missing, truncated, or malformed.
    Payload,
}

impl core::fmt::Display for TokenError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TokenError::Encoding => write!(f, "token is not valid base64"),
            TokenError::Version { found } => {
                write!(f, "unsupported token version {}", found)
            }
            TokenError::Payload => write!(f, "token payload is malformed"),
        }
    }
}

fn decode(token: &str) -> Result<Snapshot, TokenError> {
    let bytes = BASE64.decode(token).map_err(|_| TokenError::Encoding)?;
    let (&version, payload) = bytes.split_first().ok_or(TokenError::Payload)?;
    if version != TOKEN_VERSION {
        return Err(TokenError::Version { found: version });
    }
    bincode::deserialize(payload).map_err(|_| TokenError::Payload)
}

impl GameEngine {
    /// Encode the full game state into an opaque text token, safe to store
    /// in string-typed persistence slots.
    pub fn to_token(&self) -> String {
        let (kx, ky) = match self.knight() {
            Some((x, y)) => (x as i32, y as i32),
            None => (-1, -1),
        };
        let snapshot = Snapshot {
            visited: self.board().visited_mask().into_raw(),
            candidates: self.board().candidate_mask().into_raw(),
            knight_x: kx,
            knight_y: ky,
            status: self.status(),
            move_count: self.move_count(),
        };

        let mut bytes = vec![TOKEN_VERSION];
        match bincode::serialize(&snapshot) {
            Ok(payload) => bytes.extend(payload),
            Err(err) => {
                log::error!("failed to encode snapshot: {}", err);
                return String::new();
            }
        }
        BASE64.encode(bytes)
    }

    /// Restore state from a token produced by [`to_token`], keeping current
    /// board dimensions. Corrupt tokens degrade to a fresh board of the same
    /// size; the failure is logged, never propagated.
    ///
    /// [`to_token`]: GameEngine::to_token
    pub fn restore(&mut self, token: &str) {
        if let Err(err) = self.try_restore(token) {
            log::warn!("discarding saved game: {}", err);
        }
    }

    /// Like [`restore`], but reports why a token was rejected. The degrade
    /// policy is identical: on error the board is already reset to empty.
    ///
    /// [`restore`]: GameEngine::restore
    pub fn try_restore(&mut self, token: &str) -> Result<(), TokenError> {
        match decode(token) {
            Ok(snapshot) => {
                self.board_mut().apply_restored(
                    snapshot.visited,
                    snapshot.candidates,
                    snapshot.knight_x,
                    snapshot.knight_y,
                );
                self.set_restored(snapshot.move_count, snapshot.status);
                Ok(())
            }
            Err(err) => {
                self.board_mut().clear();
                self.set_restored(0, GameStatus::InProgress);
                Err(err)
            }
        }
    }
}
