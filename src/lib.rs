#![cfg_attr(not(feature = "std"), no_std)]

mod bitgrid;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
#[cfg(feature = "std")]
mod snapshot;
#[cfg(feature = "std")]
mod ui;

pub use bitgrid::{BitGrid, BitGridError, SetCells};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use snapshot::{TokenError, TOKEN_VERSION};
#[cfg(feature = "std")]
pub use ui::*;
