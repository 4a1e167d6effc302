#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
mod game;
mod history;
#[cfg(feature = "std")]
mod logging;
mod outcome;
pub mod prelude;
#[cfg(feature = "std")]
pub mod ui;
mod view;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use history::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use outcome::*;
pub use view::*;
