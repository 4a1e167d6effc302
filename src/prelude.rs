//! Commonly used types and utilities for ease of import.

pub use crate::{
    evaluate, Board, GameEngine, GameError, GameStatus, GameView, Intent, Mark, Outcome, Snapshot,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, ui::print_view};
