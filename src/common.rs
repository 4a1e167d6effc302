//! Common types: player marks and engine errors.

use crate::bitboard::BitBoardError;

/// A player's mark. `X` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark that moves after this one.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Static display form of the mark.
    pub fn as_str(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl core::fmt::Display for Mark {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Underlying bitboard error (invalid index).
    BitBoard(BitBoardError),
    /// Index is outside its valid domain [0..limit).
    OutOfRange { index: usize, limit: usize },
    /// Attempted to place a mark on an occupied cell.
    CellOccupied { index: usize },
    /// Attempted to place a mark after the game was won or drawn.
    GameConcluded,
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        GameError::BitBoard(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            GameError::OutOfRange { index, limit } => {
                write!(f, "Index {} is out of range (limit {})", index, limit)
            }
            GameError::CellOccupied { index } => {
                write!(f, "Cell {} is already occupied", index)
            }
            GameError::GameConcluded => write!(f, "The game has already concluded"),
        }
    }
}
