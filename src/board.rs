//! The 3×3 mark board and per-move snapshots, using the `BitBoard` type.

use crate::bitboard::BitBoard;
use crate::common::{GameError, Mark};
use crate::config::{BOARD_SIZE, NUM_CELLS};
use core::fmt;

/// Bitboard type used for mark occupancy tracking.
pub type BB = BitBoard<u16, BOARD_SIZE>;

/// A 3×3 board, one occupancy bitboard per mark.
///
/// Cells are addressed by linear index 0..9, row-major
/// (index = row * 3 + col). The two bitboards never overlap.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    xs: BB,
    os: BB,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            xs: BB::new(),
            os: BB::new(),
        }
    }

    /// Mark at `index`, or `None` for an empty or out-of-range cell.
    pub fn cell(&self, index: usize) -> Option<Mark> {
        if self.xs.get(index).unwrap_or(false) {
            Some(Mark::X)
        } else if self.os.get(index).unwrap_or(false) {
            Some(Mark::O)
        } else {
            None
        }
    }

    /// Occupancy bitboard of a single mark.
    pub fn marks(&self, mark: Mark) -> BB {
        match mark {
            Mark::X => self.xs,
            Mark::O => self.os,
        }
    }

    /// Occupancy bitboard of both marks combined.
    pub fn occupied(&self) -> BB {
        self.xs | self.os
    }

    /// Returns `true` when every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    /// Number of occupied cells.
    pub fn count(&self) -> usize {
        self.occupied().count_ones()
    }

    /// Place `mark` at `index`, rejecting out-of-range and occupied cells.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), GameError> {
        if index >= NUM_CELLS {
            return Err(GameError::OutOfRange {
                index,
                limit: NUM_CELLS,
            });
        }
        if self.cell(index).is_some() {
            return Err(GameError::CellOccupied { index });
        }
        match mark {
            Mark::X => self.xs.set(index)?,
            Mark::O => self.os.set(index)?,
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board:")?;
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let ch = match self.cell(r * BOARD_SIZE + c) {
                    Some(Mark::X) => 'X',
                    Some(Mark::O) => 'O',
                    None => '.',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The board state after a given step, plus which cell was just filled.
///
/// `last_move` is `None` only for the initial empty snapshot. Snapshots are
/// immutable once recorded; `Board` is `Copy`, so a snapshot is a plain value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub last_move: Option<usize>,
}

impl Snapshot {
    /// The empty starting position (step 0).
    pub fn initial() -> Self {
        Snapshot {
            board: Board::new(),
            last_move: None,
        }
    }
}
