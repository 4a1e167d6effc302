//! Pure win/draw classification of a board.

use crate::board::{Board, BB};
use crate::common::Mark;
use crate::config::WIN_LINES;

/// Result of classifying a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Winning mark, if any line is complete.
    pub winner: Option<Mark>,
    /// The completed line's cell indices.
    pub line: Option<[usize; 3]>,
    /// `true` iff the board is full and no line is complete.
    pub is_draw: bool,
}

fn line_mask(line: &[usize; 3]) -> BB {
    let [a, b, c] = *line;
    BB::from_raw((1u16 << a) | (1u16 << b) | (1u16 << c))
}

/// Classify `board`: winner, winning line, or draw.
///
/// Checks the eight lines in `WIN_LINES` order; the first line fully held by
/// one mark wins. In reachable play at most one line can be completed by a
/// move, so the order never matters in practice. A draw is reported iff the
/// board is full and no line is complete; any other non-winning board is
/// still in progress. Total over every board configuration, deterministic,
/// no side effects.
pub fn evaluate(board: &Board) -> Outcome {
    let xs = board.marks(Mark::X);
    let os = board.marks(Mark::O);
    for line in &WIN_LINES {
        let mask = line_mask(line);
        let winner = if xs.contains_all(mask) {
            Some(Mark::X)
        } else if os.contains_all(mask) {
            Some(Mark::O)
        } else {
            None
        };
        if winner.is_some() {
            return Outcome {
                winner,
                line: Some(*line),
                is_draw: false,
            };
        }
    }
    Outcome {
        winner: None,
        line: None,
        is_draw: board.is_full(),
    }
}
