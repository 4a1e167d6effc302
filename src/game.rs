//! Game controller: validates intents, owns the history, derives the view.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};

use crate::board::{Board, Snapshot};
use crate::common::{GameError, Mark};
use crate::config::{BOARD_SIZE, NUM_CELLS};
use crate::history::History;
use crate::outcome::{evaluate, Outcome};
use crate::view::{GameView, MoveEntry};

/// Current status of a game. Always derived from the current board via
/// [`evaluate`], never stored, so it cannot drift from the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Drawn,
}

/// The three intents the presentation layer may emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Place the next player's mark at a cell index 0..9.
    PlaceMark(usize),
    /// Move the cursor to a recorded step.
    JumpTo(usize),
    /// Flip the move-list display order.
    ToggleSort,
}

/// Core game logic holding the move history and display preferences.
///
/// Every operation is a synchronous, bounded state transition; rejected
/// operations leave the engine untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    history: History,
    ascending: bool,
}

impl GameEngine {
    /// Create a new engine holding an empty starting position.
    pub fn new() -> Self {
        GameEngine {
            history: History::new(),
            ascending: true,
        }
    }

    /// Immutable view of the move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Board at the current step.
    pub fn board(&self) -> Board {
        self.history.current().board
    }

    /// Current step (ply number).
    pub fn current_step(&self) -> usize {
        self.history.cursor()
    }

    /// Current move-list display order.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// The mark that moves next. X moves on odd ply numbers, so the next
    /// mark depends only on the parity of the current step, even after a
    /// jump.
    pub fn next_mark(&self) -> Mark {
        if self.history.cursor() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Classify the current board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board())
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        let outcome = self.outcome();
        if outcome.winner.is_some() {
            GameStatus::Won
        } else if outcome.is_draw {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        }
    }

    /// Place the next player's mark at `index`.
    ///
    /// Valid only while the game is in progress and the cell is empty.
    /// Rejections are errors and leave the engine unchanged. A successful
    /// placement made from a step before the last recorded one abandons
    /// the moves after it.
    pub fn place_mark(&mut self, index: usize) -> Result<(), GameError> {
        if index >= NUM_CELLS {
            return Err(GameError::OutOfRange {
                index,
                limit: NUM_CELLS,
            });
        }
        if self.status() != GameStatus::InProgress {
            return Err(GameError::GameConcluded);
        }
        let mut board = self.board();
        board.place(index, self.next_mark())?;
        self.history.append(Snapshot {
            board,
            last_move: Some(index),
        });
        Ok(())
    }

    /// Move the cursor to a recorded step. Permitted even after a win or a
    /// draw, since it inspects history rather than playing.
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        self.history.jump_to(step)
    }

    /// Flip the move-list display order. Affects presentation only.
    pub fn toggle_sort(&mut self) {
        self.ascending = !self.ascending;
    }

    /// Apply one presentation intent and return the recomputed view.
    pub fn apply(&mut self, intent: Intent) -> Result<GameView, GameError> {
        match intent {
            Intent::PlaceMark(index) => self.place_mark(index)?,
            Intent::JumpTo(step) => self.jump_to(step)?,
            Intent::ToggleSort => self.toggle_sort(),
        }
        Ok(self.view())
    }

    /// Recompute the full view model from the current state.
    pub fn view(&self) -> GameView {
        let board = self.board();
        let outcome = evaluate(&board);

        let mut cells = [""; NUM_CELLS];
        for (index, slot) in cells.iter_mut().enumerate() {
            if let Some(mark) = board.cell(index) {
                *slot = mark.as_str();
            }
        }

        let status_text = if let Some(mark) = outcome.winner {
            format!("Winner: {}", mark)
        } else if outcome.is_draw {
            String::from("Draw")
        } else {
            format!("Next player: {}", self.next_mark())
        };

        let mut move_list: Vec<MoveEntry> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, snapshot)| MoveEntry {
                label: move_label(step, snapshot),
                step,
            })
            .collect();
        if !self.ascending {
            move_list.reverse();
        }

        GameView {
            board: cells,
            winning_line: outcome.line,
            status_text,
            move_list,
            is_ascending: self.ascending,
        }
    }
}

/// Label for one history entry: the placed mark and its 1-based (row, col).
fn move_label(step: usize, snapshot: &Snapshot) -> String {
    match snapshot.last_move {
        Some(index) => {
            let mark = snapshot
                .board
                .cell(index)
                .map(Mark::as_str)
                .unwrap_or("?");
            let row = 1 + index / BOARD_SIZE;
            let col = 1 + index % BOARD_SIZE;
            format!("Go to move #{}: {} ({}, {})", step, mark, row, col)
        }
        None => String::from("Go to game start"),
    }
}
