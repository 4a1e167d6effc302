//! Read-only view model handed to the presentation layer.
//!
//! The presentation layer renders exclusively from these values and feeds
//! intents back into the engine; nothing here refers back into live state.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use crate::config::NUM_CELLS;

/// One entry of the displayed move list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveEntry {
    /// Human-readable label, e.g. `Go to move #3: X (3, 3)`.
    pub label: String,
    /// Step to jump to when the entry is selected.
    pub step: usize,
}

/// Everything the presentation layer needs to render one frame.
///
/// Recomputed from scratch after every intent; holds no references into the
/// engine, so a renderer can keep it while the next intent is queued.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameView {
    /// Cell contents in index order: `""`, `"X"` or `"O"`.
    pub board: [&'static str; NUM_CELLS],
    /// Indices of the completed line, when the game is won.
    pub winning_line: Option<[usize; 3]>,
    /// Status line: winner, draw, or next player.
    pub status_text: String,
    /// Move list in display order (already reversed when descending).
    pub move_list: Vec<MoveEntry>,
    /// Current move-list display order.
    pub is_ascending: bool,
}
