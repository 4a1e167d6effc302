//! Append-only-with-truncation sequence of board snapshots.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::board::Snapshot;
use crate::common::GameError;
use crate::config::NUM_CELLS;

/// Ordered move history plus the cursor selecting the current step.
///
/// Indices into the history are steps (ply numbers); step 0 is always the
/// empty starting position. Appending from a cursor before the last step
/// discards the abandoned future first (branching). Jumping moves only the
/// cursor and never discards snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl History {
    /// A history holding only the empty starting snapshot.
    pub fn new() -> Self {
        // A finished game records at most ten snapshots.
        let mut snapshots = Vec::with_capacity(NUM_CELLS + 1);
        snapshots.push(Snapshot::initial());
        History {
            snapshots,
            cursor: 0,
        }
    }

    /// Truncate everything after the cursor, then append `snapshot` and move
    /// the cursor onto it.
    pub fn append(&mut self, snapshot: Snapshot) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Move the cursor to `step` without touching the stored snapshots.
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        if step >= self.snapshots.len() {
            return Err(GameError::OutOfRange {
                index: step,
                limit: self.snapshots.len(),
            });
        }
        self.cursor = step;
        Ok(())
    }

    /// Snapshot at the cursor.
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    /// Current step (ply number) selected by the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded steps, including the starting position.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Iterate snapshots in step order.
    pub fn iter(&self) -> core::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }
}
