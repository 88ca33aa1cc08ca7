//! Linear undo/redo history for the doodle editor.

use super::element::DrawElement;
use serde::{Deserialize, Serialize};

/// Linear history of committed element lists.
///
/// Each snapshot stores the entire element list, not a diff; lists stay
/// small (tens of elements) so full copies are fine. The cursor indexes the
/// current snapshot, with `None` meaning the implicit before-first position
/// (empty canvas). Committing while the cursor is not at the tail discards
/// everything beyond it: no branching timeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<Vec<DrawElement>>,
    cursor: Option<usize>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new snapshot, truncating any redo-able entries.
    pub fn commit(&mut self, elements: Vec<DrawElement>) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.snapshots.truncate(keep);
        self.snapshots.push(elements);
        self.cursor = Some(self.snapshots.len() - 1);
    }

    /// Step the cursor back one snapshot.
    ///
    /// Returns the element list to restore: the previous snapshot, or an
    /// empty list when stepping off the first snapshot (the before-first
    /// position keeps the history intact). `None` means nothing to undo.
    pub fn undo(&mut self) -> Option<Vec<DrawElement>> {
        match self.cursor {
            Some(0) => {
                self.cursor = None;
                Some(Vec::new())
            }
            Some(i) => {
                self.cursor = Some(i - 1);
                Some(self.snapshots[i - 1].clone())
            }
            None => None,
        }
    }

    /// Step the cursor forward one snapshot.
    ///
    /// Returns the element list to restore, or `None` at the tail.
    pub fn redo(&mut self) -> Option<Vec<DrawElement>> {
        let next = match self.cursor {
            None => 0,
            Some(i) => i + 1,
        };
        if next < self.snapshots.len() {
            self.cursor = Some(next);
            Some(self.snapshots[next].clone())
        } else {
            None
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        match self.cursor {
            None => !self.snapshots.is_empty(),
            Some(i) => i + 1 < self.snapshots.len(),
        }
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if no snapshot has been recorded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
