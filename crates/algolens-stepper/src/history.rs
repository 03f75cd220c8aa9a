//! Append-only snapshot history with a cursor.

use algolens_model::Snapshot;

/// Ordered snapshots plus the position the visualization is looking at.
///
/// Snapshots are only ever appended or discarded wholesale; the cursor
/// moves one position at a time and never leaves the recorded range.
#[derive(Debug, Default)]
pub struct History {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot and move the cursor onto it.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> Option<&Snapshot> {
        self.snapshots.get(self.cursor)
    }

    /// Advance the cursor if the next snapshot is already recorded.
    pub fn forward(&mut self) -> Option<&Snapshot> {
        if self.cursor + 1 < self.snapshots.len() {
            self.cursor += 1;
            self.snapshots.get(self.cursor)
        } else {
            None
        }
    }

    /// Step the cursor back, returning the snapshot it lands on.
    pub fn back(&mut self) -> Option<&Snapshot> {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.snapshots.get(self.cursor)
        } else {
            None
        }
    }

    /// Discard everything.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = 0;
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check whether nothing is recorded yet.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the cursor sits on the newest snapshot.
    pub fn at_frontier(&self) -> bool {
        self.snapshots.is_empty() || self.cursor == self.snapshots.len() - 1
    }
}
