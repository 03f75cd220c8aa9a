//! Immutable per-step captures of algorithm state.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::Event;

/// Everything observable about one history position.
///
/// A snapshot is built exactly once, when the algorithm takes a forward
/// micro-step, and is never mutated afterwards. Stepping back replays
/// stored snapshots; it never recomputes them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Value at each slot after this step
    pub values: Vec<i64>,
    /// Slots highlighted as of this step
    pub highlighted: BTreeSet<usize>,
    /// Events this step emitted, in emission order
    pub events: Vec<Event>,
    /// Whether the algorithm has terminated
    pub terminal: bool,
}

impl Snapshot {
    /// Capture a new snapshot.
    pub fn new(
        values: Vec<i64>,
        highlighted: BTreeSet<usize>,
        events: Vec<Event>,
        terminal: bool,
    ) -> Self {
        Self {
            values,
            highlighted,
            events,
            terminal,
        }
    }

    /// Number of slots in the captured sequence.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the captured sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check whether this snapshot carries an event of the given kind.
    pub fn has_event(&self, kind: crate::EventKind) -> bool {
        self.events.iter().any(|e| e.kind() == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EventKind, Severity};

    #[test]
    fn snapshot_default_is_empty() {
        let snap = Snapshot::default();
        assert!(snap.is_empty());
        assert!(!snap.terminal);
        assert!(snap.events.is_empty());
    }

    #[test]
    fn has_event_checks_kind() {
        let snap = Snapshot::new(
            vec![1, 2],
            BTreeSet::new(),
            vec![
                Event::Compare { a: 0, b: 1 },
                Event::message("comparing", Severity::Info),
            ],
            false,
        );
        assert!(snap.has_event(EventKind::Compare));
        assert!(snap.has_event(EventKind::Message));
        assert!(!snap.has_event(EventKind::Swap));
    }
}
