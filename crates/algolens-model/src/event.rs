//! Semantic events emitted by algorithm micro-steps.

use serde::{Deserialize, Serialize};

/// Severity tag for status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Neutral narration
    Info,
    /// A step that made progress (element in place, traversal done)
    Success,
    /// Something went wrong
    Error,
    /// A nudge toward the next interaction
    Hint,
}

/// One observable effect of an algorithm micro-step.
///
/// Events carry slot indices and small payloads only, never visual state.
/// The animation layer decides how each event looks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Two slots were compared without changing data
    Compare { a: usize, b: usize },

    /// Two slots exchanged their values
    Swap { a: usize, b: usize },

    /// A slot became notable (visited, under the cursor)
    Highlight { slot: usize },

    /// Narration for the status display
    Message { text: String, severity: Severity },

    /// The algorithm reached its terminal state
    Complete,

    /// Reserved for step-level invariant checks
    Validate,
}

impl Event {
    /// Convenience constructor for narration events.
    pub fn message(text: impl Into<String>, severity: Severity) -> Self {
        Event::Message {
            text: text.into(),
            severity,
        }
    }

    /// The fieldless discriminant used as a dispatch registry key.
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Compare { .. } => EventKind::Compare,
            Event::Swap { .. } => EventKind::Swap,
            Event::Highlight { .. } => EventKind::Highlight,
            Event::Message { .. } => EventKind::Message,
            Event::Complete => EventKind::Complete,
            Event::Validate => EventKind::Validate,
        }
    }
}

/// Discriminant of [`Event`], used to key animation handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Compare,
    Swap,
    Highlight,
    Message,
    Complete,
    Validate,
}
