//! The capability interface animation steps mutate.

use glam::DVec3;
use thiserror::Error;

use algolens_model::Severity;

/// Result type for scene operations.
pub type Result<T> = std::result::Result<T, SceneError>;

/// Errors surfaced by scene operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    /// Operation called before `on_start` or after `clean_up`
    #[error("Scene not started")]
    NotStarted,

    /// Slot index outside `[0, len)`
    #[error("Invalid slot {slot} (scene has {len} slots)")]
    InvalidIndex { slot: usize, len: usize },
}

/// A transient emphasis effect applied to one slot's visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Raise the visual above its home position
    Lift,
    /// Return the visual to its home position
    Settle,
}

/// The narrow mutation surface animation steps operate on.
///
/// Plans hold closures over this trait, never over a concrete scene, so
/// they can be built ahead of time and replayed against any scene state.
pub trait SceneOps {
    /// Set the value (and label) shown at a slot.
    fn set_value(&mut self, slot: usize, value: i64) -> Result<()>;

    /// Toggle a slot's highlight.
    fn set_highlighted(&mut self, slot: usize, highlighted: bool) -> Result<()>;

    /// Check whether a slot is currently highlighted.
    fn is_highlighted(&self, slot: usize) -> Result<bool>;

    /// Undo every highlight ever set, whatever set it.
    fn clear_highlights(&mut self) -> Result<()>;

    /// Re-home a slot's visual to a new position.
    fn move_slot_to(&mut self, slot: usize, position: DVec3) -> Result<()>;

    /// Exchange two slots' visual identities without destroying either.
    fn swap_slots(&mut self, a: usize, b: usize) -> Result<()>;

    /// Play an emphasis effect on one slot.
    fn play_effect(&mut self, slot: usize, effect: Effect) -> Result<()>;

    /// Update the status display.
    fn set_status_text(&mut self, text: &str, severity: Severity) -> Result<()>;
}
