//! Algolens Layouts
//!
//! Pure functions mapping slot indices to world positions. A layout decides
//! where each slot's visual lives; it never touches the scene itself. The
//! engine computes a layout once on start and again when it hard-syncs after
//! stepping back.

mod circle;
mod grid;
mod linear;

use glam::DVec3;

pub use circle::CircleLayout;
pub use grid::GridLayout;
pub use linear::LinearLayout;

/// One slot placed in the world, paired with its initial value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedSlot {
    /// World position of the slot's visual
    pub position: DVec3,
    /// Value the slot holds at layout time
    pub value: i64,
}

/// A slot-to-position function.
///
/// Implementations must be pure: the same values and origin always produce
/// the same placements, one per slot, in slot order.
pub trait Layout {
    fn compute(&self, values: &[i64], origin: DVec3) -> Vec<PlacedSlot>;
}
