//! Row-major grid layout.

use glam::DVec3;

use crate::{Layout, PlacedSlot};

/// Arranges slots in a row-major grid in the XZ plane.
///
/// Used for graph visualizations where vertex count outgrows a circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Slots per row
    pub columns: usize,
    /// Distance between adjacent slots in both axes
    pub spacing: f64,
}

impl GridLayout {
    /// Create a grid layout.
    ///
    /// # Panics
    ///
    /// Panics if `columns` is zero or `spacing` is not strictly positive.
    pub fn new(columns: usize, spacing: f64) -> Self {
        assert!(columns > 0, "columns must be > 0");
        assert!(spacing > 0.0, "spacing must be > 0");
        Self { columns, spacing }
    }
}

impl Layout for GridLayout {
    fn compute(&self, values: &[i64], origin: DVec3) -> Vec<PlacedSlot> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let row = i / self.columns;
                let col = i % self.columns;
                PlacedSlot {
                    position: DVec3::new(
                        origin.x + col as f64 * self.spacing,
                        origin.y,
                        origin.z + row as f64 * self.spacing,
                    ),
                    value,
                }
            })
            .collect()
    }
}
