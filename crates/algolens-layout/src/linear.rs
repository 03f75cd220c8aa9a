//! Straight-line layout along the X axis.

use glam::DVec3;

use crate::{Layout, PlacedSlot};

/// Arranges slots in a straight horizontal line along +X.
///
/// All slots share a constant height; vertical position does not depend on
/// the slot's value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearLayout {
    /// Distance between consecutive slots
    pub spacing: f64,
    /// Added to `origin.y`
    pub y_offset: f64,
    /// Added to `origin.z`
    pub z_offset: f64,
}

impl LinearLayout {
    /// Create a linear layout.
    ///
    /// # Panics
    ///
    /// Panics if `spacing` is not strictly positive.
    pub fn new(spacing: f64, y_offset: f64, z_offset: f64) -> Self {
        assert!(spacing > 0.0, "spacing must be > 0");
        Self {
            spacing,
            y_offset,
            z_offset,
        }
    }
}

impl Default for LinearLayout {
    fn default() -> Self {
        Self::new(2.0, 1.0, 0.0)
    }
}

impl Layout for LinearLayout {
    fn compute(&self, values: &[i64], origin: DVec3) -> Vec<PlacedSlot> {
        let y = origin.y + self.y_offset;
        let z = origin.z + self.z_offset;

        values
            .iter()
            .enumerate()
            .map(|(i, &value)| PlacedSlot {
                position: DVec3::new(origin.x + i as f64 * self.spacing, y, z),
                value,
            })
            .collect()
    }
}
