//! Circular layout in the XZ plane.

use glam::DVec3;

use crate::{Layout, PlacedSlot};

/// Arranges slots evenly on a circle around the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleLayout {
    /// Circle radius
    pub radius: f64,
    /// Added to `origin.y`
    pub y_offset: f64,
}

impl CircleLayout {
    /// Create a circular layout.
    ///
    /// # Panics
    ///
    /// Panics if `radius` is not strictly positive.
    pub fn new(radius: f64, y_offset: f64) -> Self {
        assert!(radius > 0.0, "radius must be > 0");
        Self { radius, y_offset }
    }
}

impl Layout for CircleLayout {
    fn compute(&self, values: &[i64], origin: DVec3) -> Vec<PlacedSlot> {
        let n = values.len();
        let y = origin.y + self.y_offset;

        // A single slot sits at the origin rather than on a degenerate circle.
        if n <= 1 {
            return values
                .iter()
                .map(|&value| PlacedSlot {
                    position: DVec3::new(origin.x, y, origin.z),
                    value,
                })
                .collect();
        }

        values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let angle = (2.0 * std::f64::consts::PI * i as f64) / n as f64;
                PlacedSlot {
                    position: DVec3::new(
                        origin.x + angle.cos() * self.radius,
                        y,
                        origin.z + angle.sin() * self.radius,
                    ),
                    value,
                }
            })
            .collect()
    }
}
