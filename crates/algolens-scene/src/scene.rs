//! Slot-to-visual mapping and its mutation rules.

use std::collections::BTreeSet;

use glam::DVec3;

use algolens_layout::PlacedSlot;
use algolens_model::Severity;

use crate::capability::{Effect, Result, SceneError, SceneOps};
use crate::renderer::{DisplayHandle, Renderer};

/// How far a lifted visual rises above its home position.
const LIFT_HEIGHT: f64 = 0.6;

/// One slot's visual identity.
#[derive(Debug, Clone, Copy)]
struct SlotVisual {
    handle: DisplayHandle,
    value: i64,
    /// The slot's resting position; effects displace the visual from here.
    home: DVec3,
}

/// The persistent visual scene.
///
/// Owns the bijection between slot ids `[0, n)` and visual objects. Slots
/// keep their positions; `swap_slots` moves the *objects* between slots, so
/// an object created at start lives until `clean_up` no matter how often
/// the algorithm reorders values.
pub struct Scene<R: Renderer> {
    renderer: R,
    slots: Vec<SlotVisual>,
    /// Highlighted slot ids, tracked explicitly; never derived from visuals.
    highlighted: BTreeSet<usize>,
    started: bool,
}

impl<R: Renderer> Scene<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            slots: Vec::new(),
            highlighted: BTreeSet::new(),
            started: false,
        }
    }

    /// Create one visual per placed slot.
    ///
    /// A scene that was already started is torn down and rebuilt.
    pub fn on_start(&mut self, placed: &[PlacedSlot]) {
        if self.started {
            self.clean_up();
        }

        for slot in placed {
            let handle = self
                .renderer
                .create(slot.position, &slot.value.to_string());
            self.slots.push(SlotVisual {
                handle,
                value: slot.value,
                home: slot.position,
            });
        }
        self.started = true;
        tracing::info!(slots = placed.len(), "scene started");
    }

    /// Destroy every visual and forget all state.
    ///
    /// Safe to call repeatedly; each object is removed exactly once.
    pub fn clean_up(&mut self) {
        for slot in self.slots.drain(..) {
            self.renderer.remove(slot.handle);
        }
        self.highlighted.clear();
        if self.started {
            tracing::info!("scene cleaned up");
        }
        self.started = false;
    }

    /// Force the scene to match a recorded state.
    ///
    /// Used when stepping back: values, positions, and highlights are set
    /// directly, bypassing animation. A slot-count change rebuilds the
    /// scene from scratch.
    pub fn sync_to(&mut self, placed: &[PlacedSlot], highlighted: &BTreeSet<usize>) -> Result<()> {
        if !self.started || placed.len() != self.slots.len() {
            self.on_start(placed);
        } else {
            let Self {
                renderer, slots, ..
            } = self;
            for (slot, p) in slots.iter_mut().zip(placed) {
                slot.value = p.value;
                slot.home = p.position;
                renderer.move_to(slot.handle, p.position);
                renderer.set_label(slot.handle, &p.value.to_string());
            }
        }

        self.clear_highlights()?;
        for &slot in highlighted {
            self.set_highlighted(slot, true)?;
        }
        Ok(())
    }

    /// Value currently shown at a slot.
    pub fn value_at(&self, slot: usize) -> Result<i64> {
        self.check_slot(slot)?;
        Ok(self.slots[slot].value)
    }

    /// Number of slots, zero before `on_start`.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check whether the scene holds no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether the scene is between `on_start` and `clean_up`.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Borrow the renderer (hosts poll it, tests inspect it).
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn check_slot(&self, slot: usize) -> Result<()> {
        if !self.started {
            return Err(SceneError::NotStarted);
        }
        if slot >= self.slots.len() {
            return Err(SceneError::InvalidIndex {
                slot,
                len: self.slots.len(),
            });
        }
        Ok(())
    }
}

impl<R: Renderer> SceneOps for Scene<R> {
    fn set_value(&mut self, slot: usize, value: i64) -> Result<()> {
        self.check_slot(slot)?;
        self.slots[slot].value = value;
        let handle = self.slots[slot].handle;
        self.renderer.set_label(handle, &value.to_string());
        Ok(())
    }

    fn set_highlighted(&mut self, slot: usize, highlighted: bool) -> Result<()> {
        self.check_slot(slot)?;
        let handle = self.slots[slot].handle;
        self.renderer.set_highlight(handle, highlighted);
        if highlighted {
            self.highlighted.insert(slot);
        } else {
            self.highlighted.remove(&slot);
        }
        Ok(())
    }

    fn is_highlighted(&self, slot: usize) -> Result<bool> {
        self.check_slot(slot)?;
        Ok(self.highlighted.contains(&slot))
    }

    fn clear_highlights(&mut self) -> Result<()> {
        if !self.started {
            return Err(SceneError::NotStarted);
        }
        let Self {
            renderer,
            slots,
            highlighted,
            ..
        } = self;
        for &slot in highlighted.iter() {
            if let Some(visual) = slots.get(slot) {
                renderer.set_highlight(visual.handle, false);
            }
        }
        highlighted.clear();
        Ok(())
    }

    fn move_slot_to(&mut self, slot: usize, position: DVec3) -> Result<()> {
        self.check_slot(slot)?;
        self.slots[slot].home = position;
        let handle = self.slots[slot].handle;
        self.renderer.move_to(handle, position);
        Ok(())
    }

    fn swap_slots(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_slot(a)?;
        self.check_slot(b)?;
        if a == b {
            return Ok(());
        }

        // Objects trade places; the slots' home positions stay put.
        let home_a = self.slots[a].home;
        let home_b = self.slots[b].home;
        self.slots.swap(a, b);
        self.slots[a].home = home_a;
        self.slots[b].home = home_b;
        self.renderer.move_to(self.slots[a].handle, home_a);
        self.renderer.move_to(self.slots[b].handle, home_b);

        // Highlight membership travels with the objects.
        let a_was = self.highlighted.contains(&a);
        let b_was = self.highlighted.contains(&b);
        if a_was != b_was {
            if a_was {
                self.highlighted.remove(&a);
                self.highlighted.insert(b);
            } else {
                self.highlighted.remove(&b);
                self.highlighted.insert(a);
            }
        }
        Ok(())
    }

    fn play_effect(&mut self, slot: usize, effect: Effect) -> Result<()> {
        self.check_slot(slot)?;
        let visual = self.slots[slot];
        let target = match effect {
            Effect::Lift => visual.home + DVec3::new(0.0, LIFT_HEIGHT, 0.0),
            Effect::Settle => visual.home,
        };
        self.renderer.move_to(visual.handle, target);
        Ok(())
    }

    fn set_status_text(&mut self, text: &str, severity: Severity) -> Result<()> {
        if !self.started {
            return Err(SceneError::NotStarted);
        }
        self.renderer.set_status(text, severity);
        Ok(())
    }
}
