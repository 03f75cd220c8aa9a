//! Timed operation sequences.

use std::fmt;

use algolens_scene::{SceneError, SceneOps};

type StepOp = Box<dyn Fn(&mut dyn SceneOps) -> Result<(), SceneError>>;

/// One timed operation inside a plan.
///
/// The operation runs once, then the executor waits `wait_after` tick
/// pulses before entering the next step. Waits are unsigned, so a
/// malformed negative wait cannot be constructed.
pub struct PlanStep {
    wait_after: u32,
    op: StepOp,
}

impl PlanStep {
    /// Pulses to wait after applying this step.
    pub fn wait_after(&self) -> u32 {
        self.wait_after
    }

    /// Run the operation against a scene.
    pub fn apply(&self, scene: &mut dyn SceneOps) -> Result<(), SceneError> {
        (self.op)(scene)
    }
}

impl fmt::Debug for PlanStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanStep")
            .field("wait_after", &self.wait_after)
            .finish_non_exhaustive()
    }
}

/// An ordered sequence of timed steps translating one event.
///
/// A plan is a flat timeline: apply operation, wait, next operation.
#[derive(Debug, Default)]
pub struct AnimationPlan {
    steps: Vec<PlanStep>,
}

impl AnimationPlan {
    /// A plan with no steps. Draining it does nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A single immediate step with no wait.
    pub fn instant<F>(op: F) -> Self
    where
        F: Fn(&mut dyn SceneOps) -> Result<(), SceneError> + 'static,
    {
        Self::builder().step(0, op).build()
    }

    pub fn builder() -> PlanBuilder {
        PlanBuilder { steps: Vec::new() }
    }

    /// The steps in execution order.
    pub fn steps(&self) -> &[PlanStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Pulses a fresh executor needs to drain this plan: one per step plus
    /// every step's wait.
    pub fn total_ticks(&self) -> u64 {
        self.steps
            .iter()
            .map(|s| 1 + u64::from(s.wait_after))
            .sum()
    }
}

/// Builds a plan step by step.
pub struct PlanBuilder {
    steps: Vec<PlanStep>,
}

impl PlanBuilder {
    /// Append a step: run `op` once, then wait `wait_after` pulses.
    pub fn step<F>(mut self, wait_after: u32, op: F) -> Self
    where
        F: Fn(&mut dyn SceneOps) -> Result<(), SceneError> + 'static,
    {
        self.steps.push(PlanStep {
            wait_after,
            op: Box::new(op),
        });
        self
    }

    pub fn build(self) -> AnimationPlan {
        AnimationPlan { steps: self.steps }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algolens_layout::{Layout, LinearLayout};
    use algolens_scene::{HeadlessRenderer, Scene, SceneOps};
    use glam::DVec3;

    fn started_scene(values: &[i64]) -> Scene<HeadlessRenderer> {
        let mut scene = Scene::new(HeadlessRenderer::new());
        scene.on_start(&LinearLayout::default().compute(values, DVec3::ZERO));
        scene
    }

    #[test]
    fn empty_plan_has_no_ticks() {
        let plan = AnimationPlan::empty();
        assert!(plan.is_empty());
        assert_eq!(plan.total_ticks(), 0);
    }

    #[test]
    fn instant_plan_is_one_step_no_wait() {
        let plan = AnimationPlan::instant(|scene| scene.set_highlighted(0, true));
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.steps()[0].wait_after(), 0);
        assert_eq!(plan.total_ticks(), 1);
    }

    #[test]
    fn total_ticks_counts_steps_and_waits() {
        let plan = AnimationPlan::builder()
            .step(5, |s| s.set_highlighted(0, true))
            .step(0, |s| s.set_highlighted(0, false))
            .step(3, |s| s.clear_highlights())
            .build();
        assert_eq!(plan.total_ticks(), 3 + 5 + 3);
    }

    #[test]
    fn steps_apply_in_order() {
        let mut scene = started_scene(&[1, 2]);
        let plan = AnimationPlan::builder()
            .step(0, |s| s.set_value(0, 7))
            .step(0, |s| s.set_value(0, 9))
            .build();

        for step in plan.steps() {
            step.apply(&mut scene).unwrap();
        }
        assert_eq!(scene.value_at(0), Ok(9));
    }

    #[test]
    fn steps_are_replayable() {
        let mut scene = started_scene(&[1, 2]);
        let plan = AnimationPlan::instant(|s| s.swap_slots(0, 1));

        plan.steps()[0].apply(&mut scene).unwrap();
        plan.steps()[0].apply(&mut scene).unwrap();
        assert_eq!(scene.value_at(0), Ok(1));
    }
}
