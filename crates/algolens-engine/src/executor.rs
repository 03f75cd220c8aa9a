//! Time-driven animation plan player.

use std::collections::VecDeque;
use std::time::Duration;

use algolens_dispatch::AnimationPlan;
use algolens_scene::SceneOps;

use crate::pulse::{TickPulse, TICK_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExecState {
    Idle,
    Running,
    Paused,
}

/// A plan being drained, one step per pulse.
struct InFlight {
    plan: AnimationPlan,
    index: usize,
    ticks_remaining: u32,
}

impl InFlight {
    fn new(plan: AnimationPlan) -> Self {
        Self {
            plan,
            index: 0,
            ticks_remaining: 0,
        }
    }
}

/// Plays queued animation plans to completion, in order, never
/// interleaving two plans' steps.
///
/// Time comes from an external pulse source. Every step consumes at least
/// one pulse, even a zero-wait step, so plan timing is reproducible and
/// a long queue can never apply itself in one burst. When the queue
/// drains, the executor detaches from the pulse source entirely.
pub struct Executor<P: TickPulse> {
    pulse: P,
    queue: VecDeque<AnimationPlan>,
    current: Option<InFlight>,
    state: ExecState,
    speed: u32,
}

impl<P: TickPulse> Executor<P> {
    pub fn new(pulse: P) -> Self {
        Self {
            pulse,
            queue: VecDeque::new(),
            current: None,
            state: ExecState::Idle,
            speed: 1,
        }
    }

    /// Enqueue a plan. Safe to call while running; empty plans are skipped.
    pub fn add(&mut self, plan: AnimationPlan) {
        if plan.is_empty() {
            return;
        }
        self.queue.push_back(plan);
    }

    /// Begin consuming the queue if nothing is running or paused.
    pub fn start_if_idle(&mut self) {
        if self.state != ExecState::Idle || self.queue.is_empty() {
            return;
        }
        self.state = ExecState::Running;
        self.pulse.start(self.interval());
    }

    /// Suspend without losing position.
    pub fn pause(&mut self) {
        if self.state == ExecState::Running {
            self.state = ExecState::Paused;
            self.pulse.cancel();
        }
    }

    /// Resume exactly where `pause` stopped.
    pub fn resume(&mut self) {
        if self.state == ExecState::Paused {
            self.state = ExecState::Running;
            self.pulse.start(self.interval());
        }
    }

    /// Change the pulse interval; queue and in-flight plan are untouched.
    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed.max(1);
        if self.state == ExecState::Running {
            self.pulse.cancel();
            self.pulse.start(self.interval());
        }
    }

    /// True only with nothing queued and nothing mid-flight.
    pub fn is_idle(&self) -> bool {
        self.state == ExecState::Idle && self.current.is_none() && self.queue.is_empty()
    }

    pub fn is_paused(&self) -> bool {
        self.state == ExecState::Paused
    }

    /// Hard reset: drop the queue, drop the in-flight plan, detach.
    pub fn on_cleanup(&mut self) {
        self.queue.clear();
        self.current = None;
        self.state = ExecState::Idle;
        self.pulse.cancel();
    }

    /// Borrow the pulse source (hosts wire it up, tests inspect it).
    pub fn pulse(&self) -> &P {
        &self.pulse
    }

    /// Consume one pulse of plan progress.
    ///
    /// A failing step operation is logged and skipped; one bad operation
    /// never stalls the queue.
    pub fn tick(&mut self, scene: &mut dyn SceneOps) {
        if self.state != ExecState::Running {
            return;
        }

        // A step mid-wait consumes this pulse.
        if let Some(flight) = self.current.as_mut() {
            if flight.ticks_remaining > 0 {
                flight.ticks_remaining -= 1;
                let plan_done =
                    flight.ticks_remaining == 0 && flight.index >= flight.plan.len();
                if plan_done {
                    self.finish_plan();
                }
                return;
            }
        } else {
            self.current = self.queue.pop_front().map(InFlight::new);
        }

        let Some(flight) = self.current.as_mut() else {
            self.state = ExecState::Idle;
            self.pulse.cancel();
            tracing::debug!("queue drained, pulse detached");
            return;
        };

        if let Some(step) = flight.plan.steps().get(flight.index) {
            let wait = step.wait_after();
            if let Err(err) = step.apply(scene) {
                tracing::warn!(step = flight.index, error = %err, "plan step failed, continuing");
            }
            flight.ticks_remaining = wait;
            flight.index += 1;
        }

        let plan_done = self
            .current
            .as_ref()
            .is_some_and(|f| f.index >= f.plan.len() && f.ticks_remaining == 0);
        if plan_done {
            self.finish_plan();
        }
    }

    fn finish_plan(&mut self) {
        self.current = None;
        if self.queue.is_empty() {
            self.state = ExecState::Idle;
            self.pulse.cancel();
        }
    }

    fn interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.speed) * TICK_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pulse::ManualPulse;
    use algolens_layout::{Layout, LinearLayout};
    use algolens_scene::{HeadlessRenderer, Scene};
    use glam::DVec3;

    fn started_scene(values: &[i64]) -> Scene<HeadlessRenderer> {
        let mut scene = Scene::new(HeadlessRenderer::new());
        scene.on_start(&LinearLayout::default().compute(values, DVec3::ZERO));
        scene
    }

    fn executor() -> Executor<ManualPulse> {
        Executor::new(ManualPulse::new())
    }

    fn set_value_plan(slot: usize, value: i64, wait: u32) -> AnimationPlan {
        AnimationPlan::builder()
            .step(wait, move |s| s.set_value(slot, value))
            .build()
    }

    #[test]
    fn starts_idle_and_detached() {
        let exec = executor();
        assert!(exec.is_idle());
        assert!(!exec.pulse().is_active());
    }

    #[test]
    fn empty_plans_are_not_queued() {
        let mut exec = executor();
        exec.add(AnimationPlan::empty());
        exec.start_if_idle();
        assert!(exec.is_idle());
        assert!(!exec.pulse().is_active());
    }

    #[test]
    fn each_step_consumes_at_least_one_pulse() {
        let mut exec = executor();
        let mut scene = started_scene(&[0]);

        exec.add(set_value_plan(0, 1, 0));
        exec.add(set_value_plan(0, 2, 0));
        exec.start_if_idle();

        exec.tick(&mut scene);
        assert_eq!(scene.value_at(0), Ok(1));

        exec.tick(&mut scene);
        assert_eq!(scene.value_at(0), Ok(2));
        assert!(exec.is_idle());
    }

    #[test]
    fn wait_delays_the_next_step() {
        let mut exec = executor();
        let mut scene = started_scene(&[0]);

        exec.add(
            AnimationPlan::builder()
                .step(2, |s| s.set_value(0, 1))
                .step(0, |s| s.set_value(0, 2))
                .build(),
        );
        exec.start_if_idle();

        exec.tick(&mut scene); // applies step 0
        assert_eq!(scene.value_at(0), Ok(1));
        exec.tick(&mut scene); // wait 1 of 2
        exec.tick(&mut scene); // wait 2 of 2
        assert_eq!(scene.value_at(0), Ok(1));
        exec.tick(&mut scene); // applies step 1
        assert_eq!(scene.value_at(0), Ok(2));
        assert!(exec.is_idle());
    }

    #[test]
    fn idle_convergence_bound() {
        let mut exec = executor();
        let mut scene = started_scene(&[0, 0]);

        let plans = [
            AnimationPlan::builder()
                .step(3, |s| s.set_value(0, 1))
                .step(1, |s| s.set_value(1, 1))
                .build(),
            set_value_plan(0, 2, 4),
            AnimationPlan::instant(|s| s.set_highlighted(1, true)),
        ];
        let budget: u64 = plans.iter().map(AnimationPlan::total_ticks).sum();
        for plan in plans {
            exec.add(plan);
        }
        exec.start_if_idle();

        for _ in 0..budget {
            exec.tick(&mut scene);
        }
        assert!(exec.is_idle());
        assert!(!exec.pulse().is_active());

        // Idle stays idle.
        exec.tick(&mut scene);
        assert!(exec.is_idle());
    }

    #[test]
    fn plans_never_interleave() {
        let mut exec = executor();
        let mut scene = started_scene(&[0]);

        exec.add(
            AnimationPlan::builder()
                .step(1, |s| s.set_value(0, 1))
                .step(0, |s| s.set_value(0, 2))
                .build(),
        );
        exec.add(set_value_plan(0, 3, 0));
        exec.start_if_idle();

        exec.tick(&mut scene);
        exec.tick(&mut scene); // still waiting inside plan 1
        assert_eq!(scene.value_at(0), Ok(1));
        exec.tick(&mut scene); // plan 1 step 2
        assert_eq!(scene.value_at(0), Ok(2));
        exec.tick(&mut scene); // plan 2 only now
        assert_eq!(scene.value_at(0), Ok(3));
    }

    #[test]
    fn pause_and_resume_preserve_position() {
        let mut exec = executor();
        let mut scene = started_scene(&[0]);

        exec.add(
            AnimationPlan::builder()
                .step(1, |s| s.set_value(0, 1))
                .step(0, |s| s.set_value(0, 2))
                .build(),
        );
        exec.start_if_idle();
        exec.tick(&mut scene);

        exec.pause();
        assert!(exec.is_paused());
        assert!(!exec.pulse().is_active());

        // Pulses while paused do nothing.
        exec.tick(&mut scene);
        exec.tick(&mut scene);
        assert_eq!(scene.value_at(0), Ok(1));

        exec.resume();
        exec.tick(&mut scene); // finishes the wait
        exec.tick(&mut scene); // applies step 2
        assert_eq!(scene.value_at(0), Ok(2));
        assert!(exec.is_idle());
    }

    #[test]
    fn resume_without_pause_is_a_no_op() {
        let mut exec = executor();
        exec.resume();
        assert!(exec.is_idle());
        assert!(!exec.pulse().is_active());
    }

    #[test]
    fn set_speed_restarts_subscription_preserving_state() {
        let mut exec = executor();
        let mut scene = started_scene(&[0]);

        exec.add(set_value_plan(0, 1, 3));
        exec.start_if_idle();
        exec.tick(&mut scene);

        let starts_before = exec.pulse().starts();
        exec.set_speed(4);
        assert_eq!(exec.pulse().starts(), starts_before + 1);
        assert_eq!(
            exec.pulse().interval(),
            Some(Duration::from_millis(4 * TICK_MS))
        );

        // The in-flight wait carries on.
        exec.tick(&mut scene);
        exec.tick(&mut scene);
        exec.tick(&mut scene);
        assert!(exec.is_idle());
    }

    #[test]
    fn set_speed_zero_is_clamped() {
        let mut exec = executor();
        exec.set_speed(0);
        exec.add(set_value_plan(0, 1, 0));
        exec.start_if_idle();
        assert_eq!(
            exec.pulse().interval(),
            Some(Duration::from_millis(TICK_MS))
        );
    }

    #[test]
    fn failing_step_does_not_stall_the_queue() {
        let mut exec = executor();
        let mut scene = started_scene(&[0]);

        exec.add(
            AnimationPlan::builder()
                .step(0, |s| s.set_value(99, 1)) // out of range
                .step(0, |s| s.set_value(0, 2))
                .build(),
        );
        exec.start_if_idle();

        exec.tick(&mut scene);
        exec.tick(&mut scene);
        assert_eq!(scene.value_at(0), Ok(2));
        assert!(exec.is_idle());
    }

    #[test]
    fn cleanup_drops_everything() {
        let mut exec = executor();
        let mut scene = started_scene(&[0]);

        exec.add(set_value_plan(0, 1, 5));
        exec.add(set_value_plan(0, 2, 5));
        exec.start_if_idle();
        exec.tick(&mut scene);

        exec.on_cleanup();
        assert!(exec.is_idle());
        assert!(!exec.pulse().is_active());

        // Nothing left to play.
        exec.tick(&mut scene);
        assert_eq!(scene.value_at(0), Ok(1));
    }

    #[test]
    fn add_while_running_extends_the_queue() {
        let mut exec = executor();
        let mut scene = started_scene(&[0]);

        exec.add(set_value_plan(0, 1, 0));
        exec.start_if_idle();
        exec.add(set_value_plan(0, 2, 0));

        exec.tick(&mut scene);
        exec.tick(&mut scene);
        assert_eq!(scene.value_at(0), Ok(2));
        assert!(exec.is_idle());
    }
}
