//! The public control surface.

use std::time::Duration;

use glam::DVec3;

use algolens_dispatch::{DispatchContext, Dispatcher, Timing};
use algolens_layout::Layout;
use algolens_model::Snapshot;
use algolens_scene::{Renderer, Scene};
use algolens_stepper::Stepper;

use crate::error::Result;
use crate::executor::Executor;
use crate::pulse::{TickPulse, TICK_MS};

/// Tunables for one visualization.
#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    /// Where the layout anchors the scene
    pub origin: DVec3,
    /// Pulses between automatic forward steps while running
    pub ticks_per_step: u32,
    /// Choreography waits handed to the dispatcher
    pub timing: Timing,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            origin: DVec3::ZERO,
            ticks_per_step: 20,
            timing: Timing::default(),
        }
    }
}

/// Owns and sequences stepper, dispatcher, executor and scene.
///
/// The controller is the only public surface: hosts call
/// `start`/`stop`/`step_forward`/`step_back`/`randomize`/`set_speed` and
/// deliver the two pulse streams (`on_step_pulse` for auto-run,
/// `on_anim_pulse` for animation time).
pub struct Controller<R: Renderer, P: TickPulse, Q: TickPulse> {
    stepper: Stepper,
    dispatcher: Dispatcher,
    scene: Scene<R>,
    executor: Executor<P>,
    layout: Box<dyn Layout>,
    step_pulse: Q,
    config: ControllerConfig,
    speed: u32,
    running: bool,
    started: bool,
}

impl<R: Renderer, P: TickPulse, Q: TickPulse> Controller<R, P, Q> {
    pub fn new(
        stepper: Stepper,
        layout: Box<dyn Layout>,
        scene: Scene<R>,
        executor: Executor<P>,
        step_pulse: Q,
        config: ControllerConfig,
    ) -> Self {
        Self {
            stepper,
            dispatcher: Dispatcher::with_defaults(),
            scene,
            executor,
            layout,
            step_pulse,
            config,
            speed: 1,
            running: false,
            started: false,
        }
    }

    /// Replace the default event handlers.
    pub fn with_dispatcher(mut self, dispatcher: Dispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    /// Build the scene from the initial snapshot and animate its events.
    ///
    /// Idempotent: a started controller does nothing.
    pub fn start(&mut self) -> Result<()> {
        if self.started {
            return Ok(());
        }
        let snapshot = self.stepper.start();
        let placed = self.layout.compute(&snapshot.values, self.config.origin);
        self.scene.on_start(&placed);
        self.started = true;
        self.enqueue(&snapshot);
        tracing::info!(algorithm = self.stepper.algorithm_name(), "controller started");
        Ok(())
    }

    /// Advance the algorithm one micro-step and queue its animations.
    ///
    /// The scene may still be draining earlier plans; that lag is the
    /// animation, bounded by the queue.
    pub fn step_forward(&mut self) -> Result<()> {
        let snapshot = self.stepper.step()?;
        self.enqueue(&snapshot);
        Ok(())
    }

    /// Step back one history position.
    ///
    /// Cancels whatever the executor is playing and hard-syncs the scene to
    /// the target snapshot. Returns `false` at the initial snapshot.
    pub fn step_back(&mut self) -> Result<bool> {
        let Some(snapshot) = self.stepper.back() else {
            return Ok(false);
        };
        self.executor.on_cleanup();
        let placed = self.layout.compute(&snapshot.values, self.config.origin);
        self.scene.sync_to(&placed, &snapshot.highlighted)?;
        Ok(true)
    }

    /// Discard history, re-randomize the data, and rebuild the scene.
    pub fn randomize(&mut self) -> Result<()> {
        self.stop();
        let snapshot = self.stepper.randomize()?;
        self.executor.on_cleanup();
        let placed = self.layout.compute(&snapshot.values, self.config.origin);
        self.scene.sync_to(&placed, &snapshot.highlighted)?;
        self.enqueue(&snapshot);
        Ok(())
    }

    /// Begin stepping automatically on the step pulse.
    pub fn run(&mut self) {
        if self.running || self.stepper.is_done() {
            return;
        }
        self.running = true;
        self.step_pulse.start(self.step_interval());
    }

    /// Stop automatic stepping. Queued animations keep draining.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.step_pulse.cancel();
        }
    }

    /// Change playback speed for both stepping and animation.
    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed.max(1);
        self.executor.set_speed(self.speed);
        if self.running {
            self.step_pulse.cancel();
            self.step_pulse.start(self.step_interval());
        }
    }

    /// Deliver one auto-run pulse.
    pub fn on_step_pulse(&mut self) -> Result<()> {
        if !self.running {
            return Ok(());
        }
        self.step_forward()?;
        if self.stepper.is_done() {
            self.stop();
        }
        Ok(())
    }

    /// Deliver one animation pulse.
    pub fn on_anim_pulse(&mut self) {
        self.executor.tick(&mut self.scene);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_done(&self) -> bool {
        self.stepper.is_done()
    }

    /// Full teardown. Not resumable.
    pub fn cleanup(&mut self) {
        self.stop();
        self.executor.on_cleanup();
        self.scene.clean_up();
        self.started = false;
    }

    pub fn scene(&self) -> &Scene<R> {
        &self.scene
    }

    pub fn executor(&self) -> &Executor<P> {
        &self.executor
    }

    pub fn stepper(&self) -> &Stepper {
        &self.stepper
    }

    pub fn step_pulse(&self) -> &Q {
        &self.step_pulse
    }

    fn enqueue(&mut self, snapshot: &Snapshot) {
        let ctx = DispatchContext::new(snapshot.len(), self.config.timing);
        for event in &snapshot.events {
            let plan = self.dispatcher.dispatch(event, &ctx);
            self.executor.add(plan);
        }
        self.executor.start_if_idle();
    }

    fn step_interval(&self) -> Duration {
        Duration::from_millis(
            u64::from(self.config.ticks_per_step) * u64::from(self.speed) * TICK_MS,
        )
    }
}
