//! Event-to-plan translation registry.

use std::collections::HashMap;

use algolens_model::{Event, EventKind};

use crate::plan::AnimationPlan;

/// Wait constants for the built-in choreographies, in tick pulses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Pause while slots are lifted for emphasis
    pub emphasis: u32,
    /// Pause after two slots exchange places
    pub exchange: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            emphasis: 5,
            exchange: 5,
        }
    }
}

/// What a handler may know about the visualization while building a plan.
#[derive(Debug, Clone, Copy)]
pub struct DispatchContext {
    /// Number of slots in the scene
    pub len: usize,
    /// Choreography waits
    pub timing: Timing,
}

impl DispatchContext {
    pub fn new(len: usize, timing: Timing) -> Self {
        Self { len, timing }
    }
}

/// A pure translation from one event to a plan.
pub type Handler = Box<dyn Fn(&Event, &DispatchContext) -> AnimationPlan>;

/// Registry mapping event kinds to handlers.
///
/// Dispatch fails closed: an event kind with no registered handler yields
/// the empty plan, since snapshots may carry event kinds this build does
/// not know how to animate.
#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<EventKind, Handler>,
}

impl Dispatcher {
    /// An empty registry. Every dispatch returns the empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the canonical handlers installed.
    pub fn with_defaults() -> Self {
        let mut dispatcher = Self::new();
        crate::handlers::register_defaults(&mut dispatcher);
        dispatcher
    }

    /// Install (or replace) the handler for an event kind.
    pub fn register<F>(&mut self, kind: EventKind, handler: F)
    where
        F: Fn(&Event, &DispatchContext) -> AnimationPlan + 'static,
    {
        self.handlers.insert(kind, Box::new(handler));
    }

    /// Check whether a handler is registered for an event kind.
    pub fn is_registered(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Translate one event into a plan.
    pub fn dispatch(&self, event: &Event, ctx: &DispatchContext) -> AnimationPlan {
        match self.handlers.get(&event.kind()) {
            Some(handler) => handler(event, ctx),
            None => {
                tracing::debug!(kind = ?event.kind(), "no handler registered, skipping event");
                AnimationPlan::empty()
            }
        }
    }
}
