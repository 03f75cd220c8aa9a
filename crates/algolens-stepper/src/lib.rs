//! Algolens Steppers
//!
//! Advances an algorithm one observable micro-step at a time and records
//! every step in an append-only history. Stepping back replays stored
//! snapshots exactly; stepping forward computes only at the frontier.
//!
//! # Architecture
//!
//! - [`Algorithm`]: the per-algorithm state machine (one micro-step per call)
//! - [`History`]: append-only snapshot list with a cursor
//! - [`Stepper`]: glues the two together and owns the seeded randomness

mod error;
mod history;
mod sorting;
mod stepper;
mod traversal;

use std::collections::BTreeSet;

use rand::RngCore;

use algolens_model::Event;

pub use error::{Result, StepperError};
pub use history::History;
pub use sorting::InsertionSort;
pub use stepper::Stepper;
pub use traversal::BfsTraversal;

/// What one micro-step produced.
#[derive(Debug, Default)]
pub struct StepOutcome {
    /// Events emitted by this step, in order
    pub events: Vec<Event>,
    /// Whether the termination predicate now holds
    pub terminal: bool,
}

/// A step-at-a-time algorithm over a slot-indexed value sequence.
///
/// Implementations mutate their data in place; the stepper snapshots the
/// observable state after every call. `advance` must not be called again
/// once it reported `terminal`; the stepper guards that boundary.
pub trait Algorithm {
    /// Human-readable name for narration and registry keys.
    fn name(&self) -> &'static str;

    /// Current values, one per slot.
    fn values(&self) -> Vec<i64>;

    /// Slots the algorithm currently considers notable.
    fn highlighted(&self) -> BTreeSet<usize>;

    /// Perform exactly one observable micro-step.
    fn advance(&mut self) -> StepOutcome;

    /// Re-randomize the data and reset all progress.
    fn randomize(&mut self, rng: &mut dyn RngCore);
}
