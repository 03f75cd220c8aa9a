//! The replayable stepper.

use rand::rngs::StdRng;
use rand::SeedableRng;

use algolens_model::{Event, Severity, Snapshot};

use crate::error::{Result, StepperError};
use crate::history::History;
use crate::Algorithm;

/// Drives an algorithm one micro-step per call and records every step.
///
/// The stepper owns the canonical data (through its algorithm) and the
/// history cursor. Forward steps into recorded history replay the stored
/// snapshot unchanged: same values, same events, nothing recomputed.
pub struct Stepper {
    algorithm: Box<dyn Algorithm>,
    history: History,
    rng: StdRng,
    started: bool,
}

impl Stepper {
    /// Create a stepper over an algorithm, seeding its randomness.
    pub fn new(algorithm: Box<dyn Algorithm>, seed: u64) -> Self {
        Self {
            algorithm,
            history: History::new(),
            rng: StdRng::seed_from_u64(seed),
            started: false,
        }
    }

    /// Record the initial snapshot and set the cursor to it.
    ///
    /// Calling `start` on a started stepper returns the snapshot under the
    /// cursor without touching any state.
    pub fn start(&mut self) -> Snapshot {
        if !self.started {
            let text = format!("Starting {}", self.algorithm.name());
            let snapshot = self.capture(vec![Event::message(text, Severity::Info)], false);
            self.history.push(snapshot);
            self.started = true;
            tracing::info!(algorithm = self.algorithm.name(), "stepper started");
        }
        self.current_snapshot()
    }

    /// Advance one micro-step.
    ///
    /// Replays the recorded snapshot when the cursor sits behind the
    /// frontier; computes a fresh step only at the frontier. After
    /// termination this returns the stored terminal snapshot unchanged.
    pub fn step(&mut self) -> Result<Snapshot> {
        if !self.started {
            return Err(StepperError::NotStarted);
        }

        if let Some(replayed) = self.history.forward() {
            return Ok(replayed.clone());
        }

        if self.is_done() {
            return Ok(self.current_snapshot());
        }

        let outcome = self.algorithm.advance();
        let mut events = outcome.events;
        if outcome.terminal {
            events.push(Event::Complete);
            tracing::info!(algorithm = self.algorithm.name(), "algorithm terminated");
        }

        let snapshot = self.capture(events, outcome.terminal);
        self.history.push(snapshot);
        Ok(self.current_snapshot())
    }

    /// Move the cursor back one step.
    ///
    /// Returns `None` at the initial snapshot (or before `start`); never
    /// recomputes anything.
    pub fn back(&mut self) -> Option<Snapshot> {
        if !self.started {
            return None;
        }
        self.history.back().cloned()
    }

    /// Discard all history and re-randomize the data.
    pub fn randomize(&mut self) -> Result<Snapshot> {
        if !self.started {
            return Err(StepperError::NotStarted);
        }

        self.algorithm.randomize(&mut self.rng);
        self.history.clear();
        let snapshot = self.capture(
            vec![Event::message("Values randomized", Severity::Hint)],
            false,
        );
        self.history.push(snapshot);
        tracing::info!(algorithm = self.algorithm.name(), "randomized");
        Ok(self.current_snapshot())
    }

    /// Whether the snapshot under the cursor is terminal.
    pub fn is_done(&self) -> bool {
        self.history.current().is_some_and(|s| s.terminal)
    }

    /// Current cursor position in history.
    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }

    /// Number of recorded snapshots.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Name of the underlying algorithm.
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }

    fn capture(&self, events: Vec<Event>, terminal: bool) -> Snapshot {
        Snapshot::new(
            self.algorithm.values(),
            self.algorithm.highlighted(),
            events,
            terminal,
        )
    }

    fn current_snapshot(&self) -> Snapshot {
        self.history.current().cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InsertionSort;
    use algolens_model::{EventKind, ValueSeq};

    fn sort_stepper(values: Vec<i64>) -> Stepper {
        Stepper::new(Box::new(InsertionSort::new(ValueSeq::new(values))), 1)
    }

    fn run_to_completion(stepper: &mut Stepper) -> Vec<Snapshot> {
        let mut snapshots = Vec::new();
        while !stepper.is_done() {
            snapshots.push(stepper.step().unwrap());
        }
        snapshots
    }

    #[test]
    fn step_before_start_fails() {
        let mut stepper = sort_stepper(vec![2, 1]);
        assert_eq!(stepper.step(), Err(StepperError::NotStarted));
        assert_eq!(stepper.randomize(), Err(StepperError::NotStarted));
        assert!(stepper.back().is_none());
    }

    #[test]
    fn start_emits_a_message_and_is_idempotent() {
        let mut stepper = sort_stepper(vec![2, 1]);
        let first = stepper.start();
        assert!(first.has_event(EventKind::Message));
        assert_eq!(stepper.cursor(), 0);

        let again = stepper.start();
        assert_eq!(again, first);
        assert_eq!(stepper.history_len(), 1);
    }

    #[test]
    fn back_at_initial_snapshot_is_none() {
        let mut stepper = sort_stepper(vec![2, 1]);
        stepper.start();
        assert!(stepper.back().is_none());
    }

    #[test]
    fn replay_is_exact() {
        let mut stepper = sort_stepper(vec![5, 3, 4, 1, 2]);
        stepper.start();

        let first_pass: Vec<Snapshot> = (0..4).map(|_| stepper.step().unwrap()).collect();
        for _ in 0..4 {
            stepper.back();
        }
        let second_pass: Vec<Snapshot> = (0..4).map(|_| stepper.step().unwrap()).collect();

        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn full_determinism_over_complete_run() {
        let mut stepper = sort_stepper(vec![5, 3, 4, 1, 2]);
        stepper.start();

        let first_pass = run_to_completion(&mut stepper);
        let n = first_pass.len();
        for _ in 0..n {
            assert!(stepper.back().is_some());
        }
        let second_pass: Vec<Snapshot> = (0..n).map(|_| stepper.step().unwrap()).collect();

        assert_eq!(first_pass, second_pass);
        // Replay appended nothing.
        assert_eq!(stepper.history_len(), n + 1);
    }

    #[test]
    fn terminal_step_is_idempotent() {
        let mut stepper = sort_stepper(vec![2, 1]);
        stepper.start();
        run_to_completion(&mut stepper);

        let len_before = stepper.history_len();
        let repeated = stepper.step().unwrap();
        assert!(repeated.terminal);
        assert!(repeated.has_event(EventKind::Complete));
        assert_eq!(stepper.history_len(), len_before);

        let repeated_again = stepper.step().unwrap();
        assert_eq!(repeated_again, repeated);
    }

    #[test]
    fn back_from_terminal_clears_done() {
        let mut stepper = sort_stepper(vec![2, 1]);
        stepper.start();
        run_to_completion(&mut stepper);
        assert!(stepper.is_done());

        stepper.back().unwrap();
        assert!(!stepper.is_done());
    }

    #[test]
    fn randomize_discards_history() {
        let mut stepper = sort_stepper(vec![3, 1, 2]);
        stepper.start();
        run_to_completion(&mut stepper);

        let snapshot = stepper.randomize().unwrap();
        assert!(!snapshot.terminal);
        assert!(!stepper.is_done());
        assert_eq!(stepper.history_len(), 1);
        assert!(stepper.back().is_none());
    }

    #[test]
    fn randomize_is_deterministic_per_seed() {
        let mut a = sort_stepper(vec![1, 2, 3, 4, 5, 6]);
        let mut b = sort_stepper(vec![1, 2, 3, 4, 5, 6]);
        a.start();
        b.start();

        let snap_a = a.randomize().unwrap();
        let snap_b = b.randomize().unwrap();
        assert_eq!(snap_a.values, snap_b.values);
    }
}
