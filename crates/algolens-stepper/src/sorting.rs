//! Insertion sort, one comparison at a time.

use std::collections::BTreeSet;

use rand::RngCore;

use algolens_model::{Event, Severity, ValueSeq};

use crate::{Algorithm, StepOutcome};

/// Insertion sort as a micro-step state machine.
///
/// `outer` is the sorted/unsorted boundary; `inner` walks the current
/// element toward its place, `None` between passes. Every step performs
/// exactly one comparison; a step whose comparison is out of order also
/// swaps, atomically, and its events carry both `Compare` and `Swap`.
pub struct InsertionSort {
    values: ValueSeq,
    outer: usize,
    inner: Option<usize>,
    highlights: BTreeSet<usize>,
}

impl InsertionSort {
    pub fn new(values: ValueSeq) -> Self {
        Self {
            values,
            outer: 1,
            inner: None,
            highlights: BTreeSet::new(),
        }
    }
}

impl Algorithm for InsertionSort {
    fn name(&self) -> &'static str {
        "insertion sort"
    }

    fn values(&self) -> Vec<i64> {
        self.values.to_vec()
    }

    fn highlighted(&self) -> BTreeSet<usize> {
        self.highlights.clone()
    }

    fn advance(&mut self) -> StepOutcome {
        self.highlights.clear();
        let len = self.values.len();

        // Sequences of zero or one element are sorted before the first pass.
        if self.outer >= len {
            return StepOutcome {
                events: vec![Event::message("Sorting complete", Severity::Success)],
                terminal: true,
            };
        }

        let j = self.inner.unwrap_or(self.outer);
        self.highlights.insert(j);
        self.highlights.insert(j - 1);

        let mut events = vec![
            Event::Highlight { slot: j },
            Event::Highlight { slot: j - 1 },
            Event::Compare { a: j - 1, b: j },
            Event::message(
                format!("Comparing slots {} and {}", j - 1, j),
                Severity::Info,
            ),
        ];

        let v = self.values.as_slice();
        if v[j - 1] > v[j] {
            self.values.swap(j - 1, j);
            events.push(Event::Swap { a: j - 1, b: j });
            events.push(Event::message(
                format!("Swapped slots {} and {}", j - 1, j),
                Severity::Info,
            ));
            if j - 1 == 0 {
                // The element reached the front; this pass is finished.
                self.outer += 1;
                self.inner = None;
            } else {
                self.inner = Some(j - 1);
            }
        } else {
            events.push(Event::message(
                format!("Slot {} is in order", j),
                Severity::Success,
            ));
            self.outer += 1;
            self.inner = None;
        }

        let terminal = self.inner.is_none() && self.outer >= len;
        if terminal {
            self.highlights.clear();
            events.push(Event::message("Sorting complete", Severity::Success));
        }

        StepOutcome { events, terminal }
    }

    fn randomize(&mut self, rng: &mut dyn RngCore) {
        self.values.shuffle(rng);
        self.outer = 1;
        self.inner = None;
        self.highlights.clear();
    }
}
