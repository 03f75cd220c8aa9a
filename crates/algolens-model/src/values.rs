//! Slot-indexed integer sequence.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// A mutable, slot-indexed sequence of integers.
///
/// A value's identity is its slot index; algorithms mutate the sequence in
/// place and the visualization layer tracks slots, never raw values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValueSeq(Vec<i64>);

impl ValueSeq {
    /// Wrap an existing sequence.
    pub fn new(values: Vec<i64>) -> Self {
        Self(values)
    }

    /// Create a sequence of `n` values drawn uniformly from `min..=max`.
    pub fn random(n: usize, min: i64, max: i64, rng: &mut dyn RngCore) -> Self {
        let values = (0..n).map(|_| rng.gen_range(min..=max)).collect();
        Self(values)
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the sequence has no slots.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value at `slot`, or `None` outside `[0, len)`.
    pub fn get(&self, slot: usize) -> Option<i64> {
        self.0.get(slot).copied()
    }

    /// Overwrite the value at `slot`.
    ///
    /// Returns `false` if `slot` is out of range.
    pub fn set(&mut self, slot: usize, value: i64) -> bool {
        match self.0.get_mut(slot) {
            Some(v) => {
                *v = value;
                true
            }
            None => false,
        }
    }

    /// Exchange the values at two slots.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }

    /// Borrow the raw values.
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    /// Copy the values out (for snapshotting).
    pub fn to_vec(&self) -> Vec<i64> {
        self.0.clone()
    }

    /// Fisher–Yates shuffle in place.
    pub fn shuffle(&mut self, rng: &mut dyn RngCore) {
        self.0.shuffle(rng);
    }

    /// Count of out-of-order pairs `(i, j)` with `i < j` and `v[i] > v[j]`.
    ///
    /// An adjacent-swap sort performs exactly this many swaps.
    pub fn inversions(&self) -> usize {
        let mut count = 0;
        for i in 0..self.0.len() {
            for j in (i + 1)..self.0.len() {
                if self.0[i] > self.0[j] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Check whether the sequence is sorted ascending.
    pub fn is_sorted(&self) -> bool {
        self.0.windows(2).all(|w| w[0] <= w[1])
    }
}

impl From<Vec<i64>> for ValueSeq {
    fn from(values: Vec<i64>) -> Self {
        Self(values)
    }
}
