//! Data-driven algorithm registry.

use std::collections::HashMap;

use rand::RngCore;

use algolens_layout::{GridLayout, Layout, LinearLayout};
use algolens_model::{Graph, ValueSeq};
use algolens_stepper::{Algorithm, BfsTraversal, InsertionSort};

use crate::error::{EngineError, Result};

/// Default slot count for freshly created visualizations.
const DEFAULT_SLOTS: usize = 10;

/// Builds one algorithm instance plus the layout it looks best in.
pub type AlgorithmFactory = Box<dyn Fn(&mut dyn RngCore) -> (Box<dyn Algorithm>, Box<dyn Layout>)>;

/// Table of algorithm factories keyed by name.
///
/// A plain lookup table: hosts register factories at startup and create
/// visualizations by key. Keys are case-insensitive.
#[derive(Default)]
pub struct AlgorithmRegistry {
    table: HashMap<String, AlgorithmFactory>,
}

impl AlgorithmRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the built-in algorithms installed.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register("insertion-sort", |rng| {
            let values = ValueSeq::random(DEFAULT_SLOTS, 1, 99, rng);
            (
                Box::new(InsertionSort::new(values)),
                Box::new(LinearLayout::default()),
            )
        });

        registry.register("bfs", |rng| {
            let graph = Graph::random_connected(DEFAULT_SLOTS, 3, rng);
            (
                Box::new(BfsTraversal::new(graph)),
                Box::new(GridLayout::new(4, 4.0)),
            )
        });

        registry
    }

    /// Install (or replace) a factory under `key`.
    pub fn register<F>(&mut self, key: &str, factory: F)
    where
        F: Fn(&mut dyn RngCore) -> (Box<dyn Algorithm>, Box<dyn Layout>) + 'static,
    {
        self.table.insert(key.to_lowercase(), Box::new(factory));
    }

    /// Create the algorithm and default layout registered under `key`.
    pub fn create(
        &self,
        key: &str,
        rng: &mut dyn RngCore,
    ) -> Result<(Box<dyn Algorithm>, Box<dyn Layout>)> {
        match self.table.get(&key.to_lowercase()) {
            Some(factory) => Ok(factory(rng)),
            None => Err(EngineError::UnknownAlgorithm(key.to_string())),
        }
    }

    /// Registered keys, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.table.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
