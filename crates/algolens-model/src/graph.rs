//! Undirected graph model for traversal algorithms.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// An undirected graph stored as adjacency lists.
///
/// Vertices are identified by index; a vertex's slot in the visualization
/// is its index here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Create a graph with `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); n],
        }
    }

    /// Generate a random connected undirected graph.
    ///
    /// Builds a random spanning tree (each vertex attaches to a uniformly
    /// chosen earlier vertex), then adds up to `extra_edges` additional
    /// edges between non-adjacent vertex pairs.
    pub fn random_connected(n: usize, extra_edges: usize, rng: &mut dyn RngCore) -> Self {
        let mut graph = Self::new(n);

        for v in 1..n {
            let parent = rng.gen_range(0..v);
            graph.add_edge(v, parent);
        }

        if n >= 2 {
            for _ in 0..extra_edges {
                let a = rng.gen_range(0..n);
                let b = rng.gen_range(0..n);
                if a != b && !graph.has_edge(a, b) {
                    graph.add_edge(a, b);
                }
            }
        }

        graph
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Check if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    /// Add an undirected edge between `a` and `b`.
    ///
    /// Self-loops and duplicate edges are ignored.
    pub fn add_edge(&mut self, a: usize, b: usize) {
        if a == b || a >= self.len() || b >= self.len() || self.has_edge(a, b) {
            return;
        }
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
    }

    /// Check whether an edge exists between `a` and `b`.
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.adjacency.get(a).is_some_and(|n| n.contains(&b))
    }

    /// Neighbors of `v` in insertion order.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        self.adjacency.get(v).map_or(&[], Vec::as_slice)
    }
}
