//! Breadth-first traversal, one edge at a time.

use std::collections::{BTreeSet, VecDeque};

use rand::RngCore;

use algolens_model::{Event, Graph, Severity};

use crate::{Algorithm, StepOutcome};

/// Breadth-first search over a random connected graph.
///
/// Each micro-step performs one observable action: dequeue-and-visit a
/// vertex, or examine one edge out of the current vertex. Discovered
/// vertices stay highlighted, so the highlight set is the visited set.
pub struct BfsTraversal {
    graph: Graph,
    start_vertex: usize,
    visited: Vec<bool>,
    queue: VecDeque<usize>,
    current: Option<usize>,
    neighbor_index: usize,
    highlights: BTreeSet<usize>,
}

impl BfsTraversal {
    /// Traverse `graph` from vertex 0.
    pub fn new(graph: Graph) -> Self {
        let mut traversal = Self {
            graph,
            start_vertex: 0,
            visited: Vec::new(),
            queue: VecDeque::new(),
            current: None,
            neighbor_index: 0,
            highlights: BTreeSet::new(),
        };
        traversal.reset_progress();
        traversal
    }

    fn reset_progress(&mut self) {
        let n = self.graph.len();
        self.visited = vec![false; n];
        self.queue.clear();
        self.current = None;
        self.neighbor_index = 0;
        self.highlights.clear();

        if self.start_vertex < n {
            self.visited[self.start_vertex] = true;
            self.queue.push_back(self.start_vertex);
            self.highlights.insert(self.start_vertex);
        }
    }
}

impl Algorithm for BfsTraversal {
    fn name(&self) -> &'static str {
        "breadth-first search"
    }

    fn values(&self) -> Vec<i64> {
        (0..self.graph.len() as i64).collect()
    }

    fn highlighted(&self) -> BTreeSet<usize> {
        self.highlights.clone()
    }

    fn advance(&mut self) -> StepOutcome {
        loop {
            match self.current {
                Some(u) if self.neighbor_index < self.graph.neighbors(u).len() => {
                    let v = self.graph.neighbors(u)[self.neighbor_index];
                    self.neighbor_index += 1;

                    let mut events = vec![
                        Event::Compare { a: u, b: v },
                        Event::message(
                            format!("Examining edge {} - {}", u, v),
                            Severity::Info,
                        ),
                    ];
                    if !self.visited[v] {
                        self.visited[v] = true;
                        self.queue.push_back(v);
                        self.highlights.insert(v);
                        events.push(Event::Highlight { slot: v });
                        events.push(Event::message(
                            format!("Discovered vertex {}", v),
                            Severity::Success,
                        ));
                    }
                    return StepOutcome {
                        events,
                        terminal: false,
                    };
                }
                Some(_) => {
                    // Current vertex exhausted; fall through to the queue.
                    self.current = None;
                }
                None => match self.queue.pop_front() {
                    Some(u) => {
                        self.current = Some(u);
                        self.neighbor_index = 0;
                        self.highlights.insert(u);
                        return StepOutcome {
                            events: vec![
                                Event::Highlight { slot: u },
                                Event::message(
                                    format!("Visiting vertex {}", u),
                                    Severity::Info,
                                ),
                            ],
                            terminal: false,
                        };
                    }
                    None => {
                        return StepOutcome {
                            events: vec![Event::message(
                                "Traversal complete",
                                Severity::Success,
                            )],
                            terminal: true,
                        };
                    }
                },
            }
        }
    }

    fn randomize(&mut self, rng: &mut dyn RngCore) {
        let n = self.graph.len().max(2);
        self.graph = Graph::random_connected(n, n / 3, rng);
        self.reset_progress();
    }
}
