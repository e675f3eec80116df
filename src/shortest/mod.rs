//! Shortest paths through an edge-weighted graph
//!
//! [`ShortestPaths`] computes minimum-weight paths from a source vertex,
//! optionally targeting a single destination, with a best-first (A*-style)
//! search built on the traversal engine and a priority fringe ordered by
//! `weight(v) + estimated_distance(v)`. Weight storage, edge weights, and
//! the heuristic come from a client-supplied [`PathWeights`]; the default
//! heuristic of 0 reduces the search to plain Dijkstra.
//! [`SimpleShortestPaths`] is the stock array-backed storage.

pub mod simple;

pub use simple::SimpleShortestPaths;

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::traversal::{PriorityFringe, Traversal, Visitor};

/// Client-supplied weighting and search-result storage
///
/// Weights of absent vertices and edges are positive infinity (treated as
/// unreachable, not an error); a predecessor of 0 means "none".
pub trait PathWeights {
    /// Current best-known weight of `v`, or +∞ if `v` is unknown
    fn weight(&self, v: u32) -> f64;

    /// Set the best-known weight of `v`
    fn set_weight(&mut self, v: u32, w: f64);

    /// Current predecessor of `v` on the best-known path, or 0 if none
    fn predecessor(&self, v: u32) -> u32;

    /// Set the predecessor of `v`
    fn set_predecessor(&mut self, v: u32, u: u32);

    /// Weight of the edge (u, v), or +∞ if the edge is absent
    fn edge_weight(&self, u: u32, v: u32) -> f64;

    /// Admissible estimate of the remaining distance from `v` to the
    /// destination; must never overestimate. Defaults to 0, which turns
    /// the A* search into Dijkstra's algorithm.
    fn estimated_distance(&self, v: u32) -> f64 {
        let _ = v;
        0.0
    }
}

/// Best-first relaxation visitor driving the search
struct AStarVisitor<'w, W> {
    weights: &'w mut W,
    dest: Option<u32>,
}

impl<G: Graph, W: PathWeights> Visitor<G> for AStarVisitor<'_, W> {
    fn visit(&mut self, graph: &G, v: u32) -> bool {
        if self.dest == Some(v) {
            tracing::debug!(vertex = v, "destination reached");
            return false;
        }
        let base = self.weights.weight(v);
        for s in graph.successors(v) {
            let through = base + self.weights.edge_weight(v, s);
            if through < self.weights.weight(s) {
                tracing::trace!(from = v, to = s, weight = through, "relaxed");
                self.weights.set_weight(s, through);
                self.weights.set_predecessor(s, v);
            }
        }
        true
    }

    fn priority(&self, v: u32) -> f64 {
        self.weights.weight(v) + self.weights.estimated_distance(v)
    }
}

/// Single-source shortest paths over `graph`, with storage `W`
///
/// Call [`set_paths`](Self::set_paths) before querying weights or paths.
/// The search assumes non-negative edge weights and an admissible heuristic;
/// results go stale if the graph mutates afterward (documented restriction,
/// not enforced).
pub struct ShortestPaths<'g, G, W> {
    graph: &'g G,
    source: u32,
    dest: Option<u32>,
    weights: W,
    computed: bool,
}

impl<'g, G: Graph, W: PathWeights> ShortestPaths<'g, G, W> {
    /// Shortest paths in `graph` from `source` to every reachable vertex
    pub fn new(graph: &'g G, source: u32, weights: W) -> Self {
        ShortestPaths {
            graph,
            source,
            dest: None,
            weights,
            computed: false,
        }
    }

    /// A shortest path in `graph` from `source` to `dest`; the search halts
    /// as soon as `dest` is visited
    pub fn to_dest(graph: &'g G, source: u32, dest: u32, weights: W) -> Self {
        ShortestPaths {
            graph,
            source,
            dest: Some(dest),
            weights,
            computed: false,
        }
    }

    /// The starting vertex
    pub fn source(&self) -> u32 {
        self.source
    }

    /// The target vertex, if any
    pub fn dest(&self) -> Option<u32> {
        self.dest
    }

    /// The weight storage, for reading back search results
    pub fn weights(&self) -> &W {
        &self.weights
    }

    /// Best-known weight of `v` after [`set_paths`](Self::set_paths); +∞
    /// means unreachable
    pub fn weight_to(&self, v: u32) -> f64 {
        self.weights.weight(v)
    }

    /// Predecessor of `v` on its shortest path, or 0 if none
    pub fn predecessor_of(&self, v: u32) -> u32 {
        self.weights.predecessor(v)
    }

    /// Compute the shortest paths. Must be called before `path_to`.
    ///
    /// Initializes every vertex's weight to +∞, seeds the source at 0, then
    /// runs the best-first traversal, relaxing each visited vertex's
    /// successors.
    #[tracing::instrument(skip(self), fields(source = self.source, dest = ?self.dest), level = "debug")]
    pub fn set_paths(&mut self) {
        for v in self.graph.vertices() {
            self.weights.set_weight(v, f64::INFINITY);
            self.weights.set_predecessor(v, 0);
        }
        self.weights.set_weight(self.source, 0.0);

        let graph = self.graph;
        let mut visitor = AStarVisitor {
            weights: &mut self.weights,
            dest: self.dest,
        };
        let mut traversal = Traversal::new(graph, PriorityFringe::new());
        traversal.traverse_from(self.source, &mut visitor);
        self.computed = true;
    }

    /// The shortest path from the source to `v`, as the vertex sequence
    /// starting at the source and ending at `v`
    ///
    /// For a destination-targeted search, only `v == dest` is guaranteed to
    /// be final. Fails if `set_paths` has not run or `v` is unreachable.
    pub fn path_to(&self, v: u32) -> Result<Vec<u32>> {
        if !self.computed {
            return Err(GraphError::paths_not_computed("path_to"));
        }
        if self.weights.weight(v).is_infinite() {
            return Err(GraphError::unreachable(self.source, v));
        }
        let mut path = vec![v];
        let mut current = v;
        while current != self.source {
            current = self.weights.predecessor(current);
            // A broken predecessor chain means v was never reached.
            if current == 0 || path.len() > self.graph.vertex_size() {
                return Err(GraphError::unreachable(self.source, v));
            }
            path.push(current);
        }
        path.reverse();
        Ok(path)
    }

    /// The shortest path from the source to the configured destination
    pub fn path(&self) -> Result<Vec<u32>> {
        match self.dest {
            Some(dest) => self.path_to(dest),
            None => Err(GraphError::NoDestination),
        }
    }
}
