//! Array-backed weight and predecessor storage
//!
//! `SimpleShortestPaths` keeps vertex weights and predecessors in flat
//! vectors indexed by vertex id, sized to the graph's maximum vertex id at
//! construction so sparse id sets index safely. The client supplies only the
//! edge-weight function, and optionally a heuristic for A* search. The
//! storage becomes stale if the graph's vertex set grows afterward.

use crate::graph::Graph;
use crate::shortest::PathWeights;

fn zero_heuristic(_v: u32) -> f64 {
    0.0
}

/// Stock [`PathWeights`] implementation over flat arrays
pub struct SimpleShortestPaths<E, H = fn(u32) -> f64> {
    weights: Vec<f64>,
    predecessors: Vec<u32>,
    edge_weight: E,
    heuristic: H,
}

impl<E> SimpleShortestPaths<E>
where
    E: Fn(u32, u32) -> f64,
{
    /// Storage sized for `graph`, weighting edges with `edge_weight`
    ///
    /// `edge_weight(u, v)` must return +∞ for edges not in the graph.
    pub fn new<G: Graph>(graph: &G, edge_weight: E) -> Self {
        let capacity = graph.max_vertex() as usize + 1;
        SimpleShortestPaths {
            weights: vec![f64::INFINITY; capacity],
            predecessors: vec![0; capacity],
            edge_weight,
            heuristic: zero_heuristic,
        }
    }
}

impl<E, H> SimpleShortestPaths<E, H>
where
    E: Fn(u32, u32) -> f64,
    H: Fn(u32) -> f64,
{
    /// Replace the heuristic, turning the search into A*
    ///
    /// `heuristic(v)` estimates the remaining distance from `v` to the
    /// destination and must never overestimate it.
    pub fn with_heuristic<H2>(self, heuristic: H2) -> SimpleShortestPaths<E, H2>
    where
        H2: Fn(u32) -> f64,
    {
        SimpleShortestPaths {
            weights: self.weights,
            predecessors: self.predecessors,
            edge_weight: self.edge_weight,
            heuristic,
        }
    }
}

impl<E, H> PathWeights for SimpleShortestPaths<E, H>
where
    E: Fn(u32, u32) -> f64,
    H: Fn(u32) -> f64,
{
    fn weight(&self, v: u32) -> f64 {
        self.weights
            .get(v as usize)
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    fn set_weight(&mut self, v: u32, w: f64) {
        if let Some(slot) = self.weights.get_mut(v as usize) {
            *slot = w;
        }
    }

    fn predecessor(&self, v: u32) -> u32 {
        self.predecessors.get(v as usize).copied().unwrap_or(0)
    }

    fn set_predecessor(&mut self, v: u32, u: u32) {
        if let Some(slot) = self.predecessors.get_mut(v as usize) {
            *slot = u;
        }
    }

    fn edge_weight(&self, u: u32, v: u32) -> f64 {
        (self.edge_weight)(u, v)
    }

    fn estimated_distance(&self, v: u32) -> f64 {
        (self.heuristic)(v)
    }
}
