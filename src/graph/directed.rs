//! General unlabeled directed graph
//!
//! Vertices are denoted by positive integers; self edges are allowed.

use crate::error::Result;
use crate::graph::store::GraphStore;
use crate::graph::Graph;
use crate::iter::Iteration;

/// A directed graph: (u, v) and (v, u) are distinct edges
#[derive(Debug)]
pub struct DirectedGraph {
    store: GraphStore,
}

impl DirectedGraph {
    /// A new, empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            store: GraphStore::new(true),
        }
    }
}

impl Default for DirectedGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph for DirectedGraph {
    fn is_directed(&self) -> bool {
        true
    }

    fn vertex_size(&self) -> usize {
        self.store.vertex_size()
    }

    fn max_vertex(&self) -> u32 {
        self.store.max_vertex()
    }

    fn edge_size(&self) -> usize {
        self.store.edge_size()
    }

    fn contains(&self, v: u32) -> bool {
        self.store.contains(v)
    }

    fn contains_edge(&self, u: u32, v: u32) -> bool {
        self.store.contains_edge(u, v)
    }

    fn add_vertex(&mut self) -> u32 {
        self.store.add_vertex()
    }

    fn add_edge(&mut self, u: u32, v: u32) -> Result<u32> {
        self.store.add_edge(u, v)
    }

    fn remove_vertex(&mut self, v: u32) {
        self.store.remove_vertex(v);
    }

    fn remove_edge(&mut self, u: u32, v: u32) {
        self.store.remove_edge(u, v);
    }

    fn out_degree(&self, v: u32) -> usize {
        self.store.out_degree(v)
    }

    fn in_degree(&self, v: u32) -> usize {
        self.store.in_degree_directed(v)
    }

    fn successor(&self, v: u32, k: usize) -> u32 {
        self.store.successor(v, k)
    }

    fn predecessor(&self, v: u32, k: usize) -> u32 {
        self.store.predecessor_directed(v, k)
    }

    fn vertices(&self) -> Iteration<'_, u32> {
        self.store.vertices()
    }

    fn successors(&self, v: u32) -> Iteration<'_, u32> {
        self.store.successors(v)
    }

    fn predecessors(&self, v: u32) -> Iteration<'_, u32> {
        self.store.predecessors_directed(v)
    }

    fn edges(&self) -> Iteration<'_, (u32, u32)> {
        self.store.edges()
    }

    fn edge_id(&self, u: u32, v: u32) -> u64 {
        self.store.edge_id(u, v)
    }

    fn check_vertex(&self, v: u32) -> Result<()> {
        self.store.check_vertex(v)
    }
}
