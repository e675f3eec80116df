//! General unlabeled undirected graph
//!
//! Out edges and in edges are not distinguished, and likewise successors
//! and predecessors. A self-loop is a single edge that contributes two to
//! the vertex's degree.

use crate::error::Result;
use crate::graph::store::GraphStore;
use crate::graph::Graph;
use crate::iter::Iteration;

/// An undirected graph: (u, v) and (v, u) denote the same edge
#[derive(Debug)]
pub struct UndirectedGraph {
    store: GraphStore,
}

impl UndirectedGraph {
    /// A new, empty undirected graph
    pub fn new() -> Self {
        UndirectedGraph {
            store: GraphStore::new(false),
        }
    }
}

impl Default for UndirectedGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph for UndirectedGraph {
    fn is_directed(&self) -> bool {
        false
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
        self.store.out_degree(v)
    }

    fn successor(&self, v: u32, k: usize) -> u32 {
        self.store.successor(v, k)
    }

    fn predecessor(&self, v: u32, k: usize) -> u32 {
        self.store.successor(v, k)
    }

    fn vertices(&self) -> Iteration<'_, u32> {
        self.store.vertices()
    }

    fn successors(&self, v: u32) -> Iteration<'_, u32> {
        self.store.successors(v)
    }

    fn predecessors(&self, v: u32) -> Iteration<'_, u32> {
        self.store.successors(v)
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
