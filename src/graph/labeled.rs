//! Labeled graph decorator
//!
//! `LabeledGraph` wraps any [`Graph`] and associates a label of an arbitrary
//! type with each vertex and each edge, without polluting the base store's
//! integer-only model. All structural operations delegate to the wrapped
//! graph; removals drop the associated labels. Edge labels are keyed by the
//! store's `edge_id`, so both orientations of an undirected edge share one
//! label.

use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::iter::Iteration;

/// A graph whose vertices and edges carry labels of types `VL` and `EL`
#[derive(Debug)]
pub struct LabeledGraph<G, VL, EL> {
    graph: G,
    vertex_labels: HashMap<u32, VL>,
    edge_labels: HashMap<u64, EL>,
}

impl<G: Graph, VL, EL> LabeledGraph<G, VL, EL> {
    /// Decorate `graph` with empty label tables
    pub fn new(graph: G) -> Self {
        LabeledGraph {
            graph,
            vertex_labels: HashMap::new(),
            edge_labels: HashMap::new(),
        }
    }

    /// The wrapped graph
    pub fn inner(&self) -> &G {
        &self.graph
    }

    /// Unwrap, discarding all labels
    pub fn into_inner(self) -> G {
        self.graph
    }

    /// Add a new vertex carrying `label` and return its id
    pub fn add_labeled_vertex(&mut self, label: VL) -> u32 {
        let v = self.graph.add_vertex();
        self.vertex_labels.insert(v, label);
        v
    }

    /// Add the edge (u, v) carrying `label`, auto-creating absent endpoints.
    /// Re-adding an existing edge replaces its label.
    pub fn add_labeled_edge(&mut self, u: u32, v: u32, label: EL) -> Result<u32> {
        self.graph.add_edge(u, v)?;
        let id = self.graph.edge_id(u, v);
        self.edge_labels.insert(id, label);
        Ok(u)
    }

    /// Attach `label` to the existing vertex `v`
    pub fn set_vertex_label(&mut self, v: u32, label: VL) -> Result<()> {
        self.graph.check_vertex(v)?;
        self.vertex_labels.insert(v, label);
        Ok(())
    }

    /// Attach `label` to the existing edge (u, v)
    pub fn set_edge_label(&mut self, u: u32, v: u32, label: EL) -> Result<()> {
        if !self.graph.contains_edge(u, v) {
            return Err(GraphError::EdgeNotFound { u, v });
        }
        let id = self.graph.edge_id(u, v);
        self.edge_labels.insert(id, label);
        Ok(())
    }

    /// The label of vertex `v`, if any
    pub fn vertex_label(&self, v: u32) -> Option<&VL> {
        self.vertex_labels.get(&v)
    }

    /// Mutable access to the label of vertex `v`, if any
    pub fn vertex_label_mut(&mut self, v: u32) -> Option<&mut VL> {
        self.vertex_labels.get_mut(&v)
    }

    /// The label of edge (u, v), if any
    pub fn edge_label(&self, u: u32, v: u32) -> Option<&EL> {
        let id = self.graph.edge_id(u, v);
        if id == 0 {
            return None;
        }
        self.edge_labels.get(&id)
    }

    /// Mutable access to the label of edge (u, v), if any
    pub fn edge_label_mut(&mut self, u: u32, v: u32) -> Option<&mut EL> {
        let id = self.graph.edge_id(u, v);
        if id == 0 {
            return None;
        }
        self.edge_labels.get_mut(&id)
    }
}

impl<G: Graph, VL, EL> Graph for LabeledGraph<G, VL, EL> {
    fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }

    fn vertex_size(&self) -> usize {
        self.graph.vertex_size()
    }

    fn max_vertex(&self) -> u32 {
        self.graph.max_vertex()
    }

    fn edge_size(&self) -> usize {
        self.graph.edge_size()
    }

    fn contains(&self, v: u32) -> bool {
        self.graph.contains(v)
    }

    fn contains_edge(&self, u: u32, v: u32) -> bool {
        self.graph.contains_edge(u, v)
    }

    fn add_vertex(&mut self) -> u32 {
        self.graph.add_vertex()
    }

    fn add_edge(&mut self, u: u32, v: u32) -> Result<u32> {
        self.graph.add_edge(u, v)
    }

    fn remove_vertex(&mut self, v: u32) {
        let incident: Vec<u64> = self
            .graph
            .successors(v)
            .map(|s| self.graph.edge_id(v, s))
            .chain(self.graph.predecessors(v).map(|p| self.graph.edge_id(p, v)))
            .collect();
        self.graph.remove_vertex(v);
        for id in incident {
            self.edge_labels.remove(&id);
        }
        self.vertex_labels.remove(&v);
    }

    fn remove_edge(&mut self, u: u32, v: u32) {
        let id = self.graph.edge_id(u, v);
        self.graph.remove_edge(u, v);
        if id != 0 {
            self.edge_labels.remove(&id);
        }
    }

    fn out_degree(&self, v: u32) -> usize {
        self.graph.out_degree(v)
    }

    fn in_degree(&self, v: u32) -> usize {
        self.graph.in_degree(v)
    }

    fn successor(&self, v: u32, k: usize) -> u32 {
        self.graph.successor(v, k)
    }

    fn predecessor(&self, v: u32, k: usize) -> u32 {
        self.graph.predecessor(v, k)
    }

    fn vertices(&self) -> Iteration<'_, u32> {
        self.graph.vertices()
    }

    fn successors(&self, v: u32) -> Iteration<'_, u32> {
        self.graph.successors(v)
    }

    fn predecessors(&self, v: u32) -> Iteration<'_, u32> {
        self.graph.predecessors(v)
    }

    fn edges(&self) -> Iteration<'_, (u32, u32)> {
        self.graph.edges()
    }

    fn edge_id(&self, u: u32, v: u32) -> u64 {
        self.graph.edge_id(u, v)
    }

    fn check_vertex(&self, v: u32) -> Result<()> {
        self.graph.check_vertex(v)
    }
}
