//! Shared adjacency storage for directed and undirected graphs
//!
//! `GraphStore` owns the vertex and edge existence data: an integer-indexed
//! arena of successor lists plus the bookkeeping both graph variants share.
//! The directed and undirected front ends differ only in predecessor
//! computation and edge symmetry, so everything else lives here.

use std::collections::HashSet;

use crate::error::{GraphError, Result};
use crate::iter::Iteration;

/// Adjacency arena common to `DirectedGraph` and `UndirectedGraph`
///
/// Vertex ids are strictly positive; slot 0 of the arena is permanently
/// unused because 0 is the "no such vertex" sentinel. Each live vertex owns
/// an insertion-ordered list of its direct successors (out-edges for a
/// directed store, all incident edges for an undirected one). For undirected
/// stores the lists of `u` and `v` are kept symmetric, except self-loops,
/// which are recorded once in the list and tracked in `self_loops` so that
/// degree can count them twice while `edge_size` counts them once. Directed
/// stores additionally keep per-vertex predecessor lists, maintained in
/// edge insertion order alongside the successor lists.
#[derive(Debug)]
pub(crate) struct GraphStore {
    directed: bool,
    /// Successor lists indexed by vertex id; `None` marks an absent vertex
    adjacency: Vec<Option<Vec<u32>>>,
    /// Predecessor lists parallel to `adjacency`, in edge insertion order;
    /// maintained only for directed stores
    predecessors: Vec<Vec<u32>>,
    /// Live vertex ids in insertion order
    order: Vec<u32>,
    /// Vertices carrying a self-loop (undirected double-count bookkeeping)
    self_loops: HashSet<u32>,
}

impl GraphStore {
    /// A new, empty store
    pub(crate) fn new(directed: bool) -> Self {
        GraphStore {
            directed,
            adjacency: Vec::new(),
            predecessors: Vec::new(),
            order: Vec::new(),
            self_loops: HashSet::new(),
        }
    }

    pub(crate) fn is_directed(&self) -> bool {
        self.directed
    }

    pub(crate) fn contains(&self, v: u32) -> bool {
        self.neighbors(v).is_some()
    }

    pub(crate) fn vertex_size(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn max_vertex(&self) -> u32 {
        self.order.iter().copied().max().unwrap_or(0)
    }

    /// Count of edges: each directed edge once; each undirected edge once,
    /// self-loops included
    pub(crate) fn edge_size(&self) -> usize {
        let entries: usize = self
            .order
            .iter()
            .map(|&v| self.neighbor_slice(v).len())
            .sum();
        if self.directed {
            entries
        } else {
            (entries + self.self_loops.len()) / 2
        }
    }

    /// Allocate the smallest unused positive vertex id
    pub(crate) fn add_vertex(&mut self) -> u32 {
        let mut id = 1;
        while self.contains(id) {
            id += 1;
        }
        self.insert_vertex(id);
        id
    }

    /// Ensure `v` exists, allocating its slot if absent
    pub(crate) fn insert_vertex(&mut self, v: u32) {
        if self.contains(v) {
            return;
        }
        let slot = v as usize;
        if slot >= self.adjacency.len() {
            self.adjacency.resize_with(slot + 1, || None);
            self.predecessors.resize_with(slot + 1, Vec::new);
        }
        self.adjacency[slot] = Some(Vec::new());
        self.order.push(v);
    }

    /// Add the edge (u, v), auto-creating absent endpoints
    ///
    /// Idempotent: re-adding an existing edge changes nothing. Returns `u`.
    pub(crate) fn add_edge(&mut self, u: u32, v: u32) -> Result<u32> {
        if u == 0 {
            return Err(GraphError::InvalidVertex(u));
        }
        if v == 0 {
            return Err(GraphError::InvalidVertex(v));
        }
        self.insert_vertex(u);
        self.insert_vertex(v);
        if self.contains_edge(u, v) {
            return Ok(u);
        }
        self.neighbor_list(u).push(v);
        if self.directed {
            self.predecessors[v as usize].push(u);
        } else if u == v {
            self.self_loops.insert(u);
        } else {
            self.neighbor_list(v).push(u);
        }
        Ok(u)
    }

    pub(crate) fn contains_edge(&self, u: u32, v: u32) -> bool {
        self.neighbors(u).is_some_and(|n| n.contains(&v))
    }

    /// Remove the edge (u, v); no-op if absent
    pub(crate) fn remove_edge(&mut self, u: u32, v: u32) {
        if !self.contains_edge(u, v) {
            return;
        }
        remove_first(self.neighbor_list(u), v);
        if self.directed {
            remove_first(&mut self.predecessors[v as usize], u);
        } else if u == v {
            self.self_loops.remove(&u);
        } else {
            remove_first(self.neighbor_list(v), u);
        }
    }

    /// Remove `v` and every edge touching it; no-op if absent
    pub(crate) fn remove_vertex(&mut self, v: u32) {
        if !self.contains(v) {
            return;
        }
        if self.directed {
            for w in self.predecessors[v as usize].clone() {
                self.remove_edge(w, v);
            }
            // Outgoing edges must be removed too so the pred lists of the
            // successors stay accurate.
            for s in self.neighbor_slice(v).to_vec() {
                self.remove_edge(v, s);
            }
        } else {
            let incident = self.neighbor_slice(v).to_vec();
            for s in incident {
                self.remove_edge(v, s);
            }
        }
        self.adjacency[v as usize] = None;
        self.predecessors[v as usize].clear();
        self.order.retain(|&w| w != v);
        self.self_loops.remove(&v);
    }

    /// Out-degree of `v`; undirected self-loops count twice
    pub(crate) fn out_degree(&self, v: u32) -> usize {
        match self.neighbors(v) {
            None => 0,
            Some(n) => {
                let loop_extra = usize::from(!self.directed && self.self_loops.contains(&v));
                n.len() + loop_extra
            }
        }
    }

    /// In-degree of `v` for a directed store: the count of its
    /// predecessors, a self-loop contributing one
    pub(crate) fn in_degree_directed(&self, v: u32) -> usize {
        self.pred_slice(v).len()
    }

    /// The k-th successor of `v` (0-indexed), or the 0 sentinel
    pub(crate) fn successor(&self, v: u32, k: usize) -> u32 {
        self.neighbors(v)
            .and_then(|n| n.get(k).copied())
            .unwrap_or(0)
    }

    /// The k-th predecessor of `v` in a directed store, or the 0 sentinel
    pub(crate) fn predecessor_directed(&self, v: u32, k: usize) -> u32 {
        self.pred_slice(v).get(k).copied().unwrap_or(0)
    }

    /// All vertex ids, lazily, in insertion order
    pub(crate) fn vertices(&self) -> Iteration<'_, u32> {
        Iteration::new(self.order.iter().copied())
    }

    /// Direct successors of `v`, lazily, in edge insertion order
    pub(crate) fn successors(&self, v: u32) -> Iteration<'_, u32> {
        match self.neighbors(v) {
            None => Iteration::empty(),
            Some(n) => Iteration::new(n.iter().copied()),
        }
    }

    /// Predecessors of `v` in a directed store, lazily, in edge insertion
    /// order
    pub(crate) fn predecessors_directed(&self, v: u32) -> Iteration<'_, u32> {
        Iteration::new(self.pred_slice(v).iter().copied())
    }

    /// All edges as (u, v) pairs, lazily
    ///
    /// Directed stores yield each edge once in adjacency order. Undirected
    /// stores yield each edge exactly once via a per-call seen-pairs check.
    pub(crate) fn edges(&self) -> Iteration<'_, (u32, u32)> {
        let pairs = self
            .order
            .iter()
            .flat_map(move |&u| self.neighbor_slice(u).iter().map(move |&v| (u, v)));
        if self.directed {
            Iteration::new(pairs)
        } else {
            let mut seen = HashSet::new();
            Iteration::new(pairs.filter(move |&(u, v)| {
                let key = if u <= v { (u, v) } else { (v, u) };
                seen.insert(key)
            }))
        }
    }

    /// A unique identifier for the edge (u, v) via the Cantor pairing
    /// function, or 0 if the edge is absent
    ///
    /// For undirected stores the endpoints are ordered first so both
    /// orientations map to the same id.
    pub(crate) fn edge_id(&self, u: u32, v: u32) -> u64 {
        if !self.contains_edge(u, v) {
            return 0;
        }
        let (a, b) = if !self.directed && u > v {
            (u64::from(v), u64::from(u))
        } else {
            (u64::from(u), u64::from(v))
        };
        (a + b) * (a + b + 1) / 2 + b
    }

    /// Validate that `v` is a positive id naming a vertex in this store
    pub(crate) fn check_vertex(&self, v: u32) -> Result<()> {
        if v == 0 {
            return Err(GraphError::InvalidVertex(v));
        }
        if !self.contains(v) {
            return Err(GraphError::VertexNotFound(v));
        }
        Ok(())
    }

    fn neighbors(&self, v: u32) -> Option<&Vec<u32>> {
        if v == 0 {
            return None;
        }
        self.adjacency.get(v as usize).and_then(|slot| slot.as_ref())
    }

    fn neighbor_slice(&self, v: u32) -> &[u32] {
        self.neighbors(v).map_or(&[], |n| n.as_slice())
    }

    fn pred_slice(&self, v: u32) -> &[u32] {
        if self.contains(v) {
            self.predecessors[v as usize].as_slice()
        } else {
            &[]
        }
    }

    /// Mutable successor list of `v`; `v` must be present
    fn neighbor_list(&mut self, v: u32) -> &mut Vec<u32> {
        self.adjacency[v as usize]
            .as_mut()
            .unwrap_or_else(|| unreachable!("vertex {v} inserted before edge linkage"))
    }
}

fn remove_first(list: &mut Vec<u32>, item: u32) {
    if let Some(pos) = list.iter().position(|&x| x == item) {
        list.remove(pos);
    }
}
