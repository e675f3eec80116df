//! Vertex/edge stores and the common graph contract
//!
//! Provides the graph data model shared by every algorithm in the crate:
//! - `Graph`: the polymorphic contract over directed and undirected stores
//! - `DirectedGraph` / `UndirectedGraph`: concrete adjacency-arena stores
//! - `LabeledGraph`: a decorator attaching payloads to vertices and edges
//!
//! Vertices are positive integers assigned by the store (smallest reusable
//! id) or supplied directly when an edge names a not-yet-present vertex.
//! Missing-vertex queries answer with sentinels (0 for ids, an empty
//! iteration for sequences) rather than errors.

pub mod directed;
pub mod labeled;
mod store;
pub mod undirected;

pub use directed::DirectedGraph;
pub use labeled::LabeledGraph;
pub use undirected::UndirectedGraph;

use crate::error::Result;
use crate::iter::Iteration;

/// The common contract of directed and undirected graphs
///
/// Traversals and searches are generic over this trait, so clients can run
/// them against either store variant or a [`LabeledGraph`] wrapper.
pub trait Graph {
    /// Whether edges are one-way
    fn is_directed(&self) -> bool;

    /// Number of vertices currently in the graph
    fn vertex_size(&self) -> usize;

    /// Largest vertex id currently in the graph, or 0 if empty
    fn max_vertex(&self) -> u32;

    /// Number of edges; undirected edges count once, self-loops included
    fn edge_size(&self) -> usize;

    /// Whether vertex `v` exists
    fn contains(&self, v: u32) -> bool;

    /// Whether the edge (u, v) exists
    fn contains_edge(&self, u: u32, v: u32) -> bool;

    /// Add a new vertex with the smallest unused positive id and return it
    fn add_vertex(&mut self) -> u32;

    /// Add the edge (u, v), auto-creating absent endpoints; idempotent.
    /// Returns `u`. Fails only when an endpoint is the reserved id 0.
    fn add_edge(&mut self, u: u32, v: u32) -> Result<u32>;

    /// Remove `v` and all edges touching it; no-op if absent
    fn remove_vertex(&mut self, v: u32);

    /// Remove the edge (u, v) (and its mirror in undirected graphs);
    /// no-op if absent
    fn remove_edge(&mut self, u: u32, v: u32);

    /// Number of edges leaving `v` (0 if absent); undirected self-loops
    /// count twice
    fn out_degree(&self, v: u32) -> usize;

    /// Number of edges entering `v` (0 if absent); equals `out_degree` for
    /// undirected graphs
    fn in_degree(&self, v: u32) -> usize;

    /// The k-th successor of `v` (0-indexed), or the 0 sentinel when out of
    /// range or `v` is absent
    fn successor(&self, v: u32, k: usize) -> u32;

    /// The k-th predecessor of `v` (0-indexed), or the 0 sentinel
    fn predecessor(&self, v: u32, k: usize) -> u32;

    /// All vertex ids, lazily, in insertion order
    fn vertices(&self) -> Iteration<'_, u32>;

    /// Direct successors of `v`, lazily, in edge insertion order
    fn successors(&self, v: u32) -> Iteration<'_, u32>;

    /// Predecessors of `v`, lazily, in edge insertion order; equals
    /// `successors` for undirected graphs
    fn predecessors(&self, v: u32) -> Iteration<'_, u32>;

    /// All edges as (u, v) pairs, lazily; undirected edges yielded once
    fn edges(&self) -> Iteration<'_, (u32, u32)>;

    /// A unique identifier for the edge (u, v), or 0 if absent; both
    /// orientations of an undirected edge share one id
    fn edge_id(&self, u: u32, v: u32) -> u64;

    /// Validate that `v` is a positive id naming a vertex of this graph
    fn check_vertex(&self, v: u32) -> Result<()>;
}

#[cfg(test)]
mod tests;
