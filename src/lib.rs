//! Quiver Graph Library
//!
//! A generic in-memory graph library whose vertices are denoted by positive
//! integers. Provides:
//! - Directed and undirected vertex/edge stores with dynamic add/remove
//! - A fringe-driven traversal engine (depth-first, breadth-first, best-first)
//!   with pluggable visitor hooks
//! - A shortest-paths engine (Dijkstra / A*) parameterized by client-supplied
//!   weight and heuristic functions
//! - A labeled-graph decorator for attaching payloads to vertices and edges

pub mod error;
pub mod graph;
pub mod iter;
pub mod logging;
pub mod shortest;
pub mod traversal;

pub use error::{GraphError, Result};
pub use graph::{DirectedGraph, Graph, LabeledGraph, UndirectedGraph};
pub use iter::Iteration;
pub use shortest::{PathWeights, ShortestPaths, SimpleShortestPaths};
pub use traversal::{
    BreadthFirstTraversal, DepthFirstTraversal, FifoFringe, Fringe, LifoFringe, PriorityFringe,
    Traversal, Visitor,
};
