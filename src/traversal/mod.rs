//! Generic fringe-driven graph traversal
//!
//! Traversal consists of repeatedly removing a vertex from the fringe,
//! visiting it, and scheduling its successors. Per vertex the state machine
//! is `Unvisited -> Marked -> [PostVisited]`, terminal once post-visited (or
//! immediately after the visit when no post-visit is requested).
//!
//! Clients supply two strategies:
//! - a [`Fringe`] choosing the order (LIFO depth-first, FIFO breadth-first,
//!   priority best-first), and
//! - a [`Visitor`] whose hooks observe and steer the run: `visit`,
//!   `post_visit`, `should_post_visit`, `process_successor`,
//!   `reverse_successors`, and `priority`.
//!
//! Returning `false` from `visit` or `post_visit` halts the traversal
//! immediately. Runs may be interrupted and restarted; previously marked
//! vertices stay marked until [`Traversal::clear`].

pub mod fringe;

pub use fringe::{FifoFringe, Fringe, LifoFringe, PriorityFringe};

use std::collections::HashSet;

use crate::graph::Graph;

/// Client hooks invoked by [`Traversal::traverse`]
///
/// Every method has a default, so a visitor only overrides the hooks it
/// cares about. This replaces subclass overriding with an injected strategy
/// object.
pub trait Visitor<G: Graph> {
    /// Called once when a vertex is first marked. Return `false` to halt
    /// the traversal immediately.
    fn visit(&mut self, graph: &G, v: u32) -> bool {
        let _ = (graph, v);
        true
    }

    /// Whether `v` should be revisited after its successors are processed
    /// (depth-first finish-time semantics)
    fn should_post_visit(&mut self, v: u32) -> bool {
        let _ = v;
        false
    }

    /// Called on the post-visit pass of `v`. Return `false` to halt the
    /// traversal immediately.
    fn post_visit(&mut self, graph: &G, v: u32) -> bool {
        let _ = (graph, v);
        true
    }

    /// Decide whether successor `v` of `u` is scheduled on the fringe.
    /// The default schedules `v` iff it is unmarked.
    fn process_successor(&mut self, u: u32, v: u32, marked: bool) -> bool {
        let _ = (u, v);
        !marked
    }

    /// Whether the successors of `v` should be scheduled in reverse
    /// adjacency order, combined with the traversal-wide setting
    fn reverse_successors(&self, v: u32) -> bool {
        let _ = v;
        false
    }

    /// Priority used when `v` is pushed onto an ordered fringe; evaluated
    /// at enqueue time. Unordered fringes ignore it.
    fn priority(&self, v: u32) -> f64 {
        let _ = v;
        0.0
    }
}

/// A fringe-driven traversal of a graph
///
/// Owns the per-run `marked` and post-visited sets; the graph itself is
/// borrowed and never mutated.
pub struct Traversal<'g, G, F> {
    graph: &'g G,
    fringe: F,
    marked: HashSet<u32>,
    post_visited: HashSet<u32>,
    reverse_successors: bool,
}

/// Depth-first traversal: LIFO fringe, successors scheduled in reverse so
/// pops follow pre-order
pub type DepthFirstTraversal<'g, G> = Traversal<'g, G, LifoFringe>;

/// Breadth-first traversal: FIFO fringe, level order
pub type BreadthFirstTraversal<'g, G> = Traversal<'g, G, FifoFringe>;

impl<'g, G: Graph> Traversal<'g, G, LifoFringe> {
    /// A depth-first traversal of `graph`
    pub fn depth_first(graph: &'g G) -> Self {
        Traversal::new(graph, LifoFringe::new()).with_reverse_successors(true)
    }
}

impl<'g, G: Graph> Traversal<'g, G, FifoFringe> {
    /// A breadth-first traversal of `graph`
    pub fn breadth_first(graph: &'g G) -> Self {
        Traversal::new(graph, FifoFringe::new())
    }
}

impl<'g, G: Graph, F: Fringe> Traversal<'g, G, F> {
    /// A traversal of `graph` using `fringe` as the worklist
    pub fn new(graph: &'g G, fringe: F) -> Self {
        Traversal {
            graph,
            fringe,
            marked: HashSet::new(),
            post_visited: HashSet::new(),
            reverse_successors: false,
        }
    }

    /// Schedule every vertex's successors in reverse adjacency order.
    /// With a LIFO fringe this makes pops follow adjacency order. Visitors
    /// can also request reversal for individual vertices via
    /// [`Visitor::reverse_successors`].
    pub fn with_reverse_successors(mut self, reverse: bool) -> Self {
        self.reverse_successors = reverse;
        self
    }

    /// The graph being traversed
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Whether `v` has been marked in this run
    pub fn marked(&self, v: u32) -> bool {
        self.marked.contains(&v)
    }

    /// Unmark all vertices and empty the fringe, enabling a fresh run
    pub fn clear(&mut self) {
        self.marked.clear();
        self.post_visited.clear();
        self.fringe.clear();
    }

    /// Initialize the fringe to `{ v0 }` and traverse
    pub fn traverse_from<V: Visitor<G>>(&mut self, v0: u32, visitor: &mut V) {
        self.traverse([v0], visitor);
    }

    /// Initialize the fringe to `starts` and traverse until the fringe is
    /// exhausted or a hook signals a halt
    #[tracing::instrument(skip_all, level = "debug")]
    pub fn traverse<V, I>(&mut self, starts: I, visitor: &mut V)
    where
        V: Visitor<G>,
        I: IntoIterator<Item = u32>,
    {
        for v in starts {
            self.fringe.push(v, visitor.priority(v));
        }

        while let Some(v) = self.fringe.pop() {
            if !self.marked.contains(&v) {
                self.marked.insert(v);
                if !visitor.visit(self.graph, v) {
                    tracing::debug!(vertex = v, "traversal halted by visit");
                    return;
                }
                if visitor.should_post_visit(v) {
                    self.fringe.push(v, visitor.priority(v));
                }
                self.schedule_successors(v, visitor);
            } else if visitor.should_post_visit(v) && !self.post_visited.contains(&v) {
                self.post_visited.insert(v);
                if !visitor.post_visit(self.graph, v) {
                    tracing::debug!(vertex = v, "traversal halted by post_visit");
                    return;
                }
            }
        }
    }

    fn schedule_successors<V: Visitor<G>>(&mut self, v: u32, visitor: &mut V) {
        let mut successors: Vec<u32> = self.graph.successors(v).collect();
        if self.reverse_successors || visitor.reverse_successors(v) {
            successors.reverse();
        }
        for s in successors {
            let marked = self.marked.contains(&s);
            if visitor.process_successor(v, s, marked) {
                self.fringe.push(s, visitor.priority(s));
            }
        }
    }
}
