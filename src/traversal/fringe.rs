//! Fringe disciplines for the traversal engine
//!
//! The fringe is the worklist of discovered-but-not-yet-visited vertices.
//! Queue discipline is the sole mechanism distinguishing traversal orders:
//! a LIFO fringe yields depth-first order, a FIFO fringe breadth-first, and
//! a priority fringe best-first (A*). Priorities are supplied at push time
//! and ignored by the unordered disciplines.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

/// Worklist of discovered vertices driving a traversal
pub trait Fringe {
    /// Schedule `v`; `priority` is consulted only by ordered fringes
    fn push(&mut self, v: u32, priority: f64);

    /// Remove and return the next vertex, or `None` when exhausted
    fn pop(&mut self) -> Option<u32>;

    fn is_empty(&self) -> bool;

    fn clear(&mut self);
}

/// First-in-first-out fringe: breadth-first order
#[derive(Debug, Default)]
pub struct FifoFringe {
    queue: VecDeque<u32>,
}

impl FifoFringe {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Fringe for FifoFringe {
    fn push(&mut self, v: u32, _priority: f64) {
        self.queue.push_back(v);
    }

    fn pop(&mut self) -> Option<u32> {
        self.queue.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }
}

/// Last-in-first-out fringe: depth-first order
#[derive(Debug, Default)]
pub struct LifoFringe {
    stack: Vec<u32>,
}

impl LifoFringe {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Fringe for LifoFringe {
    fn push(&mut self, v: u32, _priority: f64) {
        self.stack.push(v);
    }

    fn pop(&mut self) -> Option<u32> {
        self.stack.pop()
    }

    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn clear(&mut self) {
        self.stack.clear();
    }
}

/// Min-heap entry pairing a vertex with the priority it was pushed at
#[derive(Debug, Clone)]
struct HeapEntry {
    vertex: u32,
    priority: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.vertex == other.vertex && self.priority == other.priority
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Ties pop the lower vertex id, keeping equal-priority pops
        // deterministic regardless of insertion order.
        self.priority
            .partial_cmp(&other.priority)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Priority fringe: best-first order, lowest priority popped first
///
/// A vertex may be pushed more than once with different priorities; the
/// traversal engine's mark discipline discards the stale entries.
#[derive(Debug, Default)]
pub struct PriorityFringe {
    heap: BinaryHeap<Reverse<HeapEntry>>,
}

impl PriorityFringe {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Fringe for PriorityFringe {
    fn push(&mut self, v: u32, priority: f64) {
        self.heap.push(Reverse(HeapEntry {
            vertex: v,
            priority,
        }));
    }

    fn pop(&mut self) -> Option<u32> {
        self.heap.pop().map(|Reverse(entry)| entry.vertex)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}
