use crate::error::GraphError;
use crate::graph::{DirectedGraph, Graph, LabeledGraph, UndirectedGraph};

/// Build the reference directed graph: vertices 1..=7 with edges
/// (7,1), (7,3), (3,2), (1,2), (1,4), (4,5)
fn reference_digraph() -> DirectedGraph {
    let mut g = DirectedGraph::new();
    for _ in 0..7 {
        g.add_vertex();
    }
    for (u, v) in [(7, 1), (7, 3), (3, 2), (1, 2), (1, 4), (4, 5)] {
        g.add_edge(u, v).unwrap();
    }
    g
}

/// Test that a vertex is contained right after add and gone after remove
#[test]
fn test_add_vertex_then_contains() {
    let mut g = DirectedGraph::new();
    let v = g.add_vertex();
    assert!(g.contains(v));
    g.remove_vertex(v);
    assert!(!g.contains(v));
    assert_eq!(g.vertex_size(), 0);
}

/// Test that add_vertex allocates the smallest reusable id, else max+1
#[test]
fn test_add_vertex_reuses_smallest_id() {
    let mut g = UndirectedGraph::new();
    assert_eq!(g.add_vertex(), 1);
    assert_eq!(g.add_vertex(), 2);
    assert_eq!(g.add_vertex(), 3);
    g.remove_vertex(2);
    assert_eq!(g.add_vertex(), 2);
    assert_eq!(g.add_vertex(), 4);
}

/// Test degree and successor queries on the reference directed graph
#[test]
fn test_directed_scenario() {
    let g = reference_digraph();
    assert_eq!(g.vertex_size(), 7);
    assert_eq!(g.edge_size(), 6);
    assert_eq!(g.out_degree(7), 2);
    assert_eq!(g.in_degree(10), 0);
    assert_eq!(g.successor(7, 0), 1);
    assert_eq!(g.successor(7, 1), 3);
    assert_eq!(g.successor(7, 2), 0);
}

/// Test that add_edge auto-creates endpoints that are not yet present
#[test]
fn test_add_edge_auto_creates_vertices() {
    let mut g = DirectedGraph::new();
    g.add_edge(5, 9).unwrap();
    assert!(g.contains(5));
    assert!(g.contains(9));
    assert_eq!(g.vertex_size(), 2);
    assert_eq!(g.max_vertex(), 9);
}

/// Test that re-adding an edge changes nothing
#[test]
fn test_add_edge_idempotent() {
    let mut d = DirectedGraph::new();
    d.add_edge(1, 2).unwrap();
    d.add_edge(1, 2).unwrap();
    assert_eq!(d.edge_size(), 1);
    assert_eq!(d.out_degree(1), 1);

    let mut u = UndirectedGraph::new();
    u.add_edge(1, 2).unwrap();
    u.add_edge(2, 1).unwrap();
    assert_eq!(u.edge_size(), 1);
    assert_eq!(u.out_degree(1), 1);
}

/// Test that the reserved id 0 is rejected at the boundary
#[test]
fn test_add_edge_rejects_zero() {
    let mut g = DirectedGraph::new();
    assert_eq!(g.add_edge(0, 1), Err(GraphError::InvalidVertex(0)));
    assert_eq!(g.add_edge(1, 0), Err(GraphError::InvalidVertex(0)));
    assert_eq!(g.vertex_size(), 0);
}

/// Test undirected edge counting, including idempotent re-add and self-loop
#[test]
fn test_undirected_scenario_edge_sizes() {
    let mut g = UndirectedGraph::new();
    g.add_edge(1, 2).unwrap();
    assert_eq!(g.edge_size(), 1);
    g.add_edge(2, 3).unwrap();
    assert_eq!(g.edge_size(), 2);
    g.add_edge(2, 3).unwrap();
    assert_eq!(g.edge_size(), 2);
    g.add_edge(2, 2).unwrap();
    assert_eq!(g.edge_size(), 3);
}

/// Test that undirected adjacency stays symmetric through add and remove
#[test]
fn test_undirected_symmetry() {
    let mut g = UndirectedGraph::new();
    g.add_edge(1, 2).unwrap();
    assert!(g.contains_edge(1, 2));
    assert!(g.contains_edge(2, 1));
    g.remove_edge(2, 1);
    assert!(!g.contains_edge(1, 2));
    assert!(!g.contains_edge(2, 1));
    assert_eq!(g.edge_size(), 0);
}

/// Test that an undirected self-loop counts once as an edge, twice in degree
#[test]
fn test_undirected_self_loop_degree() {
    let mut g = UndirectedGraph::new();
    g.add_edge(1, 2).unwrap();
    assert_eq!(g.out_degree(2), 1);
    g.add_edge(2, 2).unwrap();
    assert_eq!(g.out_degree(2), 3);
    assert_eq!(g.in_degree(2), 3);
    assert_eq!(g.edge_size(), 2);
}

/// Test directed self-loop accounting
#[test]
fn test_directed_self_loop() {
    let mut g = DirectedGraph::new();
    g.add_edge(1, 1).unwrap();
    assert!(g.contains_edge(1, 1));
    assert_eq!(g.edge_size(), 1);
    assert_eq!(g.out_degree(1), 1);
    assert_eq!(g.in_degree(1), 1);
    assert_eq!(g.successors(1).collect::<Vec<_>>(), vec![1]);
}

/// Test that removing a vertex removes every edge touching it
#[test]
fn test_remove_vertex_removes_incident_edges() {
    let mut g = DirectedGraph::new();
    g.add_edge(1, 2).unwrap();
    g.add_edge(2, 3).unwrap();
    g.add_edge(3, 1).unwrap();
    g.remove_vertex(3);
    assert!(!g.contains(3));
    assert_eq!(g.edge_size(), 1);
    assert!(g.contains_edge(1, 2));
    assert_eq!(g.successors(2).count(), 0);
    assert_eq!(g.in_degree(1), 0);

    let mut u = UndirectedGraph::new();
    u.add_edge(1, 2).unwrap();
    u.add_edge(2, 3).unwrap();
    u.add_edge(2, 2).unwrap();
    u.remove_vertex(2);
    assert_eq!(u.edge_size(), 0);
    assert_eq!(u.out_degree(1), 0);
    assert_eq!(u.out_degree(3), 0);
}

/// Test that removal of absent vertices and edges is a silent no-op
#[test]
fn test_remove_absent_is_noop() {
    let mut g = DirectedGraph::new();
    g.add_edge(1, 2).unwrap();
    g.remove_vertex(9);
    g.remove_edge(2, 1);
    g.remove_edge(8, 9);
    assert_eq!(g.vertex_size(), 2);
    assert_eq!(g.edge_size(), 1);
}

/// Test that vertices() yields ids in insertion order
#[test]
fn test_vertices_insertion_order() {
    let mut g = DirectedGraph::new();
    g.add_edge(4, 2).unwrap();
    g.add_vertex();
    g.add_edge(7, 4).unwrap();
    assert_eq!(g.vertices().collect::<Vec<_>>(), vec![4, 2, 1, 7]);
}

/// Test that successors() preserves edge insertion order and restarts fresh
#[test]
fn test_successors_insertion_order_and_restartable() {
    let g = reference_digraph();
    assert_eq!(g.successors(1).collect::<Vec<_>>(), vec![2, 4]);
    // Re-querying yields a fresh sequence
    assert_eq!(g.successors(1).collect::<Vec<_>>(), vec![2, 4]);
    assert_eq!(g.successors(6).count(), 0);
    assert_eq!(g.successors(42).count(), 0);
}

/// Test directed predecessor enumeration and its 0 sentinel; the edges
/// into 2 were inserted (3,2) then (1,2), so 3 enumerates first
#[test]
fn test_directed_predecessors() {
    let g = reference_digraph();
    assert_eq!(g.predecessors(2).collect::<Vec<_>>(), vec![3, 1]);
    assert_eq!(g.predecessor(2, 0), 3);
    assert_eq!(g.predecessor(2, 1), 1);
    assert_eq!(g.predecessor(2, 2), 0);
    assert_eq!(g.predecessor(42, 0), 0);
    assert_eq!(g.in_degree(2), 2);
}

/// Test that predecessor order follows edge insertion, not vertex ids,
/// and stays consistent through edge and vertex removal
#[test]
fn test_predecessor_order_tracks_edge_insertion() {
    let mut g = DirectedGraph::new();
    g.add_edge(5, 2).unwrap();
    g.add_edge(1, 2).unwrap();
    g.add_edge(9, 2).unwrap();
    assert_eq!(g.predecessors(2).collect::<Vec<_>>(), vec![5, 1, 9]);

    g.remove_edge(1, 2);
    assert_eq!(g.predecessors(2).collect::<Vec<_>>(), vec![5, 9]);

    g.remove_vertex(9);
    assert_eq!(g.predecessors(2).collect::<Vec<_>>(), vec![5]);
    assert_eq!(g.in_degree(2), 1);
    assert_eq!(g.predecessor(2, 0), 5);
}

/// Test that undirected predecessors equal successors
#[test]
fn test_undirected_predecessors_equal_successors() {
    let mut g = UndirectedGraph::new();
    g.add_edge(1, 2).unwrap();
    g.add_edge(3, 1).unwrap();
    assert_eq!(g.predecessors(1).collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(g.predecessor(1, 1), 3);
}

/// Test that directed edges() yields every edge exactly once
#[test]
fn test_edges_directed() {
    let g = reference_digraph();
    let edges: Vec<(u32, u32)> = g.edges().collect();
    assert_eq!(edges.len(), 6);
    for pair in [(7, 1), (7, 3), (3, 2), (1, 2), (1, 4), (4, 5)] {
        assert!(edges.contains(&pair));
    }
}

/// Test that undirected edges() yields each edge once, self-loops included
#[test]
fn test_edges_undirected_dedup() {
    let mut g = UndirectedGraph::new();
    g.add_edge(1, 2).unwrap();
    g.add_edge(2, 3).unwrap();
    g.add_edge(2, 2).unwrap();
    let edges: Vec<(u32, u32)> = g.edges().collect();
    assert_eq!(edges.len(), 3);
    let normalized: Vec<(u32, u32)> = edges
        .iter()
        .map(|&(u, v)| if u <= v { (u, v) } else { (v, u) })
        .collect();
    assert!(normalized.contains(&(1, 2)));
    assert!(normalized.contains(&(2, 3)));
    assert!(normalized.contains(&(2, 2)));
}

/// Test edge_id uniqueness and undirected orientation-independence
#[test]
fn test_edge_id() {
    let mut u = UndirectedGraph::new();
    u.add_edge(1, 2).unwrap();
    u.add_edge(2, 3).unwrap();
    assert_ne!(u.edge_id(1, 2), 0);
    assert_eq!(u.edge_id(1, 2), u.edge_id(2, 1));
    assert_ne!(u.edge_id(1, 2), u.edge_id(2, 3));
    assert_eq!(u.edge_id(1, 3), 0);

    let mut d = DirectedGraph::new();
    d.add_edge(1, 2).unwrap();
    d.add_edge(2, 1).unwrap();
    assert_ne!(d.edge_id(1, 2), d.edge_id(2, 1));
}

/// Test check_vertex boundary validation
#[test]
fn test_check_vertex() {
    let mut g = DirectedGraph::new();
    let v = g.add_vertex();
    assert!(g.check_vertex(v).is_ok());
    assert_eq!(g.check_vertex(0), Err(GraphError::InvalidVertex(0)));
    assert_eq!(g.check_vertex(9), Err(GraphError::VertexNotFound(9)));
}

/// Test vertex labels on a decorated graph
#[test]
fn test_labeled_vertex_labels() {
    let mut g: LabeledGraph<DirectedGraph, &str, ()> = LabeledGraph::new(DirectedGraph::new());
    let a = g.add_labeled_vertex("rule-a");
    let b = g.add_labeled_vertex("rule-b");
    assert_eq!(g.vertex_label(a), Some(&"rule-a"));
    assert_eq!(g.vertex_label(b), Some(&"rule-b"));

    g.set_vertex_label(a, "rewritten").unwrap();
    assert_eq!(g.vertex_label(a), Some(&"rewritten"));
    assert_eq!(
        g.set_vertex_label(42, "nope"),
        Err(GraphError::VertexNotFound(42))
    );
}

/// Test that undirected edge labels are orientation-independent
#[test]
fn test_labeled_edge_labels_undirected_orientation() {
    let mut g: LabeledGraph<UndirectedGraph, (), u32> = LabeledGraph::new(UndirectedGraph::new());
    g.add_labeled_edge(1, 2, 10).unwrap();
    assert_eq!(g.edge_label(1, 2), Some(&10));
    assert_eq!(g.edge_label(2, 1), Some(&10));

    g.set_edge_label(2, 1, 20).unwrap();
    assert_eq!(g.edge_label(1, 2), Some(&20));
    assert_eq!(
        g.set_edge_label(1, 3, 30),
        Err(GraphError::EdgeNotFound { u: 1, v: 3 })
    );
}

/// Test that removing structure drops the associated labels
#[test]
fn test_labeled_remove_drops_labels() {
    let mut g: LabeledGraph<DirectedGraph, &str, &str> = LabeledGraph::new(DirectedGraph::new());
    let a = g.add_labeled_vertex("a");
    let b = g.add_labeled_vertex("b");
    g.add_labeled_edge(a, b, "a->b").unwrap();
    g.add_labeled_edge(b, a, "b->a").unwrap();

    g.remove_edge(a, b);
    assert_eq!(g.edge_label(a, b), None);
    assert_eq!(g.edge_label(b, a), Some(&"b->a"));

    g.remove_vertex(a);
    assert_eq!(g.vertex_label(a), None);
    assert_eq!(g.edge_label(b, a), None);
    assert_eq!(g.vertex_label(b), Some(&"b"));
}

/// Test that the decorator delegates structural queries faithfully
#[test]
fn test_labeled_delegates_structure() {
    let mut g: LabeledGraph<DirectedGraph, (), ()> = LabeledGraph::new(DirectedGraph::new());
    g.add_edge(1, 2).unwrap();
    g.add_edge(1, 3).unwrap();
    assert!(g.is_directed());
    assert_eq!(g.vertex_size(), 3);
    assert_eq!(g.edge_size(), 2);
    assert_eq!(g.successors(1).collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(g.successor(1, 1), 3);
    assert_eq!(g.in_degree(2), 1);
}
