use petgraph::{Directed, Undirected};

use super::*;

fn path_graph<Ty: EdgeType>() -> AttributedGraph<Ty> {
    let mut graph = AttributedGraph::new();
    for v in [5, 3, 9] {
        graph.add_node(v, NodeAttributes::with_prize(v));
    }
    graph.add_edge(5, 3, EdgeAttributes::with_cost(2));
    graph.add_edge(3, 9, EdgeAttributes::with_cost(4));
    graph
}

#[test]
fn vertices_keep_insertion_order() {
    let graph: AttributedGraph<Undirected> = path_graph();
    assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![5, 3, 9]);
    assert_eq!(graph.vertex_list(), vec![5, 3, 9]);
    assert_eq!(graph.number_of_nodes(), 3);
    assert_eq!(graph.number_of_edges(), 2);
    assert_eq!(graph.prize(9), Some(9));
    assert_eq!(graph.prize(4), None);
}

#[test]
fn undirected_edges_match_both_orientations() {
    let graph: AttributedGraph<Undirected> = path_graph();
    assert!(graph.has_edge(3, 5));
    assert_eq!(graph.cost(9, 3), Some(4));
    assert!(!graph.has_edge(5, 9));
    assert_eq!(graph.edge_list(), vec![(5, 3), (3, 9)]);
}

#[test]
fn directed_edges_have_one_orientation() {
    let graph: AttributedGraph<Directed> = path_graph();
    assert!(graph.is_directed());
    assert!(graph.has_edge(5, 3));
    assert!(!graph.has_edge(3, 5));
    assert_eq!(graph.neighbors(3), vec![9]);
    assert_eq!(graph.degree(3), 2);
}

#[test]
fn add_edge_replaces_attributes() {
    let mut graph: AttributedGraph<Undirected> = path_graph();
    graph.add_edge(3, 5, EdgeAttributes::with_cost(7));
    assert_eq!(graph.number_of_edges(), 2);
    assert_eq!(graph.cost(5, 3), Some(7));

    graph.add_multi_edge(3, 5, EdgeAttributes::with_cost(1));
    assert_eq!(graph.number_of_edges(), 3);
    assert_eq!(graph.degree(5), 2);
}

#[test]
fn add_edge_creates_missing_nodes() {
    let mut graph: AttributedGraph<Undirected> = AttributedGraph::new();
    graph.add_edge(1, 2, EdgeAttributes::default());
    assert!(graph.has_node(1));
    assert!(graph.has_node(2));
    assert_eq!(graph.node(2), Some(&NodeAttributes::default()));
}

#[test]
fn self_loop_counts_twice() {
    let mut graph: AttributedGraph<Undirected> = path_graph();
    graph.add_edge(9, 9, EdgeAttributes::default());
    assert_eq!(graph.degree(9), 3);

    let mut digraph: AttributedGraph<Directed> = path_graph();
    digraph.add_edge(9, 9, EdgeAttributes::default());
    assert_eq!(digraph.degree(9), 3);
}

#[test]
fn remove_edge() {
    let mut graph: AttributedGraph<Undirected> = path_graph();
    assert_eq!(graph.remove_edge(9, 3), Some(EdgeAttributes::with_cost(4)));
    assert_eq!(graph.remove_edge(9, 3), None);
    assert_eq!(graph.number_of_edges(), 1);
    assert_eq!(graph.degree(9), 0);
}

#[test]
fn to_directed_doubles_edges() {
    let mut graph: AttributedGraph<Undirected> = path_graph();
    graph.add_edge(5, 5, EdgeAttributes::default());
    let digraph = graph.to_directed();
    assert_eq!(digraph.number_of_nodes(), 3);
    assert_eq!(digraph.number_of_edges(), 5);
    assert_eq!(digraph.cost(3, 5), Some(2));
    assert_eq!(digraph.cost(5, 3), Some(2));
    assert_eq!(digraph.node(3).and_then(|it| it.prize), Some(3));
}

#[test]
fn node_mut_updates_attributes() {
    let mut graph: AttributedGraph<Undirected> = path_graph();
    if let Some(node) = graph.node_mut(3) {
        node.is_depot = true;
    }
    assert!(graph.node(3).is_some_and(|it| it.is_depot));
    if let Some(edge) = graph.edge_mut(3, 9) {
        edge.is_fixed = true;
    }
    assert!(graph.edge(9, 3).is_some_and(|it| it.is_fixed));
}
