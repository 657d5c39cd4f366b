use itertools::Itertools;

use crate::graph::CostGraph;

/// Every pair of distinct vertices is joined by an edge (by an arc in both
/// directions on directed graphs). Self loops are not required.
pub fn is_complete<G: CostGraph>(graph: &G) -> bool {
    let vertices = graph.vertex_list();
    vertices
        .iter()
        .cartesian_product(vertices.iter())
        .filter(|(u, v)| u != v)
        .all(|(u, v)| graph.has_edge(*u, *v))
}

/// Like [`is_complete`], and every vertex also has a self loop.
pub fn is_complete_with_self_loops<G: CostGraph>(graph: &G) -> bool {
    is_complete(graph) && graph.vertex_list().iter().all(|v| graph.has_edge(*v, *v))
}

#[cfg(test)]
mod tests {
    use petgraph::{Directed, Undirected};

    use super::*;
    use crate::graph::{AttributedGraph, EdgeAttributes};

    fn triangle() -> AttributedGraph<Undirected> {
        let mut graph = AttributedGraph::new();
        graph.add_edge(0, 1, EdgeAttributes::with_cost(1));
        graph.add_edge(1, 2, EdgeAttributes::with_cost(1));
        graph.add_edge(2, 0, EdgeAttributes::with_cost(1));
        graph
    }

    #[test]
    fn triangle_is_complete() {
        let mut graph = triangle();
        assert!(is_complete(&graph));
        assert!(!is_complete_with_self_loops(&graph));

        for v in 0..3 {
            graph.add_edge(v, v, EdgeAttributes::default());
        }
        assert!(is_complete_with_self_loops(&graph));
    }

    #[test]
    fn missing_edge() {
        let mut graph = triangle();
        graph.remove_edge(1, 2);
        assert!(!is_complete(&graph));
    }

    #[test]
    fn directed_needs_both_arcs() {
        let mut graph: AttributedGraph<Directed> = AttributedGraph::new();
        graph.add_edge(0, 1, EdgeAttributes::with_cost(1));
        assert!(!is_complete(&graph));
        graph.add_edge(1, 0, EdgeAttributes::with_cost(1));
        assert!(is_complete(&graph));
    }

    #[test]
    fn empty_and_single_vertex() {
        let mut graph: AttributedGraph<Undirected> = AttributedGraph::new();
        assert!(is_complete(&graph));
        graph.add_node(7, Default::default());
        assert!(is_complete(&graph));
        assert!(!is_complete_with_self_loops(&graph));
    }
}
