use ahash::AHashMap;
use petgraph::Undirected;

use crate::converter::asymmetric::biggest_vertex_id_from_graph;
use crate::error::ConversionError;
use crate::graph::AttributedGraph;
use crate::types::Vertex;

/// Id of the dummy vertex standing in for `vertex` on its `key`-th parallel
/// edge. Key 0 is the edge itself and keeps `vertex`; dummy ids are negative.
pub fn new_dummy_vertex(vertex: Vertex, key: usize, biggest: Vertex) -> Vertex {
    if key > 0 {
        -((biggest + 1) * (key as Vertex - 1)) - vertex - 1
    } else {
        vertex
    }
}

/// Inverse of [`new_dummy_vertex`]; non-negative ids are returned unchanged.
pub fn old_vertex_from_dummy(dummy: Vertex, key: usize, biggest: Vertex) -> Vertex {
    if dummy < 0 {
        -(dummy + (biggest + 1) * (key as Vertex - 1) + 1)
    } else {
        dummy
    }
}

/// Removes parallel edges from an undirected multigraph.
///
/// The first edge between two vertices is kept. The `k`-th further edge
/// `(u, v)` is replaced by the path `u - d - v` through a new dummy vertex
/// `d = new_dummy_vertex(u, k, biggest)` carrying the attributes of `u`;
/// both halves carry the attributes of the replaced edge. A vertex with more
/// than one self loop is an error.
pub fn to_simple_undirected<E: Clone>(
    graph: &AttributedGraph<Undirected, E>,
) -> Result<AttributedGraph<Undirected, E>, ConversionError> {
    let mut simple = AttributedGraph::new();
    for (v, attributes) in graph.nodes() {
        simple.add_node(v, attributes.clone());
    }
    let Some(biggest) = biggest_vertex_id_from_graph(graph) else {
        return Ok(simple);
    };

    let mut keys: AHashMap<(Vertex, Vertex), usize> = AHashMap::new();
    for (u, v, weight) in graph.edges() {
        let key = keys.entry((u.min(v), u.max(v))).or_insert(0);
        let k = *key;
        *key += 1;

        if k == 0 {
            simple.add_edge(u, v, weight.clone());
        } else if u == v {
            return Err(ConversionError::UnexpectedSelfLoop { vertex: u });
        } else {
            let dummy = new_dummy_vertex(u, k, biggest);
            let attributes = graph.node(u).cloned().unwrap_or_default();
            simple.add_node(dummy, attributes);
            simple.add_edge(u, dummy, weight.clone());
            simple.add_edge(dummy, v, weight.clone());
        }
    }
    log::debug!(
        "simple graph has {} vertices, {} more than the multigraph",
        simple.number_of_nodes(),
        simple.number_of_nodes() - graph.number_of_nodes()
    );
    Ok(simple)
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::graph::{CostGraph, EdgeAttributes, NodeAttributes};

    #[test]
    fn dummy_vertex_ids() {
        let biggest = 2;
        let cases = [(0, 0, 0), (0, 1, -1), (0, 2, -4), (1, 1, -2), (2, 2, -6)];
        for (vertex, key, dummy) in cases {
            assert_eq!(new_dummy_vertex(vertex, key, biggest), dummy);
            assert_eq!(old_vertex_from_dummy(dummy, key, biggest), vertex);
        }
    }

    fn complete_multigraph(n: Vertex) -> AttributedGraph<Undirected> {
        let mut graph = AttributedGraph::new();
        for v in 0..n {
            graph.add_node(v, NodeAttributes::with_prize(1));
        }
        for (u, v) in (0..n).tuple_combinations() {
            graph.add_multi_edge(u, v, EdgeAttributes::with_cost(1));
        }
        graph
    }

    #[test]
    fn parallel_edges_get_dummy_vertices() -> anyhow::Result<()> {
        for n in [3, 5, 10] {
            let mut graph = complete_multigraph(n);
            graph.add_multi_edge(0, 2, EdgeAttributes::with_cost(4));
            graph.add_multi_edge(1, 2, EdgeAttributes::with_cost(6));
            graph.add_multi_edge(2, 1, EdgeAttributes::with_cost(8));

            let simple = to_simple_undirected(&graph)?;
            let biggest = n - 1;
            for v in graph.vertices() {
                assert!(simple.has_node(v));
            }

            let dummy0 = new_dummy_vertex(0, 1, biggest);
            let dummy1 = new_dummy_vertex(1, 1, biggest);
            let dummy2 = new_dummy_vertex(2, 2, biggest);
            assert_eq!(simple.cost(0, dummy0), Some(4));
            assert_eq!(simple.cost(dummy0, 2), Some(4));
            assert_eq!(simple.cost(dummy1, 2), Some(6));
            assert_eq!(simple.cost(2, dummy2), Some(8));
            assert_eq!(simple.cost(dummy2, 1), Some(8));
            assert_eq!(simple.prize(dummy1), Some(1));
            assert_eq!(simple.cost(0, 2), Some(1));
            assert_eq!(simple.number_of_nodes(), n as usize + 3);
        }
        Ok(())
    }

    #[test]
    fn simple_graph_is_unchanged() -> anyhow::Result<()> {
        let graph = complete_multigraph(4);
        let simple = to_simple_undirected(&graph)?;
        assert_eq!(simple.vertex_list(), graph.vertex_list());
        assert_eq!(simple.edge_list(), graph.edge_list());
        Ok(())
    }

    #[test]
    fn second_self_loop_is_an_error() {
        let mut graph = complete_multigraph(3);
        graph.add_multi_edge(1, 1, EdgeAttributes::default());
        graph.add_multi_edge(1, 1, EdgeAttributes::default());
        assert_eq!(
            to_simple_undirected(&graph).err(),
            Some(ConversionError::UnexpectedSelfLoop { vertex: 1 })
        );
    }
}
