use ahash::AHashMap;
use petgraph::Undirected;

use crate::graph::{AttributedGraph, EdgeAttributes};
use crate::types::{Edge, EdgeList, Vertex};

/// Attributes of one half of a split edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SplitEdgeAttributes {
    /// Half the cost of the original edge.
    pub cost: f64,
    pub is_fixed: bool,
    pub old_edge: Edge,
}

fn split_vertex(index: usize) -> Vertex {
    -(index as Vertex + 1)
}

/// Subdivides the `i`-th edge `(u, v)` into `(u, -(i + 1))` and `(-(i + 1), v)`.
/// The two halves of an edge are adjacent in the result.
pub fn split_edges(edges: &[Edge]) -> EdgeList {
    edges
        .iter()
        .enumerate()
        .flat_map(|(i, (u, v))| [(*u, split_vertex(i)), (split_vertex(i), *v)])
        .collect()
}

/// Original edge of every half in `splits`, as returned by [`split_edges`].
pub fn lookup_from_split(edges: &[Edge], splits: &[Edge]) -> AHashMap<Edge, Edge> {
    splits
        .chunks_exact(2)
        .zip(edges.iter())
        .flat_map(|(halves, edge)| halves.iter().map(move |half| (*half, *edge)))
        .collect()
}

/// Both halves of every edge in `edges`.
pub fn lookup_to_split(edges: &[Edge], splits: &[Edge]) -> AHashMap<Edge, (Edge, Edge)> {
    splits
        .chunks_exact(2)
        .zip(edges.iter())
        .map(|(halves, edge)| (*edge, (halves[0], halves[1])))
        .collect()
}

/// Graph of split edges; every half keeps its original edge and half of its
/// cost.
pub fn split_graph_from_properties(
    properties: &[(Edge, EdgeAttributes)],
) -> AttributedGraph<Undirected, SplitEdgeAttributes> {
    let edges: EdgeList = properties.iter().map(|(edge, _)| *edge).collect();
    let splits = split_edges(&edges);

    let mut graph = AttributedGraph::new();
    for (halves, (edge, attributes)) in splits.chunks_exact(2).zip(properties.iter()) {
        let half = SplitEdgeAttributes {
            cost: attributes.cost as f64 / 2.0,
            is_fixed: attributes.is_fixed,
            old_edge: *edge,
        };
        for (u, v) in halves.iter() {
            graph.add_edge(*u, *v, half);
        }
    }
    graph
}
