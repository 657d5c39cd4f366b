use petgraph::{Directed, Undirected};

use crate::graph::{AttributedGraph, EdgeAttributes};
use crate::types::{Prize, Vertex, VertexList};

/**
Vertex splitting that turns prize collecting on vertices into arc selection.

Every vertex `v` of a graph whose largest vertex id is `b` becomes a tail
`b + 1 + v` and a head `2 (b + 1) + v`, joined by the arc `tail -> head` of
cost zero. An arc `(u, v)` of the original graph becomes the arc
`head(u) -> tail(v)` with the same attributes. The prize of `v` is shared
between its head (rounded up) and its tail (rounded down).

Tails are the ids in `[b + 1, 2 (b + 1))` and heads the ids in
`[2 (b + 1), 3 (b + 1))`.
 */
pub fn asymmetric_from_directed(graph: &AttributedGraph<Directed>) -> AttributedGraph<Directed> {
    let mut asymmetric = AttributedGraph::new();
    let Some(biggest) = biggest_vertex_id_from_graph(graph) else {
        return asymmetric;
    };

    for (v, attributes) in graph.nodes() {
        let prize = attributes.prize.unwrap_or(0);
        let mut head_attributes = attributes.clone();
        head_attributes.prize = Some(head_prize(prize));
        let mut tail_attributes = attributes.clone();
        tail_attributes.prize = Some(tail_prize(prize));

        let head = split_head(biggest, v);
        let tail = split_tail(biggest, v);
        asymmetric.add_node(head, head_attributes);
        asymmetric.add_node(tail, tail_attributes);
        asymmetric.add_edge(tail, head, EdgeAttributes::with_cost(0));
    }

    for (u, v, attributes) in graph.edges() {
        asymmetric.add_edge(split_head(biggest, u), split_tail(biggest, v), *attributes);
    }
    asymmetric
}

/// Both orientations of every edge become arcs before splitting.
pub fn asymmetric_from_undirected(graph: &AttributedGraph<Undirected>) -> AttributedGraph<Directed> {
    asymmetric_from_directed(&graph.to_directed())
}

/// `None` for a graph without vertices.
pub fn biggest_vertex_id_from_graph<Ty: petgraph::EdgeType, E>(
    graph: &AttributedGraph<Ty, E>,
) -> Option<Vertex> {
    graph.vertices().max()
}

pub fn split_head(biggest_vertex: Vertex, original_vertex: Vertex) -> Vertex {
    2 * (biggest_vertex + 1) + original_vertex
}

pub fn split_tail(biggest_vertex: Vertex, original_vertex: Vertex) -> Vertex {
    biggest_vertex + 1 + original_vertex
}

pub fn is_vertex_split_head(biggest_vertex: Vertex, vertex: Vertex) -> bool {
    (2 * (biggest_vertex + 1)..3 * (biggest_vertex + 1)).contains(&vertex)
}

pub fn is_vertex_split_tail(biggest_vertex: Vertex, vertex: Vertex) -> bool {
    (biggest_vertex + 1..2 * (biggest_vertex + 1)).contains(&vertex)
}

/// The arc `(tail, head)` joins the two halves of one original vertex.
pub fn is_split_vertex_pair(biggest_vertex: Vertex, tail: Vertex, head: Vertex) -> bool {
    head - tail == biggest_vertex + 1
        && is_vertex_split_head(biggest_vertex, head)
        && is_vertex_split_tail(biggest_vertex, tail)
}

/// Original vertex of a split head or tail.
pub fn get_original_from_split_vertex(biggest_vertex: Vertex, split_vertex: Vertex) -> Vertex {
    if is_vertex_split_head(biggest_vertex, split_vertex) {
        split_vertex - 2 * (biggest_vertex + 1)
    } else {
        split_vertex - biggest_vertex - 1
    }
}

/// Maps a path of the asymmetric graph back to the original graph. A head
/// directly following the tail of the same vertex is collapsed into it, and
/// ids that are neither heads nor tails are dropped.
pub fn get_original_path_from_split_path(biggest_vertex: Vertex, split_path: &[Vertex]) -> VertexList {
    let mut path = vec![];
    let mut previous = None;
    for split_vertex in split_path.iter().copied() {
        let original = get_original_from_split_vertex(biggest_vertex, split_vertex);
        if is_vertex_split_tail(biggest_vertex, split_vertex)
            || (is_vertex_split_head(biggest_vertex, split_vertex) && previous != Some(original))
        {
            path.push(original);
        }
        previous = Some(original);
    }
    path
}

pub fn head_prize(prize: Prize) -> Prize {
    prize - tail_prize(prize)
}

pub fn tail_prize(prize: Prize) -> Prize {
    prize.div_euclid(2)
}
