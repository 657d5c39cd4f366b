//! Conversions between classes of graphs: vertex splitting into an
//! asymmetric digraph, multigraph to simple graph, and edge subdivision.

pub mod asymmetric;
pub mod split;
pub mod undirected;

pub use asymmetric::{
    asymmetric_from_directed, asymmetric_from_undirected, biggest_vertex_id_from_graph,
    get_original_from_split_vertex, get_original_path_from_split_path, head_prize,
    is_split_vertex_pair, is_vertex_split_head, is_vertex_split_tail, split_head, split_tail,
    tail_prize,
};
pub use split::{
    lookup_from_split, lookup_to_split, split_edges, split_graph_from_properties,
    SplitEdgeAttributes,
};
pub use undirected::{new_dummy_vertex, old_vertex_from_dummy, to_simple_undirected};
