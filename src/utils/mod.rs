use ahash::AHashMap;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::types::{Cost, Edge, EdgeList, Vertex};

pub type Random = Pcg64Mcg;

/// Neighbors of every vertex with at least one outgoing edge.
pub type AdjList = AHashMap<Vertex, Vec<Vertex>>;
/// Cost of every edge, by source and then target.
pub type AdjWeights = AHashMap<Vertex, AHashMap<Vertex, Cost>>;
pub type EdgeFunction = AHashMap<Edge, Cost>;

pub fn create_seeded_rng(seed: i128) -> Random {
    let mut rng = Pcg64Mcg::from_seed(seed.to_le_bytes());
    // discard the first three
    rng.next_u64();
    rng.next_u64();
    rng.next_u64();
    rng
}

/// Neighbors keep the order of `edges`.
pub fn adjacency_list_from_edge_list(edges: &[Edge]) -> AdjList {
    let mut adj_list = AdjList::new();
    for (u, v) in edges.iter() {
        adj_list.entry(*u).or_default().push(*v);
    }
    adj_list
}

pub fn edge_list_from_adjacency_list(adj_list: &AdjList) -> EdgeList {
    adj_list
        .iter()
        .flat_map(|(u, neighbors)| neighbors.iter().map(move |v| (*u, *v)))
        .collect()
}

pub fn adjacency_weights_from_edge_dict(weights: &EdgeFunction) -> AdjWeights {
    let mut adj_weights = AdjWeights::new();
    for ((u, v), w) in weights.iter() {
        adj_weights.entry(*u).or_default().insert(*v, *w);
    }
    adj_weights
}

pub fn edge_dict_from_adjacency_weights(adj_weights: &AdjWeights) -> EdgeFunction {
    adj_weights
        .iter()
        .flat_map(|(u, neighbors)| neighbors.iter().map(move |(v, w)| ((*u, *v), *w)))
        .collect()
}
