use ahash::{AHashMap, AHashSet};
use itertools::Itertools;

use crate::error::ConversionError;
use crate::graph::CostGraph;
use crate::types::{Cost, Edge, EdgeList, Prize, Vertex};

/// Consecutive pairs of a walk, in walk order.
pub fn edge_list_from_walk(walk: &[Vertex]) -> EdgeList {
    walk.iter().copied().tuple_windows().collect()
}

/// Every pair of consecutive vertices is adjacent in `graph`.
pub fn is_walk<G: CostGraph>(graph: &G, walk: &[Vertex]) -> bool {
    walk.iter()
        .tuple_windows()
        .all(|(u, v)| graph.has_edge(*u, *v))
}

fn num_unique(walk: &[Vertex]) -> usize {
    walk.iter().collect::<AHashSet<_>>().len()
}

/// A walk without repeated vertices.
pub fn is_simple_path<G: CostGraph>(graph: &G, path: &[Vertex]) -> bool {
    is_walk(graph, path) && path.len() == num_unique(path)
}

/// A closed walk repeating only its first vertex, once at the end. Walks of
/// at most one vertex count as cycles.
pub fn is_simple_cycle<G: CostGraph>(graph: &G, cycle: &[Vertex]) -> bool {
    if cycle.len() <= 1 {
        return true;
    }
    is_walk(graph, cycle)
        && cycle.len() == num_unique(cycle) + 1
        && cycle.first() == cycle.last()
}

pub fn total_prize(
    prizes: &AHashMap<Vertex, Prize>,
    vertices: &[Vertex],
) -> Result<Prize, ConversionError> {
    vertices
        .iter()
        .map(|v| {
            prizes
                .get(v)
                .copied()
                .ok_or(ConversionError::MissingPrize { vertex: *v })
        })
        .sum()
}

/// Sum of edge costs; an edge missing from `costs` is looked up reversed.
pub fn total_cost(costs: &AHashMap<Edge, Cost>, edges: &[Edge]) -> Result<Cost, ConversionError> {
    edges
        .iter()
        .map(|(u, v)| {
            costs
                .get(&(*u, *v))
                .or_else(|| costs.get(&(*v, *u)))
                .copied()
                .ok_or(ConversionError::MissingEdge { u: *u, v: *v })
        })
        .sum()
}

/// Cost of following `walk` in `graph`.
pub fn total_cost_of_walk<G: CostGraph>(graph: &G, walk: &[Vertex]) -> Result<Cost, ConversionError> {
    edge_list_from_walk(walk)
        .into_iter()
        .map(|(u, v)| {
            graph
                .cost(u, v)
                .or_else(|| graph.cost(v, u))
                .ok_or(ConversionError::MissingEdge { u, v })
        })
        .sum()
}

/// Prize collected by `walk` in `graph`, each vertex counted once.
pub fn total_prize_of_walk<G: CostGraph>(graph: &G, walk: &[Vertex]) -> Result<Prize, ConversionError> {
    walk.iter()
        .unique()
        .map(|v| {
            graph
                .prize(*v)
                .ok_or(ConversionError::MissingPrize { vertex: *v })
        })
        .sum()
}
