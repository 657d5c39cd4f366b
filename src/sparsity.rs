use ahash::AHashSet;
use enum_map::{enum_map, Enum, EnumMap};
use fixedbitset::FixedBitSet;
use petgraph::EdgeType;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ConversionError;
use crate::graph::{AttributedGraph, EdgeAttributes};
use crate::types::Vertex;
use crate::utils::create_seeded_rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Enum)]
pub enum SparsityMetric {
    /// Largest `k` such that the graph has a non-empty `k`-core.
    Degeneracy,
    /// Share of the possible edges between distinct vertices that exist.
    Density,
}

/// Removes every edge independently with probability `p`. Self loops are
/// never removed.
pub fn remove_random_edges_from_graph<Ty: EdgeType>(
    graph: &AttributedGraph<Ty>,
    p: f64,
    seed: i128,
) -> Result<AttributedGraph<Ty>, ConversionError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(ConversionError::InvalidProbability(p));
    }
    let mut rng = create_seeded_rng(seed);
    let mut sparse = AttributedGraph::new();
    for (v, attributes) in graph.nodes() {
        sparse.add_node(v, attributes.clone());
    }
    for (u, v, attributes) in graph.edges() {
        if u == v || rng.gen::<f64>() >= p {
            sparse.add_multi_edge(u, v, *attributes);
        }
    }
    log::debug!(
        "kept {} of {} edges with removal probability {}",
        sparse.number_of_edges(),
        graph.number_of_edges(),
        p
    );
    Ok(sparse)
}

/// Removes edges uniformly at random until at most `kappa` edges per vertex
/// remain: a random vertex loses the edge to a random neighbor.
pub fn sparsify_uid<Ty: EdgeType>(
    graph: &AttributedGraph<Ty>,
    kappa: usize,
    seed: i128,
) -> AttributedGraph<Ty> {
    let mut rng = create_seeded_rng(seed);
    let mut sparse = graph.clone();
    let vertices: Vec<Vertex> = sparse.vertices().collect();
    while sparse.number_of_edges() > sparse.number_of_nodes() * kappa {
        let Some(u) = vertices.choose(&mut rng).copied() else {
            break;
        };
        if let Some(v) = sparse.neighbors(u).choose(&mut rng).copied() {
            sparse.remove_edge(u, v);
        }
    }
    sparse
}

pub fn measure_sparsity_metrics<Ty: EdgeType, E>(
    graph: &AttributedGraph<Ty, E>,
) -> EnumMap<SparsityMetric, f64> {
    let adjacency = simple_adjacency(graph);
    let n = adjacency.len();
    let num_edges: usize = adjacency.iter().map(|it| it.len()).sum::<usize>() / 2;
    let density = if n < 2 {
        0.0
    } else {
        2.0 * num_edges as f64 / (n * (n - 1)) as f64
    };
    enum_map! {
        SparsityMetric::Degeneracy => degeneracy(&adjacency) as f64,
        SparsityMetric::Density => density,
    }
}

/// Neighbor sets of the underlying simple undirected graph, by position in
/// the vertex list.
fn simple_adjacency<Ty: EdgeType, E>(graph: &AttributedGraph<Ty, E>) -> Vec<AHashSet<usize>> {
    let mut adjacency = vec![AHashSet::new(); graph.number_of_nodes()];
    for edge in graph.inner().raw_edges() {
        let (a, b) = (edge.source().index(), edge.target().index());
        if a != b {
            adjacency[a].insert(b);
            adjacency[b].insert(a);
        }
    }
    adjacency
}

/// Repeatedly removes a vertex of minimum degree; the largest degree seen at
/// removal is the degeneracy.
fn degeneracy(adjacency: &[AHashSet<usize>]) -> usize {
    let n = adjacency.len();
    let mut degree: Vec<usize> = adjacency.iter().map(|it| it.len()).collect();
    let mut removed = FixedBitSet::with_capacity(n);
    let mut k = 0;
    for _ in 0..n {
        let Some(u) = (0..n)
            .filter(|v| !removed.contains(*v))
            .min_by_key(|v| degree[*v])
        else {
            break;
        };
        k = k.max(degree[u]);
        removed.insert(u);
        for v in adjacency[u].iter() {
            if !removed.contains(*v) {
                degree[*v] -= 1;
            }
        }
    }
    k
}
