use ahash::AHashMap;
use itertools::Itertools;
use petgraph::unionfind::UnionFind;
use rand::Rng;

use crate::graph::CostGraph;
use crate::types::{Cost, Edge, Vertex};
use crate::utils::{create_seeded_rng, EdgeFunction};

/// Independent costs drawn uniformly from `min_value..=max_value`.
pub fn uniform_random_cost(edges: &[Edge], min_value: Cost, max_value: Cost, seed: i128) -> EdgeFunction {
    let mut rng = create_seeded_rng(seed);
    edges
        .iter()
        .map(|edge| (*edge, rng.gen_range(min_value..=max_value)))
        .collect()
}

/**
Costs derived from a minimum spanning tree `T` of the graph.

An edge of `T` keeps its cost, any other edge `(u, v)` costs its own cost
plus the length of the path from `u` to `v` in `T`. Self loops cost zero.
On a disconnected graph `T` is a spanning forest.
 */
pub fn mst_cost<G: CostGraph>(graph: &G) -> EdgeFunction {
    let vertices = graph.vertex_list();
    let position: AHashMap<Vertex, usize> =
        vertices.iter().enumerate().map(|(i, v)| (*v, i)).collect();
    let edges: Vec<(Edge, Cost)> = graph
        .edge_list()
        .into_iter()
        .filter_map(|(u, v)| graph.cost(u, v).map(|c| ((u, v), c)))
        .collect();

    // Kruskal
    let mut components = UnionFind::<usize>::new(vertices.len());
    let mut tree: Vec<Vec<(usize, Cost)>> = vec![vec![]; vertices.len()];
    let mut is_tree_edge = vec![false; edges.len()];
    for idx in (0..edges.len()).sorted_by_key(|idx| edges[*idx].1) {
        let ((u, v), cost) = edges[idx];
        let (a, b) = (position[&u], position[&v]);
        if components.union(a, b) {
            tree[a].push((b, cost));
            tree[b].push((a, cost));
            is_tree_edge[idx] = true;
        }
    }
    log::debug!(
        "spanning tree with {} of {} edges",
        is_tree_edge.iter().filter(|it| **it).count(),
        edges.len()
    );

    let mut tree_distance: AHashMap<usize, Vec<Option<Cost>>> = AHashMap::new();
    let mut costs = EdgeFunction::with_capacity(edges.len());
    for (idx, ((u, v), cost)) in edges.iter().enumerate() {
        let new_cost = if u == v {
            0
        } else if is_tree_edge[idx] {
            *cost
        } else {
            let source = position[u];
            let distances = tree_distance
                .entry(source)
                .or_insert_with(|| distances_in_tree(&tree, source));
            // u and v are in one component, otherwise (u, v) were a tree edge
            cost + distances[position[v]].unwrap_or_default()
        };
        costs.insert((*u, *v), new_cost);
    }
    costs
}

fn distances_in_tree(tree: &[Vec<(usize, Cost)>], source: usize) -> Vec<Option<Cost>> {
    let mut distance = vec![None; tree.len()];
    distance[source] = Some(0);
    let mut stack = vec![source];
    while let Some(u) = stack.pop() {
        let du = distance[u].unwrap_or_default();
        for (v, cost) in tree[u].iter() {
            if distance[*v].is_none() {
                distance[*v] = Some(du + cost);
                stack.push(*v);
            }
        }
    }
    distance
}
