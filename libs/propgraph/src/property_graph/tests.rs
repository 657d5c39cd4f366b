use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::{Edge, EdgePropertyMap, PropertyGraph, VertexPropertyMap};

fn triangle_with_loop(directed: bool) -> PropertyGraph {
    PropertyGraph::builder(directed)
        .set_num_vertices(3)
        .add_edges(vec![
            Edge::new(0, 1),
            Edge::new(1, 2),
            Edge::new(0, 2),
            Edge::new(1, 1),
        ])
        .build()
}

#[test]
fn undirected_edges_are_found_from_both_ends() {
    let graph = triangle_with_loop(false);
    assert_eq!(graph.num_vertices(), 3);
    assert_eq!(graph.num_edges(), 4);
    assert_eq!(graph.find_edge(0, 1), Some(0));
    assert_eq!(graph.find_edge(1, 0), Some(0));
    assert_eq!(graph.find_edge(2, 0), Some(2));
    assert_eq!(graph.find_edge(1, 1), Some(3));
    assert!(!graph.edge_exists(0, 0));
    assert_eq!(graph.out_degree(1), 3);
    assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![0, 2, 1]);
}

#[test]
fn directed_edges_only_leave_their_source() {
    let graph = triangle_with_loop(true);
    assert!(graph.edge_exists(0, 1));
    assert!(!graph.edge_exists(1, 0));
    assert_eq!(graph.out_edges(0).collect::<Vec<_>>(), vec![0, 2]);
    assert_eq!(graph.out_degree(2), 0);
    assert_eq!(graph.find_edge(5, 0), None);
}

#[test]
fn property_maps_are_sized_by_the_graph() {
    let graph = triangle_with_loop(false);
    let mut prize = VertexPropertyMap::with_default(&graph, 0i64);
    prize[2] = 7;
    assert_eq!(prize.len(), 3);
    assert_eq!(prize.get(2), Some(&7));
    assert_eq!(prize.get(3), None);

    let cost = EdgePropertyMap::from_vec(&graph, vec![1, 2, 3, 0]).unwrap();
    assert_eq!(cost[graph.find_edge(2, 1).unwrap()], 2);
    assert!(EdgePropertyMap::from_vec(&graph, vec![1, 2]).is_none());
}

#[test]
fn random_graphs_agree_with_edge_list() {
    let mut rng = Pcg64Mcg::seed_from_u64(17);
    for directed in [false, true] {
        let n = 25u32;
        let edges: Vec<Edge> = (0..120)
            .map(|_| Edge::new(rng.gen_range(0..n), rng.gen_range(0..n)))
            .collect();
        let graph = PropertyGraph::builder(directed)
            .set_num_vertices(n)
            .add_edges(edges.clone())
            .build();

        for u in 0..n {
            for v in 0..n {
                let expected = edges.iter().any(|e| {
                    (e.source == u && e.target == v)
                        || (!directed && e.source == v && e.target == u)
                });
                assert_eq!(graph.edge_exists(u, v), expected, "({}, {})", u, v);
            }
        }
        let total: usize = graph.vertices().map(|v| graph.out_degree(v)).sum();
        let self_loops = edges.iter().filter(|e| e.is_self_loop()).count();
        if directed {
            assert_eq!(total, edges.len());
        } else {
            assert_eq!(total, 2 * edges.len() - self_loops);
        }
    }
}
