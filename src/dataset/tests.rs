use std::path::PathBuf;

use itertools::Itertools;

use super::*;
use crate::error::{ConversionError, Error};
use crate::graph::walk::{total_cost_of_walk, total_prize_of_walk};
use crate::graph::CostGraph;
use crate::problem::distance::Point;
use crate::problem::fields::{EdgeWeightType, ProblemType};
use crate::problem::NodeMap;
use crate::types::{Prize, Vertex};
use crate::weights::{generation_three_prizes, generation_two_prize};

const OPLIB_ROOT: &str = "resources/oplib";
const TSPLIB_ROOT: &str = "resources/tsplib";

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn load_burma14_from_oplib() -> anyhow::Result<()> {
    init_logger();
    let problem = load_oplib_instance(OPLIB_ROOT, Generation::Gen1, GraphName::Burma14, Alpha::Fifty)?;

    assert_eq!(problem.problem.name, "burma14");
    assert_eq!(problem.problem.problem_type, ProblemType::Op);
    assert_eq!(problem.get_cost_limit(), Some(1662));
    assert_eq!(
        problem.get_tsp_optimal_value(),
        Some(GraphName::Burma14.optimal_tsp_value())
    );
    let scores = problem.get_node_score().map(|it| it.len());
    assert_eq!(scores, Some(14));

    let graph = problem.get_graph(false)?;
    assert_eq!(graph.number_of_nodes(), 14);
    assert_eq!(graph.number_of_edges(), 14 * 15 / 2);
    assert_eq!(graph.prize(1), Some(0));
    assert!(graph.node(1).is_some_and(|it| it.is_depot));
    assert!((2..=14).all(|v| graph.prize(v) == Some(1)));

    let tour = [1, 2, 14, 3, 4, 5, 6, 12, 7, 13, 8, 11, 9, 10, 1];
    assert_eq!(total_cost_of_walk(&graph, &tour)?, 3323);
    assert_eq!(total_prize_of_walk(&graph, &tour)?, 13);
    Ok(())
}

#[test]
fn loading_twice_gives_equal_problems() -> anyhow::Result<()> {
    let first = load_oplib_instance(OPLIB_ROOT, Generation::Gen1, GraphName::Burma14, Alpha::Fifty)?;
    let second = load_oplib_instance(OPLIB_ROOT, Generation::Gen1, GraphName::Burma14, Alpha::Fifty)?;
    assert_eq!(first, second);
    assert_eq!(first.get_graph(false)?.edge_list(), second.get_graph(false)?.edge_list());
    Ok(())
}

#[test]
fn both_representations_carry_prizes() -> anyhow::Result<()> {
    let problem = load_oplib_instance(OPLIB_ROOT, Generation::Gen1, GraphName::Burma14, Alpha::Fifty)?;
    for normalize in [false, true] {
        let graph = problem.get_graph(normalize)?;
        let property_graph = problem.get_property_graph(normalize)?;
        assert_eq!(graph.vertex_list(), property_graph.vertex_list());
        for v in graph.vertex_list() {
            assert!(graph.prize(v).is_some());
            assert_eq!(graph.prize(v), property_graph.prize(v));
        }
        for (u, v) in graph.edge_list() {
            assert_eq!(graph.cost(u, v), property_graph.cost(u, v));
        }
    }
    Ok(())
}

#[test]
fn load_burma14_from_tsplib() -> anyhow::Result<()> {
    init_logger();
    let problem = load_tsplib_instance(TSPLIB_ROOT, GraphName::Burma14)?;
    assert_eq!(problem.edge_weight_type, Some(EdgeWeightType::Geo));
    assert_eq!(problem.get_nodes(), (1..=14).collect_vec());
    Ok(())
}

#[test]
fn missing_instances() {
    assert!(matches!(
        load_oplib_instance(OPLIB_ROOT, Generation::Gen2, GraphName::Burma14, Alpha::Fifty),
        Err(Error::NotFound { .. })
    ));
    assert!(matches!(
        load_tsplib_instance(TSPLIB_ROOT, GraphName::St70),
        Err(Error::NotFound { .. })
    ));
}

#[test]
fn config_resolves_roots() -> anyhow::Result<()> {
    let config = DatasetConfig {
        oplib_root: Some(PathBuf::from(OPLIB_ROOT)),
        tsplib_root: None,
    };
    let problem = config.load_oplib_instance(Generation::Gen1, GraphName::Burma14, Alpha::Fifty)?;
    assert_eq!(problem.problem.dimension, 14);
    assert!(matches!(
        config.load_tsplib_instance(GraphName::Burma14),
        Err(Error::Config(_))
    ));
    Ok(())
}

#[test]
fn profits_problem_fields() -> anyhow::Result<()> {
    let problem = ProfitsProblem::load("resources/instances/triangle.oplib")?;
    assert_eq!(problem.get_cost_limit(), Some(6));
    assert_eq!(problem.get_tsp_optimal_value(), Some(12));
    assert_eq!(problem.problem.depots, vec![1]);
    assert_eq!(
        problem.get_node_score().map(|it| it.keys().collect_vec()),
        Some(vec![1, 2, 3])
    );
    assert_eq!(problem.get_weight(2, 3)?, 5);
    assert!(problem.is_complete());

    let graph = problem.get_graph(true)?;
    assert_eq!(graph.prize(2), Some(7));
    assert!(graph.node(0).is_some_and(|it| it.is_depot));
    Ok(())
}

#[test]
fn missing_scores_are_never_zero() -> anyhow::Result<()> {
    let problem = ProfitsProblem::load("resources/instances/triangle-missing-scores.oplib")?;
    assert_eq!(problem.get_node_score(), None);
    assert!(matches!(
        problem.get_graph(false),
        Err(Error::Conversion(ConversionError::MissingSection(
            "NODE_SCORE_SECTION"
        )))
    ));
    assert!(matches!(
        problem.get_property_graph(false),
        Err(Error::Conversion(ConversionError::MissingSection(_)))
    ));
    // the standard view still works
    assert_eq!(problem.standard().get_graph(false)?.number_of_nodes(), 3);

    let mut partial = ProfitsProblem::load("resources/instances/triangle.oplib")?;
    partial.node_score = Some([(1, 0), (3, 7)].into_iter().collect());
    assert!(matches!(
        partial.get_graph(false),
        Err(Error::Conversion(ConversionError::MissingPrize { vertex: 2 }))
    ));
    Ok(())
}

#[test]
fn duplicate_scores_are_rejected() {
    let text = "NAME : dup\nTYPE : OP\nDIMENSION : 2\nEDGE_WEIGHT_TYPE : EUC_2D\n\
                NODE_COORD_SECTION\n1 0 0\n2 1 0\nNODE_SCORE_SECTION\n1 3\n1 4\nEOF\n";
    match ProfitsProblem::parse(text) {
        Err(Error::Parse(err)) => assert_eq!(err.line, Some(10)),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn scores_must_name_exactly_the_problem_nodes() {
    let header = "NAME : t\nTYPE : OP\nDIMENSION : 3\nEDGE_WEIGHT_TYPE : EUC_2D\n\
                  NODE_COORD_SECTION\n1 0 0\n2 3 0\n3 0 4\n";
    for scores in [
        "1 0\n2 5\n3 7\n99 50\n",
        "1 0\n2 5\n99 50\n",
        "1 0\n2 5\n",
    ] {
        let text = format!("{}NODE_SCORE_SECTION\n{}EOF\n", header, scores);
        match ProfitsProblem::parse(&text) {
            Err(Error::Parse(err)) => assert_eq!(err.line, Some(9), "{:?}", scores),
            other => panic!("unexpected result {:?} for {:?}", other, scores),
        }
    }

    let text = format!("{}NODE_SCORE_SECTION\n1 0\n2 5\n3 7\nEOF\n", header);
    assert!(ProfitsProblem::parse(&text).is_ok());
}

#[test]
fn written_profits_problem_reads_back() -> anyhow::Result<()> {
    for path in [
        "resources/instances/triangle.oplib",
        "resources/oplib/instances/gen1/burma14-gen1-50.oplib",
    ] {
        let problem = ProfitsProblem::load(path)?;
        assert_eq!(ProfitsProblem::parse(&problem.render())?, problem);
    }
    Ok(())
}

/// A 70 node instance on a 10 x 7 grid with the given scores, written where
/// the dataset layout expects `st70`.
fn write_st70(root: &std::path::Path, generation: Generation, scores: &NodeMap<Prize>) -> anyhow::Result<()> {
    let mut problem = ProfitsProblem::default();
    problem.problem.name = GraphName::St70.to_string();
    problem.problem.problem_type = ProblemType::Op;
    problem.problem.dimension = 70;
    problem.problem.edge_weight_type = Some(EdgeWeightType::Euc2d);
    problem.problem.node_coords = (0..70)
        .map(|i| (i + 1, Point::new((10 * (i % 10)) as f64, (10 * (i / 10)) as f64)))
        .collect();
    problem.problem.depots = vec![1];
    problem.cost_limit = Some(338);
    problem.tspsol = Some(GraphName::St70.optimal_tsp_value());
    problem.node_score = Some(scores.clone());

    let path = build_path_to_oplib_instance(root, generation, GraphName::St70, Alpha::Fifty);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    problem.write(&path)?;
    Ok(())
}

#[test]
fn st70_generations() -> anyhow::Result<()> {
    init_logger();
    let root = std::env::temp_dir().join(format!("tspwplib-oplib-{}", std::process::id()));
    let vertices: Vec<Vertex> = (1..=70).collect();

    let gen2: NodeMap<Prize> = vertices
        .iter()
        .map(|v| (*v, generation_two_prize(*v)))
        .collect();
    write_st70(&root, Generation::Gen2, &gen2)?;

    let coords: Vec<Point> = (0..70)
        .map(|i| Point::new((10 * (i % 10)) as f64, (10 * (i / 10)) as f64))
        .collect();
    let gen3: NodeMap<Prize> = vertices
        .iter()
        .copied()
        .zip(generation_three_prizes(&coords, 0)?)
        .collect();
    write_st70(&root, Generation::Gen3, &gen3)?;

    for (generation, scores) in [(Generation::Gen2, &gen2), (Generation::Gen3, &gen3)] {
        let problem = load_oplib_instance(&root, generation, GraphName::St70, Alpha::Fifty)?;
        assert_eq!(problem.get_cost_limit(), Some(338));
        assert_eq!(problem.get_tsp_optimal_value(), Some(675));

        let graph = problem.get_graph(false)?;
        assert_eq!(graph.number_of_nodes(), 70);
        assert_eq!(graph.number_of_edges(), 70 * 71 / 2);
        for v in vertices.iter() {
            assert_eq!(graph.prize(*v), scores.get(*v).copied());
        }
        assert_eq!(graph.cost(1, 2), Some(10));
        assert_eq!(graph.cost(1, 12), Some(14));
    }
    // the corner opposite the root is the farthest vertex
    assert_eq!(gen3.get(1), Some(&1));
    assert_eq!(gen3.get(70), Some(&100));

    std::fs::remove_dir_all(&root)?;
    Ok(())
}
