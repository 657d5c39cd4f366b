use std::path::Path;

use log::info;
use petgraph::{Directed, Undirected};
use took::Timer;

use crate::error::{ConversionError, ParseError, Result};
use crate::graph::{AttributedGraph, GraphElements, PropertyTspGraph};
use crate::io::tsplib_reader::RawProblem;
use crate::io::tsplib_writer::TsplibDocument;
use crate::problem::{NodeMap, StandardProblem};
use crate::types::{Cost, EdgeList, Prize, Vertex, VertexList};

/// Orienteering problem of the OPLib dataset: a TSPLIB problem whose nodes
/// carry a score, plus a limit on the total tour cost.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfitsProblem {
    pub problem: StandardProblem,
    /// `COST_LIMIT`: maximum total cost of a tour
    pub cost_limit: Option<Cost>,
    /// `NODE_SCORE_SECTION`: prize of every node, in file order
    pub node_score: Option<NodeMap<Prize>>,
    /// `TSPSOL`: length of the optimal TSP tour
    pub tspsol: Option<Cost>,
}

impl ProfitsProblem {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let timer = Timer::new();
        let problem = Self::from_raw(crate::io::read_raw_problem(path)?)?;
        info!(
            "profits problem {} with {} nodes loaded after {}",
            problem.problem.name,
            problem.problem.dimension,
            timer.took()
        );
        Ok(problem)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(Self::from_raw(RawProblem::parse(text)?)?)
    }

    fn from_raw(mut raw: RawProblem) -> std::result::Result<Self, ParseError> {
        let cost_limit = raw
            .take_entry("COST_LIMIT")
            .map(|it| it.parse::<Cost>())
            .transpose()?;
        let tspsol = raw
            .take_entry("TSPSOL")
            .map(|it| it.parse::<Cost>())
            .transpose()?;
        let node_score = raw
            .take_section("NODE_SCORE_SECTION")
            .map(|it| it.node_values().map(|scores| (it.line, scores)))
            .transpose()?;

        let problem = StandardProblem::from_raw(raw)?;
        if let Some((line, scores)) = &node_score {
            problem.check_node_section("NODE_SCORE_SECTION", *line, scores)?;
        }
        Ok(Self {
            problem,
            cost_limit,
            node_score: node_score.map(|(_, scores)| scores),
            tspsol,
        })
    }

    pub fn render(&self) -> String {
        self.document().render()
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        self.document().write(path.as_ref())
    }

    fn document(&self) -> TsplibDocument {
        let mut doc = self.problem.document();
        doc.optional_entry("COST_LIMIT", self.cost_limit);
        doc.optional_entry("TSPSOL", self.tspsol);
        if let Some(node_score) = &self.node_score {
            doc.node_values_section("NODE_SCORE_SECTION", node_score);
        }
        doc
    }

    pub fn standard(&self) -> &StandardProblem {
        &self.problem
    }

    pub fn get_cost_limit(&self) -> Option<Cost> {
        self.cost_limit
    }

    pub fn get_node_score(&self) -> Option<&NodeMap<Prize>> {
        self.node_score.as_ref()
    }

    pub fn get_tsp_optimal_value(&self) -> Option<Cost> {
        self.tspsol
    }

    pub fn get_nodes(&self) -> VertexList {
        self.problem.get_nodes()
    }

    pub fn get_edges(&self) -> EdgeList {
        self.problem.get_edges()
    }

    pub fn get_weight(&self, u: Vertex, v: Vertex) -> Result<Cost> {
        self.problem.get_weight(u, v)
    }

    pub fn is_complete(&self) -> bool {
        self.problem.is_complete()
    }

    pub fn is_directed(&self) -> bool {
        self.problem.is_directed()
    }

    fn graph_elements(
        &self,
        normalize: bool,
        directed: bool,
    ) -> std::result::Result<GraphElements, ConversionError> {
        let node_score = self
            .node_score
            .as_ref()
            .ok_or(ConversionError::MissingSection("NODE_SCORE_SECTION"))?;
        self.problem
            .graph_elements(normalize, directed, Some(node_score))
    }

    /// Undirected graph whose every node carries its prize.
    pub fn get_graph(&self, normalize: bool) -> Result<AttributedGraph<Undirected>> {
        if self.problem.is_directed() {
            return Err(ConversionError::DirectedInstance(self.problem.name.clone()).into());
        }
        Ok(AttributedGraph::from_elements(
            self.graph_elements(normalize, false)?,
        ))
    }

    pub fn get_digraph(&self, normalize: bool) -> Result<AttributedGraph<Directed>> {
        Ok(AttributedGraph::from_elements(
            self.graph_elements(normalize, true)?,
        ))
    }

    pub fn get_property_graph(&self, normalize: bool) -> Result<PropertyTspGraph> {
        Ok(PropertyTspGraph::from_elements(
            self.graph_elements(normalize, self.problem.is_directed())?,
        ))
    }
}
