use std::path::Path;

use ahash::{AHashMap, AHashSet};
use log::{debug, info, warn};
use petgraph::{Directed, Undirected};
use took::Timer;

use crate::error::{ConversionError, ParseError, Result};
use crate::graph::{
    AttributedGraph, EdgeAttributes, GraphElements, NodeAttributes, PropertyTspGraph,
};
use crate::io::tsplib_reader::RawProblem;
use crate::io::tsplib_writer::TsplibDocument;
use crate::problem::distance::{self, Point};
use crate::problem::fields::{
    DisplayDataType, EdgeDataFormat, EdgeWeightFormat, EdgeWeightType, NodeCoordType, ProblemType,
};
use crate::problem::weight_matrix::WeightMatrix;
use crate::problem::{EdgeData, NodeMap};
use crate::types::{Cost, Edge, EdgeList, Prize, Vertex, VertexList};

/// A problem in the TSPLIB format with all standard fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StandardProblem {
    pub name: String,
    pub comment: Option<String>,
    pub problem_type: ProblemType,
    pub dimension: usize,
    pub capacity: Option<i64>,
    pub edge_weight_type: Option<EdgeWeightType>,
    pub edge_weight_format: Option<EdgeWeightFormat>,
    pub edge_data_format: Option<EdgeDataFormat>,
    pub node_coord_type: Option<NodeCoordType>,
    pub display_data_type: Option<DisplayDataType>,
    pub node_coords: NodeMap<Point>,
    pub depots: Vec<Vertex>,
    pub demands: NodeMap<i64>,
    pub edge_data: Option<EdgeData>,
    pub fixed_edges: Vec<Edge>,
    pub display_data: NodeMap<Point>,
    pub tours: Vec<Vec<Vertex>>,
    pub edge_weights: Option<WeightMatrix>,
    /// Header keywords without a field, in file order.
    pub extra: Vec<(String, String)>,
}

impl StandardProblem {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let timer = Timer::new();
        let problem = Self::from_raw(crate::io::read_raw_problem(path)?)?;
        info!(
            "problem {} with {} nodes loaded after {}",
            problem.name,
            problem.dimension,
            timer.took()
        );
        Ok(problem)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(Self::from_raw(RawProblem::parse(text)?)?)
    }

    pub(crate) fn from_raw(mut raw: RawProblem) -> std::result::Result<Self, ParseError> {
        let mut problem = StandardProblem::default();

        for entry in std::mem::take(&mut raw.entries) {
            match entry.key.as_str() {
                "NAME" => problem.name = entry.value,
                "TYPE" => problem.problem_type = ProblemType::from(entry.value.as_str()),
                "COMMENT" => problem.comment = Some(entry.value),
                "DIMENSION" => problem.dimension = entry.parse()?,
                "CAPACITY" => problem.capacity = Some(entry.parse()?),
                "EDGE_WEIGHT_TYPE" => problem.edge_weight_type = Some(entry.parse_keyword()?),
                "EDGE_WEIGHT_FORMAT" => problem.edge_weight_format = Some(entry.parse_keyword()?),
                "EDGE_DATA_FORMAT" => problem.edge_data_format = Some(entry.parse_keyword()?),
                "NODE_COORD_TYPE" => problem.node_coord_type = Some(entry.parse_keyword()?),
                "DISPLAY_DATA_TYPE" => problem.display_data_type = Some(entry.parse_keyword()?),
                _ => {
                    debug!("keeping unknown keyword {} at line {}", entry.key, entry.line);
                    problem.extra.push((entry.key, entry.value));
                }
            }
        }

        let mut edge_weights = None;
        let mut demand_line = None;
        let mut display_line = None;
        for section in std::mem::take(&mut raw.sections) {
            match section.key.as_str() {
                "NODE_COORD_SECTION" => problem.node_coords = section.points()?,
                "DEPOT_SECTION" => problem.depots = section.node_list()?,
                "DEMAND_SECTION" => {
                    problem.demands = section.node_values()?;
                    demand_line = Some(section.line);
                }
                "EDGE_DATA_SECTION" => {
                    problem.edge_data = Some(section.edge_data(problem.edge_data_format)?)
                }
                "FIXED_EDGES_SECTION" => problem.fixed_edges = section.edge_list()?,
                "DISPLAY_DATA_SECTION" => {
                    problem.display_data = section.points()?;
                    display_line = Some(section.line);
                }
                "TOUR_SECTION" => problem.tours = section.tours()?,
                "EDGE_WEIGHT_SECTION" => edge_weights = Some(section),
                _ => warn!("ignoring unknown section {} at line {}", section.key, section.line),
            }
        }

        if problem.dimension == 0 {
            problem.dimension = problem.node_coords.len();
        } else if !problem.node_coords.is_empty() && problem.node_coords.len() != problem.dimension
        {
            return Err(ParseError::new(format!(
                "DIMENSION is {} but NODE_COORD_SECTION lists {} nodes",
                problem.dimension,
                problem.node_coords.len()
            )));
        }

        if let Some(line) = display_line {
            problem.check_node_section("DISPLAY_DATA_SECTION", line, &problem.display_data)?;
        }
        if let Some(line) = demand_line {
            problem.check_node_section("DEMAND_SECTION", line, &problem.demands)?;
        }

        if let Some(section) = edge_weights {
            let format = problem.edge_weight_format.unwrap_or(EdgeWeightFormat::FullMatrix);
            let values = section.weights()?;
            let matrix = WeightMatrix::from_explicit(format, problem.dimension, &values)
                .map_err(|err| ParseError::at_line(section.line, err.message))?;
            problem.edge_weights = Some(matrix);
        }

        Ok(problem)
    }

    pub fn render(&self) -> String {
        self.document().render()
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        self.document().write(path.as_ref())
    }

    pub(crate) fn document(&self) -> TsplibDocument {
        let mut doc = TsplibDocument::default();
        doc.entry("NAME", &self.name);
        doc.entry("TYPE", &self.problem_type);
        if let Some(comment) = &self.comment {
            doc.entry("COMMENT", comment);
        }
        doc.entry("DIMENSION", self.dimension);
        doc.optional_entry("CAPACITY", self.capacity);
        doc.optional_entry("EDGE_WEIGHT_TYPE", self.edge_weight_type);
        doc.optional_entry("EDGE_WEIGHT_FORMAT", self.edge_weight_format);
        doc.optional_entry("EDGE_DATA_FORMAT", self.edge_data_format);
        doc.optional_entry("NODE_COORD_TYPE", self.node_coord_type);
        doc.optional_entry("DISPLAY_DATA_TYPE", self.display_data_type);
        for (key, value) in self.extra.iter() {
            doc.entry(key, value);
        }

        doc.points_section("NODE_COORD_SECTION", &self.node_coords);
        doc.node_values_section("DEMAND_SECTION", &self.demands);
        if let Some(edge_data) = &self.edge_data {
            doc.edge_data_section(edge_data);
        }
        doc.edges_section("FIXED_EDGES_SECTION", &self.fixed_edges);
        doc.points_section("DISPLAY_DATA_SECTION", &self.display_data);
        doc.tours_section(&self.tours);
        if let Some(matrix) = &self.edge_weights {
            let format = self.edge_weight_format.unwrap_or(EdgeWeightFormat::FullMatrix);
            doc.weights_section(matrix, format);
        }
        doc.depots_section(&self.depots);
        doc
    }

    pub fn is_directed(&self) -> bool {
        self.problem_type == ProblemType::Atsp
    }

    /// True unless an `EDGE_DATA_SECTION` restricts the edge set.
    pub fn is_complete(&self) -> bool {
        self.edge_data.is_none()
    }

    pub fn is_explicit(&self) -> bool {
        matches!(self.effective_weight_type(), Ok(EdgeWeightType::Explicit))
    }

    fn effective_weight_type(&self) -> std::result::Result<EdgeWeightType, ConversionError> {
        match (self.edge_weight_type, &self.edge_weights) {
            (Some(weight_type), _) => Ok(weight_type),
            (None, Some(_)) => Ok(EdgeWeightType::Explicit),
            (None, None) => Err(ConversionError::MissingEdgeWeightType),
        }
    }

    /// A per-node section must list every node of the problem exactly once.
    pub(crate) fn check_node_section<T>(
        &self,
        key: &str,
        line: usize,
        values: &NodeMap<T>,
    ) -> std::result::Result<(), ParseError> {
        if let Some(v) = values.keys().find(|v| !self.has_node(*v)) {
            return Err(ParseError::at_line(
                line,
                format!("{} lists unknown node {}", key, v),
            ));
        }
        if values.len() != self.dimension {
            return Err(ParseError::at_line(
                line,
                format!(
                    "DIMENSION is {} but {} lists {} nodes",
                    self.dimension,
                    key,
                    values.len()
                ),
            ));
        }
        Ok(())
    }

    /// Membership in [`StandardProblem::get_nodes`] without building the list.
    fn has_node(&self, v: Vertex) -> bool {
        if !self.node_coords.is_empty() {
            self.node_coords.contains(v)
        } else if !self.display_data.is_empty() {
            self.display_data.contains(v)
        } else {
            v >= 1 && (v as u64) <= self.dimension as u64
        }
    }

    /// Node ids from the coordinates, else the display data, else `1..=DIMENSION`.
    pub fn get_nodes(&self) -> VertexList {
        if !self.node_coords.is_empty() {
            self.node_coords.keys().collect()
        } else if !self.display_data.is_empty() {
            self.display_data.keys().collect()
        } else {
            (1..=self.dimension as Vertex).collect()
        }
    }

    /// The edges of an `EDGE_DATA_SECTION`, else every ordered pair of nodes
    /// (self loops included).
    pub fn get_edges(&self) -> EdgeList {
        match &self.edge_data {
            Some(edge_data) => edge_data.edges(),
            None => {
                let nodes = self.get_nodes();
                nodes
                    .iter()
                    .flat_map(|u| nodes.iter().map(move |v| (*u, *v)))
                    .collect()
            }
        }
    }

    pub fn get_weight(&self, u: Vertex, v: Vertex) -> Result<Cost> {
        Ok(self.weight_function()?.weight(u, v)?)
    }

    pub(crate) fn weight_function(&self) -> std::result::Result<WeightFunction<'_>, ConversionError> {
        match self.effective_weight_type()? {
            EdgeWeightType::Explicit => {
                let matrix = self
                    .edge_weights
                    .as_ref()
                    .ok_or(ConversionError::MissingSection("EDGE_WEIGHT_SECTION"))?;
                let position = self
                    .get_nodes()
                    .into_iter()
                    .enumerate()
                    .map(|(idx, v)| (v, idx))
                    .collect();
                Ok(WeightFunction::Matrix { matrix, position })
            }
            weight_type @ (EdgeWeightType::Xray1
            | EdgeWeightType::Xray2
            | EdgeWeightType::Special) => Err(ConversionError::UnsupportedEdgeWeightType(
                weight_type.to_string(),
            )),
            weight_type => {
                if self.node_coords.is_empty() {
                    return Err(ConversionError::MissingSection("NODE_COORD_SECTION"));
                }
                Ok(WeightFunction::Coordinates {
                    weight_type,
                    coords: &self.node_coords,
                })
            }
        }
    }

    pub fn get_graph(&self, normalize: bool) -> Result<AttributedGraph<Undirected>> {
        if self.is_directed() {
            return Err(ConversionError::DirectedInstance(self.name.clone()).into());
        }
        Ok(AttributedGraph::from_elements(
            self.graph_elements(normalize, false, None)?,
        ))
    }

    pub fn get_digraph(&self, normalize: bool) -> Result<AttributedGraph<Directed>> {
        Ok(AttributedGraph::from_elements(
            self.graph_elements(normalize, true, None)?,
        ))
    }

    pub fn get_property_graph(&self, normalize: bool) -> Result<PropertyTspGraph> {
        Ok(PropertyTspGraph::from_elements(self.graph_elements(
            normalize,
            self.is_directed(),
            None,
        )?))
    }

    /// Nodes in [`StandardProblem::get_nodes`] order and edges in
    /// [`StandardProblem::get_edges`] order. Undirected graphs keep the first
    /// orientation of every pair.
    pub(crate) fn graph_elements(
        &self,
        normalize: bool,
        directed: bool,
        prizes: Option<&NodeMap<Prize>>,
    ) -> std::result::Result<GraphElements, ConversionError> {
        let weights = self.weight_function()?;
        let nodes = self.get_nodes();
        let names: AHashMap<Vertex, Vertex> = nodes
            .iter()
            .enumerate()
            .map(|(idx, v)| (*v, if normalize { idx as Vertex } else { *v }))
            .collect();
        let depots: AHashSet<Vertex> = self.depots.iter().copied().collect();
        let fixed: AHashSet<Edge> = self.fixed_edges.iter().copied().collect();

        let mut node_elements = Vec::with_capacity(nodes.len());
        for v in nodes.iter().copied() {
            let prize = match prizes {
                Some(prizes) => Some(
                    *prizes
                        .get(v)
                        .ok_or(ConversionError::MissingPrize { vertex: v })?,
                ),
                None => None,
            };
            let attributes = NodeAttributes {
                prize,
                coord: self.node_coords.get(v).copied(),
                display: self.display_data.get(v).copied(),
                demand: self.demands.get(v).copied(),
                is_depot: depots.contains(&v),
            };
            node_elements.push((names[&v], attributes));
        }

        let mut seen: AHashSet<Edge> = AHashSet::new();
        let mut edge_elements = vec![];
        for (u, v) in self.get_edges() {
            let (Some(&a), Some(&b)) = (names.get(&u), names.get(&v)) else {
                return Err(ConversionError::MissingEdge { u, v });
            };
            if !directed && !seen.insert((u.min(v), u.max(v))) {
                continue;
            }
            let is_fixed = fixed.contains(&(u, v)) || (!directed && fixed.contains(&(v, u)));
            let attributes = EdgeAttributes {
                cost: weights.weight(u, v)?,
                is_fixed,
            };
            edge_elements.push((a, b, attributes));
        }

        Ok(GraphElements {
            directed,
            nodes: node_elements,
            edges: edge_elements,
        })
    }
}

/// Edge weights of a problem, resolved once for repeated lookups.
pub(crate) enum WeightFunction<'a> {
    Coordinates {
        weight_type: EdgeWeightType,
        coords: &'a NodeMap<Point>,
    },
    Matrix {
        matrix: &'a WeightMatrix,
        position: AHashMap<Vertex, usize>,
    },
}

impl WeightFunction<'_> {
    /// Coordinate based weights are zero on the diagonal.
    pub fn weight(&self, u: Vertex, v: Vertex) -> std::result::Result<Cost, ConversionError> {
        match self {
            WeightFunction::Coordinates {
                weight_type,
                coords,
            } => {
                let (Some(a), Some(b)) = (coords.get(u), coords.get(v)) else {
                    return Err(ConversionError::MissingEdge { u, v });
                };
                if u == v {
                    return Ok(0);
                }
                distance::distance(*weight_type, a, b)
            }
            WeightFunction::Matrix { matrix, position } => {
                match (position.get(&u), position.get(&v)) {
                    (Some(&i), Some(&j)) if i < matrix.num_nodes() && j < matrix.num_nodes() => {
                        Ok(matrix.weight(i, j))
                    }
                    _ => Err(ConversionError::MissingEdge { u, v }),
                }
            }
        }
    }
}
