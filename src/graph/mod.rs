use ahash::AHashMap;
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, EdgeType, Graph, Undirected};

use crate::problem::distance::Point;
use crate::types::{Cost, EdgeList, Prize, Vertex, VertexList};

pub mod complete;
pub mod property;
pub mod walk;

pub use property::PropertyTspGraph;

#[cfg(test)]
mod tests;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeAttributes {
    pub prize: Option<Prize>,
    pub coord: Option<Point>,
    pub display: Option<Point>,
    pub demand: Option<i64>,
    pub is_depot: bool,
}

impl NodeAttributes {
    pub fn with_prize(prize: Prize) -> Self {
        Self {
            prize: Some(prize),
            ..Default::default()
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeAttributes {
    pub cost: Cost,
    pub is_fixed: bool,
}

impl EdgeAttributes {
    pub fn with_cost(cost: Cost) -> Self {
        Self {
            cost,
            is_fixed: false,
        }
    }
}

/// Nodes and edges extracted from a problem, shared by both graph
/// representations so they cannot disagree.
#[derive(Clone, Debug)]
pub(crate) struct GraphElements {
    pub directed: bool,
    pub nodes: Vec<(Vertex, NodeAttributes)>,
    /// Every endpoint is one of `nodes`.
    pub edges: Vec<(Vertex, Vertex, EdgeAttributes)>,
}

/// Read access shared by [`AttributedGraph`] and [`PropertyTspGraph`].
pub trait CostGraph {
    fn is_directed(&self) -> bool;
    fn number_of_nodes(&self) -> usize;
    fn number_of_edges(&self) -> usize;
    fn vertex_list(&self) -> VertexList;
    fn edge_list(&self) -> EdgeList;
    fn has_node(&self, v: Vertex) -> bool;
    /// Either orientation matches on undirected graphs.
    fn has_edge(&self, u: Vertex, v: Vertex) -> bool;
    fn cost(&self, u: Vertex, v: Vertex) -> Option<Cost>;
    fn prize(&self, v: Vertex) -> Option<Prize>;
}

/// A graph whose nodes are identified by instance vertex ids and carry
/// [`NodeAttributes`], backed by a [`petgraph::Graph`].
///
/// Parallel edges are only created through [`AttributedGraph::add_multi_edge`];
/// [`AttributedGraph::add_edge`] replaces the attributes of an existing edge.
#[derive(Debug)]
pub struct AttributedGraph<Ty: EdgeType = Undirected, E = EdgeAttributes> {
    graph: Graph<NodeAttributes, E, Ty>,
    vertices: Vec<Vertex>,
    lookup: AHashMap<Vertex, NodeIndex>,
}

pub type DiAttributedGraph<E = EdgeAttributes> = AttributedGraph<Directed, E>;

impl<Ty: EdgeType, E: Clone> Clone for AttributedGraph<Ty, E> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph.clone(),
            vertices: self.vertices.clone(),
            lookup: self.lookup.clone(),
        }
    }
}

impl<Ty: EdgeType, E> Default for AttributedGraph<Ty, E> {
    fn default() -> Self {
        Self {
            graph: Graph::default(),
            vertices: vec![],
            lookup: AHashMap::new(),
        }
    }
}

impl<Ty: EdgeType, E> AttributedGraph<Ty, E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    /// Adds `v`, or replaces its attributes if it is already present.
    pub fn add_node(&mut self, v: Vertex, attributes: NodeAttributes) -> NodeIndex {
        match self.lookup.get(&v) {
            Some(&idx) => {
                self.graph[idx] = attributes;
                idx
            }
            None => {
                let idx = self.graph.add_node(attributes);
                self.vertices.push(v);
                self.lookup.insert(v, idx);
                idx
            }
        }
    }

    fn ensure_node(&mut self, v: Vertex) -> NodeIndex {
        match self.lookup.get(&v) {
            Some(&idx) => idx,
            None => self.add_node(v, NodeAttributes::default()),
        }
    }

    /// Adds the edge `(u, v)`, or replaces its attributes. Missing endpoints
    /// are added with default attributes.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex, weight: E) -> EdgeIndex {
        let a = self.ensure_node(u);
        let b = self.ensure_node(v);
        self.graph.update_edge(a, b, weight)
    }

    /// Adds `(u, v)` even if the graph already has such an edge.
    pub fn add_multi_edge(&mut self, u: Vertex, v: Vertex, weight: E) -> EdgeIndex {
        let a = self.ensure_node(u);
        let b = self.ensure_node(v);
        self.graph.add_edge(a, b, weight)
    }

    pub fn remove_edge(&mut self, u: Vertex, v: Vertex) -> Option<E> {
        let edge = self.find_edge(u, v)?;
        self.graph.remove_edge(edge)
    }

    fn find_edge(&self, u: Vertex, v: Vertex) -> Option<EdgeIndex> {
        let a = self.lookup.get(&u)?;
        let b = self.lookup.get(&v)?;
        self.graph.find_edge(*a, *b)
    }

    pub fn has_node(&self, v: Vertex) -> bool {
        self.lookup.contains_key(&v)
    }

    pub fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.find_edge(u, v).is_some()
    }

    pub fn node(&self, v: Vertex) -> Option<&NodeAttributes> {
        self.lookup.get(&v).map(|idx| &self.graph[*idx])
    }

    pub fn node_mut(&mut self, v: Vertex) -> Option<&mut NodeAttributes> {
        let idx = *self.lookup.get(&v)?;
        self.graph.node_weight_mut(idx)
    }

    pub fn edge(&self, u: Vertex, v: Vertex) -> Option<&E> {
        self.find_edge(u, v).and_then(|e| self.graph.edge_weight(e))
    }

    pub fn edge_mut(&mut self, u: Vertex, v: Vertex) -> Option<&mut E> {
        let e = self.find_edge(u, v)?;
        self.graph.edge_weight_mut(e)
    }

    /// Vertices in the order they were added.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.vertices.iter().copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (Vertex, &NodeAttributes)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(idx, v)| (*v, &self.graph[NodeIndex::new(idx)]))
    }

    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex, &E)> {
        self.graph.edge_references().map(|e| {
            (
                self.vertices[e.source().index()],
                self.vertices[e.target().index()],
                e.weight(),
            )
        })
    }

    pub fn number_of_nodes(&self) -> usize {
        self.graph.node_count()
    }

    pub fn number_of_edges(&self) -> usize {
        self.graph.edge_count()
    }

    /// Successors on directed graphs, all adjacent vertices otherwise.
    pub fn neighbors(&self, v: Vertex) -> Vec<Vertex> {
        match self.lookup.get(&v) {
            Some(idx) => self
                .graph
                .neighbors(*idx)
                .map(|it| self.vertices[it.index()])
                .collect(),
            None => vec![],
        }
    }

    /// Number of edge endpoints at `v`; a self loop counts twice.
    pub fn degree(&self, v: Vertex) -> usize {
        let Some(idx) = self.lookup.get(&v) else {
            return 0;
        };
        if Ty::is_directed() {
            self.graph.edges_directed(*idx, petgraph::Outgoing).count()
                + self.graph.edges_directed(*idx, petgraph::Incoming).count()
        } else {
            self.graph
                .edges(*idx)
                .map(|e| if e.source() == e.target() { 2 } else { 1 })
                .sum()
        }
    }

    pub fn inner(&self) -> &Graph<NodeAttributes, E, Ty> {
        &self.graph
    }

    pub fn vertex_of(&self, idx: NodeIndex) -> Vertex {
        self.vertices[idx.index()]
    }

    pub fn index_of(&self, v: Vertex) -> Option<NodeIndex> {
        self.lookup.get(&v).copied()
    }
}

impl<E: Clone> AttributedGraph<Undirected, E> {
    /// Each edge becomes a pair of opposite arcs; a self loop stays a single arc.
    pub fn to_directed(&self) -> AttributedGraph<Directed, E> {
        let mut directed = AttributedGraph::new();
        for (v, attributes) in self.nodes() {
            directed.add_node(v, attributes.clone());
        }
        for (u, v, weight) in self.edges() {
            directed.add_multi_edge(u, v, weight.clone());
            if u != v {
                directed.add_multi_edge(v, u, weight.clone());
            }
        }
        directed
    }
}

impl<Ty: EdgeType> AttributedGraph<Ty, EdgeAttributes> {
    pub(crate) fn from_elements(elements: GraphElements) -> Self {
        debug_assert_eq!(elements.directed, Ty::is_directed());
        let mut graph = Self::new();
        graph.graph.reserve_nodes(elements.nodes.len());
        graph.graph.reserve_edges(elements.edges.len());
        for (v, attributes) in elements.nodes {
            graph.add_node(v, attributes);
        }
        for (u, v, attributes) in elements.edges {
            graph.add_multi_edge(u, v, attributes);
        }
        graph
    }
}

impl<Ty: EdgeType> CostGraph for AttributedGraph<Ty, EdgeAttributes> {
    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    fn number_of_nodes(&self) -> usize {
        self.graph.node_count()
    }

    fn number_of_edges(&self) -> usize {
        self.graph.edge_count()
    }

    fn vertex_list(&self) -> VertexList {
        self.vertices.clone()
    }

    fn edge_list(&self) -> EdgeList {
        self.edges().map(|(u, v, _)| (u, v)).collect()
    }

    fn has_node(&self, v: Vertex) -> bool {
        self.lookup.contains_key(&v)
    }

    fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.find_edge(u, v).is_some()
    }

    fn cost(&self, u: Vertex, v: Vertex) -> Option<Cost> {
        self.edge(u, v).map(|it| it.cost)
    }

    fn prize(&self, v: Vertex) -> Option<Prize> {
        self.node(v).and_then(|it| it.prize)
    }
}
