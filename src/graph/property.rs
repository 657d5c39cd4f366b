use ahash::AHashMap;
use propgraph::{Edge, EdgeId, EdgePropertyMap, PropertyGraph, VertexPropertyMap};

use crate::graph::{CostGraph, GraphElements};
use crate::types::{Cost, EdgeList, Prize, Vertex, VertexList};

/// Compact representation of an instance: topology in a [`PropertyGraph`]
/// over `0..n`, attributes in separate property maps.
///
/// Property graph vertex `i` stands for the `i`-th instance vertex in node
/// order; `vertex_id` maps back.
#[derive(Clone, Debug)]
pub struct PropertyTspGraph {
    graph: PropertyGraph,
    vertex_id: VertexPropertyMap<Vertex>,
    lookup: AHashMap<Vertex, propgraph::Vertex>,
    prize: VertexPropertyMap<Option<Prize>>,
    cost: EdgePropertyMap<Cost>,
    is_fixed: EdgePropertyMap<bool>,
}

impl PropertyTspGraph {
    pub(crate) fn from_elements(elements: GraphElements) -> Self {
        let lookup: AHashMap<Vertex, propgraph::Vertex> = elements
            .nodes
            .iter()
            .enumerate()
            .map(|(idx, (v, _))| (*v, idx as propgraph::Vertex))
            .collect();

        let graph = PropertyGraph::builder(elements.directed)
            .set_num_vertices(elements.nodes.len() as propgraph::Vertex)
            .add_edges(
                elements
                    .edges
                    .iter()
                    .map(|(u, v, _)| Edge::new(lookup[u], lookup[v])),
            )
            .build();

        let mut vertex_id = VertexPropertyMap::with_default(&graph, 0);
        let mut prize = VertexPropertyMap::with_default(&graph, None);
        for (idx, (v, attributes)) in elements.nodes.iter().enumerate() {
            vertex_id[idx as propgraph::Vertex] = *v;
            prize[idx as propgraph::Vertex] = attributes.prize;
        }

        let mut cost = EdgePropertyMap::with_default(&graph, 0);
        let mut is_fixed = EdgePropertyMap::with_default(&graph, false);
        for (id, (_, _, attributes)) in elements.edges.iter().enumerate() {
            cost[id] = attributes.cost;
            is_fixed[id] = attributes.is_fixed;
        }

        Self {
            graph,
            vertex_id,
            lookup,
            prize,
            cost,
            is_fixed,
        }
    }

    pub fn graph(&self) -> &PropertyGraph {
        &self.graph
    }

    pub fn vertex_id(&self) -> &VertexPropertyMap<Vertex> {
        &self.vertex_id
    }

    pub fn prize_map(&self) -> &VertexPropertyMap<Option<Prize>> {
        &self.prize
    }

    pub fn cost_map(&self) -> &EdgePropertyMap<Cost> {
        &self.cost
    }

    pub fn is_fixed_map(&self) -> &EdgePropertyMap<bool> {
        &self.is_fixed
    }

    /// Property graph vertex of an instance vertex.
    pub fn index_of(&self, v: Vertex) -> Option<propgraph::Vertex> {
        self.lookup.get(&v).copied()
    }

    pub fn find_edge(&self, u: Vertex, v: Vertex) -> Option<EdgeId> {
        self.graph.find_edge(self.index_of(u)?, self.index_of(v)?)
    }
}

impl CostGraph for PropertyTspGraph {
    fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }

    fn number_of_nodes(&self) -> usize {
        self.graph.num_vertices()
    }

    fn number_of_edges(&self) -> usize {
        self.graph.num_edges()
    }

    fn vertex_list(&self) -> VertexList {
        self.vertex_id.iter().copied().collect()
    }

    fn edge_list(&self) -> EdgeList {
        self.graph
            .iter_edges()
            .map(|(_, e)| (self.vertex_id[e.source], self.vertex_id[e.target]))
            .collect()
    }

    fn has_node(&self, v: Vertex) -> bool {
        self.lookup.contains_key(&v)
    }

    fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.find_edge(u, v).is_some()
    }

    fn cost(&self, u: Vertex, v: Vertex) -> Option<Cost> {
        self.find_edge(u, v).map(|e| self.cost[e])
    }

    fn prize(&self, v: Vertex) -> Option<Prize> {
        self.index_of(v).and_then(|idx| self.prize[idx])
    }
}
