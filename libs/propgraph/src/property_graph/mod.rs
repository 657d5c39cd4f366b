use crate::utils::NumIndexVec;
use crate::{Edge, EdgeId, Vertex};

mod property_map;

pub use property_map::{EdgePropertyMap, VertexPropertyMap};

#[cfg(test)]
mod tests;

/// Graph topology in compressed sparse row form.
///
/// Vertices are `0..num_vertices` and every edge keeps the id it was added
/// with. Attributes are not stored on the graph; they live in
/// [`VertexPropertyMap`] and [`EdgePropertyMap`] indexed by those ids.
///
/// For undirected graphs each edge is listed in the incidence row of both
/// endpoints (a self loop only once).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyGraph {
    directed: bool,
    num_vertices: Vertex,
    edges: NumIndexVec<Edge>,
    row_ptr: NumIndexVec<usize>,
    incidence: NumIndexVec<EdgeId>,
}

impl PropertyGraph {
    pub fn builder(directed: bool) -> PropertyGraphBuilder {
        PropertyGraphBuilder::new(directed)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices as usize
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vertex> {
        0..self.num_vertices
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    pub fn iter_edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges.iter().enumerate()
    }

    /// Ids of the edges leaving `v` (all incident edges if undirected), ascending.
    pub fn out_edges(&self, v: Vertex) -> impl Iterator<Item = EdgeId> + '_ {
        self.incidence[self.row_ptr[v]..self.row_ptr[v + 1]]
            .iter()
            .copied()
    }

    pub fn out_degree(&self, v: Vertex) -> usize {
        self.row_ptr[v + 1] - self.row_ptr[v]
    }

    pub fn neighbors(&self, v: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.out_edges(v).map(move |e| self.edges[e].opposite(v))
    }

    pub fn find_edge(&self, from: Vertex, to: Vertex) -> Option<EdgeId> {
        if from >= self.num_vertices || to >= self.num_vertices {
            return None;
        }
        self.out_edges(from)
            .find(|e| self.edges[*e].opposite(from) == to)
    }

    pub fn edge_exists(&self, from: Vertex, to: Vertex) -> bool {
        self.find_edge(from, to).is_some()
    }
}

pub struct PropertyGraphBuilder {
    directed: bool,
    num_vertices: Vertex,
    edges: Vec<Edge>,
}

impl PropertyGraphBuilder {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            num_vertices: 0,
            edges: vec![],
        }
    }
    pub fn set_num_vertices(mut self, num: Vertex) -> Self {
        self.num_vertices = num;
        self
    }
    /// Edge ids are assigned in the order edges are added, starting at 0.
    pub fn add_edges(mut self, edges: impl IntoIterator<Item = Edge>) -> Self {
        for edge in edges {
            self.edges.push(edge);
        }
        self
    }

    pub fn build(self) -> PropertyGraph {
        let n = self.num_vertices;
        let mut degree = num_index_vec![0usize; n];
        for edge in self.edges.iter() {
            assert!(
                edge.source < n && edge.target < n,
                "edge ({}, {}) exceeds {} vertices",
                edge.source,
                edge.target,
                n
            );
            degree[edge.source] += 1;
            if !self.directed && !edge.is_self_loop() {
                degree[edge.target] += 1;
            }
        }

        let mut row_ptr = num_index_vec![0usize; n + 1];
        for v in 0..n {
            row_ptr[v + 1] = row_ptr[v] + degree[v];
        }

        let mut cursor: NumIndexVec<usize> = row_ptr.iter().copied().collect();
        let mut incidence = num_index_vec![0 as EdgeId; row_ptr[n]];
        for (id, edge) in self.edges.iter().enumerate() {
            incidence[cursor[edge.source]] = id;
            cursor[edge.source] += 1;
            if !self.directed && !edge.is_self_loop() {
                incidence[cursor[edge.target]] = id;
                cursor[edge.target] += 1;
            }
        }

        PropertyGraph {
            directed: self.directed,
            num_vertices: n,
            edges: NumIndexVec::from_vec(self.edges),
            row_ptr,
            incidence,
        }
    }
}
