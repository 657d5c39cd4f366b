#[macro_use]
mod utils;
pub mod property_graph;

pub use property_graph::{EdgePropertyMap, PropertyGraph, PropertyGraphBuilder, VertexPropertyMap};

pub type Vertex = u32;
pub type EdgeId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: Vertex,
    pub target: Vertex,
}

impl Edge {
    pub fn new(source: Vertex, target: Vertex) -> Self {
        Self { source, target }
    }

    /// The endpoint that is not `v` (or `v` itself for a self loop).
    pub fn opposite(&self, v: Vertex) -> Vertex {
        if self.source == v {
            self.target
        } else {
            self.source
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
