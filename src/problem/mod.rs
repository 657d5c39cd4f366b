use ahash::AHashMap;

use crate::error::ParseError;
use crate::types::{Edge, Vertex};

pub mod distance;
pub mod fields;
mod profits;
mod standard;
pub mod weight_matrix;

pub use profits::ProfitsProblem;
pub use standard::StandardProblem;

/// Per-node data of a section, in the order the file lists the nodes.
#[derive(Clone, Debug)]
pub struct NodeMap<T> {
    entries: Vec<(Vertex, T)>,
    index: AHashMap<Vertex, usize>,
}

impl<T> NodeMap<T> {
    pub fn new() -> Self {
        Self {
            entries: vec![],
            index: AHashMap::new(),
        }
    }

    /// Inserts or replaces the value of `node`; a new node goes to the end.
    pub fn insert(&mut self, node: Vertex, value: T) -> Option<T> {
        match self.index.get(&node) {
            Some(&idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.index.insert(node, self.entries.len());
                self.entries.push((node, value));
                None
            }
        }
    }

    pub(crate) fn insert_unique(
        &mut self,
        line: usize,
        node: Vertex,
        value: T,
    ) -> Result<(), ParseError> {
        if self.contains(node) {
            return Err(ParseError::at_line(line, format!("node {} listed twice", node)));
        }
        self.insert(node, value);
        Ok(())
    }

    pub fn get(&self, node: Vertex) -> Option<&T> {
        self.index.get(&node).map(|idx| &self.entries[*idx].1)
    }

    pub fn contains(&self, node: Vertex) -> bool {
        self.index.contains_key(&node)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vertex, &T)> {
        self.entries.iter().map(|(node, value)| (*node, value))
    }

    pub fn keys(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.entries.iter().map(|(node, _)| *node)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, value)| value)
    }
}

impl<T> Default for NodeMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for NodeMap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T> FromIterator<(Vertex, T)> for NodeMap<T> {
    fn from_iter<I: IntoIterator<Item = (Vertex, T)>>(iter: I) -> Self {
        let mut map = NodeMap::new();
        for (node, value) in iter {
            map.insert(node, value);
        }
        map
    }
}

/// Content of an `EDGE_DATA_SECTION`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EdgeData {
    EdgeList(Vec<Edge>),
    AdjList(Vec<(Vertex, Vec<Vertex>)>),
}

impl EdgeData {
    pub fn edges(&self) -> Vec<Edge> {
        match self {
            EdgeData::EdgeList(edges) => edges.clone(),
            EdgeData::AdjList(adjacency) => adjacency
                .iter()
                .flat_map(|(u, neighbors)| neighbors.iter().map(move |v| (*u, *v)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_map_keeps_insertion_order() {
        let mut map: NodeMap<i64> = [(3, 30), (1, 10), (2, 20)].into_iter().collect();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(map.insert(1, 11), Some(10));
        assert_eq!(map.get(1), Some(&11));
        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![30, 11, 20]);
        assert!(map.insert_unique(7, 2, 0).is_err());
        assert!(map.get(4).is_none());
    }

    #[test]
    fn adjacency_lists_expand_to_edges() {
        let data = EdgeData::AdjList(vec![(1, vec![2, 3]), (2, vec![3])]);
        assert_eq!(data.edges(), vec![(1, 2), (1, 3), (2, 3)]);
    }
}
