use std::ops::{Index, IndexMut};

use crate::utils::NumIndexVec;
use crate::{EdgeId, PropertyGraph, Vertex};

macro_rules! define_property_map {
    (name: $id:ident, key: $key:ty, size: $size:ident) => {
        #[derive(Clone, Debug, PartialEq)]
        pub struct $id<T> {
            data: NumIndexVec<T>,
        }

        impl<T: Clone> $id<T> {
            pub fn with_default(graph: &PropertyGraph, default: T) -> Self {
                Self {
                    data: NumIndexVec::with_default(graph.$size(), default),
                }
            }
        }

        impl<T> $id<T> {
            /// `None` if `values` does not hold exactly one entry per key of `graph`.
            pub fn from_vec(graph: &PropertyGraph, values: Vec<T>) -> Option<Self> {
                if values.len() != graph.$size() {
                    return None;
                }
                Some(Self {
                    data: NumIndexVec::from_vec(values),
                })
            }

            pub fn get(&self, key: $key) -> Option<&T> {
                self.data.get(key as usize)
            }

            pub fn len(&self) -> usize {
                self.data.len()
            }

            pub fn is_empty(&self) -> bool {
                self.data.len() == 0
            }

            pub fn iter(&self) -> impl Iterator<Item = &T> {
                self.data.iter()
            }

            pub fn into_vec(self) -> Vec<T> {
                self.data.into_vec()
            }
        }

        impl<T> Index<$key> for $id<T> {
            type Output = T;

            fn index(&self, key: $key) -> &Self::Output {
                &self.data[key]
            }
        }

        impl<T> IndexMut<$key> for $id<T> {
            fn index_mut(&mut self, key: $key) -> &mut Self::Output {
                &mut self.data[key]
            }
        }
    };
}

define_property_map!(name: VertexPropertyMap, key: Vertex, size: num_vertices);
define_property_map!(name: EdgePropertyMap, key: EdgeId, size: num_edges);
