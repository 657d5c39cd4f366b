//! Loader for the OPLib and TSPLIB95 benchmark instances of the travelling
//! salesman problem with profits, and adapters from instances to graphs.
//!
//! ```no_run
//! use tspwplib::{load_oplib_instance, Alpha, Generation, GraphName};
//!
//! # fn main() -> tspwplib::Result<()> {
//! let problem = load_oplib_instance("/data/oplib", Generation::Gen3, GraphName::St70, Alpha::Fifty)?;
//! let graph = problem.get_graph(true)?;
//! assert_eq!(graph.number_of_nodes(), 70);
//! # Ok(())
//! # }
//! ```

pub mod converter;
pub mod dataset;
pub mod error;
pub mod graph;
mod io;
pub mod metric;
pub mod problem;
pub mod sparsity;
pub mod types;
pub mod utils;
pub mod weights;

pub use dataset::{
    build_path_to_oplib_instance, build_path_to_tsplib_instance, load_oplib_instance,
    load_tsplib_instance, DatasetConfig,
};
pub use error::{ConversionError, Error, ParseError, Result};
pub use graph::{AttributedGraph, CostGraph, DiAttributedGraph, EdgeAttributes, NodeAttributes, PropertyTspGraph};
pub use problem::{ProfitsProblem, StandardProblem};
pub use types::{Alpha, Cost, Edge, EdgeList, Generation, GraphName, Prize, Vertex, VertexList};
