use std::path::Path;

use crate::error::Result;
use crate::problem::{ProfitsProblem, StandardProblem};
use crate::types::{Alpha, Generation, GraphName};

mod config;
mod paths;

pub use config::{DatasetConfig, OPLIB_ROOT_VAR, TSPLIB_ROOT_VAR};
pub use paths::{build_path_to_oplib_instance, build_path_to_tsplib_instance};

pub fn load_oplib_instance(
    oplib_root: impl AsRef<Path>,
    generation: Generation,
    name: GraphName,
    alpha: Alpha,
) -> Result<ProfitsProblem> {
    ProfitsProblem::load(build_path_to_oplib_instance(
        oplib_root, generation, name, alpha,
    ))
}

pub fn load_tsplib_instance(tsplib_root: impl AsRef<Path>, name: GraphName) -> Result<StandardProblem> {
    StandardProblem::load(build_path_to_tsplib_instance(tsplib_root, name))
}

impl DatasetConfig {
    pub fn load_oplib_instance(
        &self,
        generation: Generation,
        name: GraphName,
        alpha: Alpha,
    ) -> Result<ProfitsProblem> {
        load_oplib_instance(self.oplib_root()?, generation, name, alpha)
    }

    pub fn load_tsplib_instance(&self, name: GraphName) -> Result<StandardProblem> {
        load_tsplib_instance(self.tsplib_root()?, name)
    }
}

#[cfg(test)]
mod tests;
