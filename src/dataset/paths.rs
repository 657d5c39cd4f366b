use std::path::{Path, PathBuf};

use crate::types::{Alpha, Generation, GraphName};

/// `<root>/instances/<generation>/<name>-<generation>-<alpha>.oplib`, as laid
/// out in a clone of the OPLib repository. The path is not checked.
pub fn build_path_to_oplib_instance(
    oplib_root: impl AsRef<Path>,
    generation: Generation,
    name: GraphName,
    alpha: Alpha,
) -> PathBuf {
    let filename = format!("{}-{}-{}.oplib", name, generation, alpha);
    oplib_root
        .as_ref()
        .join("instances")
        .join(generation.as_str())
        .join(filename)
}

/// `<root>/<name>.tsp`. The path is not checked.
pub fn build_path_to_tsplib_instance(tsplib_root: impl AsRef<Path>, name: GraphName) -> PathBuf {
    tsplib_root.as_ref().join(format!("{}.tsp", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oplib_layout() {
        let path = build_path_to_oplib_instance(
            "/data/oplib",
            Generation::Gen2,
            GraphName::St70,
            Alpha::Fifty,
        );
        assert_eq!(path, Path::new("/data/oplib/instances/gen2/st70-gen2-50.oplib"));

        let path = build_path_to_oplib_instance(
            Path::new("relative"),
            Generation::Gen1,
            GraphName::KroA100,
            Alpha::default(),
        );
        assert_eq!(path, Path::new("relative/instances/gen1/kroA100-gen1-50.oplib"));
    }

    #[test]
    fn tsplib_layout() {
        let path = build_path_to_tsplib_instance("/data/tsplib95", GraphName::Eil76);
        assert_eq!(path, Path::new("/data/tsplib95/eil76.tsp"));
    }

    #[test]
    fn every_instance_has_its_own_path() {
        let paths: ahash::AHashSet<PathBuf> = GraphName::all()
            .flat_map(|name| {
                Generation::all()
                    .map(move |gen| build_path_to_oplib_instance("root", gen, name, Alpha::Fifty))
            })
            .collect();
        assert_eq!(paths.len(), GraphName::all().count() * 4);
    }
}
