use std::fmt::{Display, Write as _};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use itertools::Itertools;

use crate::error::{Error, Result};
use crate::problem::distance::Point;
use crate::problem::fields::EdgeWeightFormat;
use crate::problem::weight_matrix::WeightMatrix;
use crate::problem::{EdgeData, NodeMap};
use crate::types::{Edge, Vertex};

const WEIGHTS_PER_LINE: usize = 16;

/// Header entries and data sections of a TSPLIB file, in the order
/// they are written.
#[derive(Debug, Default)]
pub(crate) struct TsplibDocument {
    entries: Vec<(String, String)>,
    sections: Vec<(&'static str, Vec<String>)>,
}

impl TsplibDocument {
    pub fn entry(&mut self, key: &str, value: impl Display) {
        self.entries.push((key.to_string(), value.to_string()));
    }

    pub fn optional_entry<T: Display>(&mut self, key: &str, value: Option<T>) {
        if let Some(value) = value {
            self.entry(key, value);
        }
    }

    fn section(&mut self, key: &'static str, lines: Vec<String>) {
        self.sections.push((key, lines));
    }

    pub fn points_section(&mut self, key: &'static str, points: &NodeMap<Point>) {
        if points.is_empty() {
            return;
        }
        let lines = points
            .iter()
            .map(|(node, p)| match p.z {
                Some(z) => format!("{} {} {} {}", node, p.x, p.y, z),
                None => format!("{} {} {}", node, p.x, p.y),
            })
            .collect();
        self.section(key, lines);
    }

    pub fn node_values_section(&mut self, key: &'static str, values: &NodeMap<i64>) {
        if values.is_empty() {
            return;
        }
        let lines = values
            .iter()
            .map(|(node, value)| format!("{} {}", node, value))
            .collect();
        self.section(key, lines);
    }

    pub fn edges_section(&mut self, key: &'static str, edges: &[Edge]) {
        if edges.is_empty() {
            return;
        }
        let lines = edges
            .iter()
            .map(|(u, v)| format!("{} {}", u, v))
            .chain(std::iter::once("-1".to_string()))
            .collect();
        self.section(key, lines);
    }

    pub fn edge_data_section(&mut self, edge_data: &EdgeData) {
        match edge_data {
            EdgeData::EdgeList(edges) => self.edges_section("EDGE_DATA_SECTION", edges),
            EdgeData::AdjList(adjacency) => {
                let lines = adjacency
                    .iter()
                    .map(|(node, neighbors)| {
                        format!("{} {} -1", node, neighbors.iter().join(" "))
                    })
                    .chain(std::iter::once("-1".to_string()))
                    .collect();
                self.section("EDGE_DATA_SECTION", lines);
            }
        }
    }

    pub fn tours_section(&mut self, tours: &[Vec<Vertex>]) {
        if tours.is_empty() {
            return;
        }
        let lines = tours
            .iter()
            .map(|tour| format!("{} -1", tour.iter().join(" ")))
            .chain(std::iter::once("-1".to_string()))
            .collect();
        self.section("TOUR_SECTION", lines);
    }

    pub fn weights_section(&mut self, matrix: &WeightMatrix, format: EdgeWeightFormat) {
        // only FUNCTION has no values, and a parsed matrix never has that format
        let Ok(values) = matrix.to_explicit(format) else {
            return;
        };
        let lines = values
            .chunks(WEIGHTS_PER_LINE)
            .map(|chunk| chunk.iter().join(" "))
            .collect();
        self.section("EDGE_WEIGHT_SECTION", lines);
    }

    pub fn depots_section(&mut self, depots: &[Vertex]) {
        if depots.is_empty() {
            return;
        }
        let lines = depots
            .iter()
            .map(|it| format!(" {}", it))
            .chain(std::iter::once(" -1".to_string()))
            .collect();
        self.section("DEPOT_SECTION", lines);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut impl std::fmt::Write) -> std::fmt::Result {
        for (key, value) in self.entries.iter() {
            writeln!(out, "{} : {}", key, value)?;
        }
        for (key, lines) in self.sections.iter() {
            writeln!(out, "{}", key)?;
            for line in lines {
                writeln!(out, "{}", line)?;
            }
        }
        writeln!(out, "EOF")
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let f = File::create(path).map_err(|err| Error::io(path, err))?;
        let mut file = BufWriter::new(&f);
        file.write_all(self.render().as_bytes())
            .and_then(|_| file.flush())
            .map_err(|err| Error::io(path, err))?;
        log::debug!("wrote {}", path.display());
        Ok(())
    }
}
