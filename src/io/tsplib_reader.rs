use std::io::{BufRead, ErrorKind};
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, ParseError};
use crate::problem::distance::Point;
use crate::problem::fields::EdgeDataFormat;
use crate::problem::{EdgeData, NodeMap};
use crate::types::{Cost, Edge, Vertex};

/**
Reader for the TSPLIB text format as documented in
http://comopt.ifi.uni-heidelberg.de/software/TSPLIB95/tsp95.pdf

----------

The file has a header of keywords followed by data sections:

```text
NAME : burma14
TYPE : TSP
DIMENSION : 14
EDGE_WEIGHT_TYPE : GEO
NODE_COORD_SECTION
   1  16.47       96.10
   2  16.47       94.44
   ...
EOF
```

Header lines are `<KEYWORD> : <value>`. A keyword ending in
`_SECTION` opens a data section, which lasts until the next keyword. The
optional `EOF` ends the file. OPLib adds the keywords `COST_LIMIT` and
`TSPSOL`, and the section `NODE_SCORE_SECTION` with one `<node> <score>` pair
per line.

The reader only splits the file into keywords and sections; interpreting the
values is left to the problem types.
 */
#[derive(Debug, Default)]
pub(crate) struct RawProblem {
    pub entries: Vec<RawEntry>,
    pub sections: Vec<RawSection>,
    open_section: Option<RawSection>,
    finished: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct RawEntry {
    pub line: usize,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone)]
pub(crate) struct RawSection {
    pub line: usize,
    pub key: String,
    /// (line number, trimmed content) of every non-empty line
    pub data: Vec<(usize, String)>,
}

impl RawProblem {
    pub fn read(path: &Path, reader: impl BufRead) -> Result<Self, Error> {
        let mut raw = RawProblem::default();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|err| match err.kind() {
                ErrorKind::InvalidData => {
                    Error::Parse(ParseError::at_line(idx + 1, "line is not valid UTF-8"))
                }
                _ => Error::io(path, err),
            })?;
            raw.push_line(idx + 1, &line)?;
            if raw.finished {
                break;
            }
        }
        raw.close_section();
        Ok(raw)
    }

    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut raw = RawProblem::default();
        for (idx, line) in text.lines().enumerate() {
            raw.push_line(idx + 1, line)?;
            if raw.finished {
                break;
            }
        }
        raw.close_section();
        Ok(raw)
    }

    fn push_line(&mut self, line_no: usize, line: &str) -> Result<(), ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        if !line.starts_with(|c: char| c.is_ascii_uppercase()) {
            return match self.open_section.as_mut() {
                Some(section) => {
                    section.data.push((line_no, line.to_string()));
                    Ok(())
                }
                None => Err(ParseError::at_line(line_no, "data outside of a section")),
            };
        }

        let (key, value) = split_keyword(line);
        self.close_section();
        if key == "EOF" {
            self.finished = true;
        } else if key.ends_with("_SECTION") {
            if self.sections.iter().any(|it| it.key == key) {
                return Err(ParseError::at_line(line_no, format!("duplicate {}", key)));
            }
            let mut section = RawSection {
                line: line_no,
                key: key.to_string(),
                data: vec![],
            };
            if !value.is_empty() {
                section.data.push((line_no, value.to_string()));
            }
            self.open_section = Some(section);
        } else {
            if self.entries.iter().any(|it| it.key == key) {
                return Err(ParseError::at_line(line_no, format!("duplicate {}", key)));
            }
            self.entries.push(RawEntry {
                line: line_no,
                key: key.to_string(),
                value: value.to_string(),
            });
        }
        Ok(())
    }

    fn close_section(&mut self) {
        if let Some(section) = self.open_section.take() {
            log::debug!(
                "{} with {} lines at line {}",
                section.key,
                section.data.len(),
                section.line
            );
            self.sections.push(section);
        }
    }

    pub fn take_entry(&mut self, key: &str) -> Option<RawEntry> {
        let idx = self.entries.iter().position(|it| it.key == key)?;
        Some(self.entries.remove(idx))
    }

    pub fn take_section(&mut self, key: &str) -> Option<RawSection> {
        let idx = self.sections.iter().position(|it| it.key == key)?;
        Some(self.sections.remove(idx))
    }
}

fn split_keyword(line: &str) -> (&str, &str) {
    match line.split_once(':') {
        Some((key, value)) => (key.trim(), value.trim()),
        None => match line.split_once(char::is_whitespace) {
            Some((key, value)) => (key, value.trim()),
            None => (line, ""),
        },
    }
}

pub(crate) fn parse_value<T: FromStr>(line: usize, token: &str, what: &str) -> Result<T, ParseError> {
    token
        .parse::<T>()
        .map_err(|_| ParseError::at_line(line, format!("invalid {} {:?}", what, token)))
}

impl RawEntry {
    pub fn parse<T: FromStr>(&self) -> Result<T, ParseError> {
        parse_value(self.line, &self.value, &self.key)
    }

    /// For keyword-valued fields, whose own error carries no line.
    pub fn parse_keyword<T: FromStr<Err = ParseError>>(&self) -> Result<T, ParseError> {
        self.value
            .parse::<T>()
            .map_err(|err| ParseError::at_line(self.line, err.message))
    }
}

impl RawSection {
    fn tokens(&self) -> impl Iterator<Item = (usize, &str)> {
        self.data
            .iter()
            .flat_map(|(line, content)| content.split_whitespace().map(move |it| (*line, it)))
    }

    /// Lines with a node id followed by a fixed number of values.
    fn node_rows<T: FromStr>(
        &self,
        min_values: usize,
        max_values: usize,
    ) -> Result<Vec<(usize, Vertex, Vec<T>)>, ParseError> {
        let mut rows = vec![];
        for (line, content) in self.data.iter() {
            let mut split = content.split_whitespace();
            let node = split.next().unwrap_or_default();
            if node == "-1" {
                break;
            }
            let node = parse_value::<Vertex>(*line, node, "node")?;
            let values = split
                .map(|it| parse_value::<T>(*line, it, &self.key))
                .collect::<Result<Vec<T>, _>>()?;
            if values.len() < min_values || values.len() > max_values {
                return Err(ParseError::at_line(
                    *line,
                    format!("{} expects {} values per node", self.key, max_values),
                ));
            }
            rows.push((*line, node, values));
        }
        Ok(rows)
    }

    /// `NODE_COORD_SECTION` / `DISPLAY_DATA_SECTION`: `<node> <x> <y> [<z>]`.
    pub fn points(&self) -> Result<NodeMap<Point>, ParseError> {
        let mut points = NodeMap::new();
        for (line, node, values) in self.node_rows::<f64>(2, 3)? {
            let point = match values[..] {
                [x, y, z] => Point::with_z(x, y, z),
                [x, y] => Point::new(x, y),
                _ => unreachable!("row length is checked"),
            };
            points.insert_unique(line, node, point)?;
        }
        Ok(points)
    }

    /// `DEMAND_SECTION` / `NODE_SCORE_SECTION`: `<node> <value>`.
    pub fn node_values(&self) -> Result<NodeMap<i64>, ParseError> {
        let mut values = NodeMap::new();
        for (line, node, row) in self.node_rows::<i64>(1, 1)? {
            values.insert_unique(line, node, row[0])?;
        }
        Ok(values)
    }

    /// `DEPOT_SECTION`: node ids terminated by `-1`.
    pub fn node_list(&self) -> Result<Vec<Vertex>, ParseError> {
        let mut nodes = vec![];
        for (line, token) in self.tokens() {
            let node = parse_value::<Vertex>(line, token, "node")?;
            if node == -1 {
                break;
            }
            nodes.push(node);
        }
        Ok(nodes)
    }

    /// `FIXED_EDGES_SECTION` and `EDGE_DATA_SECTION` in `EDGE_LIST` format.
    pub fn edge_list(&self) -> Result<Vec<Edge>, ParseError> {
        let mut edges = vec![];
        for (line, content) in self.data.iter() {
            let tokens = content
                .split_whitespace()
                .map(|it| parse_value::<Vertex>(*line, it, "node"))
                .collect::<Result<Vec<_>, _>>()?;
            match tokens[..] {
                [-1] => break,
                [u, v] => edges.push((u, v)),
                _ => {
                    return Err(ParseError::at_line(
                        *line,
                        format!("{} expects two nodes per line", self.key),
                    ))
                }
            }
        }
        Ok(edges)
    }

    /// `EDGE_DATA_SECTION` in `ADJ_LIST` format: `<node> <neighbors..> -1`.
    pub fn adjacency_list(&self) -> Result<Vec<(Vertex, Vec<Vertex>)>, ParseError> {
        let mut adjacency = vec![];
        for (line, content) in self.data.iter() {
            let tokens = content
                .split_whitespace()
                .map(|it| parse_value::<Vertex>(*line, it, "node"))
                .collect::<Result<Vec<_>, _>>()?;
            match tokens.split_first() {
                Some((-1, _)) => break,
                Some((node, [neighbors @ .., -1])) => adjacency.push((*node, neighbors.to_vec())),
                _ => {
                    return Err(ParseError::at_line(
                        *line,
                        "adjacency list must end with -1",
                    ))
                }
            }
        }
        Ok(adjacency)
    }

    pub fn edge_data(&self, format: Option<EdgeDataFormat>) -> Result<EdgeData, ParseError> {
        match format {
            Some(EdgeDataFormat::EdgeList) => Ok(EdgeData::EdgeList(self.edge_list()?)),
            Some(EdgeDataFormat::AdjList) => Ok(EdgeData::AdjList(self.adjacency_list()?)),
            None => Err(ParseError::at_line(
                self.line,
                "EDGE_DATA_SECTION without EDGE_DATA_FORMAT",
            )),
        }
    }

    /// `TOUR_SECTION`: tours terminated by `-1`, the section by another `-1`.
    pub fn tours(&self) -> Result<Vec<Vec<Vertex>>, ParseError> {
        let mut tours = vec![];
        let mut tour = vec![];
        for (line, token) in self.tokens() {
            let node = parse_value::<Vertex>(line, token, "node")?;
            if node == -1 {
                if tour.is_empty() {
                    break;
                }
                tours.push(std::mem::take(&mut tour));
            } else {
                tour.push(node);
            }
        }
        if !tour.is_empty() {
            tours.push(tour);
        }
        Ok(tours)
    }

    /// `EDGE_WEIGHT_SECTION`: whitespace separated integers, line breaks carry
    /// no meaning.
    pub fn weights(&self) -> Result<Vec<Cost>, ParseError> {
        self.tokens()
            .map(|(line, token)| parse_value::<Cost>(line, token, "weight"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "NAME : small
TYPE: TSP
COMMENT : three nodes: a triangle
DIMENSION : 3
EDGE_WEIGHT_TYPE : EUC_2D
NODE_COORD_SECTION
1 0 0
2 3 0

3 3 4
DEPOT_SECTION
 1
 -1
EOF
trailing garbage is never read
";

    #[test]
    fn splits_header_and_sections() {
        let raw = RawProblem::parse(SMALL).unwrap();
        let keys: Vec<&str> = raw.entries.iter().map(|it| it.key.as_str()).collect();
        assert_eq!(keys, vec!["NAME", "TYPE", "COMMENT", "DIMENSION", "EDGE_WEIGHT_TYPE"]);
        assert_eq!(raw.entries[2].value, "three nodes: a triangle");
        assert_eq!(raw.sections.len(), 2);

        let coords = raw.sections[0].points().unwrap();
        assert_eq!(coords.keys().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(coords.get(3), Some(&Point::new(3.0, 4.0)));
        assert_eq!(raw.sections[0].data[2].0, 10);
        assert_eq!(raw.sections[1].node_list().unwrap(), vec![1]);
    }

    #[test]
    fn data_outside_a_section_reports_its_line() {
        let err = RawProblem::parse("NAME : x\n1 2 3\n").unwrap_err();
        assert_eq!(err.line, Some(2));
    }

    #[test]
    fn duplicate_nodes_are_rejected() {
        let raw = RawProblem::parse("NODE_SCORE_SECTION\n1 10\n2 20\n1 30\n").unwrap();
        let err = raw.sections[0].node_values().unwrap_err();
        assert_eq!(err.line, Some(4));
    }

    #[test]
    fn tours_and_adjacency_lists_follow_their_terminators() {
        let raw = RawProblem::parse(
            "TOUR_SECTION\n1 2 3\n4 -1\n3 2\n1 4 -1\n-1\nEDGE_DATA_SECTION\n1 2 3 -1\n2 3 -1\n-1\n",
        )
        .unwrap();
        assert_eq!(
            raw.sections[0].tours().unwrap(),
            vec![vec![1, 2, 3, 4], vec![3, 2, 1, 4]]
        );
        assert_eq!(
            raw.sections[1].adjacency_list().unwrap(),
            vec![(1, vec![2, 3]), (2, vec![3])]
        );
    }

    #[test]
    fn invalid_utf8_is_a_parse_error() {
        let bytes = b"NAME : bytes\nCOMMENT : \xff\xfe\nEOF\n".to_vec();
        match RawProblem::read(Path::new("bytes.tsp"), std::io::Cursor::new(bytes)) {
            Err(Error::Parse(err)) => assert_eq!(err.line, Some(2)),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn malformed_values_report_their_line() {
        let raw = RawProblem::parse("EDGE_WEIGHT_SECTION\n1 2\n3 x\n").unwrap();
        let err = raw.sections[0].weights().unwrap_err();
        assert_eq!(err.line, Some(3));
        assert!(err.message.contains("\"x\""));
    }
}
