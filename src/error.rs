use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use crate::types::Vertex;

/// Every failure of the library, labelled by the stage that produced it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid {kind} identifier: {value:?}")]
    InvalidIdentifier { kind: &'static str, value: String },

    #[error("instance file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn invalid_identifier(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            kind,
            value: value.into(),
        }
    }

    /// A missing file is [`Error::NotFound`], anything else [`Error::Io`].
    pub(crate) fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path: path.into() },
            _ => Self::io(path, source),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Malformed TSPLIB content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct ParseError {
    /// 1-based line number, if the error can be attributed to a line
    pub line: Option<usize>,
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            line: None,
            message: message.into(),
        }
    }

    pub fn at_line(line: usize, message: impl Into<String>) -> Self {
        Self {
            line: Some(line),
            message: message.into(),
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "parse error at line {}: {}", line, self.message),
            None => write!(f, "parse error: {}", self.message),
        }
    }
}

/// A parsed problem (or graph) lacks what a conversion needs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("problem has no {0}")]
    MissingSection(&'static str),

    #[error("vertex {vertex} has no prize")]
    MissingPrize { vertex: Vertex },

    #[error("edge ({u}, {v}) or ({v}, {u}) does not exist")]
    MissingEdge { u: Vertex, v: Vertex },

    #[error("edge weight type {0} is not supported")]
    UnsupportedEdgeWeightType(String),

    #[error("problem declares neither EDGE_WEIGHT_TYPE nor explicit weights")]
    MissingEdgeWeightType,

    #[error("problem {0} is directed, use a directed graph")]
    DirectedInstance(String),

    #[error("more than one self loop on vertex {vertex}")]
    UnexpectedSelfLoop { vertex: Vertex },

    #[error("probability {0} is outside [0, 1]")]
    InvalidProbability(f64),

    #[error("maximum distance from the root vertex is zero")]
    DegenerateCoordinates,
}

pub type Result<T> = std::result::Result<T, Error>;
