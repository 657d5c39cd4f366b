use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ParseError;

/// Keyword-valued header fields. Each variant maps to exactly one
/// spelling in the file.
macro_rules! keyword_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $keyword:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $keyword,)+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($keyword => Ok($name::$variant),)+
                    _ => Err(ParseError::new(format!(
                        "unknown {} {:?}",
                        stringify!($name),
                        s
                    ))),
                }
            }
        }
    };
}

keyword_enum!(
    /// How edge weights are obtained.
    EdgeWeightType {
        Explicit => "EXPLICIT",
        Euc2d => "EUC_2D",
        Euc3d => "EUC_3D",
        Max2d => "MAX_2D",
        Max3d => "MAX_3D",
        Man2d => "MAN_2D",
        Man3d => "MAN_3D",
        Ceil2d => "CEIL_2D",
        Geo => "GEO",
        Att => "ATT",
        Xray1 => "XRAY1",
        Xray2 => "XRAY2",
        Special => "SPECIAL",
    }
);

keyword_enum!(
    /// Layout of the values in an `EDGE_WEIGHT_SECTION`.
    EdgeWeightFormat {
        Function => "FUNCTION",
        FullMatrix => "FULL_MATRIX",
        UpperRow => "UPPER_ROW",
        LowerRow => "LOWER_ROW",
        UpperDiagRow => "UPPER_DIAG_ROW",
        LowerDiagRow => "LOWER_DIAG_ROW",
        UpperCol => "UPPER_COL",
        LowerCol => "LOWER_COL",
        UpperDiagCol => "UPPER_DIAG_COL",
        LowerDiagCol => "LOWER_DIAG_COL",
    }
);

keyword_enum!(
    EdgeDataFormat {
        EdgeList => "EDGE_LIST",
        AdjList => "ADJ_LIST",
    }
);

keyword_enum!(
    NodeCoordType {
        TwoD => "TWOD_COORDS",
        ThreeD => "THREED_COORDS",
        NoCoords => "NO_COORDS",
    }
);

keyword_enum!(
    DisplayDataType {
        CoordDisplay => "COORD_DISPLAY",
        TwoDDisplay => "TWOD_DISPLAY",
        NoDisplay => "NO_DISPLAY",
    }
);

/// Value of the `TYPE` keyword. Types outside the TSPLIB list are kept
/// verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProblemType {
    #[default]
    Tsp,
    Atsp,
    Sop,
    Hcp,
    Cvrp,
    Tour,
    Op,
    Other(String),
}

impl ProblemType {
    pub fn as_str(&self) -> &str {
        match self {
            ProblemType::Tsp => "TSP",
            ProblemType::Atsp => "ATSP",
            ProblemType::Sop => "SOP",
            ProblemType::Hcp => "HCP",
            ProblemType::Cvrp => "CVRP",
            ProblemType::Tour => "TOUR",
            ProblemType::Op => "OP",
            ProblemType::Other(name) => name,
        }
    }
}

impl Display for ProblemType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ProblemType {
    fn from(value: &str) -> Self {
        match value {
            "TSP" => ProblemType::Tsp,
            "ATSP" => ProblemType::Atsp,
            "SOP" => ProblemType::Sop,
            "HCP" => ProblemType::Hcp,
            "CVRP" => ProblemType::Cvrp,
            "TOUR" => ProblemType::Tour,
            "OP" => ProblemType::Op,
            other => ProblemType::Other(other.to_string()),
        }
    }
}
