use std::fmt::{Display, Formatter};
use std::str::FromStr;

use enum_map::Enum;

use crate::error::Error;

/// Vertex id as written in an instance file. Converters create negative
/// ids for dummy vertices, so the type is signed.
pub type Vertex = i64;
pub type Cost = i64;
pub type Prize = i64;
pub type Edge = (Vertex, Vertex);

pub type VertexList = Vec<Vertex>;
pub type EdgeList = Vec<Edge>;

/// Batches of the OPLib benchmark, differing in how node prizes are generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Enum)]
pub enum Generation {
    Gen1,
    Gen2,
    Gen3,
    Gen4,
}

impl Generation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Generation::Gen1 => "gen1",
            Generation::Gen2 => "gen2",
            Generation::Gen3 => "gen3",
            Generation::Gen4 => "gen4",
        }
    }

    pub fn all() -> impl Iterator<Item = Generation> {
        (0..<Generation as Enum>::LENGTH).map(<Generation as Enum>::from_usize)
    }
}

impl Display for Generation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Generation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Generation::all()
            .find(|it| it.as_str() == s)
            .ok_or_else(|| Error::invalid_identifier("generation", s))
    }
}

/// Cost limit of an OPLib instance in percent of the optimal TSP tour length.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Enum)]
pub enum Alpha {
    #[default]
    Fifty,
}

impl Alpha {
    pub fn value(&self) -> u32 {
        match self {
            Alpha::Fifty => 50,
        }
    }
}

impl Display for Alpha {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl TryFrom<u32> for Alpha {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            50 => Ok(Alpha::Fifty),
            _ => Err(Error::invalid_identifier("alpha", value.to_string())),
        }
    }
}

macro_rules! graph_names {
    ($($variant:ident => $name:literal, $optimum:literal;)+) => {
        /// TSPLIB instances that OPLib builds its orienteering instances on.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Enum)]
        pub enum GraphName {
            $($variant,)+
        }

        impl GraphName {
            /// Spelling used in the dataset's file names.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(GraphName::$variant => $name,)+
                }
            }

            /// Length of the optimal TSP tour.
            pub fn optimal_tsp_value(&self) -> Cost {
                match self {
                    $(GraphName::$variant => $optimum,)+
                }
            }
        }
    };
}

graph_names! {
    A280 => "a280", 2579;
    Ali535 => "ali535", 202339;
    Att48 => "att48", 10628;
    Att532 => "att532", 27686;
    Bayg29 => "bayg29", 1610;
    Bays29 => "bays29", 2020;
    Berlin52 => "berlin52", 7542;
    Bier127 => "bier127", 118282;
    Brazil58 => "brazil58", 25395;
    Brg180 => "brg180", 1950;
    Burma14 => "burma14", 3323;
    Ch130 => "ch130", 6110;
    Ch150 => "ch150", 6528;
    D198 => "d198", 15780;
    D493 => "d493", 35002;
    D657 => "d657", 48912;
    D1291 => "d1291", 50801;
    D1655 => "d1655", 62128;
    Dantzig42 => "dantzig42", 699;
    Dsj1000 => "dsj1000", 18659688;
    Eil51 => "eil51", 426;
    Eil76 => "eil76", 538;
    Eil101 => "eil101", 629;
    Fl417 => "fl417", 11861;
    Fl1400 => "fl1400", 20127;
    Fl1577 => "fl1577", 22249;
    Fri26 => "fri26", 937;
    Gil262 => "gil262", 2378;
    Gr17 => "gr17", 2085;
    Gr21 => "gr21", 2707;
    Gr24 => "gr24", 1272;
    Gr48 => "gr48", 5046;
    Gr96 => "gr96", 55209;
    Gr120 => "gr120", 6942;
    Gr137 => "gr137", 69853;
    Gr202 => "gr202", 40160;
    Gr229 => "gr229", 134602;
    Gr431 => "gr431", 171414;
    Gr666 => "gr666", 294358;
    Hk48 => "hk48", 11461;
    KroA100 => "kroA100", 21282;
    KroB100 => "kroB100", 22141;
    KroC100 => "kroC100", 20749;
    KroD100 => "kroD100", 21294;
    KroE100 => "kroE100", 22068;
    KroA150 => "kroA150", 26524;
    KroB150 => "kroB150", 26130;
    KroA200 => "kroA200", 29368;
    KroB200 => "kroB200", 29437;
    Lin105 => "lin105", 14379;
    Lin318 => "lin318", 42029;
    Nrw1379 => "nrw1379", 56638;
    P654 => "p654", 34643;
    Pa561 => "pa561", 2763;
    Pcb442 => "pcb442", 50778;
    Pcb1173 => "pcb1173", 56892;
    Pr76 => "pr76", 108159;
    Pr107 => "pr107", 44303;
    Pr124 => "pr124", 59030;
    Pr136 => "pr136", 96772;
    Pr144 => "pr144", 58537;
    Pr152 => "pr152", 73682;
    Pr226 => "pr226", 80369;
    Pr264 => "pr264", 49135;
    Pr299 => "pr299", 48191;
    Pr439 => "pr439", 107217;
    Pr1002 => "pr1002", 259045;
    Rat99 => "rat99", 1211;
    Rat195 => "rat195", 2323;
    Rat575 => "rat575", 6773;
    Rat783 => "rat783", 8806;
    Rd100 => "rd100", 7910;
    Rd400 => "rd400", 15281;
    Rl1304 => "rl1304", 252948;
    Rl1323 => "rl1323", 270199;
    Si175 => "si175", 21407;
    Si535 => "si535", 48450;
    St70 => "st70", 675;
    Swiss42 => "swiss42", 1273;
    Ts225 => "ts225", 126643;
    Tsp225 => "tsp225", 3916;
    U159 => "u159", 42080;
    U574 => "u574", 36905;
    U724 => "u724", 41910;
    U1060 => "u1060", 224094;
    U1432 => "u1432", 152970;
    Ulysses16 => "ulysses16", 6859;
    Ulysses22 => "ulysses22", 7013;
    Vm1084 => "vm1084", 239297;
    Vm1748 => "vm1748", 336556;
}

impl GraphName {
    pub fn all() -> impl Iterator<Item = GraphName> {
        (0..<GraphName as Enum>::LENGTH).map(<GraphName as Enum>::from_usize)
    }
}

impl Display for GraphName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GraphName::all()
            .find(|it| it.as_str() == s)
            .ok_or_else(|| Error::invalid_identifier("graph name", s))
    }
}
