use crate::error::ParseError;
use crate::problem::fields::EdgeWeightFormat;
use crate::types::Cost;

/// Dense `n x n` matrix of explicit edge weights, indexed by node position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightMatrix {
    n: usize,
    data: Vec<Cost>,
}

impl WeightMatrix {
    /// Expands the values of an `EDGE_WEIGHT_SECTION` into a full matrix.
    /// Triangular formats are mirrored.
    pub fn from_explicit(
        format: EdgeWeightFormat,
        dimension: usize,
        values: &[Cost],
    ) -> Result<Self, ParseError> {
        let expected = number_of_values(format, dimension)?;
        if expected != values.len() {
            return Err(ParseError::new(format!(
                "{} of dimension {} needs {} weights, found {}",
                format,
                dimension,
                expected,
                values.len()
            )));
        }
        let positions = positions(format, dimension)?;

        let mut builder = WeightMatrixBuilder::with_num_nodes(dimension);
        let symmetric = format != EdgeWeightFormat::FullMatrix;
        for (&(i, j), &weight) in positions.iter().zip(values) {
            builder.set_weight(i, j, weight);
            if symmetric {
                builder.set_weight(j, i, weight);
            }
        }
        Ok(builder.build())
    }

    /// Values in the order `format` lists them; inverse of [`WeightMatrix::from_explicit`].
    pub fn to_explicit(&self, format: EdgeWeightFormat) -> Result<Vec<Cost>, ParseError> {
        Ok(positions(format, self.n)?
            .into_iter()
            .map(|(i, j)| self.weight(i, j))
            .collect())
    }

    pub fn num_nodes(&self) -> usize {
        self.n
    }

    #[inline(always)]
    pub fn weight(&self, from: usize, to: usize) -> Cost {
        self.data[self.idx(from, to)]
    }

    #[inline(always)]
    fn idx(&self, from: usize, to: usize) -> usize {
        debug_assert!(from < self.n);
        debug_assert!(to < self.n);
        from * self.n + to
    }
}

pub struct WeightMatrixBuilder {
    n: usize,
    data: Vec<Cost>,
}

impl WeightMatrixBuilder {
    pub fn with_num_nodes(num_nodes: usize) -> Self {
        Self {
            n: num_nodes,
            data: vec![0; num_nodes * num_nodes],
        }
    }

    pub fn set_weight(&mut self, from: usize, to: usize, weight: Cost) -> &mut Self {
        self.data[from * self.n + to] = weight;
        self
    }

    pub fn build(self) -> WeightMatrix {
        WeightMatrix {
            n: self.n,
            data: self.data,
        }
    }
}

/// Number of values `format` lists for `n` nodes, checked for overflow.
fn number_of_values(format: EdgeWeightFormat, n: usize) -> Result<usize, ParseError> {
    let overflow = || ParseError::new(format!("DIMENSION {} is too large", n));
    let strict_triangle = n.checked_mul(n.saturating_sub(1)).ok_or_else(overflow)? / 2;
    match format {
        EdgeWeightFormat::Function => Err(ParseError::new(
            "EDGE_WEIGHT_FORMAT FUNCTION has no explicit weights",
        )),
        EdgeWeightFormat::FullMatrix => n.checked_mul(n).ok_or_else(overflow),
        EdgeWeightFormat::UpperRow
        | EdgeWeightFormat::LowerRow
        | EdgeWeightFormat::UpperCol
        | EdgeWeightFormat::LowerCol => Ok(strict_triangle),
        EdgeWeightFormat::UpperDiagRow
        | EdgeWeightFormat::LowerDiagRow
        | EdgeWeightFormat::UpperDiagCol
        | EdgeWeightFormat::LowerDiagCol => strict_triangle.checked_add(n).ok_or_else(overflow),
    }
}

/// Matrix cells in the order a format lists its values.
fn positions(format: EdgeWeightFormat, n: usize) -> Result<Vec<(usize, usize)>, ParseError> {
    let cells: Vec<(usize, usize)> = match format {
        EdgeWeightFormat::Function => {
            return Err(ParseError::new(
                "EDGE_WEIGHT_FORMAT FUNCTION has no explicit weights",
            ))
        }
        EdgeWeightFormat::FullMatrix => (0..n).flat_map(|i| (0..n).map(move |j| (i, j))).collect(),
        EdgeWeightFormat::UpperRow => (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .collect(),
        EdgeWeightFormat::LowerRow => (0..n).flat_map(|i| (0..i).map(move |j| (i, j))).collect(),
        EdgeWeightFormat::UpperDiagRow => (0..n).flat_map(|i| (i..n).map(move |j| (i, j))).collect(),
        EdgeWeightFormat::LowerDiagRow => (0..n)
            .flat_map(|i| (0..=i).map(move |j| (i, j)))
            .collect(),
        EdgeWeightFormat::UpperCol => (0..n).flat_map(|j| (0..j).map(move |i| (i, j))).collect(),
        EdgeWeightFormat::LowerCol => (0..n)
            .flat_map(|j| (j + 1..n).map(move |i| (i, j)))
            .collect(),
        EdgeWeightFormat::UpperDiagCol => (0..n)
            .flat_map(|j| (0..=j).map(move |i| (i, j)))
            .collect(),
        EdgeWeightFormat::LowerDiagCol => (0..n).flat_map(|j| (j..n).map(move |i| (i, j))).collect(),
    };
    Ok(cells)
}
