use crate::error::ConversionError;
use crate::problem::fields::EdgeWeightType;
use crate::types::Cost;

/// Earth radius used by the `GEO` distance.
const RRR: f64 = 6378.388;
#[allow(clippy::approx_constant)]
const PI: f64 = 3.141592;

/// A node coordinate (or display position). `z` is only set for 3D data.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    pub fn with_z(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    fn deltas(&self, other: &Point) -> (f64, f64, f64) {
        (
            self.x - other.x,
            self.y - other.y,
            self.z.unwrap_or(0.0) - other.z.unwrap_or(0.0),
        )
    }
}

/// Nearest integer as defined by TSPLIB, `(int) (x + 0.5)`.
#[inline(always)]
pub fn nint(x: f64) -> Cost {
    (x + 0.5) as Cost
}

pub fn euclidean_2d(a: &Point, b: &Point) -> Cost {
    let (dx, dy, _) = a.deltas(b);
    nint((dx * dx + dy * dy).sqrt())
}

pub fn euclidean_3d(a: &Point, b: &Point) -> Cost {
    let (dx, dy, dz) = a.deltas(b);
    nint((dx * dx + dy * dy + dz * dz).sqrt())
}

pub fn maximum_2d(a: &Point, b: &Point) -> Cost {
    let (dx, dy, _) = a.deltas(b);
    nint(dx.abs().max(dy.abs()))
}

pub fn maximum_3d(a: &Point, b: &Point) -> Cost {
    let (dx, dy, dz) = a.deltas(b);
    nint(dx.abs().max(dy.abs()).max(dz.abs()))
}

pub fn manhattan_2d(a: &Point, b: &Point) -> Cost {
    let (dx, dy, _) = a.deltas(b);
    nint(dx.abs() + dy.abs())
}

pub fn manhattan_3d(a: &Point, b: &Point) -> Cost {
    let (dx, dy, dz) = a.deltas(b);
    nint(dx.abs() + dy.abs() + dz.abs())
}

pub fn ceiling_2d(a: &Point, b: &Point) -> Cost {
    let (dx, dy, _) = a.deltas(b);
    (dx * dx + dy * dy).sqrt().ceil() as Cost
}

/// Pseudo-Euclidean distance of the `ATT` instances.
pub fn pseudo_euclidean(a: &Point, b: &Point) -> Cost {
    let (dx, dy, _) = a.deltas(b);
    let r = ((dx * dx + dy * dy) / 10.0).sqrt();
    let t = nint(r);
    if (t as f64) < r {
        t + 1
    } else {
        t
    }
}

/// Coordinates are `DDD.MM` (degrees and minutes) latitude/longitude pairs.
pub fn geographical(a: &Point, b: &Point) -> Cost {
    let (lat_a, lng_a) = (to_radians(a.x), to_radians(a.y));
    let (lat_b, lng_b) = (to_radians(b.x), to_radians(b.y));
    let q1 = (lng_a - lng_b).cos();
    let q2 = (lat_a - lat_b).cos();
    let q3 = (lat_a + lat_b).cos();
    (RRR * (0.5 * ((1.0 + q1) * q2 - (1.0 - q1) * q3)).acos() + 1.0) as Cost
}

fn to_radians(coordinate: f64) -> f64 {
    let degrees = coordinate.trunc();
    let minutes = coordinate - degrees;
    PI * (degrees + 5.0 * minutes / 3.0) / 180.0
}

/// Distance between two coordinates under a coordinate-based weight type.
///
/// `EXPLICIT` has no distance function and is answered from the weight
/// matrix by the caller.
pub fn distance(
    weight_type: EdgeWeightType,
    a: &Point,
    b: &Point,
) -> Result<Cost, ConversionError> {
    let d = match weight_type {
        EdgeWeightType::Euc2d => euclidean_2d(a, b),
        EdgeWeightType::Euc3d => euclidean_3d(a, b),
        EdgeWeightType::Max2d => maximum_2d(a, b),
        EdgeWeightType::Max3d => maximum_3d(a, b),
        EdgeWeightType::Man2d => manhattan_2d(a, b),
        EdgeWeightType::Man3d => manhattan_3d(a, b),
        EdgeWeightType::Ceil2d => ceiling_2d(a, b),
        EdgeWeightType::Geo => geographical(a, b),
        EdgeWeightType::Att => pseudo_euclidean(a, b),
        EdgeWeightType::Explicit
        | EdgeWeightType::Xray1
        | EdgeWeightType::Xray2
        | EdgeWeightType::Special => {
            return Err(ConversionError::UnsupportedEdgeWeightType(
                weight_type.to_string(),
            ))
        }
    };
    Ok(d)
}
