//! Prize functions of the OPLib generations.

use crate::error::ConversionError;
use crate::problem::distance::{nint, Point};
use crate::types::{Prize, Vertex};

/// Generation 1: every vertex is worth the same.
pub fn generation_one_prize() -> Prize {
    1
}

/// Generation 2: pseudo random prizes in `1..=100`.
pub fn generation_two_prize(vertex: Vertex) -> Prize {
    1 + (7141 * vertex + 73).rem_euclid(100)
}

/**
Generation 3: prizes grow with the distance from the root vertex.

With `d_i` the Euclidean distance of vertex `i` from `coords[root]` and `M`
the nearest integer to the largest `d_i`, vertex `i` is worth
`1 + floor(99 d_i / M)`. Prizes are returned in the order of `coords`.

Fails with [`ConversionError::DegenerateCoordinates`] if `M` is zero or
`root` is not an index of `coords`.
 */
pub fn generation_three_prizes(coords: &[Point], root: usize) -> Result<Vec<Prize>, ConversionError> {
    let root_coord = coords.get(root).ok_or(ConversionError::DegenerateCoordinates)?;
    let distances: Vec<f64> = coords
        .iter()
        .map(|p| {
            let xd = root_coord.x - p.x;
            let yd = root_coord.y - p.y;
            (xd * xd + yd * yd).sqrt()
        })
        .collect();
    let max_distance = nint(distances.iter().copied().fold(0.0, f64::max));
    if max_distance == 0 {
        return Err(ConversionError::DegenerateCoordinates);
    }
    Ok(distances
        .into_iter()
        .map(|d| 1 + ((99.0 / max_distance as f64) * d).floor() as Prize)
        .collect())
}
