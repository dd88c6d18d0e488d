//! Tetrad Geometry
//!
//! Deterministic addressing for the vertices of a Tetrad registry.
//!
//! # Placement
//!
//! Every vertex receives a position as a pure function of its insertion
//! index and the registry size at insertion time. The construction is a
//! golden-angle (Fibonacci) lattice on a sphere of radius [`RADIUS`]:
//!
//! - angle `θ = index × GOLDEN_ANGLE`
//! - height `z = 1 − 2(index + ½) / total`, even steps from pole to pole for a fixed `total`
//! - `(x, y)` on the circle of latitude at that height
//! - alignment `frac(index × φ)`, always in [0, 1]
//!
//! A registry passes its size after each insertion, `total = index + 1`, so
//! the first vertex lands on the equator and each later one sits lower, at
//! `z = −index / (index + 1)`. [`Placement`] yields the evenly spread layout
//! of a registry whose size is known up front.
//!
//! Nothing is special-cased per index, so identical `(index, total)` always
//! lands on the identical point, in this process or any other.
//!
//! # Blending
//!
//! [`centroid`] averages a set of positions (used for governance consensus)
//! and [`interpolate`] places a point on the segment between two positions
//! (used for message coordinates).

mod position;
mod placement;
mod blend;

pub use position::Position;
pub use placement::{Placement, position_for};
pub use blend::{centroid, interpolate};

/// The golden ratio φ = (1 + √5) / 2.
pub const PHI: f64 = 1.618_033_988_749_895;

/// 1 / φ = φ − 1.
pub const PHI_INVERSE: f64 = 0.618_033_988_749_895;

/// Golden angle in radians: 2π / φ².
pub const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

/// Radius of the sphere every placement lies on.
pub const RADIUS: f64 = 1.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_constants_consistent() {
        assert!((PHI * PHI_INVERSE - 1.0).abs() < 1e-12);
        assert!((PHI * PHI - PHI - 1.0).abs() < 1e-12);

        let expected_angle = 2.0 * std::f64::consts::PI / (PHI * PHI);
        assert!((GOLDEN_ANGLE - expected_angle).abs() < 1e-12);
    }
}
