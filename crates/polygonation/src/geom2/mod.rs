//! Planar geometry on index-free point lists.
//!
//! Purpose
//! - Provide the pure predicates and measures the agglomeration needs:
//!   convexity, signed/absolute area, interior angles, triangle membership.
//! - Keep everything on `nalgebra::Vector2<f64>` so callers can pass slices of
//!   points straight through without conversions.
//!
//! Conventions
//! - Polygons are vertex lists in traversal order, not closed (the last vertex
//!   connects back to the first). Either orientation is accepted.
//! - Tolerances are fixed constants in [`cfg`].

pub mod cfg;
mod convex;
pub mod rand;
mod util;

pub use convex::is_convex;
pub use util::{cross, interior_angle, point_in_triangle, polygon_area, signed_area};

/// A point in the plane. Points are identified by their index in the input
/// sequence; the coordinates never change after load.
pub type Point = nalgebra::Vector2<f64>;

#[cfg(test)]
mod tests;
