//! Curated internal API (UNSTABLE).
//!
//! Prefer these re-exports in benches, the CLI and experiments; they group the
//! pieces of the agglomeration pipeline that callers tend to need together.

// Geometry
pub use crate::geom2::rand::{uniform_points, uniform_points_in, Bounds2, ReplayToken};
pub use crate::geom2::{
    interior_angle, is_convex, point_in_triangle, polygon_area, signed_area, Point,
};
// Triangulation collaborator
pub use crate::triangulation::{DelaunayTriangulation, Simplex, Triangulator};
// Agglomeration pipeline
pub use crate::agglomerate::{
    candidates, melt, pick, Agglomerator, Candidate, EdgePolicy, PolygonateCfg,
};
pub use crate::polygonate::Polygonate;
