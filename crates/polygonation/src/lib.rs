//! Polygonation: tessellate a point set's convex hull into non-overlapping polygons.
//!
//! Start from a Delaunay triangulation, then repeatedly remove one shared edge
//! between two neighboring shapes ("melt") until no removable edge is left.
//! Which edge goes first is governed by an [`EdgePolicy`]; whether the result
//! must stay convex by [`PolygonateCfg::convex`].
//!
//! API Policy
//! - `Polygonate` and `is_convex` are the stable surface. The stepwise
//!   `Agglomerator` and the candidate helpers are exposed for tests, benches and
//!   experiments and may change.

pub mod agglomerate;
pub mod api;
pub mod error;
pub mod geom2;
pub mod polygonate;
pub mod triangulation;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use agglomerate::{Agglomerator, Candidate, EdgePolicy, PolygonateCfg};
pub use error::{PolygonationError, Result};
pub use geom2::{is_convex, Point};
pub use polygonate::Polygonate;
pub use triangulation::{DelaunayTriangulation, Simplex, Triangulator};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::agglomerate::{Candidate, EdgePolicy, PolygonateCfg};
    pub use crate::geom2::rand::{uniform_points, ReplayToken};
    pub use crate::geom2::{is_convex, polygon_area, Point};
    pub use crate::polygonate::Polygonate;
    pub use crate::triangulation::{DelaunayTriangulation, Triangulator};
    pub use nalgebra::Vector2 as Vec2;
}
