//! Initial triangulation and point location over it.
//!
//! Purpose
//! - Define the `Triangulator` seam: something that turns a point set into
//!   simplices with adjacency and can locate a query point in them.
//! - Provide the default Delaunay implementation (backed by `delaunator`).
//!
//! The agglomeration never triangulates on its own; a triangulator that cannot
//! handle the input fails construction with `DegenerateInput`.

mod delaunay;

pub use delaunay::DelaunayTriangulation;

use crate::error::Result;
use crate::geom2::Point;

/// A triangle of the initial triangulation, as three point indices. Its
/// identity is its position in [`Triangulator::simplices`].
pub type Simplex = [usize; 3];

/// Source of the initial simplices, their adjacency and point location.
pub trait Triangulator {
    /// Triangulate `points`. Fails on fewer than 3 points or degenerate input.
    fn triangulate(points: &[Point]) -> Result<Self>
    where
        Self: Sized;

    /// All simplices; positions are simplex ids.
    fn simplices(&self) -> &[Simplex];

    /// For each simplex, the ids of the simplices sharing an edge with it.
    /// Hull edges contribute nothing.
    fn neighbors(&self) -> &[Vec<usize>];

    /// Id of a simplex containing `p`, or `None` outside the convex hull.
    fn locate(&self, p: Point) -> Option<usize>;
}
