//! Public entry point: tessellate a point set and locate points in the result.

use crate::agglomerate::{Agglomerator, PolygonateCfg};
use crate::error::Result;
use crate::geom2::Point;
use crate::triangulation::{DelaunayTriangulation, Triangulator};

/// A tessellation of a point set's convex hull into non-overlapping polygons.
///
/// Built once, to fixpoint, at construction; read-only afterwards, so a
/// finished instance can serve `find_shape` from many threads.
#[derive(Clone, Debug)]
pub struct Polygonate<T = DelaunayTriangulation> {
    points: Vec<Point>,
    cfg: PolygonateCfg,
    triangulation: T,
    shapes: Vec<Vec<usize>>,
    neighbors: Vec<Vec<usize>>,
    descendants: Vec<usize>,
    melts: usize,
}

impl Polygonate<DelaunayTriangulation> {
    /// Tessellate `points` starting from their Delaunay triangulation.
    ///
    /// Fails with `DegenerateInput` on fewer than 3 points or collinear input.
    pub fn new(points: Vec<Point>, cfg: PolygonateCfg) -> Result<Self> {
        let triangulation = DelaunayTriangulation::new(&points)?;
        Self::from_triangulation(points, triangulation, cfg)
    }

    /// Convenience for `(x, y)` tuples.
    pub fn from_xy(points: &[(f64, f64)], cfg: PolygonateCfg) -> Result<Self> {
        Self::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect(), cfg)
    }
}

impl<T: Triangulator> Polygonate<T> {
    /// Tessellate with a triangulator chosen by type.
    pub fn with_triangulator(points: Vec<Point>, cfg: PolygonateCfg) -> Result<Self> {
        let triangulation = T::triangulate(&points)?;
        Self::from_triangulation(points, triangulation, cfg)
    }

    /// Tessellate starting from an existing triangulation of `points`.
    pub fn from_triangulation(points: Vec<Point>, triangulation: T, cfg: PolygonateCfg) -> Result<Self> {
        let mut agg = Agglomerator::new(
            &points,
            triangulation.simplices(),
            triangulation.neighbors(),
            cfg,
        );
        agg.run()?;
        let (shapes, neighbors, descendants, melts) = agg.into_parts();
        Ok(Self {
            points,
            cfg,
            triangulation,
            shapes,
            neighbors,
            descendants,
            melts,
        })
    }

    /// Input coordinates, unchanged and in input order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn cfg(&self) -> PolygonateCfg {
        self.cfg
    }

    /// Point indices of each shape's boundary, in traversal order.
    pub fn shapes(&self) -> &[Vec<usize>] {
        &self.shapes
    }

    /// For each shape, the shapes it shares an edge with.
    pub fn neighbors(&self) -> &[Vec<usize>] {
        &self.neighbors
    }

    /// Shape index for every simplex of the initial triangulation.
    pub fn descendants(&self) -> &[usize] {
        &self.descendants
    }

    pub fn triangulation(&self) -> &T {
        &self.triangulation
    }

    /// Coordinates of shape `si`'s boundary; `None` if out of range.
    pub fn shape_points(&self, si: usize) -> Option<Vec<Point>> {
        self.shapes
            .get(si)
            .map(|shape| shape.iter().map(|&v| self.points[v]).collect())
    }

    pub fn simplex_count(&self) -> usize {
        self.descendants.len()
    }

    /// Number of melts it took to reach the final shapes.
    pub fn melt_count(&self) -> usize {
        self.melts
    }

    /// Index of the shape containing `p`, or `None` outside the convex hull.
    pub fn find_shape(&self, p: Point) -> Option<usize> {
        self.triangulation
            .locate(p)
            .and_then(|s| self.descendants.get(s).copied())
    }
}
