//! Delaunay triangulation via `delaunator`, with a visibility walk for `locate`.

use delaunator::EMPTY;

use super::{Simplex, Triangulator};
use crate::error::{PolygonationError, Result};
use crate::geom2::cfg::LOCATE_EPS;
use crate::geom2::{point_in_triangle, Point};

/// Where a visibility walk ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Walk {
    Found(usize),
    /// Stepped across a hull edge.
    Outside,
    /// Did not settle within one step per simplex.
    Stuck,
}

/// Delaunay triangulation of a planar point set.
///
/// Invariants:
/// - `across[t][k]` is the simplex on the other side of edge `k` of simplex `t`
///   (edge `k` runs from vertex `k` to vertex `k + 1 mod 3`), `None` on the hull.
/// - `neighbors[t]` lists the `Some` entries of `across[t]` in edge order.
#[derive(Clone, Debug)]
pub struct DelaunayTriangulation {
    points: Vec<Point>,
    simplices: Vec<Simplex>,
    neighbors: Vec<Vec<usize>>,
    across: Vec<[Option<usize>; 3]>,
}

impl DelaunayTriangulation {
    pub fn new(points: &[Point]) -> Result<Self> {
        if points.len() < 3 {
            return Err(PolygonationError::degenerate(
                points.len(),
                "need at least 3 points",
            ));
        }
        if let Some(index) = points.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(PolygonationError::NonFinitePoint { index });
        }
        let coords: Vec<delaunator::Point> = points
            .iter()
            .map(|p| delaunator::Point { x: p.x, y: p.y })
            .collect();
        let triangulation = delaunator::triangulate(&coords);
        if triangulation.triangles.is_empty() {
            return Err(PolygonationError::degenerate(
                points.len(),
                "points are collinear or coincident",
            ));
        }
        let simplices: Vec<Simplex> = triangulation
            .triangles
            .chunks(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        let across: Vec<[Option<usize>; 3]> = (0..simplices.len())
            .map(|t| {
                let mut row = [None; 3];
                for (k, slot) in row.iter_mut().enumerate() {
                    let opposite = triangulation.halfedges[3 * t + k];
                    if opposite != EMPTY {
                        *slot = Some(opposite / 3);
                    }
                }
                row
            })
            .collect();
        let neighbors = across
            .iter()
            .map(|row| row.iter().flatten().copied().collect())
            .collect();
        tracing::debug!(
            points = points.len(),
            simplices = simplices.len(),
            hull = triangulation.hull.len(),
            "delaunay"
        );
        Ok(Self {
            points: points.to_vec(),
            simplices,
            neighbors,
            across,
        })
    }

    /// The points the triangulation was built from.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    fn corners(&self, t: usize) -> [Point; 3] {
        let [a, b, c] = self.simplices[t];
        [self.points[a], self.points[b], self.points[c]]
    }

    /// Straight visibility walk from simplex 0.
    fn walk(&self, p: Point) -> Walk {
        let mut t = 0usize;
        for _ in 0..=self.simplices.len() {
            let v = self.corners(t);
            let orientation = (v[1] - v[0]).perp(&(v[2] - v[0])).signum();
            let mut exit = None;
            for k in 0..3 {
                let a = v[k];
                let b = v[(k + 1) % 3];
                let side = (b - a).perp(&(p - a)) * orientation;
                if side < -LOCATE_EPS {
                    exit = Some(k);
                    break;
                }
            }
            match exit {
                None => return Walk::Found(t),
                Some(k) => match self.across[t][k] {
                    Some(next) => t = next,
                    // Strictly beyond a hull edge of a convex triangulation.
                    None => return Walk::Outside,
                },
            }
        }
        Walk::Stuck
    }
}

impl Triangulator for DelaunayTriangulation {
    fn triangulate(points: &[Point]) -> Result<Self> {
        Self::new(points)
    }

    fn simplices(&self) -> &[Simplex] {
        &self.simplices
    }

    fn neighbors(&self) -> &[Vec<usize>] {
        &self.neighbors
    }

    fn locate(&self, p: Point) -> Option<usize> {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return None;
        }
        match self.walk(p) {
            Walk::Found(t) => Some(t),
            Walk::Outside => None,
            Walk::Stuck => {
                tracing::trace!(x = p.x, y = p.y, "walk did not settle; scanning");
                (0..self.simplices.len()).find(|&t| {
                    let [a, b, c] = self.corners(t);
                    point_in_triangle(p, a, b, c, LOCATE_EPS)
                })
            }
        }
    }
}
