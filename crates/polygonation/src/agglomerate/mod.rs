//! Agglomeration: melt neighboring shapes until no removable edge is left.
//!
//! Purpose
//! - Drive the candidate → pick → melt loop from the initial triangulation to
//!   fixpoint, keeping shapes, neighbor lists and the descendant map (original
//!   simplex → current shape) in lockstep.
//!
//! Design
//! - Greedy: candidates are recomputed from scratch every
//!   iteration, so the selection order depends only on the current state.
//! - Shapes are identified by position. `melt` is the only mutation and
//!   rewrites all three structures with one precomputed renumbering.
//!
//! Layout
//! - `types.rs` (policy, config, candidate), `candidates.rs` (generation),
//!   `heuristic.rs` (selection), `melt.rs` (merge + renumbering).

mod candidates;
mod heuristic;
mod melt;
mod types;

pub use candidates::candidates;
pub use heuristic::pick;
pub use melt::melt;
pub use types::{Candidate, EdgePolicy, PolygonateCfg};

use crate::error::Result;
use crate::geom2::Point;
use crate::triangulation::Simplex;

/// Mutable agglomeration state over a fixed point set and its initial
/// triangulation.
#[derive(Clone, Debug)]
pub struct Agglomerator<'a> {
    points: &'a [Point],
    simplices: &'a [Simplex],
    cfg: PolygonateCfg,
    shapes: Vec<Vec<usize>>,
    neighbors: Vec<Vec<usize>>,
    descendants: Vec<usize>,
    melts: usize,
}

impl<'a> Agglomerator<'a> {
    /// Start from one shape per simplex; `simplex_neighbors` must be parallel
    /// to `simplices`.
    pub fn new(
        points: &'a [Point],
        simplices: &'a [Simplex],
        simplex_neighbors: &[Vec<usize>],
        cfg: PolygonateCfg,
    ) -> Self {
        Self {
            points,
            simplices,
            cfg,
            shapes: simplices.iter().map(|s| s.to_vec()).collect(),
            neighbors: simplex_neighbors.to_vec(),
            descendants: (0..simplices.len()).collect(),
            melts: 0,
        }
    }

    pub fn cfg(&self) -> PolygonateCfg {
        self.cfg
    }

    pub fn shapes(&self) -> &[Vec<usize>] {
        &self.shapes
    }

    pub fn neighbors(&self) -> &[Vec<usize>] {
        &self.neighbors
    }

    pub fn descendants(&self) -> &[usize] {
        &self.descendants
    }

    /// Number of melts applied so far.
    pub fn melts(&self) -> usize {
        self.melts
    }

    /// Currently removable edges, in generation order.
    pub fn candidates(&self) -> Vec<Candidate> {
        candidates(self.points, &self.shapes, &self.neighbors, self.cfg.convex)
    }

    /// Apply one melt. Returns the index of the merged shape (always the last
    /// one), or `None` at fixpoint.
    pub fn step(&mut self) -> Result<Option<usize>> {
        let mut cands = self.candidates();
        tracing::trace!(candidates = cands.len(), shapes = self.shapes.len(), "step");
        let Some(i) = pick(self.cfg.policy, &cands) else {
            return Ok(None);
        };
        let Candidate {
            shapes: (si1, si2),
            merged,
            ..
        } = cands.swap_remove(i);
        let vertices = merged.len();
        let si = melt(
            &mut self.shapes,
            &mut self.neighbors,
            &mut self.descendants,
            si1,
            si2,
            merged,
        )?;
        self.melts += 1;
        tracing::debug!(
            si1,
            si2,
            merged = si,
            vertices,
            shapes = self.shapes.len(),
            "melt"
        );
        Ok(Some(si))
    }

    /// Melt until no candidate is left. Returns the number of melts applied.
    pub fn run(&mut self) -> Result<usize> {
        let start = self.melts;
        while self.step()?.is_some() {}
        tracing::info!(
            policy = %self.cfg.policy,
            convex = self.cfg.convex,
            melts = self.melts - start,
            shapes = self.shapes.len(),
            "fixpoint"
        );
        Ok(self.melts - start)
    }

    /// Check the structural invariants of the current state.
    ///
    /// - every shape has at least 3 distinct vertices;
    /// - neighbor lists are parallel to shapes, in range, free of self and
    ///   duplicate entries, symmetric, and neighbors share at least 2 vertices;
    /// - every simplex maps to an existing shape that contains its vertices;
    /// - with `convex` set, every shape is convex.
    pub fn check_invariants(&self) -> std::result::Result<(), String> {
        let n = self.shapes.len();
        if self.neighbors.len() != n {
            return Err(format!(
                "{} neighbor lists for {} shapes",
                self.neighbors.len(),
                n
            ));
        }
        for (si, shape) in self.shapes.iter().enumerate() {
            let mut distinct = shape.clone();
            distinct.sort_unstable();
            distinct.dedup();
            if distinct.len() < 3 || distinct.len() != shape.len() {
                return Err(format!("shape {si} is degenerate: {shape:?}"));
            }
            if self.cfg.convex {
                let ring: Vec<Point> = shape.iter().map(|&v| self.points[v]).collect();
                if !crate::geom2::is_convex(&ring) {
                    return Err(format!("shape {si} is not convex"));
                }
            }
        }
        for (si, list) in self.neighbors.iter().enumerate() {
            for (k, &nb) in list.iter().enumerate() {
                if nb >= n {
                    return Err(format!("shape {si} lists missing neighbor {nb}"));
                }
                if nb == si {
                    return Err(format!("shape {si} lists itself"));
                }
                if list[..k].contains(&nb) {
                    return Err(format!("shape {si} lists {nb} twice"));
                }
                if !self.neighbors[nb].contains(&si) {
                    return Err(format!("{si} lists {nb} but not vice versa"));
                }
                let shared = self.shapes[si]
                    .iter()
                    .filter(|v| self.shapes[nb].contains(v))
                    .count();
                if shared < 2 {
                    return Err(format!("neighbors {si} and {nb} share {shared} vertices"));
                }
            }
        }
        if self.descendants.len() != self.simplices.len() {
            return Err(format!(
                "descendant map has {} entries for {} simplices",
                self.descendants.len(),
                self.simplices.len()
            ));
        }
        for (s, (&si, simplex)) in self.descendants.iter().zip(self.simplices).enumerate() {
            let Some(shape) = self.shapes.get(si) else {
                return Err(format!("simplex {s} maps to missing shape {si}"));
            };
            if !simplex.iter().all(|v| shape.contains(v)) {
                return Err(format!("simplex {s} not contained in shape {si}"));
            }
        }
        Ok(())
    }

    /// Final `(shapes, neighbors, descendants, melts)`.
    pub fn into_parts(self) -> (Vec<Vec<usize>>, Vec<Vec<usize>>, Vec<usize>, usize) {
        (self.shapes, self.neighbors, self.descendants, self.melts)
    }
}
