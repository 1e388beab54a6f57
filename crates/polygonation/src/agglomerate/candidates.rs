//! Candidate generation: every currently removable shared edge with metrics.

use std::f64::consts::PI;

use super::types::Candidate;
use crate::geom2::{interior_angle, is_convex, Point};

/// All removable edges of the current tessellation, in generation order.
///
/// Order: shapes in collection order, then each shape's neighbor list in list
/// order; a pair is emitted from its lower index only. Pairs that do not share
/// exactly two vertices are skipped, and with `convex` set so are pairs whose
/// merge is not convex. An empty result means the tessellation is final.
pub fn candidates(
    points: &[Point],
    shapes: &[Vec<usize>],
    neighbors: &[Vec<usize>],
    convex: bool,
) -> Vec<Candidate> {
    let mut out = Vec::new();
    for (si1, nbrs) in neighbors.iter().enumerate() {
        for &si2 in nbrs {
            if si1 > si2 {
                continue;
            }
            if let Some(cand) = candidate(points, shapes, si1, si2, convex) {
                out.push(cand);
            }
        }
    }
    out
}

fn candidate(
    points: &[Point],
    shapes: &[Vec<usize>],
    si1: usize,
    si2: usize,
    convex: bool,
) -> Option<Candidate> {
    let edge = shared_edge(&shapes[si1], &shapes[si2])?;
    let shape1 = orient_to_edge(&shapes[si1], edge)?;
    let shape2 = orient_to_edge(&shapes[si2], edge)?;
    let merged = merged_polygon(&shape1, &shape2);
    if convex {
        let ring: Vec<Point> = merged.iter().map(|&v| points[v]).collect();
        if !is_convex(&ring) {
            return None;
        }
    }

    let vec = |from: usize, to: usize| points[to] - points[from];
    let along = vec(edge[0], edge[1]);
    let (n1, n2) = (shape1.len(), shape2.len());
    // Corner 0 uses the first boundary step away from edge[0]; corner 1 the
    // last step into edge[1].
    let angles_before = [
        [
            interior_angle(along, vec(shape1[0], shape1[1])),
            interior_angle(along, vec(shape2[0], shape2[1])),
        ],
        [
            interior_angle(along, vec(shape1[n1 - 2], shape1[n1 - 1])),
            interior_angle(along, vec(shape2[n2 - 2], shape2[n2 - 1])),
        ],
    ];
    let angles_after = [
        angles_before[0][0] + angles_before[0][1],
        angles_before[1][0] + angles_before[1][1],
    ];
    let ideal = PI * (1.0 - 2.0 / merged.len() as f64);
    let error = angles_after.iter().map(|a| (a - ideal).abs()).sum::<f64>() / 2.0;

    Some(Candidate {
        shapes: (si1, si2),
        edge,
        merged,
        length: along.norm(),
        angles_before,
        angles_after,
        error,
    })
}

/// The two vertices common to both boundaries, ascending; `None` unless there
/// are exactly two.
pub(crate) fn shared_edge(a: &[usize], b: &[usize]) -> Option<[usize; 2]> {
    let mut common: Vec<usize> = a.iter().copied().filter(|v| b.contains(v)).collect();
    common.sort_unstable();
    common.dedup();
    match common[..] {
        [lo, hi] => Some([lo, hi]),
        _ => None,
    }
}

/// Rotate (and if needed reverse) `shape` so that it starts at `edge[0]` and
/// ends at `edge[1]`, with the edge itself being the wrap-around step.
/// `None` if the two vertices are not consecutive on the boundary.
pub(crate) fn orient_to_edge(shape: &[usize], edge: [usize; 2]) -> Option<Vec<usize>> {
    let n = shape.len();
    if n < 3 {
        return None;
    }
    let is_edge = |i: usize| {
        let (a, b) = (shape[i], shape[(i + 1) % n]);
        (a == edge[0] && b == edge[1]) || (a == edge[1] && b == edge[0])
    };
    // Scan 0, n-1, n-2, …, 1 for the step (shape[i], shape[i+1]).
    let i = (0..n).map(|k| (n - k) % n).find(|&i| is_edge(i))?;
    let mut out: Vec<usize> = (0..n).map(|j| shape[(i + 1 + j) % n]).collect();
    if out[0] == edge[1] {
        out.reverse();
    }
    Some(out)
}

/// Splice two edge-oriented boundaries into one, dropping the shared edge.
/// The result has `len(a) + len(b) - 2` vertices.
pub(crate) fn merged_polygon(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut merged = Vec::with_capacity(a.len() + b.len() - 2);
    merged.extend_from_slice(&a[..a.len() - 1]);
    merged.extend(b.iter().rev().take(b.len() - 1));
    merged
}
