//! Melt: replace two neighboring shapes by their union.
//!
//! Shapes are identified by position, so removing two of them shifts every
//! later index. The rewrite is computed once as [`Renumber`] and applied to the
//! shape list, every neighbor list and the descendant map in the same call;
//! all validation happens before the first mutation.

use crate::error::{PolygonationError, Result};

/// Index rewrite for one melt of shapes `lo < hi` out of `len` shapes.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Renumber {
    lo: usize,
    hi: usize,
    merged: usize,
}

impl Renumber {
    pub(crate) fn new(si1: usize, si2: usize, len: usize) -> Self {
        let (lo, hi) = if si1 < si2 { (si1, si2) } else { (si2, si1) };
        Self {
            lo,
            hi,
            merged: len - 2,
        }
    }

    #[inline]
    pub(crate) fn apply(&self, si: usize) -> usize {
        if si == self.lo || si == self.hi {
            self.merged
        } else if si < self.lo {
            si
        } else if si < self.hi {
            si - 1
        } else {
            si - 2
        }
    }
}

/// Remove shapes `si1` and `si2`, append `merged` as the last shape, and
/// rewrite neighbor lists and `descendants` to the new positions.
///
/// The merged shape's neighbors are those of `si2` followed by those of `si1`,
/// without the pair itself. Neighbor lists are deduplicated keeping the first
/// occurrence. Returns the merged shape's index.
pub fn melt(
    shapes: &mut Vec<Vec<usize>>,
    neighbors: &mut Vec<Vec<usize>>,
    descendants: &mut [usize],
    si1: usize,
    si2: usize,
    merged: Vec<usize>,
) -> Result<usize> {
    let len = shapes.len();
    if si1 == si2 || si1 >= len || si2 >= len || neighbors.len() != len || merged.len() < 3 {
        return Err(PolygonationError::InvalidMelt {
            si1,
            si2,
            shapes: len,
        });
    }
    let map = Renumber::new(si1, si2, len);
    let (lo, hi) = (map.lo, map.hi);

    let joined = neighbors[hi]
        .iter()
        .chain(neighbors[lo].iter())
        .copied()
        .filter(|&s| s != lo && s != hi);
    let mut next: Vec<Vec<usize>> = Vec::with_capacity(len - 1);
    for (si, list) in neighbors.iter().enumerate() {
        if si != lo && si != hi {
            next.push(renumbered(list.iter().copied(), map));
        }
    }
    next.push(renumbered(joined, map));

    shapes.remove(hi);
    shapes.remove(lo);
    shapes.push(merged);
    *neighbors = next;
    for d in descendants.iter_mut() {
        *d = map.apply(*d);
    }
    Ok(map.merged)
}

fn renumbered(list: impl Iterator<Item = usize>, map: Renumber) -> Vec<usize> {
    let mut out: Vec<usize> = Vec::new();
    for si in list.map(|si| map.apply(si)) {
        if !out.contains(&si) {
            out.push(si);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renumber_shifts_past_removed() {
        let map = Renumber::new(4, 1, 6);
        let got: Vec<usize> = (0..6).map(|si| map.apply(si)).collect();
        assert_eq!(got, vec![0, 4, 1, 2, 4, 3]);
    }

    #[test]
    fn melt_fan_pair() {
        // Fan of four triangles around vertex 4: B, R, T, L.
        let mut shapes = vec![vec![0, 1, 4], vec![1, 2, 4], vec![2, 3, 4], vec![3, 0, 4]];
        let mut neighbors = vec![vec![1, 3], vec![0, 2], vec![1, 3], vec![2, 0]];
        let mut descendants = vec![0, 1, 2, 3];
        let si = melt(
            &mut shapes,
            &mut neighbors,
            &mut descendants,
            0,
            1,
            vec![4, 0, 1, 2],
        )
        .unwrap();
        assert_eq!(si, 2);
        assert_eq!(shapes, vec![vec![2, 3, 4], vec![3, 0, 4], vec![4, 0, 1, 2]]);
        assert_eq!(neighbors, vec![vec![2, 1], vec![0, 2], vec![0, 1]]);
        assert_eq!(descendants, vec![2, 2, 0, 1]);
    }

    #[test]
    fn melt_dedups_shared_neighbor() {
        // Shape 2 touches both 0 and 1; after melting 0+1 it must list the
        // merged shape once.
        let mut shapes = vec![vec![0, 1, 2], vec![1, 3, 2], vec![1, 4, 3]];
        let mut neighbors = vec![vec![1, 2], vec![0, 2], vec![0, 1]];
        let mut descendants = vec![0, 1, 2];
        melt(
            &mut shapes,
            &mut neighbors,
            &mut descendants,
            1,
            0,
            vec![0, 1, 3, 2],
        )
        .unwrap();
        assert_eq!(neighbors, vec![vec![1], vec![0]]);
        assert_eq!(descendants, vec![1, 1, 0]);
    }

    #[test]
    fn invalid_melt_leaves_state_untouched() {
        let mut shapes = vec![vec![0, 1, 2], vec![0, 2, 3]];
        let mut neighbors = vec![vec![1], vec![0]];
        let mut descendants = vec![0, 1];
        let err = melt(
            &mut shapes,
            &mut neighbors,
            &mut descendants,
            0,
            2,
            vec![0, 1, 2, 3],
        )
        .unwrap_err();
        assert_eq!(
            err,
            PolygonationError::InvalidMelt {
                si1: 0,
                si2: 2,
                shapes: 2
            }
        );
        assert_eq!(shapes.len(), 2);
        assert_eq!(neighbors, vec![vec![1], vec![0]]);
        assert_eq!(descendants, vec![0, 1]);
    }
}
