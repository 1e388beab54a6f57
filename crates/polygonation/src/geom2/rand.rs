//! Random point sets in 2D (uniform in a box, replay tokens).
//!
//! Purpose
//! - Provide small, deterministic point samplers for tests, benches and the
//!   CLI. The draws mirror the usual `rand(n, 2)` setup: independent uniform
//!   coordinates in the unit square (or a custom box).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG, so
//!   the k-th draw of a sweep can be regenerated without replaying the sweep.

use super::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Axis-aligned sampling box `[x_min, x_max) × [y_min, y_max)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 1.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }

    /// Token for the next draw in the same stream.
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `n` points uniformly from the unit square.
pub fn uniform_points(n: usize, tok: ReplayToken) -> Vec<Point> {
    uniform_points_in(n, Bounds2::default(), tok)
}

/// Draw `n` points uniformly from `bounds`. Inverted bounds are swapped.
pub fn uniform_points_in(n: usize, bounds: Bounds2, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let (x0, x1) = ordered(bounds.x_min, bounds.x_max);
    let (y0, y1) = ordered(bounds.y_min, bounds.y_max);
    (0..n)
        .map(|_| {
            let x = x0 + rng.gen::<f64>() * (x1 - x0);
            let y = y0 + rng.gen::<f64>() * (y1 - y0);
            Point::new(x, y)
        })
        .collect()
}

#[inline]
fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = uniform_points(25, tok);
        let b = uniform_points(25, tok);
        assert_eq!(a, b);
        let c = uniform_points(25, tok.next());
        assert_ne!(a, c);
    }

    #[test]
    fn draws_stay_in_bounds() {
        let bounds = Bounds2 {
            x_min: 2.0,
            x_max: -1.0,
            y_min: 10.0,
            y_max: 10.5,
        };
        let pts = uniform_points_in(200, bounds, ReplayToken::new(3));
        assert_eq!(pts.len(), 200);
        for p in pts {
            assert!((-1.0..2.0).contains(&p.x));
            assert!((10.0..10.5).contains(&p.y));
        }
    }
}
