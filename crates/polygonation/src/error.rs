//! Error types for polygonation.

use thiserror::Error;

/// Result type alias using [`PolygonationError`].
pub type Result<T> = std::result::Result<T, PolygonationError>;

/// Errors surfaced while building a tessellation.
///
/// Construction either runs to fixpoint or fails with one of these; no partial
/// instance is ever handed out. Point location never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolygonationError {
    /// Too few points, or input the triangulator cannot triangulate
    /// (all collinear, all coincident).
    #[error("degenerate input ({points} points): {reason}")]
    DegenerateInput {
        /// Number of input points.
        points: usize,
        /// What made the input unusable.
        reason: &'static str,
    },

    /// A point has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint {
        /// Index of the offending point.
        index: usize,
    },

    /// A policy name that matches none of `acute`, `long`, `round`.
    #[error("unknown edge policy {0:?} (expected acute, long or round)")]
    UnknownPolicy(String),

    /// A melt was requested for a pair that cannot be merged.
    #[error("cannot melt shapes {si1} and {si2} ({shapes} shapes present)")]
    InvalidMelt {
        /// First shape index.
        si1: usize,
        /// Second shape index.
        si2: usize,
        /// Number of shapes at the time of the request.
        shapes: usize,
    },
}

impl PolygonationError {
    pub(crate) fn degenerate(points: usize, reason: &'static str) -> Self {
        PolygonationError::DegenerateInput { points, reason }
    }
}
