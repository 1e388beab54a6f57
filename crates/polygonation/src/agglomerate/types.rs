//! Data types for the agglomeration: policy, configuration, candidate records.

use std::fmt;
use std::str::FromStr;

use crate::error::PolygonationError;

/// Which removable edge to melt first when several are valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgePolicy {
    /// Remove the edge at the sharpest existing corner first.
    #[default]
    Acute,
    /// Remove the longest edge first.
    Long,
    /// Remove the edge whose merge comes closest to a regular polygon.
    Round,
}

impl EdgePolicy {
    pub const ALL: [EdgePolicy; 3] = [EdgePolicy::Acute, EdgePolicy::Long, EdgePolicy::Round];

    /// Lenient parse by prefix: `long…` and `round…` select those policies,
    /// anything else (including the empty string) is `Acute`.
    pub fn from_prefix(name: &str) -> Self {
        if name.starts_with("long") {
            EdgePolicy::Long
        } else if name.starts_with("round") {
            EdgePolicy::Round
        } else {
            EdgePolicy::Acute
        }
    }

    /// Strict parse: exact names only.
    pub fn parse_strict(name: &str) -> Result<Self, PolygonationError> {
        match name {
            "acute" => Ok(EdgePolicy::Acute),
            "long" => Ok(EdgePolicy::Long),
            "round" => Ok(EdgePolicy::Round),
            other => Err(PolygonationError::UnknownPolicy(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EdgePolicy::Acute => "acute",
            EdgePolicy::Long => "long",
            EdgePolicy::Round => "round",
        }
    }
}

impl FromStr for EdgePolicy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(EdgePolicy::from_prefix(s))
    }
}

impl fmt::Display for EdgePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tessellation configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolygonateCfg {
    pub policy: EdgePolicy,
    /// Only accept merges that keep every shape convex.
    pub convex: bool,
}

impl Default for PolygonateCfg {
    fn default() -> Self {
        Self {
            policy: EdgePolicy::Acute,
            convex: true,
        }
    }
}

impl PolygonateCfg {
    pub fn with_policy(mut self, policy: EdgePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_convex(mut self, convex: bool) -> Self {
        self.convex = convex;
        self
    }
}

/// A removable edge between two neighboring shapes, with the merge it would
/// produce. Recomputed every iteration; never stored across a melt.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    /// Shape indices sharing the edge, lower first.
    pub shapes: (usize, usize),
    /// Point indices of the shared edge, ascending.
    pub edge: [usize; 2],
    /// Boundary of the merged shape.
    pub merged: Vec<usize>,
    /// Euclidean length of the shared edge.
    pub length: f64,
    /// `angles_before[c][s]`: interior angle at edge endpoint `c` in shape `s`.
    pub angles_before: [[f64; 2]; 2],
    /// Interior angle at each edge endpoint after the merge.
    pub angles_after: [f64; 2],
    /// Mean deviation of `angles_after` from a regular polygon's interior
    /// angle with the merged vertex count.
    pub error: f64,
}

impl Candidate {
    /// Sharpest corner touching the edge before the merge.
    pub fn min_angle_before(&self) -> f64 {
        self.angles_before
            .iter()
            .flatten()
            .copied()
            .fold(f64::INFINITY, f64::min)
    }
}
