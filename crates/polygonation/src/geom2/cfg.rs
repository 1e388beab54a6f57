//! Tolerance defaults (internal).
//!
//! Policy
//! - Defaults are fixed constants. `CONVEX_EPS` in particular decides which
//!   merges are accepted, so changing it changes tessellations.

/// Cross products with magnitude below this are treated as straight corners
/// by [`is_convex`](super::is_convex).
pub const CONVEX_EPS: f64 = 1e-5;
/// Orientation slack for triangle membership during point location.
pub const LOCATE_EPS: f64 = 1e-12;
