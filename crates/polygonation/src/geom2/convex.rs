use super::cfg::CONVEX_EPS;
use super::util::cross;
use super::Point;

/// Whether the polygon with vertices `polygon` (in traversal order) is convex.
///
/// Walks the boundary and compares the turn direction at every vertex. Corners
/// whose cross product is within [`CONVEX_EPS`] of zero are straight and do not
/// decide orientation. Fewer than 3 vertices is never convex. Self-intersection
/// is not detected.
pub fn is_convex(polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut orientation = 0.0_f64;
    for k in 0..n {
        let turn = cross(polygon[k], polygon[(k + 1) % n], polygon[(k + 2) % n]);
        if turn.abs() < CONVEX_EPS {
            continue;
        }
        if orientation == 0.0 {
            orientation = turn.signum();
        } else if orientation != turn.signum() {
            return false;
        }
    }
    true
}
