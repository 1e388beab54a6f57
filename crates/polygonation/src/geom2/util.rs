use nalgebra::Vector2;

use super::Point;

/// z-component of `(b - a) × (c - b)`: positive for a left turn at `b`.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let bc = c - b;
    ab.x * bc.y - ab.y * bc.x
}

#[inline]
fn orient(a: Point, b: Point, p: Point) -> f64 {
    let ab = b - a;
    let ap = p - a;
    ab.x * ap.y - ab.y * ap.x
}

/// Unsigned angle in `[0, π]` between two vectors. Zero-length input yields NaN.
#[inline]
pub fn interior_angle(u: Vector2<f64>, v: Vector2<f64>) -> f64 {
    let cos = u.dot(&v) / (u.norm() * v.norm());
    cos.clamp(-1.0, 1.0).acos()
}

/// Shoelace area; positive for counter-clockwise vertex order.
pub fn signed_area(polygon: &[Point]) -> f64 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for k in 0..n {
        let p = polygon[k];
        let q = polygon[(k + 1) % n];
        twice += p.x * q.y - q.x * p.y;
    }
    0.5 * twice
}

/// Absolute area of a simple polygon.
#[inline]
pub fn polygon_area(polygon: &[Point]) -> f64 {
    signed_area(polygon).abs()
}

/// Whether `p` lies inside or on triangle `abc` (either orientation), with `eps`
/// slack on each edge test.
pub fn point_in_triangle(p: Point, a: Point, b: Point, c: Point, eps: f64) -> bool {
    let d1 = orient(a, b, p);
    let d2 = orient(b, c, p);
    let d3 = orient(c, a, p);
    let has_neg = d1 < -eps || d2 < -eps || d3 < -eps;
    let has_pos = d1 > eps || d2 > eps || d3 > eps;
    !(has_neg && has_pos)
}
