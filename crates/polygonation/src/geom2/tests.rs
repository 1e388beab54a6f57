use super::*;
use nalgebra::vector;

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn convex_square_both_orientations() {
    let ccw = pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
    let cw = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    assert!(is_convex(&ccw));
    assert!(is_convex(&cw));
}

#[test]
fn convex_dense_circle() {
    let circle: Vec<Point> = (0..200)
        .map(|k| {
            let a = std::f64::consts::TAU * (k as f64) / 200.0;
            Point::new(a.cos(), a.sin())
        })
        .collect();
    assert!(is_convex(&circle));
}

#[test]
fn convex_with_straight_corner() {
    let poly = pts(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (0.0, 3.0), (1.0, 1.0)]);
    assert!(is_convex(&poly));
}

#[test]
fn self_crossing_quad_is_not_convex() {
    let bowtie = pts(&[(0.0, 0.0), (1.0, 1.0), (0.0, 1.0), (1.0, 0.0)]);
    assert!(!is_convex(&bowtie));
}

#[test]
fn reflex_corner_is_not_convex() {
    // Arrowhead: (0.5, 0.4) points into the shape.
    let arrow = pts(&[(0.0, 0.0), (0.5, 0.4), (1.0, 0.0), (0.5, 1.0)]);
    assert!(!is_convex(&arrow));
}

#[test]
fn too_few_vertices_is_not_convex() {
    assert!(!is_convex(&[]));
    assert!(!is_convex(&pts(&[(0.0, 0.0), (1.0, 0.0)])));
}

#[test]
fn area_and_orientation() {
    let ccw = pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)]);
    let cw: Vec<Point> = ccw.iter().rev().copied().collect();
    assert!((signed_area(&ccw) - 2.0).abs() < 1e-12);
    assert!((signed_area(&cw) + 2.0).abs() < 1e-12);
    assert!((polygon_area(&cw) - 2.0).abs() < 1e-12);
    assert_eq!(signed_area(&ccw[..2]), 0.0);
}

#[test]
fn angles_between_vectors() {
    let right = interior_angle(vector![1.0, 0.0], vector![0.0, 3.0]);
    assert!((right - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    let straight = interior_angle(vector![1.0, 0.0], vector![-2.0, 0.0]);
    assert!((straight - std::f64::consts::PI).abs() < 1e-12);
    let same = interior_angle(vector![1.0, 1.0], vector![2.0, 2.0]);
    assert!(same.abs() < 1e-6);
}

#[test]
fn triangle_membership_any_orientation() {
    let (a, b, c) = (
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
    );
    let inside = Point::new(0.2, 0.2);
    let edge = Point::new(0.5, 0.0);
    let outside = Point::new(0.8, 0.8);
    for (x, y, z) in [(a, b, c), (a, c, b)] {
        assert!(point_in_triangle(inside, x, y, z, 0.0));
        assert!(point_in_triangle(edge, x, y, z, 0.0));
        assert!(!point_in_triangle(outside, x, y, z, 0.0));
    }
}
