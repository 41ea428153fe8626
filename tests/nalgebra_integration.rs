//! Integration tests building curves from nalgebra points and vectors.
//!
//! nalgebra's fixed-size types convert to and from the `[T; D]` samples
//! this crate works with, so no wrapper types are needed.

use approx::assert_relative_eq;
use nalgebra::{Point3, Vector2};
use sample_bspline::prelude::*;

fn helix() -> Vec<Point3<f64>> {
    (0..9)
        .map(|i| {
            let a = i as f64 * 0.7;
            Point3::new(a.cos(), a.sin(), 0.25 * i as f64)
        })
        .collect()
}

fn to_samples(points: &[Point3<f64>]) -> Vec<[f64; 3]> {
    points.iter().map(|p| p.coords.into()).collect()
}

#[test]
fn test_point3_end_points() {
    let points = helix();
    let curve =
        build_spline(3, &to_samples(&points), None, &BuildOptions::default())
            .unwrap();

    let start = Point3::from(curve.evaluate(0.0, 0).unwrap());
    let end = Point3::from(curve.evaluate(8.0, 0).unwrap());

    assert_relative_eq!(start, points[0], epsilon = 1e-12);
    assert_relative_eq!(end, points[8], epsilon = 1e-12);
}

#[test]
fn test_point3_follows_samples() {
    let points = helix();
    let curve =
        build_spline(3, &to_samples(&points), None, &BuildOptions::default())
            .unwrap();

    // A cubic B-spline approximates interior samples without passing
    // through them; it stays within the convex hull of its neighbours.
    for (i, point) in points.iter().enumerate() {
        let on_curve = Point3::from(curve.evaluate(i as f64, 0).unwrap());
        assert!((on_curve - point).norm() < 0.5);
    }
}

#[test]
fn test_vector2_straight_line_has_constant_tangent() {
    let direction = Vector2::new(3.0, -1.0);
    let samples: Vec<[f64; 2]> =
        (0..6).map(|i| (direction * i as f64).into()).collect();

    for degree in 1..=4 {
        let curve =
            build_spline(degree, &samples, None, &BuildOptions::default())
                .unwrap();
        for t in [0.0, 0.5, 2.25, 5.0] {
            let tangent = Vector2::from(curve.evaluate(t, 1).unwrap());
            assert_relative_eq!(tangent, direction, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_vector2_round_trip() {
    let samples: Vec<[f32; 2]> = [
        Vector2::new(0.0f32, 0.0),
        Vector2::new(1.0, 2.0),
        Vector2::new(2.0, 1.0),
        Vector2::new(3.0, 3.0),
    ]
    .iter()
    .map(|&v| v.into())
    .collect();

    let curve = build_spline(
        2,
        &samples,
        None,
        &BuildOptions::default().with_extrapolate(false),
    )
    .unwrap();

    let start = Vector2::from(curve.evaluate(0.0, 0).unwrap());
    let end = Vector2::from(curve.evaluate(3.0, 0).unwrap());
    assert_relative_eq!(start, Vector2::new(0.0, 0.0), epsilon = 1e-5);
    assert_relative_eq!(end, Vector2::new(3.0, 3.0), epsilon = 1e-5);
}
