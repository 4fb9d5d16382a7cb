/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use bezier2d::bezier::*;

use rand::{thread_rng, Rng};

fn approx_equal(p1: Point2D, p2: Point2D) -> bool {
    p1.distance_to(&p2) < 1e-9
}

fn random_point<Rand: Rng>(rng: &mut Rand) -> Point2D {
    Point2D(rng.gen_range(-50.0..150.0), rng.gen_range(-50.0..150.0))
}

///
/// Checks that a closed-form curve agrees with the generic De Casteljau engine run over the
/// same control points, both for positions and velocities, inside and outside [0, 1]
///
fn assert_matches_generic_engine<C: BezierCurve>(curve: &C) {
    let points = curve.control_points();
    let derivative = derivative_points(&points);

    for idx in -5..=15 {
        let t = (idx as f64) / 10.0;

        assert!(
            approx_equal(curve.point_at_pos(t), de_casteljau(&points, t)),
            "position mismatch at t={} for degree {}",
            t,
            curve.degree()
        );
        assert!(
            approx_equal(curve.derivative_at_pos(t), de_casteljau(&derivative, t)),
            "velocity mismatch at t={} for degree {}",
            t,
            curve.degree()
        );
    }
}

fn assert_subdivision_retraces<C: BezierCurve>(curve: &C, split_at: f64) {
    let (left, right) = curve.subdivide(split_at);

    for idx in 0..=20 {
        let s = (idx as f64) / 20.0;

        assert!(approx_equal(left.point_at_pos(s), curve.point_at_pos(s * split_at)));
        assert!(approx_equal(
            right.point_at_pos(s),
            curve.point_at_pos(split_at + s * (1.0 - split_at))
        ));
    }
}

///
/// Checks that a bounding box both contains a dense sampling of the curve and is attained
/// by it (no side floats away from the curve)
///
fn assert_bounds_are_tight<C: BezierCurve>(curve: &C) {
    let bounds = curve.bounding_box();
    let samples = (0..=2000).map(|idx| curve.point_at_pos((idx as f64) / 2000.0)).collect::<Vec<_>>();

    for point in samples.iter() {
        assert!(point.x() >= bounds.min().x() - 1e-9 && point.x() <= bounds.max().x() + 1e-9);
        assert!(point.y() >= bounds.min().y() - 1e-9 && point.y() <= bounds.max().y() + 1e-9);
    }

    assert!(samples.iter().any(|point| (point.x() - bounds.min().x()).abs() < 1e-3));
    assert!(samples.iter().any(|point| (point.x() - bounds.max().x()).abs() < 1e-3));
    assert!(samples.iter().any(|point| (point.y() - bounds.min().y()).abs() < 1e-3));
    assert!(samples.iter().any(|point| (point.y() - bounds.max().y()).abs() < 1e-3));
}

#[test]
fn linear_matches_generic_engine() {
    let mut rng = thread_rng();

    for _ in 0..20 {
        let curve = LinearBezier::new(random_point(&mut rng), random_point(&mut rng));

        assert_matches_generic_engine(&curve);
    }
}

#[test]
fn quadratic_matches_generic_engine() {
    let mut rng = thread_rng();

    for _ in 0..20 {
        let curve = QuadraticBezier::new(random_point(&mut rng), random_point(&mut rng), random_point(&mut rng));

        assert_matches_generic_engine(&curve);
    }
}

#[test]
fn cubic_matches_generic_engine() {
    let mut rng = thread_rng();

    for _ in 0..20 {
        let curve = CubicBezier::new(
            random_point(&mut rng),
            random_point(&mut rng),
            random_point(&mut rng),
            random_point(&mut rng),
        );

        assert_matches_generic_engine(&curve);
    }
}

#[test]
fn quartic_matches_generic_engine() {
    let mut rng = thread_rng();

    for _ in 0..20 {
        let curve = QuarticBezier::new(
            random_point(&mut rng),
            random_point(&mut rng),
            random_point(&mut rng),
            random_point(&mut rng),
            random_point(&mut rng),
        );

        assert_matches_generic_engine(&curve);
    }
}

#[test]
fn quintic_matches_generic_engine() {
    let mut rng = thread_rng();

    for _ in 0..20 {
        let curve = QuinticBezier::new(
            random_point(&mut rng),
            random_point(&mut rng),
            random_point(&mut rng),
            random_point(&mut rng),
            random_point(&mut rng),
            random_point(&mut rng),
        );

        assert_matches_generic_engine(&curve);
    }
}

#[test]
fn every_degree_starts_and_ends_on_its_endpoints() {
    let p = |x: f64, y: f64| Point2D(x, y);

    let linear = LinearBezier::new(p(0.0, 0.0), p(5.0, 1.0));
    let quadratic = QuadraticBezier::new(p(0.0, 0.0), p(2.0, 4.0), p(5.0, 1.0));
    let cubic = CubicBezier::new(p(0.0, 0.0), p(1.0, 3.0), p(4.0, 3.0), p(5.0, 1.0));
    let quartic = QuarticBezier::new(p(0.0, 0.0), p(1.0, 3.0), p(2.5, -2.0), p(4.0, 3.0), p(5.0, 1.0));
    let quintic = QuinticBezier::new(p(0.0, 0.0), p(1.0, 3.0), p(2.0, -2.0), p(3.0, 4.0), p(4.0, 3.0), p(5.0, 1.0));

    assert!(approx_equal(linear.point_at_pos(0.0), linear.start_point()));
    assert!(approx_equal(linear.point_at_pos(1.0), linear.end_point()));
    assert!(approx_equal(quadratic.point_at_pos(0.0), quadratic.start_point()));
    assert!(approx_equal(quadratic.point_at_pos(1.0), quadratic.end_point()));
    assert!(approx_equal(cubic.point_at_pos(0.0), cubic.start_point()));
    assert!(approx_equal(cubic.point_at_pos(1.0), cubic.end_point()));
    assert!(approx_equal(quartic.point_at_pos(0.0), quartic.start_point()));
    assert!(approx_equal(quartic.point_at_pos(1.0), quartic.end_point()));
    assert!(approx_equal(quintic.point_at_pos(0.0), quintic.start_point()));
    assert!(approx_equal(quintic.point_at_pos(1.0), quintic.end_point()));
}

#[test]
fn cubic_derivative_at_the_start_points_at_the_first_control_point() {
    let curve = CubicBezier::new(Point2D(0.0, 0.0), Point2D(1.0, 2.0), Point2D(3.0, 2.0), Point2D(4.0, 0.0));

    assert!(approx_equal(curve.derivative_at_pos(0.0), Point2D(3.0, 6.0)));
    assert!(approx_equal(curve.derivative_at_pos(1.0), Point2D(3.0, -6.0)));
}

#[test]
fn cubic_subdivision_retraces() {
    let curve = CubicBezier::new(Point2D(0.0, 0.0), Point2D(25.0, 120.0), Point2D(75.0, 80.0), Point2D(100.0, 0.0));

    assert_subdivision_retraces(&curve, 0.3);
    assert_subdivision_retraces(&curve, 0.5);
    assert_subdivision_retraces(&curve, 0.9);
}

#[test]
fn quintic_subdivision_retraces() {
    let curve = QuinticBezier::new(
        Point2D(0.0, 0.0),
        Point2D(1.0, 3.0),
        Point2D(2.0, -2.0),
        Point2D(3.0, 4.0),
        Point2D(4.0, 3.0),
        Point2D(5.0, 1.0),
    );

    assert_subdivision_retraces(&curve, 0.25);
    assert_subdivision_retraces(&curve, 0.7);
}

#[test]
fn quadratic_bounding_box_is_exact() {
    // Symmetric arch: the y extreme is at t=0.5, halfway up to the middle control point
    let curve = QuadraticBezier::new(Point2D(0.0, 0.0), Point2D(50.0, 100.0), Point2D(100.0, 0.0));
    let bounds = curve.bounding_box();

    assert!(approx_equal(bounds.min(), Point2D(0.0, 0.0)));
    assert!(approx_equal(bounds.max(), Point2D(100.0, 50.0)));
}

#[test]
fn linear_bounding_box_is_the_segment_box() {
    let curve = LinearBezier::new(Point2D(3.0, 8.0), Point2D(1.0, 2.0));
    let bounds = curve.bounding_box();

    assert!(approx_equal(bounds.min(), Point2D(1.0, 2.0)));
    assert!(approx_equal(bounds.max(), Point2D(3.0, 8.0)));
}

#[test]
fn cubic_bounding_box_is_tight() {
    let curve = CubicBezier::new(Point2D(0.0, 0.0), Point2D(25.0, 120.0), Point2D(75.0, 80.0), Point2D(100.0, 0.0));

    assert_bounds_are_tight(&curve);
}

#[test]
fn cubic_loop_bounding_box_is_tight() {
    // Control points cross over, so both x extremes lie in the interior
    let curve = CubicBezier::new(Point2D(0.0, 0.0), Point2D(3.0, 3.0), Point2D(-1.0, 3.0), Point2D(2.0, 0.0));

    assert_bounds_are_tight(&curve);
}

#[test]
fn quartic_bounding_box_is_tight() {
    let curve = QuarticBezier::new(
        Point2D(0.0, 0.0),
        Point2D(1.0, 3.0),
        Point2D(2.5, -2.0),
        Point2D(4.0, 3.0),
        Point2D(5.0, 1.0),
    );

    assert_bounds_are_tight(&curve);
}

#[test]
fn quintic_bounding_box_is_tight() {
    let curve = QuinticBezier::new(
        Point2D(0.0, 0.0),
        Point2D(1.0, 3.0),
        Point2D(2.0, -2.0),
        Point2D(3.0, 4.0),
        Point2D(4.0, 3.0),
        Point2D(5.0, 1.0),
    );

    assert_bounds_are_tight(&curve);
}
