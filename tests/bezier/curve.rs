/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use bezier2d::bezier::*;
use bezier2d::CurveError;

fn approx_equal(p1: Point2D, p2: Point2D) -> bool {
    p1.distance_to(&p2) < 1e-9
}

fn degree_seven_curve() -> Bezier {
    Bezier::from_points(vec![
        Point2D(0.0, 0.0),
        Point2D(1.0, 5.0),
        Point2D(2.0, -3.0),
        Point2D(3.0, 4.0),
        Point2D(4.0, 1.0),
        Point2D(5.0, -2.0),
        Point2D(6.0, 3.0),
        Point2D(7.0, 0.0),
    ])
    .unwrap()
}

#[test]
fn needs_at_least_two_points() {
    assert!(matches!(
        Bezier::from_points(vec![]),
        Err(CurveError::NotEnoughControlPoints(0))
    ));
    assert!(matches!(
        Bezier::from_points(vec![Point2D(1.0, 1.0)]),
        Err(CurveError::NotEnoughControlPoints(1))
    ));
    assert!(Bezier::from_points(vec![Point2D(1.0, 1.0), Point2D(2.0, 2.0)]).is_ok());
}

#[test]
fn evaluates_to_endpoints_at_0_and_1() {
    let curve = degree_seven_curve();

    assert!(curve.degree() == 7);
    assert!(approx_equal(curve.point_at_pos(0.0), curve.start_point()));
    assert!(approx_equal(curve.point_at_pos(1.0), curve.end_point()));
}

#[test]
fn extrapolates_outside_the_unit_interval() {
    let curve = Bezier::from_points(vec![Point2D(0.0, 0.0), Point2D(2.0, 2.0)]).unwrap();

    assert!(approx_equal(curve.point_at_pos(-0.5), Point2D(-1.0, -1.0)));
    assert!(approx_equal(curve.point_at_pos(1.5), Point2D(3.0, 3.0)));
}

#[test]
fn derivative_of_a_line_is_constant() {
    let curve = Bezier::from_points(vec![Point2D(0.0, 0.0), Point2D(2.0, 4.0)]).unwrap();

    assert!(approx_equal(curve.derivative_at_pos(0.0), Point2D(2.0, 4.0)));
    assert!(approx_equal(curve.derivative_at_pos(0.7), Point2D(2.0, 4.0)));
}

#[test]
fn subdivision_retraces_the_original() {
    let curve = degree_seven_curve();
    let split_at = 0.4;
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

#[test]
fn subdivision_outside_the_unit_interval_is_consistent() {
    let curve = Bezier::from_points(vec![
        Point2D(0.0, 0.0),
        Point2D(25.0, 120.0),
        Point2D(75.0, 80.0),
        Point2D(100.0, 0.0),
    ])
    .unwrap();
    let (left, _right) = curve.subdivide(1.5);

    // The left piece covers [0, 1.5] of the original curve
    for idx in 0..=10 {
        let s = (idx as f64) / 10.0;

        assert!(approx_equal(left.point_at_pos(s), curve.point_at_pos(s * 1.5)));
    }
}

#[test]
fn subdivision_at_zero_leaves_a_degenerate_left_piece() {
    let curve = degree_seven_curve();
    let (left, right) = curve.subdivide(0.0);

    assert!(approx_equal(left.point_at_pos(0.5), curve.start_point()));
    assert!(approx_equal(right.point_at_pos(0.5), curve.point_at_pos(0.5)));
}

#[test]
fn sampled_bounding_box_contains_the_curve() {
    let curve = degree_seven_curve();
    let bounds = curve.bounding_box();

    for idx in 0..=500 {
        let t = (idx as f64) / 500.0;
        let point = curve.point_at_pos(t);

        // The box is fitted by sampling, so allow a sliver of slack between samples
        assert!(point.x() >= bounds.min().x() - 1e-3 && point.x() <= bounds.max().x() + 1e-3);
        assert!(point.y() >= bounds.min().y() - 1e-3 && point.y() <= bounds.max().y() + 1e-3);
    }
}
