/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Closed-form curve types for degrees 1 to 5
//!
//! Each of these types is a specialization of the generic De Casteljau engine for a single
//! degree: positions and derivatives come from the Bernstein closed forms in `basis`, and
//! bounding boxes are exact, found by solving for the roots of the derivative on each axis.
//! They produce the same results as a `Bezier` built from the same control points.
//!

use super::basis::*;
use super::bounds::*;
use super::curve::*;
use crate::geo::*;

///
/// A straight line treated as a degree-1 bezier curve
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LinearBezier {
    points: [Point2D; 2],
}

impl LinearBezier {
    ///
    /// Creates a linear curve from its two endpoints
    ///
    pub fn new(p0: Point2D, p1: Point2D) -> LinearBezier {
        LinearBezier { points: [p0, p1] }
    }

    fn from_slice(points: &[Point2D]) -> LinearBezier {
        LinearBezier {
            points: [points[0], points[1]],
        }
    }
}

impl BezierCurve for LinearBezier {
    fn control_points(&self) -> Vec<Point2D> {
        self.points.to_vec()
    }

    fn degree(&self) -> usize {
        1
    }

    fn start_point(&self) -> Point2D {
        self.points[0]
    }

    fn end_point(&self) -> Point2D {
        self.points[1]
    }

    fn point_at_pos(&self, t: f64) -> Point2D {
        let [p0, p1] = self.points;

        basis_linear(t, p0, p1)
    }

    fn derivative_at_pos(&self, _t: f64) -> Point2D {
        let [p0, p1] = self.points;

        p1 - p0
    }

    fn subdivide(&self, t: f64) -> (LinearBezier, LinearBezier) {
        let (left, right) = de_casteljau_split(&self.points, t);

        (LinearBezier::from_slice(&left), LinearBezier::from_slice(&right))
    }

    fn bounding_box(&self) -> Bounds {
        exact_bounding_box(self)
    }
}

///
/// A degree-2 bezier curve, evaluated by its quadratic closed form
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct QuadraticBezier {
    points: [Point2D; 3],
}

impl QuadraticBezier {
    ///
    /// Creates a quadratic curve from its three control points
    ///
    pub fn new(p0: Point2D, p1: Point2D, p2: Point2D) -> QuadraticBezier {
        QuadraticBezier { points: [p0, p1, p2] }
    }

    fn from_slice(points: &[Point2D]) -> QuadraticBezier {
        QuadraticBezier {
            points: [points[0], points[1], points[2]],
        }
    }
}

impl BezierCurve for QuadraticBezier {
    fn control_points(&self) -> Vec<Point2D> {
        self.points.to_vec()
    }

    fn degree(&self) -> usize {
        2
    }

    fn start_point(&self) -> Point2D {
        self.points[0]
    }

    fn end_point(&self) -> Point2D {
        self.points[2]
    }

    fn point_at_pos(&self, t: f64) -> Point2D {
        let [p0, p1, p2] = self.points;

        basis_quadratic(t, p0, p1, p2)
    }

    fn derivative_at_pos(&self, t: f64) -> Point2D {
        let [p0, p1, p2] = self.points;
        let (d0, d1) = ((p1 - p0) * 2.0, (p2 - p1) * 2.0);

        basis_linear(t, d0, d1)
    }

    fn subdivide(&self, t: f64) -> (QuadraticBezier, QuadraticBezier) {
        let (left, right) = de_casteljau_split(&self.points, t);

        (QuadraticBezier::from_slice(&left), QuadraticBezier::from_slice(&right))
    }

    fn bounding_box(&self) -> Bounds {
        exact_bounding_box(self)
    }
}

///
/// A degree-3 bezier curve, evaluated by its cubic closed form
///
/// This is the degree most drawing and animation code works in.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CubicBezier {
    points: [Point2D; 4],
}

impl CubicBezier {
    ///
    /// Creates a cubic curve from its four control points
    ///
    pub fn new(p0: Point2D, p1: Point2D, p2: Point2D, p3: Point2D) -> CubicBezier {
        CubicBezier {
            points: [p0, p1, p2, p3],
        }
    }

    fn from_slice(points: &[Point2D]) -> CubicBezier {
        CubicBezier {
            points: [points[0], points[1], points[2], points[3]],
        }
    }
}

impl BezierCurve for CubicBezier {
    fn control_points(&self) -> Vec<Point2D> {
        self.points.to_vec()
    }

    fn degree(&self) -> usize {
        3
    }

    fn start_point(&self) -> Point2D {
        self.points[0]
    }

    fn end_point(&self) -> Point2D {
        self.points[3]
    }

    fn point_at_pos(&self, t: f64) -> Point2D {
        let [p0, p1, p2, p3] = self.points;

        basis_cubic(t, p0, p1, p2, p3)
    }

    fn derivative_at_pos(&self, t: f64) -> Point2D {
        let [p0, p1, p2, p3] = self.points;
        let (d0, d1, d2) = ((p1 - p0) * 3.0, (p2 - p1) * 3.0, (p3 - p2) * 3.0);

        basis_quadratic(t, d0, d1, d2)
    }

    fn subdivide(&self, t: f64) -> (CubicBezier, CubicBezier) {
        // Weights (from de casteljau)
        let [w1, w2, w3, w4] = self.points;
        let wn1 = lerp(w1, w2, t);
        let wn2 = lerp(w2, w3, t);
        let wn3 = lerp(w3, w4, t);

        // Further refine the weights
        let wnn1 = lerp(wn1, wn2, t);
        let wnn2 = lerp(wn2, wn3, t);

        // The point where the two halves join
        let join = lerp(wnn1, wnn2, t);

        (
            CubicBezier::new(w1, wn1, wnn1, join),
            CubicBezier::new(join, wnn2, wn3, w4),
        )
    }

    fn bounding_box(&self) -> Bounds {
        exact_bounding_box(self)
    }
}

///
/// A degree-4 bezier curve, evaluated by its quartic closed form
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct QuarticBezier {
    points: [Point2D; 5],
}

impl QuarticBezier {
    ///
    /// Creates a quartic curve from its five control points
    ///
    pub fn new(p0: Point2D, p1: Point2D, p2: Point2D, p3: Point2D, p4: Point2D) -> QuarticBezier {
        QuarticBezier {
            points: [p0, p1, p2, p3, p4],
        }
    }

    fn from_slice(points: &[Point2D]) -> QuarticBezier {
        QuarticBezier {
            points: [points[0], points[1], points[2], points[3], points[4]],
        }
    }
}

impl BezierCurve for QuarticBezier {
    fn control_points(&self) -> Vec<Point2D> {
        self.points.to_vec()
    }

    fn degree(&self) -> usize {
        4
    }

    fn start_point(&self) -> Point2D {
        self.points[0]
    }

    fn end_point(&self) -> Point2D {
        self.points[4]
    }

    fn point_at_pos(&self, t: f64) -> Point2D {
        let [p0, p1, p2, p3, p4] = self.points;

        basis_quartic(t, p0, p1, p2, p3, p4)
    }

    fn derivative_at_pos(&self, t: f64) -> Point2D {
        let [p0, p1, p2, p3, p4] = self.points;
        let (d0, d1, d2, d3) = (
            (p1 - p0) * 4.0,
            (p2 - p1) * 4.0,
            (p3 - p2) * 4.0,
            (p4 - p3) * 4.0,
        );

        basis_cubic(t, d0, d1, d2, d3)
    }

    fn subdivide(&self, t: f64) -> (QuarticBezier, QuarticBezier) {
        let (left, right) = de_casteljau_split(&self.points, t);

        (QuarticBezier::from_slice(&left), QuarticBezier::from_slice(&right))
    }

    fn bounding_box(&self) -> Bounds {
        exact_bounding_box(self)
    }
}

///
/// A degree-5 bezier curve, evaluated by its quintic closed form
///
/// This is the highest degree with an exact bounding box: the extremes of a quintic lie at
/// the roots of its quartic derivative, the last polynomial solvable in closed form.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct QuinticBezier {
    points: [Point2D; 6],
}

impl QuinticBezier {
    ///
    /// Creates a quintic curve from its six control points
    ///
    pub fn new(p0: Point2D, p1: Point2D, p2: Point2D, p3: Point2D, p4: Point2D, p5: Point2D) -> QuinticBezier {
        QuinticBezier {
            points: [p0, p1, p2, p3, p4, p5],
        }
    }

    fn from_slice(points: &[Point2D]) -> QuinticBezier {
        QuinticBezier {
            points: [points[0], points[1], points[2], points[3], points[4], points[5]],
        }
    }
}

impl BezierCurve for QuinticBezier {
    fn control_points(&self) -> Vec<Point2D> {
        self.points.to_vec()
    }

    fn degree(&self) -> usize {
        5
    }

    fn start_point(&self) -> Point2D {
        self.points[0]
    }

    fn end_point(&self) -> Point2D {
        self.points[5]
    }

    fn point_at_pos(&self, t: f64) -> Point2D {
        let [p0, p1, p2, p3, p4, p5] = self.points;

        basis_quintic(t, p0, p1, p2, p3, p4, p5)
    }

    fn derivative_at_pos(&self, t: f64) -> Point2D {
        let [p0, p1, p2, p3, p4, p5] = self.points;
        let (d0, d1, d2, d3, d4) = (
            (p1 - p0) * 5.0,
            (p2 - p1) * 5.0,
            (p3 - p2) * 5.0,
            (p4 - p3) * 5.0,
            (p5 - p4) * 5.0,
        );

        basis_quartic(t, d0, d1, d2, d3, d4)
    }

    fn subdivide(&self, t: f64) -> (QuinticBezier, QuinticBezier) {
        let (left, right) = de_casteljau_split(&self.points, t);

        (QuinticBezier::from_slice(&left), QuinticBezier::from_slice(&right))
    }

    fn bounding_box(&self) -> Bounds {
        exact_bounding_box(self)
    }
}
