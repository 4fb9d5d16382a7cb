/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::basis::*;
use super::bounds::*;
use super::derivative::*;
use crate::error::*;
use crate::geo::*;

///
/// Trait implemented by things that can be treated as a 2D bezier curve
///
/// A curve is an ordered sequence of at least two control points, parameterized over
/// [0, 1]. Evaluation extrapolates smoothly along the polynomial for positions outside
/// that range, so none of these operations can fail for any finite position.
///
/// Implementations are value types: `subdivide` returns new curves and nothing here ever
/// mutates the original.
///
pub trait BezierCurve: Clone + Sized {
    ///
    /// The control points that define this curve
    ///
    fn control_points(&self) -> Vec<Point2D>;

    ///
    /// The degree of this curve (one less than the number of control points)
    ///
    fn degree(&self) -> usize;

    /// The point where this curve starts (its first control point)
    fn start_point(&self) -> Point2D;

    /// The point where this curve ends (its last control point)
    fn end_point(&self) -> Point2D;

    ///
    /// The position of this curve at t
    ///
    fn point_at_pos(&self, t: f64) -> Point2D;

    ///
    /// The velocity (first derivative) vector of this curve at t
    ///
    fn derivative_at_pos(&self, t: f64) -> Point2D;

    ///
    /// Subdivides this curve at t, returning the piece covering [0, t] and the piece
    /// covering [t, 1]
    ///
    /// Positions outside [0, 1] produce degenerate or extrapolated (but still well-formed)
    /// pieces rather than failing.
    ///
    fn subdivide(&self, t: f64) -> (Self, Self);

    ///
    /// The axis-aligned bounding box of this curve over [0, 1]
    ///
    fn bounding_box(&self) -> Bounds;
}

///
/// A bezier curve of arbitrary degree
///
/// Stores however many control points it is given (two or more) and evaluates with De
/// Casteljau's algorithm, so it covers the degrees that have no closed-form type of their
/// own. For degrees 1 through 5 the fixed-degree types evaluate faster and produce exact
/// bounding boxes.
///
#[derive(Clone, PartialEq, Debug)]
pub struct Bezier {
    points: Vec<Point2D>,
}

impl Bezier {
    ///
    /// Creates a curve from an ordered list of control points
    ///
    /// Fails with `CurveError::NotEnoughControlPoints` if fewer than two points are
    /// supplied. The degree of the resulting curve is one less than the number of points.
    ///
    pub fn from_points(points: Vec<Point2D>) -> Result<Bezier, CurveError> {
        if points.len() < 2 {
            Err(CurveError::NotEnoughControlPoints(points.len()))
        } else {
            Ok(Bezier { points })
        }
    }
}

impl BezierCurve for Bezier {
    fn control_points(&self) -> Vec<Point2D> {
        self.points.clone()
    }

    fn degree(&self) -> usize {
        self.points.len() - 1
    }

    fn start_point(&self) -> Point2D {
        self.points[0]
    }

    fn end_point(&self) -> Point2D {
        self.points[self.points.len() - 1]
    }

    fn point_at_pos(&self, t: f64) -> Point2D {
        de_casteljau(&self.points, t)
    }

    fn derivative_at_pos(&self, t: f64) -> Point2D {
        de_casteljau(&derivative_points(&self.points), t)
    }

    fn subdivide(&self, t: f64) -> (Bezier, Bezier) {
        let (left, right) = de_casteljau_split(&self.points, t);

        (Bezier { points: left }, Bezier { points: right })
    }

    fn bounding_box(&self) -> Bounds {
        // Approximate: the extremes of an arbitrary-degree polynomial have no closed form,
        // so the box is fitted to a dense sampling of the curve
        sampled_bounding_box(self)
    }
}
