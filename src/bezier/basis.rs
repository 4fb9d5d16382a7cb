/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

use smallvec::SmallVec;

/// Working buffer for the De Casteljau reductions (curves up to degree 7 stay on the stack)
pub type PointBuffer = SmallVec<[Point2D; 8]>;

///
/// Linearly interpolates between two points
///
/// This is the single reduction step of De Casteljau's algorithm. `t` can lie outside
/// [0, 1], in which case the result extrapolates beyond the two points.
///
#[inline]
pub fn lerp(p1: Point2D, p2: Point2D, t: f64) -> Point2D {
    p1 + (p2 - p1) * t
}

///
/// Evaluates a bezier curve of any degree at position t using De Casteljau's algorithm
///
/// Every adjacent pair of control points is interpolated at ratio `t`, producing a list one
/// element shorter, until a single point remains. This avoids the catastrophic cancellation
/// that expanding the polynomial coefficients invites at higher degrees, and needs no
/// per-degree formula.
///
/// A single control point, or a list where all the control points coincide, evaluates to
/// that point for any `t`.
///
pub fn de_casteljau(points: &[Point2D], t: f64) -> Point2D {
    test_assert!(!points.is_empty());

    let mut buffer = PointBuffer::from_slice(points);
    let count = buffer.len();

    for round in 1..count {
        for idx in 0..(count - round) {
            buffer[idx] = lerp(buffer[idx], buffer[idx + 1], t);
        }
    }

    buffer[0]
}

///
/// Splits a bezier curve of any degree at position t, returning the control points of the
/// two halves
///
/// The same reduction rounds as `de_casteljau` are run to completion; the first element
/// retained after each round belongs to the left half and the last to the right half.
/// Concatenated, the two halves trace exactly the same shape as the original curve, with
/// the left half covering [0, t] and the right half covering [t, 1].
///
pub fn de_casteljau_split(points: &[Point2D], t: f64) -> (Vec<Point2D>, Vec<Point2D>) {
    test_assert!(!points.is_empty());

    let count = points.len();
    let mut buffer = PointBuffer::from_slice(points);
    let mut left = Vec::with_capacity(count);
    let mut right = Vec::with_capacity(count);

    left.push(buffer[0]);
    right.push(buffer[count - 1]);

    for round in 1..count {
        for idx in 0..(count - round) {
            buffer[idx] = lerp(buffer[idx], buffer[idx + 1], t);
        }

        left.push(buffer[0]);
        right.push(buffer[count - round - 1]);
    }

    right.reverse();

    (left, right)
}

///
/// The Bernstein weighted basis function for a linear bezier curve
///
#[inline]
pub fn basis_linear(t: f64, p0: Point2D, p1: Point2D) -> Point2D {
    lerp(p0, p1, t)
}

///
/// The Bernstein weighted basis function for a quadratic bezier curve
///
#[inline]
pub fn basis_quadratic(t: f64, p0: Point2D, p1: Point2D, p2: Point2D) -> Point2D {
    let u = 1.0 - t;

    p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
}

///
/// The Bernstein weighted basis function for a cubic bezier curve
///
#[inline]
pub fn basis_cubic(t: f64, p0: Point2D, p1: Point2D, p2: Point2D, p3: Point2D) -> Point2D {
    let u = 1.0 - t;

    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

///
/// The Bernstein weighted basis function for a quartic bezier curve
///
#[inline]
pub fn basis_quartic(t: f64, p0: Point2D, p1: Point2D, p2: Point2D, p3: Point2D, p4: Point2D) -> Point2D {
    let u = 1.0 - t;
    let (u2, t2) = (u * u, t * t);

    p0 * (u2 * u2) + p1 * (4.0 * u2 * u * t) + p2 * (6.0 * u2 * t2) + p3 * (4.0 * u * t2 * t) + p4 * (t2 * t2)
}

///
/// The Bernstein weighted basis function for a quintic bezier curve
///
#[inline]
pub fn basis_quintic(t: f64, p0: Point2D, p1: Point2D, p2: Point2D, p3: Point2D, p4: Point2D, p5: Point2D) -> Point2D {
    let u = 1.0 - t;
    let (u2, t2) = (u * u, t * t);

    p0 * (u2 * u2 * u)
        + p1 * (5.0 * u2 * u2 * t)
        + p2 * (10.0 * u2 * u * t2)
        + p3 * (10.0 * u2 * t2 * t)
        + p4 * (5.0 * u * t2 * t2)
        + p5 * (t2 * t2 * t)
}
