/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::basis::*;
use crate::geo::*;

use itertools::Itertools;

///
/// The control points of the derivative of a bezier curve
///
/// The derivative of a degree-n bezier curve is itself a bezier curve, of degree n-1, whose
/// control points are `n * (P[i+1] - P[i])`. Evaluating the returned points (with
/// `de_casteljau` or the closed forms) gives the velocity vector of the original curve.
///
pub fn derivative_points(points: &[Point2D]) -> PointBuffer {
    test_assert!(points.len() >= 2);

    let degree = (points.len() - 1) as f64;

    points
        .iter()
        .tuple_windows()
        .map(|(p1, p2)| (*p2 - *p1) * degree)
        .collect()
}
