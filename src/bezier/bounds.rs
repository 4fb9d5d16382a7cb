/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::curve::*;
use super::derivative::*;
use crate::geo::*;

use roots::{find_roots_cubic, find_roots_linear, find_roots_quadratic, find_roots_quartic, Roots};
use smallvec::SmallVec;

/// Evaluation positions used when a curve's extremes cannot be solved for directly
const BOUNDS_SAMPLES: usize = 100;

///
/// The exact bounding box of a curve whose derivative has degree 4 or lower
///
/// The extremes of each axis lie where that axis of the derivative is zero (or at the
/// curve's endpoints). The derivative of a degree-n curve is a degree n-1 bezier curve;
/// rewriting one axis of it in the power basis turns the extreme-finding problem into a
/// polynomial root-finding one, solvable in closed form for anything up to a quintic curve.
///
pub(crate) fn exact_bounding_box<C: BezierCurve>(curve: &C) -> Bounds {
    let points = curve.control_points();
    let derivative = derivative_points(&points);

    let x_values = derivative.iter().map(|point| point.x()).collect::<SmallVec<[f64; 8]>>();
    let y_values = derivative.iter().map(|point| point.y()).collect::<SmallVec<[f64; 8]>>();

    let mut critical = bernstein_roots(&x_values);
    critical.extend(bernstein_roots(&y_values));

    bounding_box_at_positions(curve, critical)
}

///
/// Approximate bounding box for a curve of arbitrary degree, fitted by dense sampling
///
pub(crate) fn sampled_bounding_box<C: BezierCurve>(curve: &C) -> Bounds {
    let positions = (0..=BOUNDS_SAMPLES).map(|idx| (idx as f64) / (BOUNDS_SAMPLES as f64));

    Bounds::from_points(positions.map(|t| curve.point_at_pos(t)))
}

///
/// The box covering a curve's endpoints plus any of the supplied interior positions
///
fn bounding_box_at_positions<C: BezierCurve>(curve: &C, positions: SmallVec<[f64; 8]>) -> Bounds {
    let endpoints = [curve.start_point(), curve.end_point()];
    let interior = positions.into_iter().map(|t| curve.point_at_pos(t));

    Bounds::from_points(endpoints.iter().copied().chain(interior))
}

///
/// Positions strictly inside (0, 1) where a bezier polynomial with the given control
/// values crosses zero
///
/// The values are one axis of a derivative curve. Degrees up to 4 are supported, which
/// covers the derivative of every fixed-degree curve type.
///
fn bernstein_roots(values: &[f64]) -> SmallVec<[f64; 8]> {
    let roots = match *values {
        [_] => Roots::No([]),

        [d0, d1] => find_roots_linear(d1 - d0, d0),

        [d0, d1, d2] => find_roots_quadratic(d0 - 2.0 * d1 + d2, 2.0 * (d1 - d0), d0),

        [d0, d1, d2, d3] => find_roots_cubic(
            -d0 + 3.0 * d1 - 3.0 * d2 + d3,
            3.0 * d0 - 6.0 * d1 + 3.0 * d2,
            -3.0 * d0 + 3.0 * d1,
            d0,
        ),

        [d0, d1, d2, d3, d4] => find_roots_quartic(
            d0 - 4.0 * d1 + 6.0 * d2 - 4.0 * d3 + d4,
            -4.0 * d0 + 12.0 * d1 - 12.0 * d2 + 4.0 * d3,
            6.0 * d0 - 12.0 * d1 + 6.0 * d2,
            -4.0 * d0 + 4.0 * d1,
            d0,
        ),

        _ => Roots::No([]),
    };

    roots
        .as_ref()
        .iter()
        .copied()
        .filter(|t| *t > 0.0 && *t < 1.0)
        .collect()
}
