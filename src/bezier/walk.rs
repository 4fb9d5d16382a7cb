/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::curve::*;
use crate::consts::*;
use crate::error::*;
use crate::geo::*;

///
/// Iterator over the points of a curve at evenly spaced positions
///
/// Produced by `walk_curve`. The walk is lazy and finite, and can be rewound to the start
/// of the curve with `restart`.
///
#[derive(Clone)]
pub struct CurveWalk<'a, C: BezierCurve> {
    curve: &'a C,
    step: f64,
    next_index: usize,
}

impl<'a, C: BezierCurve> CurveWalk<'a, C> {
    ///
    /// Rewinds this walk to the start of the curve
    ///
    pub fn restart(&mut self) {
        self.next_index = 0;
    }
}

impl<'a, C: BezierCurve> Iterator for CurveWalk<'a, C> {
    type Item = Point2D;

    fn next(&mut self) -> Option<Point2D> {
        let t = (self.next_index as f64) * self.step;

        // A final position within rounding error of the end of the curve still counts as on
        // it, and is clamped onto the endpoint rather than extrapolating past it
        if t > 1.0 + SMALL_T_DISTANCE {
            None
        } else {
            self.next_index += 1;

            Some(self.curve.point_at_pos(t.min(1.0)))
        }
    }
}

///
/// Walks a curve in steps of `step`, yielding the evaluated point at position 0, step,
/// 2*step and so on for as long as the position stays on the curve
///
/// Fails with `CurveError::InvalidStepSize` unless the step lies in (0, 1]. Steps that
/// divide the interval exactly finish with the curve's end point.
///
pub fn walk_curve<C: BezierCurve>(curve: &C, step: f64) -> Result<CurveWalk<'_, C>, CurveError> {
    if step > 0.0 && step <= 1.0 {
        Ok(CurveWalk {
            curve,
            step,
            next_index: 0,
        })
    } else {
        Err(CurveError::InvalidStepSize(step))
    }
}
