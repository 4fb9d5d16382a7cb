/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::curve::*;
use crate::consts::*;
use crate::error::*;
use crate::geo::*;

use itertools::Itertools;

///
/// A single cumulative arc length sample
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ArcLengthSample {
    /// Position on the curve
    pub t: f64,

    /// Distance travelled along the curve to reach `t`
    pub distance: f64,
}

///
/// Cumulative distance lookup table for a curve
///
/// Bezier arc length has no closed form, so distances are accumulated by trapezoidal
/// integration of the curve's speed at evenly spaced positions. Both fields of the samples
/// grow monotonically from `(0, 0)` to `(1, total length)`, which is what makes the table
/// binary-searchable by distance.
///
/// Tables are ephemeral: the arc length queries below build one, use it and throw it away,
/// so repeated queries against the same curve re-derive it each time. Callers that want to
/// amortize that cost can hold onto a table themselves.
///
#[derive(Clone, PartialEq, Debug)]
pub struct ArcLengthTable {
    samples: Vec<ArcLengthSample>,
}

impl ArcLengthTable {
    ///
    /// Measures a curve into a table with `samples + 1` entries
    ///
    /// Fails with `CurveError::NotEnoughSamples` if `samples` is below 2 (the trapezoid
    /// rule needs at least two speed readings to sum). Higher sample counts converge
    /// monotonically towards the true arc length; long or tightly-curved paths need more
    /// samples for the same accuracy.
    ///
    pub fn for_curve<C: BezierCurve>(curve: &C, samples: usize) -> Result<ArcLengthTable, CurveError> {
        if samples < 2 {
            return Err(CurveError::NotEnoughSamples(samples));
        }

        let step = 1.0 / (samples as f64);
        let speeds = (0..=samples).map(|idx| curve.derivative_at_pos((idx as f64) * step).magnitude());

        let mut table = Vec::with_capacity(samples + 1);
        let mut travelled = 0.0;

        table.push(ArcLengthSample { t: 0.0, distance: 0.0 });

        for (idx, (speed1, speed2)) in speeds.tuple_windows().enumerate() {
            travelled += (speed1 + speed2) * 0.5 * step;

            table.push(ArcLengthSample {
                t: ((idx + 1) as f64) * step,
                distance: travelled,
            });
        }

        test_assert!(table.windows(2).all(|pair| pair[0].distance <= pair[1].distance));

        Ok(ArcLengthTable { samples: table })
    }

    ///
    /// The total arc length of the measured curve
    ///
    pub fn total_length(&self) -> f64 {
        self.samples[self.samples.len() - 1].distance
    }

    ///
    /// The samples making up this table, in curve order
    ///
    pub fn samples(&self) -> &[ArcLengthSample] {
        &self.samples
    }

    ///
    /// The curve position corresponding to a distance along the curve
    ///
    /// Binary searches for the pair of samples whose distances straddle the target, then
    /// interpolates the position linearly between them. The speed is assumed near-uniform
    /// inside a single subinterval, so the interpolation error shrinks as the sample count
    /// grows. The distance must already be within `[0, total_length()]`.
    ///
    fn position_for_distance(&self, distance: f64) -> f64 {
        let mut lower = 0;
        let mut upper = self.samples.len() - 1;

        while upper - lower > 1 {
            let mid = (lower + upper) / 2;

            if self.samples[mid].distance <= distance {
                lower = mid;
            } else {
                upper = mid;
            }
        }

        let before = self.samples[lower];
        let after = self.samples[upper];
        let span = after.distance - before.distance;

        if span <= 0.0 {
            // Zero-speed subinterval: every position in it sits at the same distance
            before.t
        } else {
            before.t + (after.t - before.t) * ((distance - before.distance) / span)
        }
    }
}

///
/// The arc length of a curve, estimated by trapezoidal integration of its speed over
/// `samples` equal subintervals of [0, 1]
///
/// Fails with `CurveError::NotEnoughSamples` if `samples` is below 2. The result always
/// exceeds the straight-line distance between the endpoints for a curve that actually
/// bends; raising the sample count tightens the estimate.
///
pub fn curve_length<C: BezierCurve>(curve: &C, samples: usize) -> Result<f64, CurveError> {
    Ok(ArcLengthTable::for_curve(curve, samples)?.total_length())
}

///
/// The curve position that lies `distance` along the curve from its start
///
/// Returns exactly 0.0 for a zero distance and exactly 1.0 when the distance matches the
/// whole curve length to within `SMALL_DISTANCE`. Fails with `CurveError::DistanceOutOfRange`
/// for negative distances and for distances beyond the end of the curve, where "the end" is
/// measured with the same `samples` count used for the lookup table, so the bound and the
/// lookup always agree with each other.
///
/// For a fixed curve and sample count the result is non-decreasing in `distance`.
///
pub fn parameter_at_distance<C: BezierCurve>(curve: &C, distance: f64, samples: usize) -> Result<f64, CurveError> {
    let table = ArcLengthTable::for_curve(curve, samples)?;
    let total_length = table.total_length();

    // NaN distances fail the >= test and are rejected alongside negative ones
    if !(distance >= 0.0) || distance > total_length + SMALL_DISTANCE {
        return Err(CurveError::DistanceOutOfRange { distance, total_length });
    }

    if distance == 0.0 {
        Ok(0.0)
    } else if (total_length - distance).abs() <= SMALL_DISTANCE {
        Ok(1.0)
    } else {
        Ok(table.position_for_distance(distance))
    }
}

///
/// The point that lies `distance` along the curve from its start
///
/// Walking this at evenly spaced distances traverses the curve at constant speed, which is
/// not what evenly spaced positions do (the position parameter speeds up and slows down
/// with the spacing of the control points). Shares the failure modes of
/// `parameter_at_distance`.
///
pub fn point_at_distance<C: BezierCurve>(curve: &C, distance: f64, samples: usize) -> Result<Point2D, CurveError> {
    Ok(curve.point_at_pos(parameter_at_distance(curve, distance, samples)?))
}
