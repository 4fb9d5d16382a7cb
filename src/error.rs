/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::Point2D;

use thiserror::Error;

///
/// Errors produced when a curve operation is given invalid input
///
/// Every variant is a local, caller-recoverable condition: validation happens at the
/// boundary of the operation that needs the invariant and is reported immediately, with no
/// retrying or silent clamping inside the library. Numerically degenerate inputs (zero
/// derivatives, single-point bounding boxes, coincident control points) are not errors and
/// have well-defined results.
///
#[derive(Clone, Copy, PartialEq, Debug, Error)]
pub enum CurveError {
    /// A bezier curve needs at least two control points to be defined
    #[error("a bezier curve needs at least 2 control points ({0} supplied)")]
    NotEnoughControlPoints(usize),

    /// Curve walks take steps of between 0 (exclusive) and 1 (inclusive)
    #[error("walk step size must be greater than 0 and at most 1 ({0} supplied)")]
    InvalidStepSize(f64),

    /// The trapezoid rule needs at least two speed samples to sum
    #[error("arc length estimation needs at least 2 samples ({0} supplied)")]
    NotEnoughSamples(usize),

    /// A distance query was made for a point before the start or past the end of a curve
    #[error("distance {distance} lies outside this curve (total length {total_length})")]
    DistanceOutOfRange { distance: f64, total_length: f64 },

    /// A bounding box was constructed with its corners in the wrong order
    #[error("bounding box minimum corner {min:?} exceeds maximum corner {max:?}")]
    InvalidBoundingBox { min: Point2D, max: Point2D },
}
