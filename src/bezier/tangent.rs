/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::curve::*;
use crate::consts::*;
use crate::geo::*;

///
/// Trait implemented by bezier curves whose direction of travel can be queried
///
pub trait TangentCurve: BezierCurve {
    ///
    /// The unit tangent of this curve at t
    ///
    /// Where the curve is stationary (the derivative magnitude is below `ZERO_MAGNITUDE`)
    /// there is no direction of travel to report, and the zero vector is returned instead
    /// of dividing by a near-zero length.
    ///
    fn tangent_at_pos(&self, t: f64) -> Point2D {
        let derivative = self.derivative_at_pos(t);

        if derivative.magnitude() < ZERO_MAGNITUDE {
            Point2D(0.0, 0.0)
        } else {
            derivative.to_unit_vector()
        }
    }
}

impl<C: BezierCurve> TangentCurve for C {}
