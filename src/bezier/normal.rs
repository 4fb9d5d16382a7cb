/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::tangent::*;
use crate::geo::*;

///
/// Trait implemented by bezier curves where the normal can be computed
///
pub trait NormalCurve: TangentCurve {
    ///
    /// The unit normal of this curve at t
    ///
    /// The normal is the tangent rotated a quarter turn counter-clockwise, so it is the
    /// zero vector wherever the tangent is.
    ///
    fn normal_at_pos(&self, t: f64) -> Point2D {
        let tangent = self.tangent_at_pos(t);

        Point2D(-tangent.y(), tangent.x())
    }
}

impl<C: TangentCurve> NormalCurve for C {}
