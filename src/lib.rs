/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # bezier2d
//!
//! `bezier2d` is a library of routines for working with 2D bezier curves of any degree:
//! evaluating them, subdividing them, measuring distances along them and finding the points
//! where two curves cross.
//!
//! ```
//! use bezier2d::bezier::*;
//!
//! let curve       = CubicBezier::new(Point2D(0.0, 0.0), Point2D(25.0, 120.0), Point2D(75.0, 80.0), Point2D(100.0, 0.0));
//!
//! let mid_point   = curve.point_at_pos(0.5);
//! let length      = curve_length(&curve, 100)?;
//! let halfway     = point_at_distance(&curve, length / 2.0, 100)?;
//! let crossings   = curve_intersects_curve(&curve, &LinearBezier::new(Point2D(0.0, 50.0), Point2D(100.0, 50.0)), 0.01);
//! # Ok::<(), bezier2d::CurveError>(())
//! ```
//!
//! Anything that implements the `BezierCurve` trait can be used with the routines in the
//! `bezier` module. The fixed-degree types (`LinearBezier` through `QuinticBezier`) evaluate
//! through their closed forms; the `Bezier` type accepts any number of control points and
//! evaluates through De Casteljau's algorithm, so the two can be mixed freely.
//!

#[macro_use]
mod test_assert;

pub mod bezier;
pub mod geo;

mod consts;
mod error;

pub use self::consts::*;
pub use self::error::*;
pub use self::geo::*;
