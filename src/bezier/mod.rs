/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Routines for describing, querying and measuring bezier curves
//!
//! ```
//! # use bezier2d::bezier::*;
//! #
//! let curve           = CubicBezier::new(Point2D(1.0, 2.0), Point2D(2.0, 0.0), Point2D(3.0, 5.0), Point2D(4.0, 2.0));
//!
//! let mid_point       = curve.point_at_pos(0.5);
//! let all_points      = walk_curve(&curve, 0.1)?.collect::<Vec<_>>();
//! let length          = curve_length(&curve, 100)?;
//! let intersections   = curve_intersects_curve(&curve, &LinearBezier::new(Point2D(1.0, 1.0), Point2D(4.0, 4.0)), 0.01);
//! # Ok::<(), bezier2d::CurveError>(())
//! ```
//!
//! Anything that implements the `BezierCurve` trait can be manipulated by the functions in
//! this module. The fixed-degree types (`LinearBezier`, `QuadraticBezier`, `CubicBezier`,
//! `QuarticBezier`, `QuinticBezier`) are closed-form implementations for the degrees that
//! have practical formulas; the `Bezier` type represents a curve of any degree and runs on
//! the generic De Casteljau routines in `basis`.
//!
//! The higher-order operations (`curve_length` and the other arc length queries,
//! `curve_intersects_curve`, `walk_curve`, the tangent and normal traits) are written once
//! against the trait and work uniformly across every curve implementation.
//!

mod basis;
mod bounds;
mod curve;
mod derivative;
mod fixed;
mod intersection;
mod length;
mod normal;
mod tangent;
mod walk;

pub use self::basis::*;
pub use self::curve::*;
pub use self::derivative::*;
pub use self::fixed::*;
pub use self::intersection::*;
pub use self::length::*;
pub use self::normal::*;
pub use self::tangent::*;
pub use self::walk::*;

pub use super::geo::*;
