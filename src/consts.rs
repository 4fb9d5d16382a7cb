/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Magnitude below which a derivative vector is considered to have vanished (the tangent at
/// such a point is reported as the zero vector rather than dividing by a near-zero length)
pub const ZERO_MAGNITUDE: f64 = 1e-10;

/// Distances along a curve that differ by less than this are considered the same distance
pub const SMALL_DISTANCE: f64 = 1e-10;

/// Difference between 't' values on a bezier curve for values considered the same
pub const SMALL_T_DISTANCE: f64 = 1e-9;

/// Number of speed samples used for arc length estimation when the caller has no particular
/// accuracy requirement
pub const DEFAULT_ARC_SAMPLES: usize = 100;

/// Recursion depth limit for the subdivision intersection search
pub const DEFAULT_MAX_DEPTH: usize = 16;
