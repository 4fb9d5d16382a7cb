/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Basic geometric value types
//!
//! `Point2D` is the coordinate type used throughout the library: an immutable pair of
//! 64-bit floats that doubles as a 2D vector. `Bounds` is an axis-aligned bounding
//! rectangle described by its two corners.
//!
//! Both are plain values: they are created by their constructors, compared by value and
//! never mutated.
//!

mod bounds;
mod point;

pub use self::bounds::*;
pub use self::point::*;
