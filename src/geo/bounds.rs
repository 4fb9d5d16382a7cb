/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::point::*;
use crate::error::*;

///
/// An axis-aligned bounding rectangle
///
/// The minimum corner never exceeds the maximum corner on either axis: `new` rejects
/// corners in the wrong order, so every `Bounds` value can be assumed well-ordered.
/// Degenerate boxes whose corners coincide are valid and have zero width or height.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Bounds {
    min: Point2D,
    max: Point2D,
}

impl Bounds {
    ///
    /// Creates a bounding box from its minimum and maximum corners
    ///
    /// Fails with `CurveError::InvalidBoundingBox` if `min` exceeds `max` on either axis.
    ///
    pub fn new(min: Point2D, max: Point2D) -> Result<Bounds, CurveError> {
        if min.x() <= max.x() && min.y() <= max.y() {
            Ok(Bounds { min, max })
        } else {
            Err(CurveError::InvalidBoundingBox { min, max })
        }
    }

    ///
    /// The smallest box containing every point produced by an iterator
    ///
    /// An iterator that produces nothing results in a degenerate box at the origin.
    ///
    pub fn from_points<PointIter: IntoIterator<Item = Point2D>>(points: PointIter) -> Bounds {
        let mut points = points.into_iter();
        let initial = points.next().unwrap_or(Point2D(0.0, 0.0));

        let (min, max) = points.fold((initial, initial), |(min, max), point| {
            (min.lowest(&point), max.highest(&point))
        });

        Bounds { min, max }
    }

    /// The minimum corner of this box
    #[inline]
    pub fn min(&self) -> Point2D {
        self.min
    }

    /// The maximum corner of this box
    #[inline]
    pub fn max(&self) -> Point2D {
        self.max
    }

    /// The extent of this box along the x axis
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    /// The extent of this box along the y axis
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }

    ///
    /// The length of the longest side of this box
    ///
    #[inline]
    pub fn longest_side(&self) -> f64 {
        self.width().max(self.height())
    }

    ///
    /// True if this box and a target box cover any common area
    ///
    /// The test is an interval overlap on each axis independently; boxes that only touch
    /// along an edge or at a corner count as overlapping.
    ///
    pub fn overlaps(&self, target: &Bounds) -> bool {
        self.min.x() <= target.max.x()
            && target.min.x() <= self.max.x()
            && self.min.y() <= target.max.y()
            && target.min.y() <= self.max.y()
    }

    ///
    /// The smallest box covering both this box and a target box
    ///
    pub fn union(&self, target: &Bounds) -> Bounds {
        Bounds {
            min: self.min.lowest(&target.min),
            max: self.max.highest(&target.max),
        }
    }
}
