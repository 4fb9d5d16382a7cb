/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::{Add, Mul, Neg, Sub};

///
/// A point or vector in 2D space
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Point2D(pub f64, pub f64);

impl Point2D {
    ///
    /// Creates a point from its x and y coordinates
    ///
    #[inline]
    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D(x, y)
    }

    /// The x coordinate of this point
    #[inline]
    pub fn x(&self) -> f64 {
        self.0
    }

    /// The y coordinate of this point
    #[inline]
    pub fn y(&self) -> f64 {
        self.1
    }

    ///
    /// The euclidean distance between this point and a target point
    ///
    #[inline]
    pub fn distance_to(&self, target: &Point2D) -> f64 {
        (*target - *self).magnitude()
    }

    ///
    /// The dot product of this point and a target, both treated as vectors
    ///
    #[inline]
    pub fn dot(&self, target: &Point2D) -> f64 {
        self.0 * target.0 + self.1 * target.1
    }

    ///
    /// The length of this point treated as a vector
    ///
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    ///
    /// A vector of length 1 pointing the same way as this one, or the zero vector if this
    /// vector has no length to divide by
    ///
    pub fn to_unit_vector(&self) -> Point2D {
        let magnitude = self.magnitude();

        if magnitude == 0.0 {
            Point2D(0.0, 0.0)
        } else {
            *self * (1.0 / magnitude)
        }
    }

    ///
    /// The point formed from the smallest x and y components of this point and a target
    ///
    #[inline]
    pub fn lowest(&self, target: &Point2D) -> Point2D {
        Point2D(self.0.min(target.0), self.1.min(target.1))
    }

    ///
    /// The point formed from the biggest x and y components of this point and a target
    ///
    #[inline]
    pub fn highest(&self, target: &Point2D) -> Point2D {
        Point2D(self.0.max(target.0), self.1.max(target.1))
    }
}

impl Add for Point2D {
    type Output = Point2D;

    #[inline]
    fn add(self, rhs: Point2D) -> Point2D {
        Point2D(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub for Point2D {
    type Output = Point2D;

    #[inline]
    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Point2D {
    type Output = Point2D;

    #[inline]
    fn mul(self, rhs: f64) -> Point2D {
        Point2D(self.0 * rhs, self.1 * rhs)
    }
}

impl Neg for Point2D {
    type Output = Point2D;

    #[inline]
    fn neg(self) -> Point2D {
        Point2D(-self.0, -self.1)
    }
}

impl From<(f64, f64)> for Point2D {
    #[inline]
    fn from((x, y): (f64, f64)) -> Point2D {
        Point2D(x, y)
    }
}

impl From<[f64; 2]> for Point2D {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Point2D {
        Point2D(x, y)
    }
}
