// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A planar position with an optional elevation.
///
/// `z` is NaN when absent, which is distinct from an elevation of zero.
/// Equality and hashing look at `x` and `y` only; use [`Coordinate::equals_3d`]
/// when the elevation matters.
#[derive(Debug, Clone, Copy)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coordinate {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Coordinate { x, y, z: f64::NAN }
    }

    #[inline]
    pub const fn new_xyz(x: f64, y: f64, z: f64) -> Self {
        Coordinate { x, y, z }
    }

    #[inline]
    pub fn has_z(&self) -> bool {
        !self.z.is_nan()
    }

    /// The elevation, or `default` if absent.
    pub fn z_or(&self, default: f64) -> f64 {
        if self.has_z() { self.z } else { default }
    }

    /// Same position with the elevation replaced.
    pub fn with_z(&self, z: f64) -> Self {
        Coordinate { x: self.x, y: self.y, z }
    }

    #[inline]
    pub fn equals_2d(&self, other: &Coordinate) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Positions agree and elevations agree, treating two absent z as equal.
    pub fn equals_3d(&self, other: &Coordinate) -> bool {
        self.equals_2d(other)
            && (self.z == other.z || (self.z.is_nan() && other.z.is_nan()))
    }

    pub fn is_finite_2d(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance(&self, other: &Coordinate) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }

    pub fn distance_sq(&self, other: &Coordinate) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Lexicographic order on (x, y). Unordered (NaN) components compare equal.
    pub fn compare_2d(&self, other: &Coordinate) -> Ordering {
        match self.x.partial_cmp(&other.x) {
            Some(Ordering::Equal) | None => {
                self.y.partial_cmp(&other.y).unwrap_or(Ordering::Equal)
            }
            Some(ord) => ord,
        }
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Coordinate) -> bool {
        self.equals_2d(other)
    }
}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // +0.0 and -0.0 compare equal, so they must hash alike.
        let x = if self.x == 0.0 { 0.0 } else { self.x };
        let y = if self.y == 0.0 { 0.0 } else { self.y };
        x.to_bits().hash(state);
        y.to_bits().hash(state);
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Coordinate::new(x, y)
    }
}

impl From<(f64, f64, f64)> for Coordinate {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Coordinate::new_xyz(x, y, z)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_z() {
            write!(f, "({}, {}, {})", self.x, self.y, self.z)
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_z_is_not_zero() {
        let a = Coordinate::new(1.0, 2.0);
        let b = Coordinate::new_xyz(1.0, 2.0, 0.0);
        assert!(!a.has_z());
        assert!(b.has_z());
        assert_eq!(a, b);
        assert!(!a.equals_3d(&b));
        assert!(a.equals_3d(&Coordinate::new(1.0, 2.0)));
    }

    #[test]
    fn compare_is_x_then_y() {
        let a = Coordinate::new(0.0, 5.0);
        let b = Coordinate::new(1.0, 0.0);
        let c = Coordinate::new(1.0, 1.0);
        assert_eq!(a.compare_2d(&b), Ordering::Less);
        assert_eq!(c.compare_2d(&b), Ordering::Greater);
        assert_eq!(b.compare_2d(&b), Ordering::Equal);
    }
}
