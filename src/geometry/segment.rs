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

use crate::geometry::{Coordinate, Envelope};
use crate::kernel::intersection;
use crate::kernel::orientation::{self, Orientation};

/// A directed segment from `p0` to `p1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub p0: Coordinate,
    pub p1: Coordinate,
}

impl LineSegment {
    pub fn new(p0: Coordinate, p1: Coordinate) -> Self {
        LineSegment { p0, p1 }
    }

    pub fn length(&self) -> f64 {
        self.p0.distance(&self.p1)
    }

    pub fn is_zero_length(&self) -> bool {
        self.p0.equals_2d(&self.p1)
    }

    pub fn midpoint(&self) -> Coordinate {
        Coordinate::new((self.p0.x + self.p1.x) / 2.0, (self.p0.y + self.p1.y) / 2.0)
    }

    pub fn reverse(&self) -> LineSegment {
        LineSegment::new(self.p1, self.p0)
    }

    pub fn envelope(&self) -> Envelope {
        Envelope::new(&self.p0, &self.p1)
    }

    /// Side of this directed segment that `q` lies on.
    pub fn orientation_index(&self, q: &Coordinate) -> Orientation {
        orientation::index(&self.p0, &self.p1, q)
    }

    /// Position of the projection of `p` along the line, with 0 at `p0`
    /// and 1 at `p1`. Unbounded in both directions.
    pub fn project_factor(&self, p: &Coordinate) -> f64 {
        if p.equals_2d(&self.p0) {
            return 0.0;
        }
        if p.equals_2d(&self.p1) {
            return 1.0;
        }
        let dx = self.p1.x - self.p0.x;
        let dy = self.p1.y - self.p0.y;
        let len2 = dx * dx + dy * dy;
        if len2 <= 0.0 {
            return 0.0;
        }
        ((p.x - self.p0.x) * dx + (p.y - self.p0.y) * dy) / len2
    }

    /// Projection of `p` onto the infinite line through the segment.
    pub fn project(&self, p: &Coordinate) -> Coordinate {
        if p.equals_2d(&self.p0) || p.equals_2d(&self.p1) {
            return *p;
        }
        let r = self.project_factor(p);
        Coordinate::new(
            self.p0.x + r * (self.p1.x - self.p0.x),
            self.p0.y + r * (self.p1.y - self.p0.y),
        )
    }

    pub fn closest_point(&self, p: &Coordinate) -> Coordinate {
        let r = self.project_factor(p);
        if r > 0.0 && r < 1.0 {
            return self.project(p);
        }
        if self.p0.distance_sq(p) < self.p1.distance_sq(p) {
            self.p0
        } else {
            self.p1
        }
    }

    /// Distance from `p` to the nearest point of the segment.
    pub fn distance_to_point(&self, p: &Coordinate) -> f64 {
        point_to_segment_distance(p, &self.p0, &self.p1)
    }

    /// Distance from `p` to the infinite line through the segment.
    pub fn distance_perpendicular(&self, p: &Coordinate) -> f64 {
        if self.is_zero_length() {
            return self.p0.distance(p);
        }
        let dx = self.p1.x - self.p0.x;
        let dy = self.p1.y - self.p0.y;
        let len2 = dx * dx + dy * dy;
        let s = ((self.p0.y - p.y) * dx - (self.p0.x - p.x) * dy) / len2;
        s.abs() * len2.sqrt()
    }

    /// Perpendicular distance, negative when `p` is to the right.
    pub fn distance_perpendicular_oriented(&self, p: &Coordinate) -> f64 {
        if self.is_zero_length() {
            return self.p0.distance(p);
        }
        let dist = self.distance_perpendicular(p);
        if self.orientation_index(p) == Orientation::Clockwise {
            -dist
        } else {
            dist
        }
    }

    /// Crossing point of the two infinite lines, `None` when parallel.
    pub fn line_intersection(&self, other: &LineSegment) -> Option<Coordinate> {
        intersection::line_intersection(&self.p0, &self.p1, &other.p0, &other.p1)
    }
}

/// Distance from `p` to segment `ab`. A zero-length segment is a point.
pub fn point_to_segment_distance(p: &Coordinate, a: &Coordinate, b: &Coordinate) -> f64 {
    if a.equals_2d(b) {
        return p.distance(a);
    }
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len2 = dx * dx + dy * dy;
    let r = ((p.x - a.x) * dx + (p.y - a.y) * dy) / len2;
    if r <= 0.0 {
        return p.distance(a);
    }
    if r >= 1.0 {
        return p.distance(b);
    }
    let s = ((a.y - p.y) * dx - (a.x - p.x) * dy) / len2;
    s.abs() * len2.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> LineSegment {
        LineSegment::new(Coordinate::new(x0, y0), Coordinate::new(x1, y1))
    }

    #[test]
    fn projection_and_closest_point() {
        let s = seg(0.0, 0.0, 10.0, 0.0);
        let p = Coordinate::new(4.0, 3.0);
        assert_eq!(s.project_factor(&p), 0.4);
        assert_eq!(s.project(&p), Coordinate::new(4.0, 0.0));
        assert_eq!(s.closest_point(&Coordinate::new(-5.0, 1.0)), s.p0);
        assert_eq!(s.closest_point(&Coordinate::new(15.0, 1.0)), s.p1);
    }

    #[test]
    fn distances() {
        let s = seg(0.0, 0.0, 10.0, 0.0);
        assert_eq!(s.distance_to_point(&Coordinate::new(5.0, 3.0)), 3.0);
        assert_eq!(s.distance_to_point(&Coordinate::new(13.0, 4.0)), 5.0);
        assert_eq!(s.distance_perpendicular(&Coordinate::new(13.0, 4.0)), 4.0);
        assert_eq!(s.distance_perpendicular_oriented(&Coordinate::new(3.0, -2.0)), -2.0);
        assert_eq!(s.distance_perpendicular_oriented(&Coordinate::new(3.0, 2.0)), 2.0);
    }

    #[test]
    fn zero_length_segment_is_a_point() {
        let s = seg(1.0, 1.0, 1.0, 1.0);
        assert_eq!(s.distance_to_point(&Coordinate::new(4.0, 5.0)), 5.0);
        assert_eq!(s.project_factor(&Coordinate::new(4.0, 5.0)), 0.0);
    }

    #[test]
    fn lines_cross_beyond_segments() {
        let a = seg(0.0, 0.0, 1.0, 1.0);
        let b = seg(10.0, 0.0, 9.0, 1.0);
        let p = a.line_intersection(&b).unwrap();
        assert!((p.x - 5.0).abs() < 1e-12 && (p.y - 5.0).abs() < 1e-12);
        assert!(a.line_intersection(&seg(0.0, 1.0, 1.0, 2.0)).is_none());
    }
}
