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

use crate::geometry::Coordinate;

/// An axis-aligned bounding rectangle.
///
/// The empty envelope stores `min > max`, so every emptiness test is a plain
/// comparison and `expand_to_include` needs no special case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Default for Envelope {
    fn default() -> Self {
        Envelope::empty()
    }
}

impl Envelope {
    pub const fn empty() -> Self {
        Envelope {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Build the smallest envelope containing two points.
    pub fn new(p: &Coordinate, q: &Coordinate) -> Self {
        Envelope {
            min_x: p.x.min(q.x),
            min_y: p.y.min(q.y),
            max_x: p.x.max(q.x),
            max_y: p.y.max(q.y),
        }
    }

    pub fn from_coordinates<'a, I>(coords: I) -> Self
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        let mut env = Envelope::empty();
        for c in coords {
            env.expand_to_include(c);
        }
        env
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.max_x < self.min_x
    }

    pub fn expand_to_include(&mut self, c: &Coordinate) {
        self.min_x = self.min_x.min(c.x);
        self.min_y = self.min_y.min(c.y);
        self.max_x = self.max_x.max(c.x);
        self.max_y = self.max_y.max(c.y);
    }

    pub fn union(&self, other: &Envelope) -> Envelope {
        Envelope {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Overlap of two envelopes; empty if they are disjoint.
    pub fn intersection(&self, other: &Envelope) -> Envelope {
        if !self.intersects_envelope(other) {
            return Envelope::empty();
        }
        Envelope {
            min_x: self.min_x.max(other.min_x),
            min_y: self.min_y.max(other.min_y),
            max_x: self.max_x.min(other.max_x),
            max_y: self.max_y.min(other.max_y),
        }
    }

    /// Does this envelope share at least one point with `other`?
    pub fn intersects_envelope(&self, other: &Envelope) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        !(other.min_x > self.max_x
            || other.max_x < self.min_x
            || other.min_y > self.max_y
            || other.max_y < self.min_y)
    }

    /// Closed containment: points on the border are contained.
    pub fn contains_coordinate(&self, c: &Coordinate) -> bool {
        c.x >= self.min_x && c.x <= self.max_x && c.y >= self.min_y && c.y <= self.max_y
    }

    pub fn covers(&self, other: &Envelope) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    pub fn centre(&self) -> Option<Coordinate> {
        if self.is_empty() {
            return None;
        }
        Some(Coordinate::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        ))
    }

    pub fn width(&self) -> f64 {
        if self.is_empty() { 0.0 } else { self.max_x - self.min_x }
    }

    pub fn height(&self) -> f64 {
        if self.is_empty() { 0.0 } else { self.max_y - self.min_y }
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Do the envelopes of segments `p1p2` and `q1q2` meet?
    /// Avoids building either envelope.
    pub fn intersects_segments(
        p1: &Coordinate,
        p2: &Coordinate,
        q1: &Coordinate,
        q2: &Coordinate,
    ) -> bool {
        let min_q = q1.x.min(q2.x);
        let max_q = q1.x.max(q2.x);
        let min_p = p1.x.min(p2.x);
        let max_p = p1.x.max(p2.x);
        if min_p > max_q || max_p < min_q {
            return false;
        }
        let min_q = q1.y.min(q2.y);
        let max_q = q1.y.max(q2.y);
        let min_p = p1.y.min(p2.y);
        let max_p = p1.y.max(p2.y);
        !(min_p > max_q || max_p < min_q)
    }

    /// Is `q` inside the envelope of segment `p1p2`?
    pub fn segment_contains(p1: &Coordinate, p2: &Coordinate, q: &Coordinate) -> bool {
        q.x >= p1.x.min(p2.x)
            && q.x <= p1.x.max(p2.x)
            && q.y >= p1.y.min(p2.y)
            && q.y <= p1.y.max(p2.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_envelope_rejects_everything() {
        let e = Envelope::empty();
        assert!(e.is_empty());
        assert!(!e.intersects_envelope(&Envelope::new(
            &Coordinate::new(0.0, 0.0),
            &Coordinate::new(1.0, 1.0)
        )));
        assert_eq!(e.area(), 0.0);
        assert!(e.centre().is_none());
    }

    #[test]
    fn touching_envelopes_intersect() {
        let a = Envelope::new(&Coordinate::new(0.0, 0.0), &Coordinate::new(1.0, 1.0));
        let b = Envelope::new(&Coordinate::new(1.0, 1.0), &Coordinate::new(2.0, 3.0));
        assert!(a.intersects_envelope(&b));
        let i = a.intersection(&b);
        assert_eq!(i.min_x, 1.0);
        assert_eq!(i.max_y, 1.0);
    }

    #[test]
    fn segment_envelope_tests() {
        let p1 = Coordinate::new(0.0, 0.0);
        let p2 = Coordinate::new(10.0, 0.0);
        assert!(Envelope::segment_contains(&p1, &p2, &Coordinate::new(5.0, 0.0)));
        assert!(!Envelope::segment_contains(&p1, &p2, &Coordinate::new(5.0, 0.1)));
        assert!(Envelope::intersects_segments(
            &p1,
            &p2,
            &Coordinate::new(10.0, -1.0),
            &Coordinate::new(12.0, 1.0)
        ));
        assert!(!Envelope::intersects_segments(
            &p1,
            &p2,
            &Coordinate::new(10.5, -1.0),
            &Coordinate::new(12.0, 1.0)
        ));
    }
}
