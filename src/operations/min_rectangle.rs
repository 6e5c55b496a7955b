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

use crate::error::Result;
use crate::geometry::{Coordinate, LineSegment, Ring};
use crate::operations::convex_hull::ConvexHull;

/// Minimum-area enclosing rectangle, found by rotating calipers over the
/// convex hull.
///
/// One side of the minimum rectangle is always flush with a hull edge, so
/// each edge is tried as the base. Three pointers (farthest from the base,
/// extreme along the base in either direction) only ever move forward around
/// the hull, so the scan is linear in the hull size.
#[derive(Debug, Clone, PartialEq)]
pub enum MinimumAreaRectangle {
    Empty,
    Point(Coordinate),
    /// All points are collinear; the line spans their extent.
    Line(Coordinate, Coordinate),
    /// Corners in counter-clockwise order, the first two on the base edge.
    Rectangle([Coordinate; 4]),
}

impl MinimumAreaRectangle {
    pub fn compute(points: &[Coordinate]) -> Result<Self> {
        Ok(match ConvexHull::compute(points)? {
            ConvexHull::Empty => MinimumAreaRectangle::Empty,
            ConvexHull::Point(p) => MinimumAreaRectangle::Point(p),
            ConvexHull::Line(a, b) => {
                let (p0, p1) = maximum_line(&[a, b]);
                MinimumAreaRectangle::Line(p0, p1)
            }
            ConvexHull::Polygon(ring) => {
                let coords = ring.coordinates();
                let pts = &coords[..coords.len() - 1];
                MinimumAreaRectangle::Rectangle(rotating_calipers(pts))
            }
        })
    }

    pub fn area(&self) -> f64 {
        match self {
            MinimumAreaRectangle::Rectangle(c) => c[0].distance(&c[1]) * c[1].distance(&c[2]),
            _ => 0.0,
        }
    }

    /// The rectangle as a closed counter-clockwise ring.
    pub fn to_ring(&self) -> Option<Ring> {
        match self {
            MinimumAreaRectangle::Rectangle(c) => {
                Some(Ring::from_trusted(vec![c[0], c[1], c[2], c[3], c[0]]))
            }
            _ => None,
        }
    }
}

/// Frame of hull edge `i`: origin at its start, `u` along it, `n` to its
/// left (towards the interior of a counter-clockwise hull).
struct EdgeFrame {
    origin: Coordinate,
    ux: f64,
    uy: f64,
}

impl EdgeFrame {
    fn new(a: &Coordinate, b: &Coordinate) -> Self {
        let len = a.distance(b);
        EdgeFrame {
            origin: *a,
            ux: (b.x - a.x) / len,
            uy: (b.y - a.y) / len,
        }
    }

    /// Signed distance along the edge direction.
    fn along(&self, p: &Coordinate) -> f64 {
        (p.x - self.origin.x) * self.ux + (p.y - self.origin.y) * self.uy
    }

    /// Height above the edge line.
    fn height(&self, p: &Coordinate) -> f64 {
        (p.y - self.origin.y) * self.ux - (p.x - self.origin.x) * self.uy
    }

    fn point(&self, along: f64, height: f64) -> Coordinate {
        Coordinate::new(
            self.origin.x + self.ux * along - self.uy * height,
            self.origin.y + self.uy * along + self.ux * height,
        )
    }
}

/// Moves `start` forward around the ring while `better(next, current)`,
/// for at most one full turn.
fn advance<F>(n: usize, start: usize, mut better: F) -> usize
where
    F: FnMut(usize, usize) -> bool,
{
    let mut idx = start;
    for _ in 0..n {
        let next = (idx + 1) % n;
        if !better(next, idx) {
            break;
        }
        idx = next;
    }
    idx
}

// `pts` is an open counter-clockwise convex ring of at least three vertices.
fn rotating_calipers(pts: &[Coordinate]) -> [Coordinate; 4] {
    let n = pts.len();
    let mut diam = 1;
    let mut right = 1;
    let mut left = 1;
    let mut best: Option<(f64, [Coordinate; 4])> = None;

    for i in 0..n {
        let frame = EdgeFrame::new(&pts[i], &pts[(i + 1) % n]);
        diam = advance(n, diam, |next, cur| frame.height(&pts[next]) >= frame.height(&pts[cur]));
        right = advance(n, right, |next, cur| frame.along(&pts[next]) >= frame.along(&pts[cur]));
        if i == 0 {
            left = diam;
        }
        left = advance(n, left, |next, cur| frame.along(&pts[next]) <= frame.along(&pts[cur]));

        let h = frame.height(&pts[diam]);
        let s_right = frame.along(&pts[right]);
        let s_left = frame.along(&pts[left]);
        let area = h * (s_right - s_left);
        if best.as_ref().is_none_or(|(a, _)| area < *a) {
            let corners = [
                frame.point(s_left, 0.0),
                frame.point(s_right, 0.0),
                frame.point(s_right, h),
                frame.point(s_left, h),
            ];
            best = Some((area, corners));
        }
    }
    // n >= 3, so the loop ran
    best.map(|(_, c)| c).unwrap_or([pts[0]; 4])
}

/// Extreme points of a collinear set: min and max x, or min and max y if
/// the set is vertical.
fn maximum_line(pts: &[Coordinate]) -> (Coordinate, Coordinate) {
    let mut min_x = pts[0];
    let mut max_x = pts[0];
    let mut min_y = pts[0];
    let mut max_y = pts[0];
    for p in pts {
        if p.x < min_x.x {
            min_x = *p;
        }
        if p.x > max_x.x {
            max_x = *p;
        }
        if p.y < min_y.y {
            min_y = *p;
        }
        if p.y > max_y.y {
            max_y = *p;
        }
    }
    if min_x.x == max_x.x {
        (min_y, max_y)
    } else {
        (min_x, max_x)
    }
}

/// Narrowest strip enclosing a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimumWidth {
    pub width: f64,
    /// Hull edge the strip is flush with.
    pub base: LineSegment,
    /// From the farthest hull vertex to its foot on the base line.
    pub segment: LineSegment,
}

/// Minimum width (minimum diameter) of a point set by rotating calipers.
/// `None` for empty input; 0 for a single point or collinear points.
pub fn minimum_width(points: &[Coordinate]) -> Result<Option<MinimumWidth>> {
    Ok(match ConvexHull::compute(points)? {
        ConvexHull::Empty => None,
        ConvexHull::Point(p) => Some(MinimumWidth {
            width: 0.0,
            base: LineSegment::new(p, p),
            segment: LineSegment::new(p, p),
        }),
        ConvexHull::Line(a, b) => Some(MinimumWidth {
            width: 0.0,
            base: LineSegment::new(a, b),
            segment: LineSegment::new(a, a),
        }),
        ConvexHull::Polygon(ring) => {
            let coords = ring.coordinates();
            Some(width_calipers(&coords[..coords.len() - 1]))
        }
    })
}

fn width_calipers(pts: &[Coordinate]) -> MinimumWidth {
    let n = pts.len();
    let mut diam = 1;
    let mut best = MinimumWidth {
        width: f64::INFINITY,
        base: LineSegment::new(pts[0], pts[1 % n]),
        segment: LineSegment::new(pts[0], pts[0]),
    };
    for i in 0..n {
        let base = LineSegment::new(pts[i], pts[(i + 1) % n]);
        let frame = EdgeFrame::new(&base.p0, &base.p1);
        diam = advance(n, diam, |next, cur| frame.height(&pts[next]) >= frame.height(&pts[cur]));
        let width = frame.height(&pts[diam]);
        if width < best.width {
            best = MinimumWidth {
                width,
                base,
                segment: LineSegment::new(pts[diam], base.project(&pts[diam])),
            };
        }
    }
    best
}
