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

use std::f64::consts::TAU;

use log::warn;

use crate::error::Result;
use crate::geometry::{Coordinate, Ring, angle, triangle};
use crate::operations::convex_hull::ConvexHull;

/// Smallest circle enclosing a point set.
///
/// Determined by one, two or three extremal points of the convex hull: two
/// points span a diameter, three lie on the circumcircle of an acute
/// triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimumBoundingCircle {
    extremal: Vec<Coordinate>,
    centre: Option<Coordinate>,
    radius: f64,
}

impl MinimumBoundingCircle {
    pub fn compute(points: &[Coordinate]) -> Result<Self> {
        let extremal = match ConvexHull::compute(points)? {
            ConvexHull::Empty => Vec::new(),
            ConvexHull::Point(p) => vec![p],
            ConvexHull::Line(a, b) => vec![a, b],
            ConvexHull::Polygon(ring) => {
                let coords = ring.coordinates();
                return Ok(Self::from_hull(&coords[..coords.len() - 1]));
            }
        };
        Ok(Self::from_extremal(extremal))
    }

    fn from_extremal(extremal: Vec<Coordinate>) -> Self {
        let centre = match extremal.as_slice() {
            [] => None,
            [p] => Some(*p),
            [a, b] => Some(midpoint(a, b)),
            [a, b, c, ..] => triangle::circumcentre(a, b, c).or_else(|| Some(midpoint(a, b))),
        };
        let radius = match (centre, extremal.first()) {
            (Some(c), Some(p)) => c.distance(p),
            _ => 0.0,
        };
        MinimumBoundingCircle {
            extremal,
            centre,
            radius,
        }
    }

    // `pts` is an open convex ring of at least three vertices.
    fn from_hull(pts: &[Coordinate]) -> Self {
        let mut p = lowest_point(pts);
        let mut q = point_with_min_angle_with_x(pts, p);

        for _ in 0..pts.len() {
            let r = point_with_min_angle_with_segment(pts, p, q);
            let (cp, cq, cr) = (&pts[p], &pts[q], &pts[r]);
            if angle::is_obtuse(cp, cr, cq) {
                return Self::from_extremal(vec![*cp, *cq]);
            } else if angle::is_obtuse(cr, cp, cq) {
                p = r;
            } else if angle::is_obtuse(cr, cq, cp) {
                q = r;
            } else {
                return Self::from_extremal(vec![*cp, *cq, *cr]);
            }
        }

        let r = point_with_min_angle_with_segment(pts, p, q);
        warn!(
            "minimum bounding circle did not converge after {} steps; widening circumcircle",
            pts.len()
        );
        let extremal = vec![pts[p], pts[q], pts[r]];
        let centre = triangle::circumcentre(&pts[p], &pts[q], &pts[r])
            .unwrap_or_else(|| midpoint(&pts[p], &pts[q]));
        let radius = pts.iter().map(|c| centre.distance(c)).fold(0.0, f64::max);
        MinimumBoundingCircle {
            extremal,
            centre: Some(centre),
            radius,
        }
    }

    /// `None` for empty input.
    pub fn centre(&self) -> Option<Coordinate> {
        self.centre
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The one to three hull points on the circle.
    pub fn extremal_points(&self) -> &[Coordinate] {
        &self.extremal
    }

    /// Two extremal points spanning the circle, or the two farthest apart
    /// when the circle is defined by three.
    pub fn maximum_diameter(&self) -> Option<[Coordinate; 2]> {
        match self.extremal.as_slice() {
            [] => None,
            [p] => Some([*p, *p]),
            [a, b] => Some([*a, *b]),
            [a, b, c, ..] => Some(farthest_points(a, b, c)),
        }
    }

    pub fn farthest_points(&self) -> Option<[Coordinate; 2]> {
        self.maximum_diameter()
    }

    /// The first two extremal points. When the circle is defined by three
    /// points these need not be a true diameter.
    pub fn diameter(&self) -> Option<[Coordinate; 2]> {
        match self.extremal.as_slice() {
            [] => None,
            [p] => Some([*p, *p]),
            [a, b, ..] => Some([*a, *b]),
        }
    }

    /// Regular polygon inscribed in the circle, with `quadrant_segments`
    /// edges per quarter turn. Its vertices lie on the circle, so it covers
    /// the input only approximately. `None` for empty input or zero radius.
    pub fn to_polygon(&self, quadrant_segments: usize) -> Option<Ring> {
        let centre = self.centre?;
        if self.radius <= 0.0 {
            return None;
        }
        let n = 4 * quadrant_segments.max(1);
        let step = TAU / n as f64;
        let mut coords: Vec<Coordinate> = (0..n)
            .map(|i| {
                let a = step * i as f64;
                Coordinate::new(
                    centre.x + self.radius * a.cos(),
                    centre.y + self.radius * a.sin(),
                )
            })
            .collect();
        coords.push(coords[0]);
        Some(Ring::from_trusted(coords))
    }

    /// Does the circle cover `p`, allowing `tolerance` of slack?
    pub fn covers(&self, p: &Coordinate, tolerance: f64) -> bool {
        match self.centre {
            Some(c) => c.distance(p) <= self.radius + tolerance,
            None => false,
        }
    }
}

fn midpoint(a: &Coordinate, b: &Coordinate) -> Coordinate {
    Coordinate::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

fn farthest_points(a: &Coordinate, b: &Coordinate, c: &Coordinate) -> [Coordinate; 2] {
    let d01 = a.distance(b);
    let d12 = b.distance(c);
    let d20 = c.distance(a);
    if d01 >= d12 && d01 >= d20 {
        [*a, *b]
    } else if d12 >= d01 && d12 >= d20 {
        [*b, *c]
    } else {
        [*c, *a]
    }
}

fn lowest_point(pts: &[Coordinate]) -> usize {
    let mut min = 0;
    for (i, p) in pts.iter().enumerate().skip(1) {
        if p.y < pts[min].y {
            min = i;
        }
    }
    min
}

/// The vertex making the smallest angle with the x-axis as seen from `p`.
fn point_with_min_angle_with_x(pts: &[Coordinate], p: usize) -> usize {
    let origin = pts[p];
    let mut min_sin = f64::MAX;
    let mut min_idx = if p == 0 { 1 } else { 0 };
    for (i, c) in pts.iter().enumerate() {
        if i == p {
            continue;
        }
        let dx = c.x - origin.x;
        let dy = (c.y - origin.y).abs();
        let sin = dy / dx.hypot(dy);
        if sin < min_sin {
            min_sin = sin;
            min_idx = i;
        }
    }
    min_idx
}

/// The vertex other than `p` and `q` from which segment `pq` subtends the
/// smallest angle.
fn point_with_min_angle_with_segment(pts: &[Coordinate], p: usize, q: usize) -> usize {
    let mut min_ang = f64::MAX;
    let mut min_idx = (0..pts.len()).find(|&i| i != p && i != q).unwrap_or(0);
    for (i, c) in pts.iter().enumerate() {
        if i == p || i == q {
            continue;
        }
        let ang = angle::angle_between(&pts[p], c, &pts[q]);
        if ang < min_ang {
            min_ang = ang;
            min_idx = i;
        }
    }
    min_idx
}
