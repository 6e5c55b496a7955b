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

use crate::error::{KernelError, Result};
use crate::geometry::{Coordinate, Envelope, Ring};
use crate::kernel::orientation::{self, Orientation};
use crate::kernel::predicates::is_point_on_segment;
use crate::locate::{Location, locate_point_in_ring};

/// Inputs larger than this are first thinned with the octagon heuristic.
const REDUCE_THRESHOLD: usize = 50;

/// Convex hull of a point set.
///
/// A polygonal hull is a closed counter-clockwise ring whose first vertex is
/// the lowest (then leftmost) input point, with no three consecutive
/// collinear vertices.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvexHull {
    Empty,
    Point(Coordinate),
    Line(Coordinate, Coordinate),
    Polygon(Ring),
}

impl ConvexHull {
    /// Graham scan over the distinct input points.
    pub fn compute(points: &[Coordinate]) -> Result<ConvexHull> {
        if let Some(index) = points.iter().position(|c| !c.is_finite_2d()) {
            return Err(KernelError::NonFiniteCoordinate { index });
        }

        let mut pts = points.to_vec();
        pts.sort_by(|a, b| a.compare_2d(b));
        pts.dedup_by(|a, b| a.equals_2d(b));

        match pts.len() {
            0 => return Ok(ConvexHull::Empty),
            1 => return Ok(ConvexHull::Point(pts[0])),
            2 => return Ok(ConvexHull::Line(pts[0], pts[1])),
            _ => {}
        }

        if pts.len() > REDUCE_THRESHOLD {
            pts = reduce(pts);
        }
        Ok(graham_scan(pts))
    }

    /// Hull vertices; for a polygon the closing vertex is included.
    pub fn coordinates(&self) -> Vec<Coordinate> {
        match self {
            ConvexHull::Empty => Vec::new(),
            ConvexHull::Point(p) => vec![*p],
            ConvexHull::Line(a, b) => vec![*a, *b],
            ConvexHull::Polygon(ring) => ring.coordinates().to_vec(),
        }
    }

    pub fn ring(&self) -> Option<&Ring> {
        match self {
            ConvexHull::Polygon(ring) => Some(ring),
            _ => None,
        }
    }

    pub fn envelope(&self) -> Envelope {
        Envelope::from_coordinates(&self.coordinates())
    }

    /// Location of `p` relative to the hull. Degenerate hulls have no
    /// interior: points on them are on the boundary.
    pub fn locate(&self, p: &Coordinate) -> Location {
        match self {
            ConvexHull::Empty => Location::Exterior,
            ConvexHull::Point(q) => {
                if q.equals_2d(p) {
                    Location::Boundary
                } else {
                    Location::Exterior
                }
            }
            ConvexHull::Line(a, b) => {
                if is_point_on_segment(p, a, b) {
                    Location::Boundary
                } else {
                    Location::Exterior
                }
            }
            ConvexHull::Polygon(ring) => ring.locate(p),
        }
    }
}

/// Shorthand for [`ConvexHull::compute`].
pub fn convex_hull(points: &[Coordinate]) -> Result<ConvexHull> {
    ConvexHull::compute(points)
}

// `pts` holds at least three distinct points.
fn graham_scan(mut pts: Vec<Coordinate>) -> ConvexHull {
    // pivot: lowest y, then lowest x
    let mut pivot_idx = 0;
    for (i, p) in pts.iter().enumerate().skip(1) {
        let q = &pts[pivot_idx];
        if p.y < q.y || (p.y == q.y && p.x < q.x) {
            pivot_idx = i;
        }
    }
    pts.swap(0, pivot_idx);
    let pivot = pts[0];
    pts[1..].sort_by(|p, q| polar_compare(&pivot, p, q));

    let mut stack: Vec<Coordinate> = Vec::with_capacity(pts.len() + 1);
    stack.push(pts[0]);
    stack.push(pts[1]);
    for c in &pts[2..] {
        while stack.len() >= 2 {
            let top = stack[stack.len() - 1];
            let below = stack[stack.len() - 2];
            if orientation::index(&below, &top, c) == Orientation::CounterClockwise {
                break;
            }
            stack.pop();
        }
        stack.push(*c);
    }

    if stack.len() < 3 {
        return ConvexHull::Line(stack[0], stack[stack.len() - 1]);
    }
    stack.push(pivot);
    ConvexHull::Polygon(Ring::from_trusted(stack))
}

/// Counter-clockwise order about `o`; collinear points nearer `o` first.
/// All points must lie on or above the horizontal line through `o`.
fn polar_compare(o: &Coordinate, p: &Coordinate, q: &Coordinate) -> Ordering {
    match orientation::index(o, p, q) {
        Orientation::CounterClockwise => Ordering::Less,
        Orientation::Clockwise => Ordering::Greater,
        Orientation::Collinear => {
            let op = o.distance_sq(p);
            let oq = o.distance_sq(q);
            op.partial_cmp(&oq).unwrap_or(Ordering::Equal)
        }
    }
}

/// Drops points strictly inside the octagon spanned by the extreme points in
/// the eight compass directions. Such points cannot be hull vertices.
fn reduce(pts: Vec<Coordinate>) -> Vec<Coordinate> {
    let Some(ring) = oct_ring(&pts) else {
        return pts;
    };
    let mut reduced: Vec<Coordinate> = ring[..ring.len() - 1].to_vec();
    reduced.extend(
        pts.iter()
            .filter(|p| locate_point_in_ring(p, &ring) == Location::Exterior),
    );
    reduced.sort_by(|a, b| a.compare_2d(b));
    reduced.dedup_by(|a, b| a.equals_2d(b));
    if reduced.len() < 3 {
        return pts;
    }
    reduced
}

fn oct_ring(pts: &[Coordinate]) -> Option<Vec<Coordinate>> {
    let first = *pts.first()?;
    let mut oct = [first; 8];
    for p in pts {
        if p.x < oct[0].x {
            oct[0] = *p;
        }
        if p.x - p.y < oct[1].x - oct[1].y {
            oct[1] = *p;
        }
        if p.y > oct[2].y {
            oct[2] = *p;
        }
        if p.x + p.y > oct[3].x + oct[3].y {
            oct[3] = *p;
        }
        if p.x > oct[4].x {
            oct[4] = *p;
        }
        if p.x - p.y > oct[5].x - oct[5].y {
            oct[5] = *p;
        }
        if p.y < oct[6].y {
            oct[6] = *p;
        }
        if p.x + p.y < oct[7].x + oct[7].y {
            oct[7] = *p;
        }
    }

    let mut ring: Vec<Coordinate> = Vec::with_capacity(9);
    for p in oct {
        if ring.last().is_none_or(|last| !last.equals_2d(&p)) {
            ring.push(p);
        }
    }
    // the sequence wraps around, so the ends may repeat too
    while ring.len() > 1 && ring[0].equals_2d(&ring[ring.len() - 1]) {
        ring.pop();
    }
    if ring.len() < 3 {
        return None;
    }
    ring.push(ring[0]);
    Some(ring)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn oct_ring_of_square_grid() {
        let pts: Vec<Coordinate> = (0..10)
            .flat_map(|i| (0..10).map(move |j| c(i as f64, j as f64)))
            .collect();
        let ring = oct_ring(&pts).unwrap();
        assert!(ring.len() >= 4);
        assert!(ring[0].equals_2d(&ring[ring.len() - 1]));
        let reduced = reduce(pts.clone());
        assert!(reduced.len() < pts.len());
        for corner in [c(0.0, 0.0), c(9.0, 0.0), c(9.0, 9.0), c(0.0, 9.0)] {
            assert!(reduced.contains(&corner));
        }
    }

    #[test]
    fn polar_order_breaks_ties_by_distance() {
        let o = c(0.0, 0.0);
        assert_eq!(polar_compare(&o, &c(1.0, 0.0), &c(0.0, 1.0)), Ordering::Less);
        assert_eq!(polar_compare(&o, &c(2.0, 2.0), &c(1.0, 1.0)), Ordering::Greater);
    }
}
