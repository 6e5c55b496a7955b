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

use log::debug;

use crate::config::Tolerance;
use crate::error::{KernelError, Result};
use crate::geometry::segment::point_to_segment_distance;
use crate::geometry::{Coordinate, Ring, triangle};
use crate::kernel::intersection::line_intersection;
use crate::kernel::orientation::{self, Orientation};
use crate::operations::convex_hull::ConvexHull;

const OP: &str = "minimum bounding triangle";

/// Smallest-area triangle enclosing a point set (O'Rourke et al.).
///
/// Each hull edge in turn is held flush against one side. Two pointers walk
/// the hull to find the second flush side and the third side, which is
/// either flush or touches the hull at its midpoint. A candidate is kept only
/// if the midpoint of every side lies on the hull within `tolerance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimumBoundingTriangle {
    vertices: [Coordinate; 3],
}

impl MinimumBoundingTriangle {
    /// Fails with [`KernelError::DegenerateHull`] when the input has fewer
    /// than three non-collinear points, and with
    /// [`KernelError::NoValidTriangle`] when no hull edge produced a valid
    /// candidate at this tolerance. In the latter case a caller may retry
    /// with [`Tolerance::relaxed`].
    pub fn compute(points: &[Coordinate], tolerance: Tolerance) -> Result<Self> {
        let ring = match ConvexHull::compute(points)? {
            ConvexHull::Polygon(ring) => ring,
            _ => return Err(KernelError::DegenerateHull { op: OP }),
        };
        let coords = ring.coordinates();
        let pts = &coords[..coords.len() - 1];
        if pts.len() == 3 {
            return Ok(MinimumBoundingTriangle {
                vertices: [pts[0], pts[1], pts[2]],
            });
        }

        let search = Search {
            pts,
            tol: tolerance.value(),
        };
        let n = pts.len();
        let mut a = 1;
        let mut b = 2;
        let mut best: Option<(f64, [Coordinate; 3])> = None;
        for c in 0..n {
            let (candidate, a_out, b_out) = search.triangle_for_edge(c, a, b);
            a = a_out;
            b = b_out;
            match candidate {
                Some(t) => {
                    let area = triangle::area(&t[0], &t[1], &t[2]);
                    if best.as_ref().is_none_or(|(min, _)| area < *min) {
                        best = Some((area, t));
                    }
                }
                None => debug!("hull edge {c} yields no valid bounding triangle"),
            }
        }

        match best {
            Some((_, t)) => Ok(MinimumBoundingTriangle {
                vertices: orient_ccw(t),
            }),
            None => Err(KernelError::NoValidTriangle {
                tolerance: tolerance.value(),
            }),
        }
    }

    pub fn vertices(&self) -> &[Coordinate; 3] {
        &self.vertices
    }

    pub fn area(&self) -> f64 {
        let [a, b, c] = &self.vertices;
        triangle::area(a, b, c)
    }

    pub fn to_ring(&self) -> Ring {
        let [a, b, c] = self.vertices;
        Ring::from_trusted(vec![a, b, c, a])
    }
}

fn orient_ccw(t: [Coordinate; 3]) -> [Coordinate; 3] {
    if orientation::index(&t[0], &t[1], &t[2]) == Orientation::Clockwise {
        [t[0], t[2], t[1]]
    } else {
        t
    }
}

/// An infinite line through two points, remembered as a segment for
/// distance and intersection queries.
#[derive(Debug, Clone, Copy)]
struct Side {
    p1: Coordinate,
    p2: Coordinate,
    slope: f64,
    intercept: f64,
    vertical: bool,
}

impl Side {
    fn new(p1: Coordinate, p2: Coordinate) -> Self {
        let slope = (p2.y - p1.y) / (p2.x - p1.x);
        Side {
            p1,
            p2,
            slope,
            intercept: p1.y - slope * p1.x,
            vertical: p1.x == p2.x,
        }
    }

    /// Perpendicular distance from `p` to the line.
    fn distance(&self, p: &Coordinate) -> f64 {
        let dx = self.p2.x - self.p1.x;
        let dy = self.p2.y - self.p1.y;
        let num = dx * (self.p1.y - p.y) - (self.p1.x - p.x) * dy;
        (num * num / (dx * dx + dy * dy)).sqrt()
    }

    // Vertical lines have no point at a given x; `p1` stands in.
    fn at_x(&self, x: f64) -> Coordinate {
        if self.vertical {
            self.p1
        } else {
            Coordinate::new(x, self.slope * x + self.intercept)
        }
    }

    fn intersection(&self, other: &Side) -> Option<Coordinate> {
        line_intersection(&self.p1, &self.p2, &other.p1, &other.p2)
    }

    fn midpoint(&self) -> Coordinate {
        Coordinate::new((self.p1.x + self.p2.x) / 2.0, (self.p1.y + self.p2.y) / 2.0)
    }
}

struct Search<'a> {
    pts: &'a [Coordinate],
    tol: f64,
}

impl Search<'_> {
    fn wrap(&self, i: isize) -> usize {
        i.rem_euclid(self.pts.len() as isize) as usize
    }

    fn next(&self, i: usize) -> usize {
        (i + 1) % self.pts.len()
    }

    fn prev(&self, i: usize) -> usize {
        self.wrap(i as isize - 1)
    }

    /// Edge ending at vertex `i`.
    fn side(&self, i: usize) -> Side {
        Side::new(self.pts[self.prev(i)], self.pts[i])
    }

    fn dist(&self, i: usize, side: &Side) -> f64 {
        side.distance(&self.pts[i])
    }

    fn ccw(a: &Coordinate, b: &Coordinate, c: &Coordinate) -> bool {
        orientation::index(a, b, c) == Orientation::CounterClockwise
    }

    /// Best triangle with the edge ending at `c` flush, starting the chain
    /// pointers at `a` and `b`. Returns the candidate (if valid) and the
    /// advanced pointers for the next edge.
    fn triangle_for_edge(
        &self,
        c: usize,
        a: usize,
        b: usize,
    ) -> (Option<[Coordinate; 3]>, usize, usize) {
        let n = self.pts.len();
        let mut a = a.max(c + 1) % n;
        let mut b = b.max(c + 2) % n;
        let side_c = self.side(c);

        // b onto the right chain
        for _ in 0..n {
            if !self.on_left_chain(b, &side_c) {
                break;
            }
            b = self.next(b);
        }

        // a and b until critical
        for _ in 0..2 * n {
            if self.dist(b, &side_c) <= self.dist(a, &side_c) + self.tol {
                break;
            }
            let gamma_a = self.gamma(&self.pts[a], &self.side(a), &side_c);
            if self.high(b, gamma_a.as_ref(), &side_c) {
                b = self.next(b);
            } else {
                a = self.next(a);
            }
        }

        // b until tangency
        for _ in 0..n {
            if !self.tangency(a, b, &side_c) {
                break;
            }
            b = self.next(b);
        }

        let vertices = self.construct(a, b, c, &side_c);
        (vertices, a, b)
    }

    fn construct(&self, a: usize, b: usize, c: usize, side_c: &Side) -> Option<[Coordinate; 3]> {
        let a_prev = self.prev(a);
        let gamma_b = self.gamma(&self.pts[b], &self.side(a), side_c)?;

        let (side_a, side_b) = if self.low(b, Some(&gamma_b), side_c)
            || self.dist(b, side_c) < self.dist(a_prev, side_c) - self.tol
        {
            let flush_b = self.side(b);
            let flush_a = self.side(a);
            let cb = side_c.intersection(&flush_b)?;
            let ab = flush_a.intersection(&flush_b)?;
            let side_b = Side::new(cb, ab);
            let side_a = if side_c.distance(&side_b.midpoint())
                < self.dist(a_prev, side_c) - self.tol
            {
                let gamma_a = self.gamma(&self.pts[a_prev], &side_b, side_c)?;
                Side::new(gamma_a, self.pts[a_prev])
            } else {
                flush_a
            };
            (side_a, side_b)
        } else {
            (
                Side::new(gamma_b, self.pts[a_prev]),
                Side::new(gamma_b, self.pts[b]),
            )
        };

        let vertex_a = side_c.intersection(&side_b)?;
        let vertex_b = side_c.intersection(&side_a)?;
        let vertex_c = side_a.intersection(&side_b)?;
        self.is_valid(&vertex_a, &vertex_b, &vertex_c, a, b, c)
            .then_some([vertex_a, vertex_b, vertex_c])
    }

    /// The point on `on` at twice the height of `point` above `base`.
    fn gamma(&self, point: &Coordinate, on: &Side, base: &Side) -> Option<Coordinate> {
        let i = on.intersection(base)?;
        let dx_on = on.p2.x - on.p1.x;
        let dy_on = on.p2.y - on.p1.y;
        let nx = -(base.p2.y - base.p1.y);
        let ny = base.p2.x - base.p1.x;
        let n_len = nx.hypot(ny);
        if n_len == 0.0 {
            return None;
        }
        let signed_p = ((point.x - base.p1.x) * nx + (point.y - base.p1.y) * ny) / n_len;
        let denom = (dx_on * nx + dy_on * ny) / n_len;
        if denom.abs() > self.tol {
            let t = 2.0 * signed_p / denom;
            return Some(Coordinate::new(i.x + t * dx_on, i.y + t * dy_on));
        }

        // ill-conditioned: step along `on` by the ratio of heights
        let target = 2.0 * signed_p.abs();
        let point_side = Self::ccw(&base.p1, &base.p2, point);
        if on.vertical {
            let unit = base.distance(&Coordinate::new(i.x, i.y + 1.0));
            if unit <= self.tol {
                return None;
            }
            let s = target / unit;
            let guess = Coordinate::new(i.x, i.y + s);
            if Self::ccw(&base.p1, &base.p2, &guess) != point_side {
                return Some(Coordinate::new(i.x, i.y - s));
            }
            Some(guess)
        } else {
            let unit = base.distance(&on.at_x(i.x + 1.0));
            if unit <= self.tol {
                return None;
            }
            let s = target / unit;
            let guess = on.at_x(i.x + s);
            if Self::ccw(&base.p1, &base.p2, &guess) != point_side {
                return Some(on.at_x(i.x - s));
            }
            Some(guess)
        }
    }

    fn on_left_chain(&self, b: usize, side_c: &Side) -> bool {
        self.dist(self.next(b), side_c) >= self.dist(b, side_c) - self.tol
    }

    fn tangency(&self, a: usize, b: usize, side_c: &Side) -> bool {
        match self.gamma(&self.pts[b], &self.side(a), side_c) {
            Some(gamma_b) => {
                self.dist(b, side_c) > self.dist(self.prev(a), side_c)
                    && self.high(b, Some(&gamma_b), side_c)
            }
            None => false,
        }
    }

    /// Whether the line from `gamma` through vertex `b` separates b's
    /// neighbours, and on which side of the neighbour chord `gamma` falls.
    /// `None` when the line does not separate them.
    fn gamma_position(&self, b: usize, gamma: &Coordinate) -> Option<bool> {
        let before = &self.pts[self.prev(b)];
        let after = &self.pts[self.next(b)];
        let vb = &self.pts[b];
        if Self::ccw(gamma, vb, before) == Self::ccw(gamma, vb, after) {
            return None;
        }
        Some(Self::ccw(before, after, gamma) == Self::ccw(before, after, vb))
    }

    fn high(&self, b: usize, gamma: Option<&Coordinate>, side_c: &Side) -> bool {
        let Some(gamma) = gamma else { return false };
        match self.gamma_position(b, gamma) {
            Some(true) => side_c.distance(gamma) > self.dist(b, side_c),
            _ => false,
        }
    }

    fn low(&self, b: usize, gamma: Option<&Coordinate>, side_c: &Side) -> bool {
        let Some(gamma) = gamma else { return false };
        match self.gamma_position(b, gamma) {
            Some(false) => side_c.distance(gamma) > self.dist(b, side_c),
            _ => false,
        }
    }

    fn is_valid(
        &self,
        vertex_a: &Coordinate,
        vertex_b: &Coordinate,
        vertex_c: &Coordinate,
        a: usize,
        b: usize,
        c: usize,
    ) -> bool {
        self.touches(&mid(vertex_c, vertex_b), a)
            && self.touches(&mid(vertex_a, vertex_c), b)
            && self.touches(&mid(vertex_a, vertex_b), c)
    }

    fn touches(&self, midpoint: &Coordinate, edge: usize) -> bool {
        point_to_segment_distance(midpoint, &self.pts[self.prev(edge)], &self.pts[edge]) <= self.tol
    }
}

fn mid(a: &Coordinate, b: &Coordinate) -> Coordinate {
    Coordinate::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn unit_square_needs_twice_its_area() {
        let pts = [c(0.0, 0.0), c(1.0, 0.0), c(1.0, 1.0), c(0.0, 1.0)];
        let tri = MinimumBoundingTriangle::compute(&pts, Tolerance::adaptive(&pts)).unwrap();
        assert!((tri.area() - 2.0).abs() < 1e-9);
        assert!(tri.to_ring().is_ccw());
    }

    #[test]
    fn triangular_hull_is_returned_as_is() {
        let pts = [c(0.0, 0.0), c(4.0, 0.0), c(0.0, 4.0), c(1.0, 1.0)];
        let tri = MinimumBoundingTriangle::compute(&pts, Tolerance::adaptive(&pts)).unwrap();
        assert!((tri.area() - 8.0).abs() < 1e-12);
    }

    #[test]
    fn collinear_input_is_degenerate() {
        let pts = [c(0.0, 0.0), c(1.0, 1.0), c(2.0, 2.0)];
        assert_eq!(
            MinimumBoundingTriangle::compute(&pts, Tolerance::adaptive(&pts)),
            Err(KernelError::DegenerateHull { op: OP })
        );
    }
}
