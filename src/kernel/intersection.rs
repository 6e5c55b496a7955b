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

use crate::config::KernelConfig;
use crate::geometry::segment::point_to_segment_distance;
use crate::geometry::{Coordinate, Envelope, LineSegment, PrecisionModel};
use crate::kernel::orientation::{self, Orientation};

/// Outcome of intersecting two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    None,
    /// A single shared point. `is_proper` is true only when the point lies
    /// strictly inside both segments.
    Point {
        coordinate: Coordinate,
        is_proper: bool,
    },
    /// The segments overlap along a sub-segment.
    Collinear { start: Coordinate, end: Coordinate },
}

impl Intersection {
    pub fn has_intersection(&self) -> bool {
        !matches!(self, Intersection::None)
    }

    pub fn is_proper(&self) -> bool {
        matches!(self, Intersection::Point { is_proper: true, .. })
    }

    pub fn is_collinear(&self) -> bool {
        matches!(self, Intersection::Collinear { .. })
    }

    /// Number of intersection points: 0, 1 or 2.
    pub fn count(&self) -> usize {
        match self {
            Intersection::None => 0,
            Intersection::Point { .. } => 1,
            Intersection::Collinear { .. } => 2,
        }
    }

    pub fn points(&self) -> Vec<Coordinate> {
        match *self {
            Intersection::None => Vec::new(),
            Intersection::Point { coordinate, .. } => vec![coordinate],
            Intersection::Collinear { start, end } => vec![start, end],
        }
    }

    /// Is some intersection point distinct from both `a` and `b`?
    pub fn is_interior_to(&self, a: &Coordinate, b: &Coordinate) -> bool {
        self.points()
            .iter()
            .any(|p| !p.equals_2d(a) && !p.equals_2d(b))
    }

    /// Is some intersection point interior to either input segment?
    pub fn is_interior_intersection(
        &self,
        p1: &Coordinate,
        p2: &Coordinate,
        q1: &Coordinate,
        q2: &Coordinate,
    ) -> bool {
        self.is_interior_to(p1, p2) || self.is_interior_to(q1, q2)
    }
}

/// Computes segment intersections, optionally snapping computed crossing
/// points to a precision grid.
///
/// Endpoints that are themselves the intersection are returned as they are;
/// only synthesised points are rounded.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentIntersector {
    precision: Option<PrecisionModel>,
}

impl SegmentIntersector {
    pub fn new() -> Self {
        SegmentIntersector { precision: None }
    }

    pub fn with_precision(precision: PrecisionModel) -> Self {
        SegmentIntersector {
            precision: Some(precision),
        }
    }

    pub fn from_config(config: &KernelConfig) -> Self {
        SegmentIntersector {
            precision: config.precision,
        }
    }

    pub fn precision(&self) -> Option<PrecisionModel> {
        self.precision
    }

    pub fn intersect_segments(&self, a: &LineSegment, b: &LineSegment) -> Intersection {
        self.intersect(&a.p0, &a.p1, &b.p0, &b.p1)
    }

    /// Intersection of segment `p1p2` with segment `q1q2`.
    pub fn intersect(
        &self,
        p1: &Coordinate,
        p2: &Coordinate,
        q1: &Coordinate,
        q2: &Coordinate,
    ) -> Intersection {
        if !Envelope::intersects_segments(p1, p2, q1, q2) {
            return Intersection::None;
        }

        // each segment must straddle or touch the other's line
        let pq1 = orientation::index(p1, p2, q1);
        let pq2 = orientation::index(p1, p2, q2);
        if same_side(pq1, pq2) {
            return Intersection::None;
        }
        let qp1 = orientation::index(q1, q2, p1);
        let qp2 = orientation::index(q1, q2, p2);
        if same_side(qp1, qp2) {
            return Intersection::None;
        }

        let collinear = pq1 == Orientation::Collinear
            && pq2 == Orientation::Collinear
            && qp1 == Orientation::Collinear
            && qp2 == Orientation::Collinear;
        if collinear {
            return collinear_intersection(p1, p2, q1, q2);
        }

        // An endpoint lies on the other segment: it is the intersection.
        // Copying it keeps the result consistent with the orientation tests.
        if pq1 == Orientation::Collinear
            || pq2 == Orientation::Collinear
            || qp1 == Orientation::Collinear
            || qp2 == Orientation::Collinear
        {
            let coordinate = if p1.equals_2d(q1) {
                p1.with_z(z_get(p1, q1))
            } else if p1.equals_2d(q2) {
                p1.with_z(z_get(p1, q2))
            } else if p2.equals_2d(q1) {
                p2.with_z(z_get(p2, q1))
            } else if p2.equals_2d(q2) {
                p2.with_z(z_get(p2, q2))
            } else if pq1 == Orientation::Collinear {
                copy_with_z_interpolate(q1, p1, p2)
            } else if pq2 == Orientation::Collinear {
                copy_with_z_interpolate(q2, p1, p2)
            } else if qp1 == Orientation::Collinear {
                copy_with_z_interpolate(p1, q1, q2)
            } else {
                copy_with_z_interpolate(p2, q1, q2)
            };
            return Intersection::Point {
                coordinate,
                is_proper: false,
            };
        }

        Intersection::Point {
            coordinate: self.proper_intersection(p1, p2, q1, q2),
            is_proper: true,
        }
    }

    fn proper_intersection(
        &self,
        p1: &Coordinate,
        p2: &Coordinate,
        q1: &Coordinate,
        q2: &Coordinate,
    ) -> Coordinate {
        let computed = line_intersection(p1, p2, q1, q2).filter(|pt| {
            Envelope::segment_contains(p1, p2, pt) && Envelope::segment_contains(q1, q2, pt)
        });

        let pt = match computed {
            Some(pt) => match self.precision {
                Some(pm) => pm.make_precise_coord(&pt),
                None => pt,
            },
            None => {
                let nearest = nearest_endpoint(p1, p2, q1, q2);
                debug!(
                    "intersection of {p1}-{p2} and {q1}-{q2} fell outside both segments; \
                     using nearest endpoint {nearest}"
                );
                nearest
            }
        };
        pt.with_z(z_interpolate_both(&pt, p1, p2, q1, q2))
    }
}

#[inline]
fn same_side(a: Orientation, b: Orientation) -> bool {
    a != Orientation::Collinear && a == b
}

fn collinear_intersection(
    p1: &Coordinate,
    p2: &Coordinate,
    q1: &Coordinate,
    q2: &Coordinate,
) -> Intersection {
    let q1_in_p = Envelope::segment_contains(p1, p2, q1);
    let q2_in_p = Envelope::segment_contains(p1, p2, q2);
    let p1_in_q = Envelope::segment_contains(q1, q2, p1);
    let p2_in_q = Envelope::segment_contains(q1, q2, p2);

    let span = |a: Coordinate, b: Coordinate, single: bool| {
        if single {
            Intersection::Point {
                coordinate: a,
                is_proper: false,
            }
        } else {
            Intersection::Collinear { start: a, end: b }
        }
    };

    if q1_in_p && q2_in_p {
        return span(
            copy_with_z_interpolate(q1, p1, p2),
            copy_with_z_interpolate(q2, p1, p2),
            false,
        );
    }
    if p1_in_q && p2_in_q {
        return span(
            copy_with_z_interpolate(p1, q1, q2),
            copy_with_z_interpolate(p2, q1, q2),
            false,
        );
    }
    if q1_in_p && p1_in_q {
        return span(
            copy_with_z_interpolate(q1, p1, p2),
            copy_with_z_interpolate(p1, q1, q2),
            q1.equals_2d(p1) && !q2_in_p && !p2_in_q,
        );
    }
    if q1_in_p && p2_in_q {
        return span(
            copy_with_z_interpolate(q1, p1, p2),
            copy_with_z_interpolate(p2, q1, q2),
            q1.equals_2d(p2) && !q2_in_p && !p1_in_q,
        );
    }
    if q2_in_p && p1_in_q {
        return span(
            copy_with_z_interpolate(q2, p1, p2),
            copy_with_z_interpolate(p1, q1, q2),
            q2.equals_2d(p1) && !q1_in_p && !p2_in_q,
        );
    }
    if q2_in_p && p2_in_q {
        return span(
            copy_with_z_interpolate(q2, p1, p2),
            copy_with_z_interpolate(p2, q1, q2),
            q2.equals_2d(p2) && !q1_in_p && !p1_in_q,
        );
    }
    Intersection::None
}

/// The input endpoint closest to the opposite segment. Ties keep the
/// earliest of `p1, p2, q1, q2`.
fn nearest_endpoint(p1: &Coordinate, p2: &Coordinate, q1: &Coordinate, q2: &Coordinate) -> Coordinate {
    let candidates = [
        (p1, point_to_segment_distance(p1, q1, q2)),
        (p2, point_to_segment_distance(p2, q1, q2)),
        (q1, point_to_segment_distance(q1, p1, p2)),
        (q2, point_to_segment_distance(q2, p1, p2)),
    ];
    let mut nearest = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.1 < nearest.1 {
            nearest = *candidate;
        }
    }
    *nearest.0
}

/// Crossing point of the infinite lines through `p1p2` and `q1q2`.
///
/// Uses homogeneous coordinates on inputs translated to the centre of the
/// overlap of the two segment envelopes, which keeps the products small.
/// Returns `None` for parallel lines or a non-finite result.
pub fn line_intersection(
    p1: &Coordinate,
    p2: &Coordinate,
    q1: &Coordinate,
    q2: &Coordinate,
) -> Option<Coordinate> {
    let min_x0 = p1.x.min(p2.x);
    let min_y0 = p1.y.min(p2.y);
    let max_x0 = p1.x.max(p2.x);
    let max_y0 = p1.y.max(p2.y);

    let min_x1 = q1.x.min(q2.x);
    let min_y1 = q1.y.min(q2.y);
    let max_x1 = q1.x.max(q2.x);
    let max_y1 = q1.y.max(q2.y);

    let mid_x = (min_x0.max(min_x1) + max_x0.min(max_x1)) / 2.0;
    let mid_y = (min_y0.max(min_y1) + max_y0.min(max_y1)) / 2.0;

    let p1x = p1.x - mid_x;
    let p1y = p1.y - mid_y;
    let p2x = p2.x - mid_x;
    let p2y = p2.y - mid_y;
    let q1x = q1.x - mid_x;
    let q1y = q1.y - mid_y;
    let q2x = q2.x - mid_x;
    let q2y = q2.y - mid_y;

    // line coefficients
    let px = p1y - p2y;
    let py = p2x - p1x;
    let pw = p1x * p2y - p2x * p1y;

    let qx = q1y - q2y;
    let qy = q2x - q1x;
    let qw = q1x * q2y - q2x * q1y;

    let x = py * qw - qy * pw;
    let y = qx * pw - px * qw;
    let w = px * qy - qx * py;

    let x_int = x / w;
    let y_int = y / w;
    if !x_int.is_finite() || !y_int.is_finite() {
        return None;
    }
    Some(Coordinate::new(x_int + mid_x, y_int + mid_y))
}

/// Intersection of segment `p1p2` and `q1q2` with no precision model.
pub fn segment_segment_intersection(
    p1: &Coordinate,
    p2: &Coordinate,
    q1: &Coordinate,
    q2: &Coordinate,
) -> Intersection {
    SegmentIntersector::new().intersect(p1, p2, q1, q2)
}

/// Do the closed segments `p1p2` and `q1q2` share any point?
pub fn segments_intersect(p1: &Coordinate, p2: &Coordinate, q1: &Coordinate, q2: &Coordinate) -> bool {
    segment_segment_intersection(p1, p2, q1, q2).has_intersection()
}

/// Does `p` lie on segment `p1p2`? Proper when `p` is not an endpoint.
/// Only `Intersection::None` or `Intersection::Point` is returned.
pub fn point_segment_intersection(p: &Coordinate, p1: &Coordinate, p2: &Coordinate) -> Intersection {
    if Envelope::segment_contains(p1, p2, p)
        && orientation::index(p1, p2, p) == Orientation::Collinear
        && orientation::index(p2, p1, p) == Orientation::Collinear
    {
        let is_proper = !p.equals_2d(p1) && !p.equals_2d(p2);
        return Intersection::Point {
            coordinate: *p,
            is_proper,
        };
    }
    Intersection::None
}

/* ========= Elevation handling ========= */

/// Elevation of `p`, falling back to `q`'s.
fn z_get(p: &Coordinate, q: &Coordinate) -> f64 {
    if p.has_z() { p.z } else { q.z }
}

fn copy_with_z_interpolate(p: &Coordinate, a: &Coordinate, b: &Coordinate) -> Coordinate {
    let z = if p.has_z() { p.z } else { z_interpolate(p, a, b) };
    p.with_z(z)
}

/// Elevation at `p` interpolated linearly along `a b`, by distance from `a`.
/// If only one endpoint carries an elevation, that one is used.
fn z_interpolate(p: &Coordinate, a: &Coordinate, b: &Coordinate) -> f64 {
    if !a.has_z() {
        return b.z;
    }
    if !b.has_z() {
        return a.z;
    }
    if p.equals_2d(a) {
        return a.z;
    }
    if p.equals_2d(b) {
        return b.z;
    }
    let dz = b.z - a.z;
    if dz == 0.0 {
        return a.z;
    }
    let seg_len2 = a.distance_sq(b);
    if seg_len2 == 0.0 {
        return a.z;
    }
    let frac = (a.distance_sq(p) / seg_len2).sqrt();
    a.z + dz * frac
}

fn z_interpolate_both(
    p: &Coordinate,
    p1: &Coordinate,
    p2: &Coordinate,
    q1: &Coordinate,
    q2: &Coordinate,
) -> f64 {
    let zp = z_interpolate(p, p1, p2);
    let zq = z_interpolate(p, q1, q2);
    if zp.is_nan() {
        return zq;
    }
    if zq.is_nan() {
        return zp;
    }
    (zp + zq) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn same_side_rejection() {
        let r = segment_segment_intersection(&c(0.0, 0.0), &c(10.0, 0.0), &c(0.0, 1.0), &c(10.0, 2.0));
        assert_eq!(r, Intersection::None);
    }

    #[test]
    fn nearest_endpoint_prefers_first_on_ties() {
        let p = nearest_endpoint(&c(0.0, 0.0), &c(10.0, 0.0), &c(0.0, 1.0), &c(10.0, 1.0));
        assert!(p.equals_2d(&c(0.0, 0.0)));
    }

    #[test]
    fn z_interpolation_is_linear_in_distance() {
        let a = Coordinate::new_xyz(0.0, 0.0, 0.0);
        let b = Coordinate::new_xyz(10.0, 0.0, 10.0);
        assert_eq!(z_interpolate(&c(2.5, 0.0), &a, &b), 2.5);
        assert_eq!(z_interpolate(&c(2.5, 0.0), &c(0.0, 0.0), &b), 10.0);
        assert!(z_interpolate(&c(2.5, 0.0), &c(0.0, 0.0), &c(10.0, 0.0)).is_nan());
    }

    #[test]
    fn parallel_lines_have_no_crossing() {
        assert!(line_intersection(&c(0.0, 0.0), &c(1.0, 0.0), &c(0.0, 1.0), &c(1.0, 1.0)).is_none());
    }
}
