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

use crate::geometry::{Coordinate, Ring};
use crate::kernel::orientation::ring_is_ccw;

/// One piece of a geometry fed to the centroid fold.
#[derive(Debug, Clone, Copy)]
pub enum Component<'a> {
    Point(Coordinate),
    Line(&'a [Coordinate]),
    Polygon { shell: &'a Ring, holes: &'a [Ring] },
}

/// Running sums for a dimension-aware centroid.
///
/// Areas, lengths and point counts are all accumulated; the result uses the
/// highest dimension that has a non-zero measure. A polygon of zero area
/// therefore yields the centroid of its boundary, and a line of zero length
/// the centroid of its points.
#[derive(Debug, Clone, Copy, Default)]
pub struct Centroid {
    area_base: Option<Coordinate>,
    area_sum2: f64,
    cg3_x: f64,
    cg3_y: f64,
    line_sum_x: f64,
    line_sum_y: f64,
    total_length: f64,
    point_count: usize,
    point_sum_x: f64,
    point_sum_y: f64,
}

impl Centroid {
    pub fn new() -> Self {
        Centroid::default()
    }

    /// Folds `components` and returns the centroid, or `None` if nothing
    /// was added.
    pub fn fold<'a, I>(components: I) -> Option<Coordinate>
    where
        I: IntoIterator<Item = Component<'a>>,
    {
        components
            .into_iter()
            .fold(Centroid::new(), |acc, c| acc.add(c))
            .centroid()
    }

    #[must_use]
    pub fn add(self, component: Component<'_>) -> Self {
        match component {
            Component::Point(p) => self.add_point(&p),
            Component::Line(pts) => self.add_line_segments(pts),
            Component::Polygon { shell, holes } => holes
                .iter()
                .fold(self.add_shell(shell.coordinates()), |acc, h| {
                    acc.add_hole(h.coordinates())
                }),
        }
    }

    pub fn centroid(&self) -> Option<Coordinate> {
        if self.area_sum2.abs() > 0.0 {
            Some(Coordinate::new(
                self.cg3_x / 3.0 / self.area_sum2,
                self.cg3_y / 3.0 / self.area_sum2,
            ))
        } else if self.total_length > 0.0 {
            Some(Coordinate::new(
                self.line_sum_x / self.total_length,
                self.line_sum_y / self.total_length,
            ))
        } else if self.point_count > 0 {
            let n = self.point_count as f64;
            Some(Coordinate::new(self.point_sum_x / n, self.point_sum_y / n))
        } else {
            None
        }
    }

    fn add_shell(mut self, pts: &[Coordinate]) -> Self {
        if self.area_base.is_none() {
            self.area_base = pts.first().copied();
        }
        let positive = !ring_is_ccw(pts);
        self = self.add_fan(pts, positive);
        self.add_line_segments(pts)
    }

    fn add_hole(self, pts: &[Coordinate]) -> Self {
        let positive = ring_is_ccw(pts);
        self.add_fan(pts, positive).add_line_segments(pts)
    }

    // Triangle fan from the first shell vertex seen; holes share the base.
    fn add_fan(mut self, pts: &[Coordinate], positive: bool) -> Self {
        let Some(base) = self.area_base else {
            return self;
        };
        let sign = if positive { 1.0 } else { -1.0 };
        for w in pts.windows(2) {
            let (p1, p2) = (&w[0], &w[1]);
            let area2 = (p1.x - base.x) * (p2.y - base.y) - (p2.x - base.x) * (p1.y - base.y);
            self.cg3_x += sign * area2 * (base.x + p1.x + p2.x);
            self.cg3_y += sign * area2 * (base.y + p1.y + p2.y);
            self.area_sum2 += sign * area2;
        }
        self
    }

    fn add_line_segments(mut self, pts: &[Coordinate]) -> Self {
        let mut line_len = 0.0;
        for w in pts.windows(2) {
            let seg_len = w[0].distance(&w[1]);
            if seg_len == 0.0 {
                continue;
            }
            line_len += seg_len;
            self.line_sum_x += seg_len * (w[0].x + w[1].x) / 2.0;
            self.line_sum_y += seg_len * (w[0].y + w[1].y) / 2.0;
        }
        self.total_length += line_len;
        match pts.first() {
            Some(first) if line_len == 0.0 => self.add_point(first),
            _ => self,
        }
    }

    fn add_point(mut self, p: &Coordinate) -> Self {
        self.point_count += 1;
        self.point_sum_x += p.x;
        self.point_sum_y += p.y;
        self
    }
}

/// Centroid of a point set.
pub fn of_points(points: &[Coordinate]) -> Option<Coordinate> {
    Centroid::fold(points.iter().map(|p| Component::Point(*p)))
}

/// Length-weighted centroid of a polyline.
pub fn of_line(pts: &[Coordinate]) -> Option<Coordinate> {
    Centroid::fold([Component::Line(pts)])
}

/// Area-weighted centroid of a polygon.
pub fn of_polygon(shell: &Ring, holes: &[Ring]) -> Option<Coordinate> {
    Centroid::fold([Component::Polygon { shell, holes }])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn empty_fold_has_no_centroid() {
        assert!(Centroid::fold(std::iter::empty()).is_none());
    }

    #[test]
    fn zero_length_line_falls_back_to_point() {
        let pts = [c(3.0, 4.0), c(3.0, 4.0)];
        assert_eq!(of_line(&pts), Some(c(3.0, 4.0)));
    }

    #[test]
    fn hole_shifts_centroid() {
        let shell = Ring::closing(vec![c(0.0, 0.0), c(4.0, 0.0), c(4.0, 4.0), c(0.0, 4.0)]).unwrap();
        // hole in the right half, clockwise
        let hole = Ring::closing(vec![c(2.0, 0.5), c(2.0, 3.5), c(3.5, 3.5), c(3.5, 0.5)]).unwrap();
        let cent = of_polygon(&shell, std::slice::from_ref(&hole)).unwrap();
        assert!(cent.x < 2.0);
        assert!((cent.y - 2.0).abs() < 1e-12);
    }
}
