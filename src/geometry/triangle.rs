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

/// Centre of the circle through `a`, `b` and `c`.
///
/// Computed with the vertices translated so that `c` is the origin, which
/// keeps the determinants small. Returns `None` for collinear vertices.
pub fn circumcentre(a: &Coordinate, b: &Coordinate, c: &Coordinate) -> Option<Coordinate> {
    let cx = c.x;
    let cy = c.y;
    let ax = a.x - cx;
    let ay = a.y - cy;
    let bx = b.x - cx;
    let by = b.y - cy;

    let denom = 2.0 * det(ax, ay, bx, by);
    if denom == 0.0 {
        return None;
    }
    let numx = det(ay, ax * ax + ay * ay, by, bx * bx + by * by);
    let numy = det(ax, ax * ax + ay * ay, bx, bx * bx + by * by);

    let centre = Coordinate::new(cx - numx / denom, cy + numy / denom);
    if centre.is_finite_2d() { Some(centre) } else { None }
}

#[inline]
fn det(m00: f64, m01: f64, m10: f64, m11: f64) -> f64 {
    m00 * m11 - m01 * m10
}

/// Signed area, positive when `a, b, c` turn counter-clockwise.
pub fn area_signed(a: &Coordinate, b: &Coordinate, c: &Coordinate) -> f64 {
    ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)) / 2.0
}

pub fn area(a: &Coordinate, b: &Coordinate, c: &Coordinate) -> f64 {
    area_signed(a, b, c).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circumcentre_of_isoceles() {
        let cc = circumcentre(
            &Coordinate::new(0.0, 0.0),
            &Coordinate::new(10.0, 0.0),
            &Coordinate::new(5.0, 10.0),
        )
        .unwrap();
        assert!((cc.x - 5.0).abs() < 1e-12);
        assert!((cc.y - 3.75).abs() < 1e-12);
    }

    #[test]
    fn collinear_has_no_circumcentre() {
        assert!(
            circumcentre(
                &Coordinate::new(0.0, 0.0),
                &Coordinate::new(1.0, 1.0),
                &Coordinate::new(2.0, 2.0)
            )
            .is_none()
        );
    }

    #[test]
    fn signed_area_follows_winding() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(4.0, 0.0);
        let c = Coordinate::new(0.0, 3.0);
        assert_eq!(area_signed(&a, &b, &c), 6.0);
        assert_eq!(area_signed(&a, &c, &b), -6.0);
        assert_eq!(area(&a, &c, &b), 6.0);
    }
}
