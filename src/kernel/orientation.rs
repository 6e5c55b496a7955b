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

use log::trace;

use crate::error::{KernelError, Result};
use crate::geometry::Coordinate;
use crate::numeric::DoubleDouble;
use crate::operations::area;

/// Relative error bound of the double-precision determinant, as a multiple
/// of the sum of magnitudes of its two products.
const DP_SAFE_EPSILON: f64 = 1e-15;

/// Which side of a directed line a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Orientation {
    Clockwise = -1,
    Collinear = 0,
    CounterClockwise = 1,
}

impl Orientation {
    pub const LEFT: Orientation = Orientation::CounterClockwise;
    pub const RIGHT: Orientation = Orientation::Clockwise;
    pub const STRAIGHT: Orientation = Orientation::Collinear;

    pub fn from_sign(sign: i32) -> Self {
        match sign.signum() {
            1 => Orientation::CounterClockwise,
            -1 => Orientation::Clockwise,
            _ => Orientation::Collinear,
        }
    }

    #[inline]
    pub fn as_i32(self) -> i32 {
        self as i8 as i32
    }

    pub fn reverse(self) -> Self {
        match self {
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::Collinear => Orientation::Collinear,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }
}

/// Orientation of `q` relative to the directed line `p1 -> p2`:
/// the sign of `(p2 - p1) x (q - p1)`.
///
/// Evaluated in double precision first. If the result is too close to zero
/// to be trusted, it is recomputed in double-double.
pub fn index(p1: &Coordinate, p2: &Coordinate, q: &Coordinate) -> Orientation {
    if let Some(o) = index_filter(p1, p2, q) {
        return o;
    }
    trace!("orientation filter undecided for {p1} {p2} {q}; using double-double");
    index_dd(p1, p2, q)
}

/// The fast tier alone: `None` when double precision cannot certify the sign.
///
/// Swapping `p1` and `p2` swaps the two partial products, so the filter
/// decides both orders or neither.
pub fn index_filter(p1: &Coordinate, p2: &Coordinate, q: &Coordinate) -> Option<Orientation> {
    let det_left = (p1.x - q.x) * (p2.y - q.y);
    let det_right = (p1.y - q.y) * (p2.x - q.x);
    let det = det_left - det_right;

    let det_sum = if det_left > 0.0 {
        if det_right <= 0.0 {
            return Some(sign_of(det));
        }
        det_left + det_right
    } else if det_left < 0.0 {
        if det_right >= 0.0 {
            return Some(sign_of(det));
        }
        -det_left - det_right
    } else {
        return Some(sign_of(det));
    };

    let err_bound = DP_SAFE_EPSILON * det_sum;
    if det >= err_bound || -det >= err_bound {
        return Some(sign_of(det));
    }
    None
}

/// The extended-precision tier alone.
///
/// Differences are taken relative to `q`, so each is exact in double-double
/// and the determinant changes sign exactly when `p1` and `p2` swap.
pub fn index_dd(p1: &Coordinate, p2: &Coordinate, q: &Coordinate) -> Orientation {
    let x1 = DoubleDouble::diff(p1.x, q.x);
    let y1 = DoubleDouble::diff(p1.y, q.y);
    let x2 = DoubleDouble::diff(p2.x, q.x);
    let y2 = DoubleDouble::diff(p2.y, q.y);
    Orientation::from_sign(DoubleDouble::determinant(x1, y1, x2, y2).signum())
}

fn sign_of(det: f64) -> Orientation {
    if det > 0.0 {
        Orientation::CounterClockwise
    } else if det < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Orientation of exactly three coordinates, in order.
pub fn orient(points: &[Coordinate]) -> Result<Orientation> {
    match points {
        [a, b, c] => Ok(index(a, b, c)),
        _ => Err(KernelError::WrongPointCount {
            op: "orientation",
            required: 3,
            actual: points.len(),
        }),
    }
}

/// Winding of a closed ring, from the turn at its highest vertex.
///
/// Handles flat tops, repeated points and collapsed spikes. A ring whose
/// vertices are all collinear reports `false`.
pub fn is_ccw(ring: &[Coordinate]) -> Result<bool> {
    check_ring(ring)?;
    Ok(ring_is_ccw(ring))
}

/// Winding of a closed ring from the sign of its area. Less robust than
/// [`is_ccw`] for rings with spikes, but independent of vertex order tricks.
pub fn is_ccw_area(ring: &[Coordinate]) -> Result<bool> {
    check_ring(ring)?;
    Ok(area::of_ring_signed(ring) > 0.0)
}

fn check_ring(ring: &[Coordinate]) -> Result<()> {
    if ring.len() < 4 {
        return Err(KernelError::TooFewPoints {
            op: "ring orientation",
            required: 4,
            actual: ring.len(),
        });
    }
    Ok(())
}

pub(crate) fn ring_is_ccw(ring: &[Coordinate]) -> bool {
    // vertices without the closing one
    let n = ring.len().saturating_sub(1);
    if n < 3 {
        return false;
    }

    // last vertex of the highest upward run
    let mut up_hi = ring[0];
    let mut i_up_hi = 0;
    let mut up_low = ring[0];
    let mut prev_y = up_hi.y;
    for i in 1..=n {
        let py = ring[i].y;
        if py > prev_y && py >= up_hi.y {
            up_hi = ring[i];
            i_up_hi = i;
            up_low = ring[i - 1];
        }
        prev_y = py;
    }
    if i_up_hi == 0 {
        return false;
    }

    // walk along the flat top, if any, to the start of the downward run
    let mut i_down_low = i_up_hi;
    loop {
        i_down_low = (i_down_low + 1) % n;
        if i_down_low == i_up_hi || ring[i_down_low].y != up_hi.y {
            break;
        }
    }
    let down_low = ring[i_down_low];
    let i_down_hi = if i_down_low > 0 { i_down_low - 1 } else { n - 1 };
    let down_hi = ring[i_down_hi];

    if up_hi.equals_2d(&down_hi) {
        // a single apex; a collapsed spike has no winding
        if up_low.equals_2d(&up_hi) || down_low.equals_2d(&up_hi) || up_low.equals_2d(&down_low) {
            return false;
        }
        index(&up_low, &up_hi, &down_low) == Orientation::CounterClockwise
    } else {
        // flat top: ccw rings traverse it right to left
        down_hi.x - up_hi.x < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn ccw_test() {
        let a = c(0.0, 0.0);
        let b = c(1.0, 0.0);
        let q = c(0.0, 1.0);
        assert_eq!(index(&a, &b, &q), Orientation::CounterClockwise);
        assert_eq!(index(&b, &a, &q), Orientation::Clockwise);
        assert_eq!(index(&a, &b, &c(2.0, 0.0)), Orientation::Collinear);
    }

    #[test]
    fn filter_defers_on_near_collinear() {
        let p1 = c(0.1, 0.1);
        let p2 = c(0.3, 0.3);
        let q = c(0.2, 0.2);
        assert!(index_filter(&p1, &p2, &q).is_none());
        assert_eq!(index(&p1, &p2, &q), index_dd(&p1, &p2, &q));
    }

    #[test]
    fn orient_requires_three_points() {
        assert_eq!(
            orient(&[c(0.0, 0.0), c(1.0, 0.0)]),
            Err(KernelError::WrongPointCount {
                op: "orientation",
                required: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn ring_winding_with_flat_top() {
        let ccw = [c(0.0, 0.0), c(10.0, 0.0), c(10.0, 10.0), c(0.0, 10.0), c(0.0, 0.0)];
        assert!(is_ccw(&ccw).unwrap());
        let mut cw = ccw;
        cw.reverse();
        assert!(!is_ccw(&cw).unwrap());
        assert!(is_ccw_area(&ccw).unwrap());
        assert!(!is_ccw_area(&cw).unwrap());
    }

    #[test]
    fn flat_ring_is_not_ccw() {
        let flat = [c(0.0, 0.0), c(1.0, 1.0), c(2.0, 2.0), c(0.0, 0.0)];
        assert!(!is_ccw(&flat).unwrap());
        assert!(is_ccw(&flat[..3]).is_err());
    }
}
