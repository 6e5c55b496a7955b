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
use crate::kernel::orientation::{self, Orientation};
use crate::numeric::ExactRational;

/// Orientation computed with arbitrary-precision rationals.
///
/// Every finite double is a rational, so this is the true sign of the
/// determinant. It allocates, and exists as a reference for the filtered
/// predicate. Returns `None` if any ordinate is NaN or infinite.
pub fn orientation_exact(p1: &Coordinate, p2: &Coordinate, q: &Coordinate) -> Option<Orientation> {
    let r = |v: f64| ExactRational::from_f64(v);
    let (p1x, p1y) = (r(p1.x)?, r(p1.y)?);
    let (p2x, p2y) = (r(p2.x)?, r(p2.y)?);
    let (qx, qy) = (r(q.x)?, r(q.y)?);

    let left = &(&p2x - &p1x) * &(&qy - &p1y);
    let right = &(&p2y - &p1y) * &(&qx - &p1x);
    Some(Orientation::from_sign((&left - &right).signum()))
}

/// Does `p` lie on the closed segment `a b`?
pub fn is_point_on_segment(p: &Coordinate, a: &Coordinate, b: &Coordinate) -> bool {
    Envelope::segment_contains(a, b, p) && orientation::index(a, b, p) == Orientation::Collinear
}
