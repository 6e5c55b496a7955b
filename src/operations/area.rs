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

//! Shoelace areas of rings and polygons.

use crate::geometry::{Coordinate, Ring};

/// Area of a closed ring, ignoring winding.
pub fn of_ring(ring: &[Coordinate]) -> f64 {
    of_ring_signed(ring).abs()
}

/// Signed area of a closed ring: positive when counter-clockwise.
///
/// Ordinates are taken relative to the first x, which keeps the products
/// small for rings far from the origin. Fewer than 3 coordinates give 0.
pub fn of_ring_signed(ring: &[Coordinate]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let x0 = ring[0].x;
    let mut sum = 0.0;
    for i in 1..ring.len() - 1 {
        let x = ring[i].x - x0;
        sum += x * (ring[i + 1].y - ring[i - 1].y);
    }
    sum / 2.0
}

/// Shell area minus hole areas.
pub fn of_polygon(shell: &Ring, holes: &[Ring]) -> f64 {
    holes
        .iter()
        .fold(shell.area(), |area, hole| area - hole.area())
}
