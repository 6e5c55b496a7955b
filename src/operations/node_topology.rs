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

//! Classification of edge pairs meeting at a shared ring vertex.
//!
//! Directions are ranked by angle around the node: first by quadrant, then
//! by orientation within a quadrant. No trigonometry is involved, so the
//! ranking inherits the robustness of [`orientation::index`].

use std::cmp::Ordering;

use crate::geometry::Coordinate;
use crate::kernel::orientation::{self, Orientation};

/// Quadrants counter-clockwise from the positive x axis. Each owns its
/// leading axis (NE owns +x, NW owns +y, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quadrant {
    NE = 0,
    NW = 1,
    SW = 2,
    SE = 3,
}

impl Quadrant {
    /// `None` for the zero vector.
    pub fn of(dx: f64, dy: f64) -> Option<Quadrant> {
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        Some(match (dx >= 0.0, dy >= 0.0) {
            (true, true) => Quadrant::NE,
            (true, false) => Quadrant::SE,
            (false, true) => Quadrant::NW,
            (false, false) => Quadrant::SW,
        })
    }

    fn of_direction(origin: &Coordinate, p: &Coordinate) -> Option<Quadrant> {
        Quadrant::of(p.x - origin.x, p.y - origin.y)
    }
}

/// Whether segments `node-b0` and `node-b1` cross the corner formed by
/// `node-a0` and `node-a1`, i.e. one lies strictly inside the angle and the
/// other strictly outside it.
///
/// Any b direction collinear with an a direction gives `false`; the caller
/// resolves that case.
pub fn is_crossing(
    node: &Coordinate,
    a0: &Coordinate,
    a1: &Coordinate,
    b0: &Coordinate,
    b1: &Coordinate,
) -> bool {
    let (lo, hi) = if is_angle_greater(node, a0, a1) {
        (a1, a0)
    } else {
        (a0, a1)
    };
    let between0 = compare_between(node, b0, lo, hi);
    if between0 == Ordering::Equal {
        return false;
    }
    let between1 = compare_between(node, b1, lo, hi);
    if between1 == Ordering::Equal {
        return false;
    }
    between0 != between1
}

/// Whether `node-b` lies in the interior of the ring whose boundary passes
/// `a0 -> node -> a1`, for a ring whose interior is on the right
/// (clockwise shell).
pub fn is_interior_segment(node: &Coordinate, a0: &Coordinate, a1: &Coordinate, b: &Coordinate) -> bool {
    let (lo, hi, interior_between) = if is_angle_greater(node, a0, a1) {
        (a1, a0, false)
    } else {
        (a0, a1, true)
    };
    is_between(node, b, lo, hi) == interior_between
}

/// Whether the direction `origin-p` has a strictly greater angle than
/// `origin-q`, measured counter-clockwise from the positive x axis.
pub fn is_angle_greater(origin: &Coordinate, p: &Coordinate, q: &Coordinate) -> bool {
    compare_angle(origin, p, q) == Ordering::Greater
}

/// Compares the angles of the directions `origin-p` and `origin-q`.
/// A zero-length direction compares equal to everything.
pub fn compare_angle(origin: &Coordinate, p: &Coordinate, q: &Coordinate) -> Ordering {
    let (Some(quad_p), Some(quad_q)) = (
        Quadrant::of_direction(origin, p),
        Quadrant::of_direction(origin, q),
    ) else {
        return Ordering::Equal;
    };
    match quad_p.cmp(&quad_q) {
        Ordering::Equal => match orientation::index(origin, q, p) {
            Orientation::CounterClockwise => Ordering::Greater,
            Orientation::Clockwise => Ordering::Less,
            Orientation::Collinear => Ordering::Equal,
        },
        ord => ord,
    }
}

/// `Greater` if `p` lies strictly between `e0` and `e1` (with `e0` the
/// smaller angle), `Less` if strictly outside, `Equal` if collinear with
/// either.
pub fn compare_between(origin: &Coordinate, p: &Coordinate, e0: &Coordinate, e1: &Coordinate) -> Ordering {
    let comp0 = compare_angle(origin, p, e0);
    if comp0 == Ordering::Equal {
        return Ordering::Equal;
    }
    let comp1 = compare_angle(origin, p, e1);
    if comp1 == Ordering::Equal {
        return Ordering::Equal;
    }
    if comp0 == Ordering::Greater && comp1 == Ordering::Less {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

fn is_between(origin: &Coordinate, p: &Coordinate, e0: &Coordinate, e1: &Coordinate) -> bool {
    is_angle_greater(origin, p, e0) && !is_angle_greater(origin, p, e1)
}
