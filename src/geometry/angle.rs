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

//! Planar angle helpers. All angles are radians.

use std::f64::consts::{PI, TAU};

use crate::geometry::Coordinate;

/// Angle of the vector `p0 -> p1` from the positive x-axis, in (-π, π].
pub fn angle(p0: &Coordinate, p1: &Coordinate) -> f64 {
    (p1.y - p0.y).atan2(p1.x - p0.x)
}

/// Is the angle `p0-p1-p2` strictly less than 90°?
pub fn is_acute(p0: &Coordinate, p1: &Coordinate, p2: &Coordinate) -> bool {
    dot_at(p0, p1, p2) > 0.0
}

/// Is the angle `p0-p1-p2` strictly greater than 90°?
pub fn is_obtuse(p0: &Coordinate, p1: &Coordinate, p2: &Coordinate) -> bool {
    dot_at(p0, p1, p2) < 0.0
}

fn dot_at(p0: &Coordinate, p1: &Coordinate, p2: &Coordinate) -> f64 {
    let dx0 = p0.x - p1.x;
    let dy0 = p0.y - p1.y;
    let dx1 = p2.x - p1.x;
    let dy1 = p2.y - p1.y;
    dx0 * dx1 + dy0 * dy1
}

/// Unoriented angle between `tail->tip1` and `tail->tip2`, in [0, π].
pub fn angle_between(tip1: &Coordinate, tail: &Coordinate, tip2: &Coordinate) -> f64 {
    diff(angle(tail, tip1), angle(tail, tip2))
}

/// Oriented angle from `tail->tip1` to `tail->tip2`, in (-π, π].
/// Positive when the turn is counter-clockwise.
pub fn angle_between_oriented(tip1: &Coordinate, tail: &Coordinate, tip2: &Coordinate) -> f64 {
    let delta = angle(tail, tip2) - angle(tail, tip1);
    if delta <= -PI {
        return delta + TAU;
    }
    if delta > PI {
        return delta - TAU;
    }
    delta
}

/// Angle at `p1` measured counter-clockwise from `p1->p0` to `p1->p2`,
/// in [0, 2π). For a clockwise ring this is the interior angle.
pub fn interior_angle(p0: &Coordinate, p1: &Coordinate, p2: &Coordinate) -> f64 {
    normalize_positive(angle(p1, p2) - angle(p1, p0))
}

/// Maps an angle into (-π, π]. Non-finite input gives NaN.
pub fn normalize(a: f64) -> f64 {
    if !a.is_finite() {
        return f64::NAN;
    }
    let r = normalize_positive(a);
    if r > PI { r - TAU } else { r }
}

/// Maps an angle into [0, 2π). Non-finite input gives NaN.
pub fn normalize_positive(a: f64) -> f64 {
    if !a.is_finite() {
        return f64::NAN;
    }
    let r = a.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative input
    if r >= TAU { 0.0 } else { r }
}

/// Smallest absolute difference between two angles, in [0, π].
pub fn diff(a1: f64, a2: f64) -> f64 {
    let mut delta = (a2 - a1).abs();
    if delta > PI {
        delta = TAU - delta;
    }
    delta
}

pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}
