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

use georobust::kernel::orientation::{self, index, index_dd, index_filter};
use georobust::kernel::predicates::orientation_exact;
use georobust::{Coordinate, KernelError, Orientation, Ring};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn c(x: f64, y: f64) -> Coordinate {
    Coordinate::new(x, y)
}

#[test]
fn orientation_left_right_on() {
    let p1 = c(0.0, 0.0);
    let p2 = c(10.0, 0.0);
    assert_eq!(index(&p1, &p2, &c(5.0, 1.0)), Orientation::CounterClockwise);
    assert_eq!(index(&p1, &p2, &c(5.0, -1.0)), Orientation::Clockwise);
    assert_eq!(index(&p1, &p2, &c(20.0, 0.0)), Orientation::Collinear);
}

#[test]
fn orientation_far_collinear_point() {
    let p1 = c(0.5, 0.5);
    let p2 = c(12.0, 12.0);
    let q = c(24.0, 24.0);
    assert_eq!(index(&p1, &p2, &q), Orientation::Collinear);
    assert_eq!(index(&q, &p2, &p1), Orientation::Collinear);
}

#[test]
fn orientation_is_antisymmetric_near_collinear() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..2000 {
        let x1: f64 = rng.random_range(1.0..2.0);
        let x2: f64 = rng.random_range(1.0..2.0);
        let xq: f64 = rng.random_range(1.0..2.0);
        let k: i32 = rng.random_range(-4..=4);
        let p1 = c(x1, x1);
        let p2 = c(x2, x2);
        let q = c(xq, xq + k as f64 * f64::EPSILON);
        assert_eq!(index(&p1, &p2, &q), index(&p2, &p1, &q).reverse());
    }
}

#[test]
fn filtered_and_extended_tiers_agree_with_exact() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..2000 {
        let p1 = c(rng.random_range(1.0..2.0), rng.random_range(1.0..2.0));
        let t: f64 = rng.random_range(0.0..1.0);
        let p2 = c(rng.random_range(1.0..2.0), rng.random_range(1.0..2.0));
        let nudge: i32 = rng.random_range(-3..=3);
        let scale = if rng.random_bool(0.5) { f64::EPSILON } else { 1e-10 };
        let qx = (p1.x + t * (p2.x - p1.x)).clamp(1.0, 1.999);
        let qy = (p1.y + t * (p2.y - p1.y)).clamp(1.0, 1.999) + nudge as f64 * scale;
        let q = c(qx, qy);

        let exact = orientation_exact(&p1, &p2, &q).unwrap();
        assert_eq!(index(&p1, &p2, &q), exact);
        assert_eq!(index_dd(&p1, &p2, &q), exact);
        if let Some(fast) = index_filter(&p1, &p2, &q) {
            assert_eq!(fast, exact);
        }
    }
}

#[test]
fn orient_requires_three_points() {
    let pts = [c(0.0, 0.0), c(1.0, 0.0)];
    assert!(matches!(
        orientation::orient(&pts),
        Err(KernelError::WrongPointCount { required: 3, actual: 2, .. })
    ));
    let pts = [c(0.0, 0.0), c(1.0, 0.0), c(0.0, 1.0)];
    assert_eq!(orientation::orient(&pts).unwrap(), Orientation::CounterClockwise);
}

#[test]
fn ring_winding() {
    let ccw = Ring::new(vec![c(0.0, 0.0), c(4.0, 0.0), c(4.0, 4.0), c(0.0, 4.0), c(0.0, 0.0)]).unwrap();
    assert!(ccw.is_ccw());
    assert!(!ccw.reversed().is_ccw());
    assert!(orientation::is_ccw(ccw.coordinates()).unwrap());
    assert!(orientation::is_ccw_area(ccw.coordinates()).unwrap());
}

#[test]
fn ring_winding_with_flat_top() {
    // highest vertices are collinear along the top edge
    let pts = vec![
        c(0.0, 0.0),
        c(5.0, 0.0),
        c(5.0, 5.0),
        c(3.0, 5.0),
        c(1.0, 5.0),
        c(0.0, 5.0),
        c(0.0, 0.0),
    ];
    let ring = Ring::new(pts).unwrap();
    assert!(ring.is_ccw());
    assert!(!ring.reversed().is_ccw());
}
