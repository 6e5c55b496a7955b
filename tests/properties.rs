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

use georobust::kernel::intersection::segment_segment_intersection;
use georobust::kernel::orientation::index;
use georobust::operations::{ConvexHull, MinimumAreaRectangle, MinimumBoundingCircle};
use georobust::{Coordinate, Envelope, Location};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = Coordinate> {
    (-100.0f64..100.0, -100.0f64..100.0).prop_map(|(x, y)| Coordinate::new(x, y))
}

fn point_set() -> impl Strategy<Value = Vec<Coordinate>> {
    prop::collection::vec(coord(), 1..60)
}

proptest! {
    #[test]
    fn orientation_antisymmetry(p1 in coord(), p2 in coord(), q in coord()) {
        prop_assert_eq!(index(&p1, &p2, &q), index(&p2, &p1, &q).reverse());
    }

    #[test]
    fn orientation_antisymmetry_near_line(p1 in coord(), p2 in coord(), t in 0.0f64..1.0, k in -8i32..8) {
        let q = Coordinate::new(
            p1.x + t * (p2.x - p1.x),
            p1.y + t * (p2.y - p1.y) + k as f64 * 1e-14,
        );
        prop_assert_eq!(index(&p1, &p2, &q), index(&p2, &p1, &q).reverse());
    }

    #[test]
    fn intersection_symmetry(p1 in coord(), p2 in coord(), q1 in coord(), q2 in coord()) {
        let a = segment_segment_intersection(&p1, &p2, &q1, &q2);
        let b = segment_segment_intersection(&q1, &q2, &p1, &p2);
        prop_assert_eq!(a.count(), b.count());
        prop_assert_eq!(a.is_proper(), b.is_proper());
        if a.count() == 1 {
            let (pa, pb) = (a.points()[0], b.points()[0]);
            prop_assert!(pa.distance(&pb) < 1e-9);
        }
    }

    #[test]
    fn hull_contains_its_input(pts in point_set()) {
        let hull = ConvexHull::compute(&pts).unwrap();
        for p in &pts {
            prop_assert_ne!(hull.locate(p), Location::Exterior);
        }
        if let Some(ring) = hull.ring() {
            prop_assert!(ring.is_ccw());
        }
    }

    #[test]
    fn circle_covers_input(pts in point_set()) {
        let circle = MinimumBoundingCircle::compute(&pts).unwrap();
        let centre = circle.centre().unwrap();
        let slack = 1e-9 * (1.0 + circle.radius());
        for p in &pts {
            prop_assert!(centre.distance(p) <= circle.radius() + slack);
        }
    }

    #[test]
    fn rectangle_within_bounding_box_area(pts in point_set()) {
        let rect = MinimumAreaRectangle::compute(&pts).unwrap();
        let bbox = Envelope::from_coordinates(&pts);
        prop_assert!(rect.area() <= bbox.area() * (1.0 + 1e-9) + 1e-9);
    }
}
