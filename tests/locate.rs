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

use georobust::locate::{
    BoundaryNodeRule, IndexedPointInRingLocator, LocatorCache, RayCrossingCounter, locate_in_polygon,
    locate_point_in_ring,
};
use georobust::{Coordinate, Location, Ring};

fn c(x: f64, y: f64) -> Coordinate {
    Coordinate::new(x, y)
}

fn square(x0: f64, y0: f64, size: f64) -> Ring {
    Ring::new(vec![
        c(x0, y0),
        c(x0 + size, y0),
        c(x0 + size, y0 + size),
        c(x0, y0 + size),
        c(x0, y0),
    ])
    .unwrap()
}

#[test]
fn square_interior_boundary_exterior() {
    let ring = square(0.0, 0.0, 10.0);
    assert_eq!(locate_point_in_ring(&c(5.0, 5.0), ring.coordinates()), Location::Interior);
    assert_eq!(locate_point_in_ring(&c(0.0, 5.0), ring.coordinates()), Location::Boundary);
    assert_eq!(locate_point_in_ring(&c(-1.0, 5.0), ring.coordinates()), Location::Exterior);
    assert_eq!(ring.locate(&c(10.0, 10.0)), Location::Boundary);
    assert_eq!(ring.locate(&c(11.0, 10.0)), Location::Exterior);
}

#[test]
fn ray_through_vertex_counts_once() {
    // the ray from (1, 2) passes exactly through the vertex (4, 2)
    let ring = Ring::new(vec![c(2.0, 0.0), c(4.0, 2.0), c(2.0, 4.0), c(0.0, 2.0), c(2.0, 0.0)]).unwrap();
    assert_eq!(ring.locate(&c(1.0, 2.0)), Location::Interior);
    assert_eq!(ring.locate(&c(-1.0, 2.0)), Location::Exterior);
    assert_eq!(ring.locate(&c(5.0, 2.0)), Location::Exterior);
}

#[test]
fn counter_accumulates_segments() {
    let ring = square(0.0, 0.0, 10.0);
    let mut counter = RayCrossingCounter::new(c(5.0, 5.0));
    for w in ring.coordinates().windows(2) {
        counter.count_segment(&w[0], &w[1]);
    }
    assert_eq!(counter.crossings(), 1);
    assert!(!counter.is_on_segment());
    assert_eq!(counter.location(), Location::Interior);
}

#[test]
fn polygon_with_hole() {
    let shell = square(0.0, 0.0, 10.0);
    let hole = square(3.0, 3.0, 4.0);
    let holes = [hole.clone()];
    assert_eq!(locate_in_polygon(&c(1.0, 1.0), shell.coordinates(), &holes), Location::Interior);
    assert_eq!(locate_in_polygon(&c(5.0, 5.0), shell.coordinates(), &holes), Location::Exterior);
    assert_eq!(locate_in_polygon(&c(3.0, 5.0), shell.coordinates(), &holes), Location::Boundary);
    assert_eq!(locate_in_polygon(&c(20.0, 5.0), shell.coordinates(), &holes), Location::Exterior);

    let indexed = IndexedPointInRingLocator::from_polygon(&shell, &holes);
    for p in [c(1.0, 1.0), c(5.0, 5.0), c(3.0, 5.0), c(20.0, 5.0), c(7.0, 7.0)] {
        assert_eq!(
            indexed.locate(&p),
            locate_in_polygon(&p, shell.coordinates(), &holes),
            "at {p}"
        );
    }
}

#[test]
fn indexed_locator_agrees_with_ray_crossing() {
    // star-like ring with many direction changes in y
    let mut coords = Vec::new();
    for i in 0..24 {
        let a = i as f64 / 24.0 * std::f64::consts::TAU;
        let r = if i % 2 == 0 { 10.0 } else { 4.0 };
        coords.push(c(r * a.cos(), r * a.sin()));
    }
    let ring = Ring::closing(coords).unwrap();
    let indexed = IndexedPointInRingLocator::new(&ring);
    assert!(indexed.chain_count() >= 2);

    for ix in -12..=12 {
        for iy in -12..=12 {
            let p = c(ix as f64 * 0.9 + 0.05, iy as f64 * 0.9);
            assert_eq!(indexed.locate(&p), ring.locate(&p), "at {p}");
        }
    }
    for v in ring.coordinates() {
        assert_eq!(indexed.locate(v), Location::Boundary);
    }
}

#[test]
fn indexed_locator_rejects_bad_rings() {
    assert!(IndexedPointInRingLocator::from_coordinates(&[c(0.0, 0.0), c(1.0, 0.0)]).is_err());
    let open = [c(0.0, 0.0), c(1.0, 0.0), c(1.0, 1.0), c(0.0, 1.0)];
    assert!(IndexedPointInRingLocator::from_coordinates(&open).is_err());
}

#[test]
fn cache_reuses_and_evicts() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(100.0, 100.0, 10.0);
    let d = square(-50.0, -50.0, 10.0);
    let mut cache = LocatorCache::new(2);

    assert_eq!(cache.locate(1, &a, &c(5.0, 5.0)), Location::Interior);
    assert_eq!(cache.locate(2, &b, &c(5.0, 5.0)), Location::Exterior);
    assert_eq!(cache.len(), 2);

    // touch 1 so that 2 is the least recently used
    assert!(cache.get(1).is_some());
    assert_eq!(cache.locate(3, &d, &c(-45.0, -45.0)), Location::Interior);
    assert!(cache.contains(1));
    assert!(!cache.contains(2));
    assert!(cache.contains(3));

    assert!(cache.invalidate(1));
    assert!(!cache.invalidate(1));
    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn boundary_node_rules() {
    assert!(BoundaryNodeRule::Mod2.is_in_boundary(1));
    assert!(!BoundaryNodeRule::Mod2.is_in_boundary(2));
    assert!(BoundaryNodeRule::Endpoint.is_in_boundary(2));
    assert!(BoundaryNodeRule::MultivalentEndpoint.is_in_boundary(2));
    assert!(!BoundaryNodeRule::MultivalentEndpoint.is_in_boundary(1));
    assert!(BoundaryNodeRule::MonovalentEndpoint.is_in_boundary(1));
    assert!(!BoundaryNodeRule::MonovalentEndpoint.is_in_boundary(2));
    assert_eq!(BoundaryNodeRule::default(), BoundaryNodeRule::Mod2);
}
