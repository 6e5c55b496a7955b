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
use crate::locate::Location;

/// Counts crossings of a horizontal ray from `point` towards +x with the
/// segments fed to it.
///
/// Segments may arrive in any order, but every segment of the ring whose
/// y-range contains the point must be counted. A segment straddles the ray
/// when one end is strictly above and the other on or below, so a vertex
/// exactly on the ray is counted once.
#[derive(Debug, Clone)]
pub struct RayCrossingCounter {
    point: Coordinate,
    crossings: usize,
    on_segment: bool,
}

impl RayCrossingCounter {
    pub fn new(point: Coordinate) -> Self {
        RayCrossingCounter {
            point,
            crossings: 0,
            on_segment: false,
        }
    }

    pub fn count_segment(&mut self, p1: &Coordinate, p2: &Coordinate) {
        let p = self.point;
        // entirely left of the point
        if p1.x < p.x && p2.x < p.x {
            return;
        }
        // the point is a vertex; the segment before catches its start vertex
        if p.x == p2.x && p.y == p2.y {
            self.on_segment = true;
            return;
        }
        if p1.y == p.y && p2.y == p.y {
            let (min_x, max_x) = if p1.x <= p2.x { (p1.x, p2.x) } else { (p2.x, p1.x) };
            if p.x >= min_x && p.x <= max_x {
                self.on_segment = true;
            }
            return;
        }
        if (p1.y > p.y && p2.y <= p.y) || (p2.y > p.y && p1.y <= p.y) {
            let mut orient = orientation::index(p1, p2, &p);
            if orient == Orientation::Collinear {
                self.on_segment = true;
                return;
            }
            // make the test direction-independent: upward edge, point on left
            if p2.y < p1.y {
                orient = orient.reverse();
            }
            if orient == Orientation::LEFT {
                self.crossings += 1;
            }
        }
    }

    pub fn count_ring(&mut self, ring: &[Coordinate]) {
        for w in ring.windows(2) {
            self.count_segment(&w[0], &w[1]);
            if self.on_segment {
                return;
            }
        }
    }

    pub fn is_on_segment(&self) -> bool {
        self.on_segment
    }

    pub fn crossings(&self) -> usize {
        self.crossings
    }

    pub fn location(&self) -> Location {
        if self.on_segment {
            Location::Boundary
        } else if self.crossings % 2 == 1 {
            Location::Interior
        } else {
            Location::Exterior
        }
    }
}

/// Location of `p` relative to a closed ring, by ray crossing.
pub fn locate_point_in_ring(p: &Coordinate, ring: &[Coordinate]) -> Location {
    let mut counter = RayCrossingCounter::new(*p);
    counter.count_ring(ring);
    counter.location()
}

/// Location of `p` relative to a polygon with the given shell and holes.
/// Holes are assumed to lie inside the shell.
pub fn locate_in_polygon<R: AsRef<[Coordinate]>>(
    p: &Coordinate,
    shell: &[Coordinate],
    holes: &[R],
) -> Location {
    if shell.is_empty() || !Envelope::from_coordinates(shell).contains_coordinate(p) {
        return Location::Exterior;
    }
    match locate_point_in_ring(p, shell) {
        Location::Interior => {}
        other => return other,
    }
    for hole in holes {
        match locate_point_in_ring(p, hole.as_ref()) {
            Location::Interior => return Location::Exterior,
            Location::Boundary => return Location::Boundary,
            Location::Exterior => {}
        }
    }
    Location::Interior
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(min: f64, max: f64) -> Vec<Coordinate> {
        vec![
            Coordinate::new(min, min),
            Coordinate::new(max, min),
            Coordinate::new(max, max),
            Coordinate::new(min, max),
            Coordinate::new(min, min),
        ]
    }

    #[test]
    fn ray_through_vertex_counts_once() {
        let diamond = vec![
            Coordinate::new(0.0, -1.0),
            Coordinate::new(1.0, 0.0),
            Coordinate::new(0.0, 1.0),
            Coordinate::new(-1.0, 0.0),
            Coordinate::new(0.0, -1.0),
        ];
        assert_eq!(locate_point_in_ring(&Coordinate::new(0.0, 0.0), &diamond), Location::Interior);
        assert_eq!(locate_point_in_ring(&Coordinate::new(-2.0, 0.0), &diamond), Location::Exterior);
        assert_eq!(locate_point_in_ring(&Coordinate::new(1.0, 0.0), &diamond), Location::Boundary);
    }

    #[test]
    fn polygon_with_hole() {
        let shell = square(0.0, 10.0);
        let holes = vec![square(4.0, 6.0)];
        assert_eq!(locate_in_polygon(&Coordinate::new(5.0, 5.0), &shell, &holes), Location::Exterior);
        assert_eq!(locate_in_polygon(&Coordinate::new(4.0, 5.0), &shell, &holes), Location::Boundary);
        assert_eq!(locate_in_polygon(&Coordinate::new(2.0, 5.0), &shell, &holes), Location::Interior);
        assert_eq!(locate_in_polygon(&Coordinate::new(12.0, 5.0), &shell, &holes), Location::Exterior);
    }
}
