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

use std::cmp::Ordering;

use georobust::Coordinate;
use georobust::operations::node_topology::{
    Quadrant, compare_angle, compare_between, is_angle_greater, is_crossing, is_interior_segment,
};

fn c(x: f64, y: f64) -> Coordinate {
    Coordinate::new(x, y)
}

const NODE: Coordinate = Coordinate::new(10.0, 10.0);

#[test]
fn crossing_rings_at_shared_vertex() {
    // ring A turns at the node from the west to the north;
    // ring B passes from the north-west to the south-east
    let a0 = c(0.0, 10.0);
    let a1 = c(10.0, 20.0);
    let b0 = c(0.0, 20.0);
    let b1 = c(20.0, 0.0);
    assert!(is_crossing(&NODE, &a0, &a1, &b0, &b1));
    assert!(is_crossing(&NODE, &a1, &a0, &b1, &b0));
}

#[test]
fn touching_rings_do_not_cross() {
    let a0 = c(0.0, 10.0);
    let a1 = c(10.0, 20.0);
    let b0 = c(20.0, 10.0);
    let b1 = c(10.0, 0.0);
    assert!(!is_crossing(&NODE, &a0, &a1, &b0, &b1));
}

#[test]
fn collinear_direction_is_never_a_crossing() {
    let a0 = c(0.0, 10.0);
    let a1 = c(10.0, 20.0);
    // b0 runs along a0's direction
    assert!(!is_crossing(&NODE, &a0, &a1, &c(5.0, 10.0), &c(20.0, 20.0)));
    // zero-length direction
    assert!(!is_crossing(&NODE, &a0, &a1, &NODE, &c(20.0, 20.0)));
}

#[test]
fn interior_segment_at_node() {
    // clockwise shell corner: west neighbour, node, north neighbour
    let a0 = c(0.0, 10.0);
    let a1 = c(10.0, 20.0);
    // interior on the right: the reflex side through east and south
    assert!(is_interior_segment(&NODE, &a0, &a1, &c(20.0, 0.0)));
    assert!(!is_interior_segment(&NODE, &a0, &a1, &c(0.0, 20.0)));
}

#[test]
fn angle_ranking() {
    let east = c(20.0, 10.0);
    let north = c(10.0, 20.0);
    let west = c(0.0, 10.0);
    let south = c(10.0, 0.0);
    assert_eq!(compare_angle(&NODE, &north, &east), Ordering::Greater);
    assert_eq!(compare_angle(&NODE, &west, &north), Ordering::Greater);
    assert_eq!(compare_angle(&NODE, &south, &west), Ordering::Greater);
    assert_eq!(compare_angle(&NODE, &east, &south), Ordering::Less);
    assert!(is_angle_greater(&NODE, &c(15.0, 20.0), &c(20.0, 15.0)));
    assert_eq!(compare_between(&NODE, &c(20.0, 20.0), &east, &north), Ordering::Greater);
    assert_eq!(compare_between(&NODE, &c(0.0, 0.0), &east, &north), Ordering::Less);
    assert_eq!(compare_between(&NODE, &c(30.0, 10.0), &east, &north), Ordering::Equal);
    assert!(Quadrant::NE < Quadrant::SE);
}
