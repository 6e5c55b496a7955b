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

use std::ops::Range;

use crate::geometry::Coordinate;

/// A maximal run of ring edges along which y never changes direction.
///
/// Horizontal edges join whichever run they follow. Segment `k` of the chain
/// runs from `coords[k]` to `coords[k + 1]` for `k` in `start..end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonotoneChain {
    pub ring: usize,
    pub start: usize,
    pub end: usize,
    pub min_y: f64,
    pub max_y: f64,
    pub increasing: bool,
}

#[derive(Clone, Copy, PartialEq)]
enum Direction {
    Flat,
    Up,
    Down,
}

fn direction(a: &Coordinate, b: &Coordinate) -> Direction {
    if b.y > a.y {
        Direction::Up
    } else if b.y < a.y {
        Direction::Down
    } else {
        Direction::Flat
    }
}

/// Splits the edges of `coords` (a closed ring with index `ring`) into
/// y-monotone chains.
pub fn monotone_chains(ring: usize, coords: &[Coordinate]) -> Vec<MonotoneChain> {
    let mut chains = Vec::new();
    let n = coords.len();
    if n < 2 {
        return chains;
    }

    let mut start = 0;
    let mut dir = Direction::Flat;
    for k in 0..n - 1 {
        let d = direction(&coords[k], &coords[k + 1]);
        if d == Direction::Flat {
            continue;
        }
        if dir == Direction::Flat {
            dir = d;
        } else if d != dir {
            chains.push(make_chain(ring, coords, start, k, dir));
            start = k;
            dir = d;
        }
    }
    chains.push(make_chain(ring, coords, start, n - 1, dir));
    chains
}

fn make_chain(ring: usize, coords: &[Coordinate], start: usize, end: usize, dir: Direction) -> MonotoneChain {
    let (a, b) = (coords[start].y, coords[end].y);
    MonotoneChain {
        ring,
        start,
        end,
        min_y: a.min(b),
        max_y: a.max(b),
        increasing: dir != Direction::Down,
    }
}

impl MonotoneChain {
    /// Segment indices whose closed y-range contains `y`.
    ///
    /// Vertex y values are monotone along the chain, so these segments are
    /// contiguous and located by binary search.
    pub fn segments_at(&self, coords: &[Coordinate], y: f64) -> Range<usize> {
        let starts = &coords[self.start..self.end];
        let ends = &coords[self.start + 1..=self.end];
        let (first, last) = if self.increasing {
            (
                ends.partition_point(|c| c.y < y),
                starts.partition_point(|c| c.y <= y),
            )
        } else {
            (
                ends.partition_point(|c| c.y > y),
                starts.partition_point(|c| c.y >= y),
            )
        };
        self.start + first..self.start + last.max(first)
    }
}
