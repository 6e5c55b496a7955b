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

use crate::error::Result;
use crate::geometry::{Coordinate, Envelope, Ring};
use crate::locate::chain::{MonotoneChain, monotone_chains};
use crate::locate::{Location, RayCrossingCounter, SortedIntervalTree};

/// Point-in-area locator for repeated queries against the same rings.
///
/// Ring edges are grouped into y-monotone chains, and the chains are stored
/// in an interval tree keyed by their y-extent. A query visits only chains
/// that straddle the query ordinate, then binary-searches inside each chain
/// for the edges to feed the ray-crossing counter.
///
/// Built from a single ring or from a polygon shell with holes; in the
/// polygon case crossings are counted over all rings together.
#[derive(Debug, Clone)]
pub struct IndexedPointInRingLocator {
    rings: Vec<Vec<Coordinate>>,
    envelope: Envelope,
    index: SortedIntervalTree<MonotoneChain>,
}

impl IndexedPointInRingLocator {
    pub fn new(ring: &Ring) -> Self {
        Self::build(vec![ring.coordinates().to_vec()])
    }

    /// Validates `coords` as a ring, then indexes it.
    pub fn from_coordinates(coords: &[Coordinate]) -> Result<Self> {
        let ring = Ring::new(coords.to_vec())?;
        Ok(Self::build(vec![ring.into_coordinates()]))
    }

    pub fn from_polygon(shell: &Ring, holes: &[Ring]) -> Self {
        let mut rings = Vec::with_capacity(holes.len() + 1);
        rings.push(shell.coordinates().to_vec());
        rings.extend(holes.iter().map(|h| h.coordinates().to_vec()));
        Self::build(rings)
    }

    fn build(rings: Vec<Vec<Coordinate>>) -> Self {
        let envelope = rings
            .first()
            .map(Envelope::from_coordinates)
            .unwrap_or_default();
        let items = rings
            .iter()
            .enumerate()
            .flat_map(|(i, coords)| monotone_chains(i, coords))
            .map(|chain| (chain.min_y, chain.max_y, chain))
            .collect();
        IndexedPointInRingLocator {
            rings,
            envelope,
            index: SortedIntervalTree::build(items),
        }
    }

    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    pub fn chain_count(&self) -> usize {
        self.index.len()
    }

    pub fn locate(&self, p: &Coordinate) -> Location {
        if !self.envelope.contains_coordinate(p) {
            return Location::Exterior;
        }
        let mut counter = RayCrossingCounter::new(*p);
        self.index.query(p.y, |chain| {
            let coords = &self.rings[chain.ring];
            for k in chain.segments_at(coords, p.y) {
                counter.count_segment(&coords[k], &coords[k + 1]);
            }
        });
        counter.location()
    }
}
