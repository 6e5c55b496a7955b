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

use crate::error::{KernelError, Result};
use crate::geometry::{Coordinate, Envelope};
use crate::kernel::orientation;
use crate::locate::{self, Location};
use crate::operations::area;

/// A closed coordinate sequence: at least four coordinates with the first
/// equal to the last in x and y. All x and y values are finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    coords: Vec<Coordinate>,
}

impl Ring {
    pub fn new(coords: Vec<Coordinate>) -> Result<Self> {
        if coords.len() < 4 {
            return Err(KernelError::TooFewPoints {
                op: "ring",
                required: 4,
                actual: coords.len(),
            });
        }
        if let Some(index) = coords.iter().position(|c| !c.is_finite_2d()) {
            return Err(KernelError::NonFiniteCoordinate { index });
        }
        let first = coords[0];
        let last = coords[coords.len() - 1];
        if !first.equals_2d(&last) {
            return Err(KernelError::RingNotClosed {
                first: first.to_string(),
                last: last.to_string(),
            });
        }
        Ok(Ring { coords })
    }

    /// Builds a ring from an open sequence, appending the first coordinate
    /// if the sequence does not already end with it.
    pub fn closing(mut coords: Vec<Coordinate>) -> Result<Self> {
        if let (Some(first), Some(last)) = (coords.first().copied(), coords.last()) {
            if !first.equals_2d(last) {
                coords.push(first);
            }
        }
        Ring::new(coords)
    }

    pub(crate) fn from_trusted(coords: Vec<Coordinate>) -> Self {
        debug_assert!(coords.len() >= 4);
        Ring { coords }
    }

    #[inline]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coords
    }

    /// Number of coordinates including the closing one.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn into_coordinates(self) -> Vec<Coordinate> {
        self.coords
    }

    pub fn envelope(&self) -> Envelope {
        Envelope::from_coordinates(&self.coords)
    }

    pub fn is_ccw(&self) -> bool {
        orientation::ring_is_ccw(&self.coords)
    }

    /// Shoelace area, positive for counter-clockwise rings.
    pub fn signed_area(&self) -> f64 {
        area::of_ring_signed(&self.coords)
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn reversed(&self) -> Ring {
        let mut coords = self.coords.clone();
        coords.reverse();
        Ring { coords }
    }

    pub fn locate(&self, p: &Coordinate) -> Location {
        locate::locate_point_in_ring(p, &self.coords)
    }
}

impl AsRef<[Coordinate]> for Ring {
    fn as_ref(&self) -> &[Coordinate] {
        &self.coords
    }
}

impl TryFrom<Vec<Coordinate>> for Ring {
    type Error = KernelError;

    fn try_from(coords: Vec<Coordinate>) -> Result<Self> {
        Ring::new(coords)
    }
}
