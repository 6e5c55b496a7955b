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

//! Point location against rings and polygons.

pub mod cache;
pub mod chain;
pub mod indexed;
pub mod interval_tree;
pub mod ray_crossing;

pub use cache::LocatorCache;
pub use indexed::IndexedPointInRingLocator;
pub use interval_tree::SortedIntervalTree;
pub use ray_crossing::{RayCrossingCounter, locate_in_polygon, locate_point_in_ring};

/// Topological position of a point relative to an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    Interior,
    Boundary,
    Exterior,
}

impl Location {
    /// Interior or boundary.
    pub fn is_covered(self) -> bool {
        self != Location::Exterior
    }
}

/// Rule deciding whether a line endpoint shared by `count` line ends lies on
/// the boundary of a lineal geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundaryNodeRule {
    /// Boundary if an odd number of ends meet. The OGC SFS rule.
    #[default]
    Mod2,
    /// Every endpoint is on the boundary.
    Endpoint,
    /// Boundary if more than one end meets.
    MultivalentEndpoint,
    /// Boundary if exactly one end meets.
    MonovalentEndpoint,
}

impl BoundaryNodeRule {
    pub fn is_in_boundary(self, count: usize) -> bool {
        match self {
            BoundaryNodeRule::Mod2 => count % 2 == 1,
            BoundaryNodeRule::Endpoint => count > 0,
            BoundaryNodeRule::MultivalentEndpoint => count > 1,
            BoundaryNodeRule::MonovalentEndpoint => count == 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_rules() {
        assert!(BoundaryNodeRule::Mod2.is_in_boundary(1));
        assert!(!BoundaryNodeRule::Mod2.is_in_boundary(2));
        assert!(BoundaryNodeRule::Endpoint.is_in_boundary(2));
        assert!(!BoundaryNodeRule::Endpoint.is_in_boundary(0));
        assert!(BoundaryNodeRule::MultivalentEndpoint.is_in_boundary(2));
        assert!(!BoundaryNodeRule::MultivalentEndpoint.is_in_boundary(1));
        assert!(BoundaryNodeRule::MonovalentEndpoint.is_in_boundary(1));
        assert!(!BoundaryNodeRule::MonovalentEndpoint.is_in_boundary(3));
    }
}
