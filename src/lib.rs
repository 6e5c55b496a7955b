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

//! Robust 2-D geometric predicates and the core algorithms built on them.
//!
//! The crate answers the small questions every spatial engine depends on
//! (which side of a line is a point on, where do two segments meet, is a
//! point inside a ring) exactly right under IEEE-754 rounding, and builds
//! convex hulls, minimum enclosing shapes, centroids and node topology
//! tests on top of those answers.
//!
//! All operations are pure functions over caller-owned coordinates. The only
//! cross-call state is what a caller chooses to hold, such as an
//! [`locate::IndexedPointInRingLocator`] or a [`locate::LocatorCache`].

pub mod config;
pub mod error;
pub mod geometry;
pub mod kernel;
pub mod locate;
pub mod numeric;
pub mod operations;

pub use config::{KernelConfig, Tolerance};
pub use error::{KernelError, Result};
pub use geometry::{Coordinate, Envelope, LineSegment, PrecisionModel, Ring};
pub use kernel::{Intersection, Orientation, SegmentIntersector};
pub use locate::Location;
