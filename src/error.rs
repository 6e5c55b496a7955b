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

use thiserror::Error;

/// Failures reported by kernel operations.
///
/// Only malformed input is an error. Numerical trouble (an undecided
/// orientation filter, an intersection point that rounds outside both
/// segments) is resolved inside the kernel and never surfaces here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    #[error("{op} requires at least {required} coordinates, got {actual}")]
    TooFewPoints {
        op: &'static str,
        required: usize,
        actual: usize,
    },
    #[error("{op} requires exactly {required} coordinates, got {actual}")]
    WrongPointCount {
        op: &'static str,
        required: usize,
        actual: usize,
    },
    #[error("ring is not closed: first coordinate {first} differs from last {last}")]
    RingNotClosed { first: String, last: String },
    #[error("coordinate {index} has a non-finite x or y ordinate")]
    NonFiniteCoordinate { index: usize },
    #[error("{op} requires at least 3 non-collinear points")]
    DegenerateHull { op: &'static str },
    #[error("no valid bounding triangle found within tolerance {tolerance}")]
    NoValidTriangle { tolerance: f64 },
    #[error("tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
    #[error("precision scale must be finite and positive, got {0}")]
    InvalidScale(f64),
}

pub type Result<T> = std::result::Result<T, KernelError>;
