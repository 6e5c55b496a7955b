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
use crate::geometry::{Coordinate, PrecisionModel};

/// A validated distance tolerance for near-degenerate computations.
///
/// The bounding triangle search takes one of these explicitly so that it can
/// stop on floating-point noise instead of chasing it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Tolerance(f64);

impl Tolerance {
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(KernelError::InvalidTolerance(value));
        }
        Ok(Tolerance(value))
    }

    /// `10 * ulp(1) * max(1, largest |ordinate|)`, scaled so that huge
    /// coordinates get a proportionally larger tolerance.
    pub fn adaptive(points: &[Coordinate]) -> Self {
        let magnitude = points
            .iter()
            .filter(|c| c.is_finite_2d())
            .fold(0.0_f64, |m, c| m.max(c.x.abs()).max(c.y.abs()));
        Tolerance(10.0 * f64::EPSILON * magnitude.max(1.0))
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// A tolerance relaxed by `factor`, for callers that retry a failed
    /// triangle search.
    pub fn relaxed(&self, factor: f64) -> Result<Self> {
        Tolerance::new(self.0 * factor)
    }
}

/// Settings shared by the kernel's configurable operations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KernelConfig {
    /// Grid applied to computed (never copied) intersection points.
    pub precision: Option<PrecisionModel>,
}

impl KernelConfig {
    pub fn with_precision(precision: PrecisionModel) -> Self {
        KernelConfig {
            precision: Some(precision),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_and_nan() {
        assert!(Tolerance::new(-1.0).is_err());
        assert!(Tolerance::new(f64::NAN).is_err());
        assert!(Tolerance::new(0.0).is_ok());
    }

    #[test]
    fn adaptive_scales_with_magnitude() {
        let small = Tolerance::adaptive(&[Coordinate::new(0.5, 0.25)]);
        let big = Tolerance::adaptive(&[Coordinate::new(1e6, -2e6)]);
        assert_eq!(small.value(), 10.0 * f64::EPSILON);
        assert_eq!(big.value(), 10.0 * f64::EPSILON * 2e6);
    }
}
