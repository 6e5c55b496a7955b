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
use crate::geometry::Coordinate;

/// How computed ordinates are snapped before being handed back.
///
/// Only points the kernel synthesises are rounded. Input coordinates that are
/// copied through (an endpoint that is also the intersection point, say) keep
/// their exact value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PrecisionModel {
    /// Full double precision; rounding is a no-op.
    #[default]
    Floating,
    /// Values are rounded to the nearest `f32`.
    FloatingSingle,
    /// Values are snapped to a grid of spacing `1 / scale`.
    Fixed { scale: f64 },
}

impl PrecisionModel {
    pub fn fixed(scale: f64) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(KernelError::InvalidScale(scale));
        }
        Ok(PrecisionModel::Fixed { scale })
    }

    pub fn is_floating(&self) -> bool {
        !matches!(self, PrecisionModel::Fixed { .. })
    }

    /// Grid spacing, or 0 for floating models.
    pub fn grid_size(&self) -> f64 {
        match self {
            PrecisionModel::Fixed { scale } => 1.0 / scale,
            _ => 0.0,
        }
    }

    pub fn make_precise(&self, value: f64) -> f64 {
        if value.is_nan() {
            return value;
        }
        match *self {
            PrecisionModel::Floating => value,
            PrecisionModel::FloatingSingle => value as f32 as f64,
            // round half up: -1.25 snaps to -1.2 on a 0.1 grid
            PrecisionModel::Fixed { scale } => (value * scale + 0.5).floor() / scale,
        }
    }

    /// Rounds x and y. The elevation is left untouched.
    pub fn make_precise_coord(&self, c: &Coordinate) -> Coordinate {
        Coordinate::new_xyz(self.make_precise(c.x), self.make_precise(c.y), c.z)
    }
}
