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
use std::ops::{Mul, Sub};

use rug::Rational;

/// Arbitrary-precision rational used as the reference tier for the
/// floating-point predicates. Every finite `f64` converts exactly.
#[derive(Clone, Debug)]
pub struct ExactRational(pub Rational);

impl ExactRational {
    /// Exact conversion; `None` for NaN and infinities.
    pub fn from_f64(value: f64) -> Option<Self> {
        Rational::from_f64(value).map(ExactRational)
    }

    /// Returns -1, 0, or +1.
    pub fn signum(&self) -> i32 {
        match self.0.cmp0() {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

impl<'a, 'b> Sub<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn sub(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result -= &rhs.0;
        ExactRational(result)
    }
}

impl<'a, 'b> Mul<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn mul(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result *= &rhs.0;
        ExactRational(result)
    }
}

impl PartialEq for ExactRational {
    fn eq(&self, other: &ExactRational) -> bool {
        self.0 == other.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_is_exact() {
        let a = ExactRational::from_f64(0.1).unwrap();
        let b = ExactRational::from_f64(0.2).unwrap();
        let c = ExactRational::from_f64(0.3).unwrap();
        // the binary 0.1 + 0.2 exceeds the binary 0.3
        assert_eq!((&(&c - &b) - &a).signum(), -1);
        let half = ExactRational::from_f64(0.5).unwrap();
        let four = ExactRational::from_f64(4.0).unwrap();
        let two = ExactRational::from_f64(2.0).unwrap();
        assert_eq!((&(&half * &four) - &two).signum(), 0);
        assert_eq!(&half * &four, two);
    }

    #[test]
    fn rejects_non_finite() {
        assert!(ExactRational::from_f64(f64::NAN).is_none());
        assert!(ExactRational::from_f64(f64::INFINITY).is_none());
    }
}
