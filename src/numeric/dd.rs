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
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, ToPrimitive, Zero};

/// 2^27 + 1, the Dekker splitter for IEEE doubles.
const SPLIT: f64 = 134217729.0;

/// A real number held as the unevaluated sum `hi + lo` of two doubles,
/// with `|lo| <= ulp(hi) / 2`. Gives roughly 106 significant bits.
///
/// Only the orientation fallback and the intersection internals use this;
/// it is slower than plain `f64` by an order of magnitude.
#[derive(Copy, Clone, Default)]
pub struct DoubleDouble {
    hi: f64,
    lo: f64,
}

/// Error-free sum: `a + b == s + err` exactly.
#[inline]
pub(crate) fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let err = (a - (s - bb)) + (b - bb);
    (s, err)
}

// The Dekker product sums its cross terms in operand order, so `a * b` and
// `b * a` can differ in the last bit.
fn ordered_product(a: DoubleDouble, b: DoubleDouble) -> DoubleDouble {
    let a_first = match a.hi.total_cmp(&b.hi) {
        Ordering::Equal => a.lo.total_cmp(&b.lo) != Ordering::Greater,
        ord => ord == Ordering::Less,
    };
    if a_first { a * b } else { b * a }
}

impl DoubleDouble {
    pub const ZERO: DoubleDouble = DoubleDouble { hi: 0.0, lo: 0.0 };
    pub const ONE: DoubleDouble = DoubleDouble { hi: 1.0, lo: 0.0 };
    pub const NAN: DoubleDouble = DoubleDouble {
        hi: f64::NAN,
        lo: f64::NAN,
    };

    #[inline]
    pub const fn new(hi: f64, lo: f64) -> Self {
        DoubleDouble { hi, lo }
    }

    #[inline]
    pub const fn from_f64(x: f64) -> Self {
        DoubleDouble { hi: x, lo: 0.0 }
    }

    /// `a - b` held exactly.
    #[inline]
    pub fn diff(a: f64, b: f64) -> Self {
        let (hi, lo) = two_sum(a, -b);
        DoubleDouble { hi, lo }
    }

    /// `x1 * y2 - y1 * x2` evaluated in double-double.
    ///
    /// Each product is formed with its operands in a fixed order, so swapping
    /// the two rows negates the result bit for bit.
    pub fn determinant(x1: Self, y1: Self, x2: Self, y2: Self) -> Self {
        ordered_product(x1, y2) - ordered_product(y1, x2)
    }

    #[inline]
    pub fn hi(&self) -> f64 {
        self.hi
    }

    #[inline]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.hi + self.lo
    }

    pub fn is_nan(&self) -> bool {
        self.hi.is_nan()
    }

    pub fn is_positive(&self) -> bool {
        self.hi > 0.0 || (self.hi == 0.0 && self.lo > 0.0)
    }

    pub fn is_negative(&self) -> bool {
        self.hi < 0.0 || (self.hi == 0.0 && self.lo < 0.0)
    }

    /// Returns -1, 0, or +1. NaN reports 0.
    pub fn signum(&self) -> i32 {
        if self.hi > 0.0 {
            1
        } else if self.hi < 0.0 {
            -1
        } else if self.lo > 0.0 {
            1
        } else if self.lo < 0.0 {
            -1
        } else {
            0
        }
    }

    pub fn abs(&self) -> Self {
        if self.is_negative() { -*self } else { *self }
    }

    pub fn sqr(&self) -> Self {
        *self * *self
    }

    /// Karp's trick: one Newton step on the double square root.
    pub fn sqrt(&self) -> Self {
        if self.is_zero() {
            return DoubleDouble::ZERO;
        }
        if self.is_negative() {
            return DoubleDouble::NAN;
        }
        let x = 1.0 / self.hi.sqrt();
        let ax = DoubleDouble::from_f64(self.hi * x);
        let diff_sq = *self - ax.sqr();
        ax + diff_sq.hi * (x * 0.5)
    }

    pub fn reciprocal(&self) -> Self {
        DoubleDouble::ONE / *self
    }

    /* ========= In-place arithmetic ========= */

    pub fn self_add(&mut self, y: Self) -> &mut Self {
        self.add_parts(y.hi, y.lo)
    }

    pub fn self_add_f64(&mut self, y: f64) -> &mut Self {
        let (s, e) = two_sum(self.hi, y);
        let f = e + self.lo;
        let h_sum = s + f;
        let h = f + (s - h_sum);
        self.hi = h_sum + h;
        self.lo = h + (h_sum - self.hi);
        self
    }

    pub fn self_subtract(&mut self, y: Self) -> &mut Self {
        if self.is_nan() {
            return self;
        }
        self.add_parts(-y.hi, -y.lo)
    }

    pub fn self_multiply(&mut self, y: Self) -> &mut Self {
        self.multiply_parts(y.hi, y.lo)
    }

    pub fn self_multiply_f64(&mut self, y: f64) -> &mut Self {
        self.multiply_parts(y, 0.0)
    }

    pub fn self_divide(&mut self, y: Self) -> &mut Self {
        self.divide_parts(y.hi, y.lo)
    }

    fn add_parts(&mut self, yhi: f64, ylo: f64) -> &mut Self {
        let (s_hi, s_err) = two_sum(self.hi, yhi);
        let (t_hi, t_err) = two_sum(self.lo, ylo);
        let mut e = s_err + t_hi;
        let h_sum = s_hi + e;
        let h = e + (s_hi - h_sum);
        e = t_err + h;
        let zhi = h_sum + e;
        let zlo = e + (h_sum - zhi);
        self.hi = zhi;
        self.lo = zlo;
        self
    }

    // Dekker product of the high words plus the cross terms.
    fn multiply_parts(&mut self, yhi: f64, ylo: f64) -> &mut Self {
        let mut cx = SPLIT * self.hi;
        let mut hx = cx - self.hi;
        let mut c = SPLIT * yhi;
        hx = cx - hx;
        let tx = self.hi - hx;
        let mut hy = c - yhi;
        cx = self.hi * yhi;
        hy = c - hy;
        let ty = yhi - hy;
        c = ((((hx * hy - cx) + hx * ty) + tx * hy) + tx * ty) + (self.hi * ylo + self.lo * yhi);
        let zhi = cx + c;
        hx = cx - zhi;
        let zlo = c + hx;
        self.hi = zhi;
        self.lo = zlo;
        self
    }

    fn divide_parts(&mut self, yhi: f64, ylo: f64) -> &mut Self {
        let cq = self.hi / yhi;
        let mut c = SPLIT * cq;
        let mut hc = c - cq;
        let mut u = SPLIT * yhi;
        hc = c - hc;
        let tc = cq - hc;
        let mut hy = u - yhi;
        let uq = cq * yhi;
        hy = u - hy;
        let ty = yhi - hy;
        u = (((hc * hy - uq) + hc * ty) + tc * hy) + tc * ty;
        c = ((((self.hi - uq) - u) + self.lo) - cq * ylo) / yhi;
        u = cq + c;
        self.hi = u;
        self.lo = (cq - u) + c;
        self
    }
}

/* ========= Operator overloads ========= */

impl Add for DoubleDouble {
    type Output = DoubleDouble;
    fn add(self, rhs: DoubleDouble) -> DoubleDouble {
        let mut r = self;
        r.self_add(rhs);
        r
    }
}

impl Add<f64> for DoubleDouble {
    type Output = DoubleDouble;
    fn add(self, rhs: f64) -> DoubleDouble {
        let mut r = self;
        r.self_add_f64(rhs);
        r
    }
}

impl Sub for DoubleDouble {
    type Output = DoubleDouble;
    fn sub(self, rhs: DoubleDouble) -> DoubleDouble {
        let mut r = self;
        r.self_subtract(rhs);
        r
    }
}

impl Sub<f64> for DoubleDouble {
    type Output = DoubleDouble;
    fn sub(self, rhs: f64) -> DoubleDouble {
        let mut r = self;
        r.self_add_f64(-rhs);
        r
    }
}

impl Mul for DoubleDouble {
    type Output = DoubleDouble;
    fn mul(self, rhs: DoubleDouble) -> DoubleDouble {
        if rhs.is_nan() {
            return DoubleDouble::NAN;
        }
        let mut r = self;
        r.self_multiply(rhs);
        r
    }
}

impl Mul<f64> for DoubleDouble {
    type Output = DoubleDouble;
    fn mul(self, rhs: f64) -> DoubleDouble {
        if rhs.is_nan() {
            return DoubleDouble::NAN;
        }
        let mut r = self;
        r.self_multiply_f64(rhs);
        r
    }
}

impl Div for DoubleDouble {
    type Output = DoubleDouble;
    fn div(self, rhs: DoubleDouble) -> DoubleDouble {
        let mut r = self;
        r.self_divide(rhs);
        r
    }
}

impl Div<f64> for DoubleDouble {
    type Output = DoubleDouble;
    fn div(self, rhs: f64) -> DoubleDouble {
        if rhs.is_nan() {
            return DoubleDouble::NAN;
        }
        let mut r = self;
        r.divide_parts(rhs, 0.0);
        r
    }
}

impl Neg for DoubleDouble {
    type Output = DoubleDouble;
    fn neg(self) -> DoubleDouble {
        if self.is_nan() {
            return self;
        }
        DoubleDouble::new(-self.hi, -self.lo)
    }
}

impl AddAssign for DoubleDouble {
    fn add_assign(&mut self, rhs: DoubleDouble) {
        self.self_add(rhs);
    }
}

impl AddAssign<f64> for DoubleDouble {
    fn add_assign(&mut self, rhs: f64) {
        self.self_add_f64(rhs);
    }
}

impl SubAssign for DoubleDouble {
    fn sub_assign(&mut self, rhs: DoubleDouble) {
        self.self_subtract(rhs);
    }
}

impl MulAssign for DoubleDouble {
    fn mul_assign(&mut self, rhs: DoubleDouble) {
        self.self_multiply(rhs);
    }
}

impl DivAssign for DoubleDouble {
    fn div_assign(&mut self, rhs: DoubleDouble) {
        self.self_divide(rhs);
    }
}

/* ========= Comparisons and conversions ========= */

impl PartialEq for DoubleDouble {
    fn eq(&self, other: &DoubleDouble) -> bool {
        self.hi == other.hi && self.lo == other.lo
    }
}

impl PartialOrd for DoubleDouble {
    fn partial_cmp(&self, other: &DoubleDouble) -> Option<Ordering> {
        match self.hi.partial_cmp(&other.hi)? {
            Ordering::Equal => self.lo.partial_cmp(&other.lo),
            ord => Some(ord),
        }
    }
}

impl Zero for DoubleDouble {
    fn zero() -> Self {
        DoubleDouble::ZERO
    }

    fn is_zero(&self) -> bool {
        self.hi == 0.0 && self.lo == 0.0
    }
}

impl One for DoubleDouble {
    fn one() -> Self {
        DoubleDouble::ONE
    }
}

impl ToPrimitive for DoubleDouble {
    fn to_i64(&self) -> Option<i64> {
        self.to_f64().to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.to_f64().to_u64()
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.hi + self.lo)
    }
}

impl From<f64> for DoubleDouble {
    fn from(value: f64) -> Self {
        DoubleDouble::from_f64(value)
    }
}

impl fmt::Debug for DoubleDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DoubleDouble({:e} + {:e})", self.hi, self.lo)
    }
}
