// Copyright 2025 Developers of the jsbigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements the bitwise operations.
//!
//! Operands are sign-magnitude, but the operators must behave as if the
//! values were expressed in infinite two's complement. Exploiting
//! `-n == ~(n - 1)`, every signed case reduces to one magnitude-level
//! operation with a selection of options; the tables live in the
//! operator methods below.

use super::bigint_core::{BigInt, HeapBigInt, Sign};
use super::digit::{is_valid_magnitude, trim_digits, BigUintSlice, Digit, DigitVec};
use bitflags::bitflags;
use std::borrow::Cow;
use std::cmp;
use std::ops::{BitAnd, BitOr, BitXor};
use std::rc::Rc;

/// A magnitude-level bitwise operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BitwiseOp {
    And,
    Or,
    Xor,
    /// `a & !b`; `b` is zero-extended to `a`'s length before the
    /// complement.
    AndNot,
}

bitflags! {
    /// Adjustments applied around a magnitude-level bitwise operation.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub(crate) struct BitwiseOptions: u32 {
        /// Treats the left magnitude as `left - 1`.
        const DECREASE_LEFT = 1 << 0;
        /// Treats the right magnitude as `right - 1`.
        const DECREASE_RIGHT = 1 << 1;
        /// Adds one to the result magnitude; the signed layer marks
        /// such results negative.
        const INCREASE_RESULT = 1 << 2;

        const DECREASE_BOTH = Self::DECREASE_LEFT.bits() | Self::DECREASE_RIGHT.bits();
    }
}

/// Subtracts one from a non-zero magnitude.
fn decrease_digits(digits: &BigUintSlice) -> DigitVec {
    debug_assert!(is_valid_magnitude(digits));

    let mut result = digits.to_vec();
    for digit in result.iter_mut() {
        if *digit == 0 {
            // Borrows through.
            *digit = Digit::MAX;
        } else {
            *digit -= 1;
            break;
        }
    }

    trim_digits(&mut result);
    result
}

/// Adds one to a magnitude in place.
fn increase_digits(digits: &mut DigitVec) {
    for digit in digits.iter_mut() {
        let (increased, carry) = digit.overflowing_add(1);
        *digit = increased;
        if !carry {
            return;
        }
    }
    digits.push(1);
}

/// Combines the magnitudes `left` and `right` element-wise, the shorter
/// operand zero-extended, after applying the `DECREASE_*` options.
/// Returns an empty vector for a zero result.
pub(crate) fn bitwise_digits(
    op: BitwiseOp,
    options: BitwiseOptions,
    left: &BigUintSlice,
    right: &BigUintSlice,
) -> DigitVec {
    debug_assert!(is_valid_magnitude(left));
    debug_assert!(is_valid_magnitude(right));

    let left: Cow<BigUintSlice> = if options.contains(BitwiseOptions::DECREASE_LEFT) {
        decrease_digits(left).into()
    } else {
        left.into()
    };
    let right: Cow<BigUintSlice> = if options.contains(BitwiseOptions::DECREASE_RIGHT) {
        decrease_digits(right).into()
    } else {
        right.into()
    };

    let len = cmp::max(left.len(), right.len());
    let mut result = Vec::with_capacity(len + 1);

    for index in 0..len {
        let x = left.get(index).copied().unwrap_or(0);
        let y = right.get(index).copied().unwrap_or(0);
        result.push(match op {
            BitwiseOp::And => x & y,
            BitwiseOp::Or => x | y,
            BitwiseOp::Xor => x ^ y,
            BitwiseOp::AndNot => x & !y,
        });
    }

    if options.contains(BitwiseOptions::INCREASE_RESULT) {
        increase_digits(&mut result);
    }

    trim_digits(&mut result);
    result
}

/// Wraps a kernel result: `INCREASE_RESULT` marks the value negative.
fn bitwise_op(
    op: BitwiseOp,
    options: BitwiseOptions,
    left: &Rc<HeapBigInt>,
    right: &Rc<HeapBigInt>,
) -> BigInt {
    let digits = bitwise_digits(op, options, &left.digits, &right.digits);
    let sign = if options.contains(BitwiseOptions::INCREASE_RESULT) {
        Sign::Negative
    } else {
        Sign::Positive
    };
    BigInt::from_digits(digits, sign)
}

impl BigInt {
    /// Bitwise `&` under two's-complement semantics.
    pub fn and(&self, rhs: &BigInt) -> BigInt {
        let (Some(left), Some(right)) = (self.heap(), rhs.heap()) else {
            return BigInt::zero();
        };

        let (op, options, swapped) = match (left.sign, right.sign) {
            // x & y
            (Sign::Positive, Sign::Positive) => (BitwiseOp::And, BitwiseOptions::empty(), false),
            // x & -y == x & ~(y-1) == x &~ (y-1)
            (Sign::Positive, Sign::Negative) => {
                (BitwiseOp::AndNot, BitwiseOptions::DECREASE_RIGHT, false)
            }
            // -x & y == ~(x-1) & y == y &~ (x-1)
            (Sign::Negative, Sign::Positive) => {
                (BitwiseOp::AndNot, BitwiseOptions::DECREASE_RIGHT, true)
            }
            // -x & -y == ~(x-1) & ~(y-1) == ~((x-1) | (y-1)) == -(((x-1) | (y-1)) + 1)
            (Sign::Negative, Sign::Negative) => (
                BitwiseOp::Or,
                BitwiseOptions::DECREASE_BOTH | BitwiseOptions::INCREASE_RESULT,
                false,
            ),
        };

        let (a, b) = if swapped { (right, left) } else { (left, right) };
        bitwise_op(op, options, a, b)
    }

    /// Bitwise `|` under two's-complement semantics.
    pub fn or(&self, rhs: &BigInt) -> BigInt {
        let Some(left) = self.heap() else {
            return rhs.clone();
        };
        let Some(right) = rhs.heap() else {
            return self.clone();
        };

        let (op, options, swapped) = match (left.sign, right.sign) {
            // x | y
            (Sign::Positive, Sign::Positive) => (BitwiseOp::Or, BitwiseOptions::empty(), false),
            // x | -y == x | ~(y-1) == ~((y-1) &~ x) == -(((y-1) &~ x) + 1)
            (Sign::Positive, Sign::Negative) => (
                BitwiseOp::AndNot,
                BitwiseOptions::DECREASE_LEFT | BitwiseOptions::INCREASE_RESULT,
                true,
            ),
            // -x | y == ~(x-1) | y == ~((x-1) &~ y) == -(((x-1) &~ y) + 1)
            (Sign::Negative, Sign::Positive) => (
                BitwiseOp::AndNot,
                BitwiseOptions::DECREASE_LEFT | BitwiseOptions::INCREASE_RESULT,
                false,
            ),
            // -x | -y == ~(x-1) | ~(y-1) == ~((x-1) & (y-1)) == -(((x-1) & (y-1)) + 1)
            (Sign::Negative, Sign::Negative) => (
                BitwiseOp::And,
                BitwiseOptions::DECREASE_BOTH | BitwiseOptions::INCREASE_RESULT,
                false,
            ),
        };

        let (a, b) = if swapped { (right, left) } else { (left, right) };
        bitwise_op(op, options, a, b)
    }

    /// Bitwise `^` under two's-complement semantics.
    pub fn xor(&self, rhs: &BigInt) -> BigInt {
        let Some(left) = self.heap() else {
            return rhs.clone();
        };
        let Some(right) = rhs.heap() else {
            return self.clone();
        };

        let (op, options) = match (left.sign, right.sign) {
            // x ^ y
            (Sign::Positive, Sign::Positive) => (BitwiseOp::Xor, BitwiseOptions::empty()),
            // x ^ -y == x ^ ~(y-1) == ~(x ^ (y-1)) == -((x ^ (y-1)) + 1)
            (Sign::Positive, Sign::Negative) => (
                BitwiseOp::Xor,
                BitwiseOptions::DECREASE_RIGHT | BitwiseOptions::INCREASE_RESULT,
            ),
            // -x ^ y == ~(x-1) ^ y == ~((x-1) ^ y) == -(((x-1) ^ y) + 1)
            (Sign::Negative, Sign::Positive) => (
                BitwiseOp::Xor,
                BitwiseOptions::DECREASE_LEFT | BitwiseOptions::INCREASE_RESULT,
            ),
            // -x ^ -y == ~(x-1) ^ ~(y-1) == (x-1) ^ (y-1)
            (Sign::Negative, Sign::Negative) => (BitwiseOp::Xor, BitwiseOptions::DECREASE_BOTH),
        };

        bitwise_op(op, options, left, right)
    }
}

impl<'a, 'b> BitAnd<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn bitand(self, rhs: &BigInt) -> Self::Output {
        self.and(rhs)
    }
}

impl BitAnd for BigInt {
    type Output = BigInt;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(&rhs)
    }
}

impl<'a, 'b> BitOr<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn bitor(self, rhs: &BigInt) -> Self::Output {
        self.or(rhs)
    }
}

impl BitOr for BigInt {
    type Output = BigInt;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(&rhs)
    }
}

impl<'a, 'b> BitXor<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn bitxor(self, rhs: &BigInt) -> Self::Output {
        self.xor(rhs)
    }
}

impl BitXor for BigInt {
    type Output = BigInt;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.xor(&rhs)
    }
}
