// Copyright 2025 Developers of the jsbigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements subtraction operations.

use super::bigint_core::BigInt;
use super::cmp::cmp_digits;
use super::digit::{borrowing_sub, is_valid_magnitude, trim_digits, BigUintSlice, DigitVec};
use std::cmp::Ordering;
use std::ops::Sub;

/// Subtracts the magnitude `b` from `a`, returning the output digits.
///
/// Employs the "long subtraction" algorithm:
/// subtracting digits from the least significant position to the most
/// significant, and propagating the resulting borrow upwards.
///
/// # Panics
///
/// Panics when `a < b`.
pub(crate) fn sub_digits(a: &BigUintSlice, b: &BigUintSlice) -> DigitVec {
    debug_assert!(is_valid_magnitude(a));
    debug_assert!(is_valid_magnitude(b));
    assert!(
        cmp_digits(a, b) != Ordering::Less,
        "attempt to subtract with overflow"
    );

    let mut result = Vec::with_capacity(a.len());
    let mut borrow = false;

    for (index, &digit) in a.iter().enumerate() {
        let rhs = b.get(index).copied().unwrap_or(0);
        let (difference, next_borrow) = borrowing_sub(digit, rhs, borrow);
        result.push(difference);
        borrow = next_borrow;
    }
    debug_assert!(!borrow);

    trim_digits(&mut result);
    result
}

impl<'a, 'b> Sub<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> Self::Output {
        self.add_sub(rhs, false)
    }
}

impl<'a> Sub<&'a BigInt> for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &Self) -> Self::Output {
        (&self).sub(rhs)
    }
}

impl<'a> Sub<BigInt> for &'a BigInt {
    type Output = BigInt;

    fn sub(self, rhs: BigInt) -> Self::Output {
        self.sub(&rhs)
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        (&self).sub(&rhs)
    }
}
