// Copyright 2025 Developers of the jsbigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements addition operations.

use super::bigint_core::BigInt;
use super::cmp::cmp_digits;
use super::digit::{carrying_add, is_valid_magnitude, BigUintSlice, DigitVec};
use super::sub::sub_digits;
use std::cmp::Ordering;
use std::ops::Add;

/// Adds the magnitudes `a` and `b`, returning the output digits.
///
/// Employs the "long addition" algorithm:
/// adding digits from the least significant position to the most
/// significant, and propagating the resulting carry upwards.
pub(crate) fn add_digits(a: &BigUintSlice, b: &BigUintSlice) -> DigitVec {
    debug_assert!(is_valid_magnitude(a));
    debug_assert!(is_valid_magnitude(b));

    let (greater, smaller) = if a.len() < b.len() { (b, a) } else { (a, b) };

    let mut result = Vec::with_capacity(greater.len() + 1);
    let mut carry = false;

    for (index, &digit) in greater.iter().enumerate() {
        let rhs = smaller.get(index).copied().unwrap_or(0);
        let (sum, next_carry) = carrying_add(digit, rhs, carry);
        result.push(sum);
        carry = next_carry;
    }
    if carry {
        result.push(1);
    }

    result
}

impl BigInt {
    /// Adds or subtracts `rhs`, selecting the kernel call and the result
    /// sign from the operand signs.
    ///
    /// An operand of zero returns the other operand (negated when
    /// subtracting), sharing its record.
    pub fn add_sub(&self, rhs: &BigInt, is_add: bool) -> BigInt {
        let Some(right) = rhs.heap() else {
            return self.clone();
        };
        let Some(left) = self.heap() else {
            return if is_add { rhs.clone() } else { -rhs };
        };

        // Subtraction is addition with the right sign flipped.
        let right_sign = if is_add { right.sign } else { -right.sign };

        if left.sign == right_sign {
            let digits = add_digits(&left.digits, &right.digits);
            return BigInt::from_digits(digits, left.sign);
        }

        // The signs disagree: the smaller magnitude is subtracted from
        // the greater one, and the greater operand decides the sign.
        match cmp_digits(&left.digits, &right.digits) {
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => {
                let digits = sub_digits(&left.digits, &right.digits);
                BigInt::from_digits(digits, left.sign)
            }
            Ordering::Less => {
                let digits = sub_digits(&right.digits, &left.digits);
                BigInt::from_digits(digits, right_sign)
            }
        }
    }
}

impl<'a, 'b> Add<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> Self::Output {
        self.add_sub(rhs, true)
    }
}

impl<'a> Add<&'a BigInt> for BigInt {
    type Output = BigInt;

    fn add(self, rhs: &Self) -> Self::Output {
        (&self).add(rhs)
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        (&self).add(&rhs)
    }
}
