// Copyright 2025 Developers of the jsbigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements multiplication operations.

use super::bigint_core::{BigInt, Sign};
use super::digit::{
    is_valid_magnitude, trim_digits, BigUintSlice, Digit, DigitVec, DoubleDigit, DIGIT_BITS,
};
use std::ops::Mul;

/// Multiplies the magnitudes `a` and `b`, returning the output digits.
///
/// Employs the ["long multiplication"][1] algorithm:
/// multiplying each digit of the smaller operand with the greater
/// operand, accumulating the properly shifted results as it goes.
///
/// [1]: https://en.wikipedia.org/wiki/Multiplication_algorithm#Long_multiplication
pub(crate) fn mul_digits(a: &BigUintSlice, b: &BigUintSlice) -> DigitVec {
    debug_assert!(is_valid_magnitude(a));
    debug_assert!(is_valid_magnitude(b));

    let (greater, smaller) = if a.len() < b.len() { (b, a) } else { (a, b) };

    let mut result = vec![0; greater.len() + smaller.len()];

    for (offset, &multiplier) in smaller.iter().enumerate() {
        let mut carry: DoubleDigit = 0;

        // `t` cannot overflow the double-digit type:
        // (b - 1) * (b - 1) + (b - 1) + (b - 1) = b^2 - 1 < b^2
        let window = &mut result[offset..offset + greater.len() + 1];
        for (&digit, accumulated) in greater.iter().zip(window.iter_mut()) {
            let t = multiplier as DoubleDigit * digit as DoubleDigit
                + *accumulated as DoubleDigit
                + carry;
            *accumulated = t as Digit;
            carry = t >> DIGIT_BITS;
        }
        if carry > 0 {
            window[greater.len()] = carry as Digit;
        }
    }

    trim_digits(&mut result);
    result
}

/// Computes `digits * multiplier + addend` in place, growing the vector
/// when the final carry demands it.
///
/// An empty accumulator is treated as zero; this is the accumulation
/// primitive of the string parser.
pub(crate) fn mul_add_digit(digits: &mut DigitVec, multiplier: Digit, addend: Digit) {
    let mut carry = addend as DoubleDigit;

    for digit in digits.iter_mut() {
        let t = *digit as DoubleDigit * multiplier as DoubleDigit + carry;
        *digit = t as Digit;
        carry = t >> DIGIT_BITS;
    }
    if carry > 0 {
        digits.push(carry as Digit);
    }
}

impl<'a, 'b> Mul<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> Self::Output {
        let (Some(left), Some(right)) = (self.heap(), rhs.heap()) else {
            return BigInt::zero();
        };

        // A magnitude of exactly one turns the multiplication into a
        // copy or a negation of the other operand.
        if left.digits[..] == [1] {
            return match left.sign {
                Sign::Negative => -rhs,
                Sign::Positive => rhs.clone(),
            };
        }
        if right.digits[..] == [1] {
            return match right.sign {
                Sign::Negative => -self,
                Sign::Positive => self.clone(),
            };
        }

        let digits = mul_digits(&left.digits, &right.digits);
        let sign = if left.sign == right.sign {
            Sign::Positive
        } else {
            Sign::Negative
        };
        BigInt::from_digits(digits, sign)
    }
}

impl<'a> Mul<&'a BigInt> for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &Self) -> Self::Output {
        (&self).mul(rhs)
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: Self) -> Self::Output {
        (&self).mul(&rhs)
    }
}
