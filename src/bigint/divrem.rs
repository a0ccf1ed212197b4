// Copyright 2025 Developers of the jsbigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements division operations.

use super::bigint_core::{BigInt, Sign};
use super::cmp::cmp_digits;
use super::digit::{
    borrowing_sub, carrying_add, is_valid_magnitude, trim_digits, BigUintSlice, Digit, DigitVec,
    DoubleDigit, DIGIT_BITS,
};
use super::error::BigIntError;
use super::shift::{shift_left_digits, shift_right_digits};
use std::cmp::Ordering;
use std::ops::{Div, Rem};

/// Divides the magnitude `dividend` by a single digit, returning the
/// quotient digits and the remainder digit.
///
/// Divides from the most significant digit downwards, carrying the
/// running remainder into the next digit.
pub(crate) fn div_rem_digit(dividend: &BigUintSlice, divisor: Digit) -> (DigitVec, Digit) {
    debug_assert!(is_valid_magnitude(dividend));
    debug_assert!(divisor != 0);

    let divisor = divisor as DoubleDigit;
    let mut quotient = vec![0; dividend.len()];
    let mut remainder: DoubleDigit = 0;

    // The iterators are reversed for the digits are stored in
    // little-endian order.
    for (quotient_digit, &dividend_digit) in quotient.iter_mut().rev().zip(dividend.iter().rev()) {
        let t = remainder << DIGIT_BITS | dividend_digit as DoubleDigit;
        *quotient_digit = (t / divisor) as Digit;
        remainder = t % divisor;
    }

    trim_digits(&mut quotient);
    (quotient, remainder as Digit)
}

/// Divides the magnitude `dividend` by `divisor`, returning the quotient
/// and the remainder digits.
///
/// Employs Knuth's Algorithm D from the book "The Art of Computer
/// Programming, Volume 2", section 4.3.1: both operands are scaled so
/// the divisor's most significant bit is set, then each step estimates
/// one quotient digit from the top three dividend digits and the top two
/// divisor digits, corrects the estimate at most twice, and
/// multiply-subtracts it from the dividend window. The digits left over
/// at the end are the scaled remainder.
///
/// - `dividend` must be greater than `divisor`; the signed layer
///   short-circuits the other cases.
/// - `divisor` must have at least two digits; see [`div_rem_digit`].
pub(crate) fn div_rem_digits(
    dividend: &BigUintSlice,
    divisor: &BigUintSlice,
) -> (DigitVec, DigitVec) {
    debug_assert!(is_valid_magnitude(dividend));
    debug_assert!(is_valid_magnitude(divisor));
    debug_assert!(divisor.len() >= 2);
    debug_assert!(cmp_digits(dividend, divisor) == Ordering::Greater);

    // Normalization scaling factor (adapted from the crate num-bigint).
    let shift = divisor.last().unwrap().leading_zeros() as usize;

    let mut u = shift_left_digits(dividend, shift);
    let v = shift_left_digits(divisor, shift);
    debug_assert_eq!(v.len(), divisor.len());

    let n = v.len();
    // Zero padding at the most significant end, so every step sees a
    // full window of n + 1 dividend digits.
    u.resize(dividend.len() + 1, 0);

    let v0 = v[n - 1] as DoubleDigit;
    let v1 = v[n - 2] as DoubleDigit;
    let mut quotient = vec![0; dividend.len() - n + 1];

    for j in (0..quotient.len()).rev() {
        // Estimates the quotient digit `q_hat` from the top digits:
        // after normalization the estimate is at most two too large.
        let top = (u[j + n] as DoubleDigit) << DIGIT_BITS | u[j + n - 1] as DoubleDigit;
        let mut q_hat = top / v0;
        let mut r_hat = top % v0;

        while q_hat >> DIGIT_BITS != 0
            || q_hat * v1 > r_hat << DIGIT_BITS | u[j + n - 2] as DoubleDigit
        {
            q_hat -= 1;
            r_hat += v0;
            if r_hat >> DIGIT_BITS != 0 {
                break;
            }
        }

        // Multiply-subtracts: u[j..=j+n] -= q_hat * v.
        let mut q_hat = q_hat as Digit;
        let mut mul_carry: DoubleDigit = 0;
        let mut borrow = false;
        for i in 0..n {
            let t = q_hat as DoubleDigit * v[i] as DoubleDigit + mul_carry;
            mul_carry = t >> DIGIT_BITS;
            let (digit, next_borrow) = borrowing_sub(u[j + i], t as Digit, borrow);
            u[j + i] = digit;
            borrow = next_borrow;
        }
        let (digit, borrowed_out) = borrowing_sub(u[j + n], mul_carry as Digit, borrow);
        u[j + n] = digit;

        // The estimate was still one too large when the subtraction
        // borrows out of the window; one divisor is added back.
        if borrowed_out {
            q_hat -= 1;
            let mut carry = false;
            for i in 0..n {
                let (digit, next_carry) = carrying_add(u[j + i], v[i], carry);
                u[j + i] = digit;
                carry = next_carry;
            }
            u[j + n] = u[j + n].wrapping_add(carry as Digit);
        }

        quotient[j] = q_hat;
    }

    trim_digits(&mut quotient);

    // The digits left in the dividend storage are the scaled remainder.
    u.truncate(n);
    trim_digits(&mut u);
    let remainder = if shift == 0 || u.is_empty() {
        u
    } else {
        shift_right_digits(&u, shift)
    };

    (quotient, remainder)
}

impl BigInt {
    /// Divides by `rhs`, returning the quotient truncated toward zero,
    /// or the remainder when `want_mod` is set.
    ///
    /// The quotient is negative when the operand signs differ; the
    /// remainder takes the dividend's sign.
    pub fn div_mod(&self, rhs: &BigInt, want_mod: bool) -> Result<BigInt, BigIntError> {
        let Some(right) = rhs.heap() else {
            return Err(BigIntError::DivisionByZero);
        };
        let Some(left) = self.heap() else {
            return Ok(self.clone());
        };

        match cmp_digits(&left.digits, &right.digits) {
            Ordering::Less => {
                if want_mod {
                    Ok(self.clone())
                } else {
                    Ok(BigInt::zero())
                }
            }
            Ordering::Equal => {
                if want_mod {
                    Ok(BigInt::zero())
                } else {
                    let sign = if left.sign == right.sign {
                        Sign::Positive
                    } else {
                        Sign::Negative
                    };
                    Ok(BigInt::from_digits(vec![1], sign))
                }
            }
            Ordering::Greater => {
                let (quotient, remainder) = if right.digits.len() == 1 {
                    let (quotient, remainder) = div_rem_digit(&left.digits, right.digits[0]);
                    let remainder = if remainder == 0 {
                        Vec::new()
                    } else {
                        vec![remainder]
                    };
                    (quotient, remainder)
                } else {
                    div_rem_digits(&left.digits, &right.digits)
                };

                if want_mod {
                    Ok(BigInt::from_digits(remainder, left.sign))
                } else {
                    let sign = if left.sign == right.sign {
                        Sign::Positive
                    } else {
                        Sign::Negative
                    };
                    Ok(BigInt::from_digits(quotient, sign))
                }
            }
        }
    }
}

impl<'a, 'b> Div<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> Self::Output {
        match self.div_mod(rhs, false) {
            Ok(quotient) => quotient,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

impl<'a> Div<&'a BigInt> for BigInt {
    type Output = BigInt;

    fn div(self, rhs: &Self) -> Self::Output {
        (&self).div(rhs)
    }
}

impl Div for BigInt {
    type Output = BigInt;

    fn div(self, rhs: Self) -> Self::Output {
        (&self).div(&rhs)
    }
}

impl<'a, 'b> Rem<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &BigInt) -> Self::Output {
        match self.div_mod(rhs, true) {
            Ok(remainder) => remainder,
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

impl<'a> Rem<&'a BigInt> for BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &Self) -> Self::Output {
        (&self).rem(rhs)
    }
}

impl Rem for BigInt {
    type Output = BigInt;

    fn rem(self, rhs: Self) -> Self::Output {
        (&self).rem(&rhs)
    }
}
