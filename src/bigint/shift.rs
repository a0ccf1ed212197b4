// Copyright 2025 Developers of the jsbigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements shifting operations.

use super::bigint_core::{BigInt, Sign};
use super::digit::{
    bit_len_digits, is_valid_magnitude, trim_digits, BigUintSlice, DigitVec, DIGIT_BITS,
};
use super::error::BigIntError;

/// Shifts the magnitude left by `bits`, returning the output digits.
pub(crate) fn shift_left_digits(digits: &BigUintSlice, bits: usize) -> DigitVec {
    debug_assert!(is_valid_magnitude(digits));

    let digit_shift = bits / DIGIT_BITS as usize;
    let bit_shift = bits % DIGIT_BITS as usize;

    // One extra digit for the bits carried out at the most significant
    // end; trimmed when unused.
    let mut result = vec![0; digits.len() + digit_shift + 1];
    result[digit_shift..digit_shift + digits.len()].copy_from_slice(digits);

    if bit_shift > 0 {
        let carry_shift = DIGIT_BITS as usize - bit_shift;
        let mut carry = 0;
        for digit in result[digit_shift..].iter_mut() {
            let t = *digit >> carry_shift;
            *digit = *digit << bit_shift | carry;
            carry = t;
        }
    }

    trim_digits(&mut result);
    result
}

/// Shifts the magnitude right by `bits`, returning the output digits.
///
/// Shifting every bit out yields an empty vector, the kernel's way of
/// reporting zero.
pub(crate) fn shift_right_digits(digits: &BigUintSlice, bits: usize) -> DigitVec {
    debug_assert!(is_valid_magnitude(digits));

    if bits >= bit_len_digits(digits) {
        return Vec::new();
    }

    let digit_shift = bits / DIGIT_BITS as usize;
    let bit_shift = bits % DIGIT_BITS as usize;

    let mut result = digits[digit_shift..].to_vec();

    if bit_shift > 0 {
        let carry_shift = DIGIT_BITS as usize - bit_shift;
        let mut carry = 0;
        for digit in result.iter_mut().rev() {
            let t = *digit << carry_shift;
            *digit = *digit >> bit_shift | carry;
            carry = t;
        }
    }

    trim_digits(&mut result);
    result
}

impl BigInt {
    /// Shifts by a BigInt-valued count, to the left when `is_left` is
    /// set. A negative count swaps the direction.
    ///
    /// A count that does not fit in a single digit either exhausts the
    /// address space (left shift, reported as the allocation error) or
    /// shifts every bit out (right shift, zero).
    pub fn shift(&self, rhs: &BigInt, is_left: bool) -> Result<BigInt, BigIntError> {
        let Some(left) = self.heap() else {
            return Ok(BigInt::zero());
        };
        let Some(right) = rhs.heap() else {
            return Ok(self.clone());
        };

        let is_left = if right.sign == Sign::Negative {
            !is_left
        } else {
            is_left
        };

        if right.digits.len() > 1 {
            if is_left {
                return Err(BigIntError::OutOfMemory);
            }
            return Ok(BigInt::zero());
        }

        let amount = right.digits[0] as usize;
        let digits = if is_left {
            shift_left_digits(&left.digits, amount)
        } else {
            shift_right_digits(&left.digits, amount)
        };

        Ok(BigInt::from_digits(digits, left.sign))
    }
}
