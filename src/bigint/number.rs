// Copyright 2025 Developers of the jsbigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements the Number ⇄ BigInt bridge.
//!
//! A finite IEEE-754 double decodes into at most three digits, a count
//! of implied zero digits, and a fraction flag. The decoded form drives
//! both the conversion from numbers and the mixed comparisons, which
//! reason about the double's exponent and mantissa directly instead of
//! rounding through floating point.

use super::bigint_core::{BigInt, Sign};
use super::digit::{Digit, DIGIT_BITS};
use super::error::BigIntError;
use std::cmp::Ordering;

/// Mantissa field width of a double.
const FRACTION_WIDTH: u32 = 52;
/// Exponent bias of a double.
const EXPONENT_BIAS: u32 = 1023;
const EXPONENT_MASK: u64 = 0x7ff;

/// The magnitude of a finite double, decoded.
///
/// The integer part is `digits[..len]` in little-endian order, followed
/// below by `zero_digits` implied all-zero digits; `has_fraction` is set
/// when bits remain under the radix point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NumberParts {
    pub(crate) digits: [Digit; 3],
    pub(crate) len: usize,
    pub(crate) zero_digits: usize,
    pub(crate) has_fraction: bool,
}

/// Decodes the magnitude of a finite double; the sign is ignored,
/// callers handle it.
///
/// A biased exponent of zero (the IEEE zero and the denormals) decodes
/// as exactly zero: denormal precision is discarded.
pub(crate) fn number_to_parts(number: f64) -> NumberParts {
    let bits = number.to_bits();
    let biased_exp = ((bits >> FRACTION_WIDTH) & EXPONENT_MASK) as u32;
    let fraction = bits & ((1 << FRACTION_WIDTH) - 1);

    let mut parts = NumberParts {
        digits: [0; 3],
        len: 0,
        zero_digits: 0,
        has_fraction: false,
    };

    if biased_exp == 0 {
        return parts;
    }

    if biased_exp < EXPONENT_BIAS {
        // The magnitude is in (0, 1).
        parts.has_fraction = true;
        return parts;
    }

    let exponent = biased_exp - EXPONENT_BIAS;
    let mantissa = fraction | 1 << FRACTION_WIDTH;

    if exponent <= FRACTION_WIDTH {
        // The bits below `FRACTION_WIDTH - exponent` sit under the
        // radix point.
        parts.has_fraction =
            exponent < FRACTION_WIDTH && mantissa << (exponent + (u64::BITS - FRACTION_WIDTH)) != 0;

        let integral = mantissa >> (FRACTION_WIDTH - exponent);
        parts.digits[0] = integral as Digit;
        parts.digits[1] = (integral >> DIGIT_BITS) as Digit;
        parts.len = if parts.digits[1] == 0 { 1 } else { 2 };
        return parts;
    }

    // The exponent exceeds the mantissa width: the mantissa is shifted
    // left, whole digits of it expressed as a zero-digit count.
    let extra = exponent - FRACTION_WIDTH;
    let bit_shift = extra % DIGIT_BITS;
    parts.zero_digits = (extra / DIGIT_BITS) as usize;

    parts.digits[0] = mantissa as Digit;
    parts.digits[1] = (mantissa >> DIGIT_BITS) as Digit;
    parts.len = 2;

    if bit_shift > 0 {
        let carry_shift = DIGIT_BITS - bit_shift;
        parts.digits[2] = parts.digits[1] >> carry_shift;
        parts.digits[1] = parts.digits[1] << bit_shift | parts.digits[0] >> carry_shift;
        parts.digits[0] <<= bit_shift;
        if parts.digits[2] != 0 {
            parts.len = 3;
        }
    }

    parts
}

impl BigInt {
    /// Converts a finite integral double.
    pub fn from_number(number: f64) -> Result<BigInt, BigIntError> {
        if !number.is_finite() {
            return Err(BigIntError::NonFinite);
        }

        let parts = number_to_parts(number);
        if parts.has_fraction {
            return Err(BigIntError::NonInteger);
        }
        if parts.len == 0 {
            return Ok(BigInt::zero());
        }

        let mut digits = vec![0; parts.zero_digits];
        digits.extend_from_slice(&parts.digits[..parts.len]);

        let sign = if number < 0.0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Ok(BigInt::from_digits(digits, sign))
    }
}

fn equals_number(value: &BigInt, number: f64) -> bool {
    if !number.is_finite() {
        return false;
    }
    let Some(heap) = value.heap() else {
        return number == 0.0;
    };

    // The signs must match.
    if heap.sign == Sign::Negative {
        if number > 0.0 {
            return false;
        }
    } else if number < 0.0 {
        return false;
    }

    let parts = number_to_parts(number);
    if parts.has_fraction {
        return false;
    }
    if heap.digits.len() != parts.zero_digits + parts.len {
        return false;
    }

    // The value digits first, then the implied zero digits.
    heap.digits[parts.zero_digits..] == parts.digits[..parts.len]
        && heap.digits[..parts.zero_digits].iter().all(|&digit| digit == 0)
}

fn compare_number(value: &BigInt, number: f64) -> Ordering {
    debug_assert!(!number.is_nan());

    // The outcome when the number dominates on magnitude alone.
    let number_dominates = if number > 0.0 {
        Ordering::Less
    } else {
        Ordering::Greater
    };

    let Some(heap) = value.heap() else {
        return if number == 0.0 {
            Ordering::Equal
        } else {
            number_dominates
        };
    };

    // The outcome when the BigInt dominates.
    let value_dominates = match heap.sign {
        Sign::Negative => Ordering::Less,
        Sign::Positive => Ordering::Greater,
    };

    if number == 0.0 || value_dominates == number_dominates {
        // A positive BigInt is greater than any non-positive number,
        // and the reverse.
        return value_dominates;
    }

    if number.is_infinite() {
        return number_dominates;
    }

    let parts = number_to_parts(number);

    if parts.len == 0 {
        // The number is in (-1, 1) exclusive, denormals included; the
        // magnitude is at least one.
        return value_dominates;
    }

    let value_len = heap.digits.len();
    let number_len = parts.zero_digits + parts.len;
    if value_len != number_len {
        return if value_len > number_len {
            value_dominates
        } else {
            value_dominates.reverse()
        };
    }

    // Equal sizes: compares the decoded digits from the most
    // significant end.
    for index in (0..parts.len).rev() {
        let left = heap.digits[parts.zero_digits + index];
        let right = parts.digits[index];
        if left != right {
            return if left > right {
                value_dominates
            } else {
                value_dominates.reverse()
            };
        }
    }

    // Any bit under the number's zero tail outweighs it.
    if heap.digits[..parts.zero_digits].iter().any(|&digit| digit != 0) {
        return value_dominates;
    }

    // The integer parts are equal; a fractional tail pushes the number
    // away from zero.
    if parts.has_fraction {
        value_dominates.reverse()
    } else {
        Ordering::Equal
    }
}

impl PartialEq<f64> for BigInt {
    fn eq(&self, other: &f64) -> bool {
        equals_number(self, *other)
    }
}

impl PartialEq<BigInt> for f64 {
    fn eq(&self, other: &BigInt) -> bool {
        equals_number(other, *self)
    }
}

impl PartialOrd<f64> for BigInt {
    /// Returns `None` for NaN, which compares with nothing.
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        if other.is_nan() {
            return None;
        }
        Some(compare_number(self, *other))
    }
}

impl PartialOrd<BigInt> for f64 {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}
