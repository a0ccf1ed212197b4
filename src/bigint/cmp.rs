// Copyright 2025 Developers of the jsbigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements comparing operations.

use super::bigint_core::{BigInt, Sign};
use super::digit::{is_valid_magnitude, BigUintSlice};
use std::cmp::Ordering;

/// Returns an Ordering between the magnitudes `a` and `b`.
///
/// A longer magnitude is greater; magnitudes of the same length compare
/// digit by digit from the most significant end.
pub(crate) fn cmp_digits(a: &BigUintSlice, b: &BigUintSlice) -> Ordering {
    debug_assert!(is_valid_magnitude(a));
    debug_assert!(is_valid_magnitude(b));

    match a.len().cmp(&b.len()) {
        Ordering::Equal => a.iter().rev().cmp(b.iter().rev()),
        ordering => ordering,
    }
}

impl PartialEq<Self> for BigInt {
    fn eq(&self, other: &Self) -> bool {
        if self.shares_repr(other) {
            return true;
        }

        match (self.heap(), other.heap()) {
            (Some(a), Some(b)) => a.sign == b.sign && a.digits == b.digits,
            _ => false,
        }
    }
}

impl Eq for BigInt {}

impl PartialOrd<Self> for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.heap(), other.heap()) {
            (None, None) => Ordering::Equal,
            (None, Some(right)) => match right.sign {
                Sign::Negative => Ordering::Greater,
                Sign::Positive => Ordering::Less,
            },
            (Some(left), None) => match left.sign {
                Sign::Negative => Ordering::Less,
                Sign::Positive => Ordering::Greater,
            },
            (Some(left), Some(right)) => {
                if left.sign != right.sign {
                    return match left.sign {
                        Sign::Negative => Ordering::Less,
                        Sign::Positive => Ordering::Greater,
                    };
                }

                let ordering = cmp_digits(&left.digits, &right.digits);
                match left.sign {
                    Sign::Negative => ordering.reverse(),
                    Sign::Positive => ordering,
                }
            }
        }
    }
}
