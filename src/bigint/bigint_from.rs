// Copyright 2025 Developers of the jsbigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements conversions from primitive values.

use super::bigint_core::{BigInt, Sign};
use super::digit::{Digit, DigitVec, DIGIT_BITS};

impl BigInt {
    fn from_u128_with_sign(mut n: u128, sign: Sign) -> BigInt {
        let mut digits = DigitVec::new();
        while n > 0 {
            digits.push(n as Digit);
            n >>= DIGIT_BITS;
        }
        BigInt::from_digits(digits, sign)
    }
}

macro_rules! bigint_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                fn from(n: $t) -> BigInt {
                    BigInt::from_u128_with_sign(n as u128, Sign::Positive)
                }
            }
        )*
    };
}

macro_rules! bigint_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                fn from(n: $t) -> BigInt {
                    let sign = if n < 0 { Sign::Negative } else { Sign::Positive };
                    BigInt::from_u128_with_sign((n as i128).unsigned_abs(), sign)
                }
            }
        )*
    };
}

bigint_from_unsigned!(u8, u16, u32, u64, u128, usize);
bigint_from_signed!(i8, i16, i32, i64, i128, isize);

impl From<bool> for BigInt {
    fn from(value: bool) -> BigInt {
        if value {
            BigInt::one()
        } else {
            BigInt::zero()
        }
    }
}
