// Copyright 2025 Developers of the jsbigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements parsing BigInt values from text.

use super::bigint_core::{BigInt, Sign};
use super::digit::{Digit, DigitVec};
use super::error::BigIntError;
use super::mul::mul_add_digit;
use bitflags::bitflags;
use std::str::FromStr;

bitflags! {
    /// Options controlling [`parse_string`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct ParseOptions: u32 {
        /// Forces the result negative regardless of the input sign.
        const SET_NEGATIVE = 1 << 0;
        /// Reports malformed input as `Ok(None)` instead of a syntax
        /// error.
        const DISALLOW_SYNTAX_ERROR = 1 << 1;
        /// Reports allocation failure as `Ok(None)` instead of a range
        /// error. Allocation in this crate cannot fail; the flag is
        /// kept for interface parity with the host engine.
        const DISALLOW_MEMORY_ERROR = 1 << 2;
    }
}

/// Parses the UTF-8 encoded `source` as a BigInt literal.
///
/// A `0x`/`0o`/`0b` prefix (upper or lower case) selects radix 16/8/2;
/// otherwise the literal is decimal with an optional leading `+` or `-`.
/// Radix-prefixed literals take no sign of their own, only
/// [`ParseOptions::SET_NEGATIVE`] can make them negative.
///
/// Returns `Ok(None)` when an error occurs whose class is suppressed by
/// `options`.
pub fn parse_string(source: &[u8], options: ParseOptions) -> Result<Option<BigInt>, BigIntError> {
    match parse_bytes(source, options) {
        Ok(value) => Ok(Some(value)),
        Err(error) => {
            let suppressed = match error {
                BigIntError::EmptyString | BigIntError::InvalidDigit => {
                    options.contains(ParseOptions::DISALLOW_SYNTAX_ERROR)
                }
                BigIntError::OutOfMemory => options.contains(ParseOptions::DISALLOW_MEMORY_ERROR),
                _ => false,
            };
            if suppressed {
                Ok(None)
            } else {
                Err(error)
            }
        }
    }
}

fn parse_bytes(source: &[u8], options: ParseOptions) -> Result<BigInt, BigIntError> {
    let mut radix: Digit = 10;
    let mut sign = if options.contains(ParseOptions::SET_NEGATIVE) {
        Sign::Negative
    } else {
        Sign::Positive
    };
    let mut source = source;

    if source.len() >= 3 && source[0] == b'0' {
        match source[1] {
            b'x' | b'X' => {
                radix = 16;
                source = &source[2..];
            }
            b'o' | b'O' => {
                radix = 8;
                source = &source[2..];
            }
            b'b' | b'B' => {
                radix = 2;
                source = &source[2..];
            }
            _ => {}
        }
    } else if source.len() >= 2 {
        match source[0] {
            b'+' => source = &source[1..],
            b'-' => {
                sign = Sign::Negative;
                source = &source[1..];
            }
            _ => {}
        }
    } else if source.is_empty() {
        return Err(BigIntError::EmptyString);
    }

    let leading_zeros = source.iter().take_while(|&&byte| byte == b'0').count();
    let source = &source[leading_zeros..];

    if source.is_empty() {
        return Ok(BigInt::zero());
    }

    let mut digits = DigitVec::new();

    for &byte in source {
        let digit = match byte {
            b'0'..=b'9' => (byte - b'0') as Digit,
            _ => match byte | 0x20 {
                lowercase @ b'a'..=b'f' => (lowercase - b'a' + 10) as Digit,
                _ => radix, // rejected below
            },
        };

        if digit >= radix {
            return Err(BigIntError::InvalidDigit);
        }

        mul_add_digit(&mut digits, radix, digit);
    }

    Ok(BigInt::from_digits(digits, sign))
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_bytes(s.as_bytes(), ParseOptions::empty())
    }
}
