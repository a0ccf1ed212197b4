// Copyright 2025 Developers of the jsbigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements formatting BigInt values as text.

use super::bigint_core::{BigInt, Sign};
use super::digit::Digit;
use super::divrem::div_rem_digit;
use std::fmt;
use std::fmt::Display;

const DIGIT_CHARS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Returns the largest power of `radix` that fits in a digit, and its
/// exponent.
fn radix_chunk(radix: Digit) -> (Digit, usize) {
    let mut power = radix;
    let mut exponent = 1;
    while let Some(next) = power.checked_mul(radix) {
        power = next;
        exponent += 1;
    }
    (power, exponent)
}

impl BigInt {
    /// Formats the value in the given radix with lowercase digits and a
    /// `-` prefix when negative.
    ///
    /// # Panics
    ///
    /// Panics when `radix` is outside 2..=36.
    pub fn to_str_radix(&self, radix: u32) -> String {
        assert!((2..=36).contains(&radix), "radix must be in 2..=36");

        let Some(heap) = self.heap() else {
            return String::from("0");
        };

        let radix = radix as Digit;
        let (chunk_divisor, chunk_len) = radix_chunk(radix);

        // Splits the magnitude into chunks of `chunk_len` radix digits,
        // least significant chunk first.
        let mut chunks: Vec<Digit> = Vec::new();
        let mut rest = heap.digits.clone();
        while !rest.is_empty() {
            let (quotient, remainder) = div_rem_digit(&rest, chunk_divisor);
            chunks.push(remainder);
            rest = quotient;
        }

        let mut output = Vec::with_capacity(chunks.len() * chunk_len + 1);
        if heap.sign == Sign::Negative {
            output.push(b'-');
        }

        // Every chunk below the most significant one is zero padded to
        // its full width.
        let mut buffer = [b'0'; 32];
        let mut first = true;
        for &chunk in chunks.iter().rev() {
            buffer.fill(b'0');
            let mut position = buffer.len();
            let mut chunk = chunk;
            while chunk > 0 {
                position -= 1;
                buffer[position] = DIGIT_CHARS[(chunk % radix) as usize];
                chunk /= radix;
            }
            let start = if first {
                position
            } else {
                buffer.len() - chunk_len
            };
            output.extend(&buffer[start..]);
            first = false;
        }

        unsafe { String::from_utf8_unchecked(output) }
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_radix(10))
    }
}
