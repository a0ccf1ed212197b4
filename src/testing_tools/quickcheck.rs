// Copyright 2025 Developers of the jsbigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::bigint::{BigInt, Sign};
use quickcheck::{Arbitrary, Gen};

/// A random `BigInt` built from raw digits, covering multi-digit
/// magnitudes and both signs evenly.
#[derive(Clone, Debug)]
pub(crate) struct ArbBigInt(pub(crate) BigInt);

impl Arbitrary for ArbBigInt {
    fn arbitrary(g: &mut Gen) -> Self {
        let digits = Vec::<u32>::arbitrary(g);
        let sign = if bool::arbitrary(g) {
            Sign::Negative
        } else {
            Sign::Positive
        };
        ArbBigInt(BigInt::from_digits(digits, sign))
    }
}

/// A random decimal literal: an optional sign followed by at least one
/// decimal digit.
#[derive(Clone, Debug)]
pub(crate) struct DecimalString(pub(crate) String);

const DECIMAL_CHARS: &[u8] = b"0123456789";
const SIGN_CHARS: &[u8] = b"+-";

impl Arbitrary for DecimalString {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 40 + 1;
        let mut bytes = Vec::with_capacity(len + 1);

        if bool::arbitrary(g) {
            bytes.push(*g.choose(SIGN_CHARS).unwrap());
        }
        for _ in 0..len {
            bytes.push(*g.choose(DECIMAL_CHARS).unwrap());
        }

        DecimalString(String::from_utf8(bytes).unwrap())
    }
}
