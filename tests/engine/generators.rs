// Copyright 2025 Developers of the jsbigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use jsbigint::bigint::BigInt;
use quickcheck::{Arbitrary, Gen};
use std::fmt::Write;

/// A random `BigInt` built from raw digit material through the public
/// hex parser, covering multi-digit magnitudes and both signs.
#[derive(Clone, Debug)]
pub(crate) struct ArbBigInt(pub(crate) BigInt);

impl Arbitrary for ArbBigInt {
    fn arbitrary(g: &mut Gen) -> Self {
        let digits = Vec::<u32>::arbitrary(g);
        if digits.is_empty() {
            return ArbBigInt(BigInt::zero());
        }

        let mut hex = String::from("0x");
        for digit in digits.iter().rev() {
            write!(hex, "{digit:08x}").unwrap();
        }

        let mut value: BigInt = hex.parse().unwrap();
        if bool::arbitrary(g) {
            value = -value;
        }
        ArbBigInt(value)
    }
}

/// Converts through the decimal representation, which both sides parse.
pub(crate) fn to_oracle(value: &BigInt) -> num_bigint::BigInt {
    value.to_str_radix(10).parse().unwrap()
}

pub(crate) fn from_oracle(value: &num_bigint::BigInt) -> BigInt {
    value.to_string().parse().unwrap()
}
