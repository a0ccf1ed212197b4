// Copyright 2025 Developers of the jsbigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::bigint_core::{BigInt, Sign};
use std::ops::Neg;

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

impl<'a> Neg for &'a Sign {
    type Output = Sign;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    /// Builds a fresh record with the same magnitude and the sign
    /// flipped; zero stays zero.
    fn neg(self) -> Self::Output {
        match self.heap() {
            None => BigInt::zero(),
            Some(heap) => BigInt::from_digits(heap.digits.clone(), -heap.sign),
        }
    }
}

impl Neg for BigInt {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}
