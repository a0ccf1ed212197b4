// Copyright 2025 Developers of the jsbigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Defines `BigInt`.

use super::digit::{len_digits, Digit, DigitVec};
use std::rc::Rc;

/// An arbitrary-precision signed integer with ECMAScript BigInt value
/// semantics.
///
/// Zero is a distinguished value that carries no allocation; every other
/// value is backed by a shared immutable heap record holding a sign and a
/// magnitude. Digits are stored in little-endian order,
/// e.g., the "least significant digit" is stored at position 0, and the
/// most significant digit is never zero.
///
/// Operations that algebraically return an operand (`x + 0`, `x | 0`,
/// `x * 1`) share its record instead of copying it.
#[derive(Clone, Debug)]
pub struct BigInt {
    repr: Repr,
}

#[derive(Clone, Debug)]
enum Repr {
    Zero,
    Heap(Rc<HeapBigInt>),
}

/// The heap record backing a non-zero `BigInt`.
#[derive(Debug)]
pub(crate) struct HeapBigInt {
    pub(crate) sign: Sign,
    pub(crate) digits: DigitVec,
}

/// Denotes the sign of a big integer.
///
/// Zero has no sign of its own; it reports [`Sign::Positive`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl BigInt {
    /// Creates a `BigInt` from a little-endian digit vector.
    ///
    /// This is the designated constructor that every operation funnels
    /// through: it strips zero digits at the most significant end and
    /// canonicalizes an empty magnitude to the zero value, so no heap
    /// record with a zero magnitude or a zero top digit can exist.
    pub(crate) fn from_digits(mut digits: DigitVec, sign: Sign) -> BigInt {
        digits.truncate(len_digits(&digits));
        if digits.is_empty() {
            return BigInt { repr: Repr::Zero };
        }

        BigInt {
            repr: Repr::Heap(Rc::new(HeapBigInt { sign, digits })),
        }
    }

    pub fn zero() -> BigInt {
        BigInt { repr: Repr::Zero }
    }

    pub fn one() -> BigInt {
        BigInt::from_digits(vec![1], Sign::Positive)
    }

    pub fn is_zero(&self) -> bool {
        matches!(self.repr, Repr::Zero)
    }

    /// Returns the sign; zero reports `Positive`.
    pub fn sign(&self) -> Sign {
        match &self.repr {
            Repr::Zero => Sign::Positive,
            Repr::Heap(heap) => heap.sign,
        }
    }

    pub fn is_sign_negative(&self) -> bool {
        self.sign() == Sign::Negative
    }

    /// Returns the backing record of a non-zero value.
    pub(crate) fn heap(&self) -> Option<&Rc<HeapBigInt>> {
        match &self.repr {
            Repr::Zero => None,
            Repr::Heap(heap) => Some(heap),
        }
    }

    /// Returns the magnitude digits; empty for zero.
    pub(crate) fn as_digits(&self) -> &[Digit] {
        match &self.repr {
            Repr::Zero => &[],
            Repr::Heap(heap) => &heap.digits,
        }
    }

    /// Returns the magnitude size in bytes; 0 for zero.
    pub fn size_bytes(&self) -> usize {
        self.as_digits().len() * super::digit::DIGIT_BYTES as usize
    }

    /// Returns true if `self` and `other` are the same value in the
    /// identity sense: both zero, or sharing one heap record.
    pub(crate) fn shares_repr(&self, other: &BigInt) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Zero, Repr::Zero) => true,
            (Repr::Heap(a), Repr::Heap(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}
