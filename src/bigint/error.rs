// Copyright 2025 Developers of the jsbigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::fmt::Display;

/// An error produced by a BigInt operation.
///
/// Every variant is reported to the host engine as one of its error
/// classes; see [`BigIntError::kind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum BigIntError {
    /// A magnitude buffer cannot be allocated.
    OutOfMemory,
    /// A BigInt literal was parsed from empty input.
    EmptyString,
    /// A BigInt literal contains a character that is not a digit of its
    /// radix.
    InvalidDigit,
    /// An infinity or NaN was converted to a BigInt.
    NonFinite,
    /// A number with a fractional part was converted to a BigInt.
    NonInteger,
    DivisionByZero,
    /// A value of an unsupported kind was coerced to a BigInt.
    UnsupportedType,
}

/// The host error class a [`BigIntError`] is reported as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Range,
    Syntax,
    Type,
}

impl BigIntError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BigIntError::OutOfMemory
            | BigIntError::NonFinite
            | BigIntError::NonInteger
            | BigIntError::DivisionByZero => ErrorKind::Range,
            BigIntError::EmptyString | BigIntError::InvalidDigit => ErrorKind::Syntax,
            BigIntError::UnsupportedType => ErrorKind::Type,
        }
    }
}

impl Display for BigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            BigIntError::OutOfMemory => "Cannot allocate memory for a BigInt value",
            BigIntError::EmptyString => "BigInt cannot be constructed from empty string",
            BigIntError::InvalidDigit => "String cannot be converted to BigInt value",
            BigIntError::NonFinite => "Infinity or NaN cannot be converted to BigInt",
            BigIntError::NonInteger => "Only integer numbers can be converted to BigInt",
            BigIntError::DivisionByZero => "BigInt division by zero",
            BigIntError::UnsupportedType => "Value cannot be converted to BigInt",
        };
        f.write_str(message)
    }
}

impl std::error::Error for BigIntError {}
