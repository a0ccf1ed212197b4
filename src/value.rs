// Copyright 2025 Developers of the jsbigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The host value boundary: the primitive value kinds the BigInt
//! coercion interacts with.

use crate::bigint::{parse_string, BigInt, BigIntError, ParseOptions};

/// A host engine primitive value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    BigInt(BigInt),
}

impl Value {
    /// Converts the value to a BigInt following ECMA-262 7.1.13:
    /// booleans and strings convert, everything else is a type error.
    /// Numbers are deliberately not accepted.
    pub fn to_bigint(&self) -> Result<BigInt, BigIntError> {
        match self {
            Value::Boolean(value) => Ok(BigInt::from(*value)),
            Value::String(_) => match parse_string_value(self, ParseOptions::empty())? {
                Some(value) => Ok(value),
                None => unreachable!("no error class is suppressed"),
            },
            _ => Err(BigIntError::UnsupportedType),
        }
    }
}

/// Parses a host string value as a BigInt literal; see
/// [`parse_string`].
pub fn parse_string_value(
    value: &Value,
    options: ParseOptions,
) -> Result<Option<BigInt>, BigIntError> {
    let Value::String(string) = value else {
        return Err(BigIntError::UnsupportedType);
    };
    parse_string(string.as_bytes(), options)
}
