// Copyright 2025 Developers of the jsbigint project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Randomized properties, checked against `num_bigint` as an
//! independent oracle where one applies.

use crate::generators::{from_oracle, to_oracle, ArbBigInt};
use jsbigint::bigint::BigInt;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use std::cmp::Ordering;

#[quickcheck]
fn decimal_round_trip(a: ArbBigInt) -> bool {
    let text = a.0.to_str_radix(10);
    let parsed: BigInt = text.parse().unwrap();
    parsed == a.0
}

#[quickcheck]
fn negation_involution(a: ArbBigInt) -> bool {
    -(-a.0.clone()) == a.0
}

#[quickcheck]
fn operations_cancelling_to_zero(a: ArbBigInt) -> bool {
    let a = a.0;
    (&a - &a).is_zero()
        && (&a * &BigInt::zero()).is_zero()
        && a.and(&BigInt::zero()).is_zero()
        && a.xor(&a).is_zero()
        && (a.is_zero() || a.div_mod(&a, true).unwrap().is_zero())
}

#[quickcheck]
fn add_sub_agree_with_oracle(a: ArbBigInt, b: ArbBigInt) -> bool {
    let sum = &a.0 + &b.0;
    let difference = &a.0 - &b.0;
    sum == from_oracle(&(to_oracle(&a.0) + to_oracle(&b.0)))
        && difference == from_oracle(&(to_oracle(&a.0) - to_oracle(&b.0)))
}

#[quickcheck]
fn mul_agrees_with_oracle(a: ArbBigInt, b: ArbBigInt) -> bool {
    &a.0 * &b.0 == from_oracle(&(to_oracle(&a.0) * to_oracle(&b.0)))
}

#[quickcheck]
fn div_mod_agrees_with_oracle(a: ArbBigInt, b: ArbBigInt) -> TestResult {
    if b.0.is_zero() {
        return TestResult::discard();
    }

    // num_bigint's `/` and `%` also truncate toward zero.
    let quotient = a.0.div_mod(&b.0, false).unwrap();
    let remainder = a.0.div_mod(&b.0, true).unwrap();
    TestResult::from_bool(
        quotient == from_oracle(&(to_oracle(&a.0) / to_oracle(&b.0)))
            && remainder == from_oracle(&(to_oracle(&a.0) % to_oracle(&b.0))),
    )
}

#[quickcheck]
fn bitwise_agrees_with_oracle(a: ArbBigInt, b: ArbBigInt) -> bool {
    // num_bigint implements the same infinite two's-complement view.
    a.0.and(&b.0) == from_oracle(&(to_oracle(&a.0) & to_oracle(&b.0)))
        && a.0.or(&b.0) == from_oracle(&(to_oracle(&a.0) | to_oracle(&b.0)))
        && a.0.xor(&b.0) == from_oracle(&(to_oracle(&a.0) ^ to_oracle(&b.0)))
}

#[quickcheck]
fn shift_agrees_with_magnitude_shift(a: ArbBigInt, count: u16) -> bool {
    let count_value = BigInt::from(count);
    let left = a.0.shift(&count_value, true).unwrap();
    let right = a.0.shift(&count_value, false).unwrap();

    // The arithmetic shifts move the magnitude and keep the sign:
    // |x| >> n, unlike a floor-based arithmetic shift on negatives.
    let magnitude = to_oracle(&a.0).magnitude().clone();
    let left_magnitude = from_oracle(&num_bigint::BigInt::from(magnitude.clone() << count as usize));
    let right_magnitude = from_oracle(&num_bigint::BigInt::from(magnitude >> count as usize));

    let expected_left = if a.0.is_sign_negative() && !a.0.is_zero() {
        -left_magnitude
    } else {
        left_magnitude
    };
    let expected_right = if a.0.is_sign_negative() && !right_magnitude.is_zero() {
        -right_magnitude
    } else {
        right_magnitude
    };

    left == expected_left && right == expected_right
}

#[quickcheck]
fn agreement_with_native_i64(a: i64, b: i64) -> bool {
    let big_a = BigInt::from(a);
    let big_b = BigInt::from(b);

    let mut holds = true;
    if let Some(sum) = a.checked_add(b) {
        holds &= &big_a + &big_b == BigInt::from(sum);
    }
    if let Some(difference) = a.checked_sub(b) {
        holds &= &big_a - &big_b == BigInt::from(difference);
    }
    if let Some(product) = a.checked_mul(b) {
        holds &= &big_a * &big_b == BigInt::from(product);
    }
    if let Some(quotient) = a.checked_div(b) {
        holds &= big_a.div_mod(&big_b, false).unwrap() == BigInt::from(quotient);
    }
    if let Some(remainder) = a.checked_rem(b) {
        holds &= big_a.div_mod(&big_b, true).unwrap() == BigInt::from(remainder);
    }

    // the two's-complement operators agree with the native ones
    holds
        && big_a.and(&big_b) == BigInt::from(a & b)
        && big_a.or(&big_b) == BigInt::from(a | b)
        && big_a.xor(&big_b) == BigInt::from(a ^ b)
}

#[quickcheck]
fn commutativity(a: ArbBigInt, b: ArbBigInt) -> bool {
    let (a, b) = (a.0, b.0);
    &a + &b == &b + &a
        && &a * &b == &b * &a
        && a.and(&b) == b.and(&a)
        && a.or(&b) == b.or(&a)
        && a.xor(&b) == b.xor(&a)
}

#[quickcheck]
fn associativity(a: ArbBigInt, b: ArbBigInt, c: ArbBigInt) -> bool {
    let (a, b, c) = (a.0, b.0, c.0);
    (&a + &b) + &c == &a + &(&b + &c) && (&a * &b) * &c == &a * &(&b * &c)
}

#[quickcheck]
fn comparison_consistency(a: ArbBigInt, b: ArbBigInt) -> bool {
    let ordering = a.0.cmp(&b.0);
    ordering == b.0.cmp(&a.0).reverse()
        && (ordering == Ordering::Equal) == (a.0 == b.0)
        && to_oracle(&a.0).cmp(&to_oracle(&b.0)) == ordering
}

#[quickcheck]
fn integral_doubles_convert_and_compare_equal(m: i64, scale: u8) -> TestResult {
    // m / 2^11 fits the 53-bit mantissa exactly; scaling by a power of
    // two keeps the double integral and exact.
    let mantissa = m >> 11;
    let scale = (scale % 64) as i32;
    let number = mantissa as f64 * (2.0_f64).powi(scale);

    let converted = match BigInt::from_number(number) {
        Ok(value) => value,
        Err(_) => return TestResult::failed(),
    };

    let expected = BigInt::from(mantissa)
        .shift(&BigInt::from(scale), true)
        .unwrap();

    TestResult::from_bool(
        converted == expected && converted == number && converted.partial_cmp(&number) == Some(Ordering::Equal),
    )
}

#[quickcheck]
fn fractional_doubles_are_rejected_and_unequal(m: i64, a: ArbBigInt) -> TestResult {
    // An odd mantissa over a power of two has a non-zero fractional
    // part and is exact in a double.
    let mantissa = (m >> 11) | 1;
    let number = mantissa as f64 / 4.0;

    if BigInt::from_number(number).is_ok() {
        return TestResult::failed();
    }
    TestResult::from_bool(a.0 != number)
}

#[quickcheck]
fn comparisons_against_doubles_match_the_oracle(a: ArbBigInt, m: i64, scale: u8) -> TestResult {
    let mantissa = m >> 11;
    let scale = (scale % 64) as i32;
    let number = mantissa as f64 * (2.0_f64).powi(scale);

    let expected = to_oracle(&a.0).cmp(&to_oracle(
        &BigInt::from(mantissa)
            .shift(&BigInt::from(scale), true)
            .unwrap(),
    ));

    TestResult::from_bool(a.0.partial_cmp(&number) == Some(expected))
}

#[quickcheck]
fn infinities_dominate(a: ArbBigInt) -> bool {
    a.0.partial_cmp(&f64::INFINITY) == Some(Ordering::Less)
        && a.0.partial_cmp(&f64::NEG_INFINITY) == Some(Ordering::Greater)
        && a.0 != f64::INFINITY
        && a.0 != f64::NEG_INFINITY
        && a.0.partial_cmp(&f64::NAN).is_none()
}
