//! Base Conversion Module
//!
//! Exact conversion of digit strings between bases using arbitrary-precision
//! integers. No floating point is involved at any step.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::{BaseBound, Error, Result};
use crate::numbers::Alphabet;

// == Power ==
/// Raises `base` to `exponent` by repeated squaring.
///
/// Uses O(log exponent) multiplications. `exponent == 0` yields 1 for every
/// base, zero included.
pub fn big_int_power(base: &BigUint, exponent: u64) -> BigUint {
    if exponent == 0 {
        return BigUint::one();
    }

    let half = big_int_power(base, exponent / 2);
    let squared = &half * &half;
    if exponent % 2 == 0 {
        squared
    } else {
        base * squared
    }
}

// == Convert ==
/// Converts `value` from `source_base` to `out_base` using the default alphabet.
///
/// See [`convert_base_with`].
pub fn convert_base(value: &str, source_base: u32, out_base: u32) -> Result<String> {
    convert_base_with(value, source_base, out_base, Alphabet::standard())
}

/// Converts `value` from `source_base` to `out_base` using `alphabet`.
///
/// The most significant digit comes first. Zero, including an empty input
/// or any run of zero digits, converts to the alphabet's zero symbol.
///
/// # Errors
/// - `OutOfRangeBase` if either base is outside `[2, alphabet.len()]`
/// - `InvalidDigit` if a character is not in the alphabet or is too large
///   for `source_base`
pub fn convert_base_with(
    value: &str,
    source_base: u32,
    out_base: u32,
    alphabet: &Alphabet,
) -> Result<String> {
    check_base(BaseBound::Source, source_base, alphabet)?;
    check_base(BaseBound::Output, out_base, alphabet)?;

    let total = parse_digits(value, source_base, alphabet)?;
    Ok(format_digits(total, out_base, alphabet))
}

fn check_base(bound: BaseBound, base: u32, alphabet: &Alphabet) -> Result<()> {
    if base < 2 || base > alphabet.max_base() {
        return Err(Error::OutOfRangeBase {
            bound,
            base,
            max: alphabet.len(),
        });
    }
    Ok(())
}

/// Accumulates `digit * base^position` from the rightmost character.
///
/// The positional weight is carried from one digit to the next instead of
/// being raised from scratch, so the work stays linear in the input length.
fn parse_digits(value: &str, base: u32, alphabet: &Alphabet) -> Result<BigUint> {
    let big_base = BigUint::from(base);
    let mut total = BigUint::zero();
    let mut weight = BigUint::one();

    for digit in value.chars().rev() {
        let digit_value = alphabet
            .digit_value(digit)
            .filter(|&d| d < base)
            .ok_or(Error::InvalidDigit { digit, base })?;

        if digit_value != 0 {
            total += &weight * digit_value;
        }
        weight *= &big_base;
    }

    Ok(total)
}

/// Writes `total` in `base` by repeated division, most significant digit first.
fn format_digits(mut total: BigUint, base: u32, alphabet: &Alphabet) -> String {
    if total.is_zero() {
        return alphabet.zero().to_string();
    }

    let big_base = BigUint::from(base);
    let mut digits = Vec::new();
    while !total.is_zero() {
        let remainder = &total % &big_base;
        // remainder < base, so it fits in a single u32 digit
        let digit = remainder.iter_u32_digits().next().unwrap_or(0);
        digits.push(alphabet.digit_symbol(digit));
        total /= &big_base;
    }

    digits.iter().rev().collect()
}
