use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};

/// Largest exponent accepted by the `^` operator.
pub const MAX_EXPONENT: u32 = 999_999_999;

/// Returns `10^exponent` as a big integer.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use rpncalc::util::num::pow10;
///
/// assert_eq!(pow10(3), BigInt::from(1000));
/// assert_eq!(pow10(0), BigInt::from(1));
/// ```
#[must_use]
pub fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10u8).pow(exponent)
}

/// Converts a decimal to a `u32` exponent if and only if it is a
/// non-negative integral value no greater than [`MAX_EXPONENT`].
///
/// Trailing fractional zeros do not count as a fraction, so `3.00` converts
/// to `3`.
///
/// # Returns
/// - `Some(u32)`: The exponent if the conversion is exact.
/// - `None`: If the value is negative, fractional or too large.
///
/// # Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use rpncalc::util::num::decimal_to_exponent_checked;
///
/// let three = BigDecimal::from_str("3.00").unwrap();
/// assert_eq!(decimal_to_exponent_checked(&three), Some(3));
///
/// let half = BigDecimal::from_str("1.5").unwrap();
/// assert_eq!(decimal_to_exponent_checked(&half), None);
///
/// let negative = BigDecimal::from(-1);
/// assert_eq!(decimal_to_exponent_checked(&negative), None);
/// ```
#[must_use]
pub fn decimal_to_exponent_checked(value: &BigDecimal) -> Option<u32> {
    let (digits, scale) = value.normalized().as_bigint_and_exponent();

    if digits.sign() == Sign::Minus || scale > 0 {
        return None;
    }

    // Anything shifted by more than nine places is past MAX_EXPONENT.
    let shift = u32::try_from(scale.unsigned_abs()).ok().filter(|shift| *shift <= 9)?;
    let exponent = u32::try_from(digits * pow10(shift)).ok()?;

    (exponent <= MAX_EXPONENT).then_some(exponent)
}
