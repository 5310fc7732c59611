use bigdecimal::{BigDecimal, Zero};
use num_bigint::BigInt;

use crate::{
    interpreter::value::Value,
    util::num::{decimal_to_exponent_checked, pow10},
};

/// Number of fractional digits a quotient is computed to before trailing
/// zeros are stripped.
pub const DIVISION_SCALE: i64 = 20;

/// Adds two values.
#[must_use]
#[allow(clippy::unnecessary_wraps)]
pub fn add(lhs: &Value, rhs: &Value) -> Option<Value> {
    Some(Value::new(lhs.as_decimal() + rhs.as_decimal()))
}

/// Subtracts `rhs` (the newer value) from `lhs` (the older value).
#[must_use]
#[allow(clippy::unnecessary_wraps)]
pub fn subtract(lhs: &Value, rhs: &Value) -> Option<Value> {
    Some(Value::new(lhs.as_decimal() - rhs.as_decimal()))
}

/// Multiplies two values exactly.
#[must_use]
#[allow(clippy::unnecessary_wraps)]
pub fn multiply(lhs: &Value, rhs: &Value) -> Option<Value> {
    Some(Value::new(lhs.as_decimal() * rhs.as_decimal()))
}

/// Divides `lhs` by `rhs`.
///
/// The quotient is computed to [`DIVISION_SCALE`] fractional digits,
/// rounding half away from zero, and trailing zeros are then stripped.
///
/// # Returns
/// - `Some(Value)`: The rounded quotient.
/// - `None`: If `rhs` is zero.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{operation::arithmetic::divide, value::Value};
///
/// let q = divide(&Value::from(8), &Value::from(2)).unwrap();
/// assert_eq!(q.to_string(), "4");
///
/// let third = divide(&Value::from(2), &Value::from(3)).unwrap();
/// assert_eq!(third.to_string(), "0.66666666666666666667");
///
/// assert!(divide(&Value::from(1), &Value::from(0)).is_none());
/// ```
#[must_use]
pub fn divide(lhs: &Value, rhs: &Value) -> Option<Value> {
    if rhs.as_decimal().is_zero() {
        return None;
    }

    let (dividend, dividend_scale) = lhs.as_decimal().as_bigint_and_exponent();
    let (divisor, divisor_scale) = rhs.as_decimal().as_bigint_and_exponent();

    // lhs / rhs * 10^S == dividend / divisor * 10^(S - dividend_scale + divisor_scale)
    let shift = DIVISION_SCALE.checked_add(divisor_scale)?
                              .checked_sub(dividend_scale)?;
    let shift_digits = u32::try_from(shift.unsigned_abs()).ok()?;

    let (numerator, denominator) = if shift >= 0 {
        (dividend * pow10(shift_digits), divisor)
    } else {
        (dividend, divisor * pow10(shift_digits))
    };

    let quotient = divide_half_up(&numerator, &denominator);
    if quotient.is_zero() {
        return Some(Value::new(BigDecimal::zero()));
    }

    Some(Value::new(BigDecimal::new(quotient, DIVISION_SCALE).normalized()))
}

/// Integer division rounding half away from zero.
fn divide_half_up(numerator: &BigInt, denominator: &BigInt) -> BigInt {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;

    if remainder.is_zero() {
        return quotient;
    }

    let doubled = &remainder + &remainder;
    if doubled.magnitude() < denominator.magnitude() {
        return quotient;
    }

    if numerator.sign() == denominator.sign() {
        quotient + BigInt::from(1u8)
    } else {
        quotient - BigInt::from(1u8)
    }
}

/// Raises `base` to an integral power.
///
/// The exponent must be a non-negative integral value no greater than
/// [`MAX_EXPONENT`](crate::util::num::MAX_EXPONENT); `2.0` is accepted as
/// `2`. The result is exact.
///
/// # Returns
/// - `Some(Value)`: `base ^ exponent`.
/// - `None`: If the exponent is negative, fractional or too large.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{operation::arithmetic::exponent, value::Value};
///
/// let v = exponent(&Value::from(4), &Value::from(5)).unwrap();
/// assert_eq!(v, Value::from(1024));
///
/// let half: Value = "1.5".parse().unwrap();
/// assert!(exponent(&Value::from(2), &half).is_none());
/// assert!(exponent(&Value::from(2), &Value::from(-1)).is_none());
/// ```
#[must_use]
pub fn exponent(base: &Value, exponent: &Value) -> Option<Value> {
    let exponent = decimal_to_exponent_checked(exponent.as_decimal())?;

    let mut result = BigDecimal::from(1);
    let mut square = base.as_decimal().clone();
    let mut remaining = exponent;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = &result * &square;
        }
        remaining >>= 1;
        if remaining > 0 {
            square = &square * &square;
        }
    }

    Some(Value::new(result))
}

/// Computes the remainder of `lhs` divided by `rhs`.
///
/// This is a truncating remainder: the sign of the result follows the
/// dividend, so `-1 % 5` is `-1`, not `4`.
///
/// # Returns
/// - `Some(Value)`: The remainder.
/// - `None`: If `rhs` is zero.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{operation::arithmetic::remainder, value::Value};
///
/// let r = remainder(&Value::from(-1), &Value::from(5)).unwrap();
/// assert_eq!(r, Value::from(-1));
///
/// let r = remainder(&"5.5".parse().unwrap(), &Value::from(2)).unwrap();
/// assert_eq!(r.to_string(), "1.5");
/// ```
#[must_use]
pub fn remainder(lhs: &Value, rhs: &Value) -> Option<Value> {
    if rhs.as_decimal().is_zero() {
        return None;
    }

    Some(Value::new(lhs.as_decimal() % rhs.as_decimal()))
}

/// Negates a value.
#[must_use]
#[allow(clippy::unnecessary_wraps)]
pub fn negate(value: &Value) -> Option<Value> {
    Some(Value::new(-value.as_decimal().clone()))
}
