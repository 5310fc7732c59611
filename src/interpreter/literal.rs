use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::{
    error::EvalError,
    interpreter::{session::EvalResult, value::Value},
};

/// Parses a number literal into an exact decimal value.
///
/// A literal is a run of ASCII digits with at most one decimal point. The
/// integral or the fractional part may be empty (`5.` and `.5` are valid),
/// but not both. The value keeps as many fractional digits as were written,
/// so `1.50` has scale 2.
///
/// # Parameters
/// - `text`: The literal as written.
/// - `offset`: Character offset of the literal, for error reporting.
///
/// # Returns
/// The parsed value.
///
/// # Errors
/// `EvalError::MalformedNumber` if the literal has more than one decimal
/// point, has no digits, or contains anything but digits and points.
///
/// # Example
/// ```
/// use rpncalc::{
///     error::{ErrorKind, EvalError},
///     interpreter::{literal::parse_literal, value::Value},
/// };
///
/// assert_eq!(parse_literal("42", 0).unwrap(), Value::from(42));
/// assert_eq!(parse_literal(".5", 0).unwrap().to_string(), "0.5");
/// assert_eq!(parse_literal("5.", 0).unwrap(), Value::from(5));
///
/// let err = parse_literal("1.2.3", 7).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MalformedNumber);
/// assert_eq!(err.offset(), 7);
///
/// assert!(parse_literal(".", 0).is_err());
/// ```
pub fn parse_literal(text: &str, offset: usize) -> EvalResult<Value> {
    let malformed = || EvalError::MalformedNumber { literal: text.to_string(),
                                                    offset };

    let (integral, fractional) = text.split_once('.').unwrap_or((text, ""));

    if fractional.contains('.') {
        return Err(malformed());
    }
    if integral.is_empty() && fractional.is_empty() {
        return Err(malformed());
    }
    if !integral.bytes().chain(fractional.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    let digits = format!("{integral}{fractional}");
    let unscaled = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(malformed)?;
    let scale = i64::try_from(fractional.len()).map_err(|_| malformed())?;

    Ok(Value::new(BigDecimal::new(unscaled, scale)))
}
