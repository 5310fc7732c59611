use std::{fmt, str::FromStr};

use bigdecimal::{BigDecimal, ParseBigDecimalError};

/// A value on the interpreter stack.
///
/// Wraps an arbitrary-precision signed decimal. Values are immutable: every
/// operation produces a new one. Equality is numeric, so `4` equals `4.00`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Value(BigDecimal);

impl Value {
    /// Wraps a decimal.
    #[must_use]
    pub const fn new(decimal: BigDecimal) -> Self {
        Self(decimal)
    }

    /// Returns the underlying decimal.
    #[must_use]
    pub const fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Returns the number of fractional digits the value carries.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::value::Value;
    ///
    /// let v: Value = "1.50".parse().unwrap();
    /// assert_eq!(v.scale(), 2);
    /// ```
    #[must_use]
    pub fn scale(&self) -> i64 {
        self.0.as_bigint_and_exponent().1
    }
}

impl From<BigDecimal> for Value {
    fn from(decimal: BigDecimal) -> Self {
        Self(decimal)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self(BigDecimal::from(v))
    }
}

impl FromStr for Value {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigDecimal::from_str(s).map(Self)
    }
}

/// Renders the value in plain decimal notation, keeping its scale.
///
/// # Example
/// ```
/// use rpncalc::interpreter::value::Value;
///
/// let v: Value = "10000094385000000000000000000000".parse().unwrap();
/// assert_eq!(v.to_string(), "10000094385000000000000000000000");
///
/// let v: Value = "-0.050".parse().unwrap();
/// assert_eq!(v.to_string(), "-0.050");
///
/// let v: Value = "1E+5".parse().unwrap();
/// assert_eq!(v.to_string(), "100000");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_plain_string())
    }
}
