/// Exact decimal helpers.
///
/// This module provides the integer-level building blocks the arithmetic
/// operations rely on: powers of ten, checked conversion of a decimal to a
/// machine exponent, and plain (non-scientific) rendering of decimals.
///
/// Conversions return `Option`, which is `None` whenever the value cannot be
/// represented exactly in the requested form.
pub mod num;
