/// Arithmetic behind every built-in operator.
///
/// Pure functions over [`Value`](crate::interpreter::value::Value)s that
/// return `None` when no result exists for the given operands.
pub mod arithmetic;

/// The operation registry.
///
/// Maps one-character symbols to binary and unary operations. The built-in
/// set is declared once in a static table; a [`Registry`](registry::Registry)
/// value is built from it and shared with every session.
pub mod registry;

pub use registry::{BinaryOperation, Registry, UnaryOperation};
