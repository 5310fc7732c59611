/// Evaluation errors.
///
/// Defines every error that can stop the evaluation of an input line: malformed
/// number literals, unknown symbols, stack underflow and failing operations.
/// Each error carries the character offset at which scanning stopped.
pub mod eval_error;

pub use eval_error::{ErrorKind, EvalError};
