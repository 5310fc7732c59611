//! # rpncalc
//!
//! rpncalc is a Reverse Polish Notation calculator written in Rust.
//! It evaluates lines such as `2 -2 -` or `1000000000000000000000 3 *` against
//! a stack of arbitrary-precision decimals, keeping the stack between lines.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    session::{EvalResult, Options, Session},
    value::Value,
};

/// Provides the error type for line evaluation.
///
/// This module defines every error that can end the evaluation of a line. It
/// carries the kind of failure and the character offset where it happened so
/// callers can report it tersely or in detail.
///
/// # Responsibilities
/// - Defines the error enum for malformed numbers, unknown symbols, stack
///   underflow and failing operations.
/// - Attaches character offsets for verbose reporting.
/// - Integrates with `std::error::Error` and `Display`.
pub mod error;
/// Evaluates RPN input.
///
/// This module ties together lexing, literal parsing, the operation registry
/// and the value stack to provide the calculator engine. It exposes the
/// session type the shell drives one line at a time.
///
/// # Responsibilities
/// - Coordinates the lexer, the registry and the stack machine.
/// - Provides entry points for evaluating lines.
/// - Manages the state that persists between lines.
pub mod interpreter;
/// The interactive read-print loop.
///
/// Reads lines from any buffered reader, feeds them to a session and prints
/// results, failures and optionally the stack.
pub mod repl;
/// General decimal utilities.
///
/// Exact helpers shared by the arithmetic operations and value rendering.
pub mod util;

/// Evaluates a multi-line script in a fresh session.
///
/// Lines are evaluated in order until one fails or the terminate symbol is
/// scanned. Returns the result of the last evaluated line.
///
/// # Errors
/// Returns the first error raised by any line.
///
/// # Examples
/// ```
/// use rpncalc::{evaluate_script, interpreter::{session::Options, value::Value}};
///
/// let source = "10\n-5\n+";
/// let res = evaluate_script(source, Options::default());
/// assert_eq!(res.unwrap(), Some(Value::from(5)));
///
/// // Division by zero stops the script.
/// let res = evaluate_script("100 0 /\n1", Options::default());
/// assert!(res.is_err());
/// ```
pub fn evaluate_script(source: &str, options: Options) -> EvalResult<Option<Value>> {
    let mut session = Session::new(options);
    let mut result = None;

    for line in source.lines() {
        if !session.is_running() {
            break;
        }
        result = session.evaluate(line)?;
    }

    Ok(result)
}
