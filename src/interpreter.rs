/// The lexer module splits an input line into classified tokens.
///
/// The lexer reads the raw line and produces numbers, the terminate symbol
/// and single-character symbols, each with its byte span. Whitespace only
/// separates tokens and is dropped.
///
/// # Responsibilities
/// - Finds the maximal run of digits and points that makes up a number.
/// - Keeps spans so the session can tell whether two tokens touch.
/// - Never fails: unknown input is handed on as a symbol.
pub mod lexer;
/// Number-literal parsing.
///
/// Turns the text of a number token into an exact decimal value, rejecting
/// literals with several decimal points or without digits.
pub mod literal;
/// The operation module defines every operator the calculator knows.
///
/// It holds the arithmetic itself and the registry that maps symbols to
/// operations.
///
/// # Responsibilities
/// - Implements addition, subtraction, multiplication, rounded division,
///   integral exponentiation, remainder and negation on exact decimals.
/// - Signals operands without a result with `None` instead of panicking.
/// - Builds the registry of built-in operators.
pub mod operation;
/// The session module evaluates lines against a value stack.
///
/// A session owns the stack that persists between lines and runs the scan
/// loop: numbers are pushed, unary runs are resolved, binary operators are
/// applied and the terminate symbol ends the session.
///
/// # Responsibilities
/// - Drives a cursor over the tokens of one line.
/// - Reports the first failure of a line together with its position.
/// - Tracks whether the session is still running.
pub mod session;
/// The value module defines the numbers on the stack.
///
/// Values are arbitrary-precision decimals that render in plain notation.
pub mod value;
