use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    error::EvalError,
    interpreter::{
        lexer::{Lexeme, Token, char_offset, tokenize},
        literal::parse_literal,
        operation::{Registry, UnaryOperation},
        value::Value,
    },
};

/// Result type used by the session.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing where and why the line failed.
pub type EvalResult<T> = Result<T, EvalError>;

/// Session options chosen by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Include the error kind and character offset when describing a
    /// failure. Has no effect on results.
    pub report_details: bool,
}

/// Stores the state of one calculator session.
///
/// A session holds the value stack, the unary operations waiting for the
/// number they prefix, and whether the session is still running. Values
/// left on the stack carry over from one line to the next, including the
/// partial results of a line that failed.
///
/// ## Usage
///
/// Create one `Session` per program run and feed it one line at a time with
/// [`Session::evaluate`]. Stop reading lines once [`Session::is_running`]
/// returns `false`.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{session::{Options, Session}, value::Value};
///
/// let mut session = Session::new(Options::default());
///
/// assert_eq!(session.evaluate("10").unwrap(), Some(Value::from(10)));
/// assert_eq!(session.evaluate("-5").unwrap(), Some(Value::from(-5)));
/// assert_eq!(session.evaluate("+").unwrap(), Some(Value::from(5)));
///
/// session.evaluate("q").unwrap();
/// assert!(!session.is_running());
/// ```
#[derive(Debug)]
pub struct Session {
    registry: Rc<Registry>,
    options:  Options,
    /// Values in push order; the last element is the top of the stack.
    stack:    Vec<Value>,
    /// Unary operations of the current run, in scan order.
    pending:  Vec<UnaryOperation>,
    running:  bool,
}

impl Session {
    /// Creates a session using the built-in operators.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self::with_registry(Rc::new(Registry::builtin()), options)
    }

    /// Creates a session that resolves symbols through `registry`.
    #[must_use]
    pub const fn with_registry(registry: Rc<Registry>, options: Options) -> Self {
        Self { registry,
               options,
               stack: Vec::new(),
               pending: Vec::new(),
               running: true }
    }

    /// Returns `false` once the terminate symbol was scanned or
    /// [`Session::terminate`] was called.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Stops the session from outside, independent of the `q` symbol.
    pub fn terminate(&mut self) {
        debug!("session terminated");
        self.running = false;
    }

    /// The current value stack, bottom first.
    #[must_use]
    pub fn stack(&self) -> &[Value] {
        &self.stack
    }

    /// Describes a failure for display.
    ///
    /// With `report_details` set the full message is returned, including the
    /// character offset. Otherwise only the fact that the line failed is
    /// reported.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::session::{Options, Session};
    ///
    /// let mut verbose = Session::new(Options { report_details: true });
    /// let err = verbose.evaluate("1 x").unwrap_err();
    /// assert_eq!(verbose.describe(&err), "Error at character 2: Unknown symbol 'x'.");
    ///
    /// let mut terse = Session::new(Options::default());
    /// let err = terse.evaluate("1 x").unwrap_err();
    /// assert_eq!(terse.describe(&err), "Parse error");
    /// ```
    #[must_use]
    pub fn describe(&self, error: &EvalError) -> String {
        if self.options.report_details {
            error.to_string()
        } else {
            "Parse error".to_string()
        }
    }

    /// Evaluates one line of RPN input.
    ///
    /// The line is scanned left to right. Numbers are pushed, operators
    /// consume the top two values and push their result, a run of unary
    /// symbols directly before a number is applied to that number, and `q`
    /// ends the session and the scan.
    ///
    /// # Parameters
    /// - `line`: One line of input, without its line terminator.
    ///
    /// # Returns
    /// - `Ok(Some(value))`: The top of the stack after the line. The value is
    ///   not popped.
    /// - `Ok(None)`: The line succeeded but the stack is empty.
    ///
    /// # Errors
    /// Returns the first error of the line. Scanning stops there; whatever
    /// was pushed before the failure stays on the stack.
    pub fn evaluate(&mut self, line: &str) -> EvalResult<Option<Value>> {
        debug!(line, depth = self.stack.len(), "evaluating line");

        self.pending.clear();
        let lexemes = tokenize(line);

        if let Err(error) = self.run(line, &lexemes) {
            self.pending.clear();
            debug!(%error, depth = self.stack.len(), "line failed");
            return Err(error);
        }

        Ok(self.stack.last().cloned())
    }

    /// Drives the cursor over the lexemes of one line.
    fn run(&mut self, line: &str, lexemes: &[Lexeme<'_>]) -> EvalResult<()> {
        let mut cursor = 0;

        while let Some(lexeme) = lexemes.get(cursor) {
            let offset = char_offset(line, lexeme.span.start);

            match lexeme.token {
                Token::Quit => {
                    self.terminate();
                    break;
                },
                Token::Number(text) => {
                    self.push_literal(text, offset)?;
                    cursor += 1;
                },
                Token::Symbol(symbol) => {
                    if let Some(number_at) = self.unary_run(lexemes, cursor) {
                        cursor = number_at;
                    } else {
                        self.apply_binary(symbol, offset)?;
                        cursor += 1;
                    }
                },
                Token::Ignored => cursor += 1,
            }
        }

        Ok(())
    }

    /// Checks whether the lexemes starting at `start` form a unary run.
    ///
    /// A run is one or more adjacent registered unary symbols immediately
    /// followed by a number that starts with a digit. If the run qualifies its
    /// operations become pending and the index of the number is returned.
    /// Otherwise nothing is kept.
    fn unary_run(&mut self, lexemes: &[Lexeme<'_>], start: usize) -> Option<usize> {
        let mut run = Vec::new();
        let mut cursor = start;

        loop {
            let lexeme = lexemes.get(cursor)?;
            if cursor > start && !lexemes[cursor - 1].touches(lexeme) {
                return None;
            }

            match lexeme.token {
                Token::Symbol(symbol) => run.push(*self.registry.unary(symbol)?),
                Token::Number(text) if cursor > start && text.starts_with(|c: char| c.is_ascii_digit()) => {
                    trace!(count = run.len(), "unary run");
                    self.pending.extend(run);
                    return Some(cursor);
                },
                _ => return None,
            }

            cursor += 1;
        }
    }

    /// Parses a literal, applies the pending unary operations most recent
    /// first, and pushes the result.
    fn push_literal(&mut self, text: &str, offset: usize) -> EvalResult<()> {
        let mut value = parse_literal(text, offset)?;

        while let Some(operation) = self.pending.pop() {
            value = operation.apply(&value)
                             .ok_or(EvalError::OperationFailure { operation: operation.name(),
                                                                  symbol: operation.symbol(),
                                                                  offset })?;
        }

        trace!(%value, "push");
        self.stack.push(value);
        Ok(())
    }

    /// Applies the binary operation registered for `symbol` to the two
    /// topmost values.
    ///
    /// The operands are only removed once the operation has produced a
    /// result; on failure the stack is unchanged.
    fn apply_binary(&mut self, symbol: char, offset: usize) -> EvalResult<()> {
        let operation = *self.registry
                             .binary(symbol)
                             .ok_or(EvalError::UnknownSymbol { symbol, offset })?;

        let [lhs, rhs] = match self.stack.as_slice() {
            [.., lhs, rhs] => [lhs, rhs],
            _ => return Err(EvalError::StackUnderflow { symbol, offset }),
        };

        let result = operation.apply(lhs, rhs)
                              .ok_or(EvalError::OperationFailure { operation: operation.name(),
                                                                   symbol,
                                                                   offset })?;

        trace!(%lhs, %rhs, %result, operation = operation.name(), "apply");
        self.stack.truncate(self.stack.len() - 2);
        self.stack.push(result);
        Ok(())
    }
}
