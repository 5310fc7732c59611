/// The category of an [`EvalError`], without its payload.
///
/// Useful for callers that only care about which kind of failure happened,
/// such as tests or a terse error display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A number literal could not be read.
    MalformedNumber,
    /// A character is neither a number, an operator nor the terminate symbol.
    UnknownSymbol,
    /// A binary operator found fewer than two values on the stack.
    StackUnderflow,
    /// An operation could not produce a value for its operands.
    OperationFailure,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedNumber => write!(f, "malformed number"),
            Self::UnknownSymbol => write!(f, "unknown symbol"),
            Self::StackUnderflow => write!(f, "stack underflow"),
            Self::OperationFailure => write!(f, "operation failure"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a line.
///
/// Offsets count characters (not bytes) from the start of the line, starting
/// at zero.
pub enum EvalError {
    /// A number literal had more than one decimal point, or no digits.
    MalformedNumber {
        /// The literal as written.
        literal: String,
        /// The character offset where the literal starts.
        offset:  usize,
    },
    /// Found a character that has no meaning to the interpreter.
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// The character offset of the symbol.
        offset: usize,
    },
    /// A binary operator needed two values but the stack held fewer.
    StackUnderflow {
        /// The operator symbol.
        symbol: char,
        /// The character offset of the operator.
        offset: usize,
    },
    /// The operation returned no value for its operands, e.g. division by
    /// zero or a fractional exponent.
    OperationFailure {
        /// The name of the operation.
        operation: &'static str,
        /// The operator symbol.
        symbol:    char,
        /// The character offset of the operator.
        offset:    usize,
    },
}

impl EvalError {
    /// Returns the category of this error.
    ///
    /// # Example
    /// ```
    /// use rpncalc::error::{ErrorKind, EvalError};
    ///
    /// let err = EvalError::StackUnderflow { symbol: '+', offset: 0 };
    /// assert_eq!(err.kind(), ErrorKind::StackUnderflow);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedNumber { .. } => ErrorKind::MalformedNumber,
            Self::UnknownSymbol { .. } => ErrorKind::UnknownSymbol,
            Self::StackUnderflow { .. } => ErrorKind::StackUnderflow,
            Self::OperationFailure { .. } => ErrorKind::OperationFailure,
        }
    }

    /// Returns the character offset at which evaluation stopped.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::MalformedNumber { offset, .. }
            | Self::UnknownSymbol { offset, .. }
            | Self::StackUnderflow { offset, .. }
            | Self::OperationFailure { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedNumber { literal, offset } => {
                write!(f, "Error at character {offset}: Malformed number '{literal}'.")
            },
            Self::UnknownSymbol { symbol, offset } => {
                write!(f, "Error at character {offset}: Unknown symbol '{}'.", symbol.escape_debug())
            },
            Self::StackUnderflow { symbol, offset } => write!(f,
                                                              "Error at character {offset}: Operator '{symbol}' needs two values on the stack."),
            Self::OperationFailure { operation,
                                     symbol,
                                     offset, } => write!(f,
                                                         "Error at character {offset}: Illegal operation: {operation} ('{symbol}') has no result for these operands."),
        }
    }
}

impl std::error::Error for EvalError {}
