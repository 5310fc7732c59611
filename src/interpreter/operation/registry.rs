use std::collections::HashMap;

use crate::interpreter::{operation::arithmetic, value::Value};

/// Handler for a binary operation.
///
/// Receives the older operand (`lhs`, next-on-stack) and the newer operand
/// (`rhs`, top-of-stack). Returns `None` if no result exists.
pub type BinaryFn = fn(&Value, &Value) -> Option<Value>;

/// Handler for a unary operation. Returns `None` if no result exists.
pub type UnaryFn = fn(&Value) -> Option<Value>;

/// A binary operation paired with its symbol.
#[derive(Debug, Clone, Copy)]
pub struct BinaryOperation {
    symbol: char,
    name:   &'static str,
    func:   BinaryFn,
}

/// A unary operation paired with its symbol.
#[derive(Debug, Clone, Copy)]
pub struct UnaryOperation {
    symbol: char,
    name:   &'static str,
    func:   UnaryFn,
}

impl BinaryOperation {
    /// Creates a binary operation.
    #[must_use]
    pub const fn new(symbol: char, name: &'static str, func: BinaryFn) -> Self {
        Self { symbol, name, func }
    }

    /// The character this operation is invoked with.
    #[must_use]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// A human-readable name, used in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Applies the operation to the older and newer operand.
    #[must_use]
    pub fn apply(&self, lhs: &Value, rhs: &Value) -> Option<Value> {
        (self.func)(lhs, rhs)
    }
}

impl UnaryOperation {
    /// Creates a unary operation.
    #[must_use]
    pub const fn new(symbol: char, name: &'static str, func: UnaryFn) -> Self {
        Self { symbol, name, func }
    }

    /// The character this operation is invoked with.
    #[must_use]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// A human-readable name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Applies the operation to a single operand.
    #[must_use]
    pub fn apply(&self, value: &Value) -> Option<Value> {
        (self.func)(value)
    }
}

/// Defines the built-in operators by generating static lookup tables.
///
/// Each entry provides:
/// - a one-character symbol,
/// - a name used in diagnostics,
/// - a function pointer implementing the operation.
///
/// The macro produces `BUILTIN_BINARY` and `BUILTIN_UNARY` (static tables
/// the default registry is built from) and the public symbol lists
/// `BINARY_SYMBOLS` and `UNARY_SYMBOLS`.
macro_rules! builtin_operations {
    (
        binary {
            $(
                $bin_symbol:literal => {
                    name: $bin_name:literal,
                    func: $bin_func:expr $(,)?
                }
            ),* $(,)?
        }
        unary {
            $(
                $un_symbol:literal => {
                    name: $un_name:literal,
                    func: $un_func:expr $(,)?
                }
            ),* $(,)?
        }
    ) => {
        static BUILTIN_BINARY: &[BinaryOperation] = &[
            $(
                BinaryOperation { symbol: $bin_symbol, name: $bin_name, func: $bin_func },
            )*
        ];
        static BUILTIN_UNARY: &[UnaryOperation] = &[
            $(
                UnaryOperation { symbol: $un_symbol, name: $un_name, func: $un_func },
            )*
        ];
        /// Symbols of the built-in binary operators.
        pub const BINARY_SYMBOLS: &[char] = &[
            $($bin_symbol,)*
        ];
        /// Symbols of the built-in unary operators.
        pub const UNARY_SYMBOLS: &[char] = &[
            $($un_symbol,)*
        ];
    };
}

builtin_operations! {
    binary {
        '+' => { name: "addition",       func: arithmetic::add },
        '-' => { name: "subtraction",    func: arithmetic::subtract },
        '*' => { name: "multiplication", func: arithmetic::multiply },
        '/' => { name: "division",       func: arithmetic::divide },
        '^' => { name: "exponentiation", func: arithmetic::exponent },
        '%' => { name: "remainder",      func: arithmetic::remainder },
    }
    unary {
        '-' => { name: "negation", func: arithmetic::negate },
    }
}

/// Maps symbols to the operations they invoke.
///
/// A registry is an ordinary value: build it once at startup and share it
/// between sessions. The same symbol may be registered both as a binary and
/// as a unary operation; the interpreter decides from context which one
/// applies.
///
/// # Example
/// ```
/// use rpncalc::interpreter::operation::Registry;
///
/// let registry = Registry::builtin();
/// assert_eq!(registry.binary('/').map(|op| op.name()), Some("division"));
/// assert!(registry.unary('-').is_some());
/// assert!(registry.unary('+').is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    binary: HashMap<char, BinaryOperation>,
    unary:  HashMap<char, UnaryOperation>,
}

impl Registry {
    /// Creates a registry with no operations.
    #[must_use]
    pub fn empty() -> Self {
        Self { binary: HashMap::new(),
               unary:  HashMap::new(), }
    }

    /// Creates a registry holding the built-in operators
    /// (`+ - * / ^ %` and unary `-`).
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::empty();

        for operation in BUILTIN_BINARY {
            registry.register_binary(*operation);
        }
        for operation in BUILTIN_UNARY {
            registry.register_unary(*operation);
        }

        registry
    }

    /// Registers a binary operation under its symbol.
    ///
    /// Returns the operation previously registered for that symbol, if any.
    pub fn register_binary(&mut self, operation: BinaryOperation) -> Option<BinaryOperation> {
        self.binary.insert(operation.symbol, operation)
    }

    /// Registers a unary operation under its symbol.
    ///
    /// Returns the operation previously registered for that symbol, if any.
    pub fn register_unary(&mut self, operation: UnaryOperation) -> Option<UnaryOperation> {
        self.unary.insert(operation.symbol, operation)
    }

    /// Looks up the binary operation for `symbol`.
    #[must_use]
    pub fn binary(&self, symbol: char) -> Option<&BinaryOperation> {
        self.binary.get(&symbol)
    }

    /// Looks up the unary operation for `symbol`.
    #[must_use]
    pub fn unary(&self, symbol: char) -> Option<&UnaryOperation> {
        self.unary.get(&symbol)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
