use std::ops::Range;

use logos::Logos;

/// Represents a lexical token of an input line.
///
/// The lexer only classifies characters; whether a symbol is a unary or a
/// binary operator, or not an operator at all, is decided by the session
/// against its registry.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token<'src> {
    /// A maximal run of digits and decimal points, such as `42`, `3.14`,
    /// `.5` or the malformed `1.2.3`.
    #[regex(r"[0-9.]+", |lex| lex.slice())]
    Number(&'src str),
    /// `q`, which also fits the `Symbol` class and must win over it.
    #[token("q", priority = 3)]
    Quit,
    /// Any other single non-whitespace character.
    #[regex(r"[^0-9. \t]", |lex| lex.slice().chars().next())]
    Symbol(char),
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
}

/// A token together with the byte range it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme<'src> {
    /// The classified token.
    pub token: Token<'src>,
    /// Byte range of the token within the line.
    pub span:  Range<usize>,
}

impl Lexeme<'_> {
    /// Returns `true` if `next` starts exactly where this lexeme ends, with
    /// no whitespace in between.
    #[must_use]
    pub const fn touches(&self, next: &Self) -> bool {
        self.span.end == next.span.start
    }
}

/// Splits a line into lexemes.
///
/// Whitespace is dropped. Input the lexer cannot match is kept as a
/// [`Token::Symbol`] holding its first character so the evaluator reports
/// it in order, after everything before it has been evaluated.
///
/// # Example
/// ```
/// use rpncalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<_> = tokenize("12 -3.5+").into_iter().map(|l| l.token).collect();
///
/// assert_eq!(tokens,
///            vec![Token::Number("12"),
///                 Token::Symbol('-'),
///                 Token::Number("3.5"),
///                 Token::Symbol('+')]);
///
/// let tokens: Vec<_> = tokenize("5q-").into_iter().map(|l| l.token).collect();
/// assert_eq!(tokens, vec![Token::Number("5"), Token::Quit, Token::Symbol('-')]);
/// ```
#[must_use]
pub fn tokenize(line: &str) -> Vec<Lexeme<'_>> {
    let mut lexemes = Vec::new();
    let mut lexer = Token::lexer(line);

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        let token = match token {
            Ok(tok) => tok,
            Err(()) => match lexer.slice().chars().next() {
                Some(c) => Token::Symbol(c),
                None => continue,
            },
        };
        lexemes.push(Lexeme { token, span });
    }

    lexemes
}

/// Converts a byte offset within `line` into a character offset.
///
/// # Example
/// ```
/// use rpncalc::interpreter::lexer::char_offset;
///
/// assert_eq!(char_offset("ab", 1), 1);
/// assert_eq!(char_offset("é+", 2), 1);
/// ```
#[must_use]
pub fn char_offset(line: &str, byte: usize) -> usize {
    line.get(..byte).map_or(byte, |prefix| prefix.chars().count())
}
