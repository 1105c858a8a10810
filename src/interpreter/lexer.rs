use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::error::{CalcError, Result};

/// Represents a lexical token in an expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5` or `2e10`.
    ///
    /// Digits and dots accumulate into one literal. A lowercase `e` belongs
    /// to the literal only when a digit follows it, so `1e5` is a number
    /// while `1exp` is the number `1` followed by the name `exp`.
    #[regex(r"([0-9.]|e[0-9])+", parse_number)]
    Number(f64),
    /// Any run of letters. Names are not checked against the function table
    /// here; unknown names fail when the call is evaluated.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Function(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `^`, accepted by validation but not by the grammar.
    #[token("^")]
    Caret,
    /// `,`, accepted by validation but not by the grammar.
    #[token(",")]
    Comma,
}

/// A token paired with its byte offset in the lexed source.
pub type Spanned = (Token, usize);

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Function(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Caret => write!(f, "^"),
            Self::Comma => write!(f, ","),
        }
    }
}

/// Splits `source` into tokens, left to right.
///
/// # Errors
/// Returns [`CalcError::InvalidExpression`] if a numeric literal does not
/// form a valid number (`1.2.3`, `1e5e6`) or a character matches no token.
///
/// # Example
/// ```
/// use exprcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2*sin(1e1)").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(tok, _)| tok).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Number(2.0),
///                 Token::Star,
///                 Token::Function("sin".to_string()),
///                 Token::LParen,
///                 Token::Number(10.0),
///                 Token::RParen]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                let slice = lexer.slice();
                let details = if slice.starts_with(|c: char| c.is_ascii_digit() || c == '.' || c == 'e') {
                    format!("malformed number '{slice}' at position {position}")
                } else {
                    format!("unexpected '{slice}' at position {position}")
                };
                return Err(CalcError::InvalidExpression { details });
            },
        }
    }

    trace!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the slice is a valid float.
/// - `None`: If it is not, which the lexer reports as an error.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
