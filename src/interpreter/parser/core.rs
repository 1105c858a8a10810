use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::Expr,
    error::CalcError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{binary::parse_additive, utils::reject_leftover},
    },
};

pub type ParseResult<T> = Result<T, CalcError>;

/// Deepest parenthesis nesting the parser descends into.
///
/// Balanced input nested deeper than this fails as an invalid expression
/// instead of exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Longest token sequence whose tree is rendered in full in debug logs.
const MAX_LOGGED_TOKENS: usize = 64;

/// Parses a complete token sequence into an expression tree.
///
/// Parenthesis balance is verified first, over the whole sequence and
/// without recursion, so unbalanced input of any depth fails with
/// [`CalcError::MismatchedParentheses`]. The sequence must then form exactly
/// one expression; tokens left over after it are an error. A function name
/// left over is still parsed and checked as a call first, so `1e-3` reports
/// the bad argument of `e` and `1E5` the unknown function `E`.
///
/// # Errors
/// - `MismatchedParentheses` for an unclosed `(` or a stray `)`.
/// - `InvalidExpression` for empty input, missing operands, leftover tokens,
///   the unsupported `^` and `,`, and nesting beyond [`MAX_NESTING_DEPTH`].
/// - `InvalidFunctionArgument` when a function name is not followed by a
///   number or a parenthesised group.
/// - `UnknownFunction`, or any evaluation error of its argument, for a
///   leftover call.
///
/// # Example
/// ```
/// use exprcalc::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("2+3*4").unwrap();
/// let expr = parse(&tokens).unwrap();
///
/// assert_eq!(expr.to_string(), "(2 + (3 * 4))");
/// ```
pub fn parse(tokens: &[Spanned]) -> ParseResult<Expr> {
    check_balance(tokens)?;

    let mut iter = tokens.iter().peekable();
    if iter.peek().is_none() {
        return Err(CalcError::invalid_expression("empty expression"));
    }

    let expr = parse_expression(&mut iter, 0)?;

    if let Some((tok, position)) = iter.next() {
        return Err(reject_leftover(&mut iter, tok, *position, 0));
    }

    if tokens.len() <= MAX_LOGGED_TOKENS {
        debug!(%expr, "parsed expression");
    } else {
        debug!(tokens = tokens.len(), "parsed expression");
    }
    Ok(expr)
}

/// Parses a full expression.
///
/// It begins at the lowest-precedence level, addition and subtraction, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `depth`: Number of parenthesised groups enclosing this expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    parse_additive(tokens, depth)
}

/// Verifies that every `(` has a matching `)` and no `)` comes first.
fn check_balance(tokens: &[Spanned]) -> ParseResult<()> {
    let mut open = 0usize;

    for (tok, _) in tokens {
        match tok {
            Token::LParen => open += 1,
            Token::RParen => {
                open = open.checked_sub(1)
                           .ok_or(CalcError::MismatchedParentheses { unmatched: ')' })?;
            },
            _ => {},
        }
    }

    if open > 0 {
        return Err(CalcError::MismatchedParentheses { unmatched: '(' });
    }
    Ok(())
}
