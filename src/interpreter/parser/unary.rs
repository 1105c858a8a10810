use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::CalcError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            core::{MAX_NESTING_DEPTH, ParseResult, parse_expression},
            utils::{reject_leftover, unexpected_end, unexpected_token},
        },
    },
};

/// Parses a unary expression.
///
/// Supports any run of prefix signs: each `-` flips the sign and `+` is a
/// no-op, so `--2` is `2` and `-+-2` is `2`. The run is folded into at most
/// one negation node, which keeps the tree shallow however many signs the
/// input has.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+")* primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current parenthesis nesting depth.
///
/// # Returns
/// An [`Expr::UnaryOp`] or the primary expression itself.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let mut negate = false;
    let mut sign_position = None;

    while let Some((token, position)) = tokens.peek().copied() {
        match token {
            Token::Minus => negate = !negate,
            Token::Plus => {},
            _ => break,
        }
        sign_position.get_or_insert(*position);
        tokens.next();
    }

    let operand = parse_primary(tokens, depth)?;

    if !negate {
        return Ok(operand);
    }
    let position = sign_position.unwrap_or_else(|| operand.position());
    Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                       expr: Box::new(operand),
                       position })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric literals
/// - function calls
/// - parenthesised expressions
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | FUNCTION argument
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Current parenthesis nesting depth.
///
/// # Returns
/// The parsed primary [`Expr`] or a `CalcError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some((Token::Number(value), position)) => Ok(Expr::Literal { value:    *value,
                                                                     position: *position, }),
        Some((Token::LParen, _)) => parse_grouping(tokens, depth),
        Some((Token::Function(name), position)) => {
            parse_function_call(tokens, name, *position, depth)
        },
        Some((tok, position)) => Err(unexpected_token(tok, *position)),
        None => Err(unexpected_end()),
    }
}

/// Parses the inside of a parenthesised group, after its `(`.
///
/// Consumes the closing `)`. The group itself leaves no node in the tree.
///
/// # Errors
/// - `InvalidExpression` for an empty group `()` or when the group would
///   exceed [`MAX_NESTING_DEPTH`].
/// - `MismatchedParentheses` if the tokens run out before the `)`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let depth = depth + 1;
    if depth > MAX_NESTING_DEPTH {
        return Err(CalcError::invalid_expression(format!("parentheses nested deeper than \
                                                          {MAX_NESTING_DEPTH} levels")));
    }

    if let Some((Token::RParen, position)) = tokens.peek().copied() {
        return Err(CalcError::invalid_expression(format!("empty parentheses at position \
                                                          {position}")));
    }

    let expr = parse_expression(tokens, depth)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((tok, position)) => Err(reject_leftover(tokens, tok, *position, depth)),
        None => Err(CalcError::MismatchedParentheses { unmatched: '(' }),
    }
}

/// Parses the argument of a function whose name was just consumed.
///
/// The argument is the immediately following number or parenthesised group:
/// `sin(0)` and `sin0` are the same call, and `sin2*3` is `sin(2)*3`.
///
/// Letters never absorb digits, so `log10(x)` arrives as `log`, `10`, `(`.
/// When `log` is followed by the two-character literal `10` and then `(`,
/// the three are read as the function `log10` applied to the group; `log100`
/// stays `log(100)`.
///
/// # Errors
/// `InvalidFunctionArgument` if the next token is neither a number nor `(`,
/// or if there is no next token.
pub(in crate::interpreter::parser) fn parse_function_call<'a, I>(tokens: &mut Peekable<I>,
                                                                 name: &str,
                                                                 position: usize,
                                                                 depth: usize)
                                                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let (name, argument) = match tokens.next() {
        Some((Token::Number(value), number_position)) => {
            if let Some((Token::LParen, paren_position)) = tokens.peek().copied()
               && name.eq_ignore_ascii_case("log")
               && *value == 10.0
               && *paren_position == number_position + 2
            {
                tokens.next();
                (format!("{name}10"), parse_grouping(tokens, depth)?)
            } else {
                (name.to_string(),
                 Expr::Literal { value:    *value,
                                 position: *number_position, })
            }
        },
        Some((Token::LParen, _)) => (name.to_string(), parse_grouping(tokens, depth)?),
        _ => return Err(CalcError::InvalidFunctionArgument { name: name.to_string() }),
    };

    Ok(Expr::FunctionCall { name,
                            argument: Box::new(argument),
                            position })
}
