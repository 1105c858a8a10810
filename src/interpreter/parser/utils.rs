use std::iter::Peekable;

use crate::{
    error::CalcError,
    interpreter::{
        evaluator::core::eval,
        lexer::{Spanned, Token},
        parser::unary::parse_function_call,
    },
};

/// Builds the error reported when `tok` appears where the grammar does not
/// allow it.
///
/// `^` and `,` pass validation but no rule consumes them, so they get a
/// dedicated message; a `)` reaching this point has no partner.
pub(in crate::interpreter::parser) fn unexpected_token(tok: &Token, position: usize) -> CalcError {
    match tok {
        Token::Caret | Token::Comma => {
            CalcError::invalid_expression(format!("unsupported operator '{tok}' at position {position}"))
        },
        Token::RParen => CalcError::MismatchedParentheses { unmatched: ')' },
        _ => CalcError::invalid_expression(format!("unexpected '{tok}' at position {position}")),
    }
}

/// Builds the error reported when the token stream ends while an operand is
/// still expected.
pub(in crate::interpreter::parser) fn unexpected_end() -> CalcError {
    CalcError::invalid_expression("unexpected end of expression")
}

/// Builds the error for `tok`, found after a complete expression.
///
/// A leftover function name is first read as a call and evaluated, so its
/// own failure wins: a missing argument (`2sin`, `1e-3`), an unknown name
/// (`1E5`) or an error inside the argument. Only a call that would succeed
/// falls through to the plain "unexpected" error.
pub(in crate::interpreter::parser) fn reject_leftover<'a, I>(tokens: &mut Peekable<I>,
                                                             tok: &Token,
                                                             position: usize,
                                                             depth: usize)
                                                             -> CalcError
    where I: Iterator<Item = &'a Spanned>
{
    if let Token::Function(name) = tok
       && let Err(err) = parse_function_call(tokens, name, position, depth).and_then(|call| eval(&call))
    {
        return err;
    }
    unexpected_token(tok, position)
}
