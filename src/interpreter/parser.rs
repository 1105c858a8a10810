/// Entry points of the parser.
///
/// Checks parenthesis balance over the whole token sequence, then parses a
/// full expression and rejects leftover tokens.
pub mod core;

/// Prefix operators, function calls and primary operands.
///
/// Handles negation, function application, numeric literals and
/// parenthesised groups, which carry the nesting depth limit.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence levels: `*` `/` above
/// `+` `-`.
pub mod binary;

/// Helpers shared by the parsing levels.
pub mod utils;
