/// The validator module screens raw input before anything else runs.
///
/// It strips whitespace and rejects characters outside the accepted set, so
/// later phases only ever see digits, operators, parentheses and the letters
/// of the supported function names.
pub mod validator;
/// The lexer module tokenizes validated input for further parsing.
///
/// The lexer (tokenizer) reads the stripped text and produces a stream of
/// tokens: numbers, operators, parentheses and function names, each paired
/// with its byte offset.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser resolves parentheses, function application and
/// the two operator precedence levels in a single pass.
///
/// # Responsibilities
/// - Verifies parenthesis balance before descending.
/// - Converts tokens into [`crate::ast::Expr`] nodes.
/// - Reports malformed input with typed errors.
pub mod parser;
/// The evaluator module computes the value of an expression tree.
///
/// It folds arithmetic through the checked primitives in [`crate::math`] and
/// dispatches function calls through the builtin table.
pub mod evaluator;
