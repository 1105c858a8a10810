use std::{fmt, mem};

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// The parser builds the tree in one pass with precedence already resolved:
/// parenthesised groups leave no node of their own, function calls bind
/// tighter than `*` and `/`, which bind tighter than `+` and `-`. Every node
/// records the position of the token it was built from, as a byte offset into
/// the whitespace-stripped expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3.14` or `1e5`.
    Literal {
        /// The literal value.
        value:    f64,
        /// Offset of the literal.
        position: usize,
    },
    /// A prefix operation (e.g. `-x`).
    UnaryOp {
        /// The operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Offset of the operator.
        position: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Offset of the operator.
        position: usize,
    },
    /// A call of a named one-argument function (e.g. `sin(x)`).
    ///
    /// The name is kept as written; it is resolved against the function
    /// table only when the call is evaluated.
    FunctionCall {
        /// Name of the function being called.
        name:     String,
        /// The single argument.
        argument: Box<Self>,
        /// Offset of the function name.
        position: usize,
    },
}

impl Expr {
    /// Gets the source offset from `self`.
    /// ## Example
    /// ```
    /// use exprcalc::ast::Expr;
    ///
    /// let expr = Expr::Literal { value:    2.0,
    ///                            position: 4, };
    ///
    /// assert_eq!(expr.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::FunctionCall { position, .. } => *position,
        }
    }
}

/// Dismantles the tree with an explicit work stack.
///
/// A long operator chain nests one node per operator, so the derived
/// recursive drop would need one stack frame per node.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl Expr {
    /// Moves every child out onto `pending`, leaving leaves in their place.
    fn detach_children(&mut self, pending: &mut Vec<Self>) {
        const HOLE: Expr = Expr::Literal { value:    0.0,
                                           position: 0, };

        match self {
            Self::Literal { .. } => {},
            Self::UnaryOp { expr: child, .. } | Self::FunctionCall { argument: child, .. } => {
                pending.push(mem::replace(child.as_mut(), HOLE));
            },
            Self::BinaryOp { left, right, .. } => {
                pending.push(mem::replace(left.as_mut(), HOLE));
                pending.push(mem::replace(right.as_mut(), HOLE));
            },
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

/// Renders the tree fully parenthesised, which makes the parsed precedence
/// visible: `2+3*4` displays as `(2 + (3 * 4))`.
///
/// Rendering recurses once per node.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::UnaryOp { op: UnaryOperator::Negate,
                            expr,
                            .. } => write!(f, "-{expr}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::FunctionCall { name, argument, .. } => write!(f, "{name}({argument})"),
        }
    }
}
