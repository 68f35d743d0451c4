//! # Abstract Syntax Tree
//!
//! [`SyntaxTree`] keeps the shape of a parsed expression instead of
//! evaluating it, which is handy for inspecting how the grammar grouped
//! things.

use std::fmt;

use crate::parser::{ExprHandler, HandlerError};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    /// Operators, function calls and bare identifiers (no arguments).
    Operation { name: String, args: Vec<Expr> },
}

impl Expr {
    pub fn operation(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Operation {
            name: name.into(),
            args,
        }
    }
}

fn is_symbolic(name: &str) -> bool {
    !name.starts_with(|c: char| c.is_alphanumeric() || c == '_')
}

/// Fully parenthesised rendering: `(1 + (2 * 3))`, `(-x)`, `max(1, 2)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{n}"),
            Expr::Operation { name, args } => match args.as_slice() {
                [] => write!(f, "{name}"),
                [arg] if is_symbolic(name) => write!(f, "({name}{arg})"),
                [lhs, rhs] if is_symbolic(name) => write!(f, "({lhs} {name} {rhs})"),
                _ => {
                    write!(f, "{name}(")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    write!(f, ")")
                }
            },
        }
    }
}

/// Handler that builds an [`Expr`] for any operation name and arity.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxTree;

impl ExprHandler for SyntaxTree {
    type Output = Expr;

    fn from_number(&self, n: f64) -> Expr {
        Expr::Number(n)
    }

    fn from_operation(&self, name: &str, args: Vec<Expr>) -> Result<Expr, HandlerError> {
        Ok(Expr::operation(name, args))
    }
}
