//! Grammar module for arithmetic expressions
//!
//! The grammar is split by level:
//! - `literal`: single tokens (numbers, identifiers, operators, punctuation)
//! - `expression`: the precedence layers `expression → term → factor → base`
//!
//! What an expression *means* is left to an [`ExprHandler`]: the grammar
//! calls it for every number literal and every operator or function
//! application it recognises.

mod expression;
mod literal;

use std::rc::Rc;

use log::debug;
use thiserror::Error;

use crate::lexer::{TokenizeError, expression_tokenizer, filter_whitespace};

use super::state::{Stream, TokenStream};

pub use expression::{Value, expression};
pub use literal::{TokenParser, comma, identifier, lparen, number, operator, rparen, token};

/// Semantic actions for the expression grammar.
pub trait ExprHandler {
    type Output: Clone + 'static;

    fn from_number(&self, n: f64) -> Self::Output;

    /// Called for operators (`"+"`, `"^"`, …), functions (`"sin"`, …) and
    /// bare identifiers, which arrive with no arguments.
    fn from_operation(
        &self,
        name: &str,
        args: Vec<Self::Output>,
    ) -> Result<Self::Output, HandlerError>;
}

impl<H: ExprHandler + ?Sized> ExprHandler for Rc<H> {
    type Output = H::Output;

    fn from_number(&self, n: f64) -> Self::Output {
        (**self).from_number(n)
    }

    fn from_operation(
        &self,
        name: &str,
        args: Vec<Self::Output>,
    ) -> Result<Self::Output, HandlerError> {
        (**self).from_operation(name, args)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HandlerError {
    #[error("unknown operation {name}/{arity}")]
    UnknownOperation { name: String, arity: usize },

    #[error("{0}")]
    Custom(String),
}

impl HandlerError {
    pub fn unknown(name: &str, arity: usize) -> Self {
        HandlerError::UnknownOperation {
            name: name.to_string(),
            arity,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExpressionError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    #[error(transparent)]
    Handler(#[from] HandlerError),

    #[error("no complete parse for {0:?}")]
    NoParse(String),
}

pub type Parses<E> = Vec<(E, TokenStream)>;

/// Builds a function that parses expression text with `handler`.
///
/// The returned function tokenizes its input, drops whitespace and runs the
/// grammar, returning every `(value, leftover tokens)` pair. A handler error
/// anywhere in the parse is returned instead.
pub fn make_expression_parser<H>(
    handler: H,
) -> impl Fn(&str) -> Result<Parses<H::Output>, ExpressionError>
where
    H: ExprHandler + 'static,
{
    let grammar = expression(Rc::new(handler));

    move |input: &str| {
        let tokens = filter_whitespace(expression_tokenizer().tokenize(input)?);
        let results = grammar.run(TokenStream::new(tokens));
        debug!("{} parse(s) of {input:?}", results.len());

        results
            .into_iter()
            .map(|(value, rest)| value.map(|value| (value, rest)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(ExpressionError::from)
    }
}

/// Parses `input` and returns the first parse that consumes every token.
pub fn parse_expression<H>(handler: H, input: &str) -> Result<H::Output, ExpressionError>
where
    H: ExprHandler + 'static,
{
    make_expression_parser(handler)(input)?
        .into_iter()
        .find(|(_, rest)| rest.is_empty())
        .map(|(value, _)| value)
        .ok_or_else(|| ExpressionError::NoParse(input.to_string()))
}
