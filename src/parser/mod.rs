//! # Parser
//!
//! A small parser-combinator engine and the arithmetic expression grammar
//! built on it.
//!
//! - [`state`] - immutable input streams threaded through parsers by value
//! - [`combinators`] - the generic [`Parser`] type and its combinators
//! - [`grammar`] - the expression grammar and its entry points

pub mod combinators;
pub mod grammar;
pub mod state;

pub use combinators::{
    Parser, end_of_input, item, join, lift_a2, many, optional, satisfy, some,
};
pub use grammar::{
    ExprHandler, ExpressionError, HandlerError, Parses, make_expression_parser, parse_expression,
};
pub use state::{CharStream, Stream, TokenStream};
