//! Token-level parsers for the expression grammar

use crate::lexer::Token;
use crate::parser::combinators::{Parser, satisfy};
use crate::parser::state::TokenStream;

pub type TokenParser<T> = Parser<TokenStream, T>;

/// Parse one token of the given kind
pub fn token(kind: &'static str) -> TokenParser<Token> {
    satisfy(move |token: &Token| token.is(kind))
}

/// Parse one of the listed operators
pub fn operator(operators: &'static [&'static str]) -> TokenParser<Token> {
    satisfy(move |token: &Token| {
        token.is("operator") && operators.contains(&token.text.as_str())
    })
}

pub fn identifier() -> TokenParser<Token> {
    token("identifier")
}

/// Parse a number literal into its value
pub fn number() -> TokenParser<f64> {
    token("number").bind(|token| match token.text.parse::<f64>() {
        Ok(value) => Parser::pure(value),
        Err(_) => Parser::fail(),
    })
}

pub fn lparen() -> TokenParser<Token> {
    token("lparen")
}

pub fn rparen() -> TokenParser<Token> {
    token("rparen")
}

pub fn comma() -> TokenParser<Token> {
    token("comma")
}
