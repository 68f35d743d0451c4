//! Expression parsers for arithmetic
//!
//! Precedence, loosest first: `+ -`, then `* / %`, then unary `+ -`, then
//! `^ **`. Binary `+ - * / %` associate to the left. A power takes at most
//! one exponent, so `a^b^c` needs parentheses.

use std::rc::Rc;

use crate::lexer::Token;
use crate::parser::combinators::{Parser, many};
use crate::parser::state::TokenStream;

use super::literal::{comma, identifier, lparen, number, operator, rparen};
use super::{ExprHandler, HandlerError};

/// What every production yields: a handler value, or the first handler
/// error met while building it.
pub type Value<H> = Result<<H as ExprHandler>::Output, HandlerError>;

type ValueParser<H> = Parser<TokenStream, Value<H>>;

const ADDITIVE: &[&str] = &["+", "-"];
const MULTIPLICATIVE: &[&str] = &["*", "/", "%"];
const POWER: &[&str] = &["^", "**"];

/// Applies an operation unless one of its arguments already failed.
fn apply<H: ExprHandler>(handler: &H, name: &str, args: Vec<Value<H>>) -> Value<H> {
    let args = args.into_iter().collect::<Result<Vec<_>, _>>()?;
    handler.from_operation(name, args)
}

/// expression := term (("+" | "-") term)*
pub fn expression<H: ExprHandler + 'static>(handler: Rc<H>) -> ValueParser<H> {
    let h = Rc::clone(&handler);
    term(handler).bind(move |first| chain(Rc::clone(&h), ADDITIVE, term::<H>, first))
}

/// term := factor (("*" | "/" | "%") factor)*
fn term<H: ExprHandler + 'static>(handler: Rc<H>) -> ValueParser<H> {
    let h = Rc::clone(&handler);
    factor(handler).bind(move |first| chain(Rc::clone(&h), MULTIPLICATIVE, factor::<H>, first))
}

/// Left-associative tail of `expression` and `term`: folds each
/// `operator operand` pair into `acc` until no operator follows.
fn chain<H: ExprHandler + 'static>(
    handler: Rc<H>,
    operators: &'static [&'static str],
    operand: fn(Rc<H>) -> ValueParser<H>,
    acc: Value<H>,
) -> ValueParser<H> {
    let done = Parser::pure(acc.clone());

    let step = operator(operators).bind(move |op: Token| {
        let handler = Rc::clone(&handler);
        let acc = acc.clone();
        operand(Rc::clone(&handler)).bind(move |next| {
            let folded = apply(&*handler, &op.text, vec![acc.clone(), next]);
            chain(Rc::clone(&handler), operators, operand, folded)
        })
    });

    step | done
}

/// factor := ("+" | "-") factor
///         | base (("^" | "**") base)?
fn factor<H: ExprHandler + 'static>(handler: Rc<H>) -> ValueParser<H> {
    let h = Rc::clone(&handler);
    let unary = operator(ADDITIVE).bind(move |op: Token| {
        let handler = Rc::clone(&h);
        factor(Rc::clone(&h)).map(move |value| apply(&*handler, &op.text, vec![value]))
    });

    let h = Rc::clone(&handler);
    let power = base(handler).bind(move |lhs| {
        let handler = Rc::clone(&h);
        let done = Parser::pure(lhs.clone());

        let exponent = operator(POWER).bind(move |op: Token| {
            let handler = Rc::clone(&handler);
            let lhs = lhs.clone();
            base(Rc::clone(&handler))
                .map(move |rhs| apply(&*handler, &op.text, vec![lhs.clone(), rhs]))
        });

        exponent | done
    });

    unary | power
}

/// base := number
///       | "(" expression ")"
///       | identifier "(" expression ("," expression)* ")"
///       | identifier
fn base<H: ExprHandler + 'static>(handler: Rc<H>) -> ValueParser<H> {
    let h = Rc::clone(&handler);
    let literal = number().map(move |n| -> Value<H> { Ok(h.from_number(n)) });

    let h = Rc::clone(&handler);
    let grouped = lparen() * Parser::lazy(move || expression(Rc::clone(&h))) - rparen();

    let h = Rc::clone(&handler);
    let call = identifier().bind(move |id: Token| {
        let handler = Rc::clone(&h);
        let args = lparen() * arguments(Rc::clone(&h)) - rparen();
        args.map(move |args| apply(&*handler, &id.text, args))
    });

    let bare = identifier().map(move |id: Token| apply(&*handler, &id.text, Vec::new()));

    literal | grouped | call | bare
}

/// arguments := expression ("," expression)*
fn arguments<H: ExprHandler + 'static>(handler: Rc<H>) -> Parser<TokenStream, Vec<Value<H>>> {
    let first = expression(Rc::clone(&handler));
    let rest = many(comma() * expression(handler));

    (first + rest).map(|(first, mut rest)| {
        rest.insert(0, first);
        rest
    })
}
