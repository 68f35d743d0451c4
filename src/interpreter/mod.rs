//! # Interpreter
//!
//! Evaluates expressions to `f64` by plugging [`Arithmetic`] into the
//! expression grammar.

use std::f64::consts::{E, PI};

use crate::parser::{ExprHandler, ExpressionError, HandlerError, parse_expression};

/// Handler with the usual floating-point semantics.
///
/// | name | arity | meaning |
/// |---|---|---|
/// | `+` `-` | 1 | identity, negation |
/// | `+` `-` `*` `/` `%` | 2 | arithmetic (`%` is the remainder) |
/// | `^` `**` | 2 | power |
/// | `sin` `cos` `tan` `exp` `sqrt` `abs` `ln` | 1 | |
/// | `log` | 1 | base 10 |
/// | `log` | 2 | `log(x, base)` |
/// | `min` `max` | 2 | |
/// | `pi` `e` | 0 | constants |
#[derive(Debug, Clone, Copy, Default)]
pub struct Arithmetic;

impl ExprHandler for Arithmetic {
    type Output = f64;

    fn from_number(&self, n: f64) -> f64 {
        n
    }

    fn from_operation(&self, name: &str, args: Vec<f64>) -> Result<f64, HandlerError> {
        let value = match (name, args.as_slice()) {
            ("+", [x]) => *x,
            ("-", [x]) => -x,
            ("+", [x, y]) => x + y,
            ("-", [x, y]) => x - y,
            ("*", [x, y]) => x * y,
            ("/", [x, y]) => x / y,
            ("%", [x, y]) => x % y,
            ("^" | "**", [x, y]) => x.powf(*y),
            ("sin", [x]) => x.sin(),
            ("cos", [x]) => x.cos(),
            ("tan", [x]) => x.tan(),
            ("exp", [x]) => x.exp(),
            ("sqrt", [x]) => x.sqrt(),
            ("abs", [x]) => x.abs(),
            ("ln", [x]) => x.ln(),
            ("log", [x]) => x.log10(),
            ("log", [x, base]) => x.ln() / base.ln(),
            ("min", [x, y]) => x.min(*y),
            ("max", [x, y]) => x.max(*y),
            ("pi", []) => PI,
            ("e", []) => E,
            _ => return Err(HandlerError::unknown(name, args.len())),
        };
        Ok(value)
    }
}

/// Evaluates an arithmetic expression.
pub fn evaluate(input: &str) -> Result<f64, ExpressionError> {
    parse_expression(Arithmetic, input)
}
