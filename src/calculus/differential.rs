//! Symbolic differentiation of real functions of one variable
//!
//! A [`Function`] is a small expression tree in the variable `x`.
//! [`Function::derivative`] rewrites the tree by the usual rules; nothing
//! is approximated numerically.

use std::fmt;
use std::rc::Rc;

use crate::parser::{ExprHandler, ExpressionError, HandlerError, parse_expression};

#[derive(Debug, Clone, PartialEq)]
pub enum Function {
    /// `x`
    Identity,
    Constant(f64),
    Add(Rc<Function>, Rc<Function>),
    Sub(Rc<Function>, Rc<Function>),
    Mul(Rc<Function>, Rc<Function>),
    Div(Rc<Function>, Rc<Function>),
    Pow(Rc<Function>, Rc<Function>),
    Ln(Rc<Function>),
    Exp(Rc<Function>),
    Sin(Rc<Function>),
    Cos(Rc<Function>),
}

use Function::*;

// f(x) = x
pub fn identity() -> Function {
    Identity
}

// f(x) = c
pub fn constant(c: f64) -> Function {
    Constant(c)
}

pub fn add(f: Function, g: Function) -> Function {
    Add(Rc::new(f), Rc::new(g))
}

pub fn sub(f: Function, g: Function) -> Function {
    Sub(Rc::new(f), Rc::new(g))
}

pub fn mul(f: Function, g: Function) -> Function {
    Mul(Rc::new(f), Rc::new(g))
}

pub fn div(f: Function, g: Function) -> Function {
    Div(Rc::new(f), Rc::new(g))
}

pub fn pow(f: Function, g: Function) -> Function {
    Pow(Rc::new(f), Rc::new(g))
}

pub fn ln(f: Function) -> Function {
    Ln(Rc::new(f))
}

/// log_b(f(x)) = ln(f(x)) / ln(b(x))
pub fn log(f: Function, base: Function) -> Function {
    div(ln(f), ln(base))
}

pub fn exp(f: Function) -> Function {
    Exp(Rc::new(f))
}

pub fn sin(f: Function) -> Function {
    Sin(Rc::new(f))
}

pub fn cos(f: Function) -> Function {
    Cos(Rc::new(f))
}

fn owned(f: &Rc<Function>) -> Function {
    Function::clone(f)
}

impl Function {
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Identity => x,
            Constant(c) => *c,
            Add(f, g) => f.eval(x) + g.eval(x),
            Sub(f, g) => f.eval(x) - g.eval(x),
            Mul(f, g) => f.eval(x) * g.eval(x),
            Div(f, g) => f.eval(x) / g.eval(x),
            Pow(f, g) => f.eval(x).powf(g.eval(x)),
            Ln(f) => f.eval(x).ln(),
            Exp(f) => f.eval(x).exp(),
            Sin(f) => f.eval(x).sin(),
            Cos(f) => f.eval(x).cos(),
        }
    }

    pub fn derivative(&self) -> Function {
        match self {
            Identity => constant(1.0),
            Constant(_) => constant(0.0),
            // (f + g)' = f' + g'
            Add(f, g) => add(f.derivative(), g.derivative()),
            Sub(f, g) => sub(f.derivative(), g.derivative()),
            // (f g)' = f' g + f g'
            Mul(f, g) => add(
                mul(f.derivative(), owned(g)),
                mul(owned(f), g.derivative()),
            ),
            // (f / g)' = (f' g - f g') / g^2
            Div(f, g) => div(
                sub(
                    mul(f.derivative(), owned(g)),
                    mul(owned(f), g.derivative()),
                ),
                pow(owned(g), constant(2.0)),
            ),
            // (f^c)' = c f^(c-1) f'
            Pow(f, g) if matches!(**g, Constant(_)) => {
                let c = g.eval(0.0);
                mul(
                    mul(constant(c), pow(owned(f), constant(c - 1.0))),
                    f.derivative(),
                )
            }
            // (f^g)' = f^g (g' ln f + g f' / f)
            Pow(f, g) => mul(
                self.clone(),
                add(
                    mul(g.derivative(), ln(owned(f))),
                    mul(div(owned(g), owned(f)), f.derivative()),
                ),
            ),
            // ln(f)' = f' / f
            Ln(f) => div(f.derivative(), owned(f)),
            Exp(f) => mul(self.clone(), f.derivative()),
            Sin(f) => mul(cos(owned(f)), f.derivative()),
            // cos(f)' = -sin(f) f'
            Cos(f) => mul(mul(constant(-1.0), sin(owned(f))), f.derivative()),
        }
    }

    /// The `n`-th derivative.
    pub fn nth_derivative(&self, n: usize) -> Function {
        (0..n).fold(self.clone(), |f, _| f.derivative())
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity => write!(f, "x"),
            Constant(c) => write!(f, "{c}"),
            Add(g, h) => write!(f, "({g} + {h})"),
            Sub(g, h) => write!(f, "({g} - {h})"),
            Mul(g, h) => write!(f, "({g} * {h})"),
            Div(g, h) => write!(f, "({g} / {h})"),
            Pow(g, h) => write!(f, "({g} ^ {h})"),
            Ln(g) => write!(f, "ln({g})"),
            Exp(g) => write!(f, "exp({g})"),
            Sin(g) => write!(f, "sin({g})"),
            Cos(g) => write!(f, "cos({g})"),
        }
    }
}

/// Handler that builds a [`Function`] of the variable `x`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Differentiation;

impl ExprHandler for Differentiation {
    type Output = Function;

    fn from_number(&self, n: f64) -> Function {
        constant(n)
    }

    fn from_operation(&self, name: &str, args: Vec<Function>) -> Result<Function, HandlerError> {
        let mut args = args.into_iter();
        let arity = args.len();
        let function = match (name, arity) {
            ("x", 0) => identity(),
            ("pi", 0) => constant(std::f64::consts::PI),
            ("e", 0) => constant(std::f64::consts::E),
            ("+", 1) => next(&mut args)?,
            ("-", 1) => sub(constant(0.0), next(&mut args)?),
            ("ln", 1) => ln(next(&mut args)?),
            ("exp", 1) => exp(next(&mut args)?),
            ("sin", 1) => sin(next(&mut args)?),
            ("cos", 1) => cos(next(&mut args)?),
            ("sqrt", 1) => pow(next(&mut args)?, constant(0.5)),
            ("log", 1) => log(next(&mut args)?, constant(10.0)),
            (_, 2) => {
                let lhs = next(&mut args)?;
                let rhs = next(&mut args)?;
                match name {
                    "+" => add(lhs, rhs),
                    "-" => sub(lhs, rhs),
                    "*" => mul(lhs, rhs),
                    "/" => div(lhs, rhs),
                    "^" | "**" => pow(lhs, rhs),
                    "log" => log(lhs, rhs),
                    _ => return Err(HandlerError::unknown(name, arity)),
                }
            }
            _ => return Err(HandlerError::unknown(name, arity)),
        };
        Ok(function)
    }
}

fn next(args: &mut impl Iterator<Item = Function>) -> Result<Function, HandlerError> {
    args.next()
        .ok_or_else(|| HandlerError::Custom("missing argument".to_string()))
}

/// Reads a function of `x` from expression text.
///
/// ```
/// let f = typemaths::calculus::read("x^2 - ln(x)").unwrap();
/// assert_eq!(f.eval(1.0), 1.0);
/// assert_eq!(f.derivative().eval(1.0), 1.0);
/// ```
pub fn read(input: &str) -> Result<Function, ExpressionError> {
    parse_expression(Differentiation, input)
}
