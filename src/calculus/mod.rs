//! # Calculus
//!
//! Differential calculus over symbolic real functions.

pub mod differential;

pub use differential::{
    Differentiation, Function, add, constant, cos, div, exp, identity, ln, log, mul, pow, read,
    sin, sub,
};
