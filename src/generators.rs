//! # Generators
//!
//! Lazy, possibly infinite sequences. These are thin helpers over
//! [`Iterator`] with the argument order used elsewhere in the crate
//! (function first, sequence last).
//!
//! ```
//! use typemaths::generators::{enum_from, filter, map, take};
//!
//! let even_squares = filter(|x: &u64| x % 2 == 0, map(|x| x * x, enum_from(1)));
//! assert_eq!(take(5, even_squares), vec![4, 16, 36, 64, 100]);
//! ```

use std::iter;

pub fn map<A, B>(f: impl FnMut(A) -> B, xs: impl Iterator<Item = A>) -> impl Iterator<Item = B> {
    xs.map(f)
}

pub fn filter<A>(
    p: impl FnMut(&A) -> bool,
    xs: impl Iterator<Item = A>,
) -> impl Iterator<Item = A> {
    xs.filter(p)
}

/// The first `n` elements, collected.
pub fn take<A>(n: usize, xs: impl Iterator<Item = A>) -> Vec<A> {
    xs.take(n).collect()
}

/// `x0, f(x0), f(f(x0)), …`
pub fn iterate<A>(f: impl Fn(&A) -> A, x0: A) -> impl Iterator<Item = A> {
    iter::successors(Some(x0), move |x| Some(f(x)))
}

/// `n, n + 1, n + 2, …`
pub fn enum_from(n: u64) -> impl Iterator<Item = u64> {
    n..
}
