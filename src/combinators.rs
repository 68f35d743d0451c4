//! # Combinators
//!
//! Small higher-order helpers shared by the rest of the crate: identity,
//! constant functions, composition, argument flipping and currying (up to
//! six arguments).
//!
//! ```
//! use typemaths::combinators::compose;
//!
//! let succ = |x: f64| x + 1.0;
//! let double = |x: f64| x * 2.0;
//! let h = compose(double, succ);
//! assert_eq!(h(3.0), 8.0);
//! assert_eq!(h(5.0), 12.0);
//! ```

use std::rc::Rc;

/// Identity function.
pub fn id<A>(x: A) -> A {
    x
}

/// A function that ignores its argument and always returns `value`.
pub fn constant<A, B: Clone>(value: B) -> impl Fn(A) -> B {
    move |_| value.clone()
}

/// `compose(g, f)` is `g ∘ f`, i.e. `x ↦ g(f(x))`.
pub fn compose<A, B, C>(g: impl Fn(B) -> C, f: impl Fn(A) -> B) -> impl Fn(A) -> C {
    move |x| g(f(x))
}

/// Takes the two arguments of `f` in reverse order.
pub fn flip<A, B, C>(f: impl Fn(A, B) -> C) -> impl Fn(B, A) -> C {
    move |y, x| f(x, y)
}

/// Converts a function of two arguments into a chain of one-argument
/// functions.
pub fn curry2<A, B, C>(f: impl Fn(A, B) -> C + 'static) -> impl Fn(A) -> Box<dyn Fn(B) -> C>
where
    A: Clone + 'static,
    B: 'static,
    C: 'static,
{
    let f = Rc::new(f);
    move |x| {
        let f = Rc::clone(&f);
        Box::new(move |y| f(x.clone(), y))
    }
}

#[allow(clippy::type_complexity)]
pub fn curry3<A, B, C, D>(
    f: impl Fn(A, B, C) -> D + 'static,
) -> impl Fn(A) -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> D>>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    D: 'static,
{
    let f = Rc::new(f);
    move |x| {
        let f = Rc::clone(&f);
        Box::new(move |y| {
            let f = Rc::clone(&f);
            let x = x.clone();
            Box::new(move |z| f(x.clone(), y.clone(), z))
        })
    }
}

/// Inverse of [`curry2`].
pub fn uncurry2<A, B, C, G>(f: impl Fn(A) -> G) -> impl Fn(A, B) -> C
where
    G: Fn(B) -> C,
{
    move |x, y| f(x)(y)
}

pub fn uncurry3<A, B, C, D, G, H>(f: impl Fn(A) -> G) -> impl Fn(A, B, C) -> D
where
    G: Fn(B) -> H,
    H: Fn(C) -> D,
{
    move |x, y, z| f(x)(y)(z)
}

#[allow(clippy::type_complexity)]
pub fn curry4<A, B, C, D, E>(
    f: impl Fn(A, B, C, D) -> E + 'static,
) -> impl Fn(A) -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> Box<dyn Fn(D) -> E>>>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    D: 'static,
    E: 'static,
{
    let f = Rc::new(f);
    move |a| {
        let f = Rc::clone(&f);
        Box::new(curry3(move |b, c, d| f(a.clone(), b, c, d)))
    }
}

#[allow(clippy::type_complexity)]
pub fn curry5<A, B, C, D, E, F>(
    f: impl Fn(A, B, C, D, E) -> F + 'static,
) -> impl Fn(A) -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> Box<dyn Fn(D) -> Box<dyn Fn(E) -> F>>>>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    D: Clone + 'static,
    E: 'static,
    F: 'static,
{
    let f = Rc::new(f);
    move |a| {
        let f = Rc::clone(&f);
        Box::new(curry4(move |b, c, d, e| f(a.clone(), b, c, d, e)))
    }
}

#[allow(clippy::type_complexity)]
pub fn curry6<A, B, C, D, E, F, G>(
    f: impl Fn(A, B, C, D, E, F) -> G + 'static,
) -> impl Fn(
    A,
) -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> Box<dyn Fn(D) -> Box<dyn Fn(E) -> Box<dyn Fn(F) -> G>>>>>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    D: Clone + 'static,
    E: Clone + 'static,
    F: 'static,
    G: 'static,
{
    let f = Rc::new(f);
    move |a| {
        let f = Rc::clone(&f);
        Box::new(curry5(move |b, c, d, e, g| f(a.clone(), b, c, d, e, g)))
    }
}

pub fn uncurry4<A, B, C, D, E, G, H, I>(f: impl Fn(A) -> G) -> impl Fn(A, B, C, D) -> E
where
    G: Fn(B) -> H,
    H: Fn(C) -> I,
    I: Fn(D) -> E,
{
    move |a, b, c, d| f(a)(b)(c)(d)
}

pub fn uncurry5<A, B, C, D, E, F, G, H, I, J>(f: impl Fn(A) -> G) -> impl Fn(A, B, C, D, E) -> F
where
    G: Fn(B) -> H,
    H: Fn(C) -> I,
    I: Fn(D) -> J,
    J: Fn(E) -> F,
{
    move |a, b, c, d, e| f(a)(b)(c)(d)(e)
}

pub fn uncurry6<A, B, C, D, E, F, R, G, H, I, J, K>(
    f: impl Fn(A) -> G,
) -> impl Fn(A, B, C, D, E, F) -> R
where
    G: Fn(B) -> H,
    H: Fn(C) -> I,
    I: Fn(D) -> J,
    J: Fn(E) -> K,
    K: Fn(F) -> R,
{
    move |a, b, c, d, e, g| f(a)(b)(c)(d)(e)(g)
}
