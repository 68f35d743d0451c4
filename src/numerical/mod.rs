//! # Numerical Analysis
//!
//! Root finding as lazy sequences of approximations. Each method is an
//! [`Iterator`] of successively better guesses; [`limit`] consumes one until
//! two consecutive guesses are close enough.
//!
//! ```
//! use typemaths::numerical::{NewtonRaphson, limit};
//!
//! let root = limit(1e-6, NewtonRaphson::new(f64::ln, |x| 1.0 / x, 2.0));
//! assert!((root.unwrap() - 1.0).abs() < 1e-9);
//! ```

use log::{debug, trace};

/// One Newton–Raphson step: `x ↦ x - f(x) / f'(x)`.
pub fn newton_raphson<F, D>(f: F, df: D) -> impl Fn(f64) -> f64
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    move |x| x - f(x) / df(x)
}

/// Newton–Raphson iteration, starting with `x0` itself.
pub struct NewtonRaphson<F, D> {
    f: F,
    df: D,
    next: f64,
}

impl<F, D> NewtonRaphson<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    pub fn new(f: F, df: D, x0: f64) -> Self {
        Self { f, df, next: x0 }
    }
}

impl<F, D> Iterator for NewtonRaphson<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let x = self.next;
        self.next = x - (self.f)(x) / (self.df)(x);
        Some(x)
    }
}

/// Secant iteration from the two starting points `x0` and `x1`.
///
/// Yields `x1, x2, …` and ends when the secant through the last two points
/// is flat.
pub struct Secant<F> {
    f: F,
    previous: f64,
    current: Option<f64>,
}

impl<F: Fn(f64) -> f64> Secant<F> {
    pub fn new(f: F, x0: f64, x1: f64) -> Self {
        Self {
            f,
            previous: x0,
            current: Some(x1),
        }
    }
}

impl<F: Fn(f64) -> f64> Iterator for Secant<F> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let x1 = self.current?;
        let x0 = self.previous;
        let (y0, y1) = ((self.f)(x0), (self.f)(x1));

        self.current = if y1 == y0 {
            None
        } else {
            Some(x1 - y1 * (x1 - x0) / (y1 - y0))
        };
        self.previous = x1;
        Some(x1)
    }
}

/// Bisection of `[a, b]`, yielding the midpoint of each interval.
///
/// The half whose endpoints still bracket a sign change is kept.
pub struct Bisection<F> {
    f: F,
    a: f64,
    b: f64,
}

impl<F: Fn(f64) -> f64> Bisection<F> {
    pub fn new(f: F, a: f64, b: f64) -> Self {
        Self { f, a, b }
    }
}

impl<F: Fn(f64) -> f64> Iterator for Bisection<F> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let mid = (self.a + self.b) / 2.0;
        if (self.f)(self.a) * (self.f)(mid) <= 0.0 {
            self.b = mid;
        } else {
            self.a = mid;
        }
        Some(mid)
    }
}

/// The first element within `epsilon` of its predecessor.
///
/// Returns `None` if the sequence ends before that happens, or once the
/// distance between two guesses is NaN (the iteration has diverged).
pub fn limit(epsilon: f64, approximations: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut approximations = approximations.into_iter();
    let mut previous = approximations.next()?;

    for (step, current) in approximations.enumerate() {
        trace!("step {step}: {current}");
        let distance = (current - previous).abs();
        if distance.is_nan() {
            debug!("diverged after {step} step(s)");
            return None;
        }
        if distance <= epsilon {
            return Some(current);
        }
        previous = current;
    }
    None
}
