use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::rc::Rc;

use crate::combinators::{constant, curry2};

use super::state::Stream;

type ParserFn<S, A> = Rc<dyn Fn(S) -> Vec<(A, S)>>;

/// A parser from input `S` to results of type `A`.
///
/// Running a parser yields every way it can consume a prefix of the input,
/// as `(result, remaining input)` pairs. No pairs means failure. Parsers
/// hold no mutable state and can be cloned and run any number of times.
pub struct Parser<S, A> {
    parser: ParserFn<S, A>,
}

impl<S, A> Clone for Parser<S, A> {
    fn clone(&self) -> Self {
        Parser {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<S: Clone + 'static, A: 'static> Parser<S, A> {
    pub fn new<F: Fn(S) -> Vec<(A, S)> + 'static>(parser: F) -> Self {
        Parser {
            parser: Rc::new(parser),
        }
    }

    pub fn run(&self, input: S) -> Vec<(A, S)> {
        (self.parser)(input)
    }

    /// Succeeds once with `value`, consuming nothing.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Parser::new(move |input| vec![(value.clone(), input)])
    }

    /// Never succeeds.
    pub fn fail() -> Self {
        Parser::new(|_| Vec::new())
    }

    /// Defers building the parser until it runs, for recursive productions.
    pub fn lazy<F: Fn() -> Self + 'static>(build: F) -> Self {
        Parser::new(move |input| build().run(input))
    }

    /// Functor map: transform every result, keeping its remaining input.
    pub fn map<B: 'static, F: Fn(A) -> B + 'static>(self, f: F) -> Parser<S, B> {
        Parser::new(move |input| {
            self.run(input)
                .into_iter()
                .map(|(a, rest)| (f(a), rest))
                .collect()
        })
    }

    /// Replace every result with `value`.
    pub fn replace<B: Clone + 'static>(self, value: B) -> Parser<S, B> {
        self.map(constant(value))
    }

    /// Monadic bind: run `f(a)` on the remainder of every result of `self`.
    ///
    /// Results keep their order: everything produced from the first result
    /// of `self` comes before anything produced from the second.
    pub fn bind<B: 'static, F: Fn(A) -> Parser<S, B> + 'static>(self, f: F) -> Parser<S, B> {
        Parser::new(move |input| {
            self.run(input)
                .into_iter()
                .flat_map(|(a, rest)| f(a).run(rest))
                .collect()
        })
    }

    /// Ordered choice: the results of `self` if there are any, otherwise
    /// the results of `other`. `other` is not run when `self` succeeds.
    pub fn or(self, other: Parser<S, A>) -> Parser<S, A> {
        Parser::new(move |input: S| {
            let results = self.run(input.clone());
            if results.is_empty() {
                other.run(input)
            } else {
                results
            }
        })
    }

    /// Sequence: parse self then other, return (A, B)
    pub fn then<B: 'static>(self, other: Parser<S, B>) -> Parser<S, (A, B)>
    where
        A: Clone,
    {
        lift_a2(|a, b| (a, b), self, other)
    }

    /// Keep left: parse self then other, discard other's result
    pub fn skip<B: 'static>(self, other: Parser<S, B>) -> Parser<S, A>
    where
        A: Clone,
    {
        self.bind(move |a| other.clone().replace(a))
    }

    /// Keep right: parse self then other, discard self's result
    pub fn skip_left<B: 'static>(self, other: Parser<S, B>) -> Parser<S, B> {
        self.bind(move |_| other.clone())
    }
}

impl<S: Clone + 'static, F: 'static> Parser<S, F> {
    /// Applicative apply: every function result applied to every argument
    /// result that follows it.
    pub fn ap<A: 'static, B: 'static>(self, arg: Parser<S, A>) -> Parser<S, B>
    where
        F: Fn(A) -> B,
    {
        Parser::new(move |input| {
            self.run(input)
                .into_iter()
                .flat_map(|(f, rest)| {
                    arg.run(rest)
                        .into_iter()
                        .map(move |(a, rest)| (f(a), rest))
                })
                .collect()
        })
    }
}

/// Lift a binary function over two parsers run in sequence.
pub fn lift_a2<S, A, B, C, F>(f: F, first: Parser<S, A>, second: Parser<S, B>) -> Parser<S, C>
where
    S: Clone + 'static,
    A: Clone + 'static,
    B: 'static,
    C: 'static,
    F: Fn(A, B) -> C + 'static,
{
    first.map(curry2(f)).ap(second)
}

/// Flatten a parser that produces parsers.
pub fn join<S: Clone + 'static, A: 'static>(nested: Parser<S, Parser<S, A>>) -> Parser<S, A> {
    nested.bind(|inner| inner)
}

// === Primitive Parsers ===

/// Consume one element if it satisfies `predicate`.
pub fn satisfy<S, F>(predicate: F) -> Parser<S, S::Item>
where
    S: Stream + 'static,
    S::Item: 'static,
    F: Fn(&S::Item) -> bool + 'static,
{
    Parser::new(move |input: S| match input.uncons() {
        Some((item, rest)) if predicate(&item) => vec![(item, rest)],
        _ => Vec::new(),
    })
}

/// Consume any one element.
pub fn item<S>() -> Parser<S, S::Item>
where
    S: Stream + 'static,
    S::Item: 'static,
{
    satisfy(|_| true)
}

/// Succeeds only on exhausted input.
pub fn end_of_input<S: Stream + 'static>() -> Parser<S, ()> {
    Parser::new(|input: S| {
        if input.is_empty() {
            vec![((), input)]
        } else {
            Vec::new()
        }
    })
}

// === Repetition ===

/// Parse zero or more occurrences
///
/// Only the first result of each step is carried forward. A step that
/// succeeds without consuming input ends the repetition, so this always
/// terminates and always succeeds.
pub fn many<S: Stream + 'static, A: 'static>(parser: Parser<S, A>) -> Parser<S, Vec<A>> {
    Parser::new(move |input: S| {
        let mut values = Vec::new();
        let mut rest = input;
        while let Some((value, next)) = parser.run(rest.clone()).into_iter().next() {
            if next.position() <= rest.position() {
                break;
            }
            values.push(value);
            rest = next;
        }
        vec![(values, rest)]
    })
}

/// Parse one or more occurrences
pub fn some<S: Stream + 'static, A: Clone + 'static>(parser: Parser<S, A>) -> Parser<S, Vec<A>> {
    lift_a2(
        |first, mut rest: Vec<A>| {
            rest.insert(0, first);
            rest
        },
        parser.clone(),
        many(parser),
    )
}

/// Optional: parse zero or one
pub fn optional<S: Clone + 'static, A: 'static>(parser: Parser<S, A>) -> Parser<S, Option<A>> {
    Parser::new(move |input: S| {
        let results = parser.run(input.clone());
        if results.is_empty() {
            vec![(None, input)]
        } else {
            results
                .into_iter()
                .map(|(a, rest)| (Some(a), rest))
                .collect()
        }
    })
}

// === Operator Overloading ===

/// `+` for sequence: A + B -> (A, B)
impl<S: Clone + 'static, A: Clone + 'static, B: 'static> Add<Parser<S, B>> for Parser<S, A> {
    type Output = Parser<S, (A, B)>;

    fn add(self, rhs: Parser<S, B>) -> Self::Output {
        self.then(rhs)
    }
}

/// `-` for keep left: A - B -> A (parse B, discard result)
impl<S: Clone + 'static, A: Clone + 'static, B: 'static> Sub<Parser<S, B>> for Parser<S, A> {
    type Output = Parser<S, A>;

    fn sub(self, rhs: Parser<S, B>) -> Self::Output {
        self.skip(rhs)
    }
}

/// `*` for keep right: A * B -> B (parse A, discard result)
impl<S: Clone + 'static, A: 'static, B: 'static> Mul<Parser<S, B>> for Parser<S, A> {
    type Output = Parser<S, B>;

    fn mul(self, rhs: Parser<S, B>) -> Self::Output {
        self.skip_left(rhs)
    }
}

/// `|` for choice: A | B -> A or B
impl<S: Clone + 'static, A: 'static> BitOr<Parser<S, A>> for Parser<S, A> {
    type Output = Parser<S, A>;

    fn bitor(self, rhs: Parser<S, A>) -> Self::Output {
        self.or(rhs)
    }
}

/// `>>` for map: A >> fn -> B
impl<S: Clone + 'static, A: 'static, B: 'static, F: Fn(A) -> B + 'static> Shr<F> for Parser<S, A> {
    type Output = Parser<S, B>;

    fn shr(self, f: F) -> Self::Output {
        self.map(f)
    }
}
