//! # TypeMaths - Functional Tools for Mathematical Computation
//!
//! A small toolkit of functional building blocks for maths: combinators,
//! lazy sequences, symbolic differentiation, root-finding iterators, and an
//! expression parser built on a generic parser-combinator engine.
//!
//! ## Architecture Overview
//!
//! The core is the expression pipeline:
//!
//! 1. **Lexer** (`lexer`) - Splits text into typed tokens with ordered regex rules
//! 2. **Parser engine** (`parser::combinators`) - A pure `Parser<S, A>` type with
//!    map, bind, ordered choice and repetition
//! 3. **Grammar** (`parser::grammar`) - Arithmetic expressions built from the engine,
//!    parameterised by an [`ExprHandler`](parser::ExprHandler)
//!
//! ## Pipeline Flow
//!
//! ```text
//! Source Text (&str)
//!     ↓
//! [Lexer] → Tokens (whitespace dropped)
//!     ↓
//! [Grammar] → (value, leftover tokens) pairs
//!     ↓
//! [Handler] → f64 / Expr / Function / …
//! ```
//!
//! ## Key Design Decisions
//!
//! ### Failure as data
//! A parser returns every way it can consume a prefix of its input. An
//! empty result is a failure, which is what lets ordered choice backtrack:
//! each alternative is run on the same immutable input value, so there is
//! no cursor to rewind.
//!
//! ### Pluggable semantics
//! The grammar never decides what `1 + 2` means. It calls the handler for
//! every literal and every application, so the same grammar evaluates
//! numbers ([`interpreter::Arithmetic`]), builds syntax trees
//! ([`ast::SyntaxTree`]) or builds differentiable functions
//! ([`calculus::Differentiation`]). Handler errors abort the parse; they
//! are not treated as a failed alternative.
//!
//! ## Module Structure
//!
//! - [`lexer`] - Rule-based tokenizer
//! - [`parser`] - Combinator engine and expression grammar
//! - [`interpreter`] - Numeric evaluation handler
//! - [`ast`] - Syntax tree handler
//! - [`calculus`] - Symbolic differentiation
//! - [`numerical`] - Root-finding iterators
//! - [`generators`] - Lazy sequence helpers
//! - [`combinators`] - Composition, currying and friends
//! - [`doc`] - Markdown generation from documentation blocks
//!
//! ## Example
//!
//! ```
//! use typemaths::interpreter::evaluate;
//!
//! assert_eq!(evaluate("1*(2+3)*4").unwrap(), 20.0);
//! ```

pub mod ast;
pub mod calculus;
pub mod combinators;
pub mod doc;
pub mod generators;
pub mod interpreter;
pub mod lexer;
pub mod numerical;
pub mod parser;
