//! # Lexer
//!
//! Turns raw text into a sequence of [`Token`]s using an ordered list of
//! named regular-expression rules.
//!
//! At every position the rules are tried in declaration order and the first
//! one that matches wins, regardless of how long a later rule's match would
//! have been. There is no backtracking: the scan is one greedy pass from left
//! to right.
//!
//! Whitespace is tokenized like any other rule. Callers that do not want it
//! drop it with [`filter_whitespace`].

use std::fmt;

use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Name of the rule whose tokens are dropped before parsing.
pub const WHITESPACE: &str = "whitespace";

/// A classified piece of input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: String,
    pub text: String,
}

impl Token {
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
        }
    }

    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.text)
    }
}

#[derive(Debug, Error)]
pub enum TokenizeError {
    #[error("invalid pattern for rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("no rule matches at position {position} (found {found:?})")]
    NoMatch { position: usize, found: String },
}

struct Rule {
    name: String,
    pattern: Regex,
}

/// An ordered set of named rules.
pub struct Tokenizer {
    rules: Vec<Rule>,
}

impl Tokenizer {
    /// Builds a tokenizer from `(name, pattern)` pairs.
    ///
    /// Each pattern is anchored to the start of the remaining input, so a
    /// pattern does not need its own `^`.
    pub fn new<'a>(
        rules: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, TokenizeError> {
        let rules = rules
            .into_iter()
            .map(|(name, pattern)| {
                Regex::new(&format!("^(?:{pattern})"))
                    .map(|pattern| Rule {
                        name: name.to_string(),
                        pattern,
                    })
                    .map_err(|source| TokenizeError::InvalidPattern {
                        rule: name.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.name.as_str())
    }

    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>, TokenizeError> {
        let mut tokens = Vec::new();
        let mut position = 0;

        while position < input.len() {
            let rest = &input[position..];
            let (rule, len) = self.match_at(rest).ok_or_else(|| TokenizeError::NoMatch {
                position,
                found: rest.chars().take(16).collect(),
            })?;

            trace!("{} matched {:?} at {position}", rule.name, &rest[..len]);
            tokens.push(Token::new(rule.name.as_str(), &rest[..len]));
            position += len;
        }

        debug!("tokenized {} bytes into {} tokens", input.len(), tokens.len());
        Ok(tokens)
    }

    fn match_at(&self, rest: &str) -> Option<(&Rule, usize)> {
        // empty matches would never advance the scan
        self.rules.iter().find_map(|rule| {
            rule.pattern
                .find(rest)
                .filter(|m| !m.is_empty())
                .map(|m| (rule, m.end()))
        })
    }
}

/// Drops `whitespace` tokens.
pub fn filter_whitespace(tokens: Vec<Token>) -> Vec<Token> {
    tokens
        .into_iter()
        .filter(|token| !token.is(WHITESPACE))
        .collect()
}

const EXPRESSION_RULES: [(&str, &str); 7] = [
    ("identifier", r"[a-zA-Z_][a-zA-Z0-9_]*"),
    ("number", r"[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?"),
    ("operator", r"\*\*|[-+*/^%]"),
    ("lparen", r"\("),
    ("rparen", r"\)"),
    ("comma", r","),
    (WHITESPACE, r"\s+"),
];

static EXPRESSION_TOKENIZER: Lazy<Tokenizer> = Lazy::new(|| {
    Tokenizer::new(EXPRESSION_RULES).unwrap_or_else(|err| panic!("built-in rules: {err}"))
});

/// The tokenizer for arithmetic expressions.
pub fn expression_tokenizer() -> &'static Tokenizer {
    &EXPRESSION_TOKENIZER
}
