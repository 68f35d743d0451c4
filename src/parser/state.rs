use std::fmt;
use std::rc::Rc;

use crate::lexer::Token;

/// Immutable parser input.
///
/// A stream is a cursor into input that is never mutated: consuming an
/// element returns a new stream and leaves the original untouched, so every
/// alternative of a choice can start again from the same value.
pub trait Stream: Clone {
    type Item: Clone;

    /// Splits off the first element.
    fn uncons(&self) -> Option<(Self::Item, Self)>;

    /// Number of elements consumed so far from the backing input.
    fn position(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.uncons().is_none()
    }
}

/// A position inside a shared token sequence.
#[derive(Clone)]
pub struct TokenStream {
    tokens: Rc<[Token]>,
    index: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into(),
            index: 0,
        }
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    /// The tokens that have not been consumed yet.
    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.index..]
    }

    pub fn len(&self) -> usize {
        self.tokens.len() - self.index
    }
}

impl Stream for TokenStream {
    type Item = Token;

    fn uncons(&self) -> Option<(Token, Self)> {
        let token = self.peek()?.clone();
        let rest = Self {
            tokens: Rc::clone(&self.tokens),
            index: self.index + 1,
        };
        Some((token, rest))
    }

    fn position(&self) -> usize {
        self.index
    }

    fn is_empty(&self) -> bool {
        self.index >= self.tokens.len()
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

impl PartialEq for TokenStream {
    fn eq(&self, other: &Self) -> bool {
        self.remaining() == other.remaining()
    }
}

impl fmt::Debug for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.remaining()).finish()
    }
}

/// A byte offset inside shared text, yielding `char`s.
#[derive(Clone)]
pub struct CharStream {
    text: Rc<str>,
    offset: usize,
}

impl CharStream {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.into(),
            offset: 0,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text[self.offset..]
    }
}

impl Stream for CharStream {
    type Item = char;

    fn uncons(&self) -> Option<(char, Self)> {
        let c = self.as_str().chars().next()?;
        let rest = Self {
            text: Rc::clone(&self.text),
            offset: self.offset + c.len_utf8(),
        };
        Some((c, rest))
    }

    fn position(&self) -> usize {
        self.offset
    }

    fn is_empty(&self) -> bool {
        self.offset >= self.text.len()
    }
}

impl From<&str> for CharStream {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl PartialEq for CharStream {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl fmt::Debug for CharStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}
