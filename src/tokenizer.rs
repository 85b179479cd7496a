//! Multi-character delimiter tokenizer.
//!
//! [`TokenIter`] splits a string on a delimiter of any length, optionally
//! trimming delimiters from both ends and optionally skipping escaped
//! delimiter occurrences. It always moves forward; start a new iterator to
//! scan again.

use crate::escape::is_escaped;

/// Errors raised by [`TokenIter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// A token was requested after the last one had been returned.
    Exhausted { pointer: usize },
    /// Tokens cannot be removed through the iterator.
    RemoveUnsupported,
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted { pointer } => write!(f, "No tokens after {pointer}"),
            Self::RemoveUnsupported => write!(f, "Remove not supported"),
        }
    }
}

impl std::error::Error for TokenError {}

/// One-token lookahead used by [`TokenIter::has_next`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum Lookahead {
    Unfetched,
    Buffered(String),
    Exhausted,
}

/// Forward-only iterator over the tokens of a string.
///
/// If the last delimiter found ends exactly at the end of the target, one
/// final empty token follows it, so `"a,b,"` split on `","` (untrimmed)
/// yields `"a"`, `"b"` and `""`.
#[derive(Debug, Clone)]
pub struct TokenIter {
    target: String,
    delimiter: String,
    ignore_escaped: bool,
    pointer: usize,
    /// Set when a delimiter ended exactly at the end of the target.
    trailing_empty: bool,
    lookahead: Lookahead,
}

impl TokenIter {
    /// Create an iterator over `target`.
    ///
    /// With `trim`, leading delimiters are always stripped; trailing ones are
    /// stripped until one is found that is escaped, if `ignore_escaped` is set.
    pub fn new(target: &str, delimiter: &str, trim: bool, ignore_escaped: bool) -> Self {
        let mut target = target;
        if trim && !delimiter.is_empty() {
            let len = delimiter.len();
            while let Some(rest) = target.strip_prefix(delimiter) {
                target = rest;
            }
            while target.ends_with(delimiter) {
                if ignore_escaped && is_escaped(target, target.len() - len) {
                    break;
                }
                target = &target[..target.len() - len];
            }
        }
        Self {
            target: target.to_string(),
            delimiter: delimiter.to_string(),
            ignore_escaped,
            pointer: 0,
            trailing_empty: false,
            lookahead: Lookahead::Unfetched,
        }
    }

    /// True if another token is available. Never fails.
    pub fn has_next(&mut self) -> bool {
        if self.lookahead == Lookahead::Unfetched {
            self.lookahead = match self.advance() {
                Some(token) => Lookahead::Buffered(token),
                None => Lookahead::Exhausted,
            };
        }
        matches!(self.lookahead, Lookahead::Buffered(_))
    }

    /// Return the next token, or [`TokenError::Exhausted`].
    pub fn next_token(&mut self) -> Result<String, TokenError> {
        let token = match std::mem::replace(&mut self.lookahead, Lookahead::Unfetched) {
            Lookahead::Buffered(token) => Some(token),
            Lookahead::Exhausted => {
                self.lookahead = Lookahead::Exhausted;
                None
            }
            Lookahead::Unfetched => self.advance(),
        };
        token.ok_or_else(|| {
            self.lookahead = Lookahead::Exhausted;
            TokenError::Exhausted {
                pointer: self.pointer,
            }
        })
    }

    /// Removal is not supported.
    pub fn remove(&mut self) -> Result<(), TokenError> {
        Err(TokenError::RemoveUnsupported)
    }

    /// Find the next delimiter occurrence at or after `from`, skipping
    /// escaped ones if requested.
    fn find_delimiter(&self, mut from: usize) -> Option<usize> {
        while let Some(offset) = self.target[from..].find(&self.delimiter) {
            let found = from + offset;
            if !(self.ignore_escaped && is_escaped(&self.target, found)) {
                return Some(found);
            }
            from = found + self.delimiter.len();
        }
        None
    }

    /// Scan one token from the target, ignoring the lookahead.
    fn advance(&mut self) -> Option<String> {
        if self.trailing_empty {
            self.trailing_empty = false;
            return Some(String::new());
        }
        let len = self.target.len();
        if self.pointer >= len {
            return None;
        }
        let found = if self.delimiter.is_empty() {
            None
        } else {
            self.find_delimiter(self.pointer)
        };
        match found {
            None => {
                let token = self.target[self.pointer..].to_string();
                self.pointer = len;
                Some(token)
            }
            Some(i) => {
                let token = self.target[self.pointer..i].to_string();
                self.pointer = i + self.delimiter.len();
                if self.pointer == len {
                    self.trailing_empty = true;
                }
                Some(token)
            }
        }
    }
}

impl Iterator for TokenIter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.next_token().ok()
    }
}

impl std::iter::FusedIterator for TokenIter {}

/// Split `target` on `delimiter`, trimming delimiters from both ends.
pub fn tokenize(target: &str, delimiter: &str) -> TokenIter {
    TokenIter::new(target, delimiter, true, false)
}

/// Split `target` on `delimiter`.
///
/// Without `trim`, leading and trailing delimiters produce empty tokens, so
/// there is one more token than there are delimiters in the target.
pub fn tokenize_with(target: &str, delimiter: &str, trim: bool) -> TokenIter {
    TokenIter::new(target, delimiter, trim, false)
}

/// Like [`tokenize_with`], but escaped delimiters do not split.
pub fn tokenize_unescaped(target: &str, delimiter: &str, trim: bool) -> TokenIter {
    TokenIter::new(target, delimiter, trim, true)
}
