//! Convert a regular expression into an equivalent glob, where one exists.
//!
//! Only patterns made of literal text, escaped dots and `.*` can be
//! expressed as a glob. Anything else is rejected; a partial glob is never
//! returned.

use itertools::Itertools;
use log::debug;
use regex::Regex;

use crate::escape::contains_regex;
use crate::tokenizer::tokenize_with;

const ANY: &str = ".*";
const LITERAL_DOT: &str = "\\.";

/// Errors from glob derivation. Every variant means the pattern is not
/// expressible as a glob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobError {
    /// The pattern neither starts with `^` nor with `.*`.
    Unanchored,
    /// A fragment between wildcards still holds regex syntax.
    ContainsRegex(String),
}

impl std::fmt::Display for GlobError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unanchored => write!(f, "Pattern must start with '^' or '.*'"),
            Self::ContainsRegex(frag) => write!(f, "contains regex: {frag}"),
        }
    }
}

impl std::error::Error for GlobError {}

/// Derive a glob from a compiled pattern.
pub fn to_glob(pattern: &Regex) -> Result<String, GlobError> {
    glob_from_pattern(pattern.as_str())
}

/// Derive a glob from pattern text.
///
/// A missing trailing `$` means the match may continue, so a trailing `*` is
/// implied: `^abc` becomes `abc*`.
pub fn glob_from_pattern(pattern: &str) -> Result<String, GlobError> {
    let mut s = if let Some(rest) = pattern.strip_prefix('^') {
        rest.to_string()
    } else if pattern.starts_with(ANY) {
        pattern.to_string()
    } else {
        debug!("not a glob, unanchored: {pattern:?}");
        return Err(GlobError::Unanchored);
    };
    if s.ends_with('$') {
        s.pop();
    } else if !s.ends_with(ANY) {
        s.push_str(ANY);
    }

    let fragments = tokenize_with(&s, ANY, false)
        .map(|outer| literal_fragment(&outer))
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|err| debug!("not a glob, {err}: {pattern:?}"))?;
    Ok(fragments.iter().join("*"))
}

/// Turn the text between two `.*` into glob text.
fn literal_fragment(outer: &str) -> Result<String, GlobError> {
    tokenize_with(outer, LITERAL_DOT, false)
        .map(|inner| {
            if contains_regex(&inner) {
                Err(GlobError::ContainsRegex(inner))
            } else {
                Ok(inner)
            }
        })
        .collect::<Result<Vec<_>, _>>()
        .map(|inner| inner.iter().join("."))
}
