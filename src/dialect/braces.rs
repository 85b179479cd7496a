//! Curly-bracket disambiguation for the Java dialect.
//!
//! Every `{` in a Perl-style pattern is one of:
//!
//! 1. the start of a repetition qualifier such as `{2,4}`,
//! 2. the start of a `\p{...}` / `\P{...}` character class,
//! 3. a literal, which Java requires to be escaped.
//!
//! Any `}` that is not closing case 1 or 2 is escaped as well.

use std::sync::LazyLock;

use log::{debug, trace};
use regex::Regex;

use crate::escape::{CLOSE, ESCAPE, OPEN, escape_unescaped, is_escaped};

/// `min[,max]` (also `min,`), the body of a qualifier.
static QUALIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+,?[0-9]*$").expect("qualifier pattern is valid")
});

/// What an unescaped `{` turned out to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brace {
    Qualifier,
    CharClass,
    Literal,
}

/// Classify the `{` at `open`, whose matching candidate `}` is at `close`.
pub fn classify(pattern: &str, open: usize, close: usize) -> Brace {
    if QUALIFIER.is_match(&pattern[open + 1..close]) {
        Brace::Qualifier
    } else if has_class_prefix(pattern, open) {
        Brace::CharClass
    } else {
        Brace::Literal
    }
}

/// True if `{` at `open` is directly preceded by an unescaped `\p` or `\P`.
fn has_class_prefix(pattern: &str, open: usize) -> bool {
    open > 1
        && matches!(&pattern.as_bytes()[open - 2..open], b"\\p" | b"\\P")
        && !is_escaped(pattern, open - 2)
}

/// Escape every curly bracket in `pattern` that is not part of a qualifier or
/// a `\p{...}` class, and is not already escaped.
pub fn escape_literal_braces(pattern: &str) -> String {
    let Some(mut next) = pattern.find(OPEN) else {
        return escape_unescaped(pattern, CLOSE);
    };

    let mut out = String::with_capacity(pattern.len() + 8);
    let mut start = 0;
    loop {
        out.push_str(&escape_unescaped(&pattern[start..next], CLOSE));
        if is_escaped(pattern, next) {
            out.push_str(OPEN);
            start = next + 1;
        } else {
            match pattern[next..].find(CLOSE) {
                None => {
                    trace!("unmatched '{{' at {next}");
                    out.push_str(&escape_unescaped(&pattern[next..], OPEN));
                    start = pattern.len();
                }
                Some(offset) => {
                    let close = next + offset;
                    match classify(pattern, next, close) {
                        Brace::Qualifier | Brace::CharClass => {
                            out.push_str(&pattern[next..=close]);
                            start = close + 1;
                        }
                        Brace::Literal => {
                            debug!(
                                "literal brace at {next} in {pattern:?}: {:?}",
                                &pattern[next..=close]
                            );
                            out.push_str(ESCAPE);
                            out.push_str(OPEN);
                            start = next + 1;
                        }
                    }
                }
            }
        }
        match pattern[start..].find(OPEN) {
            Some(offset) => next = start + offset,
            None => break,
        }
    }
    out.push_str(&escape_unescaped(&pattern[start..], CLOSE));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualifier_grammar() {
        let p = "a{2,4}b{3}c{3,}d{,3}e{x}";
        assert_eq!(classify(p, 1, 5), Brace::Qualifier);
        assert_eq!(classify(p, 7, 9), Brace::Qualifier);
        assert_eq!(classify(p, 11, 14), Brace::Qualifier);
        assert_eq!(classify(p, 16, 19), Brace::Literal);
        assert_eq!(classify(p, 21, 23), Brace::Literal);
    }

    #[test]
    fn class_prefix() {
        assert_eq!(classify("\\p{Alpha}", 2, 8), Brace::CharClass);
        assert_eq!(classify("\\P{Alpha}", 2, 8), Brace::CharClass);
        assert_eq!(classify("\\\\p{Alpha}", 3, 9), Brace::Literal);
        assert_eq!(classify("p{Alpha}", 1, 7), Brace::Literal);
    }

    #[test]
    fn no_braces_escapes_stray_close() {
        assert_eq!(escape_literal_braces("abc"), "abc");
        assert_eq!(escape_literal_braces("a}b"), "a\\}b");
        assert_eq!(escape_literal_braces("a\\}b"), "a\\}b");
    }

    #[test]
    fn keeps_qualifiers() {
        assert_eq!(escape_literal_braces("[0-9]{2,4}"), "[0-9]{2,4}");
        assert_eq!(escape_literal_braces("x{3}y{1,}"), "x{3}y{1,}");
    }

    #[test]
    fn escapes_literal_pairs() {
        assert_eq!(escape_literal_braces("{abc}"), "\\{abc\\}");
        assert_eq!(escape_literal_braces("a{}"), "a\\{\\}");
    }

    #[test]
    fn unmatched_open_is_escaped() {
        assert_eq!(escape_literal_braces("a{b"), "a\\{b");
        assert_eq!(escape_literal_braces("a{b{c"), "a\\{b\\{c");
    }

    #[test]
    fn mixed_literal_and_qualifier() {
        assert_eq!(escape_literal_braces("{x}[0-9]{2,4}}"), "\\{x\\}[0-9]{2,4}\\}");
    }

    #[test]
    fn malformed_span_does_not_pair_wrong_braces() {
        // The first '{' sees "a{2" before the first '}' and is literal; the
        // second '{' is then re-examined on its own and is a qualifier.
        assert_eq!(escape_literal_braces("{a{2}"), "\\{a{2}");
    }

    #[test]
    fn already_escaped_braces_unchanged() {
        assert_eq!(escape_literal_braces("\\{abc\\}"), "\\{abc\\}");
        assert_eq!(escape_literal_braces("\\\\{2}"), "\\\\{2}");
    }

    #[test]
    fn keeps_java_classes() {
        assert_eq!(escape_literal_braces("\\p{Digit}+"), "\\p{Digit}+");
        assert_eq!(escape_literal_braces("[\\P{Alpha}]"), "[\\P{Alpha}]");
    }
}
