//! Small string helpers.

use std::cmp::Ordering;

/// The platform line separator.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// The platform line separator.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Codepoint ordering of strings, in either direction. No locale collation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// A→Z
    #[default]
    Ascending,
    /// Z→A
    Descending,
}

impl SortOrder {
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            SortOrder::Ascending => a.cmp(b),
            SortOrder::Descending => b.cmp(a),
        }
    }
}

/// Sort `items` in place.
pub fn sort<S: AsRef<str>>(items: &mut [S], order: SortOrder) {
    items.sort_by(|a, b| order.compare(a.as_ref(), b.as_ref()));
}

/// Strip one pair of surrounding double quotes, if present.
pub fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(s)
}

/// Number of times `ch` occurs in `target`.
pub fn count_occurrences(target: &str, ch: char) -> usize {
    target.chars().filter(|&c| c == ch).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_both_ways() {
        let mut items = vec!["b", "C", "a", "B"];
        sort(&mut items, SortOrder::Ascending);
        assert_eq!(items, ["B", "C", "a", "b"]);
        sort(&mut items, SortOrder::Descending);
        assert_eq!(items, ["b", "a", "C", "B"]);
    }

    #[test]
    fn sorts_owned_strings() {
        let mut items = vec!["zeta".to_string(), "alpha".to_string()];
        sort(&mut items, SortOrder::default());
        assert_eq!(items, ["alpha", "zeta"]);
    }

    #[test]
    fn unquote_strips_one_pair() {
        assert_eq!(unquote("\"abc\""), "abc");
        assert_eq!(unquote("\"\"abc\"\""), "\"abc\"");
        assert_eq!(unquote("\"abc"), "\"abc");
        assert_eq!(unquote("abc"), "abc");
        assert_eq!(unquote("\"\""), "");
    }

    #[test]
    fn lone_quote_is_not_a_pair() {
        assert_eq!(unquote("\""), "\"");
    }

    #[test]
    fn counts_chars() {
        assert_eq!(count_occurrences("a,b,,c", ','), 3);
        assert_eq!(count_occurrences("", ','), 0);
        assert_eq!(count_occurrences("ééa", 'é'), 2);
    }
}
