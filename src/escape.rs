//! Escape-state queries and delimiter escaping.
//!
//! All positions are **byte** offsets. The escape character and every
//! metacharacter are ASCII, so any offset returned by `str::find` for one of
//! them is a valid char boundary.

use log::trace;

/// The escape character, as a string.
pub const ESCAPE: &str = "\\";

/// Open curly bracket.
pub const OPEN: &str = "{";

/// Close curly bracket.
pub const CLOSE: &str = "}";

/// Regular-expression metacharacters. The escape character comes first.
pub const REGEX_CHARS: [char; 14] = [
    '\\', '^', '.', '$', '|', '(', ')', '[', ']', '{', '}', '*', '+', '?',
];

/// [`REGEX_CHARS`] as delimiter strings, in the same order.
pub const REGEX_STRS: [&str; 14] = [
    ESCAPE, "^", ".", "$", "|", "(", ")", "[", "]", OPEN, CLOSE, "*", "+", "?",
];

/// Is the character at `pos` preceded by an odd number of escape characters?
///
/// Only the run of escapes immediately before `pos` is counted, so this is
/// linear in the length of that run. Position 0 is never escaped.
pub fn is_escaped(s: &str, pos: usize) -> bool {
    let bytes = s.as_bytes();
    let end = pos.min(bytes.len());
    let escapes = bytes[..end]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count();
    escapes % 2 == 1
}

/// Escape every occurrence of `delim` in `s` that is not already escaped.
///
/// Occurrences that are already escaped are copied unchanged.
pub fn escape_unescaped(s: &str, delim: &str) -> String {
    if delim.is_empty() {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut last = 0;
    while let Some(offset) = s[last..].find(delim) {
        let next = last + offset;
        out.push_str(&s[last..next]);
        if !is_escaped(s, next) {
            out.push_str(ESCAPE);
        }
        out.push_str(delim);
        last = next + delim.len();
    }
    out.push_str(&s[last..]);
    out
}

/// Where the escape character goes when it is one of the delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EscapePass {
    First,
    Last,
}

/// Reorder `delims` so the escape character (if present) runs first or last.
///
/// The relative order of the other delimiters is preserved. A repeated escape
/// character is processed once.
fn order_delims<'a>(delims: &[&'a str], pass: EscapePass) -> Vec<&'a str> {
    let has_escape = delims.contains(&ESCAPE);
    let mut ordered: Vec<&str> = delims.iter().copied().filter(|d| *d != ESCAPE).collect();
    if has_escape {
        match pass {
            EscapePass::First => ordered.insert(0, ESCAPE),
            EscapePass::Last => ordered.push(ESCAPE),
        }
    }
    ordered
}

/// Escape each delimiter in `s`, one pass per delimiter.
///
/// When the escape character is one of `delims` it is always processed first,
/// doubling every escape already present, so escapes added for the other
/// delimiters are never themselves escaped.
pub fn safe_escape(s: &str, delims: &[&str]) -> String {
    let mut s = s.to_string();
    for delim in order_delims(delims, EscapePass::First) {
        s = if delim == ESCAPE {
            s.replace(ESCAPE, "\\\\")
        } else {
            escape_unescaped(&s, delim)
        };
    }
    s
}

/// Undo [`safe_escape`].
///
/// When the escape character is one of `delims` it is always processed last.
/// For each `\` + delimiter found, an occurrence that is itself escaped is
/// kept as is; otherwise the escape is dropped.
pub fn safe_unescape(s: &str, delims: &[&str]) -> String {
    let mut s = s.to_string();
    for delim in order_delims(delims, EscapePass::Last) {
        if delim.is_empty() {
            continue;
        }
        let escaped = format!("{ESCAPE}{delim}");
        let mut out = String::with_capacity(s.len());
        let mut last = 0;
        while let Some(offset) = s[last..].find(&escaped) {
            let ptr = last + offset;
            out.push_str(&s[last..ptr]);
            if is_escaped(&s, ptr) {
                out.push_str(&escaped);
            } else {
                out.push_str(delim);
            }
            last = ptr + escaped.len();
        }
        out.push_str(&s[last..]);
        s = out;
    }
    s
}

/// Escape every regular-expression metacharacter in `s`.
///
/// Unlike wrapping in `\Q...\E`, the result is readable by any dialect.
pub fn escape_regex(s: &str) -> String {
    safe_escape(s, &REGEX_STRS)
}

/// Undo [`escape_regex`].
pub fn unescape_regex(s: &str) -> String {
    safe_unescape(s, &REGEX_STRS)
}

/// True if `c` is a regular-expression metacharacter.
pub fn is_regex_char(c: char) -> bool {
    REGEX_CHARS.contains(&c)
}

/// True if `s` contains any metacharacter, escaped or not.
pub fn contains_regex(s: &str) -> bool {
    s.chars().any(is_regex_char)
}

/// True if `s` contains a metacharacter (other than the escape character)
/// that is not escaped.
pub fn contains_unescaped_regex(s: &str) -> bool {
    let found = s
        .match_indices(|c: char| c != '\\' && is_regex_char(c))
        .find(|&(pos, _)| !is_escaped(s, pos));
    if let Some((pos, ch)) = found {
        trace!("unescaped metacharacter {ch:?} at {pos} in {s:?}");
        return true;
    }
    false
}
