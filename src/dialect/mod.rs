//! Translation of Perl-style patterns with POSIX classes into other dialects.
//!
//! | Dialect  | `[:digit:]`  | `[:alpha:]`  | Braces                      |
//! |----------|--------------|--------------|-----------------------------|
//! | Java     | `\p{Digit}`  | `\p{Alpha}`  | literal `{`/`}` escaped      |
//! | .NET     | `\d`         | `\p{L}`      | unchanged; `\_` unescaped    |
//!
//! Both translations are total: malformed brace structure is resolved by
//! escaping, never reported as an error. Glob derivation ([`glob`]) is the
//! one operation here that can fail.

pub mod braces;
pub mod classes;
pub mod glob;

use log::trace;

use crate::escape::safe_unescape;

pub use glob::{GlobError, glob_from_pattern, to_glob};

/// A target regular-expression dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `java.util.regex`.
    Java,
    /// .NET `System.Text.RegularExpressions`, as used by PowerShell.
    DotNet,
}

impl Dialect {
    /// Translate `pattern` into this dialect.
    pub fn translate(self, pattern: &str) -> String {
        let out = match self {
            Dialect::Java => to_java(pattern),
            Dialect::DotNet => to_dotnet(pattern),
        };
        trace!("{self:?}: {pattern:?} -> {out:?}");
        out
    }
}

/// Translate `pattern` into a Java pattern.
///
/// Curly brackets that are not part of a qualifier or a `\p{...}` class are
/// escaped, then POSIX classes become `\p{...}` classes. Applying this to its
/// own output changes nothing.
pub fn to_java(pattern: &str) -> String {
    let escaped = braces::escape_literal_braces(pattern);
    classes::replace_classes(&escaped, &classes::JAVA_CLASSES)
}

/// Translate `pattern` into a .NET pattern.
///
/// POSIX classes become Unicode class escapes, and `\_` becomes `_`: the
/// escape is harmless elsewhere but an error in .NET.
pub fn to_dotnet(pattern: &str) -> String {
    let replaced = classes::replace_classes(pattern, &classes::DOTNET_CLASSES);
    safe_unescape(&replaced, &["_"])
}

#[cfg(test)]
mod tests;
