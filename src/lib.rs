//! Escape-aware string tokenizing and regular-expression dialect translation.
//!
//! Patterns are written in a Perl-style dialect with POSIX bracket classes
//! such as `[:digit:]`. They are rewritten for Java or .NET, and simple
//! patterns can be turned back into globs.
//!
//! # Example
//!
//! ```rust
//! use regex_dialect::{Dialect, glob_from_pattern, is_escaped, tokenize_unescaped};
//!
//! // Literal braces are escaped, qualifiers and classes are kept.
//! assert_eq!(
//!     Dialect::Java.translate("{id}[[:digit:]]{2,4}"),
//!     "\\{id\\}[\\p{Digit}]{2,4}"
//! );
//! assert_eq!(Dialect::DotNet.translate("[[:digit:]]+"), "[\\d]+");
//!
//! assert_eq!(glob_from_pattern("^.*\\.log$").unwrap(), "*.log");
//! assert!(glob_from_pattern("^(a|b)$").is_err());
//!
//! assert!(is_escaped("a\\,b", 2));
//! let tokens: Vec<String> = tokenize_unescaped("a\\,b,c", ",", true).collect();
//! assert_eq!(tokens, ["a\\,b", "c"]);
//! ```

pub mod dialect;
pub mod escape;
pub mod text;
pub mod tokenizer;

pub use dialect::{Dialect, GlobError, glob_from_pattern, to_dotnet, to_glob, to_java};
pub use escape::{
    contains_regex, contains_unescaped_regex, escape_regex, escape_unescaped, is_escaped,
    is_regex_char, safe_escape, safe_unescape, unescape_regex,
};
pub use tokenizer::{TokenError, TokenIter, tokenize, tokenize_unescaped, tokenize_with};
