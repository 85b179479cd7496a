//! POSIX bracket-expression classes and their dialect equivalents.

use phf::{Map, phf_map};

use crate::escape::is_escaped;

/// `[:name:]` → Java `\p{Name}`.
pub static JAVA_CLASSES: Map<&'static str, &'static str> = phf_map! {
    "digit" => "\\p{Digit}",
    "alnum" => "\\p{Alnum}",
    "alpha" => "\\p{Alpha}",
    "blank" => "\\p{Blank}",
    "xdigit" => "\\p{XDigit}",
    "punct" => "\\p{Punct}",
    "print" => "\\p{Print}",
    "space" => "\\p{Space}",
    "graph" => "\\p{Graph}",
    "upper" => "\\p{Upper}",
    "lower" => "\\p{Lower}",
    "cntrl" => "\\p{Cntrl}",
};

/// `[:name:]` → .NET class escapes, meant to sit inside `[...]`.
pub static DOTNET_CLASSES: Map<&'static str, &'static str> = phf_map! {
    "digit" => "\\d",
    "alnum" => "\\p{L}\\p{Nd}",
    "alpha" => "\\p{L}",
    "blank" => "\\p{Zs}\\t",
    "xdigit" => "a-fA-F0-9",
    "punct" => "\\p{P}",
    "print" => "\\P{C}",
    "space" => "\\s",
    "graph" => "\\P{Z}\\P{C}",
    "upper" => "\\p{Lu}",
    "lower" => "\\p{Ll}",
    "cntrl" => "\\p{Cc}",
};

const CLASS_OPEN: &str = "[:";
const CLASS_CLOSE: &str = ":]";

/// Replace every `[:name:]` whose name is in `table` with its equivalent.
///
/// Unknown names, and classes whose `[` is escaped, are copied through
/// unchanged. No replacement text contains `[:`, so a single left-to-right
/// pass gives the same result as replacing each class name in turn.
pub fn replace_classes(pattern: &str, table: &Map<&'static str, &'static str>) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;
    while let Some(open) = rest.find(CLASS_OPEN) {
        let after = &rest[open + CLASS_OPEN.len()..];
        let escaped = is_escaped(pattern, pattern.len() - rest.len() + open);
        let replacement = after
            .find(CLASS_CLOSE)
            .filter(|_| !escaped)
            .and_then(|close| table.get(&after[..close]).map(|r| (close, *r)));
        match replacement {
            Some((close, text)) => {
                out.push_str(&rest[..open]);
                out.push_str(text);
                rest = &after[close + CLASS_CLOSE.len()..];
            }
            None => {
                // Step past the '[' only; another "[:" may start inside.
                out.push_str(&rest[..=open]);
                rest = &rest[open + 1..];
            }
        }
    }
    out.push_str(rest);
    out
}
