use super::*;

const SAMPLES: &[&str] = &[
    "",
    "plain text",
    "[0-9]{2,4}",
    "^[[:digit:]]{3}-[[:alpha:]]+$",
    "{literal}",
    "a{b",
    "}{",
    "{x}[0-9]{2,4}}",
    "[[:upper:][:lower:]]{1,}\\{escaped\\}",
    "\\p{Alpha}{2}",
    "{[:space:]}",
    "\\\\{3}",
    "\\[:digit:]",
    "a\\[:alpha:]{2}",
];

#[test]
fn test_java_keeps_qualifier_and_escapes_strays() {
    assert_eq!(to_java("[0-9]{2,4}"), "[0-9]{2,4}");
    assert_eq!(to_java("}[0-9]{2,4}{"), "\\}[0-9]{2,4}\\{");
    assert_eq!(to_java("{a}[0-9]{2,4}"), "\\{a\\}[0-9]{2,4}");
}

#[test]
fn test_java_digit_class() {
    assert_eq!(to_java("[[:digit:]]+"), "[\\p{Digit}]+");
}

#[test]
fn test_java_all_classes() {
    assert_eq!(
        to_java("[[:alnum:][:blank:][:xdigit:][:punct:][:print:][:space:]]"),
        "[\\p{Alnum}\\p{Blank}\\p{XDigit}\\p{Punct}\\p{Print}\\p{Space}]"
    );
    assert_eq!(
        to_java("[[:graph:][:upper:][:lower:][:cntrl:]]"),
        "[\\p{Graph}\\p{Upper}\\p{Lower}\\p{Cntrl}]"
    );
}

#[test]
fn test_java_class_with_qualifier() {
    assert_eq!(
        to_java("^[[:digit:]]{3}-[[:alpha:]]+$"),
        "^[\\p{Digit}]{3}-[\\p{Alpha}]+$"
    );
}

#[test]
fn test_java_class_inside_literal_braces() {
    assert_eq!(to_java("{[:space:]}"), "\\{\\p{Space}\\}");
}

#[test]
fn test_java_is_idempotent() {
    for sample in SAMPLES {
        let once = to_java(sample);
        assert_eq!(to_java(&once), once, "second pass changed {sample:?}");
    }
}

#[test]
fn test_java_every_brace_is_accounted_for() {
    // After translation, every unescaped '{' opens a qualifier or a class.
    for sample in SAMPLES {
        let out = to_java(sample);
        for (pos, _) in out.match_indices('{') {
            if crate::escape::is_escaped(&out, pos) {
                continue;
            }
            let close = pos + out[pos..].find('}').expect("brace is closed");
            assert_ne!(
                braces::classify(&out, pos, close),
                braces::Brace::Literal,
                "unescaped literal brace in {out:?}"
            );
        }
    }
}

#[test]
fn test_java_escaped_bracket_is_not_a_class() {
    assert_eq!(to_java("\\[:digit:]"), "\\[:digit:]");
    assert_eq!(to_java("a\\[:alpha:]{2}"), "a\\[:alpha:]{2}");
}

#[test]
fn test_dotnet_digit_class() {
    assert_eq!(to_dotnet("[[:digit:]]+"), "[\\d]+");
}

#[test]
fn test_dotnet_all_classes() {
    assert_eq!(
        to_dotnet("[[:alnum:][:alpha:][:blank:][:xdigit:][:punct:][:print:]]"),
        "[\\p{L}\\p{Nd}\\p{L}\\p{Zs}\\ta-fA-F0-9\\p{P}\\P{C}]"
    );
    assert_eq!(
        to_dotnet("[[:space:][:graph:][:upper:][:lower:][:cntrl:]]"),
        "[\\s\\P{Z}\\P{C}\\p{Lu}\\p{Ll}\\p{Cc}]"
    );
}

#[test]
fn test_dotnet_unescapes_underscore() {
    assert_eq!(to_dotnet("foo\\_bar"), "foo_bar");
    assert_eq!(to_dotnet("foo\\\\_bar"), "foo\\\\_bar");
}

#[test]
fn test_dotnet_leaves_braces_alone() {
    assert_eq!(to_dotnet("{literal}[0-9]{2,4}"), "{literal}[0-9]{2,4}");
}

#[test]
fn test_dialect_dispatch() {
    let pattern = "[[:digit:]]{2}";
    assert_eq!(Dialect::Java.translate(pattern), "[\\p{Digit}]{2}");
    assert_eq!(Dialect::DotNet.translate(pattern), "[\\d]{2}");
}

#[test]
fn test_glob_reexport() {
    assert_eq!(glob_from_pattern("^abc$").as_deref(), Ok("abc"));
    assert_eq!(glob_from_pattern("^a|b$").unwrap_err().to_string(), "contains regex: a|b");
}
