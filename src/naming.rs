//! Identifier sanitizing for generated Swift.
//!
//! Asset and group names come straight from directory names, so they can hold
//! dashes, spaces, leading digits or nothing usable at all. Two transforms turn
//! them into identifier text:
//!
//! - `app_logo` → `appLogo` (enum cases, via [`to_value_identifier`])
//! - `my group` → `My_group` (nested enum types, via [`to_type_identifier`])
//!
//! Value identifiers drop `_` while type identifiers keep it. Both functions
//! are total: empty input gives an empty string, and callers decide what to
//! put in its place.

const VALUE_SEPARATORS: &[char] = &['-', '_', ' '];

/// Words that need backticks to be used as Swift identifiers.
const SWIFT_KEYWORDS: &[&str] = &[
    "Any", "Protocol", "Self", "Type", "as", "associatedtype", "break", "case", "catch",
    "class", "continue", "default", "defer", "deinit", "do", "else", "enum", "extension",
    "fallthrough", "false", "fileprivate", "for", "func", "guard", "if", "import", "in",
    "init", "inout", "internal", "is", "let", "nil", "open", "operator", "private",
    "protocol", "public", "repeat", "rethrows", "return", "self", "static", "struct",
    "subscript", "super", "switch", "throw", "throws", "true", "try", "typealias", "var",
    "where", "while",
];

/// Convert a name into a camelCase enum case identifier.
///
/// Splits on `-`, `_` and space, lowercases the first segment and upper-cases
/// the first character of every later one. A result that does not start with
/// a letter is prefixed with `image` (`123icon` → `image123Icon`).
pub fn to_value_identifier(name: &str) -> String {
    let mut segments = name.split(VALUE_SEPARATORS).filter(|s| !s.is_empty());

    let Some(first) = segments.next() else {
        return String::new();
    };

    let mut result = first.to_lowercase();
    for segment in segments {
        result.push_str(&capitalize(segment));
    }

    match result.chars().next() {
        Some(c) if !c.is_alphabetic() => format!("image{}", capitalize_first_letter(&result)),
        _ => result,
    }
}

/// Convert a name into a PascalCase-ish type identifier.
///
/// Dashes and spaces become `_`, the first character is upper-cased, and a
/// leading digit gets a `Group` prefix.
pub fn to_type_identifier(name: &str) -> String {
    let replaced = name.replace(&['-', ' '][..], "_");
    let capitalized = capitalize(&replaced);

    match capitalized.chars().next() {
        Some(c) if c.is_numeric() => format!("Group{}", capitalized),
        _ => capitalized,
    }
}

/// Wrap Swift reserved words in backticks; other identifiers pass through.
pub fn escape_keyword(ident: &str) -> String {
    if SWIFT_KEYWORDS.contains(&ident) {
        format!("`{}`", ident)
    } else {
        ident.to_string()
    }
}

/// Whether `ident` is usable as a plain Swift identifier.
///
/// A lone `_` is the wildcard pattern, not a name.
pub fn is_valid_identifier(ident: &str) -> bool {
    if ident == "_" {
        return false;
    }
    let mut chars = ident.chars();
    match chars.next() {
        Some(c) if is_identifier_head(c) => {}
        _ => return false,
    }
    chars.all(is_identifier_char)
}

/// Replace every character Swift rejects in an identifier with `_`.
///
/// `star.fill` → `star_fill`, `image!!!` → `image___`. The result can still be
/// empty or a lone `_`; callers check [`is_valid_identifier`] afterwards.
pub fn replace_invalid_characters(ident: &str) -> String {
    ident
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let allowed = if i == 0 {
                is_identifier_head(c)
            } else {
                is_identifier_char(c)
            };
            if allowed {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn is_identifier_head(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Upper-case the first character, leave the rest alone.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-case the first alphabetic character, wherever it sits.
fn capitalize_first_letter(s: &str) -> String {
    match s.char_indices().find(|(_, c)| c.is_alphabetic()) {
        Some((idx, _)) => format!("{}{}", &s[..idx], capitalize(&s[idx..])),
        None => s.to_string(),
    }
}
