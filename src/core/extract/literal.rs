//! String-literal decoding.
//!
//! Default values are decoded from the literal's raw source text rather
//! than the parser's cooked value, because the unescaping contract is
//! narrower than TypeScript's: only a fixed set of two-character escapes is
//! recognized, and an unknown escape keeps its backslash verbatim instead
//! of being consumed.

use swc_ecma_ast::Str;

/// The literal's cooked text, used for translation keys.
pub fn text(lit: &Str) -> String {
    match lit.value.as_str() {
        Some(value) => value.to_string(),
        // Lossy surrogate content; fall back to the raw source text.
        None => raw_contents(lit).to_string(),
    }
}

/// The literal's default-value text: raw source contents with the fixed
/// escape set applied.
pub fn decode(lit: &Str) -> String {
    unescape(raw_contents(lit))
}

/// The raw source text of the literal with its surrounding quotes removed.
fn raw_contents(lit: &Str) -> &str {
    let Some(raw) = &lit.raw else {
        return "";
    };
    let raw = raw.as_str();
    if raw.len() >= 2 && (raw.starts_with('\'') || raw.starts_with('"') || raw.starts_with('`')) {
        &raw[1..raw.len() - 1]
    } else {
        raw
    }
}

/// Replace the recognized two-character escapes with their single-character
/// meaning. Any other backslash-prefixed sequence is left as a literal
/// backslash followed by the next character unchanged.
pub fn unescape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('\'') => result.push('\''),
            Some('"') => result.push('"'),
            Some('\\') => result.push('\\'),
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('b') => result.push('\u{0008}'),
            Some('f') => result.push('\u{000C}'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }
    result
}
