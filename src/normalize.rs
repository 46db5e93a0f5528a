//! Normalization of classified candidates into prototype strings.

use regex::Regex;
use std::sync::OnceLock;

/// Literal used when a parameter list normalizes to nothing.
pub const EMPTY_PARAMS: &str = "void";

/// Compiled regex for an identifier-like token.
fn identifier_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z0-9_]+").unwrap())
}

/// Compiled regex for the interesting tokens in a line remainder:
/// a block comment or a body opener.
fn trailing_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/\*.*?\*/|\{").unwrap())
}

/// Compiled regex for a block comment; group 1 holds its inner text.
fn comment_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/\*(.*?)\*/").unwrap())
}

/// Reduce a raw parameter list to bare parameter names.
///
/// `int a, const char *b` becomes `a,b`. A parameter without any identifier
/// (`...`) is kept as written. An empty list becomes `void`.
pub fn normalize_params(raw: &str) -> String {
    let names: Vec<&str> = raw
        .split(',')
        .filter_map(|param| {
            let param = param.trim();
            if param.is_empty() {
                return None;
            }
            let last = identifier_regex()
                .find_iter(param)
                .last()
                .map(|m| m.as_str());
            Some(last.unwrap_or(param))
        })
        .collect();

    if names.is_empty() {
        EMPTY_PARAMS.to_string()
    } else {
        names.join(",")
    }
}

/// Reduce whatever follows the parameter list to its annotation text.
///
/// The remainder stops at the first `{` outside a comment, a terminal `;`
/// is dropped and `/* ... */` markers are removed while their text is kept.
/// A non-empty result is returned with one leading space.
pub fn normalize_trailing(raw: &str) -> String {
    let body_start = trailing_token_regex()
        .find_iter(raw)
        .find(|token| token.as_str() == "{")
        .map_or(raw.len(), |token| token.start());

    // Only a `;` outside any comment terminates the annotation.
    let head = raw[..body_start].trim_end().trim_end_matches(';');
    let text = comment_regex().replace_all(head, "$1");

    let text = text.trim();
    if text.is_empty() {
        String::new()
    } else {
        format!(" {text}")
    }
}

/// Assemble the final prototype line.
pub fn build_prototype(lead: &str, params: &str, trailing: &str) -> String {
    format!("{lead}({params}){trailing};")
}
