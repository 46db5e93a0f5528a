//! Line classification.
//!
//! A line is a *candidate* when it has the shape of a single-line C function
//! header: an identifier run at column zero (never the `static` keyword),
//! then anything, then the function name directly before `(`, a parameter
//! list up to the first `)`, and whatever remains of the line.
//!
//! The rule is deliberately a heuristic. It does not look for a body, so
//! plain declarations such as `int f(int a);` are candidates too.

use regex::Regex;
use std::sync::OnceLock;

/// Keyword that disqualifies a line when it appears at column zero.
const EXCLUDED_PREFIX: &str = "static";

/// Compiled regex for a single-line function header.
///
/// Groups: 1 = leading fragment up to and including the name, 2 = name,
/// 3 = raw parameter text, 4 = remainder of the line.
fn header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z0-9_]+.*?([A-Za-z0-9_]+))\((.*?)\)(.*?)$").unwrap()
    })
}

/// Result of classifying one source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    NoMatch,
    Candidate {
        /// Return type, qualifiers and name, exactly as written.
        lead: &'a str,
        name: &'a str,
        params: &'a str,
        trailing: &'a str,
    },
}

/// Check whether `line` opens with the `static` keyword, ignoring case.
fn starts_with_excluded(line: &str) -> bool {
    line.get(..EXCLUDED_PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(EXCLUDED_PREFIX))
}

/// Classify a single line (without its line terminator).
pub fn classify_line(line: &str) -> LineClass<'_> {
    if starts_with_excluded(line) {
        return LineClass::NoMatch;
    }

    let Some(caps) = header_regex().captures(line) else {
        return LineClass::NoMatch;
    };

    match (caps.get(1), caps.get(2), caps.get(3), caps.get(4)) {
        (Some(lead), Some(name), Some(params), Some(trailing)) => LineClass::Candidate {
            lead: lead.as_str(),
            name: name.as_str(),
            params: params.as_str(),
            trailing: trailing.as_str(),
        },
        _ => LineClass::NoMatch,
    }
}
