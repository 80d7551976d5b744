//! Word completion from the document itself
//!
//! Language-independent coverage for user-defined identifiers that no static
//! rule table can anticipate: every identifier-like token already typed into
//! the document is offered as a completion of the word under the cursor.

use once_cell::sync::Lazy;
use regex::Regex;

/// Identifier-like tokens worth proposing. Anything shorter than three
/// characters is noise. `(?-u)` keeps `\w` ASCII: non-ASCII characters
/// split tokens rather than joining them.
static WORD_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u)\b\w{3,}\b").expect("word-token pattern is valid"));

/// The trailing run of word characters in a line, i.e. the fragment the
/// user is currently typing. ASCII `\w`, matching the token scan above.
static TRAILING_FRAGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u)\b(\w+)$").expect("trailing-fragment pattern is valid"));

/// Longest trailing run of word characters in `line`, if any.
pub fn trailing_fragment(line: &str) -> Option<&str> {
    TRAILING_FRAGMENT
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Distinct word tokens of length >= 3 in `text`, preserving first-seen
/// order.
pub fn distinct_tokens(text: &str) -> Vec<&str> {
    let mut seen = std::collections::HashSet::new();
    let mut tokens = Vec::new();
    for found in WORD_TOKEN.find_iter(text) {
        if seen.insert(found.as_str()) {
            tokens.push(found.as_str());
        }
    }
    tokens
}

/// Append word completions for the trailing fragment of the current line.
///
/// A token is proposed when it extends the fragment and no rule-based
/// suggestion already accumulated starts with it. The shadowing check is a
/// ranking heuristic: it keeps a short identifier from duplicating a longer
/// template that already begins with it, at the cost of occasionally hiding
/// a legitimate identifier. Output order is user-visible; change with care.
pub fn extend_with_word_completions(
    accumulated: &mut Vec<String>,
    text_before_cursor: &str,
    trimmed_last_line: &str,
) {
    let Some(fragment) = trailing_fragment(trimmed_last_line) else {
        return;
    };

    for token in distinct_tokens(text_before_cursor) {
        if token.starts_with(fragment)
            && token != fragment
            && !accumulated.iter().any(|s| s.starts_with(token))
        {
            accumulated.push(token.to_string());
        }
    }
}
