//! Cursor context and structural heuristics
//!
//! Class-aware trigger rules need to know whether the cursor sits inside a
//! class body. The check here is deliberately not a parser: it collapses
//! newlines and asks a single regex whether the most recently opened
//! `class ... {` block is still unclosed.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches when the last `class ... {` in the haystack has no closing brace
/// before the end of the string. Evaluated against a newline-collapsed copy
/// of the text before the cursor.
static CLASS_BODY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"class\s.*?\{[^{}]*$").expect("class-body pattern is valid")
});

/// Read-only snapshot of the text preceding the cursor.
///
/// Rules receive this when they fire so they can branch on coarse structural
/// questions without re-deriving anything from the editing buffer.
#[derive(Debug, Clone, Copy)]
pub struct CursorContext<'a> {
    text_before_cursor: &'a str,
}

impl<'a> CursorContext<'a> {
    pub fn new(text_before_cursor: &'a str) -> Self {
        Self { text_before_cursor }
    }

    /// The full text preceding the cursor.
    pub fn text_before_cursor(&self) -> &'a str {
        self.text_before_cursor
    }

    /// Whether the cursor is lexically inside a class body.
    ///
    /// Known limitation: this is a bracket heuristic, not a lexer. Braces
    /// inside strings or comments, and nested anonymous blocks, can
    /// misclassify the position. The failure mode is a less appropriate but
    /// still syntactically valid template, never an error.
    pub fn is_inside_class_body(&self) -> bool {
        CLASS_BODY.is_match(&self.text_before_cursor.replace('\n', " "))
    }
}
