//! Suggestion engine orchestration
//!
//! The engine is the sole public entry point of this crate. It is
//! synchronous, side-effect free and infallible: every edge case (unknown
//! language, empty input, no matches) resolves to an empty or partial list,
//! never an error. Callers own the returned list; nothing is cached between
//! queries, so overlapping calls are safe and stale-result handling stays a
//! caller concern.

use std::collections::HashSet;

use tracing::trace;

use crate::context::CursorContext;
use crate::rules::{rules_for, Expansion};
use crate::words;

/// Hard cap on the number of suggestions returned from a single query.
pub const MAX_SUGGESTIONS: usize = 10;

/// Rule-based suggestion engine over the static per-language tables.
///
/// The engine carries no state of its own; it exists as a type so callers
/// hold a named handle rather than a free function, matching how the rest
/// of the workspace exposes its engines.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuggestionEngine;

impl SuggestionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute ranked completion proposals for the text before the cursor.
    ///
    /// The returned list replaces the in-progress word token at the cursor;
    /// computing that replacement offset is the caller's job. Output is
    /// capped at [`MAX_SUGGESTIONS`], contains no duplicate strings, and is
    /// empty whenever the trimmed current line is empty or nothing matches.
    pub fn suggest(&self, text_before_cursor: &str, language: &str) -> Vec<String> {
        if text_before_cursor.trim().is_empty() {
            return Vec::new();
        }

        let last_line = text_before_cursor.split('\n').next_back().unwrap_or("");
        let trimmed = last_line.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        let context = CursorContext::new(text_before_cursor);
        let mut accumulated: Vec<String> = Vec::new();

        // Rule-based suggestions, in table order. Duplicates are allowed at
        // this stage; the merge below keeps the first occurrence.
        for rule in rules_for(language) {
            if !rule.matches(trimmed) {
                continue;
            }
            let templates = match rule.expansion() {
                Expansion::Always(templates) => *templates,
                Expansion::InsideClassBody(templates) if context.is_inside_class_body() => {
                    *templates
                }
                Expansion::InsideClassBody(_) => &[],
            };
            accumulated.extend(templates.iter().map(|t| (*t).to_string()));
        }

        // Word completion from the document itself, for variable names etc.
        words::extend_with_word_completions(&mut accumulated, text_before_cursor, trimmed);

        let mut seen = HashSet::with_capacity(accumulated.len());
        accumulated.retain(|suggestion| seen.insert(suggestion.clone()));
        accumulated.truncate(MAX_SUGGESTIONS);

        trace!(language, count = accumulated.len(), "computed suggestions");
        accumulated
    }
}
