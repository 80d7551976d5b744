/// Property-based tests for the suggestion engine invariants
use std::collections::HashSet;

use codedeck_completion::{words, SuggestionEngine, MAX_SUGGESTIONS};
use proptest::prelude::*;

/// Strategy for editor-shaped text: words, punctuation, newlines.
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_ .({\n]{0,120}"
}

/// Known languages plus identifiers with no rule table.
fn language_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "javascript".to_string(),
        "typescript".to_string(),
        "python".to_string(),
        "java".to_string(),
        "rust".to_string(),
        "cobol".to_string(),
        "".to_string(),
    ])
}

proptest! {
    /// Property: output never exceeds the cap, for any input.
    #[test]
    fn prop_output_is_bounded(text in text_strategy(), language in language_strategy()) {
        let engine = SuggestionEngine::new();
        let suggestions = engine.suggest(&text, &language);
        prop_assert!(suggestions.len() <= MAX_SUGGESTIONS);
    }

    /// Property: output never contains duplicate strings.
    #[test]
    fn prop_output_has_no_duplicates(text in text_strategy(), language in language_strategy()) {
        let engine = SuggestionEngine::new();
        let suggestions = engine.suggest(&text, &language);
        let unique: HashSet<&String> = suggestions.iter().collect();
        prop_assert_eq!(unique.len(), suggestions.len());
    }

    /// Property: the engine is a pure function of its inputs.
    #[test]
    fn prop_suggest_is_idempotent(text in text_strategy(), language in language_strategy()) {
        let engine = SuggestionEngine::new();
        prop_assert_eq!(
            engine.suggest(&text, &language),
            engine.suggest(&text, &language)
        );
    }

    /// Property: a blank trimmed last line yields nothing, regardless of
    /// what was typed on earlier lines.
    #[test]
    fn prop_blank_last_line_yields_nothing(
        text in text_strategy(),
        padding in "[ \t]{0,5}",
        language in language_strategy(),
    ) {
        let engine = SuggestionEngine::new();
        let input = format!("{text}\n{padding}");
        prop_assert!(engine.suggest(&input, &language).is_empty());
    }

    /// Property: with no rule table, every suggestion comes from the
    /// document's own identifiers (word completion is language-independent).
    #[test]
    fn prop_unknown_language_only_completes_document_words(text in text_strategy()) {
        let engine = SuggestionEngine::new();
        let suggestions = engine.suggest(&text, "not-a-language");
        let tokens: HashSet<&str> = words::distinct_tokens(&text).into_iter().collect();
        for suggestion in &suggestions {
            prop_assert!(tokens.contains(suggestion.as_str()));
        }
    }

    /// Property: every suggestion sourced from word completion extends the
    /// trailing fragment of the current line.
    #[test]
    fn prop_word_completions_extend_the_fragment(text in text_strategy()) {
        let engine = SuggestionEngine::new();
        let suggestions = engine.suggest(&text, "not-a-language");
        let last_line = text.split('\n').next_back().unwrap_or("");
        let fragment = words::trailing_fragment(last_line.trim());
        for suggestion in &suggestions {
            let fragment = fragment.unwrap_or("");
            prop_assert!(suggestion.starts_with(fragment));
            prop_assert_ne!(suggestion.as_str(), fragment);
        }
    }
}
