/// Codedeck Suggestion Engine
///
/// A local, rule-based code completion engine. No parser, no network, no
/// shared mutable state: suggestions come from per-language trigger-rule
/// tables plus word completion over identifiers already present in the
/// document.
///
/// # Architecture
///
/// The engine runs a fixed pipeline on every query:
///
/// 1. **Line isolation**: only the trimmed last line before the cursor is
///    matched against trigger rules, which bounds matching cost to a single
///    line and avoids cross-line false triggers.
/// 2. **Rule matching**: every rule for the requested language is evaluated
///    in table order; each firing rule appends its template suggestions.
/// 3. **Word completion**: identifier-like tokens from the whole document
///    before the cursor are offered as prefix completions of the word being
///    typed.
/// 4. **Merge**: exact-duplicate suggestions are removed (first occurrence
///    wins) and the list is capped at [`engine::MAX_SUGGESTIONS`].
///
/// # Core Components
///
/// ## SuggestionEngine
/// The sole public entry point. [`SuggestionEngine::suggest`] is synchronous,
/// infallible and pure: identical inputs always produce identical output.
///
/// ## TriggerRule
/// An immutable (pattern, expansion) record. Rule tables are process-wide
/// statics built once at startup; see the `rules` module.
///
/// ## CursorContext
/// Read-only view of the text preceding the cursor, used by class-aware
/// rules to pick between free-function and class-method templates.
///
/// # Example
///
/// ```
/// use codedeck_completion::SuggestionEngine;
///
/// let engine = SuggestionEngine::new();
/// let suggestions = engine.suggest("fu", "javascript");
/// assert!(suggestions.contains(&"function name(params) {\n  \n}".to_string()));
/// ```
pub mod context;
pub mod engine;
pub mod rules;
pub mod words;

pub use context::CursorContext;
pub use engine::{SuggestionEngine, MAX_SUGGESTIONS};
pub use rules::{rules_for, Expansion, TriggerRule};
