/// Integration tests for the suggestion engine's user-visible behavior
use codedeck_completion::{SuggestionEngine, MAX_SUGGESTIONS};

#[test]
fn javascript_function_prefix_suggests_the_function_template() {
    let engine = SuggestionEngine::new();
    let suggestions = engine.suggest("fu", "javascript");
    assert!(suggestions.contains(&"function name(params) {\n  \n}".to_string()));
}

#[test]
fn javascript_con_prefix_suggests_the_const_template() {
    let engine = SuggestionEngine::new();
    let suggestions = engine.suggest("con", "javascript");
    assert!(suggestions.contains(&"const name = value;".to_string()));
}

#[test]
fn python_d_prefix_suggests_the_def_template() {
    let engine = SuggestionEngine::new();
    let suggestions = engine.suggest("d", "python");
    assert!(suggestions.contains(&"def function_name(params):\n    pass".to_string()));
}

#[test]
fn document_identifiers_complete_the_trailing_fragment() {
    let engine = SuggestionEngine::new();
    let text = "const myVariable = 42;\nconsole.log(myVariable);\nmyV";
    let suggestions = engine.suggest(text, "javascript");
    assert!(suggestions.contains(&"myVariable".to_string()));
}

#[test]
fn empty_input_returns_an_empty_list() {
    let engine = SuggestionEngine::new();
    assert_eq!(engine.suggest("", "python"), Vec::<String>::new());
}

#[test]
fn constructor_rule_fires_inside_a_class_body() {
    let engine = SuggestionEngine::new();
    let suggestions = engine.suggest("class Foo {\n  con", "javascript");
    assert!(suggestions.contains(&"constructor(params) {\n  \n}".to_string()));
    // The generic const template still fires on the same prefix; the
    // class-aware rule adds the constructor on top of it.
    assert!(suggestions.contains(&"const name = value;".to_string()));
}

#[test]
fn constructor_rule_stays_silent_outside_a_class_body() {
    let engine = SuggestionEngine::new();
    let suggestions = engine.suggest("con", "javascript");
    assert!(!suggestions.contains(&"constructor(params) {\n  \n}".to_string()));
}

#[test]
fn typescript_shares_javascript_suggestions() {
    let engine = SuggestionEngine::new();
    assert_eq!(
        engine.suggest("inter", "typescript"),
        engine.suggest("inter", "javascript"),
    );
    assert!(engine
        .suggest("fu", "typescript")
        .contains(&"function name(params) {\n  \n}".to_string()));
}

#[test]
fn member_trigger_emits_only_the_call_remainder() {
    let engine = SuggestionEngine::new();
    let suggestions = engine.suggest("console.l", "javascript");
    // The qualifier is already typed, so the suggestion is just the call.
    assert!(suggestions.contains(&"log();".to_string()));
}

#[test]
fn only_the_last_line_is_matched_against_rules() {
    let engine = SuggestionEngine::new();
    // "fu" on an earlier line must not trigger anything from a fresh line.
    let suggestions = engine.suggest("fu\nx = 1", "javascript");
    assert!(!suggestions.contains(&"function name(params) {\n  \n}".to_string()));
}

#[test]
fn rust_fn_prefix_suggests_the_main_template() {
    let engine = SuggestionEngine::new();
    let suggestions = engine.suggest("f", "rust");
    assert!(suggestions.contains(&"fn main() {\n    \n}".to_string()));
}

#[test]
fn java_println_member_trigger() {
    let engine = SuggestionEngine::new();
    let suggestions = engine.suggest("System.out.pri", "java");
    assert!(suggestions.contains(&"println(\"\");".to_string()));
}

#[test]
fn algorithm_snippets_trigger_on_the_full_name() {
    let engine = SuggestionEngine::new();
    let suggestions = engine.suggest("quickSort", "javascript");
    assert_eq!(suggestions.len(), 1);
    assert!(suggestions[0].starts_with("function quickSort(arr)"));
}

#[test]
fn suggestions_never_exceed_the_cap() {
    let engine = SuggestionEngine::new();
    let text = "alpha1 alpha2 alpha3 alpha4 alpha5 alpha6 alpha7 alpha8 alpha9 alpha10 alpha11\nalpha";
    let suggestions = engine.suggest(text, "javascript");
    assert!(suggestions.len() <= MAX_SUGGESTIONS);
}
