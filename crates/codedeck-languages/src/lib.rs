/// Codedeck Language Catalog
///
/// Static metadata for the languages the editor shell ships with: display
/// names, the identifiers and versions the remote execution sandbox
/// expects, starter source shown when a language is selected, and the
/// per-language snippet library for the snippets panel.
///
/// Everything here is process-wide static configuration, constructed once
/// and never mutated.
pub mod catalog;
pub mod snippets;

pub use catalog::{find_language, supported_languages, LanguageSpec};
pub use snippets::{snippets_for, Snippet};
