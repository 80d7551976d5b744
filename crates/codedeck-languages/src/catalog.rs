//! Supported-language catalog

use serde::Serialize;

/// Metadata for one language the editor shell supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageSpec {
    /// Identifier used throughout the workspace, e.g. `"javascript"`. Also
    /// the key into the suggestion engine's rule tables.
    pub identifier: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
    /// Identifier the execution sandbox expects.
    pub runtime_id: &'static str,
    /// Runtime version the execution sandbox expects.
    pub runtime_version: &'static str,
    /// Starter source shown when the language is selected.
    pub initial_code: &'static str,
}

static SUPPORTED_LANGUAGES: &[LanguageSpec] = &[
    LanguageSpec {
        identifier: "python",
        name: "Python",
        runtime_id: "python",
        runtime_version: "3.10.0",
        initial_code: "def hello_world():\n    print(\"Hello, World!\")\n\nhello_world()",
    },
    LanguageSpec {
        identifier: "javascript",
        name: "JavaScript",
        runtime_id: "javascript",
        runtime_version: "18.15.0",
        initial_code: "function greet() {\n    console.log(\"Hello, World!\");\n}\ngreet();",
    },
    LanguageSpec {
        identifier: "typescript",
        name: "TypeScript",
        runtime_id: "typescript",
        runtime_version: "5.0.3",
        initial_code: "function greet(name: string): void {\n    console.log(`Hello, ${name}!`);\n}\ngreet(\"World\");",
    },
    LanguageSpec {
        identifier: "java",
        name: "Java",
        runtime_id: "java",
        runtime_version: "15.0.2",
        initial_code: "public class Main {\n    public static void main(String[] args) {\n        System.out.println(\"Hello, World!\");\n    }\n}",
    },
    LanguageSpec {
        identifier: "rust",
        name: "Rust",
        runtime_id: "rust",
        runtime_version: "1.68.2",
        initial_code: "fn main() {\n    println!(\"Hello, World!\");\n}",
    },
];

/// All languages the shell ships with, in menu order.
pub fn supported_languages() -> &'static [LanguageSpec] {
    SUPPORTED_LANGUAGES
}

/// Look up a language by identifier.
pub fn find_language(identifier: &str) -> Option<&'static LanguageSpec> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|lang| lang.identifier == identifier)
}
