//! Subcommand implementations

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use colored::Colorize;

use codedeck_chat::ChatSession;
use codedeck_completion::SuggestionEngine;
use codedeck_execution::PistonClient;
use codedeck_languages::{find_language, snippets_for, supported_languages};

use crate::output;

/// Read text before the cursor from a file, or stdin when no file is given.
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

pub fn suggest(language: &str, file: Option<PathBuf>) -> Result<()> {
    let text = read_input(file.as_deref())?;
    let engine = SuggestionEngine::new();
    let suggestions = engine.suggest(&text, language);

    if suggestions.is_empty() {
        println!("{}", "no suggestions".dimmed());
        return Ok(());
    }
    for (index, suggestion) in suggestions.iter().enumerate() {
        println!("{} {}", format!("{:>2}.", index + 1).dimmed(), suggestion);
    }
    Ok(())
}

pub async fn run(language: &str, file: &Path) -> Result<()> {
    let Some(lang) = find_language(language) else {
        bail!("unknown language {language:?}; try `codedeck languages`");
    };
    let code = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    tracing::debug!(
        language = lang.identifier,
        runtime = lang.runtime_id,
        "submitting code to the sandbox"
    );
    let client = PistonClient::new();
    let result = client
        .execute(&code, lang.runtime_id, lang.runtime_version)
        .await;

    output::print_stream("stdout:", &result.stdout);
    output::print_stream("stderr:", &result.stderr);
    Ok(())
}

pub async fn chat(message: &str) -> Result<()> {
    let mut session = ChatSession::from_env();
    let answer = session.send_message(message).await;
    println!("{}", answer.text);
    Ok(())
}

pub fn languages() -> Result<()> {
    output::print_heading("Supported languages");
    for lang in supported_languages() {
        println!(
            "  {:<12} {:<12} runtime {} {}",
            lang.identifier.bold(),
            lang.name,
            lang.runtime_id,
            lang.runtime_version
        );
    }
    Ok(())
}

pub fn snippets(language: &str) -> Result<()> {
    let available = snippets_for(language);
    if available.is_empty() {
        bail!("no snippets for language {language:?}; try `codedeck languages`");
    }
    for snippet in available {
        output::print_heading(snippet.title);
        println!("{}\n", snippet.code);
    }
    Ok(())
}
