//! Codedeck CLI
//!
//! Terminal driver for the codedeck crates: local suggestions, sandbox
//! execution, the chat assistant, and the language/snippet catalogs. The
//! browser shell consumes the same library surface; this binary exists so
//! everything is usable and scriptable without it.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Codedeck: editor-shell tooling from the terminal.
#[derive(Debug, Parser)]
#[command(name = "codedeck", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print completion suggestions for text before the cursor
    Suggest {
        /// Language identifier, e.g. "javascript"
        #[arg(short, long)]
        language: String,
        /// Read the text from a file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Execute a source file in the remote sandbox
    Run {
        /// Language identifier, e.g. "python"
        #[arg(short, long)]
        language: String,
        /// Source file to execute
        file: PathBuf,
    },
    /// Send one message to the chat assistant
    Chat {
        /// The message to send
        message: String,
    },
    /// List the supported languages
    Languages,
    /// List the snippet library for a language
    Snippets {
        /// Language identifier, e.g. "rust"
        #[arg(short, long)]
        language: String,
    },
}
