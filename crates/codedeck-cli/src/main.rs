// Codedeck CLI entry point

use clap::Parser;
use codedeck_cli::{commands, output, Cli, Command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Suggest { language, file } => commands::suggest(&language, file),
        Command::Run { language, file } => commands::run(&language, &file).await,
        Command::Chat { message } => commands::chat(&message).await,
        Command::Languages => commands::languages(),
        Command::Snippets { language } => commands::snippets(&language),
    };

    if let Err(err) = result {
        output::print_error(&format!("{err:#}"));
        std::process::exit(1);
    }
}
