//! Console output helpers

use colored::Colorize;

pub fn print_error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}

pub fn print_heading(text: &str) {
    println!("{}", text.cyan().bold());
}

pub fn print_stream(label: &str, body: &str) {
    if body.is_empty() {
        return;
    }
    println!("{}", label.dimmed());
    println!("{body}");
}
