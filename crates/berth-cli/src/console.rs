//! CLI console utilities

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// CLI console for formatted output
pub struct CliConsole;

impl CliConsole {
    pub const fn new() -> Self {
        Self
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    /// Print `message` in a red box on stderr
    pub fn error_panel(&self, message: &str) {
        let width = message
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
            .max(6);

        eprintln!();
        eprintln!("{}", format!("╭─ Error {}╮", "─".repeat(width - 6)).red());
        for line in message.lines() {
            let pad = width - line.chars().count();
            eprintln!("{} {}{} {}", "│".red(), line, " ".repeat(pad), "│".red());
        }
        eprintln!("{}", format!("╰{}╯", "─".repeat(width + 2)).red());
    }
}

impl Default for CliConsole {
    fn default() -> Self {
        Self::new()
    }
}

/// Spinner shown while a detached command runs
pub struct WaitingSpinner {
    bar: ProgressBar,
}

impl WaitingSpinner {
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.blue} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
