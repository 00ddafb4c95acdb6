use crate::parser::StringEntry;
use crate::refactor::PruneOutcome;
use colored::Colorize;
use std::path::Path;
use std::time::Duration;

/// Console reporter with colored output
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn finding_strings(&self, strings_path: &Path) {
        println!("{}", "- finding all the strings in".blue());
        println!("{}", format!("      -> {}", strings_path.display()).blue());
    }

    pub fn found_strings(&self, count: usize) {
        println!("{}", format!("- found {} strings", count).green());
    }

    pub fn searching(&self) {
        println!("{}", "- searching for unused strings...".blue());
    }

    /// Print each unused name with where it is declared
    pub fn unused(&self, unused: &[String], declared: &[StringEntry]) {
        for name in unused {
            match declared.iter().find(|e| &e.name == name) {
                Some(entry) if !entry.value.is_empty() => println!(
                    "{} {}",
                    name,
                    format!("(line {}: \"{}\")", entry.line, entry.value).dimmed()
                ),
                Some(entry) => println!("{} {}", name, format!("(line {})", entry.line).dimmed()),
                None => println!("{}", name),
            }
        }
    }

    pub fn summary(&self, unused_count: usize, elapsed: Duration) {
        if unused_count == 0 {
            println!("{}", "- no unused strings found!".green());
        } else {
            println!("{}", format!("Not used strings: {}", unused_count).yellow());
        }
        println!(
            "{}",
            format!("- done in {:.3}s", elapsed.as_secs_f64()).purple()
        );
    }

    pub fn pruned(&self, outcome: &PruneOutcome) {
        println!(
            "  {} {} ({} lines removed)",
            "✓".green(),
            outcome.path.display(),
            outcome.removed
        );
    }

    pub fn missing_mirror(&self, path: &Path) {
        eprintln!(
            "{}: {} does not exist, skipping",
            "Warning".yellow(),
            path.display()
        );
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}
