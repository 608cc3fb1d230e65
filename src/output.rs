//! Console output styling and progress display.
//!
//! Provides a centralized interface for CLI output, and the progress
//! capability that is selected once at startup depending on whether a
//! terminal is attached.

use colored::*;
use dialoguer::console::Term;
use indicatif::{ProgressBar, ProgressStyle};

/// Prints CLI messages with consistent styling.
///
/// - Success messages (green with ✓)
/// - Error messages (red with ✗)
/// - Info messages (cyan)
/// - Plain messages without styling
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use organizer::output::OutputFormatter;
    /// OutputFormatter::success("Done! Processed 3 files. Removed 1 empty folders.");
    /// ```
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints an info message in cyan.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use organizer::output::OutputFormatter;
    /// OutputFormatter::info("Organize files in: /home/user/Downloads");
    /// ```
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a regular message without styling.
    pub fn plain(message: &str) {
        println!("{}", message);
    }
}

/// Whether the run shows a progress bar.
///
/// Selected once at startup; the rest of the code asks the chosen mode for
/// a bar and drives it the same way in either case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    /// A terminal is attached; draw the bar.
    WithProgress,
    /// No terminal; the bar is a no-op.
    Silent,
}

impl ProgressMode {
    /// Probes stderr for a terminal.
    pub fn detect() -> Self {
        if Term::stderr().is_term() {
            ProgressMode::WithProgress
        } else {
            ProgressMode::Silent
        }
    }

    /// Creates a progress bar for `total` items, hidden in silent mode.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use organizer::output::ProgressMode;
    /// let bar = ProgressMode::detect().bar(100);
    /// bar.inc(1);
    /// bar.finish_and_clear();
    /// ```
    pub fn bar(self, total: u64) -> ProgressBar {
        match self {
            ProgressMode::WithProgress => {
                let pb = ProgressBar::new(total);
                pb.set_style(
                    ProgressStyle::default_bar()
                        .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                        .expect("Invalid progress bar template")
                        .progress_chars("█▓░"),
                );
                pb
            }
            ProgressMode::Silent => ProgressBar::hidden(),
        }
    }
}
