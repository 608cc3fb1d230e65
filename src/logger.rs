//! Run logging to an append-only file with a console mirror.
//!
//! There is no global logger. A [`RunLogger`] is constructed once per run
//! and passed by reference to every component, so each log line belongs to
//! an explicit logging context.

use crate::organizer::{OrganizeError, OrganizeResult};
use chrono::Local;
use colored::*;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default log file name, created in the working directory.
pub const LOG_FILE_NAME: &str = "organizer.log";

/// Log severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Fine-grained detail, such as classification decisions.
    Debug,
    /// Normal run progress, such as moves and removals.
    Info,
    /// Recoverable problems the run continues past.
    Warning,
    /// Per-file or run-level failures.
    Error,
}

impl Level {
    /// The level token as it appears in the log file.
    pub fn label(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }

    fn colored_label(self) -> ColoredString {
        match self {
            Level::Debug => "DEBUG".dimmed(),
            Level::Info => "INFO".cyan(),
            Level::Warning => "WARNING".yellow(),
            Level::Error => "ERROR".red(),
        }
    }
}

/// Logging context for a single run.
///
/// Every line is appended to the log file as
/// `YYYY-MM-DD HH:MM:SS,mmm - LEVEL - message`; lines at the console
/// threshold and above are mirrored to stderr with a colored level token.
/// The file receives all levels. Write failures are swallowed so that a
/// broken log never interrupts the run itself.
pub struct RunLogger {
    file: File,
    path: PathBuf,
    console_threshold: Level,
}

impl RunLogger {
    /// Opens the log file in append mode, creating it and its parent
    /// directory when missing.
    pub fn create(path: &Path, console_threshold: Level) -> OrganizeResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| OrganizeError::LogSetupFailed {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| OrganizeError::LogSetupFailed {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
            console_threshold,
        })
    }

    /// The location of the log file as given at construction.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(Level::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    /// Writes one log line at the given level.
    pub fn log(&self, level: Level, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S,%3f");
        let line = format!("{} - {} - {}\n", timestamp, level.label(), message);

        let mut file = &self.file;
        let _ = file.write_all(line.as_bytes());

        if level >= self.console_threshold {
            eprintln!("{} {}", level.colored_label(), message);
        }
    }
}
