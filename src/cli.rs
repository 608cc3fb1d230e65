//! Command-line entry point for the organizer.
//!
//! This module handles the interactive flow of a run:
//! - Target directory resolution (argument, prompt, or stdin fallback)
//! - Path validation and user confirmation
//! - Running the mover and the empty-folder cleanup
//! - The end-of-run console summary

use crate::category::CategoryMap;
use crate::cleanup::remove_empty_dirs;
use crate::logger::{LOG_FILE_NAME, Level, RunLogger};
use crate::organizer::{FileOrganizer, OrganizeReport, OrganizeResult};
use crate::output::{OutputFormatter, ProgressMode};
use clap::Parser;
use dialoguer::console::Term;
use dialoguer::{Confirm, Input};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Sort the files of a folder into category subfolders.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Directory to organize. Prompted for when omitted.
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub path: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,

    /// Write the run log to this file instead of ./organizer.log.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

/// How the target directory is asked for when it is not on the command
/// line. Selected once at startup by probing for a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    /// A terminal is attached; use an editable prompt.
    Interactive,
    /// No terminal; read plain lines from stdin.
    NonInteractive,
}

impl PathSource {
    pub fn detect() -> Self {
        if Term::stderr().is_term() {
            PathSource::Interactive
        } else {
            PathSource::NonInteractive
        }
    }
}

/// Aggregate outcome of a run: the move report plus the directories the
/// cleanup pass removed.
#[derive(Debug)]
pub struct RunSummary {
    pub report: OrganizeReport,
    pub removed_dirs: Vec<PathBuf>,
}

/// Runs the full flow: logger setup, path resolution, confirmation,
/// organization, and the console summary.
///
/// # Examples
///
/// ```no_run
/// use organizer::cli::{Args, run_cli};
/// use std::path::PathBuf;
///
/// let args = Args {
///     path: Some(PathBuf::from("/home/user/Downloads")),
///     yes: true,
///     log_file: None,
/// };
/// if let Err(e) = run_cli(args) {
///     eprintln!("Error: {}", e);
/// }
/// ```
pub fn run_cli(args: Args) -> Result<(), String> {
    let log_path = args
        .log_file
        .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME));
    let logger = RunLogger::create(&log_path, Level::Info).map_err(|e| e.to_string())?;
    logger.info("---- New run ----");

    let source = PathSource::detect();

    let target = match resolve_target_path(args.path, source, &logger) {
        Some(path) => path,
        None => {
            logger.error("No folder provided. Exiting.");
            return Ok(());
        }
    };

    if !target.exists() {
        logger.error(&format!("Invalid path: {}", target.display()));
        OutputFormatter::error("Invalid path! Please check again.");
        return Ok(());
    }

    OutputFormatter::info(&format!("Organize files in: {}", target.display()));
    if !(args.yes || confirm_run(source)) {
        logger.info("Operation cancelled by user.");
        OutputFormatter::error("Operation cancelled.");
        return Ok(());
    }

    let progress = ProgressMode::detect();
    let summary = run_organization(&target, &logger, progress).map_err(|e| e.to_string())?;

    println!();
    OutputFormatter::success(&format!(
        "Done! Processed {} files. Removed {} empty folders.",
        summary.report.processed(),
        summary.removed_dirs.len()
    ));
    let log_location = fs::canonicalize(logger.path()).unwrap_or_else(|_| logger.path().into());
    OutputFormatter::plain(&format!("Log saved to: {}", log_location.display()));

    Ok(())
}

/// Moves the target's files into category folders, then prunes empty
/// directories. This is the run body behind [`run_cli`], usable directly
/// when path resolution and confirmation have already happened.
pub fn run_organization(
    target: &Path,
    logger: &RunLogger,
    progress: ProgressMode,
) -> OrganizeResult<RunSummary> {
    logger.info(&format!("Starting organization in: {}", target.display()));

    let map = CategoryMap::default();
    let report = FileOrganizer::organize(target, &map, logger, progress)?;
    let removed_dirs = remove_empty_dirs(target, logger)?;

    logger.info(&format!(
        "Finished. Processed {} files. Removed {} empty folders.",
        report.processed(),
        removed_dirs.len()
    ));

    Ok(RunSummary {
        report,
        removed_dirs,
    })
}

/// Picks the target directory: the argument if given, otherwise a prompt
/// chosen by `source`. Returns `None` when the answer stays empty.
fn resolve_target_path(
    arg: Option<PathBuf>,
    source: PathSource,
    logger: &RunLogger,
) -> Option<PathBuf> {
    if let Some(path) = arg {
        return Some(path);
    }

    let answer = match source {
        PathSource::Interactive => prompt_with_editor(logger),
        PathSource::NonInteractive => prompt_on_stdin("Enter folder path: "),
    };

    let answer = answer.trim();
    if answer.is_empty() {
        None
    } else {
        Some(PathBuf::from(answer))
    }
}

/// Asks for the folder with an editable terminal prompt. An empty answer or
/// a prompt failure falls back to the plain stdin prompt.
fn prompt_with_editor(logger: &RunLogger) -> String {
    let picked = Input::<String>::new()
        .with_prompt("Select folder to organize")
        .allow_empty(true)
        .interact_text();

    match picked {
        Ok(answer) if answer.trim().is_empty() => {
            prompt_on_stdin("No folder selected. Enter folder path manually: ")
        }
        Ok(answer) => answer,
        Err(e) => {
            logger.warning(&format!("Folder picker failed: {}", e));
            prompt_on_stdin("Enter folder path: ")
        }
    }
}

/// Prints a prompt and reads one trimmed line from stdin. A read failure
/// counts as an empty answer.
fn prompt_on_stdin(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

/// Asks for the go-ahead. A prompt that cannot be read counts as declined.
fn confirm_run(source: PathSource) -> bool {
    match source {
        PathSource::Interactive => Confirm::new()
            .with_prompt("Proceed with organizing?")
            .default(false)
            .interact()
            .unwrap_or(false),
        PathSource::NonInteractive => {
            let answer = prompt_on_stdin("Proceed with organizing? (y/n): ");
            is_affirmative(&answer)
        }
    }
}

/// Only a lone `y` (any case, surrounding whitespace ignored) confirms.
fn is_affirmative(answer: &str) -> bool {
    answer.trim().to_lowercase() == "y"
}
