/// File organization: moving files into category directories.
///
/// This module provides the per-run move loop. Files directly inside the
/// target directory are classified by extension, their category folder is
/// created on demand, name collisions are resolved, and each file is
/// relocated. Failures are collected per file so that one bad file never
/// stops the rest of the run.
use crate::category::{Category, CategoryMap};
use crate::collision::next_available_name;
use crate::logger::RunLogger;
use crate::output::ProgressMode;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur while organizing a directory.
#[derive(Debug)]
pub enum OrganizeError {
    /// The target path does not exist.
    InvalidTargetPath { path: PathBuf },
    /// The target directory could not be listed.
    DirectoryReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to create a category directory.
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to move a file to its category directory.
    FileMoveFailed {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
    /// The run log file could not be opened.
    LogSetupFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTargetPath { path } => {
                write!(f, "Invalid path: {}", path.display())
            }
            Self::DirectoryReadFailed { path, source } => {
                write!(f, "Failed to read directory {}: {}", path.display(), source)
            }
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::FileMoveFailed { from, to, source } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    from.display(),
                    to.display(),
                    source
                )
            }
            Self::LogSetupFailed { path, source } => {
                write!(f, "Failed to open log file {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for OrganizeError {}

/// Result type for organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Records a single successful move.
#[derive(Debug, Clone)]
pub struct MovedFile {
    /// Where the file was before the run.
    pub original_path: PathBuf,
    /// Where the file ended up, after collision resolution.
    pub new_path: PathBuf,
    /// The category the file was filed under.
    pub category: Category,
}

/// Per-file outcomes of one organization run.
#[derive(Debug, Default)]
pub struct OrganizeReport {
    /// Files that were moved, in processing order.
    pub moved: Vec<MovedFile>,
    /// Files that could not be moved, with the error for each.
    pub failed: Vec<(PathBuf, OrganizeError)>,
}

impl OrganizeReport {
    /// Number of files successfully moved.
    pub fn processed(&self) -> usize {
        self.moved.len()
    }

    /// Returns true if no file failed.
    pub fn is_complete_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Organizes files by moving them into category subdirectories.
pub struct FileOrganizer;

impl FileOrganizer {
    /// Moves every file directly inside `target` into its category folder.
    ///
    /// Directories are skipped; everything else is treated as a file. Each
    /// file is classified, its category folder created if needed, its name
    /// de-conflicted, and the file relocated. A failure is logged and
    /// recorded in the report, and the loop moves on to the next file.
    ///
    /// Returns an error only for run-level problems: a missing target or an
    /// unlistable directory.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # fn main() -> organizer::organizer::OrganizeResult<()> {
    /// use organizer::category::CategoryMap;
    /// use organizer::logger::{Level, RunLogger};
    /// use organizer::organizer::FileOrganizer;
    /// use organizer::output::ProgressMode;
    /// use std::path::Path;
    ///
    /// let logger = RunLogger::create(Path::new("organizer.log"), Level::Info)?;
    /// let map = CategoryMap::default();
    /// let report =
    ///     FileOrganizer::organize(Path::new("/downloads"), &map, &logger, ProgressMode::Silent)?;
    /// println!("moved {} files", report.processed());
    /// # Ok(())
    /// # }
    /// ```
    pub fn organize(
        target: &Path,
        map: &CategoryMap,
        logger: &RunLogger,
        progress: ProgressMode,
    ) -> OrganizeResult<OrganizeReport> {
        if !target.exists() {
            return Err(OrganizeError::InvalidTargetPath {
                path: target.to_path_buf(),
            });
        }

        let entries = fs::read_dir(target).map_err(|e| OrganizeError::DirectoryReadFailed {
            path: target.to_path_buf(),
            source: e,
        })?;

        // Snapshot the listing first so category directories created below
        // never show up as candidates.
        let mut files: Vec<PathBuf> = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                continue;
            }
            files.push(path);
        }

        let bar = progress.bar(files.len() as u64);
        let mut report = OrganizeReport::default();

        for file_path in files {
            let name = file_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            bar.set_message(name);

            match Self::organize_file(target, &file_path, map, logger) {
                Ok(moved) => {
                    logger.info(&format!(
                        "Moved: {} -> {}",
                        moved.original_path.display(),
                        moved.new_path.display()
                    ));
                    report.moved.push(moved);
                }
                Err(e) => {
                    logger.error(&format!("Error moving {}: {}", file_path.display(), e));
                    report.failed.push((file_path, e));
                }
            }
            bar.inc(1);
        }

        bar.finish_and_clear();
        Ok(report)
    }

    /// Classifies one file and moves it into its category folder under
    /// `target`, resolving name collisions.
    pub fn organize_file(
        target: &Path,
        file_path: &Path,
        map: &CategoryMap,
        logger: &RunLogger,
    ) -> OrganizeResult<MovedFile> {
        let file_name = file_path
            .file_name()
            .ok_or_else(|| OrganizeError::FileMoveFailed {
                from: file_path.to_path_buf(),
                to: target.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "file has no name component",
                ),
            })?;

        // Classification and logging use a lossy rendition; the destination
        // is built from the original name so non-UTF-8 bytes survive.
        let category = map.classify(&file_name.to_string_lossy());
        logger.debug(&format!(
            "Categorized {} as {}",
            file_name.to_string_lossy(),
            category.dir_name()
        ));

        let category_path = target.join(category.dir_name());
        fs::create_dir_all(&category_path).map_err(|e| OrganizeError::DirectoryCreationFailed {
            path: category_path.clone(),
            source: e,
        })?;

        let dest_name = next_available_name(&category_path, file_name);
        let destination = category_path.join(&dest_name);

        Self::relocate(file_path, &destination)?;

        Ok(MovedFile {
            original_path: file_path.to_path_buf(),
            new_path: destination,
            category,
        })
    }

    /// Moves a file, falling back to copy and delete when rename fails.
    ///
    /// Rename cannot cross filesystem boundaries, so a failed rename is
    /// retried as a copy followed by removal of the source.
    fn relocate(from: &Path, to: &Path) -> OrganizeResult<()> {
        if fs::rename(from, to).is_ok() {
            return Ok(());
        }

        if let Err(e) = fs::copy(from, to) {
            return Err(OrganizeError::FileMoveFailed {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                source: e,
            });
        }

        fs::remove_file(from).map_err(|e| OrganizeError::FileMoveFailed {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source: e,
        })
    }
}
