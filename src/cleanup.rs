//! Removal of empty directories after a run.

use crate::logger::RunLogger;
use crate::organizer::{OrganizeError, OrganizeResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Removes the empty directories directly inside `target`.
///
/// A single, non-recursive pass: only direct children are considered, and
/// a directory that becomes empty because a sibling was removed stays until
/// a later run. Removal failures are logged as warnings and the pass
/// continues; only an unlistable target is an error. Returns the removed
/// paths in listing order.
pub fn remove_empty_dirs(target: &Path, logger: &RunLogger) -> OrganizeResult<Vec<PathBuf>> {
    let entries = fs::read_dir(target).map_err(|e| OrganizeError::DirectoryReadFailed {
        path: target.to_path_buf(),
        source: e,
    })?;

    let dirs: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();

    let mut removed = Vec::new();
    for path in dirs {
        match dir_is_empty(&path) {
            Ok(false) => {}
            Ok(true) => match fs::remove_dir(&path) {
                Ok(()) => {
                    logger.info(&format!("Removed empty folder: {}", path.display()));
                    removed.push(path);
                }
                Err(e) => {
                    logger.warning(&format!("Could not remove folder {}: {}", path.display(), e));
                }
            },
            Err(e) => {
                logger.warning(&format!("Could not remove folder {}: {}", path.display(), e));
            }
        }
    }

    Ok(removed)
}

fn dir_is_empty(path: &Path) -> std::io::Result<bool> {
    Ok(fs::read_dir(path)?.next().is_none())
}
