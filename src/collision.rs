//! Filename collision resolution for the destination directory.
//!
//! When a file's name is already taken in its category folder, the name is
//! rewritten as `{stem}_copy_{counter}{extension}` with the first free
//! counter, so an incoming `report.pdf` lands next to an existing one as
//! `report_copy_1.pdf`.

use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Returns a file name that is free in `dest_dir`.
///
/// The desired name is returned unchanged when nothing occupies it;
/// otherwise `_copy_1`, `_copy_2`, … is appended to the stem until a free
/// name is found. The extension keeps its place after the suffix, and names
/// without an extension get the bare suffix (`README_copy_1`). The name is
/// handled as an `OsStr` throughout, so bytes that are not valid UTF-8 pass
/// through unaltered; only the `_copy_N` infix is ASCII.
///
/// # Examples
///
/// ```no_run
/// use organizer::collision::next_available_name;
/// use std::ffi::OsStr;
/// use std::path::Path;
///
/// let name = next_available_name(Path::new("/downloads/Documents"), OsStr::new("report.pdf"));
/// assert_eq!(name, "report.pdf");
/// ```
pub fn next_available_name(dest_dir: &Path, desired: &OsStr) -> OsString {
    if !dest_dir.join(desired).exists() {
        return desired.to_os_string();
    }

    let (stem, extension) = split_name(desired);
    let mut counter: u64 = 1;
    loop {
        let mut candidate = stem.to_os_string();
        candidate.push(format!("_copy_{}", counter));
        candidate.push(&extension);
        if !dest_dir.join(&candidate).exists() {
            return candidate;
        }
        counter += 1;
    }
}

/// Splits a file name into its stem and dotted extension.
///
/// Only the final extension is split off; a leading dot belongs to the stem,
/// so `.bashrc` has no extension.
fn split_name(name: &OsStr) -> (&OsStr, OsString) {
    let path = Path::new(name);
    match (path.file_stem(), path.extension()) {
        (Some(stem), Some(ext)) => {
            let mut dotted = OsString::from(".");
            dotted.push(ext);
            (stem, dotted)
        }
        _ => (name, OsString::new()),
    }
}
