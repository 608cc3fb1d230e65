//! organizer - sort a folder's files into category subfolders
//!
//! This library classifies files by extension (Images, Videos, Documents,
//! Audio, Archives, Code, Others), moves them into per-category folders,
//! resolves name collisions with a `_copy_N` suffix, prunes directories
//! left empty, and appends every action to a run log.

pub mod category;
pub mod cleanup;
pub mod cli;
pub mod collision;
pub mod logger;
pub mod organizer;
pub mod output;

pub use category::{Category, CategoryMap};
pub use cleanup::remove_empty_dirs;
pub use collision::next_available_name;
pub use logger::{Level, RunLogger};
pub use organizer::{FileOrganizer, MovedFile, OrganizeError, OrganizeReport, OrganizeResult};
pub use output::{OutputFormatter, ProgressMode};

pub use cli::{Args, RunSummary, run_cli, run_organization};
