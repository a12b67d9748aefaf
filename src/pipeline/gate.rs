//! Existence gate for tasks whose output directory marks them as built.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use super::TaskOutcome;
use crate::log;

/// Result of probing a path.
#[derive(Debug)]
pub enum Existence {
    Exists,
    Absent,
    /// The check itself failed (permissions, I/O error, ...).
    Unknown(io::Error),
}

/// Check `path` without following the "absent means error" convention.
pub fn existence(path: &Path) -> Existence {
    match path.symlink_metadata() {
        Ok(_) => Existence::Exists,
        Err(e) if e.kind() == io::ErrorKind::NotFound => Existence::Absent,
        Err(e) => Existence::Unknown(e),
    }
}

/// Run `build` only when `dest` does not exist yet.
///
/// An existing `dest` is a skip, whatever its content. A failed check
/// other than "not found" is returned as an error.
pub fn gated<F>(task: &str, dest: &Path, build: F) -> Result<TaskOutcome>
where
    F: FnOnce() -> Result<()>,
{
    match existence(dest) {
        Existence::Exists => {
            log!("skip"; "{}: {} already exists", task, dest.display());
            Ok(TaskOutcome::Skipped)
        }
        Existence::Absent => {
            build()?;
            Ok(TaskOutcome::Done)
        }
        Existence::Unknown(e) => {
            Err(e).with_context(|| format!("Failed to check {}", dest.display()))
        }
    }
}
