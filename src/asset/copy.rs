//! Directory listing and filtered recursive copy.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::CopyFilter;

/// List regular files directly inside `dir`, sorted by file name.
///
/// A missing or unreadable directory is an error.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?
    {
        let path = entry
            .with_context(|| format!("Invalid directory entry in {}", dir.display()))?
            .path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Copy `source` to `dest`, keeping only paths accepted by `filter`.
///
/// The root itself is evaluated first. A rejected directory is not
/// descended into. `on_visit` sees every evaluated path with its outcome.
/// Returns the number of files copied.
pub fn copy_filtered<F>(
    source: &Path,
    dest: &Path,
    filter: &CopyFilter,
    mut on_visit: F,
) -> Result<usize>
where
    F: FnMut(&str, bool),
{
    let mut count = 0;
    copy_recursive(source, dest, filter, &mut on_visit, &mut count)?;
    Ok(count)
}

fn copy_recursive<F>(
    src: &Path,
    dest: &Path,
    filter: &CopyFilter,
    on_visit: &mut F,
    count: &mut usize,
) -> Result<()>
where
    F: FnMut(&str, bool),
{
    let normalized = CopyFilter::normalize(src);
    let allowed = filter.allows(&normalized);
    on_visit(&normalized, allowed);
    if !allowed {
        return Ok(());
    }

    let meta = fs::metadata(src).with_context(|| format!("Failed to stat {}", src.display()))?;
    if meta.is_dir() {
        fs::create_dir_all(dest)
            .with_context(|| format!("Failed to create directory {}", dest.display()))?;

        let mut entries = fs::read_dir(src)
            .with_context(|| format!("Failed to read directory {}", src.display()))?
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Invalid directory entry in {}", src.display()))?;
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let name = entry.file_name();
            copy_recursive(&src.join(&name), &dest.join(&name), filter, on_visit, count)?;
        }
    } else {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::copy(src, dest).with_context(|| {
            format!("Failed to copy {} to {}", src.display(), dest.display())
        })?;
        *count += 1;
    }

    Ok(())
}
