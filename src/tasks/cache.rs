//! Bundler cache reset.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::config::PrepConfig;
use crate::log;
use crate::pipeline::{Existence, Task, TaskOutcome, existence};

pub struct ClearCache;

impl Task for ClearCache {
    fn name(&self) -> &'static str {
        "cache"
    }

    fn run(&self, config: &PrepConfig) -> Result<TaskOutcome> {
        log!("cache"; "clearing {}", config.root_relative(&config.cache.dir).display());
        empty_dir(&config.cache.dir)?;
        Ok(TaskOutcome::Done)
    }
}

/// Leave `dir` existing and empty.
pub fn empty_dir(dir: &Path) -> Result<()> {
    match existence(dir) {
        Existence::Absent => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory {}", dir.display()))?;
        }
        Existence::Exists => {
            if !dir.is_dir() {
                bail!("{} exists and is not a directory", dir.display());
            }
            for entry in fs::read_dir(dir)
                .with_context(|| format!("Failed to read directory {}", dir.display()))?
            {
                let path = entry?.path();
                let removed = if path.is_dir() && !path.is_symlink() {
                    fs::remove_dir_all(&path)
                } else {
                    fs::remove_file(&path)
                };
                removed.with_context(|| format!("Failed to remove {}", path.display()))?;
            }
        }
        Existence::Unknown(e) => {
            return Err(e).with_context(|| format!("Failed to check {}", dir.display()));
        }
    }
    Ok(())
}
