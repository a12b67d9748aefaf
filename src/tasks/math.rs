//! Math library subset copy.

use std::fs;

use anyhow::{Context, Result};

use crate::asset::{CopyFilter, copy_filtered};
use crate::config::PrepConfig;
use crate::pipeline::{Task, TaskOutcome, gated};
use crate::{debug, log};

pub struct CopyMath;

impl Task for CopyMath {
    fn name(&self) -> &'static str {
        "math"
    }

    fn run(&self, config: &PrepConfig) -> Result<TaskOutcome> {
        let math = &config.math;
        gated(self.name(), &math.output, || {
            log!("math"; "copying math library to {}", config.root_relative(&math.output).display());
            fs::create_dir_all(&math.output)
                .with_context(|| format!("Failed to create directory {}", math.output.display()))?;

            let filter = CopyFilter::new(&math.filter);
            let count = copy_filtered(&math.source, &math.output, &filter, |path, _| {
                log!("math"; "{}", path);
            })?;
            debug!("math"; "copied {} files", count);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copies_filtered_subset() {
        let dir = TempDir::new().unwrap();
        let config = PrepConfig::with_root(dir.path());
        let src = &config.math.source;
        fs::create_dir_all(src.join("extensions")).unwrap();
        fs::create_dir_all(src.join("test")).unwrap();
        fs::write(src.join("MathJax.js"), "MathJax={};").unwrap();
        fs::write(src.join("extensions/tex2jax.js"), "").unwrap();
        fs::write(src.join("test/index.html"), "").unwrap();

        assert_eq!(CopyMath.run(&config).unwrap(), TaskOutcome::Done);
        let out = &config.math.output;
        assert!(out.join("MathJax.js").exists());
        assert!(out.join("extensions/tex2jax.js").exists());
        assert!(!out.join("test").exists());

        // Second run is a skip even though the source changed.
        fs::write(src.join("extensions/new.js"), "").unwrap();
        assert_eq!(CopyMath.run(&config).unwrap(), TaskOutcome::Skipped);
        assert!(!out.join("extensions/new.js").exists());
    }
}
