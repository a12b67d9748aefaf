//! Pre-init script concatenation.

use std::fs;

use anyhow::{Context, Result};

use crate::asset::list_files;
use crate::config::PrepConfig;
use crate::log;
use crate::pipeline::{Task, TaskOutcome};

use super::highlight::STATEMENT_SEPARATOR;

pub struct BundlePreinit;

impl Task for BundlePreinit {
    fn name(&self) -> &'static str {
        "preinit"
    }

    fn run(&self, config: &PrepConfig) -> Result<TaskOutcome> {
        let preinit = &config.preinit;
        log!("preinit"; "bundling pre-init scripts into {}", config.root_relative(&preinit.output).display());

        let mut bundle = String::new();
        for path in list_files(&preinit.source)? {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            bundle.push_str(&content);
            bundle.push_str(STATEMENT_SEPARATOR);
        }

        if let Some(parent) = preinit.output.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(&preinit.output, bundle)
            .with_context(|| format!("Failed to write {}", preinit.output.display()))?;

        Ok(TaskOutcome::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_concatenates_in_name_order() {
        let dir = TempDir::new().unwrap();
        let config = PrepConfig::with_root(dir.path());
        let src = &config.preinit.source;
        fs::create_dir_all(src).unwrap();
        fs::write(src.join("20-theme.js"), "applyTheme()").unwrap();
        fs::write(src.join("10-polyfill.js"), "polyfill()").unwrap();

        assert_eq!(BundlePreinit.run(&config).unwrap(), TaskOutcome::Done);
        let bundle = fs::read_to_string(&config.preinit.output).unwrap();
        assert_eq!(bundle, "polyfill();\napplyTheme();\n");
    }

    #[test]
    fn test_empty_source_writes_empty_bundle() {
        let dir = TempDir::new().unwrap();
        let config = PrepConfig::with_root(dir.path());
        fs::create_dir_all(&config.preinit.source).unwrap();

        BundlePreinit.run(&config).unwrap();
        assert_eq!(fs::read_to_string(&config.preinit.output).unwrap(), "");
    }

    #[test]
    fn test_missing_source_fails() {
        let dir = TempDir::new().unwrap();
        let config = PrepConfig::with_root(dir.path());
        assert!(BundlePreinit.run(&config).is_err());
    }
}
