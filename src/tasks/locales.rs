//! Client locale bundling against the base locale.

use std::fs;

use anyhow::{Context, Result};

use crate::config::PrepConfig;
use crate::locale::{discover, load_map, merged_or_base};
use crate::log;
use crate::pipeline::{Task, TaskOutcome};

pub struct BundleLocales;

impl Task for BundleLocales {
    fn name(&self) -> &'static str {
        "locales"
    }

    fn run(&self, config: &PrepConfig) -> Result<TaskOutcome> {
        let locales = &config.locales;
        log!("locales"; "merging client locales into {}", config.root_relative(&locales.output).display());
        fs::create_dir_all(&locales.output)
            .with_context(|| format!("Failed to create directory {}", locales.output.display()))?;

        let base = load_map(&locales.base).context("Failed to load base locale")?;

        for entry in discover(&locales.source, &locales.file)? {
            let file_name = format!("{}.json", entry.code);
            log!("locales"; "{}", file_name);

            let (content, merged) = merged_or_base(&base, &entry.file);
            if !merged {
                log!("warning"; "{}: using base locale", entry.code);
            }

            let output = locales.output.join(&file_name);
            let json = serde_json::to_string(&content)?;
            fs::write(&output, json)
                .with_context(|| format!("Failed to write {}", output.display()))?;
        }

        Ok(TaskOutcome::Done)
    }
}
