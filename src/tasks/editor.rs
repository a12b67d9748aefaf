//! Markdown editor bundle copy.

use std::fs;

use anyhow::{Context, Result, anyhow};

use crate::config::PrepConfig;
use crate::log;
use crate::pipeline::{Task, TaskOutcome, gated};

pub struct CopyEditor;

impl Task for CopyEditor {
    fn name(&self) -> &'static str {
        "editor"
    }

    fn run(&self, config: &PrepConfig) -> Result<TaskOutcome> {
        let editor = &config.editor;
        gated(self.name(), &editor.output, || {
            log!("editor"; "copying editor bundle to {}", config.root_relative(&editor.output).display());

            let file_name = editor
                .source
                .file_name()
                .ok_or_else(|| anyhow!("editor source has no file name: {}", editor.source.display()))?;
            fs::create_dir_all(&editor.output).with_context(|| {
                format!("Failed to create directory {}", editor.output.display())
            })?;

            let dest = editor.output.join(file_name);
            fs::copy(&editor.source, &dest).with_context(|| {
                format!("Failed to copy {} to {}", editor.source.display(), dest.display())
            })?;
            Ok(())
        })
    }
}
