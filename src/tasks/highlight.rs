//! Highlighter build: one minified core bundle plus one minified file per mode.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;

use crate::asset::{list_files, minify_js};
use crate::config::{HighlightConfig, PrepConfig};
use crate::log;
use crate::pipeline::{Task, TaskOutcome, gated, try_for_each_bounded};

/// Separator placed between concatenated sources.
pub const STATEMENT_SEPARATOR: &str = ";\n";

pub struct BuildHighlight;

impl Task for BuildHighlight {
    fn name(&self) -> &'static str {
        "highlight"
    }

    fn run(&self, config: &PrepConfig) -> Result<TaskOutcome> {
        let highlight = &config.highlight;
        gated(self.name(), &highlight.output, || {
            log!("highlight"; "minifying highlighter modes to {}", config.root_relative(&highlight.output).display());
            fs::create_dir_all(&highlight.output).with_context(|| {
                format!("Failed to create directory {}", highlight.output.display())
            })?;

            let (core, modes) = rayon::join(|| build_core(highlight), || build_modes(highlight));
            core?;
            modes?;
            Ok(())
        })
    }
}

/// Read all core sources concurrently, join, minify, write the bundle.
fn build_core(highlight: &HighlightConfig) -> Result<()> {
    let sources = highlight
        .core
        .par_iter()
        .map(|path| read_source(path))
        .collect::<Result<Vec<_>>>()?;

    log!("highlight"; "{}", highlight.bundle);
    let code = minify_js(&highlight.bundle, &sources.join(STATEMENT_SEPARATOR))?;
    write_output(&highlight.output.join(&highlight.bundle), &code)
}

/// Minify every file of the modes directory, `concurrency` at a time.
fn build_modes(highlight: &HighlightConfig) -> Result<()> {
    let files = list_files(&highlight.modes)?;
    try_for_each_bounded(files, highlight.concurrency, |path| {
        let name = mode_output_name(&highlight.mode_prefix, &path)?;
        let source = read_source(&path)?;
        log!("highlight"; "{}", name);
        let code = minify_js(&name, &source)?;
        write_output(&highlight.output.join(&name), &code)
    })
}

/// `mode-<file name>` for a mode source path.
fn mode_output_name(prefix: &str, path: &Path) -> Result<String> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!("Invalid mode file name: {}", path.display()))?;
    Ok(format!("{prefix}{file_name}"))
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn write_output(path: &Path, code: &str) -> Result<()> {
    fs::write(path, code).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, PrepConfig) {
        let dir = TempDir::new().unwrap();
        let mut config = PrepConfig::with_root(dir.path());
        let brace = dir.path().join("node_modules/brace");
        config.highlight.core = vec![brace.join("index.js"), brace.join("theme/dawn.js")];

        fs::create_dir_all(brace.join("theme")).unwrap();
        fs::create_dir_all(brace.join("mode")).unwrap();
        fs::write(brace.join("index.js"), "window.ace = { version: '1.2' };\n").unwrap();
        fs::write(brace.join("theme/dawn.js"), "window.ace.theme = 'dawn'").unwrap();
        for name in ["css", "javascript", "markdown", "python", "rust"] {
            fs::write(
                brace.join("mode").join(format!("{name}.js")),
                format!("// {name} mode\nace.define('mode/{name}', function () {{ return 1; }});\n"),
            )
            .unwrap();
        }
        (dir, config)
    }

    fn mode_outputs(config: &PrepConfig) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(&config.highlight.output)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|n| n.starts_with("mode-"))
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_builds_core_and_modes() {
        let (_dir, config) = setup();
        let outcome = BuildHighlight.run(&config).unwrap();
        assert_eq!(outcome, TaskOutcome::Done);

        let core = fs::read_to_string(config.highlight.output.join("ace.js")).unwrap();
        assert!(core.contains("dawn"));

        let outputs = mode_outputs(&config);
        assert_eq!(
            outputs,
            vec![
                "mode-css.js",
                "mode-javascript.js",
                "mode-markdown.js",
                "mode-python.js",
                "mode-rust.js"
            ]
        );
        let rust = fs::read_to_string(config.highlight.output.join("mode-rust.js")).unwrap();
        assert!(rust.contains("mode/rust"));
        assert!(!rust.contains("// rust mode"));
    }

    #[test]
    fn test_mode_count_matches_input() {
        let (_dir, mut config) = setup();
        config.highlight.concurrency = 2;
        BuildHighlight.run(&config).unwrap();
        let inputs = list_files(&config.highlight.modes).unwrap();
        assert_eq!(mode_outputs(&config).len(), inputs.len());
    }

    #[test]
    fn test_broken_mode_fails() {
        let (_dir, config) = setup();
        fs::write(config.highlight.modes.join("broken.js"), "function (").unwrap();
        let err = BuildHighlight.run(&config).unwrap_err();
        assert!(format!("{err:#}").contains("mode-broken.js"));
    }

    #[test]
    fn test_missing_core_file_fails() {
        let (_dir, mut config) = setup();
        let missing = config.get_root().join("node_modules/brace/ext/missing.js");
        config.highlight.core.push(missing);
        assert!(BuildHighlight.run(&config).is_err());
    }

    #[test]
    fn test_existing_output_is_noop() {
        let (_dir, config) = setup();
        fs::create_dir_all(&config.highlight.output).unwrap();
        assert_eq!(BuildHighlight.run(&config).unwrap(), TaskOutcome::Skipped);
        assert!(mode_outputs(&config).is_empty());
    }

    #[test]
    fn test_mode_output_name() {
        let name = mode_output_name("mode-", Path::new("/x/mode/sql.js")).unwrap();
        assert_eq!(name, "mode-sql.js");
    }
}
