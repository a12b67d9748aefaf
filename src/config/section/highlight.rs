//! `[highlight]` section configuration.
//!
//! ```toml
//! [highlight]
//! core = ["node_modules/brace/index.js", "node_modules/brace/theme/dawn.js"]
//! bundle = "ace.js"
//! modes = "node_modules/brace/mode"
//! mode_prefix = "mode-"
//! output = "assets/js/ace"
//! concurrency = 3
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Core sources, concatenated in this order into `bundle`.
    pub core: Vec<PathBuf>,

    /// File name of the minified core bundle inside `output`.
    pub bundle: String,

    /// Directory whose files are minified one by one.
    pub modes: PathBuf,

    /// Prefix prepended to each minified mode file name.
    pub mode_prefix: String,

    /// Output directory; its existence marks the task as already built.
    pub output: PathBuf,

    /// Maximum number of mode files processed at once.
    pub concurrency: usize,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            core: vec![
                "node_modules/brace/index.js".into(),
                "node_modules/brace/ext/modelist.js".into(),
                "node_modules/brace/theme/dawn.js".into(),
                "node_modules/brace/theme/tomorrow_night.js".into(),
                "node_modules/brace/mode/markdown.js".into(),
            ],
            bundle: "ace.js".into(),
            modes: "node_modules/brace/mode".into(),
            mode_prefix: "mode-".into(),
            output: "assets/js/ace".into(),
            concurrency: 3,
        }
    }
}
