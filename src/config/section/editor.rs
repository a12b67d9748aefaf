//! `[editor]` section configuration.
//!
//! ```toml
//! [editor]
//! source = "node_modules/simplemde/dist/simplemde.min.js"
//! output = "assets/js/simplemde"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Pre-minified editor bundle.
    pub source: PathBuf,

    /// Output directory; its existence marks the task as already built.
    pub output: PathBuf,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            source: "node_modules/simplemde/dist/simplemde.min.js".into(),
            output: "assets/js/simplemde".into(),
        }
    }
}
