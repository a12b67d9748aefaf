//! `[preinit]` section configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreinitConfig {
    /// Directory of script fragments, concatenated in name order.
    pub source: PathBuf,

    /// Combined output file.
    pub output: PathBuf,
}

impl Default for PreinitConfig {
    fn default() -> Self {
        Self {
            source: "client/js/pre-init".into(),
            output: ".build/_preinit.js".into(),
        }
    }
}
