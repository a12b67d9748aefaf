//! `[locales]` section configuration.
//!
//! ```toml
//! [locales]
//! source = "server/locales"
//! base = "server/locales/en/browser.json"
//! file = "browser.json"
//! output = "assets/js/i18n"
//! ```
//!
//! Inside `source`, a directory `fr/` is read as `fr/<file>` and a file
//! `fr.json` is read directly; both produce `<output>/fr.json`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalesConfig {
    /// Directory listing one entry per locale.
    pub source: PathBuf,

    /// Reference locale every other locale falls back to.
    pub base: PathBuf,

    /// Translation file name looked up inside per-locale directories.
    pub file: String,

    /// Output directory for merged `<code>.json` files.
    pub output: PathBuf,
}

impl Default for LocalesConfig {
    fn default() -> Self {
        Self {
            source: "server/locales".into(),
            base: "server/locales/en/browser.json".into(),
            file: "browser.json".into(),
            output: "assets/js/i18n".into(),
        }
    }
}
