//! `[math]` section configuration.
//!
//! The filter rules are matched against `/`-separated absolute paths of
//! every visited entry under `source`.
//!
//! ```toml
//! [math]
//! source = "node_modules/mathjax"
//! output = "assets/js/mathjax"
//!
//! [math.filter]
//! include_suffixes = ["/node_modules/mathjax", "/node_modules/mathjax/jax"]
//! include_substrings = ["/node_modules/mathjax/extensions"]
//! exclude = { marker = "/fonts/", keep = "/STIX-Web" }
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MathConfig {
    /// Root of the math library tree.
    pub source: PathBuf,

    /// Output directory; its existence marks the task as already built.
    pub output: PathBuf,

    /// Path rules deciding which entries are copied.
    pub filter: FilterConfig,
}

impl Default for MathConfig {
    fn default() -> Self {
        Self {
            source: "node_modules/mathjax".into(),
            output: "assets/js/mathjax".into(),
            filter: FilterConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Include a path ending with any of these.
    pub include_suffixes: Vec<String>,

    /// Include a path containing any of these past its first byte.
    pub include_substrings: Vec<String>,

    /// Drop rule applied to included paths.
    pub exclude: ExcludeRule,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            include_suffixes: [
                "/node_modules/mathjax",
                "/node_modules/mathjax/jax",
                "/node_modules/mathjax/jax/input",
                "/node_modules/mathjax/jax/output",
            ]
            .map(String::from)
            .to_vec(),
            include_substrings: [
                "/node_modules/mathjax/extensions",
                "/node_modules/mathjax/MathJax.js",
                "/node_modules/mathjax/jax/element",
                "/node_modules/mathjax/jax/input/MathML",
                "/node_modules/mathjax/jax/input/TeX",
                "/node_modules/mathjax/jax/output/SVG",
            ]
            .map(String::from)
            .to_vec(),
            exclude: ExcludeRule::default(),
        }
    }
}

/// Excludes paths containing `marker` unless `keep` is found past offset 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExcludeRule {
    pub marker: String,
    pub keep: String,
}

impl Default for ExcludeRule {
    fn default() -> Self {
        Self {
            marker: "/fonts/".into(),
            keep: "/STIX-Web".into(),
        }
    }
}
