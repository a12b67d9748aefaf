//! Path filter for the math library copy.
//!
//! Rules are plain substring tests on `/`-separated path strings:
//!
//! ```text
//! include  = ends_with(any suffix) || find(any substring) > 0
//! exclude  = find(marker) > 0 && (find(keep) is none || find(keep) <= 1)
//! copy     = include && !exclude
//! ```
//!
//! The exclusion's offset check for `keep` is kept exactly as configured,
//! even though a `keep` match is almost never found that close to the start.

use std::path::Path;

use crate::config::{ExcludeRule, FilterConfig};

#[derive(Debug, Clone)]
pub struct CopyFilter {
    include_suffixes: Vec<String>,
    include_substrings: Vec<String>,
    exclude: ExcludeRule,
}

impl CopyFilter {
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            include_suffixes: config.include_suffixes.clone(),
            include_substrings: config.include_substrings.clone(),
            exclude: config.exclude.clone(),
        }
    }

    /// Normalize separators so Windows paths match the same rules.
    pub fn normalize(path: &Path) -> String {
        path.to_string_lossy().replace('\\', "/")
    }

    /// Evaluate the rules against an already normalized path.
    pub fn allows(&self, path: &str) -> bool {
        self.included(path) && !self.excluded(path)
    }

    fn included(&self, path: &str) -> bool {
        self.include_suffixes.iter().any(|s| path.ends_with(s.as_str()))
            || self
                .include_substrings
                .iter()
                .any(|s| found_past_start(path, s))
    }

    fn excluded(&self, path: &str) -> bool {
        if !found_past_start(path, &self.exclude.marker) {
            return false;
        }
        match path.find(self.exclude.keep.as_str()) {
            None => true,
            Some(pos) => pos <= 1,
        }
    }
}

/// Substring occurs at an offset greater than zero.
fn found_past_start(path: &str, needle: &str) -> bool {
    matches!(path.find(needle), Some(pos) if pos > 0)
}
