//! Pipeline configuration management for `prep.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/   # One file per TOML section
//! ├── error      # ConfigError
//! ├── util       # Config lookup and path resolution
//! └── mod.rs     # PrepConfig (this file)
//! ```
//!
//! The file is optional: without one, every section falls back to its
//! default paths, resolved against the current directory.

mod error;
pub mod section;
mod util;

pub use error::ConfigError;
pub use section::{
    CacheConfig, EditorConfig, ExcludeRule, FilterConfig, HighlightConfig, LocalesConfig,
    MathConfig, PreinitConfig,
};

use util::{find_config_file, normalize_path, resolve_path};

use crate::{cli::Cli, debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name searched for when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "prep.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing prep.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrepConfig {
    /// Absolute path to the config file, if one was loaded (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root every relative path resolves against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub editor: EditorConfig,

    #[serde(default)]
    pub highlight: HighlightConfig,

    #[serde(default)]
    pub math: MathConfig,

    #[serde(default)]
    pub locales: LocalesConfig,

    #[serde(default)]
    pub preinit: PreinitConfig,

    #[serde(default)]
    pub cache: CacheConfig,
}

impl PrepConfig {
    /// Load configuration from CLI arguments.
    ///
    /// An explicit `--config` must exist. Otherwise `prep.toml` is searched
    /// upward from cwd and built-in defaults are used when none is found.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = match &cli.config {
            Some(path) => {
                let path = normalize_path(path);
                if !path.is_file() {
                    return Err(ConfigError::Io(
                        path,
                        std::io::Error::from(std::io::ErrorKind::NotFound),
                    )
                    .into());
                }
                Some(path)
            }
            None => find_config_file(Path::new(DEFAULT_CONFIG)),
        };

        let mut config = match &config_path {
            Some(path) => Self::from_path(path)?,
            None => {
                debug!("config"; "no {} found, using defaults", DEFAULT_CONFIG);
                Self::default()
            }
        };

        let root = match (&cli.root, &config_path) {
            (Some(root), _) => normalize_path(root),
            (None, Some(path)) => path.parent().map(Path::to_path_buf).unwrap_or_default(),
            (None, None) => {
                std::env::current_dir().context("Failed to get current working directory")?
            }
        };

        config.config_path = config_path;
        config.normalize_paths(&root);
        config.validate()?;

        Ok(config)
    }

    /// Default configuration rooted at `root`.
    pub fn with_root(root: &Path) -> Self {
        let mut config = Self::default();
        config.normalize_paths(root);
        config
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Get path relative to the project root, for display.
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Resolve every configured path against `root`.
    fn normalize_paths(&mut self, root: &Path) {
        let root = normalize_path(root);
        let resolve = |path: &mut PathBuf| *path = resolve_path(&root, path);

        resolve(&mut self.editor.source);
        resolve(&mut self.editor.output);

        self.highlight.core.iter_mut().for_each(resolve);
        resolve(&mut self.highlight.modes);
        resolve(&mut self.highlight.output);

        resolve(&mut self.math.source);
        resolve(&mut self.math.output);

        resolve(&mut self.locales.source);
        resolve(&mut self.locales.base);
        resolve(&mut self.locales.output);

        resolve(&mut self.preinit.source);
        resolve(&mut self.preinit.output);

        resolve(&mut self.cache.dir);

        self.root = root;
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Reject values no task can run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.highlight.concurrency == 0 {
            return Err(ConfigError::Validation(
                "highlight.concurrency must be at least 1".into(),
            ));
        }
        if self.highlight.core.is_empty() {
            return Err(ConfigError::Validation(
                "highlight.core must list at least one file".into(),
            ));
        }
        if self.highlight.bundle.is_empty() {
            return Err(ConfigError::Validation(
                "highlight.bundle must not be empty".into(),
            ));
        }
        if self.locales.file.is_empty() {
            return Err(ConfigError::Validation(
                "locales.file must not be empty".into(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// tests
// ============================================================================
