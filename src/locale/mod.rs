//! Locale discovery, loading and merging.

mod merge;

pub use merge::deep_merge;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

/// One locale found in the locale source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleEntry {
    /// Locale code, used as the output file stem.
    pub code: String,
    /// Translation file to merge onto the base locale.
    pub file: PathBuf,
}

/// Enumerate locales under `dir`, sorted by code.
///
/// ```text
/// server/locales/
/// ├── en/browser.json   -> en (file = en/browser.json)
/// ├── fr/               -> fr (file = fr/browser.json, may be missing)
/// ├── de.json           -> de
/// └── README.md         -> ignored
/// ```
///
/// When both `xx/` and `xx.json` exist, the directory wins and the file is
/// skipped with a warning.
pub fn discover(dir: &Path, file_name: &str) -> Result<Vec<LocaleEntry>> {
    // (entry, from a directory)
    let mut found = Vec::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?
    {
        let path = entry
            .with_context(|| format!("Invalid directory entry in {}", dir.display()))?
            .path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        if path.is_dir() {
            found.push((
                LocaleEntry {
                    code: name.to_string(),
                    file: path.join(file_name),
                },
                true,
            ));
        } else if path.extension().is_some_and(|ext| ext == "json")
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            found.push((
                LocaleEntry {
                    code: stem.to_string(),
                    file: path.clone(),
                },
                false,
            ));
        } else {
            crate::debug!("locales"; "ignoring {}", path.display());
        }
    }
    found.sort_by(|(a, a_dir), (b, b_dir)| a.code.cmp(&b.code).then(b_dir.cmp(a_dir)));

    let mut entries: Vec<LocaleEntry> = Vec::with_capacity(found.len());
    for (entry, _) in found {
        if entries.last().is_some_and(|kept| kept.code == entry.code) {
            crate::log!("warning"; "duplicate locale `{}`, ignoring {}", entry.code, entry.file.display());
            continue;
        }
        entries.push(entry);
    }
    Ok(entries)
}

/// Read a JSON file whose top level must be an object.
pub fn load_map(path: &Path) -> Result<Map<String, Value>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => bail!("{} is not a JSON object", path.display()),
    }
}

/// Merge a locale file onto `base`, or return `base` unchanged when the
/// file cannot be read or parsed.
pub fn merged_or_base(base: &Map<String, Value>, file: &Path) -> (Map<String, Value>, bool) {
    match load_map(file) {
        Ok(overlay) => (deep_merge(base, &overlay), true),
        Err(e) => {
            crate::debug!("locales"; "falling back to base: {:#}", e);
            (base.clone(), false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_discover_dirs_and_json_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("fr")).unwrap();
        fs::create_dir_all(dir.path().join("en")).unwrap();
        fs::write(dir.path().join("de.json"), "{}").unwrap();
        fs::write(dir.path().join("README.md"), "").unwrap();

        let entries = discover(dir.path(), "browser.json").unwrap();
        let codes: Vec<_> = entries.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["de", "en", "fr"]);
        assert_eq!(entries[0].file, dir.path().join("de.json"));
        assert_eq!(entries[2].file, dir.path().join("fr/browser.json"));
    }

    #[test]
    fn test_directory_locale_wins_over_json_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("de")).unwrap();
        fs::write(dir.path().join("de/browser.json"), r#"{ "hello": "Hallo" }"#).unwrap();
        fs::write(dir.path().join("de.json"), r#"{ "bye": "Tschuess" }"#).unwrap();

        let entries = discover(dir.path(), "browser.json").unwrap();
        assert_eq!(
            entries,
            vec![LocaleEntry {
                code: "de".into(),
                file: dir.path().join("de/browser.json"),
            }]
        );
    }

    #[test]
    fn test_load_map_rejects_non_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("list.json");
        fs::write(&path, "[1, 2]").unwrap();
        assert!(load_map(&path).is_err());
    }

    #[test]
    fn test_merged_or_base_falls_back() {
        let dir = TempDir::new().unwrap();
        let base = match json!({ "hello": "Hello" }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ \"hello\": ").unwrap();
        let (merged, ok) = merged_or_base(&base, &broken);
        assert!(!ok);
        assert_eq!(merged, base);

        let (merged, ok) = merged_or_base(&base, &dir.path().join("missing.json"));
        assert!(!ok);
        assert_eq!(merged, base);
    }
}
