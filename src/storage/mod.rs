// SPDX-License-Identifier: PMPL-1.0-or-later

//! Preference storage for the selected locale
//!
//! Two backends: [`SessionStore`] keeps the choice for the lifetime of the
//! process only, [`FileStore`] persists it as a small JSON map on disk
//! (the equivalent of a browser's local storage). Writes are best-effort;
//! callers log failures and carry on.

use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Key under which the selected locale is stored.
pub const LOCALE_PREFERENCE_KEY: &str = "memorial.locale";

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// In-memory store; nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct SessionStore {
    values: HashMap<String, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for SessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON-file backed store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; an
    /// unreadable or malformed one is logged and treated as empty.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!(path = %path.display(), error = %err, "ignoring malformed preference file");
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating preference directory {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing preferences {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn session_store_round_trip() {
        let mut store = SessionStore::new();
        assert_eq!(store.get(LOCALE_PREFERENCE_KEY), None);
        store.set(LOCALE_PREFERENCE_KEY, "en").expect("set");
        assert_eq!(store.get(LOCALE_PREFERENCE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn file_store_persists_across_opens() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs/site.json");

        let mut store = FileStore::open(&path);
        assert_eq!(store.get(LOCALE_PREFERENCE_KEY), None);
        store.set(LOCALE_PREFERENCE_KEY, "en").expect("set should write");

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get(LOCALE_PREFERENCE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn malformed_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();
        let store = FileStore::open(&path);
        assert_eq!(store.get(LOCALE_PREFERENCE_KEY), None);
    }
}
