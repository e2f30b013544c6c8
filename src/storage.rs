//! Persisted language preference.
//!
//! A single key-value pair surviving page reloads: read once at startup,
//! written whenever the user explicitly switches language. The file-backed
//! implementation stands in for origin-scoped browser storage.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::debug;

/// The one persisted preference value.
pub trait PreferenceStore: Send + Sync {
    /// The stored language code, if any. Whitespace is trimmed; an empty
    /// value reads as absent.
    fn get(&self) -> Option<String>;

    /// Persist a language code, replacing any prior value.
    fn set(&self, code: &str) -> Result<()>;
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    value: Mutex<Option<String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(code: &str) -> Self {
        Self {
            value: Mutex::new(Some(code.to_string())),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self) -> Option<String> {
        self.value.lock().expect("store lock poisoned").clone()
    }

    fn set(&self, code: &str) -> Result<()> {
        *self.value.lock().expect("store lock poisoned") = Some(code.to_string());
        Ok(())
    }
}

/// File-backed store: the file holds just the language code.
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self) -> Option<String> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let code = content.trim();
        if code.is_empty() {
            None
        } else {
            Some(code.to_string())
        }
    }

    fn set(&self, code: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(&self.path, code)
            .with_context(|| format!("Failed to write preference to {}", self.path.display()))?;
        debug!("Persisted language preference '{}'", code);
        Ok(())
    }
}
