//! JSON document persistence.
//!
//! The whole aggregate state lives in one JSON file. Loading is lenient:
//! a missing, unreadable, or corrupt file degrades to the default
//! document with a logged warning, never an error. Saving and importing
//! surface typed errors and leave in-memory state untouched on failure.

mod document;

pub use document::{Document, Redemption, Reward, SessionRecord, Settings, SCHEMA_VERSION};

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::StoreError;

/// Returns `~/.config/worktracker[-dev]/` based on WORKTRACKER_ENV.
///
/// Set WORKTRACKER_ENV=dev to use a separate development data directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("WORKTRACKER_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("worktracker-dev")
    } else {
        base_dir.join("worktracker")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StoreError::DataDir(e.to_string()))?;
    Ok(dir)
}

/// File-backed store for the aggregate state document.
pub struct Store {
    path: PathBuf,
}

impl Store {
    const FILE_NAME: &'static str = "worktracker.json";

    /// Open the store at the default data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self, StoreError> {
        Ok(Self {
            path: data_dir()?.join(Self::FILE_NAME),
        })
    }

    /// Open a store at an explicit path (used by tests).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, falling back to the default document if the
    /// file is missing, unreadable, or corrupt. Partially-present
    /// documents are filled out field-by-field by the schema defaults.
    pub fn load(&self) -> Document {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Document::default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read document, using defaults");
                return Document::default();
            }
        };
        match serde_json::from_str(&content) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to parse document, using defaults");
                Document::default()
            }
        }
    }

    /// Persist the document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails. The caller's
    /// in-memory state is unaffected either way.
    pub fn save(&self, doc: &Document) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(doc)
            .map_err(|e| StoreError::ParseFailed(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::WriteFailed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        }
        std::fs::write(&self.path, content).map_err(|e| StoreError::WriteFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Write the document verbatim to `dir` under a date-stamped backup
    /// name, returning the path written.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn export(doc: &Document, dir: &Path, today: NaiveDate) -> Result<PathBuf, StoreError> {
        let path = dir.join(format!("worktracker-backup-{}.json", today.format("%Y-%m-%d")));
        let content = serde_json::to_string_pretty(doc)
            .map_err(|e| StoreError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| StoreError::WriteFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Ok(path)
    }

    /// Read a user-supplied document and shallow-merge its top-level keys
    /// over `current`. `current` is untouched on any failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// the merged result does not fit the schema.
    pub fn import(current: &Document, path: &Path) -> Result<Document, StoreError> {
        let content = std::fs::read_to_string(path).map_err(|e| StoreError::ReadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let incoming: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| StoreError::ParseFailed(e.to_string()))?;
        current.merge_shallow(incoming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::at(dir.path().join("worktracker.json"));
        assert_eq!(store.load(), Document::default());
    }

    #[test]
    fn corrupt_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("worktracker.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = Store::at(path);
        assert_eq!(store.load(), Document::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::at(dir.path().join("worktracker.json"));

        let mut doc = Document::default();
        doc.total_points = 1234;
        doc.settings.daily_goal = 800;
        store.save(&doc).unwrap();

        assert_eq!(store.load(), doc);
    }

    #[test]
    fn export_uses_date_stamped_name() {
        let dir = tempfile::tempdir().unwrap();
        let doc = Document::default();
        let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let path = Store::export(&doc, dir.path(), today).unwrap();
        assert!(path.ends_with("worktracker-backup-2024-03-05.json"));
        assert!(path.exists());
    }

    #[test]
    fn import_merges_over_current() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("incoming.json");
        std::fs::write(&path, r#"{"totalPoints": 99}"#).unwrap();

        let mut current = Document::default();
        current.settings.daily_goal = 640;
        let merged = Store::import(&current, &path).unwrap();
        assert_eq!(merged.total_points, 99);
        assert_eq!(merged.settings.daily_goal, 640);
    }

    #[test]
    fn import_rejects_malformed_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("incoming.json");
        std::fs::write(&path, "nope").unwrap();
        assert!(matches!(
            Store::import(&Document::default(), &path),
            Err(StoreError::ParseFailed(_))
        ));
    }
}
