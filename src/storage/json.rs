//! JSON file-based storage backend.
//!
//! This module provides a simple, human-readable storage implementation using
//! JSON serialization. It uses atomic file writes (write-to-temp + rename) to
//! prevent corruption on crashes.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(n) - parses the whole file on each load
//! - **Write**: O(n) - serializes and writes the whole collection
//! - **Best for**: personal data volumes (hundreds of lists), infrequent writes

use crate::domain::error::{Error, Result};
use crate::storage::backend::StorageBackend;
use crate::storage::models::ListRecord;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// JSON storage container format.
///
/// This is the top-level structure serialized to disk. Wraps the list
/// collection together with a format version for future migrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format.
    version: u32,

    /// The ordered list collection, most recently created first.
    #[serde(default)]
    lists: Vec<ListRecord>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            lists: Vec::new(),
        }
    }
}

/// JSON file storage backend.
///
/// Persists the list collection in a human-readable JSON file. A missing file
/// reads back as the empty default collection, so first use needs no setup
/// step beyond pointing at a writable location.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "lists": [
///     {
///       "id": "7e2e...",
///       "name": "Groceries",
///       "items": [
///         {
///           "id": "91fc...",
///           "name": "Rice (5kg)",
///           "quantity": 1.0,
///           "unit": "package",
///           "estimatedPrice": 25.0,
///           "isPriority": true,
///           "isPurchased": false,
///           "createdAt": "2026-08-01T12:00:00.000Z"
///         }
///       ],
///       "createdAt": "2026-08-01T12:00:00.000Z",
///       "updatedAt": "2026-08-01T12:00:00.000Z",
///       "isCompleted": false
///     }
///   ]
/// }
/// ```
pub struct JsonStorage {
    /// Path to the JSON file on disk.
    file_path: PathBuf,
}

impl JsonStorage {
    /// Creates a JSON storage backend for the given file path.
    ///
    /// Parent directories are created immediately; the file itself is only
    /// written on the first save.
    ///
    /// # Errors
    ///
    /// Returns an error if parent directory creation fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use carrinho::storage::JsonStorage;
    /// use std::path::PathBuf;
    ///
    /// let storage = JsonStorage::new(PathBuf::from("/tmp/lists.json"))?;
    /// # Ok::<(), carrinho::Error>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Ok(Self { file_path })
    }

    /// Reads and parses the backing file.
    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| Error::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            list_count = data.lists.len(),
            "loaded storage data"
        );

        Ok(data)
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<Vec<ListRecord>> {
        let _span = tracing::debug_span!("json_load", path = ?self.file_path).entered();

        if !self.file_path.exists() {
            tracing::debug!("no backing file yet, returning empty collection");
            return Ok(Vec::new());
        }

        Ok(Self::load_from_file(&self.file_path)?.lists)
    }

    fn save(&mut self, lists: &[ListRecord]) -> Result<()> {
        let _span =
            tracing::debug_span!("json_save", path = ?self.file_path, list_count = lists.len())
                .entered();

        let data = StorageData {
            version: 1,
            lists: lists.to_vec(),
        };

        let json = serde_json::to_string_pretty(&data)
            .map_err(|e| Error::Storage(format!("failed to serialize JSON: {e}")))?;

        // Write to a temporary file first, then atomically rename it to the
        // target path, so the file is never left in a corrupt state even if
        // the process crashes mid-write.
        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("storage saved successfully");
        Ok(())
    }
}
