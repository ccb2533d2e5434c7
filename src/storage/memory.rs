//! In-memory storage backend.
//!
//! Holds the persisted snapshot in a plain `Vec`, with no I/O. Useful for
//! tests and for embedders that want store semantics without a filesystem.

use crate::domain::Result;
use crate::storage::backend::StorageBackend;
use crate::storage::models::ListRecord;

/// Process-local storage backend with no persistence across restarts.
///
/// Load and save still move the record representation (ISO-8601 text dates),
/// so the store's encode/decode path is exercised exactly as with the file
/// backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    lists: Vec<ListRecord>,
}

impl MemoryStorage {
    /// Creates an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self) -> Result<Vec<ListRecord>> {
        Ok(self.lists.clone())
    }

    fn save(&mut self, lists: &[ListRecord]) -> Result<()> {
        self.lists = lists.to_vec();
        Ok(())
    }
}
