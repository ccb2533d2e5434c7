//! Storage backend abstraction.
//!
//! This module defines the [`StorageBackend`] trait that abstracts over
//! different persistence backends. This allows seamless switching between
//! storage implementations without changing store logic.
//!
//! # Design Philosophy
//!
//! The trait is minimal and snapshot-oriented: the store owns the canonical
//! in-memory collection and persists the *whole* collection after every
//! mutation, so backends only need to load and save one value. There is no
//! incremental or per-entity API.
//!
//! Backends are date-unaware: they move [`ListRecord`]s whose timestamps are
//! plain ISO-8601 text. Decoding those into real timestamps is the store's
//! responsibility, immediately after every load.

use crate::domain::Result;
use crate::storage::models::ListRecord;

/// Abstraction over persistent storage backends.
///
/// Implementations persist an ordered sequence of list records under a single
/// named entry (a file path, an in-memory key, ...) and hand it back on load.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON file with atomic
///   writes (default)
/// - [`MemoryStorage`](crate::storage::MemoryStorage): process-local, for
///   tests and embedding
pub trait StorageBackend: Send {
    /// Loads the persisted collection.
    ///
    /// Returns the default empty collection when nothing has been persisted
    /// yet; an absent entry is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry exists but cannot be read or parsed.
    fn load(&self) -> Result<Vec<ListRecord>>;

    /// Persists the full collection, replacing whatever was stored before.
    ///
    /// Last write wins; there is no merging.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be serialized or written.
    fn save(&mut self, lists: &[ListRecord]) -> Result<()>;
}
