//! Carrinho: a personal shopping-list manager core.
//!
//! Carrinho is the state layer of a shopping-list application: it owns the
//! canonical collection of lists and items, mediates every mutation, persists
//! the collection to a local JSON store, and computes derived spending
//! aggregates (last-used list, calendar-month totals, trailing-month history,
//! purchase frequency). It has no UI, no server, and no concurrency — one
//! process, one writer, synchronous operations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Embedding application (UI layer, out of scope)     │
//! └─────────────────────────────────────────────────────┘
//!                        │ operations / read snapshots
//! ┌─────────────────────────────────────────────────────┐
//! │  List Store (store/)                                │  ← source of truth
//! │  - CRUD for lists and items                         │
//! │  - purchase-toggle transition                       │
//! │  - derived aggregates (store/stats)                 │
//! │  - record ⇄ domain date codec                       │
//! └─────────────────────────────────────────────────────┘
//!         │                                 │
//! ┌───────────────────┐        ┌────────────────────────┐
//! │ Domain (domain/)  │        │ Storage (storage/)     │
//! │ - ShoppingList    │        │ - StorageBackend trait │
//! │ - ShoppingItem    │        │ - JSON file (atomic)   │
//! │ - errors          │        │ - in-memory            │
//! └───────────────────┘        └────────────────────────┘
//!                                          │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Observability                     │
//! │  - data dir resolution (infrastructure/)            │
//! │  - optional file logging (observability/)           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`store`]: The list store — all operations and derived aggregates
//! - [`domain`]: Core domain types (lists, items, errors)
//! - [`storage`]: Persistence backends and raw record types
//! - [`templates`]: Built-in and file-loaded template catalog
//! - [`infrastructure`]: Data directory resolution
//! - [`observability`]: Optional file-based logging
//!
//! # Getting Started
//!
//! ```
//! use carrinho::storage::MemoryStorage;
//! use carrinho::templates::Template;
//! use carrinho::ListStore;
//!
//! let mut store = ListStore::open(Box::new(MemoryStorage::new()))?;
//!
//! // Seed a list from a built-in template, then track a purchase.
//! let template = Template::from_name("weekly-market").unwrap();
//! let list = store.create_list("Saturday market", &template.items)?;
//! let first_item = list.items[0].id;
//! store.toggle_item_purchased(list.id, first_item)?;
//!
//! let totals = store.current_month_total();
//! assert!(totals.actual > 0.0);
//! # Ok::<(), carrinho::Error>(())
//! ```
//!
//! For persistent state, open the store over the JSON backend instead:
//!
//! ```no_run
//! use carrinho::{Config, ListStore};
//!
//! let config = Config::default();
//! let mut store = ListStore::open_default(&config)?;
//! # Ok::<(), carrinho::Error>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Replace-on-write snapshots
//!
//! Callers only ever hold read references obtained from [`ListStore::lists`]
//! and friends; every mutation goes through a store operation and ends with a
//! persist of the full collection. There is no in-place mutation path exposed,
//! so a UI can safely re-render from the fresh snapshot after each call.
//!
//! ## Date-unaware storage
//!
//! The storage layer moves records whose timestamps are sortable ISO-8601
//! text; the store decodes them into `DateTime<Utc>` right after every load.
//! This keeps backends trivial and the on-disk format human-readable.
//!
//! ## Uniform not-found errors
//!
//! Every mutator reports a missing list or item as
//! [`Error::ListNotFound`] / [`Error::ItemNotFound`]. Callers that want
//! ignore-on-missing semantics discard the error; nothing is ever partially
//! applied.

pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod store;
pub mod templates;

pub use domain::{
    Error, ItemDraft, ItemUpdate, ListUpdate, Result, ShoppingItem, ShoppingList, Unit,
};
pub use store::{ItemFrequency, ListStore, MonthTotal, MonthlyStats};
pub use templates::Template;

use std::path::PathBuf;

/// Crate configuration supplied by the embedding application.
///
/// Everything is optional; the defaults resolve to the per-user data
/// directory and `info`-level logging.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Directory holding the JSON store and log file.
    ///
    /// Defaults to `$XDG_DATA_HOME/carrinho` (or `~/.local/share/carrinho`).
    pub data_dir: Option<PathBuf>,

    /// Filter directive for [`observability::init_tracing`].
    ///
    /// Any `EnvFilter` syntax, e.g. `"debug"` or `"carrinho=trace"`.
    /// Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Config {
    /// Resolves the effective data directory.
    #[must_use]
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(infrastructure::paths::default_data_dir)
    }

    /// Resolves the JSON storage file path.
    #[must_use]
    pub fn storage_file(&self) -> PathBuf {
        infrastructure::paths::storage_file(&self.resolve_data_dir())
    }
}
