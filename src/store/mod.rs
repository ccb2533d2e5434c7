//! The list store: single source of truth for all lists and items.
//!
//! [`ListStore`] owns the canonical in-memory collection, translates caller
//! intents into consistent state transitions, and persists the full updated
//! collection through an injected [`StorageBackend`] after every mutation.
//! Callers hold only read references into the collection; all changes flow
//! through the operations here.
//!
//! # Persistence contract
//!
//! The storage layer is date-unaware: it moves records whose timestamps are
//! ISO-8601 text. The store decodes those into `DateTime<Utc>` immediately
//! after every load and encodes on every save, so the rest of the crate only
//! ever sees real timestamps. Timestamps are written as RFC 3339 UTC with
//! millisecond precision, which keeps them sortable as plain text.
//!
//! # Failure semantics
//!
//! Every operation that references a list or item that does not exist returns
//! [`Error::ListNotFound`] / [`Error::ItemNotFound`] uniformly; a failed
//! lookup never mutates state. Operations are synchronous and run to
//! completion in the caller's thread; the only I/O is the final persist.

pub mod stats;

use crate::domain::error::{Error, Result};
use crate::domain::{
    ItemDraft, ItemUpdate, ListUpdate, ShoppingItem, ShoppingList,
};
use crate::storage::models::{ItemRecord, ListRecord};
use crate::storage::StorageBackend;
use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use uuid::Uuid;

pub use stats::{ItemFrequency, MonthTotal, MonthlyStats};

/// Single source of truth for all shopping lists and their items.
///
/// Construct one with [`ListStore::open`] over any backend, or
/// [`ListStore::open_default`](crate::ListStore::open_default) for the
/// standard JSON file location. The collection is ordered most recently
/// created first; newly created and duplicated lists are prepended.
///
/// # Examples
///
/// ```
/// use carrinho::storage::MemoryStorage;
/// use carrinho::{ItemDraft, ListStore, Unit};
///
/// let mut store = ListStore::open(Box::new(MemoryStorage::new()))?;
/// let list = store.create_list("Groceries", &[])?;
/// store.add_item(
///     list.id,
///     ItemDraft {
///         name: "Milk".to_string(),
///         quantity: 6.0,
///         unit: Unit::Bottle,
///         estimated_price: 4.5,
///         is_priority: false,
///     },
/// )?;
/// assert_eq!(store.lists()[0].items.len(), 1);
/// # Ok::<(), carrinho::Error>(())
/// ```
pub struct ListStore {
    /// Injected persistence collaborator.
    backend: Box<dyn StorageBackend>,

    /// Canonical collection, most recently created first.
    lists: Vec<ShoppingList>,
}

impl ListStore {
    /// Opens a store over the given backend, loading the persisted collection.
    ///
    /// An empty or absent persisted entry yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend load fails or a persisted timestamp
    /// cannot be decoded.
    pub fn open(backend: Box<dyn StorageBackend>) -> Result<Self> {
        let _span = tracing::debug_span!("store_open").entered();

        let records = backend.load()?;
        let lists = records
            .into_iter()
            .map(decode_list)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(list_count = lists.len(), "store opened");

        Ok(Self { backend, lists })
    }

    /// Opens a store over the JSON file backend at the configured location.
    ///
    /// Convenience wrapper over [`ListStore::open`] with
    /// [`JsonStorage`](crate::storage::JsonStorage) at
    /// [`Config::storage_file`](crate::Config::storage_file).
    ///
    /// # Errors
    ///
    /// Returns an error if the storage location cannot be prepared or the
    /// persisted collection cannot be loaded.
    pub fn open_default(config: &crate::Config) -> Result<Self> {
        let backend = crate::storage::JsonStorage::new(config.storage_file())?;
        Self::open(Box::new(backend))
    }

    /// Read snapshot of the whole collection, most recently created first.
    #[must_use]
    pub fn lists(&self) -> &[ShoppingList] {
        &self.lists
    }

    /// Looks up a single list by id.
    #[must_use]
    pub fn get_list(&self, list_id: Uuid) -> Option<&ShoppingList> {
        self.lists.iter().find(|list| list.id == list_id)
    }

    /// Creates a list, optionally seeded from template drafts, and prepends it.
    ///
    /// Seeded items get fresh ids and `created_at = now`, start unpurchased,
    /// and carry no real price, regardless of the drafts' origin. Name
    /// validation is the caller's job; this never fails for a non-blank name.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the updated collection fails.
    pub fn create_list(
        &mut self,
        name: impl Into<String>,
        template_items: &[ItemDraft],
    ) -> Result<ShoppingList> {
        let name = name.into();
        let _span = tracing::debug_span!("create_list",
            list_name = %name,
            seed_count = template_items.len()
        )
        .entered();

        let list = ShoppingList::new(name, template_items);
        self.lists.insert(0, list.clone());
        self.persist()?;

        tracing::debug!(list_id = %list.id, "list created");
        Ok(list)
    }

    /// Merges a partial metadata update into the list and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ListNotFound`] if no list has the given id.
    pub fn update_list(&mut self, list_id: Uuid, updates: ListUpdate) -> Result<()> {
        let _span = tracing::debug_span!("update_list", list_id = %list_id).entered();

        let list = self.find_list_mut(list_id)?;
        if let Some(name) = updates.name {
            list.name = name;
        }
        if let Some(is_completed) = updates.is_completed {
            list.is_completed = is_completed;
        }
        list.touch();
        self.persist()?;

        tracing::debug!("list updated");
        Ok(())
    }

    /// Removes the list with the given id. There is no recovery or undo.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ListNotFound`] if no list has the given id.
    pub fn delete_list(&mut self, list_id: Uuid) -> Result<()> {
        let _span = tracing::debug_span!("delete_list", list_id = %list_id).entered();

        let index = self
            .lists
            .iter()
            .position(|list| list.id == list_id)
            .ok_or(Error::ListNotFound(list_id))?;
        self.lists.remove(index);
        self.persist()?;

        tracing::debug!("list deleted");
        Ok(())
    }

    /// Deep-copies a list under a new name and prepends the copy.
    ///
    /// All copied items get fresh ids with purchase state and real prices
    /// cleared; the copy gets fresh timestamps and starts not completed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ListNotFound`] if the source list does not exist.
    pub fn duplicate_list(
        &mut self,
        list_id: Uuid,
        new_name: impl Into<String>,
    ) -> Result<ShoppingList> {
        let _span = tracing::debug_span!("duplicate_list", source_id = %list_id).entered();

        let source = self.get_list(list_id).ok_or(Error::ListNotFound(list_id))?;
        let copy = source.duplicate(new_name);
        self.lists.insert(0, copy.clone());
        self.persist()?;

        tracing::debug!(copy_id = %copy.id, item_count = copy.items.len(), "list duplicated");
        Ok(copy)
    }

    /// Appends a fresh item built from the draft to the named list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ListNotFound`] if no list has the given id.
    pub fn add_item(&mut self, list_id: Uuid, draft: ItemDraft) -> Result<ShoppingItem> {
        let _span = tracing::debug_span!("add_item",
            list_id = %list_id,
            item_name = %draft.name
        )
        .entered();

        let list = self.find_list_mut(list_id)?;
        let item = ShoppingItem::from_draft(&draft);
        list.items.push(item.clone());
        list.touch();
        self.persist()?;

        tracing::debug!(item_id = %item.id, "item added");
        Ok(item)
    }

    /// Merges a partial update into the matching item.
    ///
    /// Used both for field edits and for the purchased-toggle transition: a
    /// purchased item without a recorded real price gets
    /// `actual_price = estimated_price` after the merge. Refreshes the owning
    /// list's `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ListNotFound`] / [`Error::ItemNotFound`] if either id
    /// does not resolve.
    pub fn update_item(&mut self, list_id: Uuid, item_id: Uuid, updates: ItemUpdate) -> Result<()> {
        let _span = tracing::debug_span!("update_item",
            list_id = %list_id,
            item_id = %item_id
        )
        .entered();

        let list = self.find_list_mut(list_id)?;
        let item = list
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or(Error::ItemNotFound(item_id))?;
        item.apply(&updates);
        list.touch();
        self.persist()?;

        tracing::debug!("item updated");
        Ok(())
    }

    /// Flips the purchased flag of the matching item.
    ///
    /// First purchase without a recorded real price back-fills it with the
    /// estimate; un-purchasing retains whatever real price was recorded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ListNotFound`] / [`Error::ItemNotFound`] if either id
    /// does not resolve.
    pub fn toggle_item_purchased(&mut self, list_id: Uuid, item_id: Uuid) -> Result<()> {
        let currently = self
            .get_list(list_id)
            .ok_or(Error::ListNotFound(list_id))?
            .items
            .iter()
            .find(|item| item.id == item_id)
            .ok_or(Error::ItemNotFound(item_id))?
            .is_purchased;

        self.update_item(list_id, item_id, ItemUpdate::purchased(!currently))
    }

    /// Removes the item by id from the named list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ListNotFound`] / [`Error::ItemNotFound`] if either id
    /// does not resolve; the item sequence is left unchanged on failure.
    pub fn delete_item(&mut self, list_id: Uuid, item_id: Uuid) -> Result<()> {
        let _span = tracing::debug_span!("delete_item",
            list_id = %list_id,
            item_id = %item_id
        )
        .entered();

        let list = self.find_list_mut(list_id)?;
        let index = list
            .items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or(Error::ItemNotFound(item_id))?;
        list.items.remove(index);
        list.touch();
        self.persist()?;

        tracing::debug!("item deleted");
        Ok(())
    }

    /// Returns the list with the greatest `updated_at`, or `None` when empty.
    #[must_use]
    pub fn last_list(&self) -> Option<&ShoppingList> {
        stats::last_list(&self.lists)
    }

    /// Spend totals for the current calendar month.
    ///
    /// Covers all items in lists created this month; see [`MonthTotal`] for
    /// the two sums.
    #[must_use]
    pub fn current_month_total(&self) -> MonthTotal {
        let now = Utc::now();
        self.month_total(now.year(), now.month())
    }

    /// Spend totals for an arbitrary calendar month (1-based).
    #[must_use]
    pub fn month_total(&self, year: i32, month: u32) -> MonthTotal {
        stats::month_total(&self.lists, year, month)
    }

    /// History buckets for the trailing `months` calendar months, oldest first.
    #[must_use]
    pub fn monthly_stats(&self, months: u32) -> Vec<MonthlyStats> {
        stats::monthly_stats(&self.lists, Utc::now(), months)
    }

    /// Purchase counts by item name, most frequent first, capped at `limit`.
    #[must_use]
    pub fn most_bought_items(&self, limit: usize) -> Vec<ItemFrequency> {
        stats::most_bought(&self.lists, limit)
    }

    fn find_list_mut(&mut self, list_id: Uuid) -> Result<&mut ShoppingList> {
        self.lists
            .iter_mut()
            .find(|list| list.id == list_id)
            .ok_or(Error::ListNotFound(list_id))
    }

    /// Encodes and saves the full collection through the backend.
    fn persist(&mut self) -> Result<()> {
        let records: Vec<ListRecord> = self.lists.iter().map(encode_list).collect();
        self.backend.save(&records)
    }
}

/// Formats a timestamp as sortable RFC 3339 text with millisecond precision.
fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Decodes persisted timestamp text back into a UTC timestamp.
fn parse_timestamp(text: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| Error::Storage(format!("failed to parse timestamp {text:?}: {e}")))
}

fn encode_item(item: &ShoppingItem) -> ItemRecord {
    ItemRecord {
        id: item.id,
        name: item.name.clone(),
        quantity: item.quantity,
        unit: item.unit,
        estimated_price: item.estimated_price,
        actual_price: item.actual_price,
        is_priority: item.is_priority,
        is_purchased: item.is_purchased,
        created_at: format_timestamp(item.created_at),
    }
}

fn encode_list(list: &ShoppingList) -> ListRecord {
    ListRecord {
        id: list.id,
        name: list.name.clone(),
        items: list.items.iter().map(encode_item).collect(),
        created_at: format_timestamp(list.created_at),
        updated_at: format_timestamp(list.updated_at),
        is_completed: list.is_completed,
    }
}

fn decode_item(record: ItemRecord) -> Result<ShoppingItem> {
    Ok(ShoppingItem {
        id: record.id,
        name: record.name,
        quantity: record.quantity,
        unit: record.unit,
        estimated_price: record.estimated_price,
        actual_price: record.actual_price,
        is_priority: record.is_priority,
        is_purchased: record.is_purchased,
        created_at: parse_timestamp(&record.created_at)?,
    })
}

fn decode_list(record: ListRecord) -> Result<ShoppingList> {
    Ok(ShoppingList {
        id: record.id,
        name: record.name,
        items: record
            .items
            .into_iter()
            .map(decode_item)
            .collect::<Result<Vec<_>>>()?,
        created_at: parse_timestamp(&record.created_at)?,
        updated_at: parse_timestamp(&record.updated_at)?,
        is_completed: record.is_completed,
    })
}
