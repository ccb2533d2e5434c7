//! Shopping list domain model and derived read-only views.
//!
//! A [`ShoppingList`] owns its items in insertion order; that order is what
//! gets persisted. The purchased-last/priority-first presentation order is a
//! view concern computed on demand by [`ShoppingList::display_order`] and is
//! never written back to the item sequence.

use crate::domain::item::{ItemDraft, ShoppingItem};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A named, ordered collection of items with its own lifecycle timestamps.
///
/// `created_at` is immutable; `updated_at` is refreshed by the store on every
/// mutation to the list or any of its items. `is_completed` is a manual flag
/// set by the user, never derived from item state.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingList {
    pub id: Uuid,
    pub name: String,
    pub items: Vec<ShoppingItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_completed: bool,
}

impl ShoppingList {
    /// Creates a list with a fresh id, optionally seeded from drafts.
    ///
    /// Seeded items are instantiated through [`ShoppingItem::from_draft`], so
    /// each gets its own fresh id and starts unpurchased regardless of where
    /// the draft came from.
    #[must_use]
    pub fn new(name: impl Into<String>, template_items: &[ItemDraft]) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            items: template_items.iter().map(ShoppingItem::from_draft).collect(),
            created_at: now,
            updated_at: now,
            is_completed: false,
        }
    }

    /// Deep-copies this list under a new name with all purchase state cleared.
    ///
    /// Every copied item gets a fresh id, `is_purchased = false`, and
    /// `actual_price = None`; the copy gets fresh timestamps and starts
    /// not completed. The source list is left untouched.
    #[must_use]
    pub fn duplicate(&self, new_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: new_name.into(),
            items: self
                .items
                .iter()
                .map(|item| ShoppingItem {
                    id: Uuid::new_v4(),
                    is_purchased: false,
                    actual_price: None,
                    created_at: now,
                    ..item.clone()
                })
                .collect(),
            created_at: now,
            updated_at: now,
            is_completed: false,
        }
    }

    /// Marks the list as touched now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Sum of `estimated_price * quantity` over all items.
    #[must_use]
    pub fn estimated_total(&self) -> f64 {
        self.items.iter().map(ShoppingItem::estimated_cost).sum()
    }

    /// Sum of `(actual_price ?? estimated_price) * quantity` over purchased items.
    #[must_use]
    pub fn actual_total(&self) -> f64 {
        self.items.iter().filter_map(ShoppingItem::actual_cost).sum()
    }

    /// Number of purchased items.
    #[must_use]
    pub fn purchased_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_purchased).count()
    }

    /// Number of priority items still waiting to be purchased.
    #[must_use]
    pub fn priority_pending_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.is_priority && !item.is_purchased)
            .count()
    }

    /// Purchased share of the list as a whole percentage, 0 when empty.
    #[must_use]
    pub fn completion_percent(&self) -> u8 {
        if self.items.is_empty() {
            return 0;
        }
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (self.purchased_count() as f64 / self.items.len() as f64 * 100.0).round() as u8;
        percent
    }

    /// Items in presentation order: purchased last, priority first, then by
    /// creation time.
    ///
    /// Computed fresh on each call from the stored insertion order; callers
    /// must not write this ordering back.
    #[must_use]
    pub fn display_order(&self) -> Vec<&ShoppingItem> {
        let mut ordered: Vec<&ShoppingItem> = self.items.iter().collect();
        ordered.sort_by(|a, b| {
            a.is_purchased
                .cmp(&b.is_purchased)
                .then(b.is_priority.cmp(&a.is_priority))
                .then(a.created_at.cmp(&b.created_at))
        });
        ordered
    }
}

/// Partial update for list metadata; `None` means "leave as is".
///
/// Item mutations go through the store's item operations instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListUpdate {
    pub name: Option<String>,
    pub is_completed: Option<bool>,
}

impl ListUpdate {
    /// Update that renames the list.
    #[must_use]
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Update that sets the manual completion flag.
    #[must_use]
    pub fn completed(is_completed: bool) -> Self {
        Self {
            is_completed: Some(is_completed),
            ..Self::default()
        }
    }
}
