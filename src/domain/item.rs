//! Shopping item domain model and cost arithmetic.
//!
//! This module defines the core [`ShoppingItem`] type along with the fixed
//! [`Unit`] enumeration, the [`ItemDraft`] skeleton used to instantiate new
//! items (directly or from a template), and the [`ItemUpdate`] partial-update
//! carrier consumed by the store.
//!
//! An item moves between exactly two states, unpurchased and purchased. The
//! first transition to purchased without an explicit real price back-fills
//! `actual_price` with the estimate; transitioning back leaves `actual_price`
//! in place so a previously entered real price is never lost.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Measurement unit for a shopping item quantity.
///
/// The set is fixed; units serialize as their lowercase names (`"kg"`,
/// `"package"`, ...) both in persisted state and in template files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Kg,
    G,
    L,
    Ml,
    Unit,
    Package,
    Box,
    Can,
    Bottle,
    Bag,
}

impl Unit {
    /// Every unit in display order, for selection UIs.
    pub const ALL: [Self; 10] = [
        Self::Kg,
        Self::G,
        Self::L,
        Self::Ml,
        Self::Unit,
        Self::Package,
        Self::Box,
        Self::Can,
        Self::Bottle,
        Self::Bag,
    ];

    /// Returns the lowercase name used in serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::G => "g",
            Self::L => "l",
            Self::Ml => "ml",
            Self::Unit => "unit",
            Self::Package => "package",
            Self::Box => "box",
            Self::Can => "can",
            Self::Bottle => "bottle",
            Self::Bag => "bag",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single product entry within a shopping list.
///
/// Items carry a quantity, a unit, an estimated unit price entered when the
/// item is added, and optionally the real unit price recorded at purchase
/// time. `id` and `created_at` are assigned at creation and never change.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingItem {
    pub id: Uuid,
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub estimated_price: f64,
    pub actual_price: Option<f64>,
    pub is_priority: bool,
    pub is_purchased: bool,
    pub created_at: DateTime<Utc>,
}

impl ShoppingItem {
    /// Instantiates a fresh item from a draft.
    ///
    /// The item gets a new v4 id, `created_at` set to the current time, and
    /// starts unpurchased with no recorded real price.
    #[must_use]
    pub fn from_draft(draft: &ItemDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name.clone(),
            quantity: draft.quantity,
            unit: draft.unit,
            estimated_price: draft.estimated_price,
            actual_price: None,
            is_priority: draft.is_priority,
            is_purchased: false,
            created_at: Utc::now(),
        }
    }

    /// Estimated cost contribution: `estimated_price * quantity`.
    #[must_use]
    pub fn estimated_cost(&self) -> f64 {
        self.estimated_price * self.quantity
    }

    /// Real cost contribution, present only once purchased.
    ///
    /// Falls back to the estimate when no real price was recorded, matching
    /// the back-fill rule applied on the purchase toggle.
    #[must_use]
    pub fn actual_cost(&self) -> Option<f64> {
        self.is_purchased
            .then(|| self.actual_price.unwrap_or(self.estimated_price) * self.quantity)
    }

    /// Applies a partial update in place.
    ///
    /// `None` fields are left untouched. After the merge, a purchased item
    /// without a recorded real price gets `actual_price = estimated_price`;
    /// un-purchasing never clears `actual_price`.
    pub fn apply(&mut self, updates: &ItemUpdate) {
        if let Some(name) = &updates.name {
            self.name.clone_from(name);
        }
        if let Some(quantity) = updates.quantity {
            self.quantity = quantity;
        }
        if let Some(unit) = updates.unit {
            self.unit = unit;
        }
        if let Some(estimated_price) = updates.estimated_price {
            self.estimated_price = estimated_price;
        }
        if let Some(actual_price) = updates.actual_price {
            self.actual_price = Some(actual_price);
        }
        if let Some(is_priority) = updates.is_priority {
            self.is_priority = is_priority;
        }
        if let Some(is_purchased) = updates.is_purchased {
            self.is_purchased = is_purchased;
        }

        if self.is_purchased && self.actual_price.is_none() {
            self.actual_price = Some(self.estimated_price);
        }
    }
}

/// Field set needed to create an item, without the store-assigned parts.
///
/// Drafts double as template entries: a template is a named sequence of
/// drafts, and [`ShoppingItem::from_draft`] turns each into a live item at
/// list-creation time. Deserializes from the template TOML format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub estimated_price: f64,
    #[serde(default)]
    pub is_priority: bool,
}

/// Partial update for a single item; `None` means "leave as is".
///
/// There is deliberately no way to clear `actual_price`: once a real price
/// has been recorded it is retained even if the item is un-purchased.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<Unit>,
    pub estimated_price: Option<f64>,
    pub actual_price: Option<f64>,
    pub is_priority: Option<bool>,
    pub is_purchased: Option<bool>,
}

impl ItemUpdate {
    /// Update that toggles the purchased flag to the given state.
    #[must_use]
    pub fn purchased(is_purchased: bool) -> Self {
        Self {
            is_purchased: Some(is_purchased),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, quantity: f64, price: f64) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            quantity,
            unit: Unit::Unit,
            estimated_price: price,
            is_priority: false,
        }
    }

    #[test]
    fn from_draft_starts_unpurchased_with_no_actual_price() {
        let item = ShoppingItem::from_draft(&draft("Milk", 6.0, 4.5));
        assert!(!item.is_purchased);
        assert!(item.actual_price.is_none());
        assert_eq!(item.estimated_cost(), 27.0);
        assert_eq!(item.actual_cost(), None);
    }

    #[test]
    fn purchase_toggle_backfills_actual_price_once() {
        let mut item = ShoppingItem::from_draft(&draft("Rice", 1.0, 25.0));

        item.apply(&ItemUpdate::purchased(true));
        assert_eq!(item.actual_price, Some(25.0));
        assert_eq!(item.actual_cost(), Some(25.0));

        // Un-purchasing keeps the recorded price.
        item.apply(&ItemUpdate::purchased(false));
        assert_eq!(item.actual_price, Some(25.0));
        assert_eq!(item.actual_cost(), None);
    }

    #[test]
    fn explicit_actual_price_wins_over_backfill() {
        let mut item = ShoppingItem::from_draft(&draft("Coffee", 2.0, 15.0));
        item.apply(&ItemUpdate {
            is_purchased: Some(true),
            actual_price: Some(13.75),
            ..ItemUpdate::default()
        });
        assert_eq!(item.actual_price, Some(13.75));
        assert_eq!(item.actual_cost(), Some(27.5));
    }

    #[test]
    fn unit_serializes_as_lowercase_name() {
        for unit in Unit::ALL {
            let json = serde_json::to_string(&unit).expect("serialize unit");
            assert_eq!(json, format!("\"{unit}\""));
        }
    }
}
