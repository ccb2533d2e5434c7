//! Storage record models for the persistence layer.
//!
//! This module defines the raw record types that are serialized to disk. They
//! are separate from the domain models to keep a clear boundary between the
//! persisted representation and business logic: records carry timestamps as
//! ISO-8601 *text* (sortable, storage-layer date-unaware), while the domain
//! types carry real `DateTime<Utc>` values. The store performs the decode
//! immediately after every load and the encode on every save.
//!
//! Field names follow the persisted camelCase layout (`estimatedPrice`,
//! `isPurchased`, `createdAt`, ...); `actualPrice` is omitted entirely when
//! absent.

use crate::domain::Unit;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted representation of a single item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: Uuid,
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub estimated_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_price: Option<f64>,
    pub is_priority: bool,
    pub is_purchased: bool,

    /// ISO-8601 timestamp text; decoded by the store, not here.
    pub created_at: String,
}

/// Persisted representation of a single list with its nested items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRecord {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub items: Vec<ItemRecord>,

    /// ISO-8601 timestamp text; decoded by the store, not here.
    pub created_at: String,

    /// ISO-8601 timestamp text; decoded by the store, not here.
    pub updated_at: String,
    pub is_completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_record_uses_camel_case_and_omits_absent_actual_price() {
        let record = ItemRecord {
            id: Uuid::new_v4(),
            name: "Tomatoes".to_string(),
            quantity: 1.0,
            unit: Unit::Kg,
            estimated_price: 7.0,
            actual_price: None,
            is_priority: true,
            is_purchased: false,
            created_at: "2026-08-01T12:00:00.000Z".to_string(),
        };

        let json = serde_json::to_string(&record).expect("serialize item record");
        assert!(json.contains("\"estimatedPrice\":7.0"));
        assert!(json.contains("\"isPriority\":true"));
        assert!(json.contains("\"createdAt\":\"2026-08-01T12:00:00.000Z\""));
        assert!(!json.contains("actualPrice"));
    }

    #[test]
    fn list_record_round_trips_through_json() {
        let record = ListRecord {
            id: Uuid::new_v4(),
            name: "Groceries".to_string(),
            items: vec![],
            created_at: "2026-08-01T12:00:00.000Z".to_string(),
            updated_at: "2026-08-02T09:30:00.000Z".to_string(),
            is_completed: false,
        };

        let json = serde_json::to_string(&record).expect("serialize list record");
        let back: ListRecord = serde_json::from_str(&json).expect("parse list record");
        assert_eq!(back, record);
    }
}
