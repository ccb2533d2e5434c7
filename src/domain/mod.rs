//! Domain layer for the carrinho crate.
//!
//! This module contains the core domain types and business rules for shopping
//! lists, independent of storage or presentation concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Shopping item model, units, drafts, and partial updates
//! - [`list`]: Shopping list model and derived read-only views

pub mod error;
pub mod item;
pub mod list;

pub use error::{Error, Result};
pub use item::{ItemDraft, ItemUpdate, ShoppingItem, Unit};
pub use list::{ListUpdate, ShoppingList};
