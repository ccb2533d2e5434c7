//! Storage layer for the persisted list collection.
//!
//! This module provides the persistence abstraction consumed by the store:
//! a snapshot-oriented backend trait, a JSON file implementation with atomic
//! writes, an in-memory implementation, and the raw record types that keep
//! timestamps as ISO-8601 text.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `memory`: In-memory storage for tests and embedding
//! - `models`: Storage record types separate from domain models

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::StorageBackend;
pub use json::JsonStorage;
pub use memory::MemoryStorage;
pub use models::{ItemRecord, ListRecord};
