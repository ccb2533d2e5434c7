//! Error types for the carrinho crate.
//!
//! This module defines the centralized error type [`Error`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors
//! are implemented using the `thiserror` crate for automatic `Error` trait
//! implementation.
//!
//! Missing-entity conditions are reported uniformly: every store mutation that
//! references a list or item that does not exist returns [`Error::ListNotFound`]
//! or [`Error::ItemNotFound`]. Callers that prefer ignore-on-missing semantics
//! simply discard the error; a failed lookup never mutates state.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for carrinho operations.
///
/// This enum consolidates all error conditions that can occur while operating
/// the list store, from storage failures to missing-entity lookups. I/O errors
/// from the standard library convert automatically via `#[from]`.
#[derive(Debug, Error)]
pub enum Error {
    /// No list with the given id exists in the collection.
    #[error("list not found: {0}")]
    ListNotFound(Uuid),

    /// The list exists but contains no item with the given id.
    #[error("item not found: {0}")]
    ItemNotFound(Uuid),

    /// Storage operation failed.
    ///
    /// Occurs when reading from or writing to the storage backend fails,
    /// including serialization problems and undecodable persisted dates.
    /// The string contains a description of what went wrong.
    #[error("storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A template catalog could not be read or parsed.
    ///
    /// Occurs when a user-supplied template TOML file is malformed or
    /// unreadable. The string contains a description of what went wrong.
    #[error("template error: {0}")]
    Template(String),
}

/// A specialized `Result` type for carrinho operations.
pub type Result<T> = std::result::Result<T, Error>;
