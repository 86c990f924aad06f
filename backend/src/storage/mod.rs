//! # Storage Module
//!
//! Data persistence for the mutation layer: the SQLite connection
//! wrapper and one repository per entity. All writes go through
//! parameterized statements; values are bound, never concatenated.

pub mod connection;
pub mod repositories;

use thiserror::Error;

pub use connection::DbConnection;
pub use repositories::{InvoiceRepository, SportRepository, UserRepository};

/// Classified storage-level failure. Handlers log the cause and
/// surface only a generic entity-scoped message to the caller.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A write targeted an identifier no row matches.
    #[error("no row matched the given identifier")]
    NotFound,
    /// A stored value could not be mapped back to its domain type.
    #[error("unrecognized stored value: {0}")]
    Decode(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
