//! Store - the data-access seam a listing reads collections through.
//!
//! The engine never queries storage itself; it asks a [`CatalogStore`] for a
//! collection's members and display name and treats the answer as an
//! immutable snapshot for the rest of the request.

mod in_memory;

use std::fmt;

use crate::catalog::Item;

pub use in_memory::{CatalogSeed, InMemoryCatalogStore};

/// Read access to collections and their member apps.
pub trait CatalogStore: Send + Sync {
    /// Every app in the collection, in no particular order.
    fn members(&self, collection_id: &str) -> Result<Vec<Item>, StoreError>;

    /// The collection's display name.
    fn collection_name(&self, collection_id: &str) -> Result<String, StoreError>;
}

/// Error type for catalog store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No collection with this id.
    CollectionNotFound(String),
    LockPoisoned(&'static str),
    /// Backing storage failed or is unreachable.
    Unavailable(String),
    /// A catalog seed could not be read or decoded.
    Seed(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::CollectionNotFound(id) => write!(f, "collection not found: {}", id),
            StoreError::LockPoisoned(operation) => {
                write!(f, "catalog lock poisoned during {}", operation)
            }
            StoreError::Unavailable(msg) => write!(f, "catalog store unavailable: {}", msg),
            StoreError::Seed(msg) => write!(f, "catalog seed error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Seed(err.to_string())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Seed(err.to_string())
    }
}

impl<S: CatalogStore + ?Sized> CatalogStore for std::sync::Arc<S> {
    fn members(&self, collection_id: &str) -> Result<Vec<Item>, StoreError> {
        (**self).members(collection_id)
    }

    fn collection_name(&self, collection_id: &str) -> Result<String, StoreError> {
        (**self).collection_name(collection_id)
    }
}
