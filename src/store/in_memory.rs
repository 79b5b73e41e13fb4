//! InMemoryCatalogStore - HashMap-backed catalog for tests, demos, and
//! serving a catalog loaded from a JSON seed file.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use super::{CatalogStore, StoreError};
use crate::catalog::{Collection, Item};

/// On-disk catalog layout: every app once, collections by member id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub apps: Vec<Item>,
    #[serde(default)]
    pub collections: Vec<Collection>,
}

#[derive(Debug, Default)]
struct Catalog {
    apps: HashMap<String, Item>,
    collections: HashMap<String, Collection>,
}

/// In-memory catalog store. Clone-friendly via Arc; clones share storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogStore {
    catalog: Arc<RwLock<Catalog>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: CatalogSeed) -> Self {
        let catalog = Catalog {
            apps: seed
                .apps
                .into_iter()
                .map(|app| (app.id.clone(), app))
                .collect(),
            collections: seed
                .collections
                .into_iter()
                .map(|collection| (collection.id.clone(), collection))
                .collect(),
        };
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Load a [`CatalogSeed`] from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let bytes = std::fs::read(path.as_ref())?;
        let seed: CatalogSeed = serde_json::from_slice(&bytes)?;
        Ok(Self::from_seed(seed))
    }

    /// Insert or replace an app.
    pub fn insert_app(&self, app: Item) -> Result<(), StoreError> {
        let mut catalog = self
            .catalog
            .write()
            .map_err(|_| StoreError::LockPoisoned("insert_app"))?;
        catalog.apps.insert(app.id.clone(), app);
        Ok(())
    }

    /// Insert or replace a collection.
    pub fn insert_collection(&self, collection: Collection) -> Result<(), StoreError> {
        let mut catalog = self
            .catalog
            .write()
            .map_err(|_| StoreError::LockPoisoned("insert_collection"))?;
        catalog
            .collections
            .insert(collection.id.clone(), collection);
        Ok(())
    }

    /// Add an app to a collection's members. Adding an existing member is a no-op.
    pub fn add_member(&self, collection_id: &str, app_id: &str) -> Result<(), StoreError> {
        let mut catalog = self
            .catalog
            .write()
            .map_err(|_| StoreError::LockPoisoned("add_member"))?;
        let collection = catalog
            .collections
            .get_mut(collection_id)
            .ok_or_else(|| StoreError::CollectionNotFound(collection_id.to_string()))?;
        if !collection.members.iter().any(|id| id == app_id) {
            collection.members.push(app_id.to_string());
        }
        Ok(())
    }

    pub fn app_count(&self) -> Result<usize, StoreError> {
        let catalog = self
            .catalog
            .read()
            .map_err(|_| StoreError::LockPoisoned("app_count"))?;
        Ok(catalog.apps.len())
    }

    pub fn collection_count(&self) -> Result<usize, StoreError> {
        let catalog = self
            .catalog
            .read()
            .map_err(|_| StoreError::LockPoisoned("collection_count"))?;
        Ok(catalog.collections.len())
    }
}

impl CatalogStore for InMemoryCatalogStore {
    /// Member ids with no matching app are skipped.
    fn members(&self, collection_id: &str) -> Result<Vec<Item>, StoreError> {
        let catalog = self
            .catalog
            .read()
            .map_err(|_| StoreError::LockPoisoned("members"))?;
        let collection = catalog
            .collections
            .get(collection_id)
            .ok_or_else(|| StoreError::CollectionNotFound(collection_id.to_string()))?;

        Ok(collection
            .members
            .iter()
            .filter_map(|id| catalog.apps.get(id))
            .cloned()
            .collect())
    }

    fn collection_name(&self, collection_id: &str) -> Result<String, StoreError> {
        let catalog = self
            .catalog
            .read()
            .map_err(|_| StoreError::LockPoisoned("collection_name"))?;
        catalog
            .collections
            .get(collection_id)
            .map(|collection| collection.name.clone())
            .ok_or_else(|| StoreError::CollectionNotFound(collection_id.to_string()))
    }
}
