use tracing::info;

use crate::error::StorageError;
use crate::models::{PropertyId, PropertyRecord};
use crate::storage::{KeyValueStore, FAVORITES_KEY};

use super::record_set::PersistedRecords;

/// Read/write access to the user's saved listings
pub trait Favorites {
    fn is_favorite(&self, id: PropertyId) -> bool;

    /// Saved listings in the order they were added
    fn favorites(&self) -> &[PropertyRecord];

    /// No-op when the listing is already saved.
    fn add(&mut self, record: &PropertyRecord) -> Result<(), StorageError>;

    fn remove(&mut self, id: PropertyId) -> Result<(), StorageError>;

    /// Save if absent, unsave if present. Returns whether it is now saved.
    fn toggle(&mut self, record: &PropertyRecord) -> Result<bool, StorageError> {
        if self.is_favorite(record.id) {
            self.remove(record.id)?;
            Ok(false)
        } else {
            self.add(record)?;
            Ok(true)
        }
    }

    fn clear(&mut self) -> Result<(), StorageError>;
}

/// Favorites persisted under the `favorites` key
pub struct FavoritesStore<S> {
    inner: PersistedRecords<S>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn open(storage: S) -> Result<Self, StorageError> {
        Ok(Self {
            inner: PersistedRecords::restore(storage, FAVORITES_KEY)?,
        })
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }

    pub fn storage(&self) -> &S {
        self.inner.storage()
    }
}

impl<S: KeyValueStore> Favorites for FavoritesStore<S> {
    fn is_favorite(&self, id: PropertyId) -> bool {
        self.inner.contains(id)
    }

    fn favorites(&self) -> &[PropertyRecord] {
        self.inner.records()
    }

    fn add(&mut self, record: &PropertyRecord) -> Result<(), StorageError> {
        if self.inner.insert(record)? {
            info!("Saved \"{}\" to favorites", record.title);
        }
        Ok(())
    }

    fn remove(&mut self, id: PropertyId) -> Result<(), StorageError> {
        if self.inner.remove(id)? {
            info!("Removed listing {} from favorites", id);
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.inner.clear()
    }
}
