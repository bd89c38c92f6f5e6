use tracing::{info, warn};

use crate::error::{ComparisonError, StorageError};
use crate::models::{PropertyId, PropertyRecord};
use crate::storage::{KeyValueStore, COMPARISON_KEY};

use super::record_set::PersistedRecords;

pub const MAX_COMPARISON_ITEMS: usize = 4;

/// Result of a successful `add`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

/// Read/write access to the side-by-side comparison list
pub trait Comparison {
    fn is_in_comparison(&self, id: PropertyId) -> bool;

    fn properties(&self) -> &[PropertyRecord];

    fn max_items(&self) -> usize;

    /// Fails with [`ComparisonError::Full`] at capacity; the list is left unchanged.
    fn add(&mut self, record: &PropertyRecord) -> Result<AddOutcome, ComparisonError>;

    fn remove(&mut self, id: PropertyId) -> Result<(), StorageError>;

    /// Returns whether the listing is now being compared.
    fn toggle(&mut self, record: &PropertyRecord) -> Result<bool, ComparisonError> {
        if self.is_in_comparison(record.id) {
            self.remove(record.id)?;
            Ok(false)
        } else {
            self.add(record)?;
            Ok(true)
        }
    }

    fn clear(&mut self) -> Result<(), StorageError>;
}

/// Comparison list persisted under the `comparisonList` key
pub struct ComparisonStore<S> {
    inner: PersistedRecords<S>,
    max_items: usize,
}

impl<S: KeyValueStore> ComparisonStore<S> {
    pub fn open(storage: S) -> Result<Self, StorageError> {
        Ok(Self {
            inner: PersistedRecords::restore(storage, COMPARISON_KEY)?,
            max_items: MAX_COMPARISON_ITEMS,
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

impl<S: KeyValueStore> Comparison for ComparisonStore<S> {
    fn is_in_comparison(&self, id: PropertyId) -> bool {
        self.inner.contains(id)
    }

    fn properties(&self) -> &[PropertyRecord] {
        self.inner.records()
    }

    fn max_items(&self) -> usize {
        self.max_items
    }

    fn add(&mut self, record: &PropertyRecord) -> Result<AddOutcome, ComparisonError> {
        if self.inner.contains(record.id) {
            return Ok(AddOutcome::AlreadyPresent);
        }
        if self.inner.len() >= self.max_items {
            warn!("Comparison list full, rejected listing {}", record.id);
            return Err(ComparisonError::Full { max: self.max_items });
        }
        self.inner.insert(record)?;
        info!("Added \"{}\" to comparison ({}/{})", record.title, self.inner.len(), self.max_items);
        Ok(AddOutcome::Added)
    }

    fn remove(&mut self, id: PropertyId) -> Result<(), StorageError> {
        self.inner.remove(id).map(|_| ())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.inner.clear()
    }
}
