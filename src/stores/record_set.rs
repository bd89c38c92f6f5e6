use tracing::debug;

use crate::error::StorageError;
use crate::models::{PropertyId, PropertyRecord};
use crate::storage::{self, KeyValueStore};

/// Insertion-ordered, id-unique list of records mirrored to one storage key
pub(crate) struct PersistedRecords<S> {
    key: &'static str,
    records: Vec<PropertyRecord>,
    storage: S,
}

impl<S: KeyValueStore> PersistedRecords<S> {
    /// Restore whatever was last written under `key`, verbatim.
    pub fn restore(storage: S, key: &'static str) -> Result<Self, StorageError> {
        let records: Vec<PropertyRecord> = storage::load_json(&storage, key)?.unwrap_or_default();
        debug!(key, count = records.len(), "restored");
        Ok(Self { key, records, storage })
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn contains(&self, id: PropertyId) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    /// Returns `false` when the id was already present.
    pub fn insert(&mut self, record: &PropertyRecord) -> Result<bool, StorageError> {
        if self.contains(record.id) {
            return Ok(false);
        }
        let mut next = self.records.clone();
        next.push(record.clone());
        self.commit(next)?;
        Ok(true)
    }

    /// Returns `false` when the id was not present.
    pub fn remove(&mut self, id: PropertyId) -> Result<bool, StorageError> {
        if !self.contains(id) {
            return Ok(false);
        }
        let next = self.records.iter().filter(|r| r.id != id).cloned().collect();
        self.commit(next)?;
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.commit(Vec::new())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Write `next` first; memory only changes once the write succeeded.
    fn commit(&mut self, next: Vec<PropertyRecord>) -> Result<(), StorageError> {
        storage::save_json(&mut self.storage, self.key, &next)?;
        self.records = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::record;
    use crate::storage::testing::FailingStorage;
    use crate::storage::FAVORITES_KEY;

    fn seeded() -> PersistedRecords<FailingStorage> {
        let mut set = PersistedRecords::restore(FailingStorage::new(), FAVORITES_KEY).unwrap();
        set.insert(&record(1, "A", 100)).unwrap();
        set.insert(&record(2, "B", 200)).unwrap();
        set.storage.fail_writes(true);
        set
    }

    fn ids(set: &PersistedRecords<FailingStorage>) -> Vec<PropertyId> {
        set.records().iter().map(|r| r.id).collect()
    }

    #[test]
    fn failed_write_leaves_records_untouched() {
        let mut set = seeded();

        assert!(set.insert(&record(3, "C", 300)).is_err());
        assert!(!set.contains(3));

        assert!(set.remove(1).is_err());
        assert!(set.contains(1));

        assert!(set.clear().is_err());
        assert_eq!(ids(&set), vec![1, 2]);
    }

    #[test]
    fn memory_matches_what_was_last_written() {
        let mut set = seeded();
        let _ = set.insert(&record(3, "C", 300));
        let _ = set.remove(2);

        set.storage.fail_writes(false);
        let stored: Vec<PropertyRecord> =
            storage::load_json(set.storage(), FAVORITES_KEY).unwrap().unwrap();
        assert_eq!(stored.as_slice(), set.records());
    }

    #[test]
    fn no_op_mutations_do_not_write() {
        let mut set = seeded();
        assert!(!set.insert(&record(1, "A", 100)).unwrap());
        assert!(!set.remove(9).unwrap());
    }
}
