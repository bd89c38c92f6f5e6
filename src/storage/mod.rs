//! Key-value persistence port.
//!
//! Stores never talk to a concrete backend: each one owns something that
//! implements [`KeyValueStore`] and writes its whole state under a fixed key
//! after every mutation.

pub mod file;
pub mod memory;

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::StorageError;

pub use file::DirectoryStorage;
pub use memory::MemoryStorage;

pub const FAVORITES_KEY: &str = "favorites";
pub const COMPARISON_KEY: &str = "comparisonList";
pub const USER_KEY: &str = "user";

/// Minimal get/set/remove/clear contract over string values
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&mut self, key: &str) -> Result<(), StorageError>;

    /// Drop every key held by this store.
    fn clear(&mut self) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        (**self).clear()
    }
}

/// Where persisted state lives
#[derive(Debug, Clone)]
pub enum StorageSource {
    Memory,
    Directory(PathBuf),
}

pub fn open(src: &StorageSource) -> Result<Box<dyn KeyValueStore>, StorageError> {
    match src {
        StorageSource::Memory => Ok(Box::new(MemoryStorage::new())),
        StorageSource::Directory(path) => Ok(Box::new(DirectoryStorage::open(path)?)),
    }
}

/// Read and decode a JSON value; a missing key is `None`.
pub fn load_json<T, S>(storage: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match storage.get(key)? {
        Some(raw) => {
            let value = serde_json::from_str(&raw).map_err(|source| StorageError::Json {
                key: key.to_string(),
                source,
            })?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

pub fn save_json<T, S>(storage: &mut S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Json {
        key: key.to_string(),
        source,
    })?;
    debug!(key, bytes = raw.len(), "persisting");
    storage.set(key, &raw)
}
