//! Persistence Bridge
//!
//! Boundary between the in-memory store and durable storage. Loads once
//! at startup, saves after every mutation, and absorbs all failures.

use log::{info, warn};
use thiserror::Error;

use super::snapshot::Snapshot;
use super::STORAGE_KEY;
use crate::config::BookConfig;

/// Errors raised by a key-value backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("snapshot serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serialization(e.to_string())
    }
}

/// String key-value store with `localStorage` semantics
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Durable home of the record snapshot
pub trait PersistenceBridge {
    /// Previously saved snapshot; `None` when absent or unreadable
    fn load(&self) -> Option<Snapshot>;

    /// Best-effort write; never fails to the caller
    fn save(&self, snapshot: &Snapshot);
}

/// Bridge over any key-value store, storing the snapshot as JSON under one key
#[derive(Debug)]
pub struct StoragePersistence<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> StoragePersistence<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            key: STORAGE_KEY.to_string(),
        }
    }

    pub fn with_config(storage: S, config: &BookConfig) -> Self {
        Self {
            storage,
            key: config.storage_key.clone(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn try_load(&self) -> Result<Option<Snapshot>, StorageError> {
        match self.storage.get(&self.key)? {
            Some(raw) if !raw.is_empty() => Ok(Some(Snapshot::from_json(&raw)?)),
            _ => Ok(None),
        }
    }

    fn try_save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let raw = snapshot.to_json()?;
        self.storage.set(&self.key, &raw)
    }
}

impl<S: KeyValueStore> PersistenceBridge for StoragePersistence<S> {
    fn load(&self) -> Option<Snapshot> {
        match self.try_load() {
            Ok(Some(snapshot)) => {
                info!(
                    "loaded {} recipes from {:?}",
                    snapshot.recipes.entities.len(),
                    self.key
                );
                Some(snapshot)
            }
            Ok(None) => {
                info!("no saved recipes under {:?}", self.key);
                None
            }
            Err(e) => {
                warn!("ignoring unreadable snapshot under {:?}: {}", self.key, e);
                None
            }
        }
    }

    fn save(&self, snapshot: &Snapshot) {
        if let Err(e) = self.try_save(snapshot) {
            warn!("failed to save recipes under {:?}: {}", self.key, e);
        }
    }
}

/// Session without durable storage
impl PersistenceBridge for () {
    fn load(&self) -> Option<Snapshot> {
        None
    }

    fn save(&self, _snapshot: &Snapshot) {}
}
