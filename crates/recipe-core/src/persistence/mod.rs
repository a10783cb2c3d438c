//! Persistence Layer
//!
//! Snapshot format and the bridge that writes it to a key-value store.
//! Failures never leave this layer.

mod bridge;
mod memory;
mod snapshot;

pub use bridge::{KeyValueStore, PersistenceBridge, StorageError, StoragePersistence};
pub use memory::MemoryStore;
pub use snapshot::{RecipeCollection, Snapshot};

/// Storage key the snapshot is persisted under
pub const STORAGE_KEY: &str = "recipebook_state_v1";
