//! Snapshot Format
//!
//! `{"recipes": {"ids": [...], "entities": {"<id>": Recipe}}}`

use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::domain::{Recipe, RecipeId};
use crate::repository::RecordStore;

/// Normalized record collection as persisted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeCollection {
    #[serde(default)]
    pub ids: Vec<RecipeId>,
    #[serde(default)]
    pub entities: BTreeMap<RecipeId, Recipe>,
}

/// Full serialization of the record collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub recipes: RecipeCollection,
}

impl Snapshot {
    /// Capture the store's current records
    pub fn capture(store: &RecordStore) -> Self {
        Self {
            recipes: RecipeCollection {
                ids: store.ids().to_vec(),
                entities: store.iter().map(|r| (r.id.clone(), r.clone())).collect(),
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Rebuild a store; ordering is recomputed from the entities.
    pub fn into_store(self) -> RecordStore {
        let RecipeCollection { ids, entities } = self.recipes;

        let dangling = ids.iter().filter(|id| !entities.contains_key(*id)).count();
        if dangling > 0 {
            warn!("snapshot lists {} ids without records; dropping them", dangling);
        }
        let mismatched = entities.iter().filter(|(key, recipe)| **key != recipe.id).count();
        if mismatched > 0 {
            warn!("snapshot has {} records filed under a foreign key", mismatched);
        }

        RecordStore::from_recipes(entities.into_values())
    }
}
