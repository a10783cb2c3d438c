//! Record Store
//!
//! Normalized recipe collection: entities keyed by id plus an id list kept
//! in presentation order (name collation, then id).

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use chrono::Utc;
use log::debug;

use super::collation::compare_names;
use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, Recipe, RecipeChanges, RecipeId, RecipeInput};

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

fn presentation_order(a: &Recipe, b: &Recipe) -> Ordering {
    compare_names(&a.name, &b.name).then_with(|| a.id.cmp(&b.id))
}

/// Exclusive owner of the recipe collection
#[derive(Debug)]
pub struct RecordStore {
    entities: HashMap<RecipeId, Recipe>,
    ids: Vec<RecipeId>,
    /// Bumped on every effective mutation
    revision: u64,
    /// Distinguishes store instances that happen to share a revision
    generation: u64,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            entities: HashMap::new(),
            ids: Vec::new(),
            revision: 0,
            generation: NEXT_GENERATION.fetch_add(1, AtomicOrdering::Relaxed),
        }
    }

    /// Seed a store with existing records, e.g. from a snapshot.
    ///
    /// A later record with an already-seen id replaces the earlier one.
    pub fn from_recipes(recipes: impl IntoIterator<Item = Recipe>) -> Self {
        let mut store = Self::new();
        for recipe in recipes {
            store.entities.insert(recipe.id.clone(), recipe);
        }
        store.ids = store.entities.keys().cloned().collect();
        store.resort();
        store
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &RecipeId) -> bool {
        self.entities.contains_key(id)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Ids in presentation order
    pub fn ids(&self) -> &[RecipeId] {
        &self.ids
    }

    /// Records in presentation order, borrowed
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> + '_ {
        self.ids.iter().filter_map(|id| self.entities.get(id))
    }

    /// Insert a new recipe with a fresh id, the current time and `favorite = false`
    pub fn create(&mut self, input: RecipeInput) -> RecipeId {
        let mut id = RecipeId::generate();
        while self.contains(&id) {
            id = RecipeId::generate();
        }
        let recipe = Recipe::new(id.clone(), input, Utc::now());
        debug!("create recipe {} ({:?})", id, recipe.name);

        let position = self.position_for(&recipe);
        self.ids.insert(position, id.clone());
        self.entities.insert(id.clone(), recipe);
        self.revision += 1;
        id
    }

    /// Overwrite the given fields of an existing recipe
    pub fn update(&mut self, id: &RecipeId, changes: RecipeChanges) -> DomainResult<&Recipe> {
        let recipe = self
            .entities
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("recipe {}", id)))?;

        if !changes.is_empty() {
            let renamed = changes.name.as_ref().is_some_and(|name| *name != recipe.name);
            recipe.apply(changes);
            if renamed {
                self.ids.retain(|other| other != id);
                let position = self.position_for_id(id);
                self.ids.insert(position, id.clone());
            }
            self.revision += 1;
            debug!("update recipe {}", id);
        }

        self.entities
            .get(id)
            .ok_or_else(|| DomainError::NotFound(format!("recipe {}", id)))
    }

    /// Remove a recipe; absent ids are a no-op
    pub fn delete(&mut self, id: &RecipeId) -> Option<Recipe> {
        let removed = self.entities.remove(id)?;
        self.ids.retain(|other| other != id);
        self.revision += 1;
        debug!("delete recipe {}", id);
        Some(removed)
    }

    /// Flip the favorite flag and return its new value
    pub fn toggle_favorite(&mut self, id: &RecipeId) -> DomainResult<bool> {
        let recipe = self
            .entities
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("recipe {}", id)))?;
        recipe.favorite = !recipe.favorite;
        self.revision += 1;
        debug!("toggle favorite {} -> {}", id, recipe.favorite);
        Ok(recipe.favorite)
    }

    /// All records in presentation order
    pub fn list_all(&self) -> Vec<Recipe> {
        self.iter().cloned().collect()
    }

    pub fn get_by_id(&self, id: &RecipeId) -> Option<&Recipe> {
        self.entities.get(id)
    }

    fn position_for(&self, recipe: &Recipe) -> usize {
        self.ids.partition_point(|other| {
            self.entities
                .get(other)
                .is_some_and(|existing| presentation_order(existing, recipe) == Ordering::Less)
        })
    }

    fn position_for_id(&self, id: &RecipeId) -> usize {
        match self.entities.get(id) {
            Some(recipe) => self.position_for(recipe),
            None => self.ids.len(),
        }
    }

    fn resort(&mut self) {
        let entities = &self.entities;
        self.ids.sort_by(|a, b| match (entities.get(a), entities.get(b)) {
            (Some(a), Some(b)) => presentation_order(a, b),
            _ => a.cmp(b),
        });
    }
}

impl Repository<Recipe> for RecordStore {
    type Input = RecipeInput;
    type Changes = RecipeChanges;

    fn create(&mut self, input: RecipeInput) -> RecipeId {
        RecordStore::create(self, input)
    }

    fn find_by_id(&self, id: &RecipeId) -> Option<&Recipe> {
        self.get_by_id(id)
    }

    fn list(&self) -> Vec<Recipe> {
        self.list_all()
    }

    fn update(&mut self, id: &RecipeId, changes: RecipeChanges) -> DomainResult<&Recipe> {
        RecordStore::update(self, id, changes)
    }

    fn delete(&mut self, id: &RecipeId) -> Option<Recipe> {
        RecordStore::delete(self, id)
    }
}
