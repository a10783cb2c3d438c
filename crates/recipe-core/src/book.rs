//! Recipe Book
//!
//! Session context object: one record store, one view query and one
//! persistence bridge, constructed once at startup and handed to every
//! consumer. Record mutations are saved as soon as they take effect;
//! filter changes are never persisted.

use log::{debug, info};

use crate::domain::{CategoryFilter, FilterState, Recipe, RecipeChanges, RecipeId, RecipeInput};
use crate::persistence::{PersistenceBridge, Snapshot};
use crate::query::ViewQuery;
use crate::repository::RecordStore;

pub struct RecipeBook<P> {
    records: RecordStore,
    view: ViewQuery,
    bridge: P,
}

impl<P: PersistenceBridge> RecipeBook<P> {
    /// Seed from the bridge's saved snapshot, or start empty
    pub fn open(bridge: P) -> Self {
        let records = bridge
            .load()
            .map(Snapshot::into_store)
            .unwrap_or_default();
        info!("recipe book opened with {} recipes", records.len());
        Self {
            records,
            view: ViewQuery::new(),
            bridge,
        }
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    // ========================
    // Record operations
    // ========================

    pub fn create(&mut self, input: RecipeInput) -> RecipeId {
        let id = self.records.create(input);
        self.persist();
        id
    }

    /// Apply changes; unknown ids are ignored
    pub fn update(&mut self, id: &RecipeId, changes: RecipeChanges) {
        let revision = self.records.revision();
        if let Err(e) = self.records.update(id, changes) {
            debug!("update skipped: {}", e);
            return;
        }
        if self.records.revision() != revision {
            self.persist();
        }
    }

    /// Remove a recipe; unknown ids are ignored
    pub fn delete(&mut self, id: &RecipeId) {
        match self.records.delete(id) {
            Some(_) => self.persist(),
            None => debug!("delete skipped: recipe {} not found", id),
        }
    }

    /// Flip the favorite flag; unknown ids are ignored
    pub fn toggle_favorite(&mut self, id: &RecipeId) {
        match self.records.toggle_favorite(id) {
            Ok(_) => self.persist(),
            Err(e) => debug!("toggle skipped: {}", e),
        }
    }

    pub fn get(&self, id: &RecipeId) -> Option<&Recipe> {
        self.records.get_by_id(id)
    }

    pub fn list_all(&self) -> Vec<Recipe> {
        self.records.list_all()
    }

    // ========================
    // Filter operations
    // ========================

    pub fn filters(&self) -> &FilterState {
        self.view.filters()
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.view.set_search(text);
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.view.set_category(category);
    }

    pub fn set_favorites_only(&mut self, favorites_only: bool) {
        self.view.set_favorites_only(favorites_only);
    }

    pub fn reset_filters(&mut self) {
        self.view.reset_filters();
    }

    pub fn visible_recipes(&mut self) -> Vec<Recipe> {
        self.view.visible_recipes(&self.records)
    }

    /// Filter passes run so far
    pub fn recompute_count(&self) -> u64 {
        self.view.recompute_count()
    }

    fn persist(&self) {
        self.bridge.save(&Snapshot::capture(&self.records));
    }
}

impl<P> std::fmt::Debug for RecipeBook<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeBook")
            .field("records", &self.records.len())
            .field("filters", self.view.filters())
            .finish_non_exhaustive()
    }
}
