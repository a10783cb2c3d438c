//! Application Context
//!
//! The session's `RecipeBook`, provided via Leptos Context API. Every write
//! goes through here so views re-derive after it.

use leptos::prelude::*;
use recipe_core::{
    CategoryFilter, FilterState, Recipe, RecipeBook, RecipeChanges, RecipeId, RecipeInput,
    StoragePersistence,
};

use crate::storage::LocalStorage;
use crate::store::{store_bump_book, store_track_book, AppStore};

pub type Book = RecipeBook<StoragePersistence<LocalStorage>>;

/// Handle to the book plus the store that announces its changes
#[derive(Clone, Copy)]
pub struct AppContext {
    book: StoredValue<Book>,
    store: AppStore,
}

impl AppContext {
    pub fn new(book: Book, store: AppStore) -> Self {
        Self {
            book: StoredValue::new(book),
            store,
        }
    }

    /// Run a write against the book, then notify views
    fn write<T>(&self, f: impl FnOnce(&mut Book) -> T) -> Option<T> {
        let out = self.book.try_update_value(f);
        store_bump_book(&self.store);
        out
    }

    fn read<T>(&self, f: impl FnOnce(&Book) -> T) -> T {
        store_track_book(&self.store);
        self.book.with_value(f)
    }

    // ========================
    // Writes
    // ========================

    pub fn create(&self, input: RecipeInput) -> Option<RecipeId> {
        self.write(|book| book.create(input))
    }

    pub fn update(&self, id: RecipeId, changes: RecipeChanges) {
        self.write(|book| book.update(&id, changes));
    }

    pub fn delete(&self, id: RecipeId) {
        self.write(|book| book.delete(&id));
    }

    pub fn toggle_favorite(&self, id: RecipeId) {
        self.write(|book| book.toggle_favorite(&id));
    }

    pub fn set_search(&self, text: String) {
        self.write(|book| book.set_search(text));
    }

    pub fn set_category(&self, category: CategoryFilter) {
        self.write(|book| book.set_category(category));
    }

    pub fn set_favorites_only(&self, favorites_only: bool) {
        self.write(|book| book.set_favorites_only(favorites_only));
    }

    pub fn reset_filters(&self) {
        self.write(|book| book.reset_filters());
    }

    // ========================
    // Reads (tracked)
    // ========================

    pub fn filters(&self) -> FilterState {
        self.read(|book| book.filters().clone())
    }

    pub fn visible_recipes(&self) -> Vec<Recipe> {
        store_track_book(&self.store);
        self.book
            .try_update_value(|book| book.visible_recipes())
            .unwrap_or_default()
    }

    /// Snapshot of one recipe, without subscribing (form prefill)
    pub fn recipe_untracked(&self, id: &RecipeId) -> Option<Recipe> {
        self.book.with_value(|book| book.get(id).cloned())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
