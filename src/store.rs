//! Global UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Recipe data
//! itself lives in the `RecipeBook`; this store only carries what the view
//! layer needs to react to.

use leptos::prelude::*;
use reactive_stores::Store;
use recipe_core::RecipeId;

/// Which form the modal is showing
#[derive(Clone, Debug, PartialEq)]
pub enum FormMode {
    Create,
    Edit(RecipeId),
}

/// UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Open recipe form, if any
    pub form: Option<FormMode>,
    /// Version counter for book writes (increment to re-derive views)
    pub book_version: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Current form mode (tracked)
pub fn store_form(store: &AppStore) -> Option<FormMode> {
    store.form().get()
}

pub fn store_open_form(store: &AppStore, mode: FormMode) {
    store.form().set(Some(mode));
}

pub fn store_close_form(store: &AppStore) {
    store.form().set(None);
}

/// Subscribe the current reactive scope to book writes
pub fn store_track_book(store: &AppStore) {
    store.book_version().track();
}

/// Notify views that the book changed
pub fn store_bump_book(store: &AppStore) {
    *store.book_version().write() += 1;
}
