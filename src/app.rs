//! Recipe Book App
//!
//! Header with filters, the recipe grid and the form modal.

use leptos::prelude::*;
use reactive_stores::Store;
use recipe_core::{BookConfig, RecipeBook, StoragePersistence};

use crate::components::{FilterBar, RecipeCard, RecipeFormModal};
use crate::context::AppContext;
use crate::storage::LocalStorage;
use crate::store::{store_form, store_open_form, AppState, FormMode};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let config = BookConfig::default();
    let book = RecipeBook::open(StoragePersistence::with_config(LocalStorage, &config));
    let ctx = AppContext::new(book, store);
    provide_context(ctx);

    let recipes = Memo::new(move |_| ctx.visible_recipes());

    view! {
        <div class="app-layout">
            <header class="app-header">
                <div class="header-row">
                    <h1>"🍳 Recipe Book"</h1>
                    <button
                        class="primary-btn"
                        on:click=move |_| store_open_form(&store, FormMode::Create)
                    >
                        "+ Add Recipe"
                    </button>
                </div>
                <FilterBar />
            </header>

            <main class="main-content">
                <Show
                    when=move || !recipes.get().is_empty()
                    fallback=|| view! { <p class="empty-state">"No recipes yet. Add your first one!"</p> }
                >
                    <div class="recipe-grid">
                        {move || recipes.get().into_iter().map(|recipe| view! {
                            <RecipeCard recipe=recipe />
                        }).collect_view()}
                    </div>
                </Show>
            </main>

            {move || store_form(&store).map(|mode| view! { <RecipeFormModal mode=mode /> })}
        </div>
    }
}
