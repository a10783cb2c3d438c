//! Filter Bar Component
//!
//! Search text, category, favorites-only and reset.

use leptos::prelude::*;
use recipe_core::CategoryFilter;

use super::CategorySelect;
use crate::context::use_app_context;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let filters = Memo::new(move |_| ctx.filters());

    view! {
        <div class="filter-bar">
            <div class="filter-inputs">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search by name or ingredient…"
                    prop:value=move || filters.get().search
                    on:input=move |ev| ctx.set_search(event_target_value(&ev))
                />
                <CategorySelect
                    value=Signal::derive(move || filters.get().category.to_string())
                    options=CategoryFilter::options().map(|option| option.as_str()).collect()
                    on_change=move |label: String| {
                        if let Ok(category) = label.parse::<CategoryFilter>() {
                            ctx.set_category(category);
                        }
                    }
                />
            </div>
            <div class="filter-toggles">
                <label class="favorites-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || filters.get().favorites_only
                        on:change=move |ev| ctx.set_favorites_only(event_target_checked(&ev))
                    />
                    <span>"Favorites only"</span>
                </label>
                <button class="secondary-btn" on:click=move |_| ctx.reset_filters()>
                    "Reset"
                </button>
            </div>
        </div>
    }
}
