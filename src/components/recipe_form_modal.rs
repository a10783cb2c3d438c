//! Recipe Form Modal Component
//!
//! Create/edit form. Runs draft validation before touching the book and
//! alerts the first problem found.

use leptos::prelude::*;
use recipe_core::{Category, RecipeDraft};

use super::CategorySelect;
use crate::context::use_app_context;
use crate::store::{store_close_form, use_app_store, FormMode};

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn RecipeFormModal(mode: FormMode) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let editing = match mode {
        FormMode::Create => None,
        FormMode::Edit(id) => Some(id),
    };
    let is_create = editing.is_none();
    let draft = editing
        .as_ref()
        .and_then(|id| ctx.recipe_untracked(id))
        .map(|recipe| RecipeDraft::from(&recipe))
        .unwrap_or_default();

    let (name, set_name) = signal(draft.name);
    let (ingredients, set_ingredients) = signal(draft.ingredients);
    let (instructions, set_instructions) = signal(draft.instructions);
    let (image_url, set_image_url) = signal(draft.image_url);
    let (category, set_category) = signal(draft.category);

    let close = move || store_close_form(&store);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = RecipeDraft {
            name: name.get(),
            ingredients: ingredients.get(),
            instructions: instructions.get(),
            image_url: image_url.get(),
            category: category.get(),
        };
        match draft.validate() {
            Err(e) => alert(&e.to_string()),
            Ok(input) => {
                match &editing {
                    None => {
                        ctx.create(input);
                    }
                    Some(id) => ctx.update(id.clone(), input.into()),
                }
                close();
            }
        }
    };

    view! {
        <div class="modal-root">
            <div class="modal-backdrop" on:click=move |_| close()></div>
            <form class="modal" on:submit=submit>
                <div class="modal-header">
                    <h2>{if is_create { "Add Recipe" } else { "Edit Recipe" }}</h2>
                    <button type="button" class="secondary-btn" on:click=move |_| close()>
                        "Close"
                    </button>
                </div>

                <div class="form-grid">
                    <label class="form-field">
                        <span>"Name *"</span>
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span>"Category *"</span>
                        <CategorySelect
                            value=Signal::derive(move || category.get().to_string())
                            options=Category::ALL.iter().map(Category::as_str).collect()
                            on_change=move |label: String| {
                                if let Ok(parsed) = label.parse::<Category>() {
                                    set_category.set(parsed);
                                }
                            }
                        />
                    </label>
                    <label class="form-field">
                        <span>"Ingredients * (one per line or comma-separated)"</span>
                        <textarea
                            rows="4"
                            prop:value=move || ingredients.get()
                            on:input=move |ev| set_ingredients.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="form-field">
                        <span>"Instructions *"</span>
                        <textarea
                            rows="6"
                            prop:value=move || instructions.get()
                            on:input=move |ev| set_instructions.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="form-field">
                        <span>"Image URL (optional)"</span>
                        <input
                            type="text"
                            placeholder="https://…"
                            prop:value=move || image_url.get()
                            on:input=move |ev| set_image_url.set(event_target_value(&ev))
                        />
                    </label>
                </div>

                <div class="modal-footer">
                    <button type="submit" class="primary-btn">
                        {if is_create { "Create" } else { "Save changes" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
