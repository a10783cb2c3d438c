//! Recipe Card Component
//!
//! One recipe in the grid: image, summary, favorite toggle, edit and delete.

use leptos::prelude::*;
use recipe_core::Recipe;

use super::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::{store_open_form, use_app_store, FormMode};

/// Ingredients listed on a card before truncating
const PREVIEW_INGREDIENTS: usize = 4;

#[component]
pub fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // Falls back to the placeholder if the image fails to load
    let (image_ok, set_image_ok) = signal(true);
    let image_url = recipe.image_url.clone();
    let image_alt = recipe.name.clone();

    let favorite_id = recipe.id.clone();
    let edit_id = recipe.id.clone();
    let delete_id = recipe.id.clone();
    let prompt = format!("Delete \"{}\"?", recipe.name);
    let preview = format!("Ingredients: {}", recipe.ingredient_preview(PREVIEW_INGREDIENTS));

    view! {
        <div class="recipe-card">
            <div class="recipe-image">
                {move || match (image_url.clone(), image_ok.get()) {
                    (Some(url), true) => view! {
                        <img src=url alt=image_alt.clone() on:error=move |_| set_image_ok.set(false) />
                    }.into_any(),
                    _ => view! { <div class="no-image">"No image"</div> }.into_any(),
                }}
            </div>

            <div class="recipe-body">
                <div class="recipe-heading">
                    <div>
                        <h3>{recipe.name.clone()}</h3>
                        <p class="recipe-category">{recipe.category.to_string()}</p>
                    </div>
                    <button
                        class=if recipe.favorite { "favorite-btn active" } else { "favorite-btn" }
                        title="Toggle favorite"
                        on:click=move |_| ctx.toggle_favorite(favorite_id.clone())
                    >
                        "★"
                    </button>
                </div>

                <p class="recipe-instructions">{recipe.instructions.clone()}</p>
                <div class="recipe-ingredients">{preview}</div>

                <div class="recipe-actions">
                    <button
                        class="primary-btn"
                        on:click=move |_| store_open_form(&store, FormMode::Edit(edit_id.clone()))
                    >
                        "Edit"
                    </button>
                    <DeleteConfirmButton
                        button_class="danger-btn"
                        prompt=prompt
                        on_confirm=Callback::new(move |_| ctx.delete(delete_id.clone()))
                    />
                </div>
            </div>
        </div>
    }
}
