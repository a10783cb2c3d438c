//! UI Components
//!
//! Reusable Leptos components.

mod category_select;
mod delete_confirm_button;
mod filter_bar;
mod recipe_card;
mod recipe_form_modal;

pub use category_select::CategorySelect;
pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_bar::FilterBar;
pub use recipe_card::RecipeCard;
pub use recipe_form_modal::RecipeFormModal;
