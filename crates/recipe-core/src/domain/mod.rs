//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has no storage or UI dependencies.

mod category;
mod entity;
mod filter;
mod recipe;

pub use category::{Category, CategoryFilter, ParseCategoryError};
pub use entity::{DomainError, DomainResult, Entity};
pub use filter::FilterState;
pub use recipe::{Recipe, RecipeChanges, RecipeId, RecipeInput};
