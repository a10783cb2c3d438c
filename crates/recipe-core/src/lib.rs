//! Recipe Book Core
//!
//! Layered architecture:
//! - domain: Recipe entity, categories, filter state and errors
//! - repository: Normalized record store behind the `Repository` trait
//! - query: Memoized filter pipeline producing the visible list
//! - persistence: Snapshot format and key-value storage bridge
//! - validation: Form-level pre-checks, kept outside the store
//! - book: Session context object wiring everything together

pub mod book;
pub mod config;
pub mod domain;
pub mod persistence;
pub mod query;
pub mod repository;
pub mod validation;

pub use book::RecipeBook;
pub use config::BookConfig;
pub use domain::{
    Category, CategoryFilter, DomainError, DomainResult, Entity, FilterState, ParseCategoryError,
    Recipe, RecipeChanges, RecipeId, RecipeInput,
};
pub use persistence::{
    KeyValueStore, MemoryStore, PersistenceBridge, Snapshot, StorageError, StoragePersistence,
    STORAGE_KEY,
};
pub use query::ViewQuery;
pub use repository::{RecordStore, Repository};
pub use validation::{parse_ingredients, RecipeDraft, ValidationError};
