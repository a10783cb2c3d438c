//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for record access.

use crate::domain::{DomainResult, Entity};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type. Identity is always assigned by the
/// repository, never by the caller.
pub trait Repository<T: Entity> {
    /// Fields supplied by the caller on creation
    type Input;
    /// Partial update payload
    type Changes;

    /// Create a new entity and return its identifier
    fn create(&mut self, input: Self::Input) -> T::Id;

    /// Find entity by ID
    fn find_by_id(&self, id: &T::Id) -> Option<&T>;

    /// List all entities in presentation order
    fn list(&self) -> Vec<T>;

    /// Update an existing entity
    fn update(&mut self, id: &T::Id, changes: Self::Changes) -> DomainResult<&T>;

    /// Delete entity by ID, returning it if it existed
    fn delete(&mut self, id: &T::Id) -> Option<T>;
}
