//! Recipe Entity
//!
//! A single catalog record. Identity and creation time are assigned by the
//! record store and never change afterwards.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;
use super::entity::{DomainError, Entity};

/// Opaque recipe identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecipeId(String);

impl RecipeId {
    /// Fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RecipeId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl TryFrom<String> for RecipeId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(DomainError::InvalidInput("empty recipe id".to_string()));
        }
        Ok(Self(value))
    }
}

impl From<RecipeId> for String {
    fn from(id: RecipeId) -> Self {
        id.0
    }
}

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub category: Category,
    #[serde(default)]
    pub favorite: bool,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeInput {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image_url: Option<String>,
    pub category: Category,
}

/// Partial update; `None` leaves a field untouched.
///
/// `image_url: Some(None)` clears the image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeChanges {
    pub name: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<String>,
    pub image_url: Option<Option<String>>,
    pub category: Option<Category>,
}

impl RecipeChanges {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Edit forms submit every field at once
impl From<RecipeInput> for RecipeChanges {
    fn from(input: RecipeInput) -> Self {
        Self {
            name: Some(input.name),
            ingredients: Some(input.ingredients),
            instructions: Some(input.instructions),
            image_url: Some(input.image_url),
            category: Some(input.category),
        }
    }
}

impl Recipe {
    /// Build a fresh, non-favorite recipe from caller input
    pub fn new(id: RecipeId, input: RecipeInput, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            ingredients: input.ingredients,
            instructions: input.instructions,
            image_url: input.image_url,
            category: input.category,
            favorite: false,
            created_at,
        }
    }

    /// Overwrite the fields present in `changes`
    pub fn apply(&mut self, changes: RecipeChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(ingredients) = changes.ingredients {
            self.ingredients = ingredients;
        }
        if let Some(instructions) = changes.instructions {
            self.instructions = instructions;
        }
        if let Some(image_url) = changes.image_url {
            self.image_url = image_url;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
    }

    /// Lower-cased text searched by the free-text filter
    pub fn haystack(&self) -> String {
        std::iter::once(self.name.as_str())
            .chain(std::iter::once(self.instructions.as_str()))
            .chain(self.ingredients.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// First `limit` ingredients joined for card display, with an ellipsis if truncated
    pub fn ingredient_preview(&self, limit: usize) -> String {
        let mut preview = self
            .ingredients
            .iter()
            .take(limit)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        if self.ingredients.len() > limit {
            preview.push('…');
        }
        preview
    }
}

impl Entity for Recipe {
    type Id = RecipeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
