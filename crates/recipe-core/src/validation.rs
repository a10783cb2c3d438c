//! Form Validation
//!
//! Pre-check layer between raw form text and the store. The store itself
//! accepts whatever it is given; forms run [`RecipeDraft::validate`] first.

use thiserror::Error;

use crate::domain::{Category, Recipe, RecipeInput};

/// Reason a draft cannot be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    MissingName,
    #[error("At least one ingredient is required")]
    MissingIngredients,
    #[error("Instructions are required")]
    MissingInstructions,
}

/// Split ingredient text on newlines and commas, dropping blank entries
pub fn parse_ingredients(text: &str) -> Vec<String> {
    text.split(['\n', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Raw, unvalidated form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub name: String,
    /// One ingredient per line or comma-separated
    pub ingredients: String,
    pub instructions: String,
    pub image_url: String,
    pub category: Category,
}

impl From<&Recipe> for RecipeDraft {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.join("\n"),
            instructions: recipe.instructions.clone(),
            image_url: recipe.image_url.clone().unwrap_or_default(),
            category: recipe.category,
        }
    }
}

impl RecipeDraft {
    /// Check required fields in form order and produce trimmed input
    pub fn validate(&self) -> Result<RecipeInput, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let ingredients = parse_ingredients(&self.ingredients);
        if ingredients.is_empty() {
            return Err(ValidationError::MissingIngredients);
        }
        let instructions = self.instructions.trim();
        if instructions.is_empty() {
            return Err(ValidationError::MissingInstructions);
        }
        let image_url = Some(self.image_url.trim())
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        Ok(RecipeInput {
            name: name.to_string(),
            ingredients,
            instructions: instructions.to_string(),
            image_url,
            category: self.category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> RecipeDraft {
        RecipeDraft {
            name: "  Pasta ".to_string(),
            ingredients: "pasta\r\n sauce ,, basil\n\n".to_string(),
            instructions: " Boil and mix ".to_string(),
            image_url: "   ".to_string(),
            category: Category::MainCourse,
        }
    }

    #[test]
    fn test_parse_ingredients() {
        assert_eq!(parse_ingredients("a\nb, c\r\nd"), ["a", "b", "c", "d"]);
        assert!(parse_ingredients(" ,\n ").is_empty());
    }

    #[test]
    fn test_validate_trims_everything() {
        let input = draft().validate().unwrap();
        assert_eq!(input.name, "Pasta");
        assert_eq!(input.ingredients, ["pasta", "sauce", "basil"]);
        assert_eq!(input.instructions, "Boil and mix");
        assert_eq!(input.image_url, None);
    }

    #[test]
    fn test_validation_order() {
        let empty = RecipeDraft::default();
        assert_eq!(empty.validate(), Err(ValidationError::MissingName));

        let mut partial = RecipeDraft {
            name: "Soup".to_string(),
            ..Default::default()
        };
        assert_eq!(partial.validate(), Err(ValidationError::MissingIngredients));
        partial.ingredients = "water".to_string();
        assert_eq!(partial.validate(), Err(ValidationError::MissingInstructions));
        assert_eq!(
            ValidationError::MissingInstructions.to_string(),
            "Instructions are required"
        );
    }

    #[test]
    fn test_draft_from_existing_round_trips() {
        let mut input = draft().validate().unwrap();
        input.image_url = Some("https://img/pasta.png".to_string());
        let recipe = Recipe::new("r1".parse().unwrap(), input.clone(), chrono::Utc::now());

        let prefilled = RecipeDraft::from(&recipe);
        assert_eq!(prefilled.ingredients, "pasta\nsauce\nbasil");
        assert_eq!(prefilled.validate(), Ok(input));
    }
}
