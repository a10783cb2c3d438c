//! Filter State
//!
//! The single set of criteria the visible list is derived from.

use super::category::CategoryFilter;
use super::recipe::Recipe;

/// Current search, category and favorites criteria
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterState {
    pub search: String,
    pub category: CategoryFilter,
    pub favorites_only: bool,
}

impl FilterState {
    /// Trimmed, lower-cased search text; empty matches everything
    pub fn needle(&self) -> String {
        self.search.trim().to_lowercase()
    }

    /// Whether the defaults are in effect
    pub fn is_default(&self) -> bool {
        self == &Self::default()
    }

    /// Apply favorites, then category, then search.
    ///
    /// `needle` must come from [`FilterState::needle`] so it is computed
    /// once per pass rather than once per record.
    pub fn matches(&self, recipe: &Recipe, needle: &str) -> bool {
        if self.favorites_only && !recipe.favorite {
            return false;
        }
        if !self.category.admits(recipe.category) {
            return false;
        }
        needle.is_empty() || recipe.haystack().contains(needle)
    }
}
