//! View Query
//!
//! Owns the filter state and derives the visible recipe list from
//! (record store, filters). The last result is cached and reused until the
//! store version or the filters change.

use log::debug;

use crate::domain::{CategoryFilter, FilterState, Recipe};
use crate::repository::RecordStore;

/// Inputs the cached list was computed from.
///
/// Search text is keyed by its needle, so whitespace or case edits that
/// filter identically reuse the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    generation: u64,
    revision: u64,
    needle: String,
    category: CategoryFilter,
    favorites_only: bool,
}

#[derive(Debug)]
struct CachedView {
    key: CacheKey,
    recipes: Vec<Recipe>,
}

/// Filter criteria plus the memoized visible list
#[derive(Debug, Default)]
pub struct ViewQuery {
    filters: FilterState,
    cache: Option<CachedView>,
    recomputations: u64,
}

impl ViewQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filters.search = text.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filters.category = category;
    }

    pub fn set_favorites_only(&mut self, favorites_only: bool) {
        self.filters.favorites_only = favorites_only;
    }

    /// Restore `{search: "", category: All, favorites_only: false}`
    pub fn reset_filters(&mut self) {
        self.filters = FilterState::default();
    }

    /// Number of filter passes run so far
    pub fn recompute_count(&self) -> u64 {
        self.recomputations
    }

    /// Records passing every filter, in store order.
    ///
    /// Runs the filter pass only when the store version or the filters
    /// differ from the previous call.
    pub fn visible_recipes(&mut self, store: &RecordStore) -> Vec<Recipe> {
        let key = CacheKey {
            generation: store.generation(),
            revision: store.revision(),
            needle: self.filters.needle(),
            category: self.filters.category,
            favorites_only: self.filters.favorites_only,
        };

        match &self.cache {
            Some(cached) if cached.key == key => cached.recipes.clone(),
            _ => {
                let recipes = self.run_filters(store, &key.needle);
                self.cache = Some(CachedView {
                    key,
                    recipes: recipes.clone(),
                });
                recipes
            }
        }
    }

    fn run_filters(&mut self, store: &RecordStore, needle: &str) -> Vec<Recipe> {
        self.recomputations += 1;
        let recipes: Vec<Recipe> = store
            .iter()
            .filter(|recipe| self.filters.matches(recipe, needle))
            .cloned()
            .collect();
        debug!(
            "recomputed visible recipes: {} of {} (pass {})",
            recipes.len(),
            store.len(),
            self.recomputations
        );
        recipes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, RecipeInput};

    fn input(name: &str, category: Category, ingredients: &[&str]) -> RecipeInput {
        RecipeInput {
            name: name.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: "Prepare and serve".to_string(),
            image_url: None,
            category,
        }
    }

    /// Toast (Breakfast, favorite) and Cake (Dessert)
    fn toast_and_cake() -> RecordStore {
        let mut store = RecordStore::new();
        let toast = store.create(input("Toast", Category::Breakfast, &["bread", "butter"]));
        store.create(input("Cake", Category::Dessert, &["flour", "sugar"]));
        store.toggle_favorite(&toast).unwrap();
        store
    }

    fn visible_names(query: &mut ViewQuery, store: &RecordStore) -> Vec<String> {
        query.visible_recipes(store).into_iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_default_filters_return_list_all() {
        let store = toast_and_cake();
        let mut query = ViewQuery::new();
        assert_eq!(query.visible_recipes(&store), store.list_all());
    }

    #[test]
    fn test_favorites_only() {
        let store = toast_and_cake();
        let mut query = ViewQuery::new();
        query.set_favorites_only(true);
        assert_eq!(visible_names(&mut query, &store), ["Toast"]);
    }

    #[test]
    fn test_category_filter() {
        let store = toast_and_cake();
        let mut query = ViewQuery::new();
        query.set_category(CategoryFilter::Only(Category::Dessert));
        assert_eq!(visible_names(&mut query, &store), ["Cake"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let store = toast_and_cake();
        let mut query = ViewQuery::new();
        query.set_search("toas");
        assert_eq!(visible_names(&mut query, &store), ["Toast"]);
        query.set_search("  SUGAR ");
        assert_eq!(visible_names(&mut query, &store), ["Cake"]);
        query.set_search("prepare");
        assert_eq!(visible_names(&mut query, &store), ["Cake", "Toast"]);
        query.set_search("   ");
        assert_eq!(visible_names(&mut query, &store), ["Cake", "Toast"]);
    }

    #[test]
    fn test_reset_filters_restores_defaults() {
        let store = toast_and_cake();
        let mut query = ViewQuery::new();
        query.set_search("zzz");
        query.set_category(CategoryFilter::Only(Category::Drink));
        query.set_favorites_only(true);
        assert!(query.visible_recipes(&store).is_empty());

        query.reset_filters();
        assert!(query.filters().is_default());
        assert_eq!(query.filters().category, CategoryFilter::All);
        assert_eq!(query.visible_recipes(&store), store.list_all());
    }

    #[test]
    fn test_unchanged_inputs_skip_recompute() {
        let store = toast_and_cake();
        let mut query = ViewQuery::new();
        let first = query.visible_recipes(&store);
        let second = query.visible_recipes(&store);
        assert_eq!(first, second);
        assert_eq!(query.recompute_count(), 1);

        // Writing the same value back leaves the key unchanged
        query.set_search("");
        query.visible_recipes(&store);
        assert_eq!(query.recompute_count(), 1);
    }

    #[test]
    fn test_equivalent_search_text_reuses_cache() {
        let store = toast_and_cake();
        let mut query = ViewQuery::new();
        query.set_search("toas");
        assert_eq!(visible_names(&mut query, &store), ["Toast"]);
        query.set_search("  TOAS ");
        assert_eq!(visible_names(&mut query, &store), ["Toast"]);
        assert_eq!(query.recompute_count(), 1);
        assert_eq!(query.filters().search, "  TOAS ");

        query.set_search("toast");
        query.visible_recipes(&store);
        assert_eq!(query.recompute_count(), 2);
    }

    #[test]
    fn test_filter_change_recomputes() {
        let store = toast_and_cake();
        let mut query = ViewQuery::new();
        query.visible_recipes(&store);
        query.set_favorites_only(true);
        query.visible_recipes(&store);
        assert_eq!(query.recompute_count(), 2);
    }

    #[test]
    fn test_store_mutation_recomputes() {
        let mut store = toast_and_cake();
        let mut query = ViewQuery::new();
        assert_eq!(query.visible_recipes(&store).len(), 2);

        store.create(input("Lemonade", Category::Drink, &["lemon"]));
        assert_eq!(visible_names(&mut query, &store), ["Cake", "Lemonade", "Toast"]);
        assert_eq!(query.recompute_count(), 2);
    }

    #[test]
    fn test_other_store_instance_is_not_served_from_cache() {
        let store = toast_and_cake();
        let empty = RecordStore::new();
        let mut query = ViewQuery::new();
        assert_eq!(query.visible_recipes(&store).len(), 2);
        assert!(query.visible_recipes(&empty).is_empty());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn category() -> impl Strategy<Value = Category> {
            prop::sample::select(Category::ALL.to_vec())
        }

        proptest! {
            #[test]
            fn prop_visible_is_intersection_in_store_order(
                records in prop::collection::vec(("[a-d]{1,4}", category(), any::<bool>()), 0..16),
                search in "[a-d ]{0,3}",
                wanted in prop::option::of(category()),
                favorites_only in any::<bool>(),
            ) {
                let mut store = RecordStore::new();
                for (name, category, favorite) in &records {
                    let id = store.create(input(name, *category, &["x"]));
                    if *favorite {
                        store.toggle_favorite(&id).unwrap();
                    }
                }

                let mut query = ViewQuery::new();
                query.set_search(search.clone());
                query.set_category(wanted.map_or(CategoryFilter::All, CategoryFilter::Only));
                query.set_favorites_only(favorites_only);

                let needle = search.trim().to_lowercase();
                let expected: Vec<Recipe> = store
                    .list_all()
                    .into_iter()
                    .filter(|r| !favorites_only || r.favorite)
                    .filter(|r| wanted.map_or(true, |c| r.category == c))
                    .filter(|r| r.haystack().contains(&needle))
                    .collect();
                prop_assert_eq!(query.visible_recipes(&store), expected);
            }
        }
    }
}
