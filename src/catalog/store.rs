use std::collections::HashMap;

use crate::models::{Ingredient, Money};

/// The board of known ingredients, keyed by lowercase name.
pub struct IngredientCatalog {
    ingredients: HashMap<String, Ingredient>,
}

impl IngredientCatalog {
    /// Create a catalog from a list of ingredients.
    ///
    /// Deduplicates by lowercase name (last occurrence wins).
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        let mut map = HashMap::new();
        for ingredient in ingredients {
            map.insert(ingredient.key(), ingredient);
        }
        Self { ingredients: map }
    }

    /// The default menu board used when no catalog file exists.
    pub fn builtin() -> Self {
        Self::new(vec![
            Ingredient::new("Lettuce", Money::from_cents(50)),
            Ingredient::new("Tomato", Money::from_cents(75)),
            Ingredient::new("Cheese", Money::from_cents(150)),
            Ingredient::new("Bacon", Money::from_cents(200)),
            Ingredient::new("Avocado", Money::from_cents(200)),
            Ingredient::new("Spinach", Money::from_cents(100)),
            Ingredient::new("Onion", Money::from_cents(40)),
            Ingredient::new("Pickles", Money::from_cents(60)),
            Ingredient::new("Egg", Money::from_cents(125)),
        ])
    }

    /// Get an ingredient by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.get(&name.to_lowercase())
    }

    /// All ingredients ordered by name.
    pub fn all_sorted(&self) -> Vec<&Ingredient> {
        let mut all: Vec<&Ingredient> = self.ingredients.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// Snapshot of the catalog for serialization.
    pub fn to_ingredients(&self) -> Vec<Ingredient> {
        self.ingredients.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_is_case_insensitive() {
        let catalog = IngredientCatalog::builtin();
        assert!(catalog.get("lettuce").is_some());
        assert!(catalog.get("LETTUCE").is_some());
        assert!(catalog.get("Lettuce").is_some());
        assert!(catalog.get("truffle").is_none());
    }

    #[test]
    fn test_dedupe_last_wins() {
        let catalog = IngredientCatalog::new(vec![
            Ingredient::new("Cheese", Money::from_cents(150)),
            Ingredient::new("cheese", Money::from_cents(175)),
        ]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Cheese").unwrap().price, Money::from_cents(175));
    }

    #[test]
    fn test_builtin_carries_the_standard_toppings() {
        let catalog = IngredientCatalog::builtin();
        for name in ["Lettuce", "Tomato", "Cheese", "Bacon", "Avocado", "Spinach"] {
            assert!(catalog.get(name).is_some(), "missing {}", name);
        }
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_all_sorted_orders_by_name() {
        let catalog = IngredientCatalog::builtin();
        let names: Vec<&str> = catalog.all_sorted().iter().map(|i| i.name.as_str()).collect();

        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
