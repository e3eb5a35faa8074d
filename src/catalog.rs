// ABOUTME: Built-in ingredient catalog and free-text category classification
// ABOUTME: Provides the offline ingredient set and the ordered substring rule cascade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Ingredient Catalog
//!
//! A small offline catalog of staple ingredients with per-100g profiles,
//! plus the classification rules that map free-text category strings from
//! external sources into the closed [`IngredientCategory`] set.

use std::sync::LazyLock;

use crate::models::{Ingredient, IngredientCategory};

/// One classification rule: any term matching as a substring selects the category
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    /// Lowercase substrings that select this rule
    pub terms: &'static [&'static str],
    /// Category assigned on match
    pub category: IngredientCategory,
}

/// Ordered classification rules, first match wins
///
/// Terms cover English plus the Spanish strings `OpenFoodFacts` returns for
/// the default `es` locale. Order matters: earlier rules shadow later ones
/// for texts matching several terms.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        terms: &["cereal", "pasta", "rice", "arroz"],
        category: IngredientCategory::Grains,
    },
    CategoryRule {
        terms: &["meat", "carne", "chicken", "pollo", "poultry", "fish", "pescado"],
        category: IngredientCategory::Meats,
    },
    CategoryRule {
        terms: &["vegetable", "verdura", "vegetal", "hortaliza"],
        category: IngredientCategory::Vegetables,
    },
    CategoryRule {
        terms: &["fruit", "fruta"],
        category: IngredientCategory::Fruits,
    },
    CategoryRule {
        terms: &["milk", "leche", "cheese", "queso", "yogur"],
        category: IngredientCategory::Dairy,
    },
];

/// Classify a free-text category string
///
/// Case-insensitive substring matching against [`CATEGORY_RULES`] in order;
/// unmatched text falls back to [`IngredientCategory::Other`].
#[must_use]
pub fn classify(text: &str) -> IngredientCategory {
    let normalized = text.to_lowercase();
    for rule in CATEGORY_RULES {
        if rule.terms.iter().any(|term| normalized.contains(term)) {
            return rule.category;
        }
    }
    IngredientCategory::Other
}

/// Built-in staple ingredients available without network access
///
/// Profiles are per 100 g, rounded reference values for the raw foods.
static BUILTIN_INGREDIENTS: LazyLock<Vec<Ingredient>> = LazyLock::new(|| {
    vec![
        Ingredient::new("1", "Rice", IngredientCategory::Grains, 130.0, 2.7, 0.3, 28.0),
        Ingredient::new("2", "Chicken", IngredientCategory::Meats, 165.0, 31.0, 3.6, 0.0),
        Ingredient::new("3", "Tomato", IngredientCategory::Vegetables, 18.0, 0.9, 0.2, 3.9),
        Ingredient::new("4", "Onion", IngredientCategory::Vegetables, 40.0, 1.1, 0.1, 9.3),
        Ingredient::new("5", "Lettuce", IngredientCategory::Vegetables, 15.0, 1.4, 0.2, 2.9),
        Ingredient::new("6", "Egg", IngredientCategory::Other, 155.0, 12.6, 10.6, 1.1),
        Ingredient::new("7", "Milk", IngredientCategory::Dairy, 42.0, 3.4, 1.0, 5.0),
        Ingredient::new("8", "Cheese", IngredientCategory::Dairy, 350.0, 25.0, 27.0, 2.5),
        Ingredient::new("9", "Apple", IngredientCategory::Fruits, 52.0, 0.3, 0.2, 14.0),
        Ingredient::new("10", "Banana", IngredientCategory::Fruits, 89.0, 1.1, 0.3, 23.0),
    ]
});

/// All built-in ingredients
#[must_use]
pub fn builtin_ingredients() -> &'static [Ingredient] {
    &BUILTIN_INGREDIENTS
}

/// Look up a built-in ingredient by id
#[must_use]
pub fn builtin_by_id(id: &str) -> Option<&'static Ingredient> {
    BUILTIN_INGREDIENTS.iter().find(|i| i.id == id)
}

/// Filter ingredients by case-insensitive name substring
///
/// An empty query matches everything, mirroring an empty search box.
#[must_use]
pub fn filter_by_name(items: &[Ingredient], query: &str) -> Vec<Ingredient> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|i| i.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("Fresh FRUIT snack"), IngredientCategory::Fruits);
        assert_eq!(classify("Leches fermentadas"), IngredientCategory::Dairy);
    }

    #[test]
    fn test_classify_first_rule_wins() {
        // "arroz con pollo" matches both Grains and Meats terms; Grains is first.
        assert_eq!(classify("arroz con pollo"), IngredientCategory::Grains);
    }

    #[test]
    fn test_classify_defaults_to_other() {
        assert_eq!(classify("snacks, sweets"), IngredientCategory::Other);
        assert_eq!(classify(""), IngredientCategory::Other);
    }

    #[test]
    fn test_builtin_catalog_integrity() {
        let all = builtin_ingredients();
        assert_eq!(all.len(), 10);

        let apple = builtin_by_id("9").unwrap();
        assert_eq!(apple.name, "Apple");
        assert_eq!(apple.category, IngredientCategory::Fruits);
        assert!((apple.calories - 52.0).abs() < f64::EPSILON);

        assert!(builtin_by_id("11").is_none());
    }

    #[test]
    fn test_filter_by_name() {
        let hits = filter_by_name(builtin_ingredients(), "to");
        let names: Vec<&str> = hits.iter().map(|i| i.name.as_str()).collect();
        assert!(names.contains(&"Tomato"));
        assert!(!names.contains(&"Rice"));

        assert_eq!(filter_by_name(builtin_ingredients(), "").len(), 10);
    }
}
