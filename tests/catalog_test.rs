// ABOUTME: Integration tests for the built-in catalog and category classification
// ABOUTME: Covers rule ordering, case handling, and catalog data integrity
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Tests for the catalog module including:
//! - Category classification order and fallback
//! - Built-in ingredient data integrity
//! - Name filtering

use recetario::catalog::{builtin_by_id, builtin_ingredients, classify, filter_by_name};
use recetario::models::IngredientCategory;

// ============================================================================
// Classification Tests
// ============================================================================

#[test]
fn test_first_matching_rule_wins() {
    // Contains both a grain term and a dairy term; grains are checked first.
    assert_eq!(classify("arroz con leche"), IngredientCategory::Grains);
    // Contains both a meat term and a vegetable term; meats come first.
    assert_eq!(classify("pollo con verduras"), IngredientCategory::Meats);
}

#[test]
fn test_classification_is_case_insensitive() {
    assert_eq!(classify("FRUTA de temporada"), IngredientCategory::Fruits);
    assert_eq!(classify("Queso Manchego"), IngredientCategory::Dairy);
    assert_eq!(classify("Whole MILK"), IngredientCategory::Dairy);
}

#[test]
fn test_spanish_and_english_terms_both_match() {
    assert_eq!(classify("canned fish"), IngredientCategory::Meats);
    assert_eq!(classify("pescado en conserva"), IngredientCategory::Meats);
    assert_eq!(classify("pasta integral"), IngredientCategory::Grains);
    assert_eq!(classify("hortalizas frescas"), IngredientCategory::Vegetables);
}

#[test]
fn test_unmatched_text_defaults_to_other() {
    assert_eq!(classify("mystery snack"), IngredientCategory::Other);
    assert_eq!(classify(""), IngredientCategory::Other);
}

// ============================================================================
// Built-In Catalog Tests
// ============================================================================

#[test]
fn test_catalog_has_ten_entries_with_stable_ids() {
    let items = builtin_ingredients();
    assert_eq!(items.len(), 10);
    for (index, item) in items.iter().enumerate() {
        assert_eq!(item.id, (index + 1).to_string(), "ids must be stable");
        assert!(!item.name.is_empty());
        assert!(item.calories >= 0.0);
    }
}

#[test]
fn test_catalog_lookup_by_id() {
    let apple = builtin_by_id("9").unwrap();
    assert_eq!(apple.name, "Apple");
    assert_eq!(apple.category, IngredientCategory::Fruits);
    assert!((apple.calories - 52.0).abs() < f64::EPSILON);

    assert!(builtin_by_id("999").is_none());
}

// ============================================================================
// Name Filtering Tests
// ============================================================================

#[test]
fn test_filter_matches_substring_case_insensitively() {
    let matches = filter_by_name(builtin_ingredients(), "CHee");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Cheese");
}

#[test]
fn test_empty_query_matches_everything() {
    assert_eq!(filter_by_name(builtin_ingredients(), "").len(), 10);
}

#[test]
fn test_unmatched_query_yields_empty() {
    assert!(filter_by_name(builtin_ingredients(), "zzz").is_empty());
}
