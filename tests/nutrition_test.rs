// ABOUTME: Integration tests for unit conversion and nutrition aggregation
// ABOUTME: Covers gram conversion factors, per-entry scaling, and recipe totals
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Tests for the nutrition module including:
//! - Gram conversion for every supported unit
//! - Linear scaling of per-100g profiles
//! - Aggregation invariants over ingredient lists

use recetario::catalog;
use recetario::models::{
    Ingredient, IngredientCategory, IngredientUnit, NutritionTotals, RecipeIngredient,
};
use recetario::nutrition::{convert_to_grams, grams_for_symbol, nutrition_for, total_nutrition};

const ALL_UNITS: [IngredientUnit; 7] = [
    IngredientUnit::Grams,
    IngredientUnit::Kilograms,
    IngredientUnit::Milliliters,
    IngredientUnit::Liters,
    IngredientUnit::Pieces,
    IngredientUnit::Tablespoons,
    IngredientUnit::Cups,
];

fn assert_close(actual: f64, expected: f64, context: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{context}: expected {expected}, got {actual}"
    );
}

// ============================================================================
// Unit Conversion Tests
// ============================================================================

#[test]
fn test_conversion_factors() {
    assert_close(convert_to_grams(1.0, IngredientUnit::Grams), 1.0, "g");
    assert_close(convert_to_grams(1.0, IngredientUnit::Kilograms), 1000.0, "kg");
    assert_close(convert_to_grams(1.0, IngredientUnit::Milliliters), 1.0, "ml");
    assert_close(convert_to_grams(1.0, IngredientUnit::Liters), 1000.0, "l");
    assert_close(convert_to_grams(1.0, IngredientUnit::Pieces), 100.0, "pc");
    assert_close(convert_to_grams(1.0, IngredientUnit::Tablespoons), 15.0, "tbsp");
    assert_close(convert_to_grams(1.0, IngredientUnit::Cups), 240.0, "cup");
}

#[test]
fn test_conversion_is_linear_in_quantity() {
    for unit in ALL_UNITS {
        for quantity in [0.25, 1.0, 3.5, 120.0] {
            assert_close(
                convert_to_grams(2.0 * quantity, unit),
                2.0 * convert_to_grams(quantity, unit),
                &format!("doubling {quantity} {}", unit.abbreviation()),
            );
        }
    }
}

#[test]
fn test_symbol_conversion_accepts_abbreviations() {
    assert_close(grams_for_symbol(2.0, "kg"), 2000.0, "kg symbol");
    assert_close(grams_for_symbol(3.0, "TBSP"), 45.0, "tbsp symbol");
    assert_close(grams_for_symbol(1.0, "cup"), 240.0, "cup symbol");
}

#[test]
fn test_unknown_symbol_falls_back_to_identity() {
    // Unknown symbols are treated as already-gram quantities rather than
    // rejected, so free-text units degrade gracefully.
    assert_close(grams_for_symbol(120.0, "handful"), 120.0, "unknown symbol");
    assert_close(grams_for_symbol(80.0, ""), 80.0, "empty symbol");
}

// ============================================================================
// Per-Entry Scaling Tests
// ============================================================================

#[test]
fn test_100_grams_returns_per_100g_profile() {
    let ingredient = Ingredient::new(
        "t1",
        "Test food",
        IngredientCategory::Other,
        250.0,
        10.0,
        5.0,
        30.0,
    );
    let entry = RecipeIngredient::new(ingredient.clone(), 100.0, IngredientUnit::Grams);

    let nutrition = nutrition_for(&entry);
    assert_eq!(nutrition, ingredient.per_100g());
}

#[test]
fn test_cup_of_milk_scales_by_240_grams() {
    let milk = catalog::builtin_by_id("7").unwrap().clone();
    let entry = RecipeIngredient::new(milk, 1.0, IngredientUnit::Cups);

    // 240 ml at density 1.0 is 240 g, so 2.4x the per-100g values.
    let nutrition = nutrition_for(&entry);
    assert_close(nutrition.calories, 42.0 * 2.4, "milk calories");
    assert_close(nutrition.proteins, 3.4 * 2.4, "milk proteins");
}

#[test]
fn test_zero_quantity_yields_zero_nutrition() {
    let rice = catalog::builtin_by_id("1").unwrap().clone();
    let entry = RecipeIngredient::new(rice, 0.0, IngredientUnit::Grams);
    assert_eq!(nutrition_for(&entry), NutritionTotals::zero());
}

// ============================================================================
// Aggregation Tests
// ============================================================================

#[test]
fn test_empty_list_totals_zero() {
    assert_eq!(total_nutrition(&[]), NutritionTotals::zero());
}

#[test]
fn test_totals_are_permutation_invariant() {
    let rice = catalog::builtin_by_id("1").unwrap().clone();
    let milk = catalog::builtin_by_id("7").unwrap().clone();
    let apple = catalog::builtin_by_id("9").unwrap().clone();

    let forward = vec![
        RecipeIngredient::new(rice.clone(), 200.0, IngredientUnit::Grams),
        RecipeIngredient::new(milk.clone(), 1.0, IngredientUnit::Cups),
        RecipeIngredient::new(apple.clone(), 2.0, IngredientUnit::Pieces),
    ];
    let reversed = vec![
        RecipeIngredient::new(apple, 2.0, IngredientUnit::Pieces),
        RecipeIngredient::new(milk, 1.0, IngredientUnit::Cups),
        RecipeIngredient::new(rice, 200.0, IngredientUnit::Grams),
    ];

    let a = total_nutrition(&forward);
    let b = total_nutrition(&reversed);
    assert_close(a.calories, b.calories, "calories");
    assert_close(a.proteins, b.proteins, "proteins");
    assert_close(a.fats, b.fats, "fats");
    assert_close(a.carbs, b.carbs, "carbs");
}

#[test]
fn test_rice_and_milk_recipe_total() {
    let rice = catalog::builtin_by_id("1").unwrap().clone();
    let milk = catalog::builtin_by_id("7").unwrap().clone();

    let entries = vec![
        RecipeIngredient::new(rice, 200.0, IngredientUnit::Grams),
        RecipeIngredient::new(milk, 1.0, IngredientUnit::Cups),
    ];

    // 200 g rice at 130 kcal/100g = 260 kcal
    // 1 cup milk = 240 g at 42 kcal/100g = 100.8 kcal
    let totals = total_nutrition(&entries);
    assert_close(totals.calories, 360.8, "combined calories");
}
