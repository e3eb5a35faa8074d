// ABOUTME: Nutrition calculation for recipe entries and whole recipes
// ABOUTME: Scales per-100g profiles by converted mass and folds entries into totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Nutrition Calculator
//!
//! Per-entry nutrition is the ingredient's per-100g profile scaled by
//! `grams / 100`. Recipe totals are a plain sum over entries, so the result
//! is independent of ingredient order up to floating-point rounding.

use crate::models::{NutritionTotals, RecipeIngredient};
use crate::nutrition::conversion::convert_to_grams;

/// Nutrition contributed by a single recipe entry
///
/// # Examples
///
/// ```rust
/// use recetario::models::{Ingredient, IngredientCategory, IngredientUnit, RecipeIngredient};
/// use recetario::nutrition::calculator::nutrition_for;
///
/// let rice = Ingredient::new("1", "Rice", IngredientCategory::Grains, 130.0, 2.7, 0.3, 28.0);
/// let entry = RecipeIngredient::new(rice, 200.0, IngredientUnit::Grams);
/// let totals = nutrition_for(&entry);
/// assert!((totals.calories - 260.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn nutrition_for(item: &RecipeIngredient) -> NutritionTotals {
    let grams = convert_to_grams(item.quantity, item.unit);
    item.ingredient.per_100g().scale(grams / 100.0)
}

/// Total nutrition across all entries of a recipe
///
/// Empty input yields all-zero totals.
#[must_use]
pub fn total_nutrition(items: &[RecipeIngredient]) -> NutritionTotals {
    items.iter().map(nutrition_for).sum()
}
