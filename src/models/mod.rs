// ABOUTME: Core data models for ingredients, recipes, and nutrition values
// ABOUTME: Re-exports the model types used across the crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Data Models
//!
//! Ingredients carry per-100g nutrient profiles; recipes embed quantified
//! ingredient entries and cache their aggregated totals.

/// Ingredient and category types
pub mod ingredient;
/// Aggregated nutrition value type and breakdown views
pub mod nutrition;
/// Recipe, entry, and unit types
pub mod recipe;

// Re-export commonly used types
pub use ingredient::{Ingredient, IngredientCategory};
pub use nutrition::{CalorieBreakdown, MacroPercentages, NutritionTotals};
pub use recipe::{merge_ingredient, IngredientUnit, Recipe, RecipeIngredient};
