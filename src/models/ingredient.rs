// ABOUTME: Ingredient data model with per-100g nutrient profiles
// ABOUTME: Defines Ingredient and the closed IngredientCategory classification set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};

use super::nutrition::NutritionTotals;

/// Food category for grouping and filtering ingredients
///
/// The set is closed: free-text categories from external sources are
/// classified into one of these variants, falling back to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    /// Cereals, pasta, rice
    Grains,
    /// Meat, poultry, fish
    Meats,
    /// Vegetables and greens
    Vegetables,
    /// Fruits
    Fruits,
    /// Milk, cheese, yogurt
    Dairy,
    /// Anything that does not match a known category
    #[default]
    Other,
}

impl IngredientCategory {
    /// Get the display name for this category
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Grains => "Grains",
            Self::Meats => "Meats",
            Self::Vegetables => "Vegetables",
            Self::Fruits => "Fruits",
            Self::Dairy => "Dairy",
            Self::Other => "Other",
        }
    }
}

/// A food item with its nutrient profile per 100 grams
///
/// Values are per 100 g of edible mass: calories in kcal, macros in grams.
/// Ingredients are immutable once created; recipes embed copies and scale
/// the profile by converted quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Stable identifier (catalog ids are numeric strings, remote ids are barcodes)
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Food category
    pub category: IngredientCategory,
    /// Energy in kcal per 100 g
    pub calories: f64,
    /// Protein in grams per 100 g
    pub proteins: f64,
    /// Fat in grams per 100 g
    pub fats: f64,
    /// Carbohydrates in grams per 100 g
    pub carbs: f64,
    /// Optional image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Ingredient {
    /// Create a new ingredient from its per-100g profile
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: IngredientCategory,
        calories: f64,
        proteins: f64,
        fats: f64,
        carbs: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            calories,
            proteins,
            fats,
            carbs,
            image: None,
        }
    }

    /// Attach an image URL
    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    /// The nutrient profile as totals for exactly 100 g
    #[must_use]
    pub const fn per_100g(&self) -> NutritionTotals {
        NutritionTotals {
            calories: self.calories,
            proteins: self.proteins,
            fats: self.fats,
            carbs: self.carbs,
        }
    }
}
