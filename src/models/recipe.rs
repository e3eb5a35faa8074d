// ABOUTME: Recipe data model with quantified ingredient entries and cached totals
// ABOUTME: Defines IngredientUnit, RecipeIngredient, Recipe, and the merge-on-add reducer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ingredient::Ingredient;
use super::nutrition::NutritionTotals;
use crate::errors::{AppError, AppResult};
use crate::nutrition::calculator;

/// Ingredient measurement unit
///
/// Conversion to grams uses fixed factors; see [`crate::nutrition::conversion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IngredientUnit {
    /// Weight in grams (base unit)
    Grams,
    /// Weight in kilograms (1000 g)
    Kilograms,
    /// Volume in milliliters (1:1 density assumed)
    Milliliters,
    /// Volume in liters (1000 ml)
    Liters,
    /// Count of whole items (eggs, apples, etc.)
    #[default]
    Pieces,
    /// Tablespoons (15 ml)
    Tablespoons,
    /// US cups (240 ml)
    Cups,
}

impl IngredientUnit {
    /// Check if this unit is a volume measurement
    #[must_use]
    pub const fn is_volume(&self) -> bool {
        matches!(
            self,
            Self::Milliliters | Self::Liters | Self::Tablespoons | Self::Cups
        )
    }

    /// Check if this unit is a weight measurement
    #[must_use]
    pub const fn is_weight(&self) -> bool {
        matches!(self, Self::Grams | Self::Kilograms)
    }

    /// Check if this unit is a count
    #[must_use]
    pub const fn is_count(&self) -> bool {
        matches!(self, Self::Pieces)
    }

    /// Get the abbreviation for display
    #[must_use]
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Self::Grams => "g",
            Self::Kilograms => "kg",
            Self::Milliliters => "ml",
            Self::Liters => "l",
            Self::Pieces => "pc",
            Self::Tablespoons => "tbsp",
            Self::Cups => "cup",
        }
    }

    /// Parse a unit from its name or abbreviation, case-insensitive
    ///
    /// Returns `None` for symbols outside the known set; callers decide
    /// whether that is an error or a fallback.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "g" | "gram" | "grams" => Some(Self::Grams),
            "kg" | "kilogram" | "kilograms" => Some(Self::Kilograms),
            "ml" | "milliliter" | "milliliters" => Some(Self::Milliliters),
            "l" | "liter" | "liters" => Some(Self::Liters),
            "pc" | "piece" | "pieces" | "u" | "unit" | "units" => Some(Self::Pieces),
            "tbsp" | "tablespoon" | "tablespoons" => Some(Self::Tablespoons),
            "cup" | "cups" => Some(Self::Cups),
            _ => None,
        }
    }
}

/// Single quantified ingredient entry in a recipe
///
/// Embeds the ingredient by value so a recipe stays self-contained even if
/// the source catalog or remote record changes later. Entry identity within
/// a recipe is positional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// The ingredient with its per-100g profile
    pub ingredient: Ingredient,
    /// Amount in the specified unit
    pub quantity: f64,
    /// Measurement unit
    pub unit: IngredientUnit,
}

impl RecipeIngredient {
    /// Create a new entry
    #[must_use]
    pub const fn new(ingredient: Ingredient, quantity: f64, unit: IngredientUnit) -> Self {
        Self {
            ingredient,
            quantity,
            unit,
        }
    }
}

/// Merge an ingredient into an entry list
///
/// If an entry for the same ingredient id already exists its quantity is
/// incremented by one and its unit left untouched; otherwise the ingredient
/// is appended with quantity 1 in the default count unit. This policy
/// applies to every add-to-recipe interaction regardless of where the
/// ingredient came from.
#[must_use]
pub fn merge_ingredient(
    mut items: Vec<RecipeIngredient>,
    ingredient: Ingredient,
) -> Vec<RecipeIngredient> {
    if let Some(existing) = items
        .iter_mut()
        .find(|item| item.ingredient.id == ingredient.id)
    {
        existing.quantity += 1.0;
        return items;
    }
    items.push(RecipeIngredient::new(
        ingredient,
        1.0,
        IngredientUnit::default(),
    ));
    items
}

/// A complete recipe with ingredients and cached nutrition totals
///
/// `total_nutrition` always equals the aggregation over the current
/// ingredient list; every mutation method recomputes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: String,
    /// Recipe name
    pub name: String,
    /// Recipe description
    pub description: String,
    /// List of quantified ingredients (ordered)
    pub ingredients: Vec<RecipeIngredient>,
    /// Free-form cooking instructions
    pub instructions: String,
    /// Cached nutrition totals for the whole recipe
    pub total_nutrition: NutritionTotals,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Create a new empty recipe with a generated id
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: String::new(),
            ingredients: Vec::new(),
            instructions: String::new(),
            total_nutrition: NutritionTotals::zero(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add cooking instructions
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Check that the recipe has a usable name
    ///
    /// Drafts only need a name; see [`Self::validate`] for the full check
    /// applied when a recipe is saved as complete.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank.
    pub fn validate_name(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::missing_field("Recipe name"));
        }
        Ok(())
    }

    /// Check that the recipe is complete enough to save
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the ingredient list is empty.
    pub fn validate(&self) -> AppResult<()> {
        self.validate_name()?;
        if self.ingredients.is_empty() {
            return Err(AppError::invalid_input(
                "A recipe needs at least one ingredient",
            ));
        }
        Ok(())
    }

    /// Add an ingredient using the merge-on-add policy
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients = merge_ingredient(std::mem::take(&mut self.ingredients), ingredient);
        self.refresh_totals();
    }

    /// Remove the entry at `index`
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn remove_ingredient(&mut self, index: usize) -> AppResult<()> {
        self.check_index(index)?;
        self.ingredients.remove(index);
        self.refresh_totals();
        Ok(())
    }

    /// Change the quantity of the entry at `index`
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or the quantity is not
    /// a positive finite number.
    pub fn set_quantity(&mut self, index: usize, quantity: f64) -> AppResult<()> {
        self.check_index(index)?;
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(AppError::invalid_input("Quantity must be positive"));
        }
        self.ingredients[index].quantity = quantity;
        self.refresh_totals();
        Ok(())
    }

    /// Change the unit of the entry at `index`
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn set_unit(&mut self, index: usize, unit: IngredientUnit) -> AppResult<()> {
        self.check_index(index)?;
        self.ingredients[index].unit = unit;
        self.refresh_totals();
        Ok(())
    }

    fn check_index(&self, index: usize) -> AppResult<()> {
        if index >= self.ingredients.len() {
            return Err(AppError::invalid_input(format!(
                "Ingredient index {index} is out of range (recipe has {} entries)",
                self.ingredients.len()
            )));
        }
        Ok(())
    }

    fn refresh_totals(&mut self) {
        self.total_nutrition = calculator::total_nutrition(&self.ingredients);
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ingredient::IngredientCategory;

    fn apple() -> Ingredient {
        Ingredient::new("9", "Apple", IngredientCategory::Fruits, 52.0, 0.3, 0.2, 14.0)
    }

    #[test]
    fn test_merge_appends_with_count_unit() {
        let items = merge_ingredient(Vec::new(), apple());
        assert_eq!(items.len(), 1);
        assert!((items[0].quantity - 1.0).abs() < f64::EPSILON);
        assert_eq!(items[0].unit, IngredientUnit::Pieces);
    }

    #[test]
    fn test_merge_increments_and_keeps_unit() {
        let mut items = merge_ingredient(Vec::new(), apple());
        items[0].unit = IngredientUnit::Grams;
        items[0].quantity = 150.0;

        let items = merge_ingredient(items, apple());
        assert_eq!(items.len(), 1);
        assert!((items[0].quantity - 151.0).abs() < f64::EPSILON);
        assert_eq!(items[0].unit, IngredientUnit::Grams);
    }

    #[test]
    fn test_unit_parse_accepts_abbreviations() {
        assert_eq!(IngredientUnit::parse("TBSP"), Some(IngredientUnit::Tablespoons));
        assert_eq!(IngredientUnit::parse(" g "), Some(IngredientUnit::Grams));
        assert_eq!(IngredientUnit::parse("unidades"), None);
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut recipe = Recipe::new("   ");
        recipe.add_ingredient(apple());
        let err = recipe.validate().unwrap_err();
        assert!(err.to_string().contains("Recipe name"));
    }

    #[test]
    fn test_set_quantity_rejects_non_positive() {
        let mut recipe = Recipe::new("Test");
        recipe.add_ingredient(apple());
        assert!(recipe.set_quantity(0, 0.0).is_err());
        assert!(recipe.set_quantity(0, f64::NAN).is_err());
        assert!(recipe.set_quantity(0, 2.0).is_ok());
    }
}
