// ABOUTME: Unit conversion for recipe ingredient quantities
// ABOUTME: Converts every supported unit to grams using fixed approximation factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Quantity-to-grams conversion
//!
//! Factors are deliberate approximations, not ingredient densities: volumes
//! assume a 1 g/ml density and a piece counts as an average 100 g item. The
//! nutrition math downstream is a ratio over per-100g profiles, so grams is
//! the only mass axis the crate ever needs.

use crate::models::IngredientUnit;

/// Volume conversion constants (to milliliters)
const ML_PER_CUP: f64 = 240.0;
const ML_PER_TBSP: f64 = 15.0;
const ML_PER_LITER: f64 = 1000.0;

/// Weight conversion constants (to grams)
const GRAMS_PER_KG: f64 = 1000.0;

/// Grams assumed per milliliter (water-like density)
const GRAMS_PER_ML: f64 = 1.0;

/// Grams assumed per counted piece (average single item)
const GRAMS_PER_PIECE: f64 = 100.0;

/// Convert an ingredient amount to grams
///
/// Total function over the closed unit set; negative or non-finite
/// quantities pass through arithmetically and are rejected at the input
/// boundaries instead.
///
/// # Examples
///
/// ```rust
/// use recetario::models::IngredientUnit;
/// use recetario::nutrition::conversion::convert_to_grams;
///
/// assert!((convert_to_grams(2.0, IngredientUnit::Cups) - 480.0).abs() < f64::EPSILON);
/// assert!((convert_to_grams(150.0, IngredientUnit::Grams) - 150.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn convert_to_grams(quantity: f64, unit: IngredientUnit) -> f64 {
    match unit {
        IngredientUnit::Grams => quantity,
        IngredientUnit::Kilograms => quantity * GRAMS_PER_KG,
        IngredientUnit::Milliliters => quantity * GRAMS_PER_ML,
        IngredientUnit::Liters => quantity * ML_PER_LITER * GRAMS_PER_ML,
        IngredientUnit::Pieces => quantity * GRAMS_PER_PIECE,
        IngredientUnit::Tablespoons => quantity * ML_PER_TBSP * GRAMS_PER_ML,
        IngredientUnit::Cups => quantity * ML_PER_CUP * GRAMS_PER_ML,
    }
}

/// Convert an amount with a free-text unit symbol to grams
///
/// Symbols outside the known set fall back to the gram factor, leaving the
/// quantity unchanged. The fallback is deliberate: a novel unit from user
/// input or imported data must never abort a calculation.
#[must_use]
pub fn grams_for_symbol(quantity: f64, symbol: &str) -> f64 {
    IngredientUnit::parse(symbol).map_or(quantity, |unit| convert_to_grams(quantity, unit))
}
