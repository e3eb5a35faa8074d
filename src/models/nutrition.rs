// ABOUTME: Aggregated nutrition value type with arithmetic and breakdown views
// ABOUTME: Defines NutritionTotals plus macro percentage and calorie attribution helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// Energy density of protein in kcal per gram (Atwater factor)
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
/// Energy density of fat in kcal per gram (Atwater factor)
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
/// Energy density of carbohydrate in kcal per gram (Atwater factor)
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

/// Aggregated nutrition values for an ingredient amount or a whole recipe
///
/// All values follow the same axes as the per-100g ingredient profiles:
/// calories in kcal, macros in grams.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionTotals {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub proteins: f64,
    /// Fat in grams
    pub fats: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
}

impl NutritionTotals {
    /// Create totals with all channels at zero
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale all channels by a multiplier
    #[must_use]
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            proteins: self.proteins * multiplier,
            fats: self.fats * multiplier,
            carbs: self.carbs * multiplier,
        }
    }

    /// Each macro as a percentage of total macro mass
    ///
    /// Percentages are of combined protein, fat, and carbohydrate grams,
    /// not of calories. All zero when the macro mass is zero.
    #[must_use]
    pub fn macro_percentages(&self) -> MacroPercentages {
        let total = self.proteins + self.fats + self.carbs;
        if total <= 0.0 {
            return MacroPercentages::default();
        }
        MacroPercentages {
            proteins_percent: self.proteins / total * 100.0,
            fats_percent: self.fats / total * 100.0,
            carbs_percent: self.carbs / total * 100.0,
        }
    }

    /// Calories attributed to each macro using Atwater factors (4/9/4)
    #[must_use]
    pub fn calorie_breakdown(&self) -> CalorieBreakdown {
        CalorieBreakdown {
            proteins_kcal: self.proteins * KCAL_PER_GRAM_PROTEIN,
            fats_kcal: self.fats * KCAL_PER_GRAM_FAT,
            carbs_kcal: self.carbs * KCAL_PER_GRAM_CARBS,
        }
    }
}

/// Macronutrient percentage breakdown by mass
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacroPercentages {
    /// Protein as percentage of total macro grams
    pub proteins_percent: f64,
    /// Fat as percentage of total macro grams
    pub fats_percent: f64,
    /// Carbohydrates as percentage of total macro grams
    pub carbs_percent: f64,
}

/// Calories attributed per macro
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalorieBreakdown {
    /// Energy from protein in kcal
    pub proteins_kcal: f64,
    /// Energy from fat in kcal
    pub fats_kcal: f64,
    /// Energy from carbohydrates in kcal
    pub carbs_kcal: f64,
}

impl Add for NutritionTotals {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            calories: self.calories + other.calories,
            proteins: self.proteins + other.proteins,
            fats: self.fats + other.fats,
            carbs: self.carbs + other.carbs,
        }
    }
}

impl AddAssign for NutritionTotals {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Mul<f64> for NutritionTotals {
    type Output = Self;

    fn mul(self, multiplier: f64) -> Self {
        self.scale(multiplier)
    }
}

impl Sum for NutritionTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, n| acc + n)
    }
}
