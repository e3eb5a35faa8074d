// ABOUTME: Nutrition computation modules (unit conversion and aggregation)
// ABOUTME: Re-exports the calculation entry points used across the crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Nutrition Computation
//!
//! The computational core of the crate: converting quantities to grams and
//! scaling per-100g profiles into per-entry and per-recipe totals.

/// Per-entry scaling and recipe aggregation
pub mod calculator;
/// Quantity-to-grams conversion with fixed factors
pub mod conversion;

// Re-export commonly used functions
pub use calculator::{nutrition_for, total_nutrition};
pub use conversion::{convert_to_grams, grams_for_symbol};
