// ABOUTME: Main library entry point for the recetario recipe builder
// ABOUTME: Provides nutrition math, ingredient search, and persistent recipe management
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Recetario
//!
//! A recipe builder with live nutrition math. Ingredients come from a
//! built-in catalog or from the `OpenFoodFacts` database; each carries
//! per-100g nutrition values, and recipe totals update on every quantity
//! or unit change.
//!
//! ## Features
//!
//! - **Nutrition math**: unit-aware gram conversion and linear scaling of
//!   per-100g values, summed across a recipe
//! - **Ingredient search**: built-in catalog plus debounced `OpenFoodFacts`
//!   text search and barcode lookup
//! - **Recipe management**: build, edit, and validate recipes with merge
//!   semantics for repeated ingredients
//! - **Persistence**: the recipe list survives restarts as a single JSON
//!   document, written atomically
//!
//! ## Example Usage
//!
//! ```rust
//! use recetario::catalog;
//! use recetario::errors::AppResult;
//! use recetario::models::Recipe;
//!
//! fn main() -> AppResult<()> {
//!     let mut recipe = Recipe::new("Arroz con pollo");
//!     if let Some(rice) = catalog::builtin_by_id("1") {
//!         recipe.add_ingredient(rice.clone());
//!         recipe.set_quantity(0, 200.0)?;
//!     }
//!     println!("{} kcal", recipe.total_nutrition.calories.round());
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the binary crate (src/bin/) and integration
// tests (tests/). They must remain `pub` so external consumers can access
// them.

/// Built-in ingredient catalog and category classification
pub mod catalog;

/// Configuration from environment variables
pub mod config;

/// Unified error handling system with standard error codes
pub mod errors;

/// External API clients (`OpenFoodFacts`)
pub mod external;

/// Structured logging setup
pub mod logging;

/// Core data structures for ingredients, recipes, and nutrition totals
pub mod models;

/// Unit conversion and nutrition calculation
pub mod nutrition;

/// Debounced ingredient search with request cancellation
pub mod search;

/// Ingredient source abstraction over local and remote lookups
pub mod sources;

/// Persistent recipe store
pub mod store;
