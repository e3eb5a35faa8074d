// ABOUTME: External API client modules (OpenFoodFacts)
// ABOUTME: Provides remote nutrition data integration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! External API Clients
//!
//! Clients for the external services the crate pulls ingredient data from.

/// `OpenFoodFacts` HTTP client and product mapping
pub mod open_food_facts;

// Re-export commonly used types
pub use open_food_facts::{
    ingredient_from_product, OpenFoodFactsClient, OpenFoodFactsConfig, Product,
};
