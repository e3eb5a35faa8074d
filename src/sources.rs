// ABOUTME: Ingredient source abstraction over the built-in catalog and remote lookups
// ABOUTME: Defines the IngredientSource trait plus the local and OpenFoodFacts implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Ingredient Sources
//!
//! A source answers search and barcode queries with ready-to-use
//! [`Ingredient`] values. Sources are infallible by contract: failures are
//! logged and degraded to empty results so a flaky network never breaks the
//! recipe workflow.

use async_trait::async_trait;
use tracing::warn;

use crate::catalog;
use crate::external::open_food_facts::{
    ingredient_from_product, OpenFoodFactsClient, SERVICE_NAME,
};
use crate::models::Ingredient;

/// Supplier of ingredient records for search and barcode lookup
#[async_trait]
pub trait IngredientSource: Send + Sync {
    /// Search ingredients matching a free-text query
    ///
    /// Returns an empty list when nothing matches or the lookup fails.
    async fn search_ingredients(&self, query: &str, locale: &str) -> Vec<Ingredient>;

    /// Look up a single ingredient by product barcode
    ///
    /// Returns `None` when the barcode is unknown or the lookup fails.
    async fn ingredient_by_barcode(&self, barcode: &str) -> Option<Ingredient>;
}

/// Source backed by an in-memory ingredient list
///
/// Used for the built-in catalog; barcode lookups always miss because
/// catalog entries have no barcodes.
pub struct LocalSource {
    items: Vec<Ingredient>,
}

impl LocalSource {
    /// Create a source over the built-in catalog
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: catalog::builtin_ingredients().to_vec(),
        }
    }

    /// Create a source over a custom ingredient list
    #[must_use]
    pub const fn with_items(items: Vec<Ingredient>) -> Self {
        Self { items }
    }
}

impl Default for LocalSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IngredientSource for LocalSource {
    async fn search_ingredients(&self, query: &str, _locale: &str) -> Vec<Ingredient> {
        catalog::filter_by_name(&self.items, query)
    }

    async fn ingredient_by_barcode(&self, _barcode: &str) -> Option<Ingredient> {
        None
    }
}

/// Source backed by the `OpenFoodFacts` API
pub struct OpenFoodFactsSource {
    client: OpenFoodFactsClient,
}

impl OpenFoodFactsSource {
    /// Wrap a configured client
    #[must_use]
    pub const fn new(client: OpenFoodFactsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IngredientSource for OpenFoodFactsSource {
    async fn search_ingredients(&self, query: &str, locale: &str) -> Vec<Ingredient> {
        self.client.search_products(query, locale).await.map_or_else(
            |error| {
                warn!(service = SERVICE_NAME, %error, "search degraded to empty results");
                Vec::new()
            },
            |products| products.iter().filter_map(ingredient_from_product).collect(),
        )
    }

    async fn ingredient_by_barcode(&self, barcode: &str) -> Option<Ingredient> {
        if barcode.trim().is_empty() {
            return None;
        }
        self.client.product_by_barcode(barcode).await.map_or_else(
            |error| {
                warn!(service = SERVICE_NAME, %error, "barcode lookup degraded to not found");
                None
            },
            |product| product.as_ref().and_then(ingredient_from_product),
        )
    }
}
