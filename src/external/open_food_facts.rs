// ABOUTME: OpenFoodFacts API client for ingredient search and barcode lookup
// ABOUTME: Implements product search, product retrieval, and product-to-ingredient mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! `OpenFoodFacts` API Client
//!
//! Client for the public `OpenFoodFacts` database, which offers crowdsourced
//! nutrition data for packaged foods. The API is free and needs no
//! authentication, only a descriptive User-Agent.
//!
//! # API Reference
//! `OpenFoodFacts` API: <https://wiki.openfoodfacts.org/API>
//!
//! # Example
//! ```rust,no_run
//! use recetario::external::open_food_facts::{OpenFoodFactsClient, OpenFoodFactsConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenFoodFactsClient::new(OpenFoodFactsConfig::default());
//! let products = client.search_products("tomate", "es").await?;
//! # Ok(())
//! # }
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::catalog;
use crate::errors::{AppError, AppResult};
use crate::models::{Ingredient, IngredientCategory};

/// Service name used in error messages and logs
pub const SERVICE_NAME: &str = "OpenFoodFacts";

/// `OpenFoodFacts` client configuration
#[derive(Debug, Clone)]
pub struct OpenFoodFactsConfig {
    /// Base URL (default: <https://world.openfoodfacts.org>)
    pub base_url: String,
    /// User-Agent header; the API asks clients to identify themselves
    pub user_agent: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Number of search results per request (default: 10)
    pub page_size: u32,
}

impl Default for OpenFoodFactsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://world.openfoodfacts.org".into(),
            user_agent: concat!("recetario/", env!("CARGO_PKG_VERSION")).into(),
            timeout_secs: 30,
            page_size: 10,
        }
    }
}

/// A product record as returned by the `OpenFoodFacts` API
///
/// Only the fields the crate consumes are modeled; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier (usually the barcode)
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name; products without one are unusable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    /// Comma-separated free-text category labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
    /// Per-100g nutrient values; products without them are unusable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutriments: Option<Nutriments>,
    /// Product photo URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Nutrient values of a product
///
/// The API exposes both `_100g` keys and per-serving keys; the `_100g`
/// variant is preferred and the bare key is the fallback.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Nutriments {
    /// Energy in kcal per 100 g
    #[serde(rename = "energy-kcal_100g", default, skip_serializing_if = "Option::is_none")]
    pub energy_kcal_100g: Option<f64>,
    /// Energy in kcal (fallback key)
    #[serde(rename = "energy-kcal", default, skip_serializing_if = "Option::is_none")]
    pub energy_kcal: Option<f64>,
    /// Protein in grams per 100 g
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proteins_100g: Option<f64>,
    /// Protein in grams (fallback key)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proteins: Option<f64>,
    /// Fat in grams per 100 g
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_100g: Option<f64>,
    /// Fat in grams (fallback key)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    /// Carbohydrates in grams per 100 g
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrates_100g: Option<f64>,
    /// Carbohydrates in grams (fallback key)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrates: Option<f64>,
}

/// Search endpoint response
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Vec<Product>,
}

/// Barcode endpoint response
#[derive(Debug, Deserialize)]
struct ProductResponse {
    /// 1 when the product exists, 0 otherwise
    #[serde(default)]
    status: u8,
    #[serde(default)]
    product: Option<Product>,
}

/// `OpenFoodFacts` API client
pub struct OpenFoodFactsClient {
    config: OpenFoodFactsConfig,
    http_client: reqwest::Client,
}

impl OpenFoodFactsClient {
    /// Create a new client
    #[must_use]
    pub fn new(config: OpenFoodFactsConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            config,
            http_client,
        }
    }

    /// Search products by free-text query
    ///
    /// # Arguments
    /// * `query` - Search terms (e.g., "tomate frito")
    /// * `locale` - Two-letter language code passed through to the API
    ///
    /// # Errors
    /// Returns an error if the query is empty, the request fails, the
    /// server answers with a non-success status, or the payload does not
    /// parse.
    pub async fn search_products(&self, query: &str, locale: &str) -> AppResult<Vec<Product>> {
        if query.trim().is_empty() {
            return Err(AppError::invalid_input("Search query cannot be empty"));
        }

        let url = format!("{}/cgi/search.pl", self.config.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("search_terms", query),
                ("search_simple", "1"),
                ("action", "process"),
                ("json", "1"),
                ("page_size", &self.config.page_size.to_string()),
                ("lc", locale),
            ])
            .send()
            .await
            .map_err(|e| AppError::external_service(SERVICE_NAME, e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::external_service(
                SERVICE_NAME,
                format!("HTTP {}", response.status()),
            ));
        }

        let search_response: SearchResponse = response.json().await.map_err(|e| {
            AppError::external_service(SERVICE_NAME, format!("JSON parse error: {e}"))
        })?;

        Ok(search_response.products)
    }

    /// Fetch a single product by barcode
    ///
    /// Returns `Ok(None)` when the barcode is unknown to the database.
    ///
    /// # Errors
    /// Returns an error if the barcode is empty, the request fails, the
    /// server answers with a non-success status, or the payload does not
    /// parse.
    pub async fn product_by_barcode(&self, barcode: &str) -> AppResult<Option<Product>> {
        let barcode = barcode.trim();
        if barcode.is_empty() {
            return Err(AppError::invalid_input("Barcode cannot be empty"));
        }

        let url = format!("{}/api/v0/product/{barcode}.json", self.config.base_url);
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::external_service(SERVICE_NAME, e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::external_service(
                SERVICE_NAME,
                format!("HTTP {}", response.status()),
            ));
        }

        let product_response: ProductResponse = response.json().await.map_err(|e| {
            AppError::external_service(SERVICE_NAME, format!("JSON parse error: {e}"))
        })?;

        if product_response.status == 1 {
            Ok(product_response.product)
        } else {
            Ok(None)
        }
    }
}

/// Map a product record to an [`Ingredient`]
///
/// Returns `None` for products without a usable name or without nutriment
/// data. Missing nutrient keys fall back from the `_100g` variant to the
/// bare key to zero; a missing id gets an `off-{unix-millis}` placeholder.
#[must_use]
pub fn ingredient_from_product(product: &Product) -> Option<Ingredient> {
    let name = product
        .product_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())?;
    let nutriments = product.nutriments.as_ref()?;

    let id = product
        .id
        .clone()
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| format!("off-{}", Utc::now().timestamp_millis()));

    let category = product
        .categories
        .as_deref()
        .map_or(IngredientCategory::Other, catalog::classify);

    let mut ingredient = Ingredient::new(
        id,
        name,
        category,
        nutriments.energy_kcal_100g.or(nutriments.energy_kcal).unwrap_or(0.0),
        nutriments.proteins_100g.or(nutriments.proteins).unwrap_or(0.0),
        nutriments.fat_100g.or(nutriments.fat).unwrap_or(0.0),
        nutriments
            .carbohydrates_100g
            .or(nutriments.carbohydrates)
            .unwrap_or(0.0),
    );
    if let Some(url) = &product.image_url {
        ingredient = ingredient.with_image(url);
    }
    Some(ingredient)
}
