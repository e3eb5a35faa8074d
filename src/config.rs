// ABOUTME: Application configuration read from environment variables with defaults
// ABOUTME: Wires the data directory, OpenFoodFacts client, and search behavior together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Application Configuration
//!
//! Every setting has a default, so `from_env` never fails: a missing or
//! unparseable variable falls back silently. Variables:
//!
//! - `RECETARIO_DATA_DIR` - where `recipes.json` lives
//! - `RECETARIO_BASE_URL` - `OpenFoodFacts` base URL
//! - `RECETARIO_LOCALE` - two-letter language code for remote search
//! - `RECETARIO_PAGE_SIZE` - remote search page size
//! - `RECETARIO_TIMEOUT_SECS` - HTTP request timeout
//! - `RECETARIO_DEBOUNCE_MS` - search quiescence delay

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::external::OpenFoodFactsConfig;
use crate::search::SearchConfig;

/// Default locale for remote search
pub const DEFAULT_LOCALE: &str = "es";

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the persisted recipe file
    pub data_dir: PathBuf,
    /// `OpenFoodFacts` base URL
    pub base_url: String,
    /// Language code passed through to remote search
    pub locale: String,
    /// Remote search page size
    pub page_size: u32,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
    /// Search quiescence delay in milliseconds
    pub debounce_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let off = OpenFoodFactsConfig::default();
        Self {
            data_dir: default_data_dir(),
            base_url: off.base_url,
            locale: DEFAULT_LOCALE.into(),
            page_size: off.page_size,
            timeout_secs: off.timeout_secs,
            debounce_ms: 500,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            data_dir: env::var("RECETARIO_DATA_DIR")
                .ok()
                .map_or(defaults.data_dir, PathBuf::from),
            base_url: env::var("RECETARIO_BASE_URL").unwrap_or(defaults.base_url),
            locale: env::var("RECETARIO_LOCALE").unwrap_or(defaults.locale),
            page_size: env::var("RECETARIO_PAGE_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.page_size),
            timeout_secs: env::var("RECETARIO_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            debounce_ms: env::var("RECETARIO_DEBOUNCE_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.debounce_ms),
        }
    }

    /// `OpenFoodFacts` client configuration derived from these settings
    #[must_use]
    pub fn open_food_facts(&self) -> OpenFoodFactsConfig {
        OpenFoodFactsConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            page_size: self.page_size,
            ..OpenFoodFactsConfig::default()
        }
    }

    /// Search configuration derived from these settings
    #[must_use]
    pub fn search(&self) -> SearchConfig {
        SearchConfig {
            debounce: Duration::from_millis(self.debounce_ms),
            locale: self.locale.clone(),
            ..SearchConfig::default()
        }
    }
}

/// Platform data directory for the application, with a relative fallback
/// when the platform reports none
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from("./data"), |d| d.join("recetario"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sensible() {
        let config = AppConfig::default();
        assert_eq!(config.locale, "es");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.debounce_ms, 500);
        assert!(config.base_url.contains("openfoodfacts.org"));
    }

    #[test]
    fn test_derived_configs_carry_settings() {
        let config = AppConfig {
            base_url: "http://localhost:8080".into(),
            locale: "en".into(),
            page_size: 25,
            timeout_secs: 5,
            debounce_ms: 120,
            ..AppConfig::default()
        };

        let off = config.open_food_facts();
        assert_eq!(off.base_url, "http://localhost:8080");
        assert_eq!(off.page_size, 25);
        assert_eq!(off.timeout_secs, 5);

        let search = config.search();
        assert_eq!(search.debounce, Duration::from_millis(120));
        assert_eq!(search.locale, "en");
        assert_eq!(search.min_query_len, 3);
        assert!(search.use_local);
    }
}
