// ABOUTME: Debounced ingredient search with cancellation of superseded requests
// ABOUTME: Publishes remote results through a watch channel guarded by a generation token
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Debounced Search
//!
//! Keystroke-level input feeds [`IngredientSearch::input_changed`]; a remote
//! query is dispatched only after the input has been quiet for the debounce
//! interval. Every input bumps a generation token, and a dispatched response
//! is published only while its token is still current, so a slow response
//! can never overwrite the results of a newer request.
//!
//! Remote search is gated twice: the local-catalog flag suppresses it
//! entirely, and queries shorter than the minimum length publish empty
//! results without touching the network.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

use crate::catalog;
use crate::models::Ingredient;
use crate::sources::IngredientSource;

/// Search behavior configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Quiet interval before a remote query is dispatched (default: 500 ms)
    pub debounce: Duration,
    /// Minimum query length for remote search (default: 3 characters)
    pub min_query_len: usize,
    /// Locale passed through to the remote source (default: "es")
    pub locale: String,
    /// Start with the built-in catalog instead of remote search (default: true)
    pub use_local: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(500),
            min_query_len: 3,
            locale: "es".into(),
            use_local: true,
        }
    }
}

/// Debounced, cancelable ingredient search over a source
///
/// All methods take `&self`; the type is shareable behind an `Arc` between
/// an input loop and a rendering loop.
pub struct IngredientSearch {
    source: Arc<dyn IngredientSource>,
    config: SearchConfig,
    local: Vec<Ingredient>,
    use_local: AtomicBool,
    generation: Arc<AtomicU64>,
    query_tx: watch::Sender<String>,
    results_tx: watch::Sender<Vec<Ingredient>>,
}

impl IngredientSearch {
    /// Create a search over the given source, with the built-in catalog as
    /// the local ingredient set
    #[must_use]
    pub fn new(source: Arc<dyn IngredientSource>, config: SearchConfig) -> Self {
        Self::with_local_items(source, config, catalog::builtin_ingredients().to_vec())
    }

    /// Create a search with a custom local ingredient set
    #[must_use]
    pub fn with_local_items(
        source: Arc<dyn IngredientSource>,
        config: SearchConfig,
        local: Vec<Ingredient>,
    ) -> Self {
        let (query_tx, _) = watch::channel(String::new());
        let (results_tx, _) = watch::channel(Vec::new());
        let use_local = AtomicBool::new(config.use_local);
        Self {
            source,
            config,
            local,
            use_local,
            generation: Arc::new(AtomicU64::new(0)),
            query_tx,
            results_tx,
        }
    }

    /// Record a new input value and schedule a remote search if applicable
    ///
    /// Returns the handle of the scheduled search task, or `None` when the
    /// input was handled without dispatching one (local mode, or query below
    /// the minimum length). Gated inputs clear the remote results
    /// immediately; dispatched queries replace them when their response
    /// arrives.
    #[must_use]
    pub fn input_changed(&self, query: impl Into<String>) -> Option<JoinHandle<()>> {
        let query = query.into();
        // fetch_add returns the previous value; this request owns previous + 1.
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.query_tx.send_replace(query.clone());

        let too_short = query.chars().count() < self.config.min_query_len;
        if self.use_local.load(Ordering::SeqCst) || too_short {
            self.results_tx.send_replace(Vec::new());
            return None;
        }

        let source = Arc::clone(&self.source);
        let token = Arc::clone(&self.generation);
        let results_tx = self.results_tx.clone();
        let locale = self.config.locale.clone();
        let debounce = self.config.debounce;

        Some(tokio::spawn(async move {
            sleep(debounce).await;
            if token.load(Ordering::SeqCst) != generation {
                debug!(%query, "debounced search superseded before dispatch");
                return;
            }

            let found = source.search_ingredients(&query, &locale).await;

            // A newer request may have started while this one was in flight.
            if token.load(Ordering::SeqCst) == generation {
                debug!(%query, results = found.len(), "publishing search results");
                results_tx.send_replace(found);
            } else {
                debug!(%query, "stale search response dropped");
            }
        }))
    }

    /// Toggle between the local catalog and remote search
    ///
    /// Re-evaluates the current query under the new mode, exactly as if it
    /// had been typed again: switching to local clears remote results,
    /// switching to remote schedules a search for the pending query.
    #[must_use]
    pub fn set_use_local(&self, use_local: bool) -> Option<JoinHandle<()>> {
        self.use_local.store(use_local, Ordering::SeqCst);
        let query = self.query_tx.borrow().clone();
        self.input_changed(query)
    }

    /// Whether the local catalog mode is active
    #[must_use]
    pub fn use_local(&self) -> bool {
        self.use_local.load(Ordering::SeqCst)
    }

    /// Subscribe to remote result updates
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Ingredient>> {
        self.results_tx.subscribe()
    }

    /// Snapshot of the latest remote results
    #[must_use]
    pub fn remote_results(&self) -> Vec<Ingredient> {
        self.results_tx.borrow().clone()
    }

    /// Local catalog entries matching a query
    #[must_use]
    pub fn local_matches(&self, query: &str) -> Vec<Ingredient> {
        catalog::filter_by_name(&self.local, query)
    }

    /// The ingredients currently visible for the pending query
    ///
    /// Local mode filters the catalog; remote mode returns the latest
    /// published results.
    #[must_use]
    pub fn visible(&self) -> Vec<Ingredient> {
        if self.use_local() {
            let query = self.query_tx.borrow().clone();
            self.local_matches(&query)
        } else {
            self.remote_results()
        }
    }
}
