// ABOUTME: File-backed recipe store with a single JSON document per data directory
// ABOUTME: Atomic temp-file writes, lenient loads, selection tracking for the editor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Recipe Store
//!
//! Recipes persist as one JSON array in a named slot under the data
//! directory. The file is read once when the store opens and rewritten in
//! full after every list mutation. Missing or malformed data is never
//! fatal: it logs a warning and the store starts empty.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::errors::{AppError, AppResult};
use crate::models::Recipe;

/// File name of the recipe slot inside the data directory
pub const RECIPES_FILE: &str = "recipes.json";

/// Serialization of the recipe list to a single JSON file
#[derive(Debug, Clone)]
pub struct RecipeStorage {
    path: PathBuf,
}

impl RecipeStorage {
    /// Storage bound to an explicit file path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the conventional slot inside a data directory
    #[must_use]
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(RECIPES_FILE))
    }

    /// The backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted recipe list
    ///
    /// A missing file yields an empty list. Unreadable or malformed content
    /// also yields an empty list, with a warning, so stale state can never
    /// prevent startup.
    #[must_use]
    pub fn load(&self) -> Vec<Recipe> {
        if !self.path.exists() {
            return Vec::new();
        }
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "could not read recipe file, starting empty");
                return Vec::new();
            }
        };
        serde_json::from_str(&content).unwrap_or_else(|error| {
            warn!(path = %self.path.display(), %error, "malformed recipe file, starting empty");
            Vec::new()
        })
    }

    /// Write the full recipe list atomically (temp file + rename)
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created, the list
    /// does not serialize, or the file cannot be written or renamed.
    pub fn save(&self, recipes: &[Recipe]) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::storage(format!("cannot create {}: {e}", parent.display()))
            })?;
        }

        let json = serde_json::to_string_pretty(recipes)?;

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, &json)
            .map_err(|e| AppError::storage(format!("cannot write {}: {e}", tmp_path.display())))?;
        std::fs::rename(&tmp_path, &self.path).map_err(|e| {
            AppError::storage(format!(
                "cannot rename {} to {}: {e}",
                tmp_path.display(),
                self.path.display()
            ))
        })?;

        info!(path = %self.path.display(), count = recipes.len(), "persisted recipes");
        Ok(())
    }
}

/// In-memory recipe list with write-through persistence and a selection
///
/// Every mutation validates first, then applies, then persists. Selection
/// points at a recipe by id and is cleared when that recipe is replaced or
/// removed.
#[derive(Debug)]
pub struct RecipeStore {
    storage: RecipeStorage,
    recipes: Vec<Recipe>,
    selected: Option<String>,
}

impl RecipeStore {
    /// Open the store, loading whatever the storage currently holds
    #[must_use]
    pub fn open(storage: RecipeStorage) -> Self {
        let recipes = storage.load();
        Self {
            storage,
            recipes,
            selected: None,
        }
    }

    /// All recipes, in insertion order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Look up a recipe by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Add a new recipe
    ///
    /// Ingredient-less drafts are accepted here; the full completion check
    /// belongs to [`Self::save_recipe`].
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank, the id is already taken, or
    /// persisting fails.
    pub fn add(&mut self, recipe: Recipe) -> AppResult<()> {
        recipe.validate_name()?;
        if self.get(&recipe.id).is_some() {
            return Err(AppError::already_exists(format!("Recipe {}", recipe.id)));
        }
        self.recipes.push(recipe);
        self.persist()
    }

    /// Replace an existing recipe
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank, the id is unknown, or
    /// persisting fails.
    pub fn update(&mut self, recipe: Recipe) -> AppResult<()> {
        recipe.validate_name()?;
        let Some(slot) = self.recipes.iter_mut().find(|r| r.id == recipe.id) else {
            return Err(AppError::not_found(format!("Recipe {}", recipe.id)));
        };
        *slot = recipe;
        self.persist()
    }

    /// Save a completed recipe: replace when the id exists, append otherwise
    ///
    /// Runs the full completion check (name and at least one ingredient).
    /// Replacing the selected recipe clears the selection, which is how the
    /// editor signals it is done with the entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the completion check fails or persisting fails.
    pub fn save_recipe(&mut self, recipe: Recipe) -> AppResult<()> {
        recipe.validate()?;
        let id = recipe.id.clone();
        if let Some(slot) = self.recipes.iter_mut().find(|r| r.id == id) {
            *slot = recipe;
            if self.selected.as_deref() == Some(id.as_str()) {
                self.selected = None;
            }
        } else {
            self.recipes.push(recipe);
        }
        self.persist()
    }

    /// Remove a recipe by id
    ///
    /// # Errors
    ///
    /// Returns an error if the id is unknown or persisting fails.
    pub fn remove(&mut self, id: &str) -> AppResult<()> {
        let before = self.recipes.len();
        self.recipes.retain(|r| r.id != id);
        if self.recipes.len() == before {
            return Err(AppError::not_found(format!("Recipe {id}")));
        }
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        self.persist()
    }

    /// Select a recipe for editing
    ///
    /// # Errors
    ///
    /// Returns an error if the id is unknown.
    pub fn select(&mut self, id: &str) -> AppResult<()> {
        if self.get(id).is_none() {
            return Err(AppError::not_found(format!("Recipe {id}")));
        }
        self.selected = Some(id.to_owned());
        Ok(())
    }

    /// The currently selected recipe, if any
    #[must_use]
    pub fn selected(&self) -> Option<&Recipe> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    /// Drop the selection without touching the list
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    fn persist(&self) -> AppResult<()> {
        self.storage.save(&self.recipes)
    }
}
