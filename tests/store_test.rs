// ABOUTME: Integration tests for recipe persistence and store operations
// ABOUTME: Covers lenient loads, atomic writes, mutation persistence, and selection
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Tests for the recipe store including:
//! - Lenient loading of missing or malformed files
//! - Write-through persistence across reopen
//! - Draft vs completed-recipe validation
//! - Selection lifecycle on delete and replace

use recetario::catalog;
use recetario::models::Recipe;
use recetario::store::{RecipeStorage, RecipeStore, RECIPES_FILE};

fn sample_recipe(name: &str) -> Recipe {
    let mut recipe = Recipe::new(name);
    recipe.add_ingredient(catalog::builtin_by_id("1").unwrap().clone());
    recipe
}

// ============================================================================
// Load Behavior Tests
// ============================================================================

#[test]
fn test_missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecipeStore::open(RecipeStorage::in_dir(dir.path()));
    assert!(store.recipes().is_empty());
}

#[test]
fn test_malformed_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(RECIPES_FILE);
    std::fs::write(&path, "{\"definitely\": \"not a recipe list\"").unwrap();

    let store = RecipeStore::open(RecipeStorage::in_dir(dir.path()));
    assert!(store.recipes().is_empty());
}

#[test]
fn test_wrong_shape_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(RECIPES_FILE);
    // Valid JSON, wrong type
    std::fs::write(&path, "{\"recipes\": 42}").unwrap();

    let store = RecipeStore::open(RecipeStorage::in_dir(dir.path()));
    assert!(store.recipes().is_empty());
}

// ============================================================================
// Persistence Tests
// ============================================================================

#[test]
fn test_mutations_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let first_id;
    {
        let mut store = RecipeStore::open(RecipeStorage::in_dir(dir.path()));
        let recipe = sample_recipe("Paella");
        first_id = recipe.id.clone();
        store.add(recipe).unwrap();
        store.add(sample_recipe("Tortilla")).unwrap();
    }

    let mut store = RecipeStore::open(RecipeStorage::in_dir(dir.path()));
    assert_eq!(store.recipes().len(), 2);
    let loaded = store.get(&first_id).unwrap();
    assert_eq!(loaded.name, "Paella");
    assert_eq!(loaded.ingredients.len(), 1);
    assert!(loaded.total_nutrition.calories > 0.0);

    store.remove(&first_id).unwrap();
    drop(store);

    let store = RecipeStore::open(RecipeStorage::in_dir(dir.path()));
    assert_eq!(store.recipes().len(), 1);
    assert!(store.get(&first_id).is_none());
}

#[test]
fn test_update_replaces_persisted_content() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = RecipeStore::open(RecipeStorage::in_dir(dir.path()));

    let mut recipe = sample_recipe("Arroz");
    let id = recipe.id.clone();
    store.add(recipe.clone()).unwrap();

    recipe.set_quantity(0, 300.0).unwrap();
    store.update(recipe).unwrap();
    drop(store);

    let store = RecipeStore::open(RecipeStorage::in_dir(dir.path()));
    let loaded = store.get(&id).unwrap();
    assert!((loaded.ingredients[0].quantity - 300.0).abs() < f64::EPSILON);
}

#[test]
fn test_atomic_write_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = RecipeStore::open(RecipeStorage::in_dir(dir.path()));
    store.add(sample_recipe("Crema")).unwrap();

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .filter(|name| name.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");
    assert!(dir.path().join(RECIPES_FILE).exists());
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_blank_name_saves_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = RecipeStore::open(RecipeStorage::in_dir(dir.path()));

    let err = store.add(Recipe::new("  ")).unwrap_err();
    assert!(err.message.contains("Recipe name"));
    assert!(store.recipes().is_empty());
    assert!(
        !dir.path().join(RECIPES_FILE).exists(),
        "rejected recipe must not be persisted"
    );
}

#[test]
fn test_ingredient_less_draft_is_storable() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = RecipeStore::open(RecipeStorage::in_dir(dir.path()));

    let draft = Recipe::new("Pending idea");
    let id = draft.id.clone();
    store.add(draft).unwrap();
    drop(store);

    let store = RecipeStore::open(RecipeStorage::in_dir(dir.path()));
    assert!(store.get(&id).unwrap().ingredients.is_empty());
}

#[test]
fn test_save_recipe_requires_ingredients() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = RecipeStore::open(RecipeStorage::in_dir(dir.path()));

    let err = store.save_recipe(Recipe::new("Sopa")).unwrap_err();
    assert!(err.message.contains("at least one ingredient"));
    assert!(store.recipes().is_empty());
}

#[test]
fn test_update_unknown_id_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = RecipeStore::open(RecipeStorage::in_dir(dir.path()));

    let err = store.update(sample_recipe("Fantasma")).unwrap_err();
    assert!(err.message.contains("not found"));

    let err = store.remove("missing-id").unwrap_err();
    assert!(err.message.contains("not found"));
}

// ============================================================================
// Selection Tests
// ============================================================================

#[test]
fn test_selection_follows_recipe_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = RecipeStore::open(RecipeStorage::in_dir(dir.path()));

    let recipe = sample_recipe("Lentejas");
    let id = recipe.id.clone();
    store.add(recipe).unwrap();

    assert!(store.select("unknown").is_err());
    store.select(&id).unwrap();
    assert_eq!(store.selected().unwrap().id, id);

    store.clear_selection();
    assert!(store.selected().is_none());
}

#[test]
fn test_save_recipe_replace_clears_selection() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = RecipeStore::open(RecipeStorage::in_dir(dir.path()));

    let mut recipe = sample_recipe("Cocido");
    let id = recipe.id.clone();
    store.add(recipe.clone()).unwrap();
    store.select(&id).unwrap();

    recipe.add_ingredient(catalog::builtin_by_id("2").unwrap().clone());
    store.save_recipe(recipe).unwrap();

    assert!(store.selected().is_none(), "replacing the selected recipe ends the edit");
    assert_eq!(store.get(&id).unwrap().ingredients.len(), 2);
}

#[test]
fn test_save_recipe_appends_new_id() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = RecipeStore::open(RecipeStorage::in_dir(dir.path()));

    store.save_recipe(sample_recipe("Nueva")).unwrap();
    assert_eq!(store.recipes().len(), 1);
}
