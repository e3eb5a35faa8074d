// ABOUTME: Recetario CLI - recipe builder with catalog and OpenFoodFacts ingredient lookup
// ABOUTME: Manages persistent recipes and prints per-ingredient and total nutrition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Recetario CLI
//!
//! Usage:
//! ```bash
//! # Search the built-in catalog
//! recetario search tomato
//!
//! # Search OpenFoodFacts instead
//! recetario search "tomate frito" --remote --locale es
//!
//! # Look up a packaged product by barcode
//! recetario barcode 8410076470129
//!
//! # Build a recipe
//! recetario recipe new "Arroz con pollo" --description "Sunday classic"
//! recetario recipe add <recipe-id> 1
//! recetario recipe set <recipe-id> 0 --quantity 200 --unit g
//! recetario recipe show <recipe-id>
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use recetario::{
    catalog,
    config::AppConfig,
    errors::AppError,
    external::OpenFoodFactsClient,
    logging::LoggingConfig,
    models::{Ingredient, IngredientUnit, NutritionTotals, Recipe},
    sources::{IngredientSource, OpenFoodFactsSource},
    store::{RecipeStorage, RecipeStore},
};

/// Minimum query length for remote search
const MIN_REMOTE_QUERY_LEN: usize = 3;

#[derive(Parser)]
#[command(
    name = "recetario",
    about = "Recipe builder with live nutrition math",
    long_about = "Build recipes from a built-in ingredient catalog or OpenFoodFacts data, \
                  with per-100g nutrition scaled by quantity and unit."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Search ingredients in the catalog, or on Open Food Facts with --remote
    Search {
        /// Search terms
        query: String,

        /// Query Open Food Facts instead of the built-in catalog
        #[arg(long)]
        remote: bool,

        /// Language code for remote search (default from config)
        #[arg(long)]
        locale: Option<String>,
    },

    /// Look up a packaged product by barcode on Open Food Facts
    Barcode {
        /// Product barcode (EAN/UPC)
        code: String,
    },

    /// Recipe management commands
    Recipe {
        #[command(subcommand)]
        action: RecipeCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum RecipeCommand {
    /// Create a new recipe draft
    New {
        /// Recipe name
        name: String,

        /// Short description
        #[arg(long)]
        description: Option<String>,

        /// Cooking instructions
        #[arg(long)]
        instructions: Option<String>,
    },

    /// List all recipes
    List,

    /// Show one recipe with per-ingredient nutrition
    Show {
        /// Recipe id
        id: String,
    },

    /// Delete a recipe
    Delete {
        /// Recipe id
        id: String,
    },

    /// Add an ingredient to a recipe (repeated adds bump the quantity)
    Add {
        /// Recipe id
        recipe_id: String,

        /// Catalog ingredient id, or a barcode with --barcode
        ingredient_id: String,

        /// Treat the ingredient id as an Open Food Facts barcode
        #[arg(long)]
        barcode: bool,
    },

    /// Change quantity or unit of an ingredient entry
    Set {
        /// Recipe id
        recipe_id: String,

        /// Zero-based entry index (see `recipe show`)
        index: usize,

        /// New quantity in the entry's unit
        #[arg(long)]
        quantity: Option<f64>,

        /// New unit (g, kg, ml, l, pc, tbsp, cup)
        #[arg(long)]
        unit: Option<String>,
    },

    /// Remove an ingredient entry from a recipe
    RemoveIngredient {
        /// Recipe id
        recipe_id: String,

        /// Zero-based entry index
        index: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging_config = LoggingConfig::from_env();
    if cli.verbose {
        logging_config.level = "debug".into();
    }
    logging_config.init()?;

    let config = AppConfig::from_env();
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data_dir.clone());

    match cli.command {
        Command::Search {
            query,
            remote,
            locale,
        } => {
            if remote {
                let locale = locale.unwrap_or_else(|| config.locale.clone());
                search_remote(&config, &query, &locale).await;
            } else {
                search_catalog(&query);
            }
        }
        Command::Barcode { code } => {
            lookup_barcode(&config, &code).await;
        }
        Command::Recipe { action } => {
            let mut store = RecipeStore::open(RecipeStorage::in_dir(&data_dir));
            run_recipe_command(&mut store, &config, action).await?;
        }
    }

    Ok(())
}

fn search_catalog(query: &str) {
    let matches = catalog::filter_by_name(catalog::builtin_ingredients(), query);
    if matches.is_empty() {
        println!("No catalog ingredients match \"{query}\".");
        return;
    }
    for ingredient in matches {
        print_ingredient(&ingredient);
    }
}

fn remote_source(config: &AppConfig) -> OpenFoodFactsSource {
    OpenFoodFactsSource::new(OpenFoodFactsClient::new(config.open_food_facts()))
}

// Lookup failures degrade to empty results at the source layer, so these
// commands never exit nonzero for network trouble.
async fn search_remote(config: &AppConfig, query: &str, locale: &str) {
    if query.chars().count() < MIN_REMOTE_QUERY_LEN {
        println!(
            "Query too short for remote search (minimum {MIN_REMOTE_QUERY_LEN} characters)."
        );
        return;
    }

    let ingredients = remote_source(config).search_ingredients(query, locale).await;
    if ingredients.is_empty() {
        println!("No OpenFoodFacts products match \"{query}\".");
        return;
    }
    for ingredient in &ingredients {
        print_ingredient(ingredient);
    }
}

async fn lookup_barcode(config: &AppConfig, code: &str) {
    remote_source(config)
        .ingredient_by_barcode(code)
        .await
        .map_or_else(
            || println!("Product {code} not found."),
            |ingredient| print_ingredient(&ingredient),
        );
}

async fn run_recipe_command(
    store: &mut RecipeStore,
    config: &AppConfig,
    action: RecipeCommand,
) -> Result<()> {
    match action {
        RecipeCommand::New {
            name,
            description,
            instructions,
        } => {
            let mut recipe = Recipe::new(name);
            if let Some(description) = description {
                recipe = recipe.with_description(description);
            }
            if let Some(instructions) = instructions {
                recipe = recipe.with_instructions(instructions);
            }
            let id = recipe.id.clone();
            store.add(recipe)?;
            println!("Created recipe {id}");
        }
        RecipeCommand::List => {
            if store.recipes().is_empty() {
                println!("No recipes yet.");
                return Ok(());
            }
            for recipe in store.recipes() {
                println!(
                    "{}  ({} ingredients, {} kcal)  id {}",
                    recipe.name,
                    recipe.ingredients.len(),
                    recipe.total_nutrition.calories.round(),
                    recipe.id
                );
            }
        }
        RecipeCommand::Show { id } => {
            let recipe = store
                .get(&id)
                .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?;
            print_recipe(recipe);
        }
        RecipeCommand::Delete { id } => {
            store.remove(&id)?;
            println!("Deleted recipe {id}");
        }
        RecipeCommand::Add {
            recipe_id,
            ingredient_id,
            barcode,
        } => {
            let ingredient = if barcode {
                fetch_by_barcode(config, &ingredient_id).await?
            } else {
                catalog::builtin_by_id(&ingredient_id)
                    .cloned()
                    .ok_or_else(|| {
                        AppError::not_found(format!("Catalog ingredient {ingredient_id}"))
                    })?
            };

            let mut recipe = store
                .get(&recipe_id)
                .cloned()
                .ok_or_else(|| AppError::not_found(format!("Recipe {recipe_id}")))?;
            recipe.add_ingredient(ingredient);
            store.update(recipe)?;
            print_updated(store, &recipe_id);
        }
        RecipeCommand::Set {
            recipe_id,
            index,
            quantity,
            unit,
        } => {
            let mut recipe = store
                .get(&recipe_id)
                .cloned()
                .ok_or_else(|| AppError::not_found(format!("Recipe {recipe_id}")))?;
            if let Some(quantity) = quantity {
                recipe.set_quantity(index, quantity)?;
            }
            if let Some(unit) = unit {
                let unit = IngredientUnit::parse(&unit).ok_or_else(|| {
                    AppError::invalid_input(format!(
                        "Unknown unit: {unit} (try g, kg, ml, l, pc, tbsp, cup)"
                    ))
                })?;
                recipe.set_unit(index, unit)?;
            }
            store.update(recipe)?;
            print_updated(store, &recipe_id);
        }
        RecipeCommand::RemoveIngredient { recipe_id, index } => {
            let mut recipe = store
                .get(&recipe_id)
                .cloned()
                .ok_or_else(|| AppError::not_found(format!("Recipe {recipe_id}")))?;
            recipe.remove_ingredient(index)?;
            store.update(recipe)?;
            print_updated(store, &recipe_id);
        }
    }
    Ok(())
}

async fn fetch_by_barcode(config: &AppConfig, code: &str) -> Result<Ingredient> {
    remote_source(config)
        .ingredient_by_barcode(code)
        .await
        .ok_or_else(|| AppError::not_found(format!("Product {code}")))
        .map_err(Into::into)
}

fn print_updated(store: &RecipeStore, recipe_id: &str) {
    if let Some(recipe) = store.get(recipe_id) {
        print_recipe(recipe);
    }
}

fn print_ingredient(ingredient: &Ingredient) {
    println!(
        "{} [{}]  {} per 100 g  (id {})",
        ingredient.name,
        ingredient.category.display_name(),
        format_nutrition(&ingredient.per_100g()),
        ingredient.id
    );
}

fn print_recipe(recipe: &Recipe) {
    println!("{}", recipe.name);
    println!("{}", "=".repeat(60));
    if !recipe.description.is_empty() {
        println!("{}", recipe.description);
    }
    for (index, entry) in recipe.ingredients.iter().enumerate() {
        let nutrition = recetario::nutrition::nutrition_for(entry);
        println!(
            "  [{index}] {} {} {}  {}",
            entry.quantity,
            entry.unit.abbreviation(),
            entry.ingredient.name,
            format_nutrition(&nutrition)
        );
    }
    println!("{}", "-".repeat(60));
    println!("  Total: {}", format_nutrition(&recipe.total_nutrition));
    let macros = recipe.total_nutrition.macro_percentages();
    println!(
        "  Macros: {:.0}% protein / {:.0}% fat / {:.0}% carbs",
        macros.proteins_percent, macros.fats_percent, macros.carbs_percent
    );
    if !recipe.instructions.is_empty() {
        println!("{}", "-".repeat(60));
        println!("{}", recipe.instructions);
    }
    println!("  id {}", recipe.id);
}

fn format_nutrition(totals: &NutritionTotals) -> String {
    format!(
        "{} kcal  P {:.1} g  F {:.1} g  C {:.1} g",
        totals.calories.round(),
        totals.proteins,
        totals.fats,
        totals.carbs
    )
}
