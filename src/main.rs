use clap::Parser;
use std::path::Path;

use burger_maker_rs::catalog::{IngredientCatalog, load_catalog, save_catalog};
use burger_maker_rs::cli::{Cli, Command};
use burger_maker_rs::error::{BurgerError, Result};
use burger_maker_rs::interface::{
    display_add_outcome, display_burger, display_catalog, prompt_base_price, prompt_bun,
    prompt_ingredient, prompt_protein, prompt_variant, prompt_yes_no,
};
use burger_maker_rs::menu::sample_burgers;
use burger_maker_rs::models::{Burger, Variant};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Menu => cmd_menu(),
        Command::Order => cmd_order(&cli.file),
        Command::Catalog { name, init } => cmd_catalog(&cli.file, name, init),
    }
}

/// Print the fixed sample menu.
fn cmd_menu() -> Result<()> {
    println!("=== Burger menu ===");
    println!();

    for (label, burger) in sample_burgers() {
        display_burger(label, &burger);
    }

    Ok(())
}

/// Build burgers interactively until the user stops.
fn cmd_order(file_path: &str) -> Result<()> {
    let catalog = open_catalog(file_path)?;
    if catalog.is_empty() {
        return Err(BurgerError::EmptyCatalog);
    }

    loop {
        let variant = prompt_variant()?;

        let mut burger = match variant {
            Variant::Classic => {
                Burger::classic(prompt_bun()?, prompt_protein()?, prompt_base_price()?)
            }
            Variant::Healthy => Burger::healthy(prompt_protein()?, prompt_base_price()?),
            Variant::Premium => {
                Burger::premium(prompt_bun()?, prompt_protein()?, prompt_base_price()?)
            }
        };

        if variant == Variant::Premium {
            println!("Premium burgers come with Fries and a Drink included.");
        }

        while let Some(ingredient) = prompt_ingredient(&catalog)? {
            let name = ingredient.name.clone();
            let outcome = burger.try_add(ingredient);
            display_add_outcome(&name, outcome);
        }

        println!();
        display_burger(&format!("{} burger", variant.name()), &burger);

        if !prompt_yes_no("Build another burger?", false)? {
            break;
        }
    }

    Ok(())
}

/// Show the catalog, look up one ingredient, or write the built-in board.
fn cmd_catalog(file_path: &str, name: Option<String>, init: bool) -> Result<()> {
    if init {
        let catalog = IngredientCatalog::builtin();
        save_catalog(file_path, &catalog.to_ingredients())?;
        println!("Wrote {} ingredients to {}", catalog.len(), file_path);
        return Ok(());
    }

    let catalog = open_catalog(file_path)?;

    match name {
        Some(name) => {
            let ingredient = catalog
                .get(&name)
                .ok_or_else(|| BurgerError::IngredientNotFound(name.clone()))?;
            println!("{} - {}", ingredient.name, ingredient.price);
        }
        None => display_catalog(&catalog.all_sorted()),
    }

    Ok(())
}

/// Load the catalog file if present, falling back to the built-in board.
fn open_catalog(file_path: &str) -> Result<IngredientCatalog> {
    let path = Path::new(file_path);

    if path.exists() {
        let ingredients = load_catalog(path)?;
        println!("Loaded {} ingredients from {}", ingredients.len(), file_path);
        Ok(IngredientCatalog::new(ingredients))
    } else {
        Ok(IngredientCatalog::builtin())
    }
}
