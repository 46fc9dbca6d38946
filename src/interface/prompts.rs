use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::catalog::IngredientCatalog;
use crate::error::{BurgerError, Result};
use crate::models::{Ingredient, Money, Variant};

/// Prompt for the burger variant.
pub fn prompt_variant() -> Result<Variant> {
    let options = [
        "Classic (up to 4 added ingredients)",
        "Healthy (integral bun, up to 6 added ingredients)",
        "Premium (comes with fries and a drink, no additions)",
    ];

    let selection = Select::new()
        .with_prompt("Which burger would you like?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => Variant::Classic,
        1 => Variant::Healthy,
        _ => Variant::Premium,
    })
}

/// Prompt for the bun type.
pub fn prompt_bun() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Bun type")
        .default("Normal".to_string())
        .interact_text()?;

    Ok(input.trim().to_string())
}

/// Prompt for the protein type.
pub fn prompt_protein() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Protein")
        .default("Res".to_string())
        .interact_text()?;

    Ok(input.trim().to_string())
}

/// Prompt for the base price.
pub fn prompt_base_price() -> Result<Money> {
    let input: String = Input::new()
        .with_prompt("Base price")
        .default("10.00".to_string())
        .interact_text()?;

    Money::parse(&input).ok_or_else(|| {
        BurgerError::InvalidInput(format!(
            "'{}' is not a valid non-negative price",
            input.trim()
        ))
    })
}

/// Prompt for the next ingredient to add, with fuzzy matching against the
/// catalog. Returns `None` when the user finishes with an empty input.
pub fn prompt_ingredient(catalog: &IngredientCatalog) -> Result<Option<Ingredient>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Add an ingredient (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        // Try exact match first (case-insensitive)
        if let Some(ingredient) = catalog.get(input) {
            return Ok(Some(ingredient.clone()));
        }

        // Try fuzzy matching
        let mut candidates: Vec<(&Ingredient, f64)> = catalog
            .all_sorted()
            .into_iter()
            .map(|i| (i, jaro_winkler(&i.name.to_lowercase(), &input.to_lowercase())))
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No ingredient named '{}' on the board", input);
            continue;
        }

        if candidates.len() == 1 {
            let ingredient = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", ingredient.name))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(Some(ingredient.clone()));
            }
            continue;
        }

        // Multiple matches - let user select
        let mut options: Vec<String> = candidates
            .iter()
            .take(5)
            .map(|(i, _)| format!("{} ({})", i.name, i.price))
            .collect();

        let shown = options.len();
        options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&options)
            .default(0)
            .interact()?;

        if selection < shown {
            return Ok(Some(candidates[selection].0.clone()));
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
