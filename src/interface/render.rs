use crate::models::{AddOutcome, Burger, Ingredient};

/// Print a labeled burger report.
pub fn display_burger(label: &str, burger: &Burger) {
    println!("{}:", label);
    println!("{}", burger.render_details());
    println!();
}

/// Print the advisory notice for an add attempt.
pub fn display_add_outcome(name: &str, outcome: AddOutcome) {
    match outcome {
        AddOutcome::Added => println!("Added: {}", name),
        AddOutcome::RejectedFull => {
            println!("No more ingredients can be added. Maximum reached.")
        }
        AddOutcome::RejectedLocked => {
            println!("Premium burgers do not allow added ingredients.")
        }
    }
}

/// Display the ingredient board with aligned prices.
pub fn display_catalog(ingredients: &[&Ingredient]) {
    if ingredients.is_empty() {
        println!("Ingredient board: (none)");
        return;
    }

    println!();
    println!("=== Ingredient board ({} items) ===", ingredients.len());
    println!();

    // Find max name length for alignment
    let max_name_len = ingredients.iter().map(|i| i.name.len()).max().unwrap_or(10);

    for ingredient in ingredients {
        println!(
            "  {:<width$} - {}",
            ingredient.name,
            ingredient.price,
            width = max_name_len
        );
    }

    println!();
}
