use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{BurgerError, Result};
use crate::models::Ingredient;

/// Load the ingredient catalog from a JSON file.
///
/// Rejects entries with an empty name or negative price; deduplicates by
/// lowercase name (last occurrence wins).
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Ingredient>> {
    let content = fs::read_to_string(path)?;
    let ingredients: Vec<Ingredient> = serde_json::from_str(&content)?;

    for ingredient in &ingredients {
        if !ingredient.is_valid() {
            return Err(BurgerError::InvalidInput(format!(
                "catalog entry '{}' has an empty name or negative price",
                ingredient.name
            )));
        }
    }

    let mut seen: HashMap<String, Ingredient> = HashMap::new();
    for ingredient in ingredients {
        seen.insert(ingredient.key(), ingredient);
    }

    Ok(seen.into_values().collect())
}

/// Save the ingredient catalog to a JSON file.
///
/// Deduplicates by lowercase name before saving.
pub fn save_catalog<P: AsRef<Path>>(path: P, ingredients: &[Ingredient]) -> Result<()> {
    let mut seen: HashMap<String, &Ingredient> = HashMap::new();
    for ingredient in ingredients {
        seen.insert(ingredient.key(), ingredient);
    }

    let deduped: Vec<&Ingredient> = seen.into_values().collect();
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_save_roundtrip() {
        let json = r#"[
            {"Name": "Lettuce", "PriceCents": 50}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let ingredients = load_catalog(file.path()).unwrap();
        assert_eq!(ingredients.len(), 1);
        assert_eq!(ingredients[0].name, "Lettuce");
        assert_eq!(ingredients[0].price, Money::from_cents(50));

        let out_file = NamedTempFile::new().unwrap();
        save_catalog(out_file.path(), &ingredients).unwrap();

        let reloaded = load_catalog(out_file.path()).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].name, "Lettuce");
    }

    #[test]
    fn test_deduplication() {
        let json = r#"[
            {"Name": "Cheese", "PriceCents": 150},
            {"Name": "cheese", "PriceCents": 175}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let ingredients = load_catalog(file.path()).unwrap();
        assert_eq!(ingredients.len(), 1);
        // Last occurrence wins
        assert_eq!(ingredients[0].price, Money::from_cents(175));
    }

    #[test]
    fn test_invalid_entries_are_rejected() {
        let json = r#"[
            {"Name": "Lettuce", "PriceCents": -50}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, BurgerError::InvalidInput(_)));
    }
}
