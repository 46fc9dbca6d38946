use serde::{Deserialize, Serialize};

use crate::models::Money;

/// A named add-on with a fixed price.
///
/// Immutable once created; a burger owns its own copies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "PriceCents")]
    pub price: Money,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Basic validation: non-empty name and non-negative price.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.price.is_negative()
    }

    /// Canonical key for catalog lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
