pub mod burger;
pub mod ingredient;
pub mod money;

pub use burger::{AddOutcome, Burger, Variant};
pub use ingredient::Ingredient;
pub use money::Money;
