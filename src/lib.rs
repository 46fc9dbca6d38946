pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod menu;
pub mod models;

pub use error::{BurgerError, Result};
pub use models::{AddOutcome, Burger, Ingredient, Money, Variant};
