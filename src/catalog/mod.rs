mod persistence;
mod store;

pub use persistence::{load_catalog, save_catalog};
pub use store::IngredientCatalog;
