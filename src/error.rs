use thiserror::Error;

#[derive(Debug, Error)]
pub enum BurgerError {
    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("The ingredient catalog is empty")]
    EmptyCatalog,
}

pub type Result<T> = std::result::Result<T, BurgerError>;
