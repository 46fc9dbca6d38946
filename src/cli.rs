use clap::{Parser, Subcommand};

/// BurgerMaker — prices burgers with per-variant rules for added ingredients.
#[derive(Parser, Debug)]
#[command(name = "burger_maker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the ingredient catalog JSON file.
    #[arg(short, long, default_value = "ingredients.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the sample menu with one burger of each variant.
    Menu,

    /// Build burgers interactively from the ingredient catalog.
    Order,

    /// Show the ingredient catalog, or look up a single ingredient.
    Catalog {
        /// Ingredient name to look up.
        name: Option<String>,

        /// Write the built-in catalog to the catalog file.
        #[arg(long)]
        init: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Menu
    }
}
