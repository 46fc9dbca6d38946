pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_base_price, prompt_bun, prompt_ingredient, prompt_protein, prompt_variant,
    prompt_yes_no,
};
pub use render::{display_add_outcome, display_burger, display_catalog};
