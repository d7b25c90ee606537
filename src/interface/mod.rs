pub mod prompts;
pub mod render;

pub use prompts::{prompt_filter, resolve_food_name};
pub use render::{display_food, display_subset};
