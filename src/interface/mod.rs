pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_posts_csv;
pub use prompts::{
    closest_literal, collect_macro_inputs, parse_choice, prompt_yes_no, PromptDialog,
};
pub use render::{display_posts, display_targets};
