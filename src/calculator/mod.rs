pub mod calculations;
pub mod constants;
pub mod controller;

pub use calculations::{
    activity_multiplier, apply_goal, basal_metabolic_rate, compute_macros, maintenance_calories,
    round_half_up, split_macros,
};
pub use constants::*;
pub use controller::MacroCalculator;
