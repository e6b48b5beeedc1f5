mod post;
mod profile;
mod targets;

pub use post::{Post, PostDraft};
pub use profile::{ActivityLevel, MacroInputs, Sex, WeightGoal};
pub use targets::{MacroOutcome, MacroTargets};
