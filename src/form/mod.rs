pub mod field;
pub mod macro_form;
pub mod stepper;
pub mod suggestions;

pub use field::{display_choice, FormField, ListenerId};
pub use macro_form::MacroForm;
pub use stepper::{Step, StepTracker, Stepper};
pub use suggestions::SuggestionFeed;
