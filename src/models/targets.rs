use serde::{Deserialize, Serialize};

/// Daily calorie and macro targets, all rounded to whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Total daily calories (kcal).
    pub calories: i64,

    /// Protein in grams.
    pub proteins: i64,

    /// Fat in grams.
    pub fats: i64,

    /// Carbohydrates in grams.
    pub carbohydrates: i64,
}

impl MacroTargets {
    pub fn new(calories: i64, proteins: i64, fats: i64, carbohydrates: i64) -> Self {
        Self {
            calories,
            proteins,
            fats,
            carbohydrates,
        }
    }

    /// Build from already-rounded values. Out-of-range values saturate at
    /// the `i64` bounds; NaN becomes 0.
    pub fn from_rounded(calories: f64, proteins: f64, fats: f64, carbohydrates: f64) -> Self {
        Self::new(calories as i64, proteins as i64, fats as i64, carbohydrates as i64)
    }
}

/// Result of a calculation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroOutcome {
    Complete(MacroTargets),

    /// At least one input was missing; nothing was computed.
    Incomplete,
}

impl MacroOutcome {
    pub fn targets(&self) -> Option<MacroTargets> {
        match self {
            MacroOutcome::Complete(t) => Some(*t),
            MacroOutcome::Incomplete => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, MacroOutcome::Complete(_))
    }
}
