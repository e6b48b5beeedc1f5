// ─────────────────────────────────────────────────────────────────────────────
// BMR coefficients (weight in pounds, height in inches)
// ─────────────────────────────────────────────────────────────────────────────

pub const MALE_BMR_BASE: f64 = 66.0;
pub const MALE_WEIGHT_COEF: f64 = 6.23;
pub const MALE_HEIGHT_COEF: f64 = 12.7;
pub const MALE_AGE_COEF: f64 = 6.8;

pub const FEMALE_BMR_BASE: f64 = 655.0;
pub const FEMALE_WEIGHT_COEF: f64 = 4.35;
pub const FEMALE_HEIGHT_COEF: f64 = 4.7;
pub const FEMALE_AGE_COEF: f64 = 4.7;

// ─────────────────────────────────────────────────────────────────────────────
// Activity multipliers
// ─────────────────────────────────────────────────────────────────────────────

pub const SEDENTARY_MULT: f64 = 1.2;
pub const LIGHTLY_ACTIVE_MULT: f64 = 1.375;
pub const MODERATELY_ACTIVE_MULT: f64 = 1.55;
pub const VERY_ACTIVE_MULT: f64 = 1.725;
pub const EXTREMELY_ACTIVE_MULT: f64 = 1.9;

/// Calories added for Gain, removed for Lose.
pub const GOAL_CALORIE_DELTA: f64 = 500.0;

// ─────────────────────────────────────────────────────────────────────────────
// Macro split
// ─────────────────────────────────────────────────────────────────────────────

/// Protein grams per pound of body weight.
pub const PROTEIN_G_PER_LB: f64 = 1.0;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;

/// Share of total calories assigned to fat.
pub const FAT_CALORIE_SHARE: f64 = 0.25;
