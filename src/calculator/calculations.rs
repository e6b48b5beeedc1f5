use crate::calculator::constants::*;
use crate::models::{ActivityLevel, MacroInputs, MacroOutcome, MacroTargets, Sex, WeightGoal};

/// Round to the nearest integer, halves toward positive infinity.
///
/// 2.5 -> 3, -2.5 -> -2. Avoids the `(x + 0.5).floor()` precision trap
/// for values just below one half. The result stays f64; conversion to
/// integers happens once, in [`MacroTargets::from_rounded`].
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Basal metabolic rate from weight (lb), height (in) and age (years).
pub fn basal_metabolic_rate(sex: Sex, weight: f64, height: f64, age: f64) -> f64 {
    match sex {
        Sex::Male => {
            MALE_BMR_BASE + (MALE_WEIGHT_COEF * weight) + (MALE_HEIGHT_COEF * height)
                - (MALE_AGE_COEF * age)
        }
        Sex::Female => {
            FEMALE_BMR_BASE + (FEMALE_WEIGHT_COEF * weight) + (FEMALE_HEIGHT_COEF * height)
                - (FEMALE_AGE_COEF * age)
        }
    }
}

/// Multiplier applied to BMR for a given activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => SEDENTARY_MULT,
        ActivityLevel::LightlyActive => LIGHTLY_ACTIVE_MULT,
        ActivityLevel::ModeratelyActive => MODERATELY_ACTIVE_MULT,
        ActivityLevel::VeryActive => VERY_ACTIVE_MULT,
        ActivityLevel::ExtremelyActive => EXTREMELY_ACTIVE_MULT,
    }
}

/// Maintenance calories: BMR scaled by activity, rounded.
pub fn maintenance_calories(bmr: f64, level: ActivityLevel) -> f64 {
    round_half_up(bmr * activity_multiplier(level))
}

/// Apply the goal surplus or deficit to already-rounded calories.
pub fn apply_goal(calories: f64, goal: WeightGoal) -> f64 {
    match goal {
        WeightGoal::Gain => calories + GOAL_CALORIE_DELTA,
        WeightGoal::Lose => calories - GOAL_CALORIE_DELTA,
        WeightGoal::Maintain => calories,
    }
}

/// Split a calorie budget into macro grams.
///
/// Protein comes straight from body weight. Fat is a fixed share of
/// `calories`. Carbohydrates take whatever is left after protein and the
/// rounded fat grams are subtracted. `calories` must already be rounded.
pub fn split_macros(calories: f64, weight: f64) -> MacroTargets {
    let proteins = round_half_up(weight * PROTEIN_G_PER_LB);
    let mut remaining_cals = calories - weight * PROTEIN_G_PER_LB * KCAL_PER_G_PROTEIN;

    let fats = round_half_up((calories * FAT_CALORIE_SHARE) / KCAL_PER_G_FAT);
    remaining_cals -= fats * KCAL_PER_G_FAT;

    let carbohydrates = round_half_up(remaining_cals / KCAL_PER_G_CARB);

    MacroTargets::from_rounded(calories, proteins, fats, carbohydrates)
}

/// Compute daily targets, or `Incomplete` when any input is missing.
pub fn compute_macros(inputs: &MacroInputs) -> MacroOutcome {
    let (Some(height), Some(weight), Some(age), Some(sex), Some(goal), Some(level)) = (
        inputs.height,
        inputs.weight,
        inputs.age,
        inputs.sex,
        inputs.weight_goal,
        inputs.activity_level,
    ) else {
        return MacroOutcome::Incomplete;
    };

    let bmr = basal_metabolic_rate(sex, weight, height, age);
    let calories = apply_goal(maintenance_calories(bmr, level), goal);

    MacroOutcome::Complete(split_macros(calories, weight))
}
