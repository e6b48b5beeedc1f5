use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashError;

/// Biological sex, selects the BMR coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

/// Direction of the daily calorie adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightGoal {
    Gain,
    Lose,
    Maintain,
}

/// Activity level, selects the multiplier applied to BMR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtremelyActive,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    /// Literal shown to and accepted from the user.
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }

    pub fn literals() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.as_str()).collect()
    }
}

impl WeightGoal {
    pub const ALL: [WeightGoal; 3] = [WeightGoal::Gain, WeightGoal::Lose, WeightGoal::Maintain];

    pub fn as_str(self) -> &'static str {
        match self {
            WeightGoal::Gain => "Gain",
            WeightGoal::Lose => "Lose",
            WeightGoal::Maintain => "Maintain",
        }
    }

    pub fn literals() -> Vec<&'static str> {
        Self::ALL.iter().map(|g| g.as_str()).collect()
    }
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtremelyActive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::ExtremelyActive => "Extremely Active",
        }
    }

    pub fn literals() -> Vec<&'static str> {
        Self::ALL.iter().map(|a| a.as_str()).collect()
    }
}

fn parse_literal<T: Copy>(
    input: &str,
    all: &[T],
    as_str: fn(T) -> &'static str,
    what: &str,
) -> Result<T, DashError> {
    all.iter()
        .copied()
        .find(|v| as_str(*v) == input)
        .ok_or_else(|| DashError::InvalidInput(format!("'{}' is not a valid {}", input, what)))
}

impl FromStr for Sex {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_literal(s, &Self::ALL, Sex::as_str, "sex")
    }
}

impl FromStr for WeightGoal {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_literal(s, &Self::ALL, WeightGoal::as_str, "weight goal")
    }
}

impl FromStr for ActivityLevel {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_literal(s, &Self::ALL, ActivityLevel::as_str, "activity level")
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for WeightGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The six calculator inputs. `None` means the field was left empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MacroInputs {
    /// Height in inches.
    pub height: Option<f64>,

    /// Weight in pounds.
    pub weight: Option<f64>,

    /// Age in years. Kept as f64 so any run of digits the field accepts
    /// is usable.
    pub age: Option<f64>,
    pub sex: Option<Sex>,
    pub weight_goal: Option<WeightGoal>,
    pub activity_level: Option<ActivityLevel>,
}

impl MacroInputs {
    pub fn new(
        height: f64,
        weight: f64,
        age: f64,
        sex: Sex,
        weight_goal: WeightGoal,
        activity_level: ActivityLevel,
    ) -> Self {
        Self {
            height: Some(height),
            weight: Some(weight),
            age: Some(age),
            sex: Some(sex),
            weight_goal: Some(weight_goal),
            activity_level: Some(activity_level),
        }
    }

    /// True when every field is present.
    pub fn is_complete(&self) -> bool {
        self.height.is_some()
            && self.weight.is_some()
            && self.age.is_some()
            && self.sex.is_some()
            && self.weight_goal.is_some()
            && self.activity_level.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals_round_trip_through_from_str() {
        for level in ActivityLevel::ALL {
            assert_eq!(level.as_str().parse::<ActivityLevel>().unwrap(), level);
        }
        assert_eq!("Female".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("Maintain".parse::<WeightGoal>().unwrap(), WeightGoal::Maintain);
    }

    #[test]
    fn test_from_str_is_exact() {
        assert!("male".parse::<Sex>().is_err());
        assert!("Lightly active".parse::<ActivityLevel>().is_err());
        assert!(" Gain".parse::<WeightGoal>().is_err());
    }

    #[test]
    fn test_candidate_order() {
        assert_eq!(Sex::literals(), vec!["Male", "Female"]);
        assert_eq!(WeightGoal::literals(), vec!["Gain", "Lose", "Maintain"]);
        assert_eq!(
            ActivityLevel::literals(),
            vec![
                "Sedentary",
                "Lightly Active",
                "Moderately Active",
                "Very Active",
                "Extremely Active"
            ]
        );
    }

    #[test]
    fn test_is_complete() {
        let mut inputs = MacroInputs::new(
            70.0,
            150.0,
            25.0,
            Sex::Male,
            WeightGoal::Maintain,
            ActivityLevel::Sedentary,
        );
        assert!(inputs.is_complete());

        inputs.age = None;
        assert!(!inputs.is_complete());
        assert!(!MacroInputs::default().is_complete());
    }
}
