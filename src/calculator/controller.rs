use tracing::{debug, info};

use crate::calculator::calculations::compute_macros;
use crate::error::Result;
use crate::form::{MacroForm, Step, Stepper, SuggestionFeed};
use crate::models::{ActivityLevel, MacroOutcome, MacroTargets, Sex, WeightGoal};

/// Suggestion feeds for the three choice fields.
#[derive(Debug)]
struct Feeds {
    sex: SuggestionFeed,
    weight_goal: SuggestionFeed,
    activity_level: SuggestionFeed,
}

impl Feeds {
    fn attach(form: &mut MacroForm) -> Self {
        Self {
            sex: SuggestionFeed::attach(form.field_mut(Step::Sex), Sex::literals()),
            weight_goal: SuggestionFeed::attach(
                form.field_mut(Step::WeightGoal),
                WeightGoal::literals(),
            ),
            activity_level: SuggestionFeed::attach(
                form.field_mut(Step::ActivityLevel),
                ActivityLevel::literals(),
            ),
        }
    }

    fn detach(self, form: &mut MacroForm) {
        self.sex.detach(form.field_mut(Step::Sex));
        self.weight_goal.detach(form.field_mut(Step::WeightGoal));
        self.activity_level.detach(form.field_mut(Step::ActivityLevel));
    }
}

/// Holds the calculator form, its suggestion feeds and the last result.
#[derive(Debug)]
pub struct MacroCalculator {
    form: MacroForm,
    feeds: Option<Feeds>,

    targets: Option<MacroTargets>,
    results_valid: bool,

    selected_sex: Option<Sex>,
    selected_weight_goal: Option<WeightGoal>,
    selected_activity_level: Option<ActivityLevel>,
}

impl MacroCalculator {
    pub fn new() -> Result<Self> {
        let mut form = MacroForm::new()?;
        let feeds = Feeds::attach(&mut form);
        Ok(Self {
            form,
            feeds: Some(feeds),
            targets: None,
            results_valid: false,
            selected_sex: None,
            selected_weight_goal: None,
            selected_activity_level: None,
        })
    }

    pub fn form(&self) -> &MacroForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut MacroForm {
        &mut self.form
    }

    /// Set one field's value (validated).
    pub fn set_field(&mut self, step: Step, value: &str) -> Result<()> {
        self.form.set(step, value)
    }

    /// Compute targets from the current form values.
    ///
    /// When any field is missing the valid flag is cleared and the
    /// previously stored targets are left as they were.
    pub fn calculate(&mut self) -> MacroOutcome {
        let outcome = compute_macros(&self.form.inputs());

        match outcome {
            MacroOutcome::Complete(targets) => {
                info!(
                    calories = targets.calories,
                    proteins = targets.proteins,
                    fats = targets.fats,
                    carbohydrates = targets.carbohydrates,
                    "calculated macro targets"
                );
                self.targets = Some(targets);
                self.results_valid = true;
            }
            MacroOutcome::Incomplete => {
                debug!("calculation skipped, inputs incomplete");
                self.results_valid = false;
            }
        }

        outcome
    }

    /// Clear results, selections and fields, restart the suggestion feeds
    /// and send the stepper back to its first step.
    pub fn reset(&mut self, stepper: &mut dyn Stepper) {
        self.selected_sex = None;
        self.selected_weight_goal = None;
        self.selected_activity_level = None;

        if let Some(old) = self.feeds.take() {
            old.detach(&mut self.form);
        }
        self.form.clear();
        self.feeds = Some(Feeds::attach(&mut self.form));

        self.targets = None;
        self.results_valid = false;

        stepper.reset();
        info!("calculator reset");
    }

    /// Last stored targets, valid or not.
    pub fn targets(&self) -> Option<MacroTargets> {
        self.targets
    }

    /// Targets only when the last calculation succeeded.
    pub fn valid_targets(&self) -> Option<MacroTargets> {
        if self.results_valid { self.targets } else { None }
    }

    pub fn results_valid(&self) -> bool {
        self.results_valid
    }

    /// Suggestion feed for a choice step; `None` for numeric steps.
    pub fn suggestions(&self, step: Step) -> Option<&SuggestionFeed> {
        let feeds = self.feeds.as_ref()?;
        match step {
            Step::Sex => Some(&feeds.sex),
            Step::WeightGoal => Some(&feeds.weight_goal),
            Step::ActivityLevel => Some(&feeds.activity_level),
            Step::Height | Step::Weight | Step::Age => None,
        }
    }

    pub fn select_sex(&mut self, sex: Sex) -> Result<()> {
        self.form.set(Step::Sex, sex.as_str())?;
        self.selected_sex = Some(sex);
        Ok(())
    }

    pub fn select_weight_goal(&mut self, goal: WeightGoal) -> Result<()> {
        self.form.set(Step::WeightGoal, goal.as_str())?;
        self.selected_weight_goal = Some(goal);
        Ok(())
    }

    pub fn select_activity_level(&mut self, level: ActivityLevel) -> Result<()> {
        self.form.set(Step::ActivityLevel, level.as_str())?;
        self.selected_activity_level = Some(level);
        Ok(())
    }

    pub fn selected_sex(&self) -> Option<Sex> {
        self.selected_sex
    }

    pub fn selected_weight_goal(&self) -> Option<WeightGoal> {
        self.selected_weight_goal
    }

    pub fn selected_activity_level(&self) -> Option<ActivityLevel> {
        self.selected_activity_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::StepTracker;

    fn fill(calc: &mut MacroCalculator) {
        calc.set_field(Step::Height, "70").unwrap();
        calc.set_field(Step::Weight, "150").unwrap();
        calc.set_field(Step::Age, "25").unwrap();
        calc.select_sex(Sex::Male).unwrap();
        calc.select_weight_goal(WeightGoal::Maintain).unwrap();
        calc.select_activity_level(ActivityLevel::Sedentary).unwrap();
    }

    #[test]
    fn test_calculate_stores_targets() {
        let mut calc = MacroCalculator::new().unwrap();
        fill(&mut calc);

        let outcome = calc.calculate();
        assert_eq!(outcome.targets(), Some(MacroTargets::new(2063, 150, 57, 238)));
        assert!(calc.results_valid());
        assert_eq!(calc.valid_targets(), calc.targets());
    }

    #[test]
    fn test_incomplete_keeps_previous_targets_but_invalidates() {
        let mut calc = MacroCalculator::new().unwrap();
        fill(&mut calc);
        calc.calculate();

        calc.set_field(Step::Weight, "").unwrap();
        assert_eq!(calc.calculate(), MacroOutcome::Incomplete);

        assert!(!calc.results_valid());
        assert_eq!(calc.targets(), Some(MacroTargets::new(2063, 150, 57, 238)));
        assert_eq!(calc.valid_targets(), None);
    }

    #[test]
    fn test_accepted_extreme_values_compute() {
        let mut calc = MacroCalculator::new().unwrap();
        fill(&mut calc);
        calc.set_field(Step::Weight, "99999999999999999999").unwrap();
        calc.set_field(Step::Age, "5000000000").unwrap();
        calc.select_weight_goal(WeightGoal::Gain).unwrap();

        assert!(calc.calculate().is_complete());
        assert!(calc.results_valid());
        assert_eq!(calc.targets().unwrap().proteins, i64::MAX);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut calc = MacroCalculator::new().unwrap();
        let mut stepper = StepTracker::new();
        fill(&mut calc);
        stepper.advance();
        calc.calculate();

        calc.reset(&mut stepper);

        assert_eq!(calc.targets(), None);
        assert!(!calc.results_valid());
        assert_eq!(calc.selected_sex(), None);
        assert_eq!(calc.selected_weight_goal(), None);
        assert_eq!(calc.selected_activity_level(), None);
        assert!(!calc.form().inputs().is_complete());
        assert_eq!(stepper.current(), Step::Height);
    }

    #[test]
    fn test_reset_does_not_leak_field_listeners() {
        let mut calc = MacroCalculator::new().unwrap();
        let mut stepper = StepTracker::new();
        for _ in 0..3 {
            calc.reset(&mut stepper);
        }
        assert_eq!(calc.form().field(Step::Sex).listener_count(), 1);
        assert_eq!(calc.form().field(Step::ActivityLevel).listener_count(), 1);
    }

    #[test]
    fn test_numeric_steps_have_no_suggestions() {
        let calc = MacroCalculator::new().unwrap();
        assert!(calc.suggestions(Step::Height).is_none());
        assert_eq!(
            calc.suggestions(Step::Sex).unwrap().current(),
            vec!["Male", "Female"]
        );
    }
}
