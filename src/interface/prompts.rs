use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::calculator::MacroCalculator;
use crate::cli::CalcArgs;
use crate::error::{DashError, Result};
use crate::form::{display_choice, Step, StepTracker, Stepper};
use crate::models::{ActivityLevel, PostDraft, Sex, WeightGoal};
use crate::posts::{DialogConfig, PostDialog};

/// Minimum Jaro-Winkler score for a "did you mean" hint.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Closest candidate to `input` (case-insensitive), if any is close enough.
pub fn closest_literal(input: &str, candidates: &[&'static str]) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    candidates
        .iter()
        .map(|c| (*c, jaro_winkler(&c.to_lowercase(), &input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c)
}

/// Parse an exact literal, adding a hint to the error when a close one exists.
pub fn parse_choice<T>(input: &str, candidates: &[&'static str]) -> Result<T>
where
    T: FromStr<Err = DashError>,
{
    input.parse::<T>().map_err(|err| match closest_literal(input, candidates) {
        Some(hint) => DashError::InvalidInput(format!(
            "'{}' is not valid, did you mean '{}'?",
            input, hint
        )),
        None => err,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for a numeric step, re-asking until the field pattern accepts.
fn prompt_text_step(calculator: &mut MacroCalculator, step: Step) -> Result<()> {
    let field = calculator.form().field(step);
    let value: String = Input::new()
        .with_prompt(step.prompt())
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            if field.accepts(input) {
                Ok(())
            } else {
                Err(format!("not a valid {}", step.label()))
            }
        })
        .interact_text()?;

    calculator.set_field(step, value.trim())
}

/// Prompt for a choice step using the feed's current suggestion list.
fn prompt_choice_step(calculator: &mut MacroCalculator, step: Step) -> Result<()> {
    let shown: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

    if let Some(feed) = calculator.suggestions(step) {
        let sink = Rc::clone(&shown);
        feed.subscribe(move |list| *sink.borrow_mut() = list.to_vec());
    }

    let items = shown.borrow().clone();
    if items.is_empty() {
        return Err(DashError::InvalidInput(format!("no choices for {}", step.label())));
    }

    let current = display_choice(Some(calculator.form().field(step).value()));
    let selection = Select::new()
        .with_prompt(step.prompt())
        .items(&items)
        .default(default_choice_index(&items, current))
        .interact()?;

    if let Some(feed) = calculator.suggestions(step) {
        feed.unsubscribe();
    }

    apply_choice(calculator, step, items[selection])
}

/// Position of the field's current value in `items`, or the first item.
fn default_choice_index(items: &[&str], current: Option<&str>) -> usize {
    current
        .and_then(|value| items.iter().position(|item| *item == value))
        .unwrap_or(0)
}

/// Store a choice value, going through the matching selection setter.
fn apply_choice(calculator: &mut MacroCalculator, step: Step, value: &str) -> Result<()> {
    match step {
        Step::Sex => calculator.select_sex(parse_choice::<Sex>(value, &Sex::literals())?),
        Step::WeightGoal => calculator
            .select_weight_goal(parse_choice::<WeightGoal>(value, &WeightGoal::literals())?),
        Step::ActivityLevel => calculator.select_activity_level(parse_choice::<ActivityLevel>(
            value,
            &ActivityLevel::literals(),
        )?),
        Step::Height | Step::Weight | Step::Age => calculator.set_field(step, value),
    }
}

fn preset_for(args: &CalcArgs, step: Step) -> Option<&str> {
    match step {
        Step::Height => args.height.as_deref(),
        Step::Weight => args.weight.as_deref(),
        Step::Age => args.age.as_deref(),
        Step::Sex => args.sex.as_deref(),
        Step::WeightGoal => args.goal.as_deref(),
        Step::ActivityLevel => args.activity.as_deref(),
    }
}

/// Walk the six steps, taking values from `args` and prompting for the rest.
pub fn collect_macro_inputs(
    calculator: &mut MacroCalculator,
    tracker: &mut StepTracker,
    args: &CalcArgs,
) -> Result<()> {
    tracker.reset();
    loop {
        let step = tracker.current();
        match preset_for(args, step) {
            Some(value) => apply_choice(calculator, step, value.trim())?,
            None => match step {
                Step::Sex | Step::WeightGoal | Step::ActivityLevel => {
                    prompt_choice_step(calculator, step)?
                }
                Step::Height | Step::Weight | Step::Age => prompt_text_step(calculator, step)?,
            },
        }

        if tracker.is_last() {
            return Ok(());
        }
        tracker.advance();
    }
}

/// Terminal add-post dialog. Fields given up front are not asked again.
#[derive(Debug, Clone, Default)]
pub struct PromptDialog {
    pub title: Option<String>,
    pub category: Option<String>,
    pub body: Option<String>,
}

impl PromptDialog {
    fn ask(prompt: &str, preset: &Option<String>, allow_empty: bool) -> Result<String> {
        if let Some(value) = preset {
            return Ok(value.clone());
        }
        Ok(Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(allow_empty)
            .interact_text()?)
    }
}

impl PostDialog for PromptDialog {
    fn open(&mut self, config: &DialogConfig) -> Result<Option<PostDraft>> {
        // Pixel width scaled down to terminal columns.
        let rule = "─".repeat((config.width / 10).clamp(10, 100) as usize);
        println!("{}", rule);
        println!("{}", config.title);
        println!("{}", rule);

        let title = Self::ask("Title", &self.title, false)?;
        let category = Self::ask("Category", &self.category, false)?;
        let body = Self::ask("Body", &self.body, true)?;

        if !prompt_yes_no("Save post?", true)? {
            return Ok(None);
        }
        Ok(Some(PostDraft::new(title, category, body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_choice_follows_current_value() {
        let levels = ActivityLevel::literals();
        assert_eq!(default_choice_index(&levels, Some("Very Active")), 3);
        assert_eq!(default_choice_index(&levels, None), 0);
        assert_eq!(default_choice_index(&levels, display_choice(Some(""))), 0);
    }

    #[test]
    fn test_closest_literal_finds_typo() {
        let levels = ActivityLevel::literals();
        assert_eq!(closest_literal("moderatly active", &levels), Some("Moderately Active"));
        assert_eq!(closest_literal("femal", &Sex::literals()), Some("Female"));
        assert_eq!(closest_literal("zzzz", &Sex::literals()), None);
    }

    #[test]
    fn test_parse_choice_hint() {
        let err = parse_choice::<WeightGoal>("gain", &WeightGoal::literals()).unwrap_err();
        assert!(err.to_string().contains("did you mean 'Gain'"));

        let ok = parse_choice::<WeightGoal>("Lose", &WeightGoal::literals()).unwrap();
        assert_eq!(ok, WeightGoal::Lose);
    }

    #[test]
    fn test_collect_with_all_presets_needs_no_prompt() {
        let mut calc = MacroCalculator::new().unwrap();
        let mut tracker = StepTracker::new();
        let args = CalcArgs {
            height: Some("70".to_string()),
            weight: Some("150".to_string()),
            age: Some("25".to_string()),
            sex: Some("Male".to_string()),
            goal: Some("Gain".to_string()),
            activity: Some("Sedentary".to_string()),
        };

        collect_macro_inputs(&mut calc, &mut tracker, &args).unwrap();

        assert!(tracker.is_last());
        assert_eq!(calc.selected_weight_goal(), Some(WeightGoal::Gain));
        assert_eq!(calc.calculate().targets().unwrap().calories, 2563);
    }

    #[test]
    fn test_collect_rejects_bad_preset() {
        let mut calc = MacroCalculator::new().unwrap();
        let mut tracker = StepTracker::new();
        let args = CalcArgs {
            height: Some("seventy".to_string()),
            ..CalcArgs::default()
        };

        let err = collect_macro_inputs(&mut calc, &mut tracker, &args).unwrap_err();
        assert!(matches!(err, DashError::InvalidInput(_)));
    }
}
