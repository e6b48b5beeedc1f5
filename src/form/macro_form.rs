use crate::error::Result;
use crate::form::field::FormField;
use crate::form::stepper::Step;
use crate::models::MacroInputs;

/// The six calculator fields, one per [`Step`].
#[derive(Debug)]
pub struct MacroForm {
    fields: Vec<FormField>,
}

impl MacroForm {
    pub fn new() -> Result<Self> {
        let fields = Step::ALL
            .iter()
            .map(|step| FormField::new(step.label(), step.pattern()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { fields })
    }

    pub fn field(&self, step: Step) -> &FormField {
        &self.fields[step.index()]
    }

    pub fn field_mut(&mut self, step: Step) -> &mut FormField {
        &mut self.fields[step.index()]
    }

    /// Shorthand for `field_mut(step).set_value(value)`.
    pub fn set(&mut self, step: Step, value: &str) -> Result<()> {
        self.field_mut(step).set_value(value)
    }

    /// Empty every field.
    pub fn clear(&mut self) {
        for field in self.fields.iter_mut() {
            field.clear();
        }
    }

    /// Read the current values. Blank values become `None`.
    pub fn inputs(&self) -> MacroInputs {
        MacroInputs {
            height: self.parsed(Step::Height),
            weight: self.parsed(Step::Weight),
            age: self.parsed(Step::Age),
            sex: self.parsed(Step::Sex),
            weight_goal: self.parsed(Step::WeightGoal),
            activity_level: self.parsed(Step::ActivityLevel),
        }
    }

    fn parsed<T: std::str::FromStr>(&self, step: Step) -> Option<T> {
        self.field(step).present_value()?.parse().ok()
    }
}
